//! Debounced recompute scheduling
//!
//! Hosts tell the scheduler *that* something happened; the scheduler decides
//! when a recompute actually runs:
//!
//! - an edit schedules a run after a quiet period, and every later edit pushes
//!   that deadline back, so a burst of keystrokes costs one run
//! - a focus change runs immediately, dropping any pending deadline, so a newly
//!   shown document is never painted with stale annotations
//!
//! A run that has started always finishes; only the pending schedule can be
//! superseded. The worker is a background tokio task fed through a channel.
//! Triggers queued while a run is in progress are coalesced into one decision.
//! Once every sender has been dropped the worker flushes a pending edit run
//! and stops.

use log::{debug, warn};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;

/// Quiet period between the last edit and the recompute it triggers.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Why the host wants a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The document changed; recompute once edits settle.
    Edited,
    /// A different document became visible; recompute now.
    Focused,
}

/// Spawns the debounce worker.
pub struct RecomputeScheduler;

impl RecomputeScheduler {
    /// Start a worker that calls `recompute` according to the triggers it receives.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(quiet: Duration, recompute: F) -> UnboundedSender<Trigger>
    where
        F: FnMut() + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(quiet, recompute, rx));
        tx
    }
}

async fn run<F>(quiet: Duration, mut recompute: F, mut rx: UnboundedReceiver<Trigger>)
where
    F: FnMut() + Send + 'static,
{
    let mut deadline: Option<Instant> = None;
    loop {
        let trigger = match deadline {
            Some(at) => match tokio::time::timeout_at(at, rx.recv()).await {
                Ok(trigger) => trigger,
                Err(_) => {
                    deadline = None;
                    debug!("quiet period elapsed, recomputing");
                    recompute();
                    continue;
                }
            },
            None => rx.recv().await,
        };

        let Some(first) = trigger else {
            if deadline.is_some() {
                debug!("senders dropped with an edit pending, recomputing");
                recompute();
            }
            break;
        };

        // One focus anywhere in the backlog is enough to run now.
        let mut focused = first == Trigger::Focused;
        while let Ok(queued) = rx.try_recv() {
            focused |= queued == Trigger::Focused;
        }

        if focused {
            deadline = None;
            recompute();
        } else {
            deadline = Some(Instant::now() + quiet);
        }
    }
}

/// Send a trigger without blocking. Returns `false` once the worker has stopped.
pub fn request(tx: &UnboundedSender<Trigger>, trigger: Trigger) -> bool {
    if tx.send(trigger).is_ok() {
        return true;
    }
    warn!("recompute scheduler has stopped");
    false
}
