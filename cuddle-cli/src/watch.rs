//! `cuddle watch`: re-analyze a document whenever it changes on disk.
//!
//! The file's modification time is polled; every observed change is an edit
//! trigger for the debounce scheduler, so a burst of saves costs one run. The
//! first run is a focus trigger and happens immediately.

use crate::error::CliError;
use crate::session::{Document, Session};
use cuddle::pipeline::scheduler::{request, RecomputeScheduler, Trigger, DEFAULT_QUIET_PERIOD};
use log::{debug, error};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// One-line description of a run.
pub fn summary(document: &Document) -> String {
    let analysis = &document.analysis;
    format!(
        "{}: {} lines, {} blocks, {} unclosed, {} annotations",
        document.path.display(),
        analysis.line_count,
        analysis.spans.len(),
        analysis.hanging,
        analysis.annotations.len()
    )
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

/// Watch `path` until interrupted.
pub fn run_watch(session: Session, path: &Path) -> Result<(), CliError> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(watch(session, path.to_path_buf()))
}

async fn watch(session: Session, path: PathBuf) -> Result<(), CliError> {
    // Fail fast on an unreadable document instead of logging every run.
    session.open(&path)?;

    let target = path.clone();
    let tx = RecomputeScheduler::spawn(DEFAULT_QUIET_PERIOD, move || match session.open(&target) {
        Ok(document) => println!("{}", summary(&document)),
        Err(err) => error!("{err}"),
    });
    request(&tx, Trigger::Focused);

    let mut last_modified = modified(&path);
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    let interrupted = tokio::signal::ctrl_c();
    tokio::pin!(interrupted);
    loop {
        tokio::select! {
            _ = &mut interrupted => {
                debug!("interrupted, stopping watch");
                return Ok(());
            }
            _ = ticker.tick() => {
                let current = modified(&path);
                if current != last_modified {
                    debug!("{} changed", path.display());
                    last_modified = current;
                    request(&tx, Trigger::Edited);
                }
            }
        }
    }
}
