//! Run orchestration
//!
//! A run is text → lines → indentation table → spans → annotations. Nothing is
//! retained between runs: every call allocates fresh tables and stacks, so the
//! same text and settings always produce the same [`Analysis`].
//!
//! Deciding *when* to run belongs to the host; [`scheduler`] provides the
//! debounce capability hosts use for that.

pub mod scheduler;

use crate::indent::{detect_spans, measure_indentation, split_lines, IndentSpan};
use crate::render::{render_spans, Annotation, AnnotationGroups};
use crate::settings::{usable_tab_size, Settings};
use log::debug;
use serde::Serialize;

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub line_count: usize,
    pub spans: Vec<IndentSpan>,
    /// Spans that never closed and were left out of `spans`.
    pub hanging: usize,
    pub annotations: Vec<Annotation>,
}

impl Analysis {
    /// Annotations partitioned the way hosts apply them.
    pub fn groups(&self) -> AnnotationGroups {
        self.annotations.iter().cloned().collect()
    }
}

/// Runs the measure → detect → render chain under one set of settings.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    settings: Settings,
}

impl Pipeline {
    pub fn new(settings: Settings) -> Self {
        Pipeline { settings }
    }

    /// Analyze a whole document. A `tab_size` of 0 means 4.
    pub fn run(&self, text: &str, tab_size: usize) -> Analysis {
        let lines = split_lines(text);
        let tab_size = usable_tab_size(tab_size);
        debug!("analyzing {} lines (tab size {})", lines.len(), tab_size);

        let indentation = measure_indentation(&lines, tab_size);
        let detection = detect_spans(&lines, &indentation, &self.settings.detection);
        debug!(
            "measured {} spans, with {} hanging",
            detection.spans.len(),
            detection.hanging
        );

        let annotations = render_spans(&detection.spans, &lines, &self.settings);
        debug!("built {} annotations", annotations.len());

        Analysis {
            line_count: lines.len(),
            spans: detection.spans,
            hanging: detection.hanging,
            annotations,
        }
    }
}

/// Analyze `text` with `settings` in one call.
pub fn analyze(text: &str, tab_size: usize, settings: &Settings) -> Analysis {
    Pipeline::new(settings.clone()).run(text, tab_size)
}
