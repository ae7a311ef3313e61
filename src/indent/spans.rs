//! Span detection
//!
//!     Rebuilds the nested blocks implied by an indentation table. There is no
//!     grammar involved: a line opens a block when the line after it is indented
//!     deeper, and a block ends when indentation comes back down.
//!
//!     The detector is a classic indentation stack. Spans are pushed in the order
//!     they open; a dedent pops entries until it reaches the depth of the current
//!     line. What happens to the popped entries depends on the closing policy.
//!
//! Algorithm
//!
//!     For each line `i`:
//!
//!     1. Opening test: the line has visible content, line `i + 1` is indented
//!        deeper, and the trimmed text passes the allow/deny prefix filters.
//!     2. Dedent test, when line `i - 1` is indented deeper than line `i`:
//!        - Strict (closing text required, only for lines with content): pop
//!          until a span at or above this depth turns up. A span at exactly this
//!          column is closed at `i`, or, when line `i` is itself an opener
//!          (`else:` after `if x:`), continued: `i` is recorded as a split and the
//!          span goes back on the stack. A shallower span goes back untouched.
//!          Deeper spans never saw their closing line and are discarded.
//!        - Lenient (indentation alone ends a block): every span at or deeper
//!          than this column is closed at `i - 1`, the last line still indented.
//!     3. If line `i` is still an opener, push a new span at its column.
//!
//!     At the end of the document lenient mode closes whatever is open at the
//!     last line, while strict mode drops it: those blocks never terminated.

use super::line::{has_content, has_visible_content};
use super::measure::IndentationTable;
use crate::settings::DetectionSettings;
use log::trace;
use serde::Serialize;
use std::cmp::Ordering;

/// One completed block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndentSpan {
    /// Indentation of the opening line.
    pub column: usize,
    pub start_line: usize,
    pub end_line: usize,
    /// Ascending lines, strictly between start and end, where the block was
    /// continued at its own column.
    pub splits: Vec<usize>,
}

/// Role of a line within a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Start,
    Split,
    End,
}

impl IndentSpan {
    pub fn contains_line(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }

    /// How `line` participates in the span, or `None` for body lines and lines
    /// outside the span.
    pub fn mark(&self, line: usize) -> Option<Mark> {
        if line == self.start_line {
            Some(Mark::Start)
        } else if line == self.end_line {
            Some(Mark::End)
        } else if self.splits.binary_search(&line).is_ok() {
            Some(Mark::Split)
        } else {
            None
        }
    }

    /// The opening point a marked line continues or closes: the start line for
    /// the first split, the previous split for later ones, and the last split
    /// (or the start line) for the end line.
    pub fn reference_line(&self, line: usize) -> usize {
        let earlier = self.splits.partition_point(|&split| split < line);
        match earlier {
            0 => self.start_line,
            n => self.splits[n - 1],
        }
    }
}

/// A span still waiting for its closing line.
#[derive(Debug)]
struct OpenSpan {
    column: usize,
    start_line: usize,
    splits: Vec<usize>,
}

impl OpenSpan {
    fn new(column: usize, start_line: usize) -> Self {
        OpenSpan {
            column,
            start_line,
            splits: Vec::new(),
        }
    }

    fn close(self, end_line: usize) -> IndentSpan {
        IndentSpan {
            column: self.column,
            start_line: self.start_line,
            end_line,
            splits: self.splits,
        }
    }
}

/// Outcome of span detection for one document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Detection {
    /// Completed spans, ordered by start line.
    pub spans: Vec<IndentSpan>,
    /// Spans that never reached a closing line and were dropped.
    pub hanging: usize,
}

/// Detect every block of a document.
pub fn detect_spans(
    lines: &[&str],
    indentation: &IndentationTable,
    detection: &DetectionSettings,
) -> Detection {
    let mut detector = SpanDetector::new(detection, lines, indentation);
    for line_number in 0..lines.len() {
        detector.process_line(line_number);
    }
    detector.finish()
}

struct SpanDetector<'a> {
    detection: &'a DetectionSettings,
    lines: &'a [&'a str],
    indentation: &'a IndentationTable,
    stack: Vec<OpenSpan>,
    completed: Vec<IndentSpan>,
    discarded: usize,
}

impl<'a> SpanDetector<'a> {
    fn new(
        detection: &'a DetectionSettings,
        lines: &'a [&'a str],
        indentation: &'a IndentationTable,
    ) -> Self {
        SpanDetector {
            detection,
            lines,
            indentation,
            stack: Vec::new(),
            completed: Vec::new(),
            discarded: 0,
        }
    }

    fn is_opening(&self, line_number: usize) -> bool {
        let line = self.lines[line_number];
        if !has_visible_content(line) {
            return false;
        }
        match self.indentation.get(line_number + 1) {
            Some(next) if next > self.indentation[line_number] => {
                self.detection.admits(line.trim_start())
            }
            _ => false,
        }
    }

    fn process_line(&mut self, line_number: usize) {
        let this_indentation = self.indentation[line_number];
        let mut opening = self.is_opening(line_number);

        let dedented = line_number > 0 && self.indentation[line_number - 1] > this_indentation;
        if dedented {
            if self.detection.require_closing_text {
                if has_content(self.lines[line_number]) {
                    opening = self.close_strict(line_number, this_indentation, opening);
                }
            } else {
                self.close_lenient(line_number, this_indentation);
            }
        }

        if opening {
            self.stack.push(OpenSpan::new(this_indentation, line_number));
        }
    }

    /// Pops down to `column`. Returns whether the line is still an opener, which
    /// it stops being once it has been consumed as a split.
    fn close_strict(&mut self, line_number: usize, column: usize, opening: bool) -> bool {
        while let Some(mut span) = self.stack.pop() {
            match span.column.cmp(&column) {
                Ordering::Equal => {
                    if opening {
                        span.splits.push(line_number);
                        self.stack.push(span);
                        return false;
                    }
                    self.completed.push(span.close(line_number));
                    break;
                }
                Ordering::Less => {
                    self.stack.push(span);
                    break;
                }
                Ordering::Greater => {
                    trace!(
                        "discarding unterminated span at column {} from line {}",
                        span.column,
                        span.start_line
                    );
                    self.discarded += 1;
                }
            }
        }
        opening
    }

    fn close_lenient(&mut self, line_number: usize, column: usize) {
        while self.stack.last().is_some_and(|span| span.column >= column) {
            if let Some(span) = self.stack.pop() {
                self.completed.push(span.close(line_number - 1));
            }
        }
    }

    fn finish(mut self) -> Detection {
        let mut hanging = self.discarded;
        if self.detection.require_closing_text {
            hanging += self.stack.len();
        } else if let Some(last_line) = self.lines.len().checked_sub(1) {
            while let Some(span) = self.stack.pop() {
                self.completed.push(span.close(last_line));
            }
        }

        self.completed.sort_by_key(|span| span.start_line);
        Detection {
            spans: self.completed,
            hanging,
        }
    }
}
