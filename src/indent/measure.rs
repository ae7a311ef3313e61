//! Indentation measurement
//!
//! Converts a document's lines into one indentation column per line.
//!
//! # Logic
//!
//! 1. Walk the lines top to bottom
//! 2. For a non-blank line, count its leading run: a space is 1 column, a tab is
//!    `tab_size` columns, and the run stops at the first other character
//! 3. A blank line (empty after trimming its end) is not measured; it joins the
//!    current run of blank lines
//! 4. When the next non-blank line is measured, the pending blank run is
//!    backfilled with the larger of the indentation above it and that line's
//!    indentation
//! 5. A blank run at the end of the document keeps the indentation above it
//!
//! Blank lines therefore never break a block on their own: a blank line inside
//! an indented body measures at the body's depth even though it carries no
//! characters.

use super::line::{indentation_width, is_blank};
use serde::Serialize;
use std::ops::Index;

/// One effective indentation column per line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IndentationTable(Vec<usize>);

impl IndentationTable {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Indentation of `line`, or `None` past the end of the document.
    pub fn get(&self, line: usize) -> Option<usize> {
        self.0.get(line).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Index<usize> for IndentationTable {
    type Output = usize;

    fn index(&self, line: usize) -> &usize {
        &self.0[line]
    }
}

/// Measure every line of a document.
///
/// `tab_size` must be at least 1; hosts resolve it with
/// [`tab_size_from`](crate::settings::tab_size_from) first.
pub fn measure_indentation(lines: &[&str], tab_size: usize) -> IndentationTable {
    let mut columns = Vec::with_capacity(lines.len());
    // Indentation of the closest non-blank line above the current position
    let mut above = 0;
    // First line of the blank run awaiting a backfill
    let mut pending_blank: Option<usize> = None;

    for line in lines {
        if is_blank(line) {
            pending_blank.get_or_insert(columns.len());
            columns.push(above);
            continue;
        }

        let measured = indentation_width(line, tab_size);
        if let Some(start) = pending_blank.take() {
            let fill = above.max(measured);
            for column in &mut columns[start..] {
                *column = fill;
            }
        }
        columns.push(measured);
        above = measured;
    }

    IndentationTable(columns)
}
