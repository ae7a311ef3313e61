//! Annotation types
//!
//! An annotation is a single styled region a host paints: a highlighted token
//! (`arm`), a vertical connector on a body line (`bar`), or the capped connector
//! on the last line of a lenient block (`barHook`).

use serde::Serialize;
use std::fmt;

/// Number of style levels; levels cycle through `0..PALETTE_SIZE`.
pub const PALETTE_SIZE: usize = 12;

/// A zero-based line/character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open character range. Annotations never span more than one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// A range on a single line covering `start..end`.
    pub fn on_line(line: usize, start: usize, end: usize) -> Self {
        Range {
            start: Position::new(line, start),
            end: Position::new(line, end),
        }
    }

    pub fn line(&self) -> usize {
        self.start.line
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnotationKind {
    /// Highlighted token or line segment on a marked line.
    Arm,
    /// Vertical connector on a body line.
    Bar,
    /// Connector with a short horizontal foot, closing a lenient block.
    BarHook,
}

impl AnnotationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AnnotationKind::Arm => "arm",
            AnnotationKind::Bar => "bar",
            AnnotationKind::BarHook => "barHook",
        }
    }

    pub fn is_connector(self) -> bool {
        !matches!(self, AnnotationKind::Arm)
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub range: Range,
    /// Style level in `0..PALETTE_SIZE`.
    pub level: usize,
    pub kind: AnnotationKind,
    /// Visual column the connector is drawn at. Set for connectors only; their
    /// `range` is a one-character anchor at the start of the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<String>,
}

impl Annotation {
    pub fn arm(range: Range, level: usize, hover: Option<String>) -> Self {
        Annotation {
            range,
            level,
            kind: AnnotationKind::Arm,
            connector_column: None,
            hover,
        }
    }

    /// A `bar` or `barHook` connector on `line` at visual `column`.
    pub fn connector(kind: AnnotationKind, line: usize, column: usize, level: usize) -> Self {
        Annotation {
            range: Range::on_line(line, 0, 1),
            level,
            kind,
            connector_column: Some(column),
            hover: None,
        }
    }

    pub fn line(&self) -> usize {
        self.range.line()
    }
}
