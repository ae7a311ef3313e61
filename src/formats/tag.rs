//! Line-oriented text formats
//!
//! `tag` prints one annotation per line:
//!
//! ```text
//! 0:0..0:2 arm level=1
//! 1:0..1:1 bar level=1 column=0
//! 2:0..2:4 arm level=1 hover="Line 1: if x:"
//! ```
//!
//! `spans` prints one span per line, in start-line order:
//!
//! ```text
//! lines 0..=4 column=0 splits=[2]
//! ```

use super::registry::{FormatError, Formatter};
use crate::indent::IndentSpan;
use crate::pipeline::Analysis;
use crate::render::Annotation;
use std::fmt::Write;

/// Serialize annotations in the `tag` layout.
pub fn serialize_annotations(annotations: &[Annotation]) -> String {
    let mut output = String::new();
    for annotation in annotations {
        let _ = write!(
            output,
            "{} {} level={}",
            annotation.range, annotation.kind, annotation.level
        );
        if let Some(column) = annotation.connector_column {
            let _ = write!(output, " column={column}");
        }
        if let Some(hover) = &annotation.hover {
            let _ = write!(output, " hover={hover:?}");
        }
        output.push('\n');
    }
    output
}

/// Serialize spans in the `spans` layout.
pub fn serialize_spans(spans: &[IndentSpan]) -> String {
    let mut output = String::new();
    for span in spans {
        let _ = writeln!(
            output,
            "lines {}..={} column={} splits={:?}",
            span.start_line, span.end_line, span.column, span.splits
        );
    }
    output
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, analysis: &Analysis) -> Result<String, FormatError> {
        Ok(serialize_annotations(&analysis.annotations))
    }

    fn description(&self) -> &str {
        "One annotation per line"
    }
}

pub struct SpansFormatter;

impl Formatter for SpansFormatter {
    fn name(&self) -> &str {
        "spans"
    }

    fn serialize(&self, analysis: &Analysis) -> Result<String, FormatError> {
        Ok(serialize_spans(&analysis.spans))
    }

    fn description(&self) -> &str {
        "One detected block per line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;

    #[test]
    fn tag_layout() {
        let analysis = Pipeline::default().run("if x:\n    a\nelse:\n    b\nend", 4);
        insta::assert_snapshot!(serialize_annotations(&analysis.annotations), @r#"
        0:0..0:2 arm level=1
        1:0..1:1 bar level=1 column=0
        2:0..2:4 arm level=1 hover="Line 1: if x:"
        3:0..3:1 bar level=1 column=0
        4:0..4:3 arm level=1 hover="Line 3: else:"
        "#);
    }

    #[test]
    fn spans_layout() {
        let analysis = Pipeline::default().run("def f():\n    if a:\n        x\n    end\nend", 4);
        insta::assert_snapshot!(serialize_spans(&analysis.spans), @r"
        lines 0..=4 column=0 splits=[]
        lines 1..=3 column=4 splits=[]
        ");
    }
}
