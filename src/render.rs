//! Span rendering
//!
//! Turns completed spans into style-tagged annotations.
//!
//! # Logic
//!
//! 1. Walk the spans in start-line order with a style counter that advances
//!    (modulo [`PALETTE_SIZE`]) before each span, so the first span of a run is
//!    painted at level 1 and colours follow document order rather than depth
//! 2. For every line of a span:
//!    - a marked line (start, split or strict end) gets an `arm` over its
//!      leading token, or over the whole line when the whole-line policy covers
//!      its mark; every marked line after the start carries hover text quoting
//!      the opening it continues or closes
//!    - a body line gets a `bar` connector at the span's column
//!    - the end line of a lenient span is the last indented body line, so it
//!      gets a `barHook` connector instead of an arm
//! 3. Connectors are only emitted when connecting lines are enabled

pub mod annotation;
pub mod groups;
pub mod palette;
pub mod token;

pub use annotation::{Annotation, AnnotationKind, Position, Range, PALETTE_SIZE};
pub use groups::{AnnotationGroups, StyleGroup};
pub use palette::{Palette, Rgb, StyleDefinition};

use crate::indent::line::{char_len, leading_whitespace_end};
use crate::indent::spans::{IndentSpan, Mark};
use crate::settings::Settings;
use token::{token_end, Delimiter};

/// Render every span of a run.
pub fn render_spans(spans: &[IndentSpan], lines: &[&str], settings: &Settings) -> Vec<Annotation> {
    SpanRenderer::new(lines, settings).render(spans)
}

struct SpanRenderer<'a> {
    lines: &'a [&'a str],
    settings: &'a Settings,
    delimiters: Vec<Delimiter>,
    annotations: Vec<Annotation>,
}

impl<'a> SpanRenderer<'a> {
    fn new(lines: &'a [&'a str], settings: &'a Settings) -> Self {
        SpanRenderer {
            lines,
            settings,
            delimiters: Delimiter::parse_all(&settings.display.delimiters),
            annotations: Vec::new(),
        }
    }

    fn render(mut self, spans: &[IndentSpan]) -> Vec<Annotation> {
        let mut level = 0;
        for span in spans {
            level = (level + 1) % PALETTE_SIZE;
            self.render_span(span, level);
        }
        self.annotations
    }

    fn render_span(&mut self, span: &IndentSpan, level: usize) {
        let lenient = !self.settings.detection.require_closing_text;
        let connectors = self.settings.display.draw_connecting_lines;
        let last_line = span.end_line.min(self.lines.len().saturating_sub(1));

        for line_number in span.start_line..=last_line {
            match span.mark(line_number) {
                Some(Mark::End) if lenient => {
                    if connectors {
                        self.annotations.push(Annotation::connector(
                            AnnotationKind::BarHook,
                            line_number,
                            span.column,
                            level,
                        ));
                    }
                }
                Some(mark) => {
                    let arm = self.arm(span, line_number, mark, level);
                    self.annotations.push(arm);
                }
                None => {
                    if connectors {
                        self.annotations.push(Annotation::connector(
                            AnnotationKind::Bar,
                            line_number,
                            span.column,
                            level,
                        ));
                    }
                }
            }
        }
    }

    fn arm(&self, span: &IndentSpan, line_number: usize, mark: Mark, level: usize) -> Annotation {
        let line = self.lines[line_number];
        let start = leading_whitespace_end(line);
        let end = if self.settings.display.highlight_whole_line.covers(mark) {
            char_len(line.trim_end()).max(start)
        } else {
            token_end(line, start, &self.delimiters)
        };

        let hover = (mark != Mark::Start).then(|| {
            let reference = span.reference_line(line_number);
            format!("Line {}: {}", reference + 1, self.lines[reference].trim())
        });

        Annotation::arm(Range::on_line(line_number, start, end), level, hover)
    }
}
