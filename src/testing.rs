//! Test helpers
//!
//! Shared by unit tests and the integration tests under `tests/`: document
//! builders, ready-made settings for both closing modes, and checks for the
//! structural guarantees every detection result must satisfy.

use crate::indent::IndentSpan;
use crate::settings::{DetectionSettings, Settings};

/// Join lines with `\n`.
pub fn doc(lines: &[&str]) -> String {
    lines.join("\n")
}

/// Default settings: strict closing, comment openers denied.
pub fn strict_settings() -> Settings {
    Settings::default()
}

/// Default settings with lenient closing.
pub fn lenient_settings() -> Settings {
    Settings {
        detection: DetectionSettings {
            require_closing_text: false,
            ..DetectionSettings::default()
        },
        ..Settings::default()
    }
}

/// Two spans overlap partially when neither contains the other yet their
/// ranges intersect.
pub fn partially_overlaps(a: &IndentSpan, b: &IndentSpan) -> bool {
    let intersect = a.start_line <= b.end_line && b.start_line <= a.end_line;
    let a_contains_b = a.start_line <= b.start_line && b.end_line <= a.end_line;
    let b_contains_a = b.start_line <= a.start_line && a.end_line <= b.end_line;
    intersect && !a_contains_b && !b_contains_a
}

/// Panics unless every pair of spans is disjoint or nested, and nested spans
/// sit at a strictly deeper column than the span containing them.
pub fn assert_properly_nested(spans: &[IndentSpan]) {
    for (i, outer) in spans.iter().enumerate() {
        for inner in &spans[i + 1..] {
            assert!(
                !partially_overlaps(outer, inner),
                "spans overlap partially: {outer:?} and {inner:?}"
            );
            if outer.contains_line(inner.start_line) && inner.start_line != outer.start_line {
                assert!(
                    inner.column > outer.column,
                    "nested span is not deeper: {inner:?} inside {outer:?}"
                );
            }
        }
    }
}

/// Panics unless every span's splits ascend strictly and lie strictly inside it.
pub fn assert_splits_ordered(spans: &[IndentSpan]) {
    for span in spans {
        assert!(span.start_line < span.end_line, "empty span: {span:?}");
        assert!(
            span.splits.windows(2).all(|pair| pair[0] < pair[1]),
            "splits out of order: {span:?}"
        );
        assert!(
            span.splits
                .iter()
                .all(|&split| span.start_line < split && split < span.end_line),
            "split outside span: {span:?}"
        );
    }
}
