//! Indentation analysis
//!
//! The first two stages of a run live here: [`measure`] turns raw text into an
//! [`IndentationTable`](measure::IndentationTable), and [`spans`] rebuilds the
//! block structure that table implies.

pub mod line;
pub mod measure;
pub mod spans;

pub use line::split_lines;
pub use measure::{measure_indentation, IndentationTable};
pub use spans::{detect_spans, Detection, IndentSpan};
