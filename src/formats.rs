//! Output formats for analysis results
//!
//! Hosts that consume text instead of Rust values pick a format by name:
//! - `tag` and `spans`: line-oriented, human readable, stable for snapshots
//! - `json` and `yaml`: the full [`Analysis`](crate::Analysis) structure

pub mod registry;
pub mod structured;
pub mod tag;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use tag::{serialize_annotations, serialize_spans, SpansFormatter, TagFormatter};
