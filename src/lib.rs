//! # cuddle
//!
//! Indentation-driven block detection for plain text.
//!
//! cuddle knows nothing about the grammar of the text it reads. It measures the
//! leading whitespace of every line, reconstructs the nested blocks that the
//! indentation implies, and turns those blocks into style-tagged annotations a
//! host can paint: highlighted tokens on the lines that open, continue or close
//! a block, and vertical connectors on the lines in between.
//!
//! The work happens in three stages, each a module of its own:
//!
//! - [`indent::measure`] turns text into one indentation column per line
//! - [`indent::spans`] rebuilds the block structure with an indentation stack
//! - [`render`] turns blocks into [`render::Annotation`]s grouped by style level
//!
//! [`pipeline::Pipeline`] chains the three, and [`formats`] serializes the
//! result for hosts that consume text rather than Rust values.
//!
//! ## Testing
//!
//! Helpers for building documents in tests live in the [`testing`] module.

pub mod formats;
pub mod indent;
pub mod pipeline;
pub mod render;
pub mod settings;
pub mod testing;

pub use pipeline::{Analysis, Pipeline};
pub use settings::{DetectionSettings, DisplaySettings, Settings, WholeLine};
