//! Errors surfaced by the `cuddle` binary.

use cuddle::formats::FormatError;
use cuddle_config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
