//! Configuration and document loading shared by every subcommand.

use crate::error::CliError;
use clap::ArgMatches;
use cuddle::{Analysis, Pipeline, Settings};
use cuddle_config::{CuddleConfig, Loader};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved configuration plus the command-line overrides that apply on top.
#[derive(Debug, Clone)]
pub struct Session {
    config: CuddleConfig,
    lenient: bool,
    /// `--tab-size`, which wins over every configuration layer
    tab_size: Option<usize>,
}

/// A document read from disk together with its analysis.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
    pub tab_size: usize,
    pub analysis: Analysis,
}

impl Session {
    pub fn new(config: CuddleConfig, lenient: bool) -> Self {
        Session {
            config,
            lenient,
            tab_size: None,
        }
    }

    /// Build a session from the global `--config`, `--tab-size` and
    /// `--lenient` options.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        let mut loader = Loader::new();
        if let Some(path) = matches.get_one::<PathBuf>("config") {
            debug!("layering configuration from {}", path.display());
            loader = loader.with_file(path);
        }
        let mut session = Session::new(loader.build()?, matches.get_flag("lenient"));
        session.tab_size = matches
            .get_one::<u64>("tab-size")
            .and_then(|&size| usize::try_from(size).ok());
        Ok(session)
    }

    /// Settings for `path`, honoring per-extension overrides. `--lenient`
    /// wins over every configuration layer.
    pub fn settings_for(&self, path: &Path) -> Settings {
        let mut settings = self.config.settings_for(extension_of(path));
        if self.lenient {
            settings.detection.require_closing_text = false;
        }
        settings
    }

    /// Tab width for `path`, honoring per-extension overrides.
    pub fn tab_size_for(&self, path: &Path) -> usize {
        self.tab_size
            .unwrap_or_else(|| self.config.tab_size_for(extension_of(path)))
    }

    /// Read and analyze the document at `path`.
    pub fn open(&self, path: &Path) -> Result<Document, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tab_size = self.tab_size_for(path);
        let analysis = Pipeline::new(self.settings_for(path)).run(&text, tab_size);
        Ok(Document {
            path: path.to_path_buf(),
            text,
            tab_size,
            analysis,
        })
    }
}

fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

impl Document {
    /// Display name used in titles and summaries.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown")
            .to_string()
    }
}
