//! Shared configuration loader for the cuddle toolchain.
//!
//! `defaults/cuddle.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] and resolve per-document [`Settings`] from
//! the resulting [`CuddleConfig`].
//!
//! A key whose value has the wrong shape is reported through `log` and replaced
//! by its default; a bad option never stops a run. Only unreadable or
//! unparsable sources are errors, and those surface from [`Loader::build`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use cuddle::settings::{tab_size_from, DetectionSettings, DisplaySettings, Settings, WholeLine};
use log::warn;
use serde::de::DeserializeOwned;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/cuddle.default.toml");

/// Layered configuration, resolved into [`Settings`] on demand.
#[derive(Debug, Clone)]
pub struct CuddleConfig {
    config: Config,
}

impl CuddleConfig {
    /// Settings for documents without a recognised extension.
    pub fn settings(&self) -> Settings {
        self.settings_for(None)
    }

    /// Settings for a document with the given file extension.
    ///
    /// Keys under `overrides.<extension>` win over the top-level keys.
    pub fn settings_for(&self, extension: Option<&str>) -> Settings {
        let detection_defaults = DetectionSettings::default();
        let display_defaults = DisplaySettings::default();

        Settings {
            detection: DetectionSettings {
                only_start_with: self.lookup(
                    "detection.only_start_with",
                    extension,
                    detection_defaults.only_start_with,
                ),
                never_start_with: self.lookup(
                    "detection.never_start_with",
                    extension,
                    detection_defaults.never_start_with,
                ),
                require_closing_text: self.lookup(
                    "detection.require_closing_text",
                    extension,
                    detection_defaults.require_closing_text,
                ),
            },
            display: DisplaySettings {
                draw_connecting_lines: self.lookup(
                    "display.draw_connecting_lines",
                    extension,
                    display_defaults.draw_connecting_lines,
                ),
                highlight_whole_line: self.lookup::<WholeLine>(
                    "display.highlight_whole_line",
                    extension,
                    display_defaults.highlight_whole_line,
                ),
                delimiters: self.lookup("display.delimiters", extension, display_defaults.delimiters),
            },
        }
    }

    /// Tab width from `editor.tab_size`, falling back to 4.
    pub fn tab_size(&self) -> usize {
        self.tab_size_for(None)
    }

    /// Tab width for a document with the given file extension.
    ///
    /// `overrides.<extension>.editor.tab_size` wins over `editor.tab_size`.
    pub fn tab_size_for(&self, extension: Option<&str>) -> usize {
        let raw = extension
            .and_then(|extension| self.get::<String>(&format!("overrides.{extension}.editor.tab_size")))
            .or_else(|| self.get::<String>("editor.tab_size"));
        tab_size_from(raw.as_deref())
    }

    fn lookup<T: DeserializeOwned>(&self, key: &str, extension: Option<&str>, default: T) -> T {
        if let Some(extension) = extension {
            let scoped = format!("overrides.{extension}.{key}");
            if let Some(value) = self.get(&scoped) {
                return value;
            }
        }
        self.get(key).unwrap_or(default)
    }

    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.config.get::<T>(key) {
            Ok(value) => Some(value),
            Err(ConfigError::NotFound(_)) => None,
            Err(err) => {
                warn!("ignoring configuration key '{key}': {err}");
                None
            }
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder.
    pub fn build(self) -> Result<CuddleConfig, ConfigError> {
        let config = self.builder.build()?;
        Ok(CuddleConfig { config })
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CuddleConfig, ConfigError> {
    Loader::new().build()
}
