//! Configuration loading
//!
//! `defaults/moka.default.toml` is embedded into the crate and always forms the first layer.
//! Callers layer a user file and single-key overrides on top via [`Loader`] before deserializing
//! into [`MokaConfig`].

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/moka.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct MokaConfig {
    pub lexer: LexerConfig,
    pub log: LogConfig,
}

/// Knobs applied when building a [`Lexer`](crate::moka::lexing::Lexer).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LexerConfig {
    pub strip_whitespace: bool,
    pub anonymous_source_extension: String,
    /// Stable-sort rules by priority when assembling them from files.
    pub sort_by_priority: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

/// Layers user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error at build time.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<MokaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}
