//! Configuration loader for kensa.
//!
//! `defaults/kensa.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`KensaConfig`].

use crate::kensa::parsing::ParseOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/kensa.default.toml");

/// Top-level configuration consumed by kensa applications.
#[derive(Debug, Clone, Deserialize)]
pub struct KensaConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

/// Mirrors [`ParseOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub skip_leading_keyword: bool,
    pub max_depth: usize,
    pub max_input_len: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered formatter.
    pub format: String,
}

impl From<&ParserConfig> for ParseOptions {
    fn from(config: &ParserConfig) -> Self {
        ParseOptions {
            skip_leading_keyword: config.skip_leading_keyword,
            max_depth: config.max_depth,
            max_input_len: config.max_input_len,
        }
    }
}

impl KensaConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::from(&self.parser)
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

    /// Override one dotted key, e.g. `parser.max_depth`. Overrides win over every file.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<KensaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<KensaConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kensa::parsing::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_LEN};
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.parser.skip_leading_keyword);
        assert_eq!(config.output.format, "treeviz");
        assert_eq!(config.parse_options(), ParseOptions::default());
        assert_eq!(config.parser.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.parser.max_input_len, DEFAULT_MAX_INPUT_LEN);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parser.skip_leading_keyword", false)
            .expect("override to apply")
            .set_override("output.format", "json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.parser.skip_leading_keyword);
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[parser]\nmax_depth = 8").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.parser.max_depth, 8);
        assert!(config.parser.skip_leading_keyword);
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new()
            .with_file("/definitely/not/here/kensa.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn overrides_win_over_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[parser]\nmax_depth = 8").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .set_override("parser.max_depth", 3u64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parse_options().max_depth, 3);
    }
}
