//! Layered settings for the CLI.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `SLAWATCH_*` environment variables. Command line flags are
//! applied on top by the binary.
//!
//! ```toml
//! input = "series.json"
//! precision = 5
//! log_level = "warn"
//! include_states = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SLAWATCH";

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Series document to read.
    pub input: PathBuf,
    /// Digits printed after the decimal point.
    pub precision: usize,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Print per-sample states along with the figures.
    pub include_states: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("series.json"),
            precision: 5,
            log_level: "warn".to_string(),
            include_states: false,
        }
    }
}

impl Settings {
    /// Load settings from defaults, the optional file and the process
    /// environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(config_path: Option<&Path>, env: Environment) -> Result<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("input", defaults.input.to_string_lossy().into_owned())?
            .set_default("precision", defaults.precision as i64)?
            .set_default("log_level", defaults.log_level)?
            .set_default("include_states", defaults.include_states)?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to load configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(config::Map::new()))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::load_with_env(None, no_env()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "precision = 3\ninput = \"demo.json\"").unwrap();

        let settings = Settings::load_with_env(Some(file.path()), no_env()).unwrap();
        assert_eq!(settings.precision, 3);
        assert_eq!(settings.input, PathBuf::from("demo.json"));
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "precision = 3").unwrap();

        let mut vars = config::Map::new();
        vars.insert("SLAWATCH_PRECISION".to_string(), "7".to_string());
        vars.insert("SLAWATCH_INCLUDE_STATES".to_string(), "true".to_string());
        let env = Environment::with_prefix(ENV_PREFIX).source(Some(vars));

        let settings = Settings::load_with_env(Some(file.path()), env).unwrap();
        assert_eq!(settings.precision, 7);
        assert!(settings.include_states);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Settings::load_with_env(Some(Path::new("/nonexistent/slawatch.toml")), no_env())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load configuration"));
    }
}
