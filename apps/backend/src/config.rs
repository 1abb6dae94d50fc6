//! Server configuration loaded from environment variables.

use answer_core::{EngineSettings, ParseError, Tolerance};
use thiserror::Error;

/// Configuration errors raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid engine settings: {0}")]
    Engine(#[from] ParseError),
}

/// Server and engine configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub default_tolerance: Tolerance,
    pub max_input_chars: usize,
    pub engine: EngineSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_tolerance: Tolerance::default(),
            max_input_chars: 1000,
            engine: EngineSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mut engine = defaults.engine;
        if let Some(value) = lookup("DIFF_ALIGNMENT_THRESHOLD") {
            engine.diff_alignment_threshold = parse_value("DIFF_ALIGNMENT_THRESHOLD", &value)?;
        }
        if let Some(value) = lookup("CLOZE_MATCH_THRESHOLD") {
            engine.cloze_match_threshold = parse_value("CLOZE_MATCH_THRESHOLD", &value)?;
        }
        if let Some(mask) = lookup("CLOZE_MASK") {
            engine.cloze_mask = mask;
        }
        engine.validate()?;

        let default_tolerance = match lookup("DEFAULT_TOLERANCE") {
            Some(value) => value.parse()?,
            None => defaults.default_tolerance,
        };

        let port = match lookup("PORT") {
            Some(value) => parse_value("PORT", &value)?,
            None => defaults.port,
        };

        let max_input_chars = match lookup("MAX_INPUT_CHARS") {
            Some(value) => parse_value("MAX_INPUT_CHARS", &value)?,
            None => defaults.max_input_chars,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            default_tolerance,
            max_input_chars,
            engine,
        })
    }

    /// Socket address string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
