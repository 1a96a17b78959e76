//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::logging::EncoderConfig;
use logport_domain::Level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("output cannot be empty")]
    EmptyOutput,

    #[error("encoder.message_key cannot be empty")]
    EmptyMessageKey,
}

/// Which backend the facade writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// JSON lines written directly to the configured output
    Json,
    /// Encoded records handed to the process-wide `tracing` subscriber
    Tracing,
}

impl Default for BackendKind {
    fn default() -> Self {
        Self::Json
    }
}

/// Where records end up, parsed from the `output` string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl std::str::FromStr for OutputTarget {
    type Err = ConfigValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ConfigValidationError::EmptyOutput),
            "stdout" | "-" => Ok(OutputTarget::Stdout),
            "stderr" => Ok(OutputTarget::Stderr),
            path => Ok(OutputTarget::File(PathBuf::from(path))),
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub backend: BackendKind,
    /// Least severe level that is still written
    pub level: Level,
    /// `stdout`, `stderr`, or a file path
    pub output: String,
    pub encoder: EncoderConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            level: Level::Info,
            output: "stdout".to_string(),
            encoder: EncoderConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.encoder.message_key.trim().is_empty() {
            return Err(ConfigValidationError::EmptyMessageKey);
        }
        self.output_target().map(|_| ())
    }

    pub fn output_target(&self) -> Result<OutputTarget, ConfigValidationError> {
        self.output.parse()
    }
}
