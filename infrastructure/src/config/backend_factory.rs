//! Builds the configured backend

use super::file_config::{BackendKind, ConfigValidationError, FileConfig, OutputTarget};
use crate::logging::{JsonBackend, TracingBackend};
use logport_application::{Backend, BackendError};
use thiserror::Error;
use tracing::debug;

/// Errors raised while turning configuration into a backend
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),

    #[error("failed to open log output: {0}")]
    Backend(#[from] BackendError),
}

/// Build the backend described by `config`.
///
/// The tracing backend only forwards encoded records; installing a
/// subscriber with [`record_layer`](crate::logging::record_layer) that
/// honours `output` and `level` is left to the caller.
pub fn build_backend(config: &FileConfig) -> Result<Box<dyn Backend>, ConfigError> {
    config.validate()?;

    let backend: Box<dyn Backend> = match config.backend {
        BackendKind::Tracing => Box::new(TracingBackend::new(config.encoder.clone())),
        BackendKind::Json => {
            let encoder = config.encoder.clone();
            match config.output_target()? {
                OutputTarget::Stdout => {
                    Box::new(JsonBackend::stdout(encoder).with_min_level(config.level))
                }
                OutputTarget::Stderr => {
                    Box::new(JsonBackend::stderr(encoder).with_min_level(config.level))
                }
                OutputTarget::File(path) => {
                    Box::new(JsonBackend::file(&path, encoder)?.with_min_level(config.level))
                }
            }
        }
    };

    debug!(
        "Built {:?} backend (level {}, output {})",
        config.backend, config.level, config.output
    );
    Ok(backend)
}
