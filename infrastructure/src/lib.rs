//! Infrastructure layer for logport
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    BackendKind, ConfigError, ConfigLoader, ConfigValidationError, FileConfig, OutputTarget,
    build_backend,
};
pub use logging::{
    Adapter, ERROR_KEY, ERROR_VERBOSE_KEY, EncoderConfig, JsonBackend, LevelCase, SharedBuffer,
    RecordFormat, TRACING_TARGET, TracingBackend, record_layer, to_tracing_level,
};
