//! Configuration file loading for logport
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LOGPORT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./logport.toml` or `./.logport.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/logport/config.toml`
//! 5. Default values

mod backend_factory;
mod file_config;
mod loader;

pub use backend_factory::{ConfigError, build_backend};
pub use file_config::{BackendKind, ConfigValidationError, FileConfig, OutputTarget};
pub use loader::ConfigLoader;
