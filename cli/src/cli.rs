//! CLI command definitions

use clap::{Parser, ValueEnum};
use logport_domain::Level;
use logport_infrastructure::BackendKind;
use std::path::PathBuf;

/// Backend selection on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BackendArg {
    /// JSON lines written directly to the output
    Json,
    /// Encoded records routed through a `tracing` subscriber
    Tracing,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Json => BackendKind::Json,
            BackendArg::Tracing => BackendKind::Tracing,
        }
    }
}

/// CLI arguments for the logport demo
#[derive(Parser, Debug)]
#[command(name = "logport")]
#[command(author, version, about = "Exercise the logport facade against a configured backend")]
#[command(long_about = r#"
Logs one record for every facade operation (plain, formatted, with fields,
and error objects) through the configured backend, one JSON object per line.

Configuration files are loaded from (in priority order):
1. LOGPORT_* environment variables
2. --config <path>     Explicit config file
3. ./logport.toml      Project-level config
4. ~/.config/logport/config.toml   Global config

Example:
  logport
  logport --backend tracing --level debug
  logport --output /tmp/app.log
"#)]
pub struct Cli {
    /// Backend to log through
    #[arg(short, long, value_enum)]
    pub backend: Option<BackendArg>,

    /// Minimum level written (error, warn, info, debug)
    #[arg(short, long, value_parser = parse_level)]
    pub level: Option<Level>,

    /// Output: stdout, stderr, or a file path
    #[arg(short, long, value_name = "TARGET")]
    pub output: Option<String>,

    /// Verbosity of logport's own diagnostics (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

fn parse_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|e: logport_domain::DomainError| e.to_string())
}
