//! CLI entrypoint for logport
//!
//! This is the demo binary that wires together all layers: it loads the
//! configuration, builds the backend and logs through the facade.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use logport_application::{Logger, debugf, errorf, fields, infof, warnf};
use logport_domain::Chain;
use logport_infrastructure::{
    Adapter, BackendKind, ConfigLoader, FileConfig, OutputTarget, TRACING_TARGET, build_backend,
    record_layer, to_tracing_level,
};
use std::path::Path;
use tracing::{Subscriber, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    if let Some(backend) = cli.backend {
        config.backend = backend.into();
    }
    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    config.validate()?;

    // === Subscribers ===
    let _guard = match config.backend {
        BackendKind::Json => {
            tracing_subscriber::registry()
                .with(diagnostics_layer(cli.verbose))
                .init();
            None
        }
        BackendKind::Tracing => Some(init_tracing_subscriber(&config, cli.verbose)?),
    };
    info!(
        "Starting logport with the {:?} backend ({})",
        config.backend, config.output
    );

    // === Dependency Injection ===
    let logger = Adapter::new(build_backend(&config)?);
    let _sync = logger.sync_guard();
    do_something(&logger);

    Ok(())
}

/// Diagnostics of logport itself go to stderr so stdout stays pure JSON
fn diagnostics_layer<S>(verbose: u8) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(diagnostics_filter(verbose))
}

/// `-v` count to diagnostic level; records of the tracing backend never
/// show up as diagnostics.
fn diagnostics_filter(verbose: u8) -> Targets {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    Targets::new()
        .with_default(level)
        .with_target(TRACING_TARGET, LevelFilter::OFF)
}

/// Only records of the tracing backend at or above the configured level.
fn record_filter(config: &FileConfig) -> Targets {
    Targets::new().with_target(TRACING_TARGET, to_tracing_level(config.level))
}

/// Install a subscriber writing encoded records to the configured output,
/// next to the stderr diagnostics.
///
/// The returned guard flushes the non-blocking writer when dropped and must
/// be kept alive until exit.
fn init_tracing_subscriber(config: &FileConfig, verbose: u8) -> Result<WorkerGuard> {
    let (writer, guard) = match config.output_target()? {
        OutputTarget::Stdout => tracing_appender::non_blocking(std::io::stdout()),
        OutputTarget::Stderr => tracing_appender::non_blocking(std::io::stderr()),
        OutputTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("output {} has no file name", path.display()))?;
            std::fs::create_dir_all(dir)?;
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name))
        }
    };

    tracing_subscriber::registry()
        .with(record_layer(writer).with_filter(record_filter(config)))
        .with(diagnostics_layer(verbose))
        .init();

    Ok(guard)
}

fn do_something(logger: &dyn Logger) {
    let err = std::io::Error::other("some error");
    let wrapped = anyhow::Error::new(std::io::Error::other("inner error")).context("outer error");
    let fields = fields! { "component" => "demo", "attempt" => 1 };

    logger.error("a meaningful std message");
    errorf!(logger, "a meaningful std message: {}", err);
    errorf!(logger, fields = fields; "a meaningful std message: {}", err);
    logger.error_with_fields(&fields, "a meaningful std message");
    logger.error_err(&Chain::new(&err));
    logger.error_err(&wrapped);

    logger.warn("a meaningful std message");
    warnf!(logger, "a meaningful std message: {}", err);
    logger.warn_with_fields(&fields, "a meaningful std message");
    logger.warn_err(&wrapped);

    logger.info("a meaningful std message");
    infof!(logger, "a meaningful std message: {}", err);
    logger.info_with_fields(&fields, "a meaningful std message");

    logger.debug("a meaningful std message");
    debugf!(logger, "a meaningful std message: {}", err);
    debugf!(logger, fields = fields; "a meaningful std message: {}", err);
}
