//! Backend forwarding records to the `tracing` ecosystem.
//!
//! `tracing` field names are fixed at compile time, so a record's attributes
//! cannot become event fields one by one. Instead each record is encoded with
//! the same [`EncoderConfig`] as the JSON backend and travels as a single
//! `record` field under the [`TARGET`] target. [`RecordFormat`] writes that
//! field back out verbatim, so a subscriber built with [`record_layer`]
//! produces exactly the lines the JSON backend would.

use super::json_backend::EncoderConfig;
use logport_application::Backend;
use logport_domain::{Level, Record};
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber, debug, error, info, warn};
use tracing_subscriber::fmt::format::{DefaultFields, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// Target of every event emitted by [`TracingBackend`].
pub const TARGET: &str = "logport::record";

/// Event field carrying the encoded record.
const RECORD_FIELD: &str = "record";

/// Map a facade level onto the `tracing` level of the same name.
pub fn to_tracing_level(level: Level) -> tracing::Level {
    match level {
        Level::Error => tracing::Level::ERROR,
        Level::Warn => tracing::Level::WARN,
        Level::Info => tracing::Level::INFO,
        Level::Debug => tracing::Level::DEBUG,
    }
}

#[derive(Debug, Clone, Default)]
pub struct TracingBackend {
    encoder: EncoderConfig,
}

impl TracingBackend {
    pub fn new(encoder: EncoderConfig) -> Self {
        Self { encoder }
    }
}

impl Backend for TracingBackend {
    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Error => tracing::enabled!(target: TARGET, tracing::Level::ERROR),
            Level::Warn => tracing::enabled!(target: TARGET, tracing::Level::WARN),
            Level::Info => tracing::enabled!(target: TARGET, tracing::Level::INFO),
            Level::Debug => tracing::enabled!(target: TARGET, tracing::Level::DEBUG),
        }
    }

    fn emit(&self, record: &Record<'_>) {
        let line = match self.encoder.encode_line(record) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not encode log record: {}", e);
                return;
            }
        };
        let line = line.as_str();

        match record.level {
            Level::Error => error!(target: TARGET, record = line),
            Level::Warn => warn!(target: TARGET, record = line),
            Level::Info => info!(target: TARGET, record = line),
            Level::Debug => debug!(target: TARGET, record = line),
        }
    }
}

/// Event formatter writing the encoded record of a [`TracingBackend`]
/// event as one line.
///
/// Events without a `record` field produce no output.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFormat;

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        match visitor.record {
            Some(line) => writeln!(writer, "{}", line),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
struct RecordVisitor {
    record: Option<String>,
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == RECORD_FIELD {
            self.record = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

/// `fmt` layer writing records emitted by [`TracingBackend`] to `make_writer`.
///
/// Pair it with a filter on [`TARGET`] so other events don't reach it.
pub fn record_layer<S, W>(
    make_writer: W,
) -> tracing_subscriber::fmt::Layer<S, DefaultFields, RecordFormat, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    tracing_subscriber::fmt::layer()
        .event_format(RecordFormat)
        .with_writer(make_writer)
}
