//! JSON-lines backend.
//!
//! Each [`Record`] is encoded as a single JSON object with the configured
//! message, level and time keys followed by the record's attributes, and
//! appended to the writer as one line.

use chrono::SecondsFormat;
use logport_application::{Backend, BackendError};
use logport_domain::{Level, Record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// How the level value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelCase {
    /// `"info"`
    Lower,
    /// `"INFO"`
    Upper,
}

impl LevelCase {
    fn render(self, level: Level) -> &'static str {
        match self {
            LevelCase::Lower => level.as_str(),
            LevelCase::Upper => level.as_upper_str(),
        }
    }
}

impl Default for LevelCase {
    fn default() -> Self {
        Self::Lower
    }
}

/// Key names used when encoding a record.
///
/// An empty key omits that entry from the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub message_key: String,
    pub level_key: String,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub time_key: String,
    pub level_case: LevelCase,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            message_key: "msg".to_string(),
            level_key: "level".to_string(),
            time_key: "ts".to_string(),
            level_case: LevelCase::Lower,
        }
    }
}

impl EncoderConfig {
    /// Encoder that writes only the message and attributes.
    pub fn message_only(message_key: impl Into<String>) -> Self {
        Self {
            message_key: message_key.into(),
            level_key: String::new(),
            time_key: String::new(),
            level_case: LevelCase::Lower,
        }
    }

    /// Build the JSON object for `record`.
    ///
    /// Attributes are inserted after the reserved keys and replace them on
    /// collision.
    pub fn encode(&self, record: &Record<'_>) -> Map<String, Value> {
        let mut object = Map::new();

        if !self.time_key.is_empty() {
            let timestamp = chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            object.insert(self.time_key.clone(), Value::String(timestamp));
        }
        if !self.level_key.is_empty() {
            object.insert(
                self.level_key.clone(),
                Value::String(self.level_case.render(record.level).to_string()),
            );
        }
        if !self.message_key.is_empty() {
            object.insert(
                self.message_key.clone(),
                Value::String(record.message.to_string()),
            );
        }

        for (key, value) in record.attributes {
            object.insert(key.clone(), value.clone());
        }

        object
    }

    /// Encode `record` as one compact JSON line, without the trailing newline.
    pub fn encode_line(&self, record: &Record<'_>) -> serde_json::Result<String> {
        serde_json::to_string(&self.encode(record))
    }
}

/// Backend writing one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<W>>`. Every line is flushed as it is
/// written; write failures are counted and reported through `tracing`.
pub struct JsonBackend<W: Write + Send> {
    writer: Mutex<BufWriter<W>>,
    encoder: EncoderConfig,
    min_level: Level,
    write_errors: AtomicU64,
}

impl<W: Write + Send> JsonBackend<W> {
    /// Create a backend accepting every level.
    pub fn new(writer: W, encoder: EncoderConfig) -> Self {
        Self {
            writer: Mutex::new(BufWriter::new(writer)),
            encoder,
            min_level: Level::Debug,
            write_errors: AtomicU64::new(0),
        }
    }

    /// Drop records less severe than `level`.
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Number of records that could not be written.
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    fn record_failure(&self, error: &dyn std::fmt::Display) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
        warn!("Could not write log record: {}", error);
    }
}

impl JsonBackend<io::Stdout> {
    pub fn stdout(encoder: EncoderConfig) -> Self {
        Self::new(io::stdout(), encoder)
    }
}

impl JsonBackend<io::Stderr> {
    pub fn stderr(encoder: EncoderConfig) -> Self {
        Self::new(io::stderr(), encoder)
    }
}

impl JsonBackend<File> {
    /// Backend appending to the file at `path`.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    pub fn file(path: impl AsRef<Path>, encoder: EncoderConfig) -> Result<Self, BackendError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file, encoder))
    }
}

impl<W: Write + Send> Backend for JsonBackend<W> {
    fn enabled(&self, level: Level) -> bool {
        level.is_enabled_for(self.min_level)
    }

    fn emit(&self, record: &Record<'_>) {
        if !self.enabled(record.level) {
            return;
        }

        let line = match self.encoder.encode_line(record) {
            Ok(line) => line,
            Err(e) => {
                self.record_failure(&e);
                return;
            }
        };

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let result = writeln!(writer, "{}", line).and_then(|()| writer.flush());
        drop(writer);

        if let Err(e) = result {
            self.record_failure(&e);
        }
    }

    fn sync(&self) -> Result<(), BackendError> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> Drop for JsonBackend<W> {
    fn drop(&mut self) {
        let writer = self
            .writer
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}
