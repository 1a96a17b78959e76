//! Port for structured logging backends.
//!
//! A [`Backend`] receives fully assembled [`Record`]s and owns everything
//! after that point: encoding, timestamps, level filtering and the sink.

use logport_domain::{Level, Record};
use thiserror::Error;

/// Errors surfaced by [`Backend::sync`].
///
/// Emitting never returns an error; only an explicit flush does.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("log sink I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A structured logging backend.
///
/// Implementations must be safe to share between threads; concurrent
/// `emit` calls are ordered only by the sink itself.
pub trait Backend: Send + Sync {
    /// Whether records at `level` would be written.
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    /// Write one record. Failures are swallowed or counted, never returned.
    fn emit(&self, record: &Record<'_>);

    /// Flush buffered records to the sink.
    fn sync(&self) -> Result<(), BackendError> {
        Ok(())
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }

    fn emit(&self, record: &Record<'_>) {
        (**self).emit(record);
    }

    fn sync(&self) -> Result<(), BackendError> {
        (**self).sync()
    }
}

impl<B: Backend + ?Sized> Backend for std::sync::Arc<B> {
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }

    fn emit(&self, record: &Record<'_>) {
        (**self).emit(record);
    }

    fn sync(&self) -> Result<(), BackendError> {
        (**self).sync()
    }
}

/// Flushes a backend when dropped.
///
/// Keep the guard alive until process teardown so buffered records reach
/// the sink before exit. A failed flush at drop time is ignored.
#[must_use = "dropping the guard flushes immediately"]
pub struct SyncGuard<'a> {
    backend: &'a dyn Backend,
}

impl<'a> SyncGuard<'a> {
    pub fn new(backend: &'a dyn Backend) -> Self {
        Self { backend }
    }
}

impl Drop for SyncGuard<'_> {
    fn drop(&mut self) {
        let _ = self.backend.sync();
    }
}
