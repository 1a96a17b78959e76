//! [`Logger`] implementation on top of a structured [`Backend`].
//!
//! Every logging call turns into exactly one [`Backend::emit`] with the
//! same level. Error objects are expanded into an `error` attribute and,
//! when the error carries one, an `errorVerbose` trace.

use logport_application::{Backend, BackendError, Logger, SyncGuard};
use logport_domain::{ErrorObject, Fields, Level, Record};
use serde_json::Value;

/// Attribute holding an error's short message.
pub const ERROR_KEY: &str = "error";
/// Attribute holding an error's verbose trace.
pub const ERROR_VERBOSE_KEY: &str = "errorVerbose";

/// Adapts a [`Backend`] to the [`Logger`] capability.
pub struct Adapter<B> {
    backend: B,
}

impl<B: Backend> Adapter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Flush the backend.
    pub fn sync(&self) -> Result<(), BackendError> {
        self.backend.sync()
    }

    /// Guard that flushes the backend when dropped.
    pub fn sync_guard(&self) -> SyncGuard<'_> {
        SyncGuard::new(&self.backend)
    }
}

impl<B: Backend> Logger for Adapter<B> {
    fn log(&self, level: Level, fields: &Fields, message: &str) {
        if !self.backend.enabled(level) {
            return;
        }
        self.backend.emit(&Record::new(level, message, fields));
    }

    fn log_err(&self, level: Level, err: &dyn ErrorObject) {
        if !self.backend.enabled(level) {
            return;
        }

        let message = err.message();
        let mut attributes = Fields::new();
        attributes.insert(ERROR_KEY.to_string(), Value::String(message.clone()));
        if let Some(verbose) = err.verbose() {
            attributes.insert(ERROR_VERBOSE_KEY.to_string(), Value::String(verbose));
        }

        self.backend.emit(&Record::new(level, &message, &attributes));
    }
}
