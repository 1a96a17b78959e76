//! Port for leveled application logging.
//!
//! Defines the [`Logger`] capability that application code logs through.
//! Every operation produces exactly one structured record and never fails
//! the caller: backend problems stay inside the backend.

use logport_domain::{ErrorObject, Fields, Level};
use std::fmt;

/// Leveled logging capability.
///
/// Implementors provide [`log`](Logger::log) and [`log_err`](Logger::log_err);
/// the per-level operations are expressed in terms of those two.
///
/// Formatted operations take [`fmt::Arguments`], normally built with the
/// [`errorf!`](crate::errorf), [`warnf!`](crate::warnf),
/// [`infof!`](crate::infof) and [`debugf!`](crate::debugf) macros.
pub trait Logger: Send + Sync {
    /// Emit one record with `message` and `fields` at `level`.
    fn log(&self, level: Level, fields: &Fields, message: &str);

    /// Emit one record describing `err` at `level`.
    ///
    /// The message is the error's short message. The record carries an
    /// `error` attribute with the same text, and an `errorVerbose` attribute
    /// when the error exposes a verbose trace.
    fn log_err(&self, level: Level, err: &dyn ErrorObject);

    // ==================== Error ====================

    fn error(&self, msg: &str) {
        self.log(Level::Error, &Fields::new(), msg);
    }

    fn error_with_fields(&self, fields: &Fields, msg: &str) {
        self.log(Level::Error, fields, msg);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, &Fields::new(), &fmt::format(args));
    }

    fn errorf_with_fields(&self, fields: &Fields, args: fmt::Arguments<'_>) {
        self.log(Level::Error, fields, &fmt::format(args));
    }

    fn error_err(&self, err: &dyn ErrorObject) {
        self.log_err(Level::Error, err);
    }

    // ==================== Warn ====================

    fn warn(&self, msg: &str) {
        self.log(Level::Warn, &Fields::new(), msg);
    }

    fn warn_with_fields(&self, fields: &Fields, msg: &str) {
        self.log(Level::Warn, fields, msg);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, &Fields::new(), &fmt::format(args));
    }

    fn warnf_with_fields(&self, fields: &Fields, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, fields, &fmt::format(args));
    }

    fn warn_err(&self, err: &dyn ErrorObject) {
        self.log_err(Level::Warn, err);
    }

    // ==================== Info ====================

    fn info(&self, msg: &str) {
        self.log(Level::Info, &Fields::new(), msg);
    }

    fn info_with_fields(&self, fields: &Fields, msg: &str) {
        self.log(Level::Info, fields, msg);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, &Fields::new(), &fmt::format(args));
    }

    fn infof_with_fields(&self, fields: &Fields, args: fmt::Arguments<'_>) {
        self.log(Level::Info, fields, &fmt::format(args));
    }

    // ==================== Debug ====================

    fn debug(&self, msg: &str) {
        self.log(Level::Debug, &Fields::new(), msg);
    }

    fn debug_with_fields(&self, fields: &Fields, msg: &str) {
        self.log(Level::Debug, fields, msg);
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, &Fields::new(), &fmt::format(args));
    }

    fn debugf_with_fields(&self, fields: &Fields, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, fields, &fmt::format(args));
    }
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoLogger;

impl Logger for NoLogger {
    fn log(&self, _level: Level, _fields: &Fields, _message: &str) {}
    fn log_err(&self, _level: Level, _err: &dyn ErrorObject) {}
}

#[doc(hidden)]
#[macro_export]
macro_rules! __logf {
    ($plain:ident, $with_fields:ident, $logger:expr, fields = $fields:expr; $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        $logger.$with_fields(&$fields, ::std::format_args!($($arg)+))
    }};
    ($plain:ident, $with_fields:ident, $logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        $logger.$plain(::std::format_args!($($arg)+))
    }};
}

/// Log a formatted message at `Error`.
///
/// `errorf!(logger, "failed: {}", err)` or, with fields,
/// `errorf!(logger, fields = f; "failed: {}", err)`.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::__logf!(errorf, errorf_with_fields, $($arg)+)
    };
}

/// Log a formatted message at `Warn`. See [`errorf!`](crate::errorf).
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::__logf!(warnf, warnf_with_fields, $($arg)+)
    };
}

/// Log a formatted message at `Info`. See [`errorf!`](crate::errorf).
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::__logf!(infof, infof_with_fields, $($arg)+)
    };
}

/// Log a formatted message at `Debug`. See [`errorf!`](crate::errorf).
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::__logf!(debugf, debugf_with_fields, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use logport_domain::{Chain, fields};
    use std::sync::Mutex;

    /// Captured (level, fields, message) per call.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(Level, Fields, String)>>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<(Level, Fields, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Logger for Recorder {
        fn log(&self, level: Level, fields: &Fields, message: &str) {
            self.calls
                .lock()
                .unwrap()
                .push((level, fields.clone(), message.to_string()));
        }

        fn log_err(&self, level: Level, err: &dyn ErrorObject) {
            let mut fields = Fields::new();
            fields.insert("error".into(), err.message().into());
            self.log(level, &fields, &err.message());
        }
    }

    #[test]
    fn test_plain_operations_map_to_levels() {
        let recorder = Recorder::default();
        recorder.error("e");
        recorder.warn("w");
        recorder.info("i");
        recorder.debug("d");

        let levels: Vec<Level> = recorder.calls().into_iter().map(|c| c.0).collect();
        assert_eq!(levels, Level::ALL.to_vec());
    }

    #[test]
    fn test_with_fields_passes_fields_through() {
        let recorder = Recorder::default();
        let fields = fields! { "key" => "value" };
        recorder.warn_with_fields(&fields, "warning message");

        let calls = recorder.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1["key"], "value");
        assert_eq!(calls[0].2, "warning message");
    }

    #[test]
    fn test_format_macros() {
        let recorder = Recorder::default();
        let err = std::io::Error::other("some error");

        crate::errorf!(recorder, "error message: {}", err);
        crate::debugf!(recorder, "{} + {} = {}", 1, 2, 3);
        crate::infof!(recorder, fields = fields! { "key" => "value" }; "info message: {}", err);

        let calls = recorder.calls();
        assert_eq!(calls[0], (Level::Error, Fields::new(), "error message: some error".to_string()));
        assert_eq!(calls[1].2, "1 + 2 = 3");
        assert_eq!(calls[2].0, Level::Info);
        assert_eq!(calls[2].1["key"], "value");
        assert_eq!(calls[2].2, "info message: some error");
    }

    #[test]
    fn test_format_macros_accept_trait_objects() {
        let recorder = Recorder::default();
        let logger: &dyn Logger = &recorder;
        crate::warnf!(logger, "attempt {}", 2);
        assert_eq!(recorder.calls()[0].2, "attempt 2");
    }

    #[test]
    fn test_err_operations() {
        let recorder = Recorder::default();
        let err = std::io::Error::other("some error");
        recorder.error_err(&Chain::new(&err));
        recorder.warn_err(&anyhow::anyhow!("some error"));

        let calls = recorder.calls();
        assert_eq!(calls[0].0, Level::Error);
        assert_eq!(calls[1].0, Level::Warn);
        for call in calls {
            assert_eq!(call.2, "some error");
            assert_eq!(call.1["error"], "some error");
        }
    }

    #[test]
    fn test_no_logger_accepts_everything() {
        let logger = NoLogger;
        logger.error("ignored");
        logger.info_with_fields(&fields! { "k" => 1 }, "ignored");
        logger.warn_err(&anyhow::anyhow!("ignored"));
    }
}
