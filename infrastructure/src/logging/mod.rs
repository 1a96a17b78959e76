//! Logging infrastructure: the facade adapter and its backends.
//!
//! Provides [`Adapter`], which implements the
//! [`Logger`](logport_application::Logger) port on top of any
//! [`Backend`](logport_application::Backend), plus two backends:
//! [`JsonBackend`] (JSON lines to a writer) and [`TracingBackend`]
//! (pre-encoded records for the installed `tracing` subscriber, written
//! back out by [`record_layer`]).

mod adapter;
mod json_backend;
mod shared_buffer;
mod tracing_backend;

pub use adapter::{Adapter, ERROR_KEY, ERROR_VERBOSE_KEY};
pub use json_backend::{EncoderConfig, JsonBackend, LevelCase};
pub use shared_buffer::SharedBuffer;
pub use tracing_backend::{
    RecordFormat, TARGET as TRACING_TARGET, TracingBackend, record_layer, to_tracing_level,
};
