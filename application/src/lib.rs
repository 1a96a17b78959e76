//! Application layer for logport
//!
//! This crate contains the port definitions: the [`Logger`] capability that
//! application code logs through, and the [`Backend`] contract the adapters
//! in the infrastructure layer write to.
//! It depends only on the domain layer.

pub mod ports;

// Re-export commonly used types
pub use logport_domain::{Chain, ErrorObject, Fields, Level, Record, fields};
pub use ports::{
    backend::{Backend, BackendError, SyncGuard},
    logger::{Logger, NoLogger},
};
