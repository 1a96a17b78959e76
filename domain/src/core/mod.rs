//! Core domain concepts shared by every layer.
//!
//! - [`level::Level`]: severity of a log record
//! - [`fields::Fields`]: caller-supplied structured attributes
//! - [`record::Record`]: one log call as handed to a backend
//! - [`error_object::ErrorObject`]: the error capability logged by `*_err`
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod error_object;
pub mod fields;
pub mod level;
pub mod record;
