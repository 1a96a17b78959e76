//! Domain layer for logport
//!
//! This crate contains the value types shared by the logging facade and its
//! backends. It has no dependencies on infrastructure concerns.
//!
//! # Core Concepts
//!
//! - **Level**: the four severities, ordered from `Error` to `Debug`
//! - **Fields**: structured attributes merged verbatim into a record
//! - **ErrorObject**: an error's short message plus an optional verbose trace

pub mod core;

// Re-export commonly used types
pub use self::core::{
    error::DomainError,
    error_object::{Chain, ErrorObject},
    fields::Fields,
    level::Level,
    record::Record,
};

#[doc(hidden)]
pub use serde_json;
