//! The unit handed from the adapter to a backend

use super::{fields::Fields, level::Level};

/// One log call, ready to be encoded by a backend.
///
/// Timestamps are the backend's concern and are not part of the record.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub message: &'a str,
    pub attributes: &'a Fields,
}

impl<'a> Record<'a> {
    pub fn new(level: Level, message: &'a str, attributes: &'a Fields) -> Self {
        Self {
            level,
            message,
            attributes,
        }
    }
}
