//! The error capability consumed by the `*_err` logging operations
//!
//! Every error can render a short message. Some error values also carry a
//! verbose, multi-line trace (a cause list, a captured backtrace); that
//! capability is optional and checked per value.

use std::error::Error;

/// An error value that can be logged.
pub trait ErrorObject {
    /// Single-line message, including the cause chain as `outer: inner`.
    fn message(&self) -> String;

    /// Multi-line trace, when this value carries one.
    fn verbose(&self) -> Option<String> {
        None
    }
}

/// `anyhow` errors always expose a verbose report: the cause list plus the
/// backtrace when one was captured.
impl ErrorObject for anyhow::Error {
    fn message(&self) -> String {
        format!("{self:#}")
    }

    fn verbose(&self) -> Option<String> {
        Some(format!("{self:?}"))
    }
}

impl ErrorObject for Box<dyn Error + Send + Sync + 'static> {
    fn message(&self) -> String {
        Chain::new(&**self).message()
    }

    fn verbose(&self) -> Option<String> {
        Chain::new(&**self).verbose()
    }
}

/// Adapts any `std::error::Error` to [`ErrorObject`] by walking `source()`.
///
/// The verbose form is only available when the error has at least one
/// source; a lone error has nothing beyond its message.
#[derive(Clone, Copy)]
pub struct Chain<'a> {
    error: &'a (dyn Error + 'static),
}

impl<'a> Chain<'a> {
    pub fn new(error: &'a (dyn Error + 'static)) -> Self {
        Self { error }
    }

    fn causes(&self) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
        std::iter::successors(self.error.source(), |&e| e.source())
    }
}

impl std::fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Chain").field(&self.message()).finish()
    }
}

impl ErrorObject for Chain<'_> {
    fn message(&self) -> String {
        let mut message = self.error.to_string();
        for cause in self.causes() {
            message.push_str(": ");
            message.push_str(&cause.to_string());
        }
        message
    }

    fn verbose(&self) -> Option<String> {
        let causes: Vec<String> = self.causes().map(|c| c.to_string()).collect();
        if causes.is_empty() {
            return None;
        }

        let mut verbose = format!("{}\n\nCaused by:", self.error);
        if let [only] = causes.as_slice() {
            verbose.push_str("\n    ");
            verbose.push_str(only);
        } else {
            for (i, cause) in causes.iter().enumerate() {
                verbose.push_str(&format!("\n    {i}: {cause}"));
            }
        }
        Some(verbose)
    }
}
