//! Extension trait for attaching context to fallible results

use super::types::{Error, Result};

/// Converts any `Result` whose error becomes an [`Error`] and labels it
///
/// The file layer uses this to name the failed operation on I/O errors.
pub trait ResultExt<T, E>: Sized {
    /// Convert the error and replace its context
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_context(context))
    }
}
