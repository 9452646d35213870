//! Error handling for file and stream encryption
//!
//! This crate reports everything through the unified API error. Failures from
//! the cipher primitives and from `std::io` are converted with the helpers
//! below instead of `From` impls, which the orphan rule would forbid here.

// Re-export the primary API error system
pub use api::error::{validate, Error, Result, ResultExt};

use algorithms::error::Error as PrimitiveError;

/// Converts primitive cipher results into API results
pub trait SymmetricResultExt<T> {
    /// Map a primitive error into the API error
    fn map_primitive_err(self) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(Error::from)
    }
}

/// Converts `std::io` results into API results
pub trait IoResultExt<T> {
    /// Map an I/O error into [`Error::Io`] naming the failed operation
    fn io_context(self, context: &'static str) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn io_context(self, context: &'static str) -> Result<T> {
        self.with_context(context)
    }
}
