//! Error handling for the aescrypt ecosystem

pub mod traits;
pub mod types;
pub mod validate;

pub use traits::ResultExt;
pub use types::{Error, Result};

// I/O failures keep the OS message; callers that know which operation
// failed replace the context afterwards
#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            context: "I/O operation",
            message: e.to_string(),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
