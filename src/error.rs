//! Error types for architecture resolution.

use thiserror::Error;

/// Result type alias for architecture resolution
pub type Result<T> = std::result::Result<T, ArchError>;

/// Errors raised while classifying a host architecture
#[derive(Error, Debug)]
pub enum ArchError {
    /// The raw architecture name matches none of the supported families
    #[error("cannot determine architecture from [{raw}]")]
    UnsupportedArchitecture {
        /// Raw architecture name as reported by the host
        raw: String,
    },
}
