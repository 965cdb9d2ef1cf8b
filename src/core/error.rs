//! Error types for metadata operations
//!
//! Missing namespaces and missing tags are not errors anywhere in this crate;
//! accessors return `Option` for those. Errors are reserved for whole-object
//! construction failure and invalid values handed to setters.

use thiserror::Error;

/// Error types for metadata operations
#[derive(Debug, Error)]
pub enum MetaError {
    /// The top-level input is not a well-formed properties dictionary
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A value is invalid for the tag it was assigned to
    #[error("Bad value: {0}")]
    BadValue(String),
}

/// Result type alias for metadata operations
pub type MetaResult<T> = Result<T, MetaError>;
