//! Error types for graph formatting

use thiserror::Error;

/// Errors from payload formatting
#[derive(Debug, Error)]
pub enum FormatError {
    /// A patch statement still refers to the `<>` placeholder
    #[error("statement is not bound to a repository URI: {0}")]
    UnboundSubject(String),

    /// Nothing left to insert after dropping empty values
    #[error("update contains no statements")]
    EmptyUpdate,
}

pub type Result<T> = std::result::Result<T, FormatError>;
