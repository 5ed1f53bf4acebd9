//! Error types for the OWL2 ontology library

use thiserror::Error;

/// OWL2 ontology library error type
#[derive(Error, Debug)]
pub enum OwlError {
    /// Malformed input while parsing a serialized ontology
    #[error("Parse error at line {line}, column {column}: {message}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    /// Invalid IRI string
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Structural invariant violation when constructing an expression or axiom
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Requested format has no implementation
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// I/O errors from file-based parsing and serialization
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl OwlError {
    /// Build a positioned parse error
    pub fn parse<S: Into<String>>(message: S, line: usize, column: usize) -> Self {
        OwlError::ParseError {
            message: message.into(),
            line,
            column,
        }
    }
}

/// Result type for OWL2 operations
pub type OwlResult<T> = Result<T, OwlError>;
