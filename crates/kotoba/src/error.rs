//! Error types for kotoba's input surfaces

use thiserror::Error;

/// Main error type for kotoba operations.
///
/// Evaluation itself is total and never fails; errors only arise at the
/// edges, when parsing bracket notation or loading a language pack.
#[derive(Error, Debug)]
pub enum KotobaError {
    /// Malformed bracket notation
    #[error("Syntax error at byte {offset}: {message}")]
    Syntax {
        /// Byte offset into the input where the error was noticed
        offset: usize,
        /// Human-readable description
        message: String,
    },

    /// Malformed language pack
    #[error("Language pack error: {0}")]
    Pack(#[from] serde_json::Error),
}

/// Result type alias for kotoba operations
pub type Result<T> = std::result::Result<T, KotobaError>;
