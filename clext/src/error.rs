//! Error handling module for the clext CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use clex_lex::LexError;
use thiserror::Error;

/// Main error type for the clext CLI application.
#[derive(Error, Debug)]
pub enum ClextError {
    /// Error when a configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when one or more inputs failed to tokenize.
    ///
    /// The diagnostics themselves have already been printed.
    #[error("{failed} file(s) failed to tokenize")]
    Lexical {
        /// Number of inputs with a lexical error.
        failed: usize,
    },

    /// Error from the tokenizer that has no source position to report.
    #[error("Tokenizer error: {0}")]
    Lex(#[from] LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ClextError.
pub type Result<T> = std::result::Result<T, ClextError>;
