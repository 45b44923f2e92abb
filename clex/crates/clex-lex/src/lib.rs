//! clex-lex - Tokenizer for C-style Sources
//!
//! This crate provides the lexical-analysis stage of the clex front end. It
//! turns a byte stream into classified tokens (identifiers, keywords, numeric,
//! character and string constants) for a downstream parser.
//!
//! # Overview
//!
//! Scanning is driven by the first byte of every token. A [`ScanTable`] maps
//! each of the 256 byte values to the [`Scanner`] that owns tokens starting
//! with it; the [`Tokenizer`] skips whitespace, marks the start of the token,
//! dispatches, and copies the marked bytes out as the lexeme.
//!
//! # Example Usage
//!
//! ```
//! use clex_lex::{Input, TokenKind, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new();
//! tokenizer.load_keywords_from(Input::new("int char return")).unwrap();
//! tokenizer.attach(Input::named("demo.c", "int x 0x1A 3.14 'c' \"s\\n\""));
//!
//! // Pull tokens one at a time
//! let token = tokenizer.next_token().unwrap().unwrap();
//! assert_eq!(token.kind, TokenKind::Keyword);
//! assert_eq!((token.line, token.col), (1, 1));
//!
//! // Or iterate over the rest
//! let kinds: Vec<TokenKind> = tokenizer.tokens().map(|t| t.unwrap().kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Identifier,
//!         TokenKind::IntegerConstant,
//!         TokenKind::FloatingConstant,
//!         TokenKind::CharConstant,
//!         TokenKind::StringLiteral,
//!         TokenKind::End,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`input`] - Byte cursor with mark and line/column tracking
//! - [`token`] - Token type definitions
//! - [`lexer`] - Dispatch table, scanners, keyword set and the tokenizer
//! - [`error`] - Lexical errors and their diagnostics
//! - [`unicode`] - Byte classification
//!
//! # Token Categories
//!
//! - **Identifiers**: `[A-Za-z_]` or a UTF-8 character, then letters, digits,
//!   `_` and UTF-8 characters
//! - **Keywords**: identifiers found in the loaded keyword set
//! - **Integer constants**: `42`, `007`, `0x1A`, with `u`/`U`/`l`/`L` suffixes
//! - **Floating constants**: `3.14`, `3.`, `.5`, `1e10`, with `f`/`F`/`l`/`L`
//!   suffixes
//! - **Character and string literals**: quotes and escapes kept verbatim
//! - **Signed numbers**: `-5` and `+5` are single constants; a sign with no
//!   digit after it is a [`TokenKind::Begin`] token
//!
//! Operators and punctuation have no built-in scanner. Register one with
//! [`Tokenizer::register_scanner`]; until then they are reported as
//! [`LexError::BadChar`].
//!
//! # Errors
//!
//! Tokenizing is fail-fast. A malformed token ends the scan with a
//! [`LexError`]; [`LexError::to_diagnostic`] renders it with a source snippet.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[cfg(test)]
mod edge_cases;
pub mod error;
pub mod input;
pub mod lexer;
pub mod token;
pub mod unicode;

// Re-export main types for convenience
pub use error::{LexError, LexResult};
pub use input::{Input, DECODE_ERROR, END_OF_STREAM};
pub use lexer::{
    eat_escape_sequence, scan_bad_char, scan_char, scan_end, scan_float, scan_identifier,
    scan_minus, scan_number, scan_plus, scan_string, KeywordSet, ScanFn, ScanTable, Scanner,
    Tokenizer, Tokens,
};
pub use token::{Token, TokenKind};
