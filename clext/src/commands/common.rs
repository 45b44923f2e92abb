//! Common types and utilities for clext commands.
//!
//! This module provides the output format, the C punctuation scanner the CLI
//! registers on every tokenizer, and the shared lex-and-report helpers.

use std::path::{Path, PathBuf};

use clex_lex::{Input, LexError, LexResult, Token, TokenKind, Tokenizer};
use clex_util::Handler;

use crate::config::Config;
use crate::error::{ClextError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line.
    Text,
    /// A JSON array of token records.
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ClextError::Validation(format!(
                "{}: {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

// ============================================================================
// Punctuation
// ============================================================================

/// Bytes the CLI tokenizer treats as the start of a C punctuator.
///
/// `+`, `-` and `.` keep their built-in sign and float scanners.
pub const C_PUNCTUATORS: &[u8] = b"(){}[];,=*/%<>!&|^~?:#";

/// Scans a C punctuator, taking the longest of the one, two and three byte
/// forms.
pub fn scan_punctuator(input: &mut Input) -> LexResult<TokenKind> {
    let first = input.current();
    let second = input.advance();

    match (first, second) {
        (b'<', b'<') | (b'>', b'>') => {
            if input.advance() == b'=' {
                input.advance();
            }
        },
        (b'&', b'&') | (b'|', b'|') | (b'#', b'#') => {
            input.advance();
        },
        (_, b'=') if b"=!<>*/%&|^".contains(&first) => {
            input.advance();
        },
        _ => {},
    }

    Ok(TokenKind::Operator)
}

/// Create a tokenizer with C punctuation registered and, optionally, a
/// keyword list loaded.
///
/// A keyword list that fails to tokenize is reported through `handler` and
/// turned into [`ClextError::Lexical`].
pub fn build_tokenizer(keywords: Option<&Path>, handler: &Handler) -> Result<Tokenizer> {
    let mut tokenizer = Tokenizer::new();
    for &byte in C_PUNCTUATORS {
        tokenizer.register_scanner(byte, scan_punctuator);
    }

    if let Some(path) = keywords {
        match tokenizer.load_keywords(path) {
            Ok(_) => {},
            Err(err @ LexError::KeywordSource { .. }) => return Err(err.into()),
            Err(err) => {
                report_lex_error(handler, &err, None, &path.display().to_string());
                return Err(ClextError::Lexical { failed: 1 });
            },
        }
    }

    Ok(tokenizer)
}

/// Pick the keyword list: the command line flag wins over the configuration.
pub fn resolve_keywords(flag: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    flag.or_else(|| config.keywords.as_ref().map(PathBuf::from))
}

/// Render a lexical error to stderr and record it in `handler`.
pub fn report_lex_error(handler: &Handler, err: &LexError, input: Option<&Input>, origin: &str) {
    let diagnostic = err.to_diagnostic(input);
    eprintln!("{}", diagnostic.render(origin));
    handler.emit_diagnostic(diagnostic);
}

/// Tokenize a file up to and including the end token.
///
/// Returns `Ok(None)` when the file has a lexical error; the diagnostic has
/// been reported by then.
pub fn lex_file(
    tokenizer: &mut Tokenizer,
    path: &Path,
    handler: &Handler,
) -> Result<Option<Vec<Token>>> {
    let input = Input::from_file(path).map_err(|e| {
        ClextError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })?;

    tokenizer.attach(input);
    let result: LexResult<Vec<Token>> = tokenizer.tokens().collect();
    let outcome = match result {
        Ok(tokens) => Some(tokens),
        Err(err) => {
            report_lex_error(handler, &err, tokenizer.input(), &path.display().to_string());
            None
        },
    };
    tokenizer.detach();

    Ok(outcome)
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";

    /// Error when the output file already exists.
    pub const OUTPUT_FILE_EXISTS: &str = "Output file already exists (use --force to overwrite)";

    /// Error when the target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory";
}

/// Check that `path` names an existing regular file.
pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ClextError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(ClextError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    Ok(())
}
