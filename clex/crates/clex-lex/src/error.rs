//! Lexical errors.
//!
//! Tokenizing is fail-fast: every malformed construct ends the scan with one
//! of these errors and no token is produced for it. [`LexError::to_diagnostic`]
//! turns an error into a [`Diagnostic`] for display.

use std::io;
use std::path::PathBuf;

use clex_util::{Diagnostic, DiagnosticCode, SourceSnippet, Span};
use thiserror::Error;

use crate::input::Input;
use crate::token::TokenKind;

/// A fatal lexical condition.
#[derive(Error, Debug)]
pub enum LexError {
    /// A byte with no registered scanner.
    #[error("unexpected character {} at {span}", describe_byte(.byte))]
    BadChar {
        /// The offending byte.
        byte: u8,
        /// Where it was found.
        span: Span,
    },

    /// A lead byte not followed by the continuation bytes it announces.
    #[error("invalid UTF-8 sequence at {span}")]
    InvalidUtf8 {
        /// Position of the lead byte.
        span: Span,
    },

    /// `\x` with no hexadecimal digit after it.
    #[error("\\x escape without hex digits at {span}")]
    EmptyHexEscape {
        /// Position of the backslash.
        span: Span,
    },

    /// End of input reached inside a character or string literal.
    #[error("unterminated {} starting at {span}", .kind.describe())]
    UnterminatedLiteral {
        /// [`TokenKind::CharConstant`] or [`TokenKind::StringLiteral`].
        kind: TokenKind,
        /// Position of the opening quote.
        span: Span,
    },

    /// `next_token` was called with no input attached.
    #[error("no input attached to the tokenizer")]
    NoInput,

    /// The keyword list could not be read.
    #[error("cannot read keyword list {}: {source}", .path.display())]
    KeywordSource {
        /// Path of the list.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Result alias used throughout the tokenizer.
pub type LexResult<T> = std::result::Result<T, LexError>;

impl LexError {
    /// Returns the source position of the error, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::BadChar { span, .. }
            | LexError::InvalidUtf8 { span }
            | LexError::EmptyHexEscape { span }
            | LexError::UnterminatedLiteral { span, .. } => Some(*span),
            LexError::NoInput | LexError::KeywordSource { .. } => None,
        }
    }

    /// Returns the diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::BadChar { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedLiteral { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_LITERAL,
            LexError::EmptyHexEscape { .. } => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            LexError::InvalidUtf8 { .. } => DiagnosticCode::E_LEXER_INVALID_UTF8,
            LexError::NoInput => DiagnosticCode::E_LEXER_NO_INPUT,
            LexError::KeywordSource { .. } => DiagnosticCode::E_LEXER_KEYWORD_SOURCE,
        }
    }

    /// Converts the error into a diagnostic.
    ///
    /// When the input the error came from is given, the offending source line
    /// is attached as a snippet.
    ///
    /// ```
    /// use clex_lex::{Input, Tokenizer};
    ///
    /// let mut tokenizer = Tokenizer::new();
    /// tokenizer.attach(Input::named("demo.c", "int $x;"));
    /// tokenizer.next_token().unwrap();
    /// let err = tokenizer.next_token().unwrap_err();
    ///
    /// let diag = err.to_diagnostic(tokenizer.input());
    /// let text = diag.render("demo.c");
    /// assert!(text.starts_with("error[E1001]: unexpected character `$` (0x24)"));
    /// assert!(text.contains("  1 | int $x;"));
    /// ```
    pub fn to_diagnostic(&self, input: Option<&Input>) -> Diagnostic {
        let span = self.span().unwrap_or(Span::DUMMY);
        let mut diag = Diagnostic::error(self.headline(), span).with_code(self.code());

        if let (Some(input), Some(span)) = (input, self.span()) {
            if let Some(text) = input.line_text(span.line) {
                let mut snippet =
                    SourceSnippet::point(text, span.line as usize, span.column as usize);
                if let LexError::UnterminatedLiteral { .. } = self {
                    snippet = snippet.with_label("literal starts here");
                }
                diag = diag.with_snippet(snippet);
            }
        }

        match self {
            LexError::BadChar { .. } => diag.with_help(
                "no scanner is registered for this byte; add one with `Tokenizer::register_scanner`",
            ),
            LexError::UnterminatedLiteral { kind, .. } => {
                let quote = if *kind == TokenKind::CharConstant { '\'' } else { '"' };
                diag.with_help(format!("add the closing `{}`", quote))
            },
            LexError::EmptyHexEscape { .. } => {
                diag.with_help("`\\x` must be followed by at least one hexadecimal digit")
            },
            LexError::InvalidUtf8 { .. } => diag.with_note("identifiers must be valid UTF-8"),
            LexError::KeywordSource { source, .. } => diag.with_note(source.to_string()),
            LexError::NoInput => diag,
        }
    }

    fn headline(&self) -> String {
        match self {
            LexError::BadChar { byte, .. } => {
                format!("unexpected character {}", describe_byte(byte))
            },
            LexError::InvalidUtf8 { .. } => "invalid UTF-8 sequence".to_string(),
            LexError::EmptyHexEscape { .. } => "\\x escape without hex digits".to_string(),
            LexError::UnterminatedLiteral { kind, .. } => {
                format!("unterminated {}", kind.describe())
            },
            LexError::NoInput => "no input attached to the tokenizer".to_string(),
            LexError::KeywordSource { path, .. } => {
                format!("cannot read keyword list {}", path.display())
            },
        }
    }
}

fn describe_byte(byte: &u8) -> String {
    if byte.is_ascii_graphic() {
        format!("`{}` (0x{:02X})", *byte as char, byte)
    } else {
        format!("0x{:02X}", byte)
    }
}
