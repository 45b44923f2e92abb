//! Diagnostics for fatal lexical errors.
//!
//! A [`Diagnostic`] carries a code, the [`Span`] it points at and
//! optional source snippets, notes and help lines. [`Diagnostic::render`]
//! turns it into the multi-line text the CLI prints, and a [`Handler`]
//! collects the diagnostics of one run.
//!
//! # Examples
//!
//! ```
//! use clex_util::diagnostic::{Diagnostic, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     Diagnostic::error("unexpected character `$`", Span::new(4, 5, 1, 5))
//!         .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR),
//! );
//!
//! assert!(handler.has_errors());
//! ```

mod codes;
mod snippet;

pub use codes::DiagnosticCode;
pub use snippet::SourceSnippet;

pub use crate::span::Span;

use std::cell::RefCell;
use std::fmt;

/// A fatal lexical error with its location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the diagnostic the way the command line prints it.
    ///
    /// `origin` names the input (usually a file path) and is printed in the
    /// location line.
    ///
    /// ```
    /// use clex_util::diagnostic::{Diagnostic, DiagnosticCode, Span};
    ///
    /// let diag = Diagnostic::error("unexpected character `$`", Span::new(4, 5, 1, 5))
    ///     .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    /// let text = diag.render("main.c");
    /// assert!(text.starts_with("error[E1001]: unexpected character `$`"));
    /// assert!(text.contains("--> main.c:1:5"));
    /// ```
    pub fn render(&self, origin: &str) -> String {
        let mut out = format!("{}\n  --> {}:{}", self, origin, self.span);
        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n  = note: {}", note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{}]: {}", code, self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts.
///
/// ```
/// use clex_util::diagnostic::{Diagnostic, Handler, Span};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unterminated string literal", Span::DUMMY));
///
/// if handler.has_errors() {
///     eprintln!("lexing failed with {} errors", handler.error_count());
/// }
/// ```
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
