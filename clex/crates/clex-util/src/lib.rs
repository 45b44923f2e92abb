//! clex-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared infrastructure for the clex front end. The tokenizer crate reports
//! every fatal lexical condition as a typed error; this crate provides the
//! vocabulary those errors are rendered with:
//!
//! - [`span`] - source locations (byte range plus 1-based line/column)
//! - [`diagnostic`] - diagnostics, codes, source snippets
//!   and the [`Handler`] that collects them
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. PLAIN DATA
//!    Spans and diagnostics are small owned values with no back references
//!    into the source, so they can outlive the input they describe.
//!
//! 2. RENDERING IS SEPARATE FROM DETECTION
//!    The lexer builds a [`Diagnostic`]; deciding how (and whether) to print
//!    it belongs to the caller.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, SourceSnippet};
pub use span::Span;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_compose() {
        let handler = Handler::new();
        handler.emit_diagnostic(
            Diagnostic::error("unexpected character `$`", Span::new(4, 5, 1, 5))
                .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
                .with_snippet(SourceSnippet::point("int $x;", 1, 5)),
        );

        assert!(handler.has_errors());
        let diags = handler.diagnostics();
        assert_eq!(diags[0].span.column, 5);
        assert_eq!(diags[0].snippets.len(), 1);
    }
}
