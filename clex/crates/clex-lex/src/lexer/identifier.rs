//! Identifier lexing.
//!
//! Identifiers are runs of ASCII letters, digits, underscores and UTF-8
//! encoded characters. Whether a name is a keyword is decided later, by the
//! tokenizer, against its keyword set.

use crate::error::{LexError, LexResult};
use crate::input::{Input, DECODE_ERROR};
use crate::token::TokenKind;
use crate::unicode::{is_ident_continue, is_utf8_lead};

/// Scans an identifier.
///
/// The input must be positioned on a letter, `_` or a UTF-8 lead byte. A
/// malformed UTF-8 sequence inside the name is fatal.
///
/// ```
/// use clex_lex::{scan_identifier, Input, TokenKind};
///
/// let mut input = Input::new("größe = 1");
/// assert_eq!(scan_identifier(&mut input).unwrap(), TokenKind::Identifier);
/// assert_eq!(input.current(), b' ');
/// ```
pub fn scan_identifier(input: &mut Input) -> LexResult<TokenKind> {
    let mut c = input.current();
    while is_ident_continue(c) || is_utf8_lead(c) {
        c = input.advance();
        if c == DECODE_ERROR {
            return Err(LexError::InvalidUtf8 {
                span: input.span_here(),
            });
        }
    }
    Ok(TokenKind::Identifier)
}
