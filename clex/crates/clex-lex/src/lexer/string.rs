//! String and character literal lexing.
//!
//! Both literal forms share one loop: everything up to the matching quote
//! belongs to the literal, and a backslash hands control to
//! [`eat_escape_sequence`] so an escaped quote does not end it. The lexeme
//! keeps the quotes and the escapes exactly as written.

use crate::error::{LexError, LexResult};
use crate::input::{Input, END_OF_STREAM};
use crate::token::TokenKind;
use crate::unicode::{is_hex_digit, is_oct_digit};

/// Scans a character constant such as `'a'` or `'\n'`.
pub fn scan_char(input: &mut Input) -> LexResult<TokenKind> {
    scan_quoted(input, b'\'', TokenKind::CharConstant)
}

/// Scans a string literal.
///
/// ```
/// use clex_lex::{scan_string, Input, TokenKind};
///
/// let mut input = Input::new(r#""a\"b" rest"#);
/// input.mark();
/// assert_eq!(scan_string(&mut input).unwrap(), TokenKind::StringLiteral);
/// assert_eq!(input.marked_bytes(), Some(&br#""a\"b""#[..]));
/// ```
pub fn scan_string(input: &mut Input) -> LexResult<TokenKind> {
    scan_quoted(input, b'"', TokenKind::StringLiteral)
}

fn scan_quoted(input: &mut Input, quote: u8, kind: TokenKind) -> LexResult<TokenKind> {
    let opening = input.span_here();
    let unterminated = || LexError::UnterminatedLiteral { kind, span: opening };

    let mut c = input.advance();
    while c != quote {
        c = match c {
            END_OF_STREAM => return Err(unterminated()),
            b'\\' => match eat_escape_sequence(input) {
                Err(LexError::UnterminatedLiteral { .. }) => return Err(unterminated()),
                other => other?,
            },
            _ => input.advance(),
        };
    }
    input.advance();

    Ok(kind)
}

/// Consumes an escape sequence.
///
/// The input must be positioned on the backslash. Returns the current byte
/// after the escape:
///
/// - simple escapes (`\' \" \? \\ \a \b \f \n \r \t \v`) are consumed whole;
/// - octal escapes consume up to three octal digits;
/// - `\x` consumes every hexadecimal digit after it and needs at least one,
///   unless the input ends right after it;
/// - any other byte after the backslash is consumed as an unchecked
///   one-byte escape.
///
/// ```
/// use clex_lex::{eat_escape_sequence, Input};
///
/// let mut input = Input::new(r"\x41B'");
/// assert_eq!(eat_escape_sequence(&mut input).unwrap(), b'\'');
///
/// let mut input = Input::new(r"\1234");
/// assert_eq!(eat_escape_sequence(&mut input).unwrap(), b'4');
/// ```
pub fn eat_escape_sequence(input: &mut Input) -> LexResult<u8> {
    let backslash = input.span_here();
    let mut c = input.advance();

    match c {
        b'\'' | b'"' | b'?' | b'\\' | b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' => {
            return Ok(input.advance());
        },
        END_OF_STREAM => {
            return Err(LexError::UnterminatedLiteral {
                kind: TokenKind::StringLiteral,
                span: backslash,
            });
        },
        _ => {},
    }

    if is_oct_digit(c) {
        for _ in 0..3 {
            if !is_oct_digit(c) {
                break;
            }
            c = input.advance();
        }
        return Ok(c);
    }

    if c == b'x' {
        c = input.advance();
        if c == END_OF_STREAM {
            return Err(LexError::UnterminatedLiteral {
                kind: TokenKind::StringLiteral,
                span: backslash,
            });
        }
        if !is_hex_digit(c) {
            return Err(LexError::EmptyHexEscape { span: backslash });
        }
        while is_hex_digit(c) {
            c = input.advance();
        }
        return Ok(c);
    }

    Ok(input.advance())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_quoted(source: &str) -> (LexResult<TokenKind>, Vec<u8>) {
        let mut input = Input::new(source);
        input.mark();
        let result = if source.starts_with('\'') {
            scan_char(&mut input)
        } else {
            scan_string(&mut input)
        };
        let lexeme = input.marked_bytes().unwrap_or_default().to_vec();
        (result, lexeme)
    }

    #[test]
    fn test_simple_string() {
        let (result, lexeme) = lex_quoted("\"hello\" world");
        assert_eq!(result.unwrap(), TokenKind::StringLiteral);
        assert_eq!(lexeme, b"\"hello\"");
    }

    #[test]
    fn test_empty_string() {
        let (result, lexeme) = lex_quoted("\"\"");
        assert_eq!(result.unwrap(), TokenKind::StringLiteral);
        assert_eq!(lexeme, b"\"\"");
    }

    #[test]
    fn test_string_keeps_escapes() {
        let (result, lexeme) = lex_quoted("\"a\\nb\"");
        assert_eq!(result.unwrap(), TokenKind::StringLiteral);
        assert_eq!(lexeme, b"\"a\\nb\"");
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        let (_, lexeme) = lex_quoted(r#""say \"hi\"" x"#);
        assert_eq!(lexeme, br#""say \"hi\"""#);
    }

    #[test]
    fn test_escaped_backslash_before_quote() {
        let (_, lexeme) = lex_quoted(r#""dir\\" x"#);
        assert_eq!(lexeme, br#""dir\\""#);
    }

    #[test]
    fn test_string_spans_newlines() {
        let (result, lexeme) = lex_quoted("\"two\nlines\"");
        assert_eq!(result.unwrap(), TokenKind::StringLiteral);
        assert_eq!(lexeme, b"\"two\nlines\"");
    }

    #[test]
    fn test_character() {
        let (result, lexeme) = lex_quoted("'a';");
        assert_eq!(result.unwrap(), TokenKind::CharConstant);
        assert_eq!(lexeme, b"'a'");
    }

    #[test]
    fn test_character_escapes() {
        for source in [r"'\n'", r"'\''", r"'\0'", r"'\177'", r"'\x7f'", r"'\q'"] {
            let (result, lexeme) = lex_quoted(source);
            assert_eq!(result.unwrap(), TokenKind::CharConstant, "{}", source);
            assert_eq!(lexeme, source.as_bytes());
        }
    }

    #[test]
    fn test_multichar_constant() {
        let (result, lexeme) = lex_quoted("'ab' ");
        assert_eq!(result.unwrap(), TokenKind::CharConstant);
        assert_eq!(lexeme, b"'ab'");
    }

    #[test]
    fn test_unterminated_string() {
        let mut input = Input::new("  \"never closed");
        input.advance();
        input.advance();
        match scan_string(&mut input) {
            Err(LexError::UnterminatedLiteral { kind, span }) => {
                assert_eq!(kind, TokenKind::StringLiteral);
                assert_eq!(span.column, 3);
            },
            other => panic!("expected unterminated literal, got {:?}", other),
        }
    }

    #[test]
    fn test_unterminated_char_after_escape() {
        let (result, _) = lex_quoted("'\\");
        match result {
            Err(LexError::UnterminatedLiteral { kind, span }) => {
                assert_eq!(kind, TokenKind::CharConstant);
                assert_eq!(span.start, 0);
            },
            other => panic!("expected unterminated literal, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_hex_escape() {
        let (result, _) = lex_quoted("\"ab\\xg\"");
        match result {
            Err(LexError::EmptyHexEscape { span }) => {
                assert_eq!(span.start, 3);
                assert_eq!(span.column, 4);
            },
            other => panic!("expected empty hex escape, got {:?}", other),
        }
    }

    #[test]
    fn test_hex_escape_at_end_is_unterminated() {
        let (result, _) = lex_quoted("\"\\x");
        match result {
            Err(LexError::UnterminatedLiteral { kind, span }) => {
                assert_eq!(kind, TokenKind::StringLiteral);
                assert_eq!(span.start, 0);
            },
            other => panic!("expected unterminated literal, got {:?}", other),
        }

        let (result, _) = lex_quoted("'\\x");
        assert!(matches!(
            result,
            Err(LexError::UnterminatedLiteral { kind: TokenKind::CharConstant, .. })
        ));
    }

    #[test]
    fn test_escape_returns_following_byte() {
        let mut input = Input::new(r"\nz");
        assert_eq!(eat_escape_sequence(&mut input).unwrap(), b'z');

        let mut input = Input::new(r"\08x");
        assert_eq!(eat_escape_sequence(&mut input).unwrap(), b'8');

        let mut input = Input::new(r"\xDEADbeefg");
        assert_eq!(eat_escape_sequence(&mut input).unwrap(), b'g');

        let mut input = Input::new(r"\qz");
        assert_eq!(eat_escape_sequence(&mut input).unwrap(), b'z');
        assert_eq!(input.offset(), 2);
    }
}
