//! Number literal lexing.
//!
//! This module handles integer and floating constants in C syntax, plus the
//! sign scanners registered for `+` and `-`.
//!
//! # Number Formats
//!
//! - Decimal: `42`, `10UL`
//! - Octal: `007`, `0`
//! - Hexadecimal: `0x1A`, `0XffU`
//! - Float: `3.14`, `3.`, `.5`, `1e10`, `2.5E-3f`
//!
//! Only the shape of the literal is recognised. Values are not computed and
//! out-of-range digits (`09`) end the literal instead of being rejected.

use crate::error::LexResult;
use crate::input::Input;
use crate::token::TokenKind;
use crate::unicode::{is_digit, is_hex_digit, is_oct_digit};

/// Scans an integer constant, handing over to [`scan_float`] when a
/// fractional part or exponent follows the digits.
///
/// ```
/// use clex_lex::{scan_number, Input, TokenKind};
///
/// let mut input = Input::new("0x1A;");
/// assert_eq!(scan_number(&mut input).unwrap(), TokenKind::IntegerConstant);
/// assert_eq!(input.current(), b';');
///
/// let mut input = Input::new("3.14");
/// assert_eq!(scan_number(&mut input).unwrap(), TokenKind::FloatingConstant);
/// ```
pub fn scan_number(input: &mut Input) -> LexResult<TokenKind> {
    let mut c = input.current();

    if c == b'0' {
        c = input.advance();
        if c == b'x' || c == b'X' {
            c = input.advance();
            while is_hex_digit(c) {
                c = input.advance();
            }
        } else {
            while is_oct_digit(c) {
                c = input.advance();
            }
        }
    } else {
        while is_digit(c) {
            c = input.advance();
        }
    }

    if matches!(c, b'.' | b'e' | b'E') {
        return scan_float(input);
    }

    while matches!(c, b'u' | b'U' | b'l' | b'L') {
        c = input.advance();
    }
    Ok(TokenKind::IntegerConstant)
}

/// Scans the part of a floating constant that follows the integer digits.
///
/// Called directly for literals that start with `.`. Each part is optional,
/// so a lone `.` scans as a (degenerate) floating constant.
pub fn scan_float(input: &mut Input) -> LexResult<TokenKind> {
    let mut c = input.current();

    if c == b'.' {
        c = input.advance();
        while is_digit(c) {
            c = input.advance();
        }
    }

    if c == b'e' || c == b'E' {
        c = input.advance();
        if c == b'+' || c == b'-' {
            c = input.advance();
        }
        while is_digit(c) {
            c = input.advance();
        }
    }

    while matches!(c, b'f' | b'F' | b'l' | b'L') {
        c = input.advance();
    }
    Ok(TokenKind::FloatingConstant)
}

/// Scans `-`: a signed number when a digit follows, otherwise only the sign
/// is consumed and [`TokenKind::Begin`] is returned.
///
/// ```
/// use clex_lex::{scan_minus, Input, TokenKind};
///
/// let mut input = Input::new("-5");
/// assert_eq!(scan_minus(&mut input).unwrap(), TokenKind::IntegerConstant);
///
/// let mut input = Input::new("-x");
/// assert_eq!(scan_minus(&mut input).unwrap(), TokenKind::Begin);
/// assert_eq!(input.current(), b'x');
/// ```
pub fn scan_minus(input: &mut Input) -> LexResult<TokenKind> {
    scan_signed(input)
}

/// Scans `+`, the same way [`scan_minus`] scans `-`.
pub fn scan_plus(input: &mut Input) -> LexResult<TokenKind> {
    scan_signed(input)
}

fn scan_signed(input: &mut Input) -> LexResult<TokenKind> {
    if is_digit(input.advance()) {
        return scan_number(input);
    }
    Ok(TokenKind::Begin)
}
