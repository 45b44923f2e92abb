//! Byte classification for the scanners.
//!
//! The tokenizer works on raw bytes: everything it needs to know about a
//! character can be read off its first byte. Multi-byte UTF-8 sequences are
//! recognised by their lead byte; continuation bytes are validated by the
//! [`Input`](crate::Input) cursor, not here.

/// Checks if a byte is an ASCII decimal digit.
///
/// ```
/// use clex_lex::unicode::is_digit;
///
/// assert!(is_digit(b'0'));
/// assert!(is_digit(b'9'));
/// assert!(!is_digit(b'a'));
/// ```
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if a byte is an octal digit (`0`-`7`).
#[inline]
pub const fn is_oct_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

/// Checks if a byte is a hexadecimal digit.
///
/// ```
/// use clex_lex::unicode::is_hex_digit;
///
/// assert!(is_hex_digit(b'f'));
/// assert!(is_hex_digit(b'F'));
/// assert!(!is_hex_digit(b'g'));
/// ```
#[inline]
pub const fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Checks if a byte is an ASCII letter.
#[inline]
pub const fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Checks if a byte may continue an ASCII identifier (letter, digit or `_`).
///
/// ```
/// use clex_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue(b'_'));
/// assert!(is_ident_continue(b'7'));
/// assert!(!is_ident_continue(b'-'));
/// ```
#[inline]
pub const fn is_ident_continue(b: u8) -> bool {
    is_letter(b) || is_digit(b) || b == b'_'
}

/// Checks if a byte is a UTF-8 continuation byte (`10xxxxxx`).
#[inline]
pub const fn is_utf8_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Returns the length of the sequence a UTF-8 lead byte announces.
///
/// The historical 5- and 6-byte forms are recognised as well. Bytes that are
/// not lead bytes (ASCII, continuation bytes, `0xFE`, `0xFF`) have width 1.
///
/// ```
/// use clex_lex::unicode::utf8_width;
///
/// assert_eq!(utf8_width(b'a'), 1);
/// assert_eq!(utf8_width(0xC3), 2);
/// assert_eq!(utf8_width(0xE2), 3);
/// assert_eq!(utf8_width(0xF0), 4);
/// assert_eq!(utf8_width(0xF8), 5);
/// assert_eq!(utf8_width(0xFC), 6);
/// assert_eq!(utf8_width(0xFF), 1);
/// ```
#[inline]
pub const fn utf8_width(b: u8) -> usize {
    match b {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        0xF8..=0xFB => 5,
        0xFC..=0xFD => 6,
        _ => 1,
    }
}

/// Checks if a byte opens a multi-byte UTF-8 sequence (2 to 6 bytes).
#[inline]
pub const fn is_utf8_lead(b: u8) -> bool {
    utf8_width(b) > 1
}
