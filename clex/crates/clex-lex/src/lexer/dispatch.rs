//! First-byte dispatch.
//!
//! Every token is owned by exactly one scanner, chosen by the byte the token
//! starts with. [`ScanTable`] holds one [`Scanner`] per byte value, so there is
//! no unmapped entry: bytes nothing else claims go to the bad-character
//! scanner, which fails the scan.

use std::fmt;

use crate::error::{LexError, LexResult};
use crate::input::{Input, DECODE_ERROR, END_OF_STREAM};
use crate::token::TokenKind;
use crate::unicode::{is_digit, is_letter, is_utf8_lead};

use super::{identifier, number, string};

/// Signature of a scanner.
///
/// A scanner is called with the input positioned on the first byte of the
/// token, consumes the whole lexeme and returns its classification.
pub type ScanFn = fn(&mut Input) -> LexResult<TokenKind>;

/// A scanner selectable from the dispatch table.
#[derive(Clone, Copy)]
pub enum Scanner {
    /// Letters, digits, `_` and UTF-8 sequences.
    Identifier,
    /// Integer constants, handing over to `Float` on `.`/`e`/`E`.
    Number,
    /// Floating constants, including those starting with `.`.
    Float,
    /// Character constants.
    Char,
    /// String literals.
    String,
    /// `-` followed by a number, otherwise [`TokenKind::Begin`].
    Minus,
    /// `+` followed by a number, otherwise [`TokenKind::Begin`].
    Plus,
    /// Fails with [`LexError::BadChar`].
    BadChar,
    /// End of input.
    End,
    /// A caller-supplied scanner.
    Custom(ScanFn),
}

impl Scanner {
    /// Runs the scanner on the input.
    pub fn scan(self, input: &mut Input) -> LexResult<TokenKind> {
        match self {
            Scanner::Identifier => identifier::scan_identifier(input),
            Scanner::Number => number::scan_number(input),
            Scanner::Float => number::scan_float(input),
            Scanner::Char => string::scan_char(input),
            Scanner::String => string::scan_string(input),
            Scanner::Minus => number::scan_minus(input),
            Scanner::Plus => number::scan_plus(input),
            Scanner::BadChar => scan_bad_char(input),
            Scanner::End => scan_end(input),
            Scanner::Custom(scan) => scan(input),
        }
    }

    /// Returns a short name for logs and debugging.
    pub fn name(self) -> &'static str {
        match self {
            Scanner::Identifier => "identifier",
            Scanner::Number => "number",
            Scanner::Float => "float",
            Scanner::Char => "char",
            Scanner::String => "string",
            Scanner::Minus => "minus",
            Scanner::Plus => "plus",
            Scanner::BadChar => "bad-char",
            Scanner::End => "end",
            Scanner::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Scanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte-indexed table of scanners.
///
/// ```
/// use clex_lex::{Input, ScanTable, TokenKind};
///
/// let table = ScanTable::new();
/// let mut input = Input::new("0x1Au");
/// assert_eq!(table.dispatch(&mut input).unwrap(), TokenKind::IntegerConstant);
/// assert!(input.is_at_end());
/// ```
#[derive(Clone)]
pub struct ScanTable {
    entries: [Scanner; 256],
}

impl ScanTable {
    /// Builds the default table.
    pub fn new() -> Self {
        let mut entries = [Scanner::BadChar; 256];
        for (byte, entry) in (0..=u8::MAX).zip(entries.iter_mut()) {
            if is_letter(byte) || is_utf8_lead(byte) {
                *entry = Scanner::Identifier;
            } else if is_digit(byte) {
                *entry = Scanner::Number;
            }
        }

        entries[b'_' as usize] = Scanner::Identifier;
        entries[b'\'' as usize] = Scanner::Char;
        entries[b'"' as usize] = Scanner::String;
        entries[b'.' as usize] = Scanner::Float;
        entries[b'-' as usize] = Scanner::Minus;
        entries[b'+' as usize] = Scanner::Plus;
        entries[END_OF_STREAM as usize] = Scanner::End;

        Self { entries }
    }

    /// Returns the scanner for a byte.
    #[inline]
    pub fn get(&self, byte: u8) -> Scanner {
        self.entries[byte as usize]
    }

    /// Replaces the scanner for a byte, returning the previous one.
    pub fn set(&mut self, byte: u8, scanner: Scanner) -> Scanner {
        std::mem::replace(&mut self.entries[byte as usize], scanner)
    }

    /// Runs the scanner registered for the input's current byte.
    #[inline]
    pub fn dispatch(&self, input: &mut Input) -> LexResult<TokenKind> {
        self.get(input.current()).scan(input)
    }
}

impl Default for ScanTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScanTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overridden = self
            .entries
            .iter()
            .filter(|s| matches!(s, Scanner::Custom(_)))
            .count();
        f.debug_struct("ScanTable")
            .field("custom_entries", &overridden)
            .finish()
    }
}

/// Scanner for bytes no other scanner claims.
///
/// Never produces a token: a decode-error sentinel is reported as invalid
/// UTF-8, anything else as an unexpected character.
pub fn scan_bad_char(input: &mut Input) -> LexResult<TokenKind> {
    let span = input.span_here();
    if input.current() == DECODE_ERROR {
        return Err(LexError::InvalidUtf8 { span });
    }
    let byte = input.as_bytes().get(input.offset()).copied().unwrap_or(END_OF_STREAM);
    Err(LexError::BadChar { byte, span })
}

/// Scanner for the end-of-stream sentinel. Consumes nothing.
pub fn scan_end(_input: &mut Input) -> LexResult<TokenKind> {
    Ok(TokenKind::End)
}
