//! Byte cursor for traversing tokenizer input.
//!
//! This module provides the [`Input`] struct which maintains position state
//! while the scanners walk through a source buffer. It tracks line/column
//! information, remembers the start of the current lexeme (the *mark*), and
//! validates UTF-8 sequences as it steps over them.
//!
//! Two byte values never occur in well-formed UTF-8 and are used as in-band
//! signals: [`END_OF_STREAM`] is reported once the input is exhausted, and
//! [`DECODE_ERROR`] is reported for a lead byte whose continuation bytes are
//! missing or malformed (and for raw `0xFE`/`0xFF` bytes in the input).

use std::fs;
use std::io;
use std::path::Path;

use clex_util::Span;

use crate::unicode::{is_utf8_continuation, utf8_width};

/// Current byte reported once the input is exhausted.
pub const END_OF_STREAM: u8 = 0xFF;

/// Current byte reported for an invalid UTF-8 sequence.
pub const DECODE_ERROR: u8 = 0xFE;

/// A cursor over an owned input buffer.
///
/// # Example
///
/// ```
/// use clex_lex::input::{Input, END_OF_STREAM};
///
/// let mut input = Input::new("ab");
/// assert_eq!(input.current(), b'a');
/// input.mark();
/// assert_eq!(input.advance(), b'b');
/// assert_eq!(input.advance(), END_OF_STREAM);
/// assert_eq!(input.marked_bytes(), Some(&b"ab"[..]));
/// ```
#[derive(Debug, Clone)]
pub struct Input {
    /// Name used in diagnostics (usually a file path).
    name: String,

    /// The source bytes being traversed.
    bytes: Vec<u8>,

    /// Byte offset of the current character.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in bytes).
    column: u32,

    /// Classified byte at `position`.
    current: u8,

    /// Start of the lexeme being scanned.
    mark: Option<usize>,
}

impl Input {
    /// Creates an anonymous input over the given bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self::named("<input>", bytes)
    }

    /// Creates an input with a name used in diagnostics.
    pub fn named(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let mut input = Self {
            name: name.into(),
            bytes: bytes.into(),
            position: 0,
            line: 1,
            column: 1,
            current: END_OF_STREAM,
            mark: None,
        };
        input.current = input.classify_at(0);
        input
    }

    /// Reads a whole file into a new input named after its path.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        Ok(Self::named(path.display().to_string(), bytes))
    }

    /// Returns the name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the whole input buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the current byte.
    ///
    /// For a multi-byte UTF-8 character this is its lead byte. At the end of
    /// the input this is [`END_OF_STREAM`].
    #[inline]
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Returns the byte the next [`advance`](Self::advance) would produce,
    /// without moving.
    ///
    /// ```
    /// use clex_lex::input::Input;
    ///
    /// let input = Input::new("-5");
    /// assert_eq!(input.peek(), b'5');
    /// assert_eq!(input.current(), b'-');
    /// ```
    pub fn peek(&self) -> u8 {
        if self.is_at_end() {
            return END_OF_STREAM;
        }
        self.classify_at(self.position + self.current_width())
    }

    /// Moves past the current character and returns the new current byte.
    ///
    /// A valid multi-byte sequence is stepped over as a whole. Advancing from
    /// a [`DECODE_ERROR`] skips only the offending lead byte. Advancing at the
    /// end of the input is a no-op that keeps returning [`END_OF_STREAM`].
    pub fn advance(&mut self) -> u8 {
        if self.is_at_end() {
            return END_OF_STREAM;
        }

        let width = self.current_width();
        if self.bytes[self.position] == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += width as u32;
        }
        self.position += width;
        self.current = self.classify_at(self.position);
        self.current
    }

    /// Returns true once every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// Remembers the current position as the start of a lexeme.
    pub fn mark(&mut self) {
        self.mark = Some(self.position);
    }

    /// Forgets the remembered lexeme start.
    pub fn unmark(&mut self) {
        self.mark = None;
    }

    /// Returns the number of bytes consumed since [`mark`](Self::mark), or
    /// `None` if there is no valid mark.
    pub fn marked_len(&self) -> Option<usize> {
        self.mark
            .filter(|&start| start <= self.position)
            .map(|start| self.position - start)
    }

    /// Returns the bytes consumed since [`mark`](Self::mark), or `None` if
    /// there is no valid mark.
    pub fn marked_bytes(&self) -> Option<&[u8]> {
        let len = self.marked_len()?;
        Some(&self.bytes[self.position - len..self.position])
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based, counted in bytes).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the byte offset of the current character.
    #[inline]
    pub fn offset(&self) -> usize {
        self.position
    }

    /// Returns an empty span at the current position.
    pub fn span_here(&self) -> Span {
        Span::point(self.position, self.line, self.column)
    }

    /// Returns the text of a 1-based line, lossily decoded, without its line
    /// terminator.
    ///
    /// ```
    /// use clex_lex::input::Input;
    ///
    /// let input = Input::new("int a;\nint $b;\n");
    /// assert_eq!(input.line_text(2).as_deref(), Some("int $b;"));
    /// assert_eq!(input.line_text(9), None);
    /// ```
    pub fn line_text(&self, line: u32) -> Option<String> {
        let index = (line as usize).checked_sub(1)?;
        let raw = self.bytes.split(|&b| b == b'\n').nth(index)?;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        Some(String::from_utf8_lossy(raw).into_owned())
    }

    fn current_width(&self) -> usize {
        if self.current == DECODE_ERROR {
            1
        } else {
            utf8_width(self.bytes[self.position])
        }
    }

    fn classify_at(&self, position: usize) -> u8 {
        let Some(&byte) = self.bytes.get(position) else {
            return END_OF_STREAM;
        };
        if byte == END_OF_STREAM || byte == DECODE_ERROR {
            return DECODE_ERROR;
        }

        let width = utf8_width(byte);
        if width == 1 {
            return byte;
        }
        match self.bytes.get(position + 1..position + width) {
            Some(tail) if tail.iter().all(|&b| is_utf8_continuation(b)) => byte,
            _ => DECODE_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_input() {
        let input = Input::new("int x;");
        assert_eq!(input.current(), b'i');
        assert_eq!(input.offset(), 0);
        assert_eq!(input.line(), 1);
        assert_eq!(input.column(), 1);
        assert_eq!(input.name(), "<input>");
    }

    #[test]
    fn test_advance() {
        let mut input = Input::new("abc");
        assert_eq!(input.advance(), b'b');
        assert_eq!(input.advance(), b'c');
        assert_eq!(input.advance(), END_OF_STREAM);
        assert!(input.is_at_end());
    }

    #[test]
    fn test_end_of_stream_is_sticky() {
        let mut input = Input::new("");
        assert_eq!(input.current(), END_OF_STREAM);
        assert_eq!(input.advance(), END_OF_STREAM);
        assert_eq!(input.advance(), END_OF_STREAM);
        assert_eq!(input.offset(), 0);
        assert_eq!(input.column(), 1);
    }

    #[test]
    fn test_advance_steps_over_utf8_sequences() {
        let mut input = Input::new("aé€😀b");
        assert_eq!(input.advance(), 0xC3);
        assert_eq!(input.offset(), 1);
        assert_eq!(input.advance(), 0xE2);
        assert_eq!(input.offset(), 3);
        assert_eq!(input.advance(), 0xF0);
        assert_eq!(input.offset(), 6);
        assert_eq!(input.advance(), b'b');
        assert_eq!(input.offset(), 10);
        assert_eq!(input.column(), 11);
    }

    #[test]
    fn test_truncated_sequence_is_decode_error() {
        let mut input = Input::new(vec![b'a', 0xE2, 0x82, b'z']);
        assert_eq!(input.advance(), DECODE_ERROR);
        assert_eq!(input.offset(), 1);
        // Advancing from a decode error skips only the lead byte.
        assert_eq!(input.advance(), 0x82);
        assert_eq!(input.advance(), b'z');
    }

    #[test]
    fn test_sequence_cut_by_end_of_input() {
        let input = Input::new(vec![0xC3]);
        assert_eq!(input.current(), DECODE_ERROR);
    }

    #[test]
    fn test_sentinel_bytes_in_input_are_decode_errors() {
        let mut input = Input::new(vec![0xFF, b'a', 0xFE]);
        assert_eq!(input.current(), DECODE_ERROR);
        assert_eq!(input.advance(), b'a');
        assert_eq!(input.advance(), DECODE_ERROR);
        assert_eq!(input.advance(), END_OF_STREAM);
    }

    #[test]
    fn test_peek() {
        let input = Input::new("é!");
        assert_eq!(input.current(), 0xC3);
        assert_eq!(input.peek(), b'!');
        assert_eq!(Input::new("x").peek(), END_OF_STREAM);
    }

    #[test]
    fn test_line_column_tracking() {
        let mut input = Input::new("ab\n\tc");
        input.advance();
        input.advance();
        assert_eq!((input.line(), input.column()), (1, 3));
        input.advance(); // '\n'
        assert_eq!((input.line(), input.column()), (2, 1));
        input.advance(); // '\t'
        assert_eq!((input.line(), input.column()), (2, 2));
        assert_eq!(input.current(), b'c');
    }

    #[test]
    fn test_mark_and_marked_bytes() {
        let mut input = Input::new("  foo bar");
        input.advance();
        input.advance();
        assert_eq!(input.marked_len(), None);
        input.mark();
        assert_eq!(input.marked_len(), Some(0));
        input.advance();
        input.advance();
        input.advance();
        assert_eq!(input.marked_len(), Some(3));
        assert_eq!(input.marked_bytes(), Some(&b"foo"[..]));
        input.unmark();
        assert_eq!(input.marked_bytes(), None);
    }

    #[test]
    fn test_span_here() {
        let mut input = Input::new("a\nbc");
        input.advance();
        input.advance();
        input.advance();
        let span = input.span_here();
        assert_eq!(span.start, 3);
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 2);
        assert!(span.is_empty());
    }

    #[test]
    fn test_line_text_strips_carriage_return() {
        let input = Input::new("one\r\ntwo");
        assert_eq!(input.line_text(1).as_deref(), Some("one"));
        assert_eq!(input.line_text(2).as_deref(), Some("two"));
        assert_eq!(input.line_text(0), None);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "int char\n").unwrap();

        let input = Input::from_file(&path).unwrap();
        assert_eq!(input.as_bytes(), b"int char\n");
        assert!(input.name().ends_with("words.txt"));
    }

    #[test]
    fn test_from_missing_file() {
        assert!(Input::from_file("/definitely/not/here.txt").is_err());
    }
}
