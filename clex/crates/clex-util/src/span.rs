//! Span module - Source location tracking.
//!
//! A [`Span`] identifies a byte range of an input together with the
//! human-readable line/column of its first byte.
//!
//! # Examples
//!
//! ```
//! use clex_util::span::Span;
//!
//! let span = Span::point(10, 1, 5).to(20);
//! assert_eq!(span.end, 20);
//! assert_eq!(span.to_string(), "1:5");
//! ```

use std::fmt;

/// Source location span
///
/// - Byte offsets (start, end), end exclusive
/// - Line and column of `start` (1-based, columns count bytes)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// ```
    /// use clex_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a byte offset
    ///
    /// ```
    /// use clex_util::span::Span;
    ///
    /// let point = Span::point(7, 2, 3);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extend the span so that it ends at `end`.
    ///
    /// ```
    /// use clex_util::span::Span;
    ///
    /// let span = Span::point(3, 1, 4).to(9);
    /// assert_eq!((span.start, span.end), (3, 9));
    /// ```
    #[inline]
    pub fn to(self, end: usize) -> Span {
        Span {
            end: end.max(self.start),
            ..self
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
