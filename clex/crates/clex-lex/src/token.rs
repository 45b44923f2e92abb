//! Token type definitions.
//!
//! A [`Token`] is the classified byte run produced by one call to
//! [`Tokenizer::next_token`](crate::Tokenizer::next_token). The lexeme is kept
//! exactly as it appears in the input: escape sequences are not processed and
//! numeric literals are not evaluated.

use std::borrow::Cow;
use std::fmt;

use clex_util::Span;

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A name that is not in the keyword set.
    Identifier,
    /// A name found in the keyword set.
    Keyword,
    /// Decimal, octal or hexadecimal integer with optional `u`/`l` suffixes.
    IntegerConstant,
    /// Floating constant with optional `f`/`l` suffixes.
    FloatingConstant,
    /// Single-quoted literal, quotes included.
    CharConstant,
    /// Double-quoted literal, quotes included.
    StringLiteral,
    /// End of the input.
    End,
    /// A byte no scanner accepts.
    BadChar,
    /// A sign scanner consumed `+` or `-` without a digit after it.
    Begin,
    /// Produced by caller-registered punctuation scanners.
    Operator,
}

impl TokenKind {
    /// Returns a human-readable description used in messages.
    ///
    /// ```
    /// use clex_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::StringLiteral.describe(), "string literal");
    /// ```
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::IntegerConstant => "integer constant",
            TokenKind::FloatingConstant => "floating constant",
            TokenKind::CharConstant => "character constant",
            TokenKind::StringLiteral => "string literal",
            TokenKind::End => "end of input",
            TokenKind::BadChar => "bad character",
            TokenKind::Begin => "sign",
            TokenKind::Operator => "operator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::IntegerConstant => "IntegerConstant",
            TokenKind::FloatingConstant => "FloatingConstant",
            TokenKind::CharConstant => "CharConstant",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::End => "End",
            TokenKind::BadChar => "BadChar",
            TokenKind::Begin => "Begin",
            TokenKind::Operator => "Operator",
        };
        f.write_str(name)
    }
}

/// One lexical unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Classification.
    pub kind: TokenKind,
    /// The exact bytes matched.
    pub lexeme: Vec<u8>,
    /// Line of the first byte (1-based).
    pub line: u32,
    /// Column of the first byte (1-based, in bytes).
    pub col: u32,
    /// Byte offset of the first byte in its input.
    pub offset: usize,
}

impl Token {
    /// Creates a token.
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<Vec<u8>>,
        line: u32,
        col: u32,
        offset: usize,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            col,
            offset,
        }
    }

    /// Returns the lexeme as text, replacing invalid UTF-8 sequences.
    ///
    /// ```
    /// use clex_lex::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Identifier, "naïve", 1, 1, 0);
    /// assert_eq!(token.lexeme_str(), "naïve");
    /// ```
    pub fn lexeme_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.lexeme)
    }

    /// Returns the source range this token covers.
    pub fn span(&self) -> Span {
        Span::point(self.offset, self.line, self.col).to(self.offset + self.lexeme.len())
    }

    /// Checks whether this is the end-of-input token.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {} {:?}", self.line, self.col, self.kind, self.lexeme_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_covers_lexeme() {
        let token = Token::new(TokenKind::IntegerConstant, "0x1A", 2, 3, 10);
        let span = token.span();
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 14);
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 3);
    }

    #[test]
    fn test_end_token() {
        let token = Token::new(TokenKind::End, Vec::new(), 1, 1, 0);
        assert!(token.is_end());
        assert!(token.span().is_empty());
    }

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::StringLiteral, "\"hi\"", 1, 5, 4);
        assert_eq!(token.to_string(), r#"1:5 StringLiteral "\"hi\"""#);
        assert_eq!(TokenKind::CharConstant.to_string(), "CharConstant");
    }

    #[test]
    fn test_lossy_lexeme() {
        let token = Token::new(TokenKind::StringLiteral, vec![b'"', 0xFE, b'"'], 1, 1, 0);
        assert_eq!(token.lexeme_str(), "\"\u{FFFD}\"");
    }
}
