//! Core tokenizer implementation.
//!
//! This module contains the [`Tokenizer`] struct: the dispatch table, the
//! optional keyword set and the attached input, and the driver that turns
//! them into tokens.

use std::path::Path;

use tracing::{debug, trace};

use crate::error::{LexError, LexResult};
use crate::input::Input;
use crate::token::{Token, TokenKind};

use super::dispatch::{ScanFn, ScanTable, Scanner};
use super::keyword::KeywordSet;

/// Tokenizer for C-style sources.
///
/// A tokenizer is built once and reused across inputs: attach an [`Input`],
/// pull tokens with [`next_token`](Self::next_token) until
/// [`TokenKind::End`], then attach the next one.
///
/// ```
/// use clex_lex::{Input, TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new();
/// tokenizer.set_keywords(["int"].into_iter().collect());
/// tokenizer.attach(Input::new("int x1 0x1F"));
///
/// let kinds: Vec<TokenKind> = tokenizer
///     .tokens()
///     .map(|t| t.unwrap().kind)
///     .collect();
/// assert_eq!(kinds[0], TokenKind::Keyword);
/// assert_eq!(kinds[1], TokenKind::Identifier);
/// ```
#[derive(Debug, Default)]
pub struct Tokenizer {
    /// First-byte dispatch table.
    table: ScanTable,

    /// Reserved lexemes, if loaded.
    keywords: Option<KeywordSet>,

    /// The input tokens are read from.
    input: Option<Input>,
}

impl Tokenizer {
    /// Creates a tokenizer with the default dispatch table, no keywords and
    /// no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an input, returning the one previously attached.
    pub fn attach(&mut self, input: Input) -> Option<Input> {
        self.input.replace(input)
    }

    /// Detaches and returns the current input.
    pub fn detach(&mut self) -> Option<Input> {
        self.input.take()
    }

    /// Returns the attached input.
    pub fn input(&self) -> Option<&Input> {
        self.input.as_ref()
    }

    /// Returns the attached input mutably.
    pub fn input_mut(&mut self) -> Option<&mut Input> {
        self.input.as_mut()
    }

    /// Returns the keyword set, if one is loaded.
    pub fn keywords(&self) -> Option<&KeywordSet> {
        self.keywords.as_ref()
    }

    /// Replaces the keyword set, returning the previous one.
    pub fn set_keywords(&mut self, keywords: KeywordSet) -> Option<KeywordSet> {
        self.keywords.replace(keywords)
    }

    /// Returns the dispatch table.
    pub fn table(&self) -> &ScanTable {
        &self.table
    }

    /// Returns the dispatch table for modification.
    pub fn table_mut(&mut self) -> &mut ScanTable {
        &mut self.table
    }

    /// Registers a custom scanner for tokens starting with `byte`, returning
    /// the scanner it replaces.
    ///
    /// ```
    /// use clex_lex::{Input, LexResult, TokenKind, Tokenizer};
    ///
    /// fn semicolon(input: &mut Input) -> LexResult<TokenKind> {
    ///     input.advance();
    ///     Ok(TokenKind::Operator)
    /// }
    ///
    /// let mut tokenizer = Tokenizer::new();
    /// tokenizer.register_scanner(b';', semicolon);
    /// let tokens = tokenizer.tokenize(Input::new("x;")).unwrap();
    /// assert_eq!(tokens[1].kind, TokenKind::Operator);
    /// assert_eq!(tokens[1].lexeme, b";");
    /// ```
    pub fn register_scanner(&mut self, byte: u8, scanner: ScanFn) -> Scanner {
        let previous = self.table.set(byte, Scanner::Custom(scanner));
        debug!(byte = byte, replaced = previous.name(), "registered custom scanner");
        previous
    }

    /// Consumes tabs, spaces and newlines. Returns the number of bytes
    /// consumed.
    pub fn eat_whitespace(input: &mut Input) -> usize {
        let mut len = 0;
        let mut c = input.current();
        while matches!(c, b'\t' | b' ' | b'\n') {
            len += 1;
            c = input.advance();
        }
        len
    }

    /// Returns the next token of the attached input.
    ///
    /// After the last token, every call returns a [`TokenKind::End`] token.
    /// Returns `Ok(None)` if the scanner left no valid mark to measure the
    /// lexeme from (a custom scanner may unmark the input to drop its
    /// token).
    ///
    /// # Errors
    ///
    /// [`LexError::NoInput`] if nothing is attached, otherwise whatever the
    /// scanner for the token reports. No token is produced for the malformed
    /// text and scanning should not be resumed.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        let input = self.input.as_mut().ok_or(LexError::NoInput)?;

        input.unmark();
        Self::eat_whitespace(input);
        input.mark();

        let line = input.line();
        let col = input.column();
        let offset = input.offset();

        let kind = self.table.dispatch(input)?;
        let Some(lexeme) = input.marked_bytes() else {
            return Ok(None);
        };

        let mut token = Token::new(kind, lexeme, line, col, offset);
        if token.kind == TokenKind::Identifier {
            if let Some(keywords) = &self.keywords {
                if keywords.contains(&token.lexeme) {
                    token.kind = TokenKind::Keyword;
                }
            }
        }

        trace!(kind = %token.kind, line, col, lexeme = %token.lexeme_str(), "token");
        Ok(Some(token))
    }

    /// Returns an iterator over the remaining tokens.
    ///
    /// The iterator yields the [`TokenKind::End`] token and then stops. It
    /// also stops after the first error. Tokens a custom scanner drops are
    /// skipped, so such a scanner must consume at least one byte.
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens {
            tokenizer: self,
            done: false,
        }
    }

    /// Tokenizes a whole input, up to and including the end token.
    ///
    /// The input is attached for the duration of the call only; whatever
    /// was attached before is restored afterwards.
    pub fn tokenize(&mut self, input: Input) -> LexResult<Vec<Token>> {
        let saved = self.input.replace(input);
        let result = self.tokens().collect();
        self.input = saved;
        result
    }

    /// Loads the keyword set from a word list file.
    ///
    /// The list is tokenized with this tokenizer, so it is a sequence of
    /// whitespace-separated lexemes. The loaded set replaces any previous
    /// one. Returns the number of distinct keywords.
    pub fn load_keywords(&mut self, path: impl AsRef<Path>) -> LexResult<usize> {
        let path = path.as_ref();
        let list = Input::from_file(path).map_err(|source| LexError::KeywordSource {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_keywords_from(list)
    }

    /// Loads the keyword set from an in-memory word list.
    ///
    /// The attached input is put back afterwards, also when the list fails
    /// to tokenize; the keyword set is left untouched in that case.
    ///
    /// ```
    /// use clex_lex::{Input, TokenKind, Tokenizer};
    ///
    /// let mut tokenizer = Tokenizer::new();
    /// tokenizer.attach(Input::new("while"));
    /// let count = tokenizer.load_keywords_from(Input::new("if else\nwhile")).unwrap();
    /// assert_eq!(count, 3);
    ///
    /// let token = tokenizer.next_token().unwrap().unwrap();
    /// assert_eq!(token.kind, TokenKind::Keyword);
    /// ```
    pub fn load_keywords_from(&mut self, list: Input) -> LexResult<usize> {
        let name = list.name().to_string();
        let saved = self.input.replace(list);
        let result = self.collect_keywords();
        self.input = saved;

        let keywords = result?;
        let count = keywords.len();
        debug!(source = %name, count, "loaded keywords");
        self.keywords = Some(keywords);
        Ok(count)
    }

    fn collect_keywords(&mut self) -> LexResult<KeywordSet> {
        let mut keywords = KeywordSet::new();
        for token in self.tokens() {
            let token = token?;
            if token.is_end() {
                break;
            }
            keywords.insert(token.lexeme);
        }
        Ok(keywords)
    }
}

/// Iterator over the tokens of a [`Tokenizer`]'s input.
///
/// Created by [`Tokenizer::tokens`].
#[derive(Debug)]
pub struct Tokens<'t> {
    tokenizer: &'t mut Tokenizer,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.tokenizer.next_token() {
                Ok(Some(token)) => {
                    self.done = token.is_end();
                    return Some(Ok(token));
                },
                // Dropped by a custom scanner; the input has moved on.
                Ok(None) => continue,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                },
            }
        }
    }
}
