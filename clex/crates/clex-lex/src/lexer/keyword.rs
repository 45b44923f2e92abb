//! Keyword set.
//!
//! The tokenizer has no built-in keywords. A [`KeywordSet`] is loaded from a
//! word list (see [`Tokenizer::load_keywords`](crate::Tokenizer::load_keywords))
//! or built directly, and identifiers found in it are reported as
//! [`TokenKind::Keyword`](crate::TokenKind::Keyword).

use rustc_hash::FxHashSet;

/// A set of reserved lexemes.
///
/// ```
/// use clex_lex::KeywordSet;
///
/// let keywords: KeywordSet = ["int", "char", "return"].into_iter().collect();
/// assert!(keywords.contains(b"int"));
/// assert!(!keywords.contains(b"integer"));
/// assert_eq!(keywords.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: FxHashSet<Box<[u8]>>,
}

impl KeywordSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a lexeme. Returns false if it was already present.
    pub fn insert(&mut self, word: impl AsRef<[u8]>) -> bool {
        self.words.insert(Box::from(word.as_ref()))
    }

    /// Checks whether a lexeme is a keyword.
    #[inline]
    pub fn contains(&self, word: &[u8]) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of keywords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set holds no keyword.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the keywords in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.words.iter().map(|w| &**w)
    }
}

impl<W: AsRef<[u8]>> FromIterator<W> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<W: AsRef<[u8]>> Extend<W> for KeywordSet {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}
