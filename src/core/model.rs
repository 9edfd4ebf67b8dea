//! Token model
//!
//! A run produces tokens, folds them into a [`FrequencyMap`], and then
//! materializes one [`Entry`] per distinct token for ranking.

use std::borrow::Cow;
use std::collections::HashMap;

/// A single unit extracted from the input.
///
/// Every token within one run has the same variant, so the derived ordering
/// is always byte-wise (`Text`, `Byte`) or code-point-wise (`Rune`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    /// A line or a word, kept as raw bytes
    Text(Vec<u8>),
    /// A single raw byte
    Byte(u8),
    /// A single decoded code point (U+FFFD for undecodable input)
    Rune(char),
}

impl Token {
    pub fn text(bytes: impl Into<Vec<u8>>) -> Self {
        Token::Text(bytes.into())
    }

    /// The token interpreted as a character.
    ///
    /// Bytes map to the code point of the same value (0x00..=0xFF).
    pub fn as_char(&self) -> Option<char> {
        match self {
            Token::Text(_) => None,
            Token::Byte(b) => Some(char::from(*b)),
            Token::Rune(c) => Some(*c),
        }
    }

    /// Text form, used by the structured renderers.
    ///
    /// Only `Text` tokens can be lossy; see [`Token::invalid_utf8`].
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Token::Text(bytes) => String::from_utf8_lossy(bytes),
            Token::Byte(b) => Cow::Owned(char::from(*b).to_string()),
            Token::Rune(c) => Cow::Owned(c.to_string()),
        }
    }

    /// Raw bytes of a `Text` token that is not valid UTF-8
    pub fn invalid_utf8(&self) -> Option<&[u8]> {
        match self {
            Token::Text(bytes) if std::str::from_utf8(bytes).is_err() => Some(bytes),
            _ => None,
        }
    }
}

/// Token counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<Token, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `token`
    pub fn record(&mut self, token: Token) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    #[allow(dead_code)]
    pub fn get(&self, token: &Token) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens seen, duplicates included
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.counts
            .into_iter()
            .map(|(token, count)| Entry { token, count })
            .collect()
    }
}

impl FromIterator<Token> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for token in iter {
            map.record(token);
        }
        map
    }
}

/// One distinct token with its final count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub token: Token,
    pub count: u64,
}

impl Entry {
    #[allow(dead_code)]
    pub fn new(token: Token, count: u64) -> Self {
        Self { token, count }
    }
}
