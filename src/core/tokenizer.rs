//! Tokenizer - Lazy token extraction from a byte stream
//!
//! A [`Tokens`] iterator pulls bytes from any [`Read`] into a bounded buffer
//! and hands the unconsumed window to a split function. Four split functions
//! are provided, one per mode:
//! - [`split_lines`]: `\n`-terminated segments, `\r` kept
//! - [`split_bytes`]: every raw byte
//! - [`split_runes`]: UTF-8 code points, U+FFFD for each maximal invalid subpart
//! - [`split_words`]: runs of non-ASCII-whitespace bytes
//!
//! Usage:
//! ```rust,ignore
//! use freqdist::core::tokenizer::{split_words, Tokens, MAX_TOKEN_SIZE};
//!
//! let tokens = Tokens::new("hello, world!".as_bytes(), split_words, MAX_TOKEN_SIZE);
//! for token in tokens {
//!     println!("{:?}", token?);
//! }
//! ```

use std::io::{ErrorKind, Read};

use crate::core::error::{FreqError, Result};
use crate::core::model::Token;

/// Default maximum token size in bytes (64 KiB)
pub const MAX_TOKEN_SIZE: usize = 64 * 1024;

/// Longest UTF-8 encoding of a single code point
const UTF8_MAX_LEN: usize = 4;

/// First read size; the buffer doubles from here up to its capacity
const INITIAL_BUFFER_SIZE: usize = 4096;

/// Outcome of offering the buffered window to a split function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Split {
    /// Emit `token` and drop `advance` bytes from the window
    Token { advance: usize, token: Token },
    /// Drop `advance` bytes without emitting anything
    Skip(usize),
    /// The window holds no complete token yet
    NeedMore,
}

/// Split function signature.
///
/// `data` is never empty. `at_eof` is true once the reader is exhausted, in
/// which case the function must not return [`Split::NeedMore`].
pub type SplitFn = fn(data: &[u8], at_eof: bool) -> Split;

/// Split on `\n`. A final unterminated segment is a token; a trailing
/// newline does not produce an extra empty token.
pub fn split_lines(data: &[u8], at_eof: bool) -> Split {
    match data.iter().position(|&b| b == b'\n') {
        Some(i) => Split::Token {
            advance: i + 1,
            token: Token::text(&data[..i]),
        },
        None if at_eof => Split::Token {
            advance: data.len(),
            token: Token::text(data),
        },
        None => Split::NeedMore,
    }
}

/// Every byte is its own token
pub fn split_bytes(data: &[u8], _at_eof: bool) -> Split {
    Split::Token {
        advance: 1,
        token: Token::Byte(data[0]),
    }
}

/// Decode one code point.
///
/// Invalid input follows the maximal-subpart rule: a lead byte plus any
/// continuation bytes that could still start a valid sequence become one
/// U+FFFD, and a byte that can never start a sequence becomes its own U+FFFD.
pub fn split_runes(data: &[u8], at_eof: bool) -> Split {
    let lead = data[0];
    if lead < 0x80 {
        return Split::Token {
            advance: 1,
            token: Token::Rune(char::from(lead)),
        };
    }

    let Some((width, second)) = utf8_sequence(lead) else {
        return replacement(1);
    };

    for i in 1..width {
        let Some(&b) = data.get(i) else {
            return if at_eof {
                replacement(i)
            } else {
                Split::NeedMore
            };
        };
        let range = if i == 1 { second.clone() } else { 0x80..=0xBF };
        if !range.contains(&b) {
            return replacement(i);
        }
    }

    let rune = std::str::from_utf8(&data[..width])
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Split::Token {
        advance: width,
        token: Token::Rune(rune),
    }
}

fn replacement(advance: usize) -> Split {
    Split::Token {
        advance,
        token: Token::Rune(char::REPLACEMENT_CHARACTER),
    }
}

/// Encoded width and valid range of the second byte for a UTF-8 lead byte
fn utf8_sequence(lead: u8) -> Option<(usize, std::ops::RangeInclusive<u8>)> {
    match lead {
        0xC2..=0xDF => Some((2, 0x80..=0xBF)),
        0xE0 => Some((3, 0xA0..=0xBF)),
        0xE1..=0xEC | 0xEE..=0xEF => Some((3, 0x80..=0xBF)),
        0xED => Some((3, 0x80..=0x9F)),
        0xF0 => Some((4, 0x90..=0xBF)),
        0xF1..=0xF3 => Some((4, 0x80..=0xBF)),
        0xF4 => Some((4, 0x80..=0x8F)),
        _ => None,
    }
}

/// ASCII whitespace, vertical tab included
#[inline]
pub fn is_word_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Split on runs of ASCII whitespace; separators never produce tokens
pub fn split_words(data: &[u8], at_eof: bool) -> Split {
    let skip = data.iter().take_while(|&&b| is_word_separator(b)).count();
    if skip > 0 {
        return Split::Skip(skip);
    }

    match data.iter().position(|&b| is_word_separator(b)) {
        Some(i) => Split::Token {
            advance: i + 1,
            token: Token::text(&data[..i]),
        },
        None if at_eof => Split::Token {
            advance: data.len(),
            token: Token::text(data),
        },
        None => Split::NeedMore,
    }
}

/// Lazy token stream over a reader.
///
/// Yields `Err` at most once; the iterator is fused after an error or after
/// the input is exhausted.
pub struct Tokens<R> {
    reader: R,
    split: SplitFn,
    max_token_size: usize,
    capacity: usize,
    buf: Vec<u8>,
    start: usize,
    end: usize,
    eof: bool,
    done: bool,
}

impl<R: Read> Tokens<R> {
    pub fn new(reader: R, split: SplitFn, max_token_size: usize) -> Self {
        Self {
            reader,
            split,
            max_token_size,
            // One extra byte leaves room for the delimiter after a maximal token
            capacity: max_token_size.max(UTF8_MAX_LEN).saturating_add(1),
            buf: Vec::new(),
            start: 0,
            end: 0,
            eof: false,
            done: false,
        }
    }

    fn scan(&mut self) -> Result<Option<Token>> {
        loop {
            if self.start < self.end {
                match (self.split)(&self.buf[self.start..self.end], self.eof) {
                    Split::Token { advance, token } => {
                        self.start += advance;
                        if matches!(&token, Token::Text(text) if text.len() > self.max_token_size) {
                            return Err(FreqError::TokenTooLong {
                                max: self.max_token_size,
                            });
                        }
                        return Ok(Some(token));
                    }
                    Split::Skip(advance) => {
                        self.start += advance;
                        continue;
                    }
                    Split::NeedMore if self.eof => return Ok(None),
                    Split::NeedMore => {}
                }
            } else if self.eof {
                return Ok(None);
            }

            self.fill()?;
        }
    }

    /// Shift pending bytes to the front and read more
    fn fill(&mut self) -> Result<()> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }

        if self.end == self.capacity {
            return Err(FreqError::TokenTooLong {
                max: self.max_token_size,
            });
        }

        if self.end == self.buf.len() {
            let grown = self
                .buf
                .len()
                .saturating_mul(2)
                .max(INITIAL_BUFFER_SIZE)
                .min(self.capacity);
            self.buf.resize(grown, 0);
        }

        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl<R: Read> Iterator for Tokens<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scan() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Tokens<R> {}
