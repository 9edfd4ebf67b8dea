//! Token modes
//!
//! Each [`Mode`] pairs its split function with the function that describes a
//! token for output, so adding a mode touches only this file.

use std::fmt;
use std::str::FromStr;

use crate::core::error::FreqError;
use crate::core::model::Token;
use crate::core::tokenizer::{split_bytes, split_lines, split_runes, split_words, SplitFn};
use crate::core::unicode::{display_char, NameTable};

/// Splitting discipline selected with `--by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Line,
    Byte,
    Rune,
    Word,
}

/// Per-character detail shown for byte and rune tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharDetail {
    /// `61` for bytes, `U+0061` for runes
    pub code: String,
    pub display: char,
    pub name: String,
}

pub type DescribeFn = fn(&Token, &dyn NameTable) -> Option<CharDetail>;

/// Everything a mode contributes to a run
pub struct ModeSpec {
    pub split: SplitFn,
    pub describe: DescribeFn,
}

static LINE: ModeSpec = ModeSpec {
    split: split_lines,
    describe: describe_text,
};

static BYTE: ModeSpec = ModeSpec {
    split: split_bytes,
    describe: describe_byte,
};

static RUNE: ModeSpec = ModeSpec {
    split: split_runes,
    describe: describe_rune,
};

static WORD: ModeSpec = ModeSpec {
    split: split_words,
    describe: describe_text,
};

impl Mode {
    pub fn spec(self) -> &'static ModeSpec {
        match self {
            Mode::Line => &LINE,
            Mode::Byte => &BYTE,
            Mode::Rune => &RUNE,
            Mode::Word => &WORD,
        }
    }

    pub fn available_modes() -> &'static [&'static str] {
        &["line", "byte", "rune", "word"]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Line => "line",
            Mode::Byte => "byte",
            Mode::Rune => "rune",
            Mode::Word => "word",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Mode {
    type Err = FreqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Mode::Line),
            "byte" => Ok(Mode::Byte),
            "rune" => Ok(Mode::Rune),
            "word" => Ok(Mode::Word),
            _ => Err(FreqError::UnsupportedMode(s.to_string())),
        }
    }
}

fn describe_text(_token: &Token, _names: &dyn NameTable) -> Option<CharDetail> {
    None
}

fn describe_byte(token: &Token, names: &dyn NameTable) -> Option<CharDetail> {
    let Token::Byte(b) = token else {
        return None;
    };
    let c = char::from(*b);
    Some(CharDetail {
        code: format!("{:02x}", b),
        display: display_char(c),
        name: names.name(c),
    })
}

fn describe_rune(token: &Token, names: &dyn NameTable) -> Option<CharDetail> {
    let c = token.as_char()?;
    Some(CharDetail {
        code: format!("U+{:04X}", c as u32),
        display: display_char(c),
        name: names.name(c),
    })
}
