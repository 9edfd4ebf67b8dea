//! Character names and printable classification

use unicode_general_category::{get_general_category, GeneralCategory};

/// Lookup from code point to character name.
///
/// Injected into the renderer so tests can run against a small stub table.
pub trait NameTable {
    fn name(&self, c: char) -> String;
}

/// Name table backed by the Unicode Character Database
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNames;

impl NameTable for UnicodeNames {
    fn name(&self, c: char) -> String {
        if c.is_control() {
            return "<control>".to_string();
        }
        unicode_names2::name(c)
            .map(|name| name.to_string())
            .unwrap_or_default()
    }
}

impl<F> NameTable for F
where
    F: Fn(char) -> String,
{
    fn name(&self, c: char) -> String {
        self(c)
    }
}

/// Graphic characters plus the ASCII space.
///
/// Letters, marks, numbers, punctuation and symbols count as graphic; every
/// other space, separator, control, format, surrogate, private-use and
/// unassigned code point does not.
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
    )
}

/// Terminal-safe rendering: the character itself, or U+FFFD
pub fn display_char(c: char) -> char {
    if is_printable(c) {
        c
    } else {
        char::REPLACEMENT_CHARACTER
    }
}
