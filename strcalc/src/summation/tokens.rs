//! Line-break normalization and delimiter tokenization

use crate::delimiter::is_line_break;
use std::borrow::Cow;

/// One trimmed substring between delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Trimmed token text, possibly empty
    pub text: &'a str,
    /// 0-based position among all tokens of the input
    pub index: usize,
}

impl Token<'_> {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Replace every line-break character with the delimiter
pub fn normalize_line_breaks<'a>(numbers: &'a str, delimiter: &str) -> Cow<'a, str> {
    if numbers.contains(is_line_break) {
        Cow::Owned(numbers.replace(is_line_break, delimiter))
    } else {
        Cow::Borrowed(numbers)
    }
}

/// Split normalized text on the literal delimiter, trimming each piece
pub fn tokenize<'a>(normalized: &'a str, delimiter: &'a str) -> impl Iterator<Item = Token<'a>> + 'a {
    normalized
        .split(delimiter)
        .enumerate()
        .map(|(index, piece)| Token {
            text: piece.trim(),
            index,
        })
}
