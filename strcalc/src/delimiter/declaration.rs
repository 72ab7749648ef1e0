//! Parser for the optional `//<char>\n` and `//[<delimiter>]\n` declaration prefix
//!
//! The grammar is checked with fixed prefixes and literal characters only. Bracket
//! contents are taken verbatim and never interpreted.

use std::fmt;

pub const DECLARATION_MARKER: &str = "//";
const OPEN_BRACKET: char = '[';
const CLOSE_BRACKET: char = ']';

/// Characters that act as implicit separators in the numbers portion
pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}

/// Consume one line break (`\r\n`, `\n` or `\r`) from the start of `text`
fn strip_line_break(text: &str) -> Option<&str> {
    text.strip_prefix("\r\n")
        .or_else(|| text.strip_prefix('\n'))
        .or_else(|| text.strip_prefix('\r'))
}

/// Which declaration form produced a delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationForm {
    SingleChar,
    Bracketed,
}

/// Why a bracketed declaration was not honoured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    UnclosedBracket,
    MissingLineBreak,
    EmptyDelimiter,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UnclosedBracket => write!(f, "no closing ']'"),
            Rejection::MissingLineBreak => write!(f, "no line break after ']'"),
            Rejection::EmptyDelimiter => write!(f, "empty bracketed delimiter"),
        }
    }
}

/// Outcome of inspecting the input prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration<'a> {
    /// No declaration prefix; the whole input is numbers text
    Absent,
    Declared {
        delimiter: &'a str,
        numbers: &'a str,
        form: DeclarationForm,
    },
    /// Looked like a bracketed declaration but did not match the grammar
    Rejected(Rejection),
}

pub fn parse_declaration(input: &str) -> Declaration<'_> {
    let Some(body) = input.strip_prefix(DECLARATION_MARKER) else {
        return Declaration::Absent;
    };

    match body.strip_prefix(OPEN_BRACKET) {
        Some(bracketed) => parse_bracketed(bracketed),
        None => parse_single_char(body),
    }
}

fn parse_bracketed(rest: &str) -> Declaration<'_> {
    let Some(close) = rest.find(CLOSE_BRACKET) else {
        return Declaration::Rejected(Rejection::UnclosedBracket);
    };

    let delimiter = &rest[..close];
    let Some(numbers) = strip_line_break(&rest[close + CLOSE_BRACKET.len_utf8()..]) else {
        return Declaration::Rejected(Rejection::MissingLineBreak);
    };

    if delimiter.is_empty() {
        return Declaration::Rejected(Rejection::EmptyDelimiter);
    }

    Declaration::Declared {
        delimiter,
        numbers,
        form: DeclarationForm::Bracketed,
    }
}

fn parse_single_char(body: &str) -> Declaration<'_> {
    let Some(ch) = body.chars().next() else {
        return Declaration::Absent;
    };

    let (delimiter, after) = body.split_at(ch.len_utf8());
    match strip_line_break(after) {
        Some(numbers) => Declaration::Declared {
            delimiter,
            numbers,
            form: DeclarationForm::SingleChar,
        },
        None => Declaration::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(input: &str) -> (&str, &str, DeclarationForm) {
        match parse_declaration(input) {
            Declaration::Declared {
                delimiter,
                numbers,
                form,
            } => (delimiter, numbers, form),
            other => panic!("expected declaration for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(parse_declaration("1,2,3"), Declaration::Absent);
        assert_eq!(parse_declaration("/;\n1"), Declaration::Absent);
    }

    #[test]
    fn test_single_char() {
        assert_eq!(declared("//;\n1;2"), (";", "1;2", DeclarationForm::SingleChar));
        assert_eq!(declared("//;\n"), (";", "", DeclarationForm::SingleChar));
        assert_eq!(declared("//€\n1€2"), ("€", "1€2", DeclarationForm::SingleChar));
    }

    #[test]
    fn test_single_char_crlf() {
        assert_eq!(declared("//;\r\n1;2"), (";", "1;2", DeclarationForm::SingleChar));
    }

    #[test]
    fn test_single_char_requires_line_break() {
        assert_eq!(parse_declaration("//;1;2;3"), Declaration::Absent);
        assert_eq!(parse_declaration("//***\n1"), Declaration::Absent);
        assert_eq!(parse_declaration("//not a delimiter\n1"), Declaration::Absent);
        assert_eq!(parse_declaration("//"), Declaration::Absent);
    }

    #[test]
    fn test_bracketed() {
        assert_eq!(declared("//[***]\n1***2"), ("***", "1***2", DeclarationForm::Bracketed));
        assert_eq!(declared("//[.;,]\n"), (".;,", "", DeclarationForm::Bracketed));
        assert_eq!(declared("//[[]\n1[2"), ("[", "1[2", DeclarationForm::Bracketed));
    }

    #[test]
    fn test_bracketed_rejections() {
        assert_eq!(
            parse_declaration("//[***\n1***2"),
            Declaration::Rejected(Rejection::UnclosedBracket)
        );
        assert_eq!(
            parse_declaration("//[***]1***2"),
            Declaration::Rejected(Rejection::MissingLineBreak)
        );
        assert_eq!(
            parse_declaration("//[]\n1,2"),
            Declaration::Rejected(Rejection::EmptyDelimiter)
        );
    }

    #[test]
    fn test_bracket_contents_taken_verbatim() {
        // Everything before the first ']' is the delimiter, line breaks included
        assert_eq!(
            declared("//[a\nb]\n1a\nb2"),
            ("a\nb", "1a\nb2", DeclarationForm::Bracketed)
        );

        let long = "x".repeat(300);
        let input = format!("//[{}]\n1{}2", long, long);
        assert_eq!(
            declared(&input),
            (long.as_str(), format!("1{}2", long).as_str(), DeclarationForm::Bracketed)
        );
    }

    #[test]
    fn test_open_bracket_never_single_char() {
        // "//[" always takes the bracketed path, even when a line break follows
        assert_eq!(
            parse_declaration("//[\n1[2"),
            Declaration::Rejected(Rejection::UnclosedBracket)
        );
    }
}
