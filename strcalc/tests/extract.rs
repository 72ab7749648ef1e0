//! Behaviour of the public `extract_delimiter_and_numbers` entry point

use strcalc::{extract_delimiter_and_numbers, ParsedInput};

fn parsed(delimiter: &str, numbers: &str) -> ParsedInput {
    ParsedInput::new(delimiter, numbers)
}

#[test]
fn default_delimiter_without_declaration() {
    assert_eq!(extract_delimiter_and_numbers("1,2,3"), parsed(",", "1,2,3"));
}

#[test]
fn default_delimiter_for_empty_string() {
    assert_eq!(extract_delimiter_and_numbers(""), parsed(",", ""));
}

#[test]
fn custom_delimiter() {
    assert_eq!(extract_delimiter_and_numbers("//;\n1;2;3"), parsed(";", "1;2;3"));
    assert_eq!(extract_delimiter_and_numbers("//;\n"), parsed(";", ""));
    assert_eq!(extract_delimiter_and_numbers("//;\n1;2\n3;4"), parsed(";", "1;2\n3;4"));
}

#[test]
fn special_characters_as_custom_delimiters() {
    assert_eq!(extract_delimiter_and_numbers("//.\n1.2.3"), parsed(".", "1.2.3"));
    assert_eq!(extract_delimiter_and_numbers("//-\n1-2-3"), parsed("-", "1-2-3"));
    assert_eq!(extract_delimiter_and_numbers("//|\n1|2|3"), parsed("|", "1|2|3"));
}

#[test]
fn leading_slashes_in_free_text_are_not_a_declaration() {
    assert_eq!(
        extract_delimiter_and_numbers("//not a delimiter\n1,2,3"),
        parsed(",", "//not a delimiter\n1,2,3")
    );
}

#[test]
fn declaration_requires_line_break() {
    assert_eq!(extract_delimiter_and_numbers("//;1;2;3"), parsed(",", "//;1;2;3"));
}

#[test]
fn multi_character_delimiters() {
    assert_eq!(extract_delimiter_and_numbers("//[***]\n1***2***3"), parsed("***", "1***2***3"));
    assert_eq!(extract_delimiter_and_numbers("//[++]\n1++2++3"), parsed("++", "1++2++3"));
    assert_eq!(extract_delimiter_and_numbers("//[###]\n"), parsed("###", ""));
    assert_eq!(extract_delimiter_and_numbers("//[*+!]\n1*+!2*+!3"), parsed("*+!", "1*+!2*+!3"));
}

#[test]
fn multi_character_delimiter_requires_brackets() {
    assert_eq!(
        extract_delimiter_and_numbers("//***\n1***2***3"),
        parsed(",", "//***\n1***2***3")
    );
}

#[test]
fn multi_character_delimiter_requires_closing_bracket() {
    assert_eq!(
        extract_delimiter_and_numbers("//[***\n1***2***3"),
        parsed(",", "//[***\n1***2***3")
    );
}

#[test]
fn bracket_contents_are_literal() {
    assert_eq!(extract_delimiter_and_numbers("//[.*]\n1.*2"), parsed(".*", "1.*2"));
    assert_eq!(extract_delimiter_and_numbers("//[\\d]\n1\\d2"), parsed("\\d", "1\\d2"));
}

#[test]
fn bracket_contents_may_contain_line_breaks() {
    assert_eq!(extract_delimiter_and_numbers("//[a\nb]\n1a\nb2"), parsed("a\nb", "1a\nb2"));
}

#[test]
fn long_bracketed_delimiter_is_honoured() {
    let delimiter = "x".repeat(300);
    let numbers = format!("1{}2", delimiter);
    let input = format!("//[{}]\n{}", delimiter, numbers);
    assert_eq!(extract_delimiter_and_numbers(&input), parsed(&delimiter, &numbers));
}
