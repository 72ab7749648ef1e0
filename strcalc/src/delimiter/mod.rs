//! Delimiter extraction
//!
//! Splits raw calculator input into the effective delimiter and the numbers text
//! that follows an optional declaration prefix. Extraction never fails: anything
//! that does not match the declaration grammar is numbers text under the default
//! delimiter.

pub mod declaration;

use crate::logging::codes;
use crate::{log_success, log_warning};
use serde::{Deserialize, Serialize};

pub use declaration::{is_line_break, Declaration, DeclarationForm, Rejection};

pub const DEFAULT_DELIMITER: &str = ",";

/// Effective delimiter plus the numbers text it applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedInput {
    /// Literal separator, never empty
    pub delimiter: String,
    /// Text after the declaration prefix, possibly empty
    pub numbers: String,
}

impl ParsedInput {
    pub fn new(delimiter: &str, numbers: &str) -> Self {
        Self {
            delimiter: delimiter.to_string(),
            numbers: numbers.to_string(),
        }
    }

    pub fn is_default_delimiter(&self) -> bool {
        self.delimiter == DEFAULT_DELIMITER
    }
}

impl From<Extraction<'_>> for ParsedInput {
    fn from(extraction: Extraction<'_>) -> Self {
        Self::new(extraction.delimiter, extraction.numbers)
    }
}

/// Borrowed extraction result used on the summation path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction<'a> {
    pub delimiter: &'a str,
    pub numbers: &'a str,
    pub form: Option<DeclarationForm>,
}

impl<'a> Extraction<'a> {
    fn default_for(input: &'a str) -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            numbers: input,
            form: None,
        }
    }
}

/// Extract the delimiter and numbers text from `input`
pub fn extract_delimiter_and_numbers(input: &str) -> ParsedInput {
    extract(input).into()
}

/// Borrowing form of [`extract_delimiter_and_numbers`]
pub fn extract(input: &str) -> Extraction<'_> {
    if input.is_empty() {
        return Extraction::default_for(input);
    }

    match declaration::parse_declaration(input) {
        Declaration::Absent => Extraction::default_for(input),
        Declaration::Declared {
            delimiter,
            numbers,
            form,
        } => {
            log_success!(codes::success::DELIMITER_EXTRACTED, "Custom delimiter declared",
                "delimiter" => delimiter.escape_debug(),
                "form" => format!("{:?}", form),
                "numbers_length" => numbers.len()
            );
            Extraction {
                delimiter,
                numbers,
                form: Some(form),
            }
        }
        Declaration::Rejected(rejection) => {
            log_warning!(codes::delimiter::DECLARATION_FALLBACK,
                "Delimiter declaration ignored, using default delimiter",
                "reason" => rejection
            );
            Extraction::default_for(input)
        }
    }
}
