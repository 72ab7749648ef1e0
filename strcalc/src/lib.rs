//! strcalc - string calculator
//!
//! Sums numbers written as delimited text. The default delimiter is `,`, line
//! breaks always separate numbers, and a leading `//<char>\n` or
//! `//[<delimiter>]\n` declares a custom delimiter. Values above 1000 are ignored
//! and any negative value fails the whole call with every negative listed.
//!
//! ```
//! assert_eq!(strcalc::add("//;\n1;2\n3"), Ok(6));
//! assert_eq!(
//!     strcalc::add("-1,2,-3").unwrap_err().to_string(),
//!     "Negatives not allowed. [-1, -3]"
//! );
//! ```

// Internal modules
pub mod calculator;
pub mod config;
pub mod delimiter;
#[macro_use]
pub mod logging;
pub mod summation;

// Re-export key types for library consumers
pub use calculator::StringCalculator;
pub use config::{CalculatorPreferences, CoercionPolicy};
pub use delimiter::ParsedInput;
pub use summation::{CalculatorError, CalculatorResult, Summation};

/// Sum the numbers in `input` with default preferences
pub fn add(input: &str) -> CalculatorResult<i64> {
    StringCalculator::new().add(input)
}

/// Split `input` into its effective delimiter and numbers text
pub fn extract_delimiter_and_numbers(input: &str) -> ParsedInput {
    delimiter::extract_delimiter_and_numbers(input)
}
