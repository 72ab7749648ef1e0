//! Summation engine
//!
//! Turns extracted numbers text into a validated sum: line breaks become the
//! active delimiter, tokens are trimmed and coerced, values above the upper bound
//! are dropped, and negatives are collected so they can be reported together.

pub mod coercion;
pub mod error;
pub mod tokens;

use crate::config::CalculatorPreferences;
use crate::delimiter::Extraction;
use crate::log_debug;
use crate::logging::codes;
use serde::{Deserialize, Serialize};

pub use coercion::{coerce, Coerced};
pub use error::{CalculatorError, CalculatorResult};
pub use tokens::{normalize_line_breaks, tokenize, Token};

/// Detailed outcome of a successful summation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summation {
    pub total: i64,
    pub delimiter: String,
    /// Tokens that contributed to the total
    pub accepted: usize,
    /// Tokens dropped for exceeding the upper bound
    pub ignored_above_bound: usize,
    /// Tokens that were empty after trimming
    pub skipped_empty: usize,
    /// Permissive-mode tokens with no numeric prefix
    pub unparsed: usize,
}

impl Summation {
    pub fn token_count(&self) -> usize {
        self.accepted + self.ignored_above_bound + self.skipped_empty + self.unparsed
    }
}

/// Sum the numbers text of an extraction under `preferences`
pub fn sum_numbers(
    extraction: &Extraction<'_>,
    preferences: &CalculatorPreferences,
) -> CalculatorResult<Summation> {
    let delimiter = extraction.delimiter;
    let normalized = normalize_line_breaks(extraction.numbers, delimiter);

    let mut summation = Summation {
        delimiter: delimiter.to_string(),
        ..Summation::default()
    };
    // i128 cannot overflow for any token count the input limits allow
    let mut total: i128 = 0;
    let mut negatives = Vec::new();

    for token in tokenize(&normalized, delimiter) {
        if token.is_empty() {
            summation.skipped_empty += 1;
            continue;
        }

        match coerce(&token, preferences.coercion)? {
            Coerced::Unparsed => {
                log_debug!(code = codes::summation::TOKEN_SKIPPED,
                    "Token has no numeric prefix, skipped",
                    "token" => token.text,
                    "index" => token.index
                );
                summation.unparsed += 1;
            }
            Coerced::AboveRange => summation.ignored_above_bound += 1,
            // Saturated: the literal is below every i64
            Coerced::BelowRange => negatives.push(i64::MIN),
            Coerced::Value(value) if value > preferences.upper_bound => {
                summation.ignored_above_bound += 1
            }
            Coerced::Value(value) if value < 0 => negatives.push(value),
            Coerced::Value(value) => {
                total += i128::from(value);
                summation.accepted += 1;
            }
        }
    }

    if !negatives.is_empty() {
        return Err(CalculatorError::negative_values(negatives));
    }

    summation.total = i64::try_from(total).map_err(|_| CalculatorError::SumOverflow)?;
    Ok(summation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoercionPolicy;
    use crate::delimiter::extract;
    use assert_matches::assert_matches;

    fn sum(input: &str) -> CalculatorResult<Summation> {
        sum_numbers(&extract(input), &CalculatorPreferences::default())
    }

    #[test]
    fn test_counts() {
        let summation = sum("1,,2000,3,").unwrap();
        assert_eq!(summation.total, 4);
        assert_eq!(summation.accepted, 2);
        assert_eq!(summation.ignored_above_bound, 1);
        assert_eq!(summation.skipped_empty, 2);
        assert_eq!(summation.token_count(), 5);
        assert_eq!(summation.delimiter, ",");
    }

    #[test]
    fn test_negatives_collected_in_order() {
        assert_matches!(
            sum("1\n-2\n3,-4"),
            Err(CalculatorError::NegativeValues { values }) if values == vec![-2, -4]
        );
    }

    #[test]
    fn test_negatives_do_not_count_toward_sum_or_bound() {
        assert_matches!(
            sum("-1,1001,-1001"),
            Err(CalculatorError::NegativeValues { values }) if values == vec![-1, -1001]
        );
    }

    #[test]
    fn test_malformed_token_fails_fast() {
        assert_matches!(
            sum("-1,abc,-2"),
            Err(CalculatorError::MalformedToken { token, index: 1 }) if token == "abc"
        );
    }

    #[test]
    fn test_negative_overflow_is_reported_as_negative() {
        assert_matches!(
            sum("-99999999999999999999,1,-5"),
            Err(CalculatorError::NegativeValues { values }) if values == vec![i64::MIN, -5]
        );
    }

    #[test]
    fn test_many_tokens_are_summed() {
        let summation = sum(&"0,".repeat(1_000_001)).unwrap();
        assert_eq!(summation.total, 0);
        assert_eq!(summation.accepted, 1_000_001);
        assert_eq!(summation.skipped_empty, 1);
    }

    #[test]
    fn test_custom_upper_bound() {
        let preferences = CalculatorPreferences::default().with_upper_bound(10);
        let summation = sum_numbers(&extract("5,10,11"), &preferences).unwrap();
        assert_eq!(summation.total, 15);
        assert_eq!(summation.ignored_above_bound, 1);
    }

    #[test]
    fn test_permissive_policy() {
        let preferences = CalculatorPreferences::default().with_coercion(CoercionPolicy::Permissive);
        let summation = sum_numbers(&extract("1x,2,abc"), &preferences).unwrap();
        assert_eq!(summation.total, 3);
        assert_eq!(summation.unparsed, 1);
    }

    #[test]
    fn test_sum_overflow_with_unbounded_preferences() {
        let preferences = CalculatorPreferences::default().with_upper_bound(i64::MAX);
        let input = format!("{},{}", i64::MAX, 1);
        assert_matches!(
            sum_numbers(&extract(&input), &preferences),
            Err(CalculatorError::SumOverflow)
        );
    }
}
