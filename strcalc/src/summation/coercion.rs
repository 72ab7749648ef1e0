//! Token to integer coercion under the configured policy

use super::error::{CalculatorError, CalculatorResult};
use super::tokens::Token;
use crate::config::CoercionPolicy;
use std::num::IntErrorKind;

/// Outcome of coercing one non-empty token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerced {
    Value(i64),
    /// Positive literal too large for i64; always above any bound
    AboveRange,
    /// Negative literal too small for i64; reported as `i64::MIN`
    BelowRange,
    /// Permissive mode only: no leading numeric characters
    Unparsed,
}

pub fn coerce(token: &Token<'_>, policy: CoercionPolicy) -> CalculatorResult<Coerced> {
    let literal_length = signed_integer_prefix_length(token.text);

    match policy {
        CoercionPolicy::Strict if literal_length != token.text.len() => {
            Err(CalculatorError::malformed_token(token.text, token.index))
        }
        CoercionPolicy::Permissive if literal_length == 0 => Ok(Coerced::Unparsed),
        _ => parse_literal(&token.text[..literal_length], token),
    }
}

/// Byte length of the leading `[+-]?[0-9]+` run, or 0 if there is none
fn signed_integer_prefix_length(text: &str) -> usize {
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 {
        0
    } else {
        sign + digits
    }
}

fn parse_literal(literal: &str, token: &Token<'_>) -> CalculatorResult<Coerced> {
    match literal.parse::<i64>() {
        Ok(value) => Ok(Coerced::Value(value)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(Coerced::AboveRange),
            IntErrorKind::NegOverflow => Ok(Coerced::BelowRange),
            _ => Err(CalculatorError::malformed_token(token.text, token.index)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn token(text: &str) -> Token<'_> {
        Token { text, index: 0 }
    }

    #[test]
    fn test_prefix_length() {
        assert_eq!(signed_integer_prefix_length("123"), 3);
        assert_eq!(signed_integer_prefix_length("-12abc"), 3);
        assert_eq!(signed_integer_prefix_length("+7"), 2);
        assert_eq!(signed_integer_prefix_length("-"), 0);
        assert_eq!(signed_integer_prefix_length("abc"), 0);
        assert_eq!(signed_integer_prefix_length("--1"), 0);
    }

    #[test]
    fn test_strict_accepts_literals() {
        assert_eq!(coerce(&token("42"), CoercionPolicy::Strict), Ok(Coerced::Value(42)));
        assert_eq!(coerce(&token("-3"), CoercionPolicy::Strict), Ok(Coerced::Value(-3)));
        assert_eq!(coerce(&token("+5"), CoercionPolicy::Strict), Ok(Coerced::Value(5)));
        assert_eq!(coerce(&token("007"), CoercionPolicy::Strict), Ok(Coerced::Value(7)));
    }

    #[test]
    fn test_strict_rejects_trailing_garbage() {
        assert_matches!(
            coerce(&token("12abc"), CoercionPolicy::Strict),
            Err(CalculatorError::MalformedToken { ref token, index: 0 }) if token == "12abc"
        );
        assert_matches!(
            coerce(&token("1 2"), CoercionPolicy::Strict),
            Err(CalculatorError::MalformedToken { .. })
        );
        assert_matches!(
            coerce(&token("1.5"), CoercionPolicy::Strict),
            Err(CalculatorError::MalformedToken { .. })
        );
    }

    #[test]
    fn test_permissive_uses_leading_prefix() {
        assert_eq!(
            coerce(&token("12abc"), CoercionPolicy::Permissive),
            Ok(Coerced::Value(12))
        );
        assert_eq!(
            coerce(&token("-4;x"), CoercionPolicy::Permissive),
            Ok(Coerced::Value(-4))
        );
        assert_eq!(
            coerce(&token("abc"), CoercionPolicy::Permissive),
            Ok(Coerced::Unparsed)
        );
    }

    #[test]
    fn test_overflow_handling() {
        assert_eq!(
            coerce(&token("99999999999999999999"), CoercionPolicy::Strict),
            Ok(Coerced::AboveRange)
        );
        assert_eq!(
            coerce(&token("-99999999999999999999"), CoercionPolicy::Strict),
            Ok(Coerced::BelowRange)
        );
        assert_eq!(
            coerce(&token("-99999999999999999999kg"), CoercionPolicy::Permissive),
            Ok(Coerced::BelowRange)
        );
    }
}
