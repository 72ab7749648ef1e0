//! Error types for summation with logging integration

use crate::logging::codes;
use thiserror::Error;

/// Result type for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// One or more negative values were present, in encounter order
    #[error("Negatives not allowed. [{}]", join_values(.values))]
    NegativeValues { values: Vec<i64> },

    /// Token is not a signed integer literal
    #[error("Malformed token '{token}' at position {index}: expected a signed integer")]
    MalformedToken { token: String, index: usize },

    /// Input larger than the compile-time byte limit
    #[error("Input limit exceeded: {limit} is {actual}, maximum allowed is {max}")]
    LimitExceeded {
        limit: &'static str,
        actual: usize,
        max: usize,
    },

    /// Accepted values do not fit the result type
    #[error("Sum overflows a 64-bit integer")]
    SumOverflow,
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl CalculatorError {
    /// Create negative values error
    pub fn negative_values(values: Vec<i64>) -> Self {
        Self::NegativeValues { values }
    }

    /// Create malformed token error
    pub fn malformed_token(token: &str, index: usize) -> Self {
        Self::MalformedToken {
            token: token.to_string(),
            index,
        }
    }

    /// Create limit exceeded error
    pub fn limit_exceeded(limit: &'static str, actual: usize, max: usize) -> Self {
        Self::LimitExceeded { limit, actual, max }
    }

    /// Negative values carried by the error, if any
    pub fn negatives(&self) -> Option<&[i64]> {
        match self {
            Self::NegativeValues { values } => Some(values),
            _ => None,
        }
    }

    /// Get appropriate code for logging system
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::NegativeValues { .. } => codes::summation::NEGATIVE_VALUES,
            Self::MalformedToken { .. } => codes::summation::MALFORMED_TOKEN,
            Self::LimitExceeded { .. } => codes::input::INPUT_TOO_LARGE,
            Self::SumOverflow => codes::system::INTERNAL_ERROR,
        }
    }

    /// Check if error requires halt
    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }

    /// Get error type for context
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::NegativeValues { .. } => "NegativeValues",
            Self::MalformedToken { .. } => "MalformedToken",
            Self::LimitExceeded { .. } => "LimitExceeded",
            Self::SumOverflow => "SumOverflow",
        }
    }
}
