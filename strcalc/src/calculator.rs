//! String calculator service
//!
//! Wires delimiter extraction and summation together, enforces the compile-time
//! input limit, and reports outcomes to the logging system.

use crate::config::compile_time::input::MAX_INPUT_BYTES;
use crate::config::CalculatorPreferences;
use crate::delimiter;
use crate::logging::codes;
use crate::summation::{self, CalculatorError, CalculatorResult, Summation};
use crate::{log_error, log_success};

/// Stateless calculator configured by [`CalculatorPreferences`]
#[derive(Debug, Clone, Default)]
pub struct StringCalculator {
    preferences: CalculatorPreferences,
}

impl StringCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferences(preferences: CalculatorPreferences) -> Self {
        Self { preferences }
    }

    pub fn preferences(&self) -> &CalculatorPreferences {
        &self.preferences
    }

    /// Sum the numbers in `input`
    pub fn add(&self, input: &str) -> CalculatorResult<i64> {
        self.add_detailed(input).map(|summation| summation.total)
    }

    /// Sum the numbers in `input`, reporting how every token was handled
    pub fn add_detailed(&self, input: &str) -> CalculatorResult<Summation> {
        if input.is_empty() {
            return Ok(Summation {
                delimiter: delimiter::DEFAULT_DELIMITER.to_string(),
                ..Summation::default()
            });
        }

        match self.run(input) {
            Ok(summation) => {
                log_success!(codes::success::SUMMATION_COMPLETE, "Summation completed",
                    "total" => summation.total,
                    "accepted" => summation.accepted,
                    "ignored_above_bound" => summation.ignored_above_bound,
                    "skipped_empty" => summation.skipped_empty
                );
                Ok(summation)
            }
            Err(error) => {
                log_error!(error.error_code(), &error.to_string(),
                    "error_type" => error.error_type(),
                    "input_length" => input.len(),
                    "coercion" => self.preferences.coercion.as_str()
                );
                Err(error)
            }
        }
    }

    fn run(&self, input: &str) -> CalculatorResult<Summation> {
        check_input_size(input.len())?;

        let extraction = delimiter::extract(input);
        summation::sum_numbers(&extraction, &self.preferences)
    }
}

fn check_input_size(length: usize) -> CalculatorResult<()> {
    if length > MAX_INPUT_BYTES {
        return Err(CalculatorError::limit_exceeded(
            "input_bytes",
            length,
            MAX_INPUT_BYTES,
        ));
    }
    Ok(())
}
