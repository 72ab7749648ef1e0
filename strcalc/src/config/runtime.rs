// RUNTIME PREFERENCES

use serde::{Deserialize, Serialize};
use std::env;

pub use crate::logging::events::LogLevel;

/// Values strictly above this bound are dropped from the sum
pub const DEFAULT_UPPER_BOUND: i64 = 1000;

/// How a trimmed token is turned into an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionPolicy {
    /// Token must be a complete signed integer literal
    #[default]
    Strict,
    /// Leading `[+-]?[0-9]+` prefix is used, trailing characters ignored
    Permissive,
}

impl CoercionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoercionPolicy::Strict => "strict",
            CoercionPolicy::Permissive => "permissive",
        }
    }
}

/// Parse coercion policy from string (used for environment variables)
fn parse_coercion_policy(policy: &str) -> Option<CoercionPolicy> {
    match policy.trim().to_lowercase().as_str() {
        "strict" => Some(CoercionPolicy::Strict),
        "permissive" | "lenient" => Some(CoercionPolicy::Permissive),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorPreferences {
    /// Inclusive upper bound for values that count toward the sum
    pub upper_bound: i64,

    /// Token coercion policy
    pub coercion: CoercionPolicy,
}

impl Default for CalculatorPreferences {
    fn default() -> Self {
        Self {
            upper_bound: DEFAULT_UPPER_BOUND,
            coercion: CoercionPolicy::Strict,
        }
    }
}

impl CalculatorPreferences {
    /// Preferences overridden from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Preferences overridden by `lookup(variable name)`; unset or unparsable
    /// values keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            upper_bound: lookup(env_vars::UPPER_BOUND)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.upper_bound),
            coercion: lookup(env_vars::COERCION)
                .and_then(|v| parse_coercion_policy(&v))
                .unwrap_or(defaults.coercion),
        }
    }

    pub fn with_upper_bound(mut self, upper_bound: i64) -> Self {
        self.upper_bound = upper_bound;
        self
    }

    pub fn with_coercion(mut self, coercion: CoercionPolicy) -> Self {
        self.coercion = coercion;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to emit JSON lines instead of plain text
    pub use_structured_logging: bool,

    /// Minimum level that reaches the sink
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }
}

impl LoggingPreferences {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            use_structured_logging: lookup(env_vars::LOGGING_USE_STRUCTURED)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(false),
            min_log_level: lookup(env_vars::LOGGING_MIN_LEVEL)
                .and_then(|v| parse_log_level(v.trim()))
                .unwrap_or(LogLevel::Warning),
        }
    }

    pub fn with_min_log_level(mut self, level: LogLevel) -> Self {
        self.min_log_level = level;
        self
    }
}

/// Parse log level from string (used for environment variables)
pub(crate) fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Calculator
    pub const UPPER_BOUND: &str = "STRCALC_UPPER_BOUND";
    pub const COERCION: &str = "STRCALC_COERCION";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "STRCALC_LOGGING_USE_STRUCTURED";
    pub const LOGGING_MIN_LEVEL: &str = "STRCALC_LOGGING_MIN_LEVEL";
}
