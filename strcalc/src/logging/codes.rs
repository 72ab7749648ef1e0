//! Consolidated diagnostic codes and classification system
//!
//! Single source of truth for every code the calculator emits, together with the
//! metadata used to classify and describe it.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Input limit codes
pub mod input {
    use super::Code;

    pub const INPUT_TOO_LARGE: Code = Code::new("E010");
}

/// Delimiter declaration codes
pub mod delimiter {
    use super::Code;

    pub const DECLARATION_FALLBACK: Code = Code::new("W020");
}

/// Summation error codes
pub mod summation {
    use super::Code;

    pub const NEGATIVE_VALUES: Code = Code::new("E030");
    pub const MALFORMED_TOKEN: Code = Code::new("E031");
    pub const TOKEN_SKIPPED: Code = Code::new("D030");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const DELIMITER_EXTRACTED: Code = Code::new("I020");
    pub const SUMMATION_COMPLETE: Code = Code::new("I030");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

/// Metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Internal calculator error",
                "Report the input that triggered the failure",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::High,
                true,
                false,
                "Logging system initialization failed",
                "Initialize global logging once per process",
            ),
            ErrorMetadata::new(
                "E010",
                "Input",
                Severity::High,
                false,
                true,
                "Input exceeds the configured maximum size",
                "Split the input or raise max_input_bytes in the build profile",
            ),
            ErrorMetadata::new(
                "W020",
                "Delimiter",
                Severity::Low,
                true,
                false,
                "Delimiter declaration did not match the grammar; default delimiter used",
                "Use //<char>\\n or //[<delimiter>]\\n to declare a delimiter",
            ),
            ErrorMetadata::new(
                "E030",
                "Summation",
                Severity::Medium,
                false,
                false,
                "Negative values are not allowed",
                "Remove negative values from the input",
            ),
            ErrorMetadata::new(
                "E031",
                "Summation",
                Severity::Medium,
                false,
                false,
                "Token is not a valid integer literal",
                "Ensure every token between delimiters is a signed integer",
            ),
            ErrorMetadata::new(
                "D030",
                "Summation",
                Severity::Low,
                true,
                false,
                "Permissive coercion skipped a token with no numeric prefix",
                "No action required",
            ),
            ErrorMetadata::new(
                "I001",
                "System",
                Severity::Low,
                true,
                false,
                "Logging system initialized",
                "No action required",
            ),
            ErrorMetadata::new(
                "I020",
                "Delimiter",
                Severity::Low,
                true,
                false,
                "Custom delimiter declaration parsed",
                "No action required",
            ),
            ErrorMetadata::new(
                "I030",
                "Summation",
                Severity::Low,
                true,
                false,
                "Summation completed",
                "No action required",
            ),
        ];

        entries.into_iter().map(|m| (m.code, m)).collect()
    })
}

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Get complete metadata for a code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get severity for a code
pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if a code is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|m| m.recoverable)
        .unwrap_or(false)
}

/// Check if a code requires halting
pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code)
        .map(|m| m.requires_halt)
        .unwrap_or(false)
}

/// Get description for a code
pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for a code
pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category for a code
pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.category)
        .unwrap_or("Unknown")
}
