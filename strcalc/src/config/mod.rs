//! Configuration module for strcalc
//! Compile-time limits are generated from TOML configuration by build.rs

// Include generated constants from build.rs
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

pub use runtime::{CalculatorPreferences, CoercionPolicy, LogLevel, LoggingPreferences};

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("STRCALC_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("STRCALC_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time;

    #[test]
    fn test_generated_limits_are_sane() {
        assert!(compile_time::input::MAX_INPUT_BYTES >= 1_048_576);
        assert!(compile_time::logging::MAX_LOG_MESSAGE_LENGTH >= 64);
    }

    #[test]
    fn test_source_info() {
        let info = super::build_info::source_info();
        assert!(info.starts_with("Generated from "));
        assert!(info.ends_with(".toml"));
    }
}
