//! Installing the console sink from explicit preferences
//!
//! Kept in its own binary: the global sink can only be installed once per process.

use strcalc::config::LoggingPreferences;
use strcalc::logging::{self, LogLevel};

#[test]
fn preferences_configure_the_global_sink() {
    let preferences =
        LoggingPreferences::from_lookup(|_| None).with_min_log_level(LogLevel::Error);
    assert!(!logging::is_initialized());

    logging::init_global_logging_with_preferences(preferences.clone()).unwrap();

    let logger = logging::try_get_global_logger().unwrap();
    assert_eq!(logger.min_level(), LogLevel::Error);
    assert!(logging::is_enabled(LogLevel::Error));
    assert!(!logging::is_enabled(LogLevel::Warning));

    // Preferences and sink are both fixed after the first call
    assert!(logging::init_global_logging_with_preferences(preferences).is_err());
    assert!(logging::init_global_logging().is_err());
}
