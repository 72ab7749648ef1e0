// build.rs - TOML-driven compile-time limit generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    input: InputLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct InputLimits {
    max_input_bytes: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=STRCALC_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=STRCALC_CONFIG_DIR");

    let profile = env::var("STRCALC_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("STRCALC_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of the strcalc directory
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig) {
    const MIN_INPUT_BYTES: usize = 1_048_576;
    const ABSOLUTE_MAX_INPUT_BYTES: usize = 1_073_741_824;

    if config.input.max_input_bytes < MIN_INPUT_BYTES {
        panic!("LIMITS: max_input_bytes too small (min: {})", MIN_INPUT_BYTES);
    }

    if config.input.max_input_bytes > ABSOLUTE_MAX_INPUT_BYTES {
        panic!("LIMITS: max_input_bytes exceeds absolute maximum");
    }

    if config.logging.max_log_message_length < 64 {
        panic!("LIMITS: max_log_message_length too small (min: 64)");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod input {{
        pub const MAX_INPUT_BYTES: usize = {};
    }}

    pub mod logging {{
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        config.input.max_input_bytes,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).expect("Failed to write generated constants");
}
