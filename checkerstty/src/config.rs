//! Configuration for the checkerstty driver.
//!
//! Every tunable has a compile-time default and can be overridden through a
//! dedicated environment variable. Command-line flags win over both; that
//! merge happens in `main`.

use std::path::PathBuf;

use checkers::config::{DEFAULT_BOARD_SIZE, DEFAULT_STARTING_ROWS};
use checkers::CapturePolicy;

/// Default directory for the rolling log file.
const DEFAULT_LOG_DIR: &str = "logs";

/// Get the board edge length.
///
/// Priority:
/// 1. `CHECKERSTTY_BOARD_SIZE` env variable if set (falls back to the default
///    if the value cannot be parsed as a `usize`)
/// 2. `8` as fallback
pub fn get_board_size() -> usize {
    parse_usize_var("CHECKERSTTY_BOARD_SIZE", DEFAULT_BOARD_SIZE)
}

/// Get the number of rows each side starts with.
///
/// Priority:
/// 1. `CHECKERSTTY_STARTING_ROWS` env variable if set and numeric
/// 2. `3` as fallback
pub fn get_starting_rows() -> usize {
    parse_usize_var("CHECKERSTTY_STARTING_ROWS", DEFAULT_STARTING_ROWS)
}

/// Get the capture policy.
///
/// Priority:
/// 1. `CHECKERSTTY_CAPTURE_POLICY` env variable (`strict` or `legacy`)
/// 2. `strict` as fallback, also used when the variable holds anything else
pub fn get_capture_policy() -> CapturePolicy {
    let value = std::env::var("CHECKERSTTY_CAPTURE_POLICY").ok();
    capture_policy_or_default(value.as_deref())
}

/// Get the directory the rolling log file is written to.
///
/// Priority:
/// 1. `CHECKERSTTY_LOG_DIR` env variable if set
/// 2. `./logs` as fallback
pub fn get_log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CHECKERSTTY_LOG_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}

fn parse_usize_var(name: &str, default: usize) -> usize {
    let value = std::env::var(name).ok();
    usize_or_default(value.as_deref(), default)
}

/// Parse a numeric setting, keeping `default` for missing or non-numeric input.
fn usize_or_default(value: Option<&str>, default: usize) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

/// Parse a capture policy, keeping the default for missing or unknown input.
fn capture_policy_or_default(value: Option<&str>) -> CapturePolicy {
    match value {
        Some(value) => value.parse().unwrap_or_else(|err| {
            tracing::warn!("ignoring CHECKERSTTY_CAPTURE_POLICY: {}", err);
            CapturePolicy::default()
        }),
        None => CapturePolicy::default(),
    }
}
