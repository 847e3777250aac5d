//! Constants used throughout the CLI.

/// Data file used when neither `--data` nor the config names one.
pub const DEFAULT_DATA_FILE: &str = "base.txt";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "CARBASE_LOG";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Data file not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}
