//! Constants used throughout the CLI.

/// Environment variable holding the secret key.
pub const SECRET_ENV: &str = "ENCSTORE_SECRET";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ENCSTORE_LOG";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Key, pattern or index has no value.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid secret, algorithm or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Stored value could not be decrypted with this secret.
    pub const DECRYPT_FAILED: i32 = 5;
}
