//! CLI error types and exit code mapping.

use std::fmt;

use encstore_core::EncStoreError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Key, pattern or index has nothing stored
    NotFound(String),

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound(message) | CliError::InvalidInput(message) => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>) -> Self {
        CliError::NotFound(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound(_) => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error that reaches `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<EncStoreError>() {
        Some(EncStoreError::InvalidSecretKey { .. }) => exit_codes::INVALID_INPUT,
        Some(EncStoreError::UnsupportedAlgorithm(_)) => exit_codes::INVALID_INPUT,
        Some(EncStoreError::Crypto(_)) | Some(EncStoreError::IncorrectSecret) => {
            exit_codes::DECRYPT_FAILED
        }
        _ => 1,
    }
}
