//! Error handling for the record tabs CLI
//!
//! Keeps the error chain for logging while carrying the exit code the
//! process should end with.

use std::error::Error;
use std::fmt;

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use recordtabs_common::{ErrorSeverity, Severity};

/// CLI-specific result type that preserves error information
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type that includes both error information and suggested exit code
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    /// Create a new CLI error with a message and exit code
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// Wrap a domain error, deriving the exit code from its severity
    pub fn from_severity_error<E>(context: impl Into<String>, error: E) -> Self
    where
        E: Severity + Error + Send + Sync + 'static,
    {
        let exit_code = match error.severity() {
            ErrorSeverity::Warning => EXIT_WARNING,
            ErrorSeverity::Error | ErrorSeverity::Critical => EXIT_ERROR,
        };
        Self {
            message: format!("{}: {}", context.into(), error),
            exit_code,
            source: Some(Box::new(error)),
        }
    }

    /// Wrap any error as a failure
    pub fn from_error<E>(context: impl Into<String>, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: format!("{}: {}", context.into(), error),
            exit_code: EXIT_ERROR,
            source: Some(Box::new(error)),
        }
    }

    /// Get the full error chain as a formatted string
    pub fn full_chain(&self) -> String {
        let mut result = self.message.clone();

        let mut current_source = self.source();
        while let Some(err) = current_source {
            result.push_str(&format!("\n  Caused by: {err}"));
            current_source = err.source();
        }

        result
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

/// Convert a CliResult to an exit code, logging the full error chain if needed
pub fn handle_cli_result<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("Error: {}", e.full_chain());
            eprintln!("Error: {}", e);
            e.exit_code
        }
    }
}
