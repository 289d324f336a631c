//! Error types for record tab configuration

use recordtabs_common::{ErrorSeverity, Severity};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration parsing failed
    #[error("Failed to parse configuration{}: {source}", display_path(path))]
    ParseError {
        path: Option<PathBuf>,
        source: Box<figment::Error>,
    },

    /// Environment variable substitution failed
    #[error("Environment variable error: {message}")]
    EnvironmentError { message: String },

    /// Configuration validation failed
    #[error("Configuration validation failed: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    /// Wrap a figment extraction error, optionally naming the offending file
    pub fn parse_error(path: Option<PathBuf>, source: figment::Error) -> Self {
        Self::ParseError {
            path,
            source: Box::new(source),
        }
    }

    /// Create an environment substitution error
    pub fn environment_error(message: impl Into<String>) -> Self {
        Self::EnvironmentError {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

impl Severity for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // A broken file means the site runs on defaults it didn't ask for
            ConfigError::ParseError { .. } => ErrorSeverity::Error,
            ConfigError::ValidationError { .. } => ErrorSeverity::Error,
            ConfigError::EnvironmentError { .. } => ErrorSeverity::Warning,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        assert_eq!(
            ConfigError::environment_error("missing").severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(
            ConfigError::validation_error("bad").severity(),
            ErrorSeverity::Error
        );
        let parse = ConfigError::parse_error(None, figment::Error::from("bad".to_string()));
        assert_eq!(parse.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_parse_error_display_names_path() {
        let err = ConfigError::parse_error(
            Some(PathBuf::from("recordtabs.toml")),
            figment::Error::from("invalid type".to_string()),
        );
        let message = err.to_string();
        assert!(message.contains("recordtabs.toml"));
        assert!(message.contains("invalid type"));
    }
}
