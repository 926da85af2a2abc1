//! Error handling.
//!
//! This module provides a custom error type for the project.

use crate::calculator::InputField;
use colored::*;
use std::fmt;

/// Result type alias for the calculator application.
pub type Result<T> = std::result::Result<T, RentCalcError>;

/// Main error type for the calculator application.
#[derive(Debug)]
pub enum RentCalcError {
    /// Invalid command line arguments.
    InvalidArguments(String),

    /// IO error.
    IoError(std::io::Error),

    /// TUI rendering or event error.
    TuiError(String),

    /// Terminal related error.
    TerminalError(String),

    /// The active amount is missing, non-numeric or not positive.
    ValidationError { field: InputField, input: String },

    /// File access error.
    FileAccessError { path: String, reason: String },
}

impl RentCalcError {
    /// Message text without terminal styling, used by the in-app error banner
    pub fn user_message(&self) -> String {
        match self {
            RentCalcError::InvalidArguments(msg) => format!("Invalid arguments: {}", msg),
            RentCalcError::IoError(err) => format!("IO error: {}", err),
            RentCalcError::TuiError(err) => format!("TUI error: {}", err),
            RentCalcError::TerminalError(err) => format!(
                "Terminal error: {}\n Try running in a proper terminal.",
                err
            ),
            RentCalcError::ValidationError { field, .. } => field.invalid_message().to_string(),
            RentCalcError::FileAccessError { path, reason } => {
                format!("File access error: Path: {}\n Reason: {}", path, reason)
            }
        }
    }

    /// Create a terminal error with context
    pub fn terminal_error(err: &str) -> Self {
        RentCalcError::TerminalError(err.to_string())
    }

    /// Create a file access error with context
    pub fn file_access_error(path: &str, reason: &str) -> Self {
        RentCalcError::FileAccessError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a validation error for the given field
    pub fn validation_error(field: InputField, input: &str) -> Self {
        RentCalcError::ValidationError {
            field,
            input: input.to_string(),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            RentCalcError::ValidationError { .. } => true,
            RentCalcError::FileAccessError { .. } => true,
            RentCalcError::InvalidArguments(_) => false,
            RentCalcError::IoError(_) => false,
            RentCalcError::TuiError(_) => false,
            RentCalcError::TerminalError(_) => false,
        }
    }

    /// Get user-friendly recovery suggestion
    pub fn get_recovery_suggestion(&self) -> Option<String> {
        match self {
            RentCalcError::ValidationError { field, .. } => Some(format!(
                "Enter a positive number for the {}.",
                field.description()
            )),
            RentCalcError::FileAccessError { .. } => {
                Some("Check file permissions and try again.".to_string())
            }
            RentCalcError::InvalidArguments(_) => {
                Some("Run with --help to see the available options.".to_string())
            }
            _ => None,
        }
    }
}

impl fmt::Display for RentCalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message().red().bold())
    }
}

impl std::error::Error for RentCalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RentCalcError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RentCalcError {
    fn from(err: std::io::Error) -> Self {
        RentCalcError::IoError(err)
    }
}
