//! Error types for the phonebook client
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for phonebook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the phonebook client
#[derive(Error, Debug)]
pub enum Error {
    /// Local validation failure (blocks the action before any request)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Any failed round trip to the contacts API
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies all land
    /// here. Callers only distinguish success from failure.
    #[error("Remote error: {0}")]
    Remote(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a remote API error
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from the contacts API
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

/// Reasons a candidate contact is rejected before submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name or number left empty
    #[error("missing field")]
    MissingField,

    /// Another contact already uses this name
    #[error("duplicate name: {name}")]
    DuplicateName {
        /// The colliding name
        name: String,
    },

    /// Another contact already uses this number
    #[error("duplicate number: {number}")]
    DuplicateNumber {
        /// The colliding number
        number: String,
    },
}

impl ValidationError {
    /// Message shown to the user when the submission is rejected
    pub fn notification_text(&self) -> String {
        match self {
            ValidationError::MissingField => "Must add both name & number".to_string(),
            ValidationError::DuplicateName { name } => {
                format!("{} already added! Can't add contact with same name!", name)
            }
            ValidationError::DuplicateNumber { number } => {
                format!("'{}' already added to other person!", number)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: Error = ValidationError::MissingField.into();
        assert!(matches!(err, Error::Validation(ValidationError::MissingField)));
        assert!(!err.is_remote());
    }

    #[test]
    fn test_notification_text_names_the_collision() {
        let dup = ValidationError::DuplicateName {
            name: "Ann".to_string(),
        };
        assert_eq!(
            dup.notification_text(),
            "Ann already added! Can't add contact with same name!"
        );

        let dup = ValidationError::DuplicateNumber {
            number: "123".to_string(),
        };
        assert_eq!(dup.notification_text(), "'123' already added to other person!");
    }

    #[test]
    fn test_remote_error_display() {
        let err = Error::remote("GET failed: 500");
        assert!(err.is_remote());
        assert_eq!(err.to_string(), "Remote error: GET failed: 500");
    }
}
