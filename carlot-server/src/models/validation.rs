//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required field absent from the body
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value has the wrong shape (non-numeric id, negative price, ...)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Body could not be parsed at all
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::MalformedBody { reason } => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
