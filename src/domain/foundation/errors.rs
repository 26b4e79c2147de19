//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur when parsing or constructing value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    #[error("Technology '{technology}' is not available for component '{component}'")]
    DisallowedPairing {
        component: String,
        technology: String,
    },

    #[error("Scaling multiplier {actual} is not a preset (expected one of {allowed:?})")]
    NotAPreset { actual: u32, allowed: Vec<u32> },
}

impl ValidationError {
    /// Creates an unknown value error for the given enumeration kind.
    pub fn unknown_value(kind: &'static str, value: impl Into<String>) -> Self {
        ValidationError::UnknownValue {
            kind,
            value: value.into(),
        }
    }

    /// Creates a disallowed pairing error.
    pub fn disallowed_pairing(component: impl Into<String>, technology: impl Into<String>) -> Self {
        ValidationError::DisallowedPairing {
            component: component.into(),
            technology: technology.into(),
        }
    }

    /// Creates a not-a-preset error.
    pub fn not_a_preset(actual: u32, allowed: Vec<u32>) -> Self {
        ValidationError::NotAPreset { actual, allowed }
    }
}

/// Error codes. The core only ever fails in two ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Caller supplied a value outside the closed sets, or a disallowed pairing.
    InvalidArgument,

    /// The reference dataset does not match the component/technology schema.
    DataIntegrity,
}

impl ErrorCode {
    /// Both kinds are caller or data faults; retrying cannot help.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::DataIntegrity => "DATA_INTEGRITY",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    /// Creates a data integrity error.
    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DataIntegrity, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns true if this is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        self.code == ErrorCode::InvalidArgument
    }

    /// Returns true if this is a data integrity error.
    pub fn is_data_integrity(&self) -> bool {
        self.code == ErrorCode::DataIntegrity
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let message = err.to_string();
        match err {
            ValidationError::UnknownValue { kind, value } => {
                DomainError::invalid_argument(message)
                    .with_detail("kind", kind)
                    .with_detail("value", value)
            }
            ValidationError::DisallowedPairing {
                component,
                technology,
            } => DomainError::invalid_argument(message)
                .with_detail("component", component)
                .with_detail("technology", technology),
            ValidationError::NotAPreset { actual, .. } => {
                DomainError::invalid_argument(message).with_detail("multiplier", actual.to_string())
            }
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
