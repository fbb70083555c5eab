//! Validation error types

use std::fmt;

/// Validation error for submitted forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were left empty
    Required { fields: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { fields } => write!(f, "please enter {}", fields),
        }
    }
}

impl std::error::Error for ValidationError {}
