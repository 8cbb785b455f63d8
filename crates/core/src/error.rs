//! Error types for estimation requests
//!
//! Every error is local to one estimate request: the caller may correct the
//! inputs and re-submit. Nothing here is fatal to the process and there is no
//! retry logic (pure computation, no transient failures).

use std::fmt;

/// Errors that can occur while validating inputs or resolving a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FootprintError {
    /// A numeric input violates a stated invariant. Carries the offending
    /// field name; estimation is aborted before any arithmetic runs.
    InvalidParameter {
        /// Name of the field that failed validation
        field: &'static str,
        /// Human-readable description of the violated invariant
        reason: String,
    },
    /// A location name was not found in the registry. Caught at the
    /// selection boundary before estimation runs.
    UnknownLocation(String),
}

impl FootprintError {
    /// Shorthand constructor for an `InvalidParameter` error
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FootprintError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FootprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FootprintError::InvalidParameter { field, reason } => {
                write!(f, "invalid parameter `{field}`: {reason}")
            }
            FootprintError::UnknownLocation(name) => {
                write!(f, "unknown location: {name}")
            }
        }
    }
}

impl std::error::Error for FootprintError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_field() {
        let err = FootprintError::invalid("pue", "must be >= 1.0, got 0.5");
        assert_eq!(err.to_string(), "invalid parameter `pue`: must be >= 1.0, got 0.5");
    }

    #[test]
    fn test_display_unknown_location() {
        let err = FootprintError::UnknownLocation("Atlantis".to_string());
        assert_eq!(err.to_string(), "unknown location: Atlantis");
    }
}
