//! Domain-level parse errors

use std::fmt;

/// Errors raised when parsing domain values from free-form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Confidence outside the closed set {low, medium, high}
    InvalidConfidence(String),

    /// Impact direction outside {increase, decrease, neutral}
    InvalidImpactDirection(String),

    /// Unknown record type tag
    InvalidRecordType(String),

    /// Record id that does not follow the `PREFIX_####` shape
    InvalidRecordId(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidConfidence(s) => {
                write!(f, "Invalid confidence '{}': expected low, medium or high", s)
            }
            DomainError::InvalidImpactDirection(s) => write!(
                f,
                "Invalid impact direction '{}': expected increase, decrease or neutral",
                s
            ),
            DomainError::InvalidRecordType(s) => write!(f, "Invalid record type: {}", s),
            DomainError::InvalidRecordId(s) => write!(f, "Invalid record id: {}", s),
        }
    }
}

impl std::error::Error for DomainError {}
