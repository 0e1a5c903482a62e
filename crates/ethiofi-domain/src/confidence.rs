//! Confidence module - qualitative reliability of a record's source

use crate::error::DomainError;

/// Reliability rating attached to every record
///
/// A closed set: anything other than low/medium/high is rejected at parse
/// time so the dataset never carries free-form confidence strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Confidence {
    /// Weak or indirect source
    Low,

    /// Reasonable source, not independently verified
    #[default]
    Medium,

    /// Official or primary source
    High,
}

impl Confidence {
    /// Get the confidence name as stored in the dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// Parse a confidence level (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Confidence::Low),
            "medium" => Some(Confidence::Medium),
            "high" => Some(Confidence::High),
            _ => None,
        }
    }
}

impl std::str::FromStr for Confidence {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidConfidence(s.to_string()))
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
