//! Record type tags of the unified dataset

use crate::error::DomainError;

/// The `record_type` tag that distinguishes rows of the dataset
///
/// Observations, events and targets share the main sheet; impact links live
/// in their own sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    /// A measured indicator value at a point in time
    Observation,

    /// A dated occurrence not tied to a numeric indicator
    Event,

    /// A policy target for an indicator
    Target,

    /// A hypothesized effect of an event on an indicator
    ImpactLink,
}

impl RecordType {
    /// Get the tag as stored in the dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Observation => "observation",
            RecordType::Event => "event",
            RecordType::Target => "target",
            RecordType::ImpactLink => "impact_link",
        }
    }

    /// Parse a tag (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "observation" => Some(RecordType::Observation),
            "event" => Some(RecordType::Event),
            "target" => Some(RecordType::Target),
            "impact_link" => Some(RecordType::ImpactLink),
            _ => None,
        }
    }

    /// Whether rows of this type belong on the main sheet
    pub fn is_main_sheet(&self) -> bool {
        !matches!(self, RecordType::ImpactLink)
    }
}

impl std::str::FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidRecordType(s.to_string()))
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
