//! Impact direction of an event on an indicator

use crate::error::DomainError;

/// Hypothesized direction of an event's effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactDirection {
    /// The event is expected to raise the indicator
    Increase,

    /// The event is expected to lower the indicator
    Decrease,

    /// No expected effect
    Neutral,
}

impl ImpactDirection {
    /// Get the direction name as stored in the dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactDirection::Increase => "increase",
            ImpactDirection::Decrease => "decrease",
            ImpactDirection::Neutral => "neutral",
        }
    }

    /// Parse a direction (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "increase" => Some(ImpactDirection::Increase),
            "decrease" => Some(ImpactDirection::Decrease),
            "neutral" => Some(ImpactDirection::Neutral),
            _ => None,
        }
    }
}

impl std::str::FromStr for ImpactDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidImpactDirection(s.to_string()))
    }
}

impl std::fmt::Display for ImpactDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for dir in [
            ImpactDirection::Increase,
            ImpactDirection::Decrease,
            ImpactDirection::Neutral,
        ] {
            assert_eq!(ImpactDirection::parse(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn test_invalid_direction() {
        assert!("up".parse::<ImpactDirection>().is_err());
    }
}
