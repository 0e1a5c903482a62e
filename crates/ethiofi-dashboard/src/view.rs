//! Per-request dashboard view

use crate::error::DashboardError;
use crate::forecast::{ForecastTable, Scenario};

/// Target inclusion rate in whole percent, `50..=70`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRate(u8);

impl TargetRate {
    /// Lowest accepted target
    pub const MIN: i64 = 50;
    /// Highest accepted target
    pub const MAX: i64 = 70;

    /// Validate a target percent
    pub fn new(percent: i64) -> Result<Self, DashboardError> {
        if (Self::MIN..=Self::MAX).contains(&percent) {
            Ok(Self(percent as u8))
        } else {
            Err(DashboardError::InvalidTarget(percent))
        }
    }

    /// Percent value
    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl Default for TargetRate {
    fn default() -> Self {
        Self(60)
    }
}

impl TryFrom<i64> for TargetRate {
    type Error = DashboardError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Position of the latest projection relative to the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetStatus {
    /// Latest value at or above the target
    Achieved,
    /// Percentage points still missing
    Gap(f64),
}

/// One row of the scenario comparison table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    /// Forecast year
    pub year: i32,
    /// Base scenario
    pub base: f64,
    /// Optimistic scenario
    pub optimistic: f64,
    /// Pessimistic scenario
    pub pessimistic: f64,
    /// `optimistic - pessimistic`
    pub range: f64,
}

/// Everything the page shows for one scenario/target selection
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Selected scenario
    pub scenario: Scenario,
    /// Target percent
    pub target: f64,
    /// Greatest forecast year
    pub latest_year: i32,
    /// Selected scenario's value in the latest year
    pub latest_value: f64,
    /// Achieved or gap
    pub status: TargetStatus,
    /// Comparison rows in table order
    pub comparison: Vec<ComparisonRow>,
    /// `min(latest_value / target, 1.0)`
    pub progress: f64,
}

impl DashboardView {
    /// Compute the view
    ///
    /// When the latest year appears more than once the first such row wins.
    /// `target` is not range-checked here.
    pub fn compute(
        table: &ForecastTable,
        scenario: Scenario,
        target: f64,
    ) -> Result<Self, DashboardError> {
        let latest_year = table.latest_year().ok_or(DashboardError::EmptyForecast)?;
        let latest_row = table
            .rows
            .iter()
            .find(|r| r.year == latest_year)
            .ok_or(DashboardError::EmptyForecast)?;
        let latest_value = scenario.value(latest_row);

        let gap = target - latest_value;
        let status = if gap <= 0.0 {
            TargetStatus::Achieved
        } else {
            TargetStatus::Gap(gap)
        };

        let comparison = table
            .rows
            .iter()
            .map(|r| ComparisonRow {
                year: r.year,
                base: r.base,
                optimistic: r.optimistic,
                pessimistic: r.pessimistic,
                range: r.optimistic - r.pessimistic,
            })
            .collect();

        Ok(Self {
            scenario,
            target,
            latest_year,
            latest_value,
            status,
            comparison,
            progress: (latest_value / target).min(1.0),
        })
    }

    /// Progress message under the progress bar
    pub fn progress_message(&self) -> String {
        if self.progress >= 1.0 {
            "Financial inclusion target achieved!".to_string()
        } else {
            format!("{:.1}% of target achieved", self.progress * 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::ForecastRow;

    fn table() -> ForecastTable {
        ForecastTable {
            rows: vec![
                ForecastRow {
                    year: 2025,
                    base: 49.0,
                    optimistic: 52.0,
                    pessimistic: 46.0,
                },
                ForecastRow {
                    year: 2027,
                    base: 45.0,
                    optimistic: 50.0,
                    pessimistic: 42.0,
                },
                ForecastRow {
                    year: 2026,
                    base: 47.0,
                    optimistic: 51.0,
                    pessimistic: 44.0,
                },
            ],
            raw: String::new(),
        }
    }

    #[test]
    fn test_gap_and_progress() {
        let view = DashboardView::compute(&table(), Scenario::Base, 50.0).unwrap();
        assert_eq!(view.latest_year, 2027);
        assert_eq!(view.latest_value, 45.0);
        assert_eq!(view.status, TargetStatus::Gap(5.0));
        assert!((view.progress - 0.9).abs() < 1e-12);
        assert_eq!(view.progress_message(), "90.0% of target achieved");
    }

    #[test]
    fn test_target_achieved() {
        let view = DashboardView::compute(&table(), Scenario::Base, 45.0).unwrap();
        assert_eq!(view.status, TargetStatus::Achieved);
        assert_eq!(view.progress, 1.0);
        assert_eq!(view.progress_message(), "Financial inclusion target achieved!");
    }

    #[test]
    fn test_progress_capped() {
        let view = DashboardView::compute(&table(), Scenario::Optimistic, 40.0).unwrap();
        assert_eq!(view.latest_value, 50.0);
        assert_eq!(view.progress, 1.0);
    }

    #[test]
    fn test_comparison_range() {
        let view = DashboardView::compute(&table(), Scenario::Pessimistic, 60.0).unwrap();
        let ranges: Vec<f64> = view.comparison.iter().map(|r| r.range).collect();
        assert_eq!(ranges, vec![6.0, 8.0, 7.0]);
        assert_eq!(view.latest_value, 42.0);
    }

    #[test]
    fn test_empty_forecast() {
        let empty = ForecastTable {
            rows: Vec::new(),
            raw: String::new(),
        };
        assert!(matches!(
            DashboardView::compute(&empty, Scenario::Base, 60.0),
            Err(DashboardError::EmptyForecast)
        ));
    }

    #[test]
    fn test_target_rate_bounds() {
        assert_eq!(TargetRate::default().percent(), 60);
        assert!(TargetRate::new(50).is_ok());
        assert!(TargetRate::new(70).is_ok());
        assert!(matches!(TargetRate::new(49), Err(DashboardError::InvalidTarget(49))));
        assert!(TargetRate::new(71).is_err());
    }
}
