//! Input types for enrichment calls
//!
//! Each input carries the required fields positionally through `new` and
//! the optional ones through `with_*` builders.

use ethiofi_domain::{CellValue, Confidence, Extras, ImpactDirection, RecordType};

/// Fields for a new observation (or target)
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationInput {
    /// Thematic pillar
    pub pillar: String,
    /// Indicator display name
    pub indicator: String,
    /// Indicator code
    pub indicator_code: String,
    /// Measured value
    pub value_numeric: f64,
    /// Observation date (`YYYY-MM-DD`)
    pub observation_date: String,
    /// Source name
    pub source_name: String,
    /// Source URL
    pub source_url: String,
    /// Source reliability (default medium)
    pub confidence: Confidence,
    /// `observation` (default) or `target`
    pub record_type: RecordType,
    /// Collector; the configured default when unset
    pub collected_by: Option<String>,
    /// Source excerpt
    pub original_text: Option<String>,
    /// Notes
    pub notes: Option<String>,
    /// Additional attributes (e.g. `gender`)
    pub extras: Extras,
}

impl ObservationInput {
    /// Required fields of an observation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pillar: impl Into<String>,
        indicator: impl Into<String>,
        indicator_code: impl Into<String>,
        value_numeric: f64,
        observation_date: impl Into<String>,
        source_name: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            pillar: pillar.into(),
            indicator: indicator.into(),
            indicator_code: indicator_code.into(),
            value_numeric,
            observation_date: observation_date.into(),
            source_name: source_name.into(),
            source_url: source_url.into(),
            confidence: Confidence::default(),
            record_type: RecordType::Observation,
            collected_by: None,
            original_text: None,
            notes: None,
            extras: Extras::new(),
        }
    }

    /// Set the confidence level
    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    /// Record as a target instead of an observation
    pub fn as_target(mut self) -> Self {
        self.record_type = RecordType::Target;
        self
    }

    /// Set the collector
    pub fn with_collector(mut self, collected_by: impl Into<String>) -> Self {
        self.collected_by = Some(collected_by.into());
        self
    }

    /// Set the source excerpt
    pub fn with_original_text(mut self, text: impl Into<String>) -> Self {
        self.original_text = Some(text.into());
        self
    }

    /// Set notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach an extra attribute
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// Fields for a new event
#[derive(Debug, Clone, PartialEq)]
pub struct EventInput {
    /// Event category
    pub category: String,
    /// Event date (`YYYY-MM-DD`)
    pub event_date: String,
    /// Source name
    pub source_name: String,
    /// Source URL
    pub source_url: String,
    /// What happened; stored as the `indicator` column
    pub description: String,
    /// Source reliability (default medium)
    pub confidence: Confidence,
    /// Collector; the configured default when unset
    pub collected_by: Option<String>,
    /// Source excerpt
    pub original_text: Option<String>,
    /// Notes
    pub notes: Option<String>,
    /// Additional attributes
    pub extras: Extras,
}

impl EventInput {
    /// Required fields of an event
    pub fn new(
        category: impl Into<String>,
        event_date: impl Into<String>,
        source_name: impl Into<String>,
        source_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            event_date: event_date.into(),
            source_name: source_name.into(),
            source_url: source_url.into(),
            description: description.into(),
            confidence: Confidence::default(),
            collected_by: None,
            original_text: None,
            notes: None,
            extras: Extras::new(),
        }
    }

    /// Set the confidence level
    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    /// Set the collector
    pub fn with_collector(mut self, collected_by: impl Into<String>) -> Self {
        self.collected_by = Some(collected_by.into());
        self
    }

    /// Set the source excerpt
    pub fn with_original_text(mut self, text: impl Into<String>) -> Self {
        self.original_text = Some(text.into());
        self
    }

    /// Set notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach an extra attribute
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// Fields for a new impact link
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactLinkInput {
    /// Id of the originating event (not validated)
    pub parent_id: String,
    /// Pillar of the affected indicator
    pub pillar: String,
    /// Affected indicator
    pub related_indicator: String,
    /// Direction of the effect
    pub impact_direction: ImpactDirection,
    /// Effect size
    pub impact_magnitude: Option<f64>,
    /// Lag in months
    pub lag_months: Option<i64>,
    /// Evidence supporting the link
    pub evidence_basis: Option<String>,
    /// Source reliability (default medium)
    pub confidence: Confidence,
    /// Collector; the configured default when unset
    pub collected_by: Option<String>,
    /// Notes
    pub notes: Option<String>,
    /// Additional attributes
    pub extras: Extras,
}

impl ImpactLinkInput {
    /// Required fields of an impact link
    pub fn new(
        parent_id: impl Into<String>,
        pillar: impl Into<String>,
        related_indicator: impl Into<String>,
        impact_direction: ImpactDirection,
    ) -> Self {
        Self {
            parent_id: parent_id.into(),
            pillar: pillar.into(),
            related_indicator: related_indicator.into(),
            impact_direction,
            impact_magnitude: None,
            lag_months: None,
            evidence_basis: None,
            confidence: Confidence::default(),
            collected_by: None,
            notes: None,
            extras: Extras::new(),
        }
    }

    /// Set the effect size
    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.impact_magnitude = Some(magnitude);
        self
    }

    /// Set the lag in months
    pub fn with_lag_months(mut self, months: i64) -> Self {
        self.lag_months = Some(months);
        self
    }

    /// Set the evidence basis
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence_basis = Some(evidence.into());
        self
    }

    /// Set the confidence level
    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    /// Set the collector
    pub fn with_collector(mut self, collected_by: impl Into<String>) -> Self {
        self.collected_by = Some(collected_by.into());
        self
    }

    /// Set notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach an extra attribute
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}
