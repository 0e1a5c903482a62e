//! Record module - the typed rows of the unified dataset
//!
//! Each variant flattens into a [`Row`] whose field order is the column
//! order used when new records are appended to a sheet.

use crate::cell::CellValue;
use crate::confidence::Confidence;
use crate::ids::RecordId;
use crate::impact::ImpactDirection;
use crate::record_type::RecordType;
use crate::table::Row;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Open set of additional attributes attached to a record
///
/// Keys become extra columns after the core columns.
pub type Extras = BTreeMap<String, CellValue>;

/// Core columns of an observation row, in order
pub const OBSERVATION_COLUMNS: &[&str] = &[
    "record_id",
    "record_type",
    "pillar",
    "indicator",
    "indicator_code",
    "value_numeric",
    "observation_date",
    "source_name",
    "source_url",
    "confidence",
    "collected_by",
    "collection_date",
    "original_text",
    "notes",
];

/// Core columns of an event row, in order
pub const EVENT_COLUMNS: &[&str] = &[
    "record_id",
    "record_type",
    "category",
    "pillar",
    "indicator",
    "indicator_code",
    "event_date",
    "observation_date",
    "source_name",
    "source_url",
    "confidence",
    "collected_by",
    "collection_date",
    "original_text",
    "notes",
];

/// Core columns of an impact-link row, in order
pub const IMPACT_LINK_COLUMNS: &[&str] = &[
    "record_id",
    "parent_id",
    "record_type",
    "pillar",
    "related_indicator",
    "impact_direction",
    "impact_magnitude",
    "lag_months",
    "evidence_basis",
    "confidence",
    "collected_by",
    "collection_date",
    "notes",
];

/// A measured indicator value at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Unique id (`REC_####`)
    pub id: RecordId,
    /// Observation or target
    pub record_type: RecordType,
    /// Thematic pillar (access, usage, ...)
    pub pillar: String,
    /// Indicator display name
    pub indicator: String,
    /// Indicator code (e.g. `ACC_OWNERSHIP`)
    pub indicator_code: String,
    /// Measured value
    pub value_numeric: f64,
    /// Observation date as supplied by the collector
    pub observation_date: String,
    /// Source name
    pub source_name: String,
    /// Source URL
    pub source_url: String,
    /// Source reliability
    pub confidence: Confidence,
    /// Collector identity
    pub collected_by: String,
    /// Date the record was entered
    pub collection_date: NaiveDate,
    /// Excerpt of the original source text
    pub original_text: String,
    /// Free-text notes
    pub notes: String,
    /// Additional attributes
    pub extras: Extras,
}

/// A dated occurrence that is not tied to a numeric indicator
///
/// Events never carry a pillar; the type has no field for one and the row
/// always writes an empty `pillar` cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Unique id (`EVT_####`)
    pub id: RecordId,
    /// Event category (policy, product_launch, ...)
    pub category: String,
    /// Description, stored as the `indicator` column
    pub description: String,
    /// Synthesized code `EVT_{CATEGORY}_{####}`
    pub indicator_code: String,
    /// Event date as supplied
    pub event_date: String,
    /// Source name
    pub source_name: String,
    /// Source URL
    pub source_url: String,
    /// Source reliability
    pub confidence: Confidence,
    /// Collector identity
    pub collected_by: String,
    /// Date the record was entered
    pub collection_date: NaiveDate,
    /// Excerpt of the original source text
    pub original_text: String,
    /// Free-text notes
    pub notes: String,
    /// Additional attributes
    pub extras: Extras,
}

impl Event {
    /// Events have no pillar
    pub fn pillar(&self) -> &'static str {
        ""
    }
}

/// A hypothesized effect of an event on an indicator
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactLink {
    /// Unique id (`IMP_####`)
    pub id: RecordId,
    /// Id of the event this link originates from (not validated)
    pub parent_id: RecordId,
    /// Pillar of the affected indicator
    pub pillar: String,
    /// Affected indicator
    pub related_indicator: String,
    /// Direction of the effect
    pub impact_direction: ImpactDirection,
    /// Size of the effect, if estimated
    pub impact_magnitude: Option<f64>,
    /// Delay before the effect shows, in months
    pub lag_months: Option<i64>,
    /// Evidence supporting the hypothesis
    pub evidence_basis: Option<String>,
    /// Source reliability
    pub confidence: Confidence,
    /// Collector identity
    pub collected_by: String,
    /// Date the record was entered
    pub collection_date: NaiveDate,
    /// Free-text notes
    pub notes: String,
    /// Additional attributes
    pub extras: Extras,
}

/// Any record produced by an enrichment session
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Observation (or target)
    Observation(Observation),
    /// Event
    Event(Event),
    /// Impact link
    ImpactLink(ImpactLink),
}

fn date_cell(date: NaiveDate) -> CellValue {
    CellValue::Text(date.format("%Y-%m-%d").to_string())
}

fn append_extras(mut row: Row, extras: &Extras) -> Row {
    for (key, value) in extras {
        row.set(key.clone(), value.clone());
    }
    row
}

impl Observation {
    /// Flatten into a dataset row
    pub fn to_row(&self) -> Row {
        let row = Row::new()
            .with("record_id", self.id.as_str())
            .with("record_type", self.record_type.as_str())
            .with("pillar", self.pillar.as_str())
            .with("indicator", self.indicator.as_str())
            .with("indicator_code", self.indicator_code.as_str())
            .with("value_numeric", self.value_numeric)
            .with("observation_date", self.observation_date.as_str())
            .with("source_name", self.source_name.as_str())
            .with("source_url", self.source_url.as_str())
            .with("confidence", self.confidence.as_str())
            .with("collected_by", self.collected_by.as_str())
            .with("collection_date", date_cell(self.collection_date))
            .with("original_text", self.original_text.as_str())
            .with("notes", self.notes.as_str());
        append_extras(row, &self.extras)
    }
}

impl Event {
    /// Flatten into a dataset row
    pub fn to_row(&self) -> Row {
        let row = Row::new()
            .with("record_id", self.id.as_str())
            .with("record_type", RecordType::Event.as_str())
            .with("category", self.category.as_str())
            .with("pillar", self.pillar())
            .with("indicator", self.description.as_str())
            .with("indicator_code", self.indicator_code.as_str())
            .with("event_date", self.event_date.as_str())
            .with("observation_date", self.event_date.as_str())
            .with("source_name", self.source_name.as_str())
            .with("source_url", self.source_url.as_str())
            .with("confidence", self.confidence.as_str())
            .with("collected_by", self.collected_by.as_str())
            .with("collection_date", date_cell(self.collection_date))
            .with("original_text", self.original_text.as_str())
            .with("notes", self.notes.as_str());
        append_extras(row, &self.extras)
    }
}

impl ImpactLink {
    /// Flatten into an impact-links row
    pub fn to_row(&self) -> Row {
        let row = Row::new()
            .with("record_id", self.id.as_str())
            .with("parent_id", self.parent_id.as_str())
            .with("record_type", RecordType::ImpactLink.as_str())
            .with("pillar", self.pillar.as_str())
            .with("related_indicator", self.related_indicator.as_str())
            .with("impact_direction", self.impact_direction.as_str())
            .with("impact_magnitude", self.impact_magnitude)
            .with("lag_months", self.lag_months)
            .with("evidence_basis", CellValue::optional_text(self.evidence_basis.as_deref()))
            .with("confidence", self.confidence.as_str())
            .with("collected_by", self.collected_by.as_str())
            .with("collection_date", date_cell(self.collection_date))
            .with("notes", self.notes.as_str());
        append_extras(row, &self.extras)
    }
}

impl Record {
    /// Record id
    pub fn id(&self) -> &RecordId {
        match self {
            Record::Observation(o) => &o.id,
            Record::Event(e) => &e.id,
            Record::ImpactLink(l) => &l.id,
        }
    }

    /// The `record_type` tag written for this record
    pub fn record_type(&self) -> RecordType {
        match self {
            Record::Observation(o) => o.record_type,
            Record::Event(_) => RecordType::Event,
            Record::ImpactLink(_) => RecordType::ImpactLink,
        }
    }

    /// Flatten into a row
    pub fn to_row(&self) -> Row {
        match self {
            Record::Observation(o) => o.to_row(),
            Record::Event(e) => e.to_row(),
            Record::ImpactLink(l) => l.to_row(),
        }
    }
}

impl From<Observation> for Record {
    fn from(value: Observation) -> Self {
        Record::Observation(value)
    }
}

impl From<Event> for Record {
    fn from(value: Event) -> Self {
        Record::Event(value)
    }
}

impl From<ImpactLink> for Record {
    fn from(value: ImpactLink) -> Self {
        Record::ImpactLink(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{IdPrefix, RecordId};

    fn sample_event() -> Event {
        Event {
            id: RecordId::generated(IdPrefix::Evt, 1002),
            category: "product_launch".to_string(),
            description: "M-Pesa Ethiopia launch".to_string(),
            indicator_code: "EVT_PRODUCT_LAUNCH_1002".to_string(),
            event_date: "2023-08-16".to_string(),
            source_name: "Safaricom".to_string(),
            source_url: "https://example.org/mpesa".to_string(),
            confidence: Confidence::High,
            collected_by: "analyst".to_string(),
            collection_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            original_text: String::new(),
            notes: String::new(),
            extras: Extras::new(),
        }
    }

    #[test]
    fn test_event_row_has_empty_pillar_and_mirrored_dates() {
        let row = sample_event().to_row();
        assert_eq!(row.get("pillar"), Some(&CellValue::text("")));
        assert_eq!(row.get("indicator"), Some(&CellValue::text("M-Pesa Ethiopia launch")));
        assert_eq!(row.get("observation_date"), row.get("event_date"));
        assert_eq!(row.keys().collect::<Vec<_>>(), EVENT_COLUMNS.to_vec());
    }

    #[test]
    fn test_extras_follow_core_columns() {
        let mut event = sample_event();
        event.extras.insert("region".to_string(), CellValue::text("national"));
        let row = event.to_row();
        assert_eq!(row.keys().last(), Some("region"));
        assert_eq!(row.len(), EVENT_COLUMNS.len() + 1);
    }

    #[test]
    fn test_impact_link_optional_fields_are_blank() {
        let link = ImpactLink {
            id: RecordId::generated(IdPrefix::Imp, 1003),
            parent_id: RecordId::from_string("EVT_1002"),
            pillar: "access".to_string(),
            related_indicator: "ACC_MM_ACCOUNT".to_string(),
            impact_direction: ImpactDirection::Increase,
            impact_magnitude: None,
            lag_months: Some(6),
            evidence_basis: None,
            confidence: Confidence::Medium,
            collected_by: "analyst".to_string(),
            collection_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            notes: String::new(),
            extras: Extras::new(),
        };
        let row = Record::from(link).to_row();
        assert_eq!(row.get("impact_magnitude"), Some(&CellValue::Empty));
        assert_eq!(row.get("lag_months"), Some(&CellValue::Int(6)));
        assert_eq!(row.get("evidence_basis"), Some(&CellValue::Empty));
        assert_eq!(row.get("record_type"), Some(&CellValue::text("impact_link")));
        assert_eq!(row.get("collection_date"), Some(&CellValue::text("2025-01-10")));
    }
}
