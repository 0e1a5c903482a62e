//! The append-only enrichment log and its JSON audit form

use chrono::NaiveDateTime;
use ethiofi_domain::{CellValue, Record};
use serde_json::{Map, Value};

/// Tag of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Produced by `add_observation` (observations and targets)
    Observation,
    /// Produced by `add_event`
    Event,
    /// Produced by `add_impact_link`
    ImpactLink,
}

impl EntryKind {
    /// Tag as written to the audit file
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Observation => "observation",
            EntryKind::Event => "event",
            EntryKind::ImpactLink => "impact_link",
        }
    }
}

/// One enrichment call: its tag, the record built, and when
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentEntry {
    /// Which call produced the record
    pub kind: EntryKind,
    /// The full record
    pub record: Record,
    /// Local time of the call
    pub timestamp: NaiveDateTime,
}

impl EnrichmentEntry {
    /// `{type, data, timestamp}` with `data` as a flat key/value object
    pub fn to_json(&self) -> Value {
        let mut data = Map::new();
        for (key, value) in self.record.to_row().iter() {
            data.insert(key.to_string(), cell_to_json(value));
        }

        let mut entry = Map::new();
        entry.insert("type".to_string(), Value::from(self.kind.as_str()));
        entry.insert("data".to_string(), Value::Object(data));
        entry.insert(
            "timestamp".to_string(),
            Value::from(self.timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()),
        );
        Value::Object(entry)
    }
}

fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Empty => Value::Null,
        CellValue::Bool(b) => Value::Bool(*b),
        CellValue::Int(i) => Value::from(*i),
        // Non-finite floats have no JSON form
        CellValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        CellValue::Text(s) => Value::from(s.as_str()),
        CellValue::DateTime(dt) => Value::from(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
    }
}

/// Number of unmerged records per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingCounts {
    /// Observations and targets
    pub observations: usize,
    /// Events
    pub events: usize,
    /// Impact links
    pub impact_links: usize,
}

impl PendingCounts {
    /// Total records in the log
    pub fn total(&self) -> usize {
        self.observations + self.events + self.impact_links
    }
}
