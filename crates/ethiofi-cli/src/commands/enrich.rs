//! Enrich command implementation.

use crate::cli::EnrichArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use ethiofi_domain::{CellValue, Confidence, Extras, ImpactDirection, RecordType};
use ethiofi_enricher::{
    DataEnricher, EventInput, ImpactLinkInput, ObservationInput, PendingCounts,
};
use ethiofi_store::DataLoader;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Execute the enrich command.
pub fn execute_enrich(args: EnrichArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let json_data = fs::read_to_string(&args.file)?;
    let entries: Vec<BatchEntry> = serde_json::from_str(&json_data)?;

    if entries.is_empty() {
        return Err(CliError::InvalidInput("No additions provided".to_string()));
    }

    let loader = DataLoader::new(config.data.paths());
    let mut enricher = if args.seed_from_dataset {
        let dataset = loader.load_unified_data()?;
        DataEnricher::for_dataset(config.enricher.clone(), &dataset)
    } else {
        DataEnricher::new(config.enricher.clone())
    };

    let added = apply_batch(&mut enricher, entries)?;

    let merged = enricher.merge_enrichments(
        &loader.paths().unified_data_file,
        args.output.as_deref().map(Path::new),
    )?;

    if let Some(log_path) = &args.log {
        enricher.save_enrichment_log(Path::new(log_path))?;
    }

    println!(
        "{}",
        formatter.format_merge(&added, merged.data.len(), merged.impact_links.len())?
    );
    if args.output.is_none() {
        println!("{}", formatter.info("No --output given; merged dataset not saved"));
    }

    Ok(())
}

/// One addition in a batch file.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BatchEntry {
    /// A new observation or target
    Observation(ObservationDef),
    /// A new event
    Event(EventDef),
    /// A new impact link
    ImpactLink(ImpactLinkDef),
}

/// Observation fields as written in JSON.
#[derive(Debug, Deserialize)]
pub struct ObservationDef {
    pillar: String,
    indicator: String,
    indicator_code: String,
    value_numeric: f64,
    observation_date: String,
    source_name: String,
    source_url: String,
    #[serde(default)]
    confidence: Option<String>,
    #[serde(default)]
    record_type: Option<String>,
    #[serde(default)]
    collected_by: Option<String>,
    #[serde(default)]
    original_text: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    extras: BTreeMap<String, serde_json::Value>,
}

/// Event fields as written in JSON.
#[derive(Debug, Deserialize)]
pub struct EventDef {
    category: String,
    event_date: String,
    source_name: String,
    source_url: String,
    description: String,
    #[serde(default)]
    confidence: Option<String>,
    #[serde(default)]
    collected_by: Option<String>,
    #[serde(default)]
    original_text: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    extras: BTreeMap<String, serde_json::Value>,
}

/// Impact link fields as written in JSON.
///
/// Exactly one of `parent_id` and `parent_event` (index among the events
/// of this batch) must be given.
#[derive(Debug, Deserialize)]
pub struct ImpactLinkDef {
    #[serde(default)]
    parent_id: Option<String>,
    #[serde(default)]
    parent_event: Option<usize>,
    pillar: String,
    related_indicator: String,
    impact_direction: String,
    #[serde(default)]
    impact_magnitude: Option<f64>,
    #[serde(default)]
    lag_months: Option<i64>,
    #[serde(default)]
    evidence_basis: Option<String>,
    #[serde(default)]
    confidence: Option<String>,
    #[serde(default)]
    collected_by: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    extras: BTreeMap<String, serde_json::Value>,
}

/// Apply `entries` in order; returns what was added.
///
/// Stops at the first invalid entry; earlier entries stay in the log.
pub fn apply_batch(enricher: &mut DataEnricher, entries: Vec<BatchEntry>) -> Result<PendingCounts> {
    let mut event_ids: Vec<String> = Vec::new();
    let mut added = PendingCounts::default();

    for (position, entry) in entries.into_iter().enumerate() {
        match entry {
            BatchEntry::Observation(def) => {
                enricher.add_observation(def.into_input()?)?;
                added.observations += 1;
            }
            BatchEntry::Event(def) => {
                let event = enricher.add_event(def.into_input()?)?;
                event_ids.push(event.id.to_string());
                added.events += 1;
            }
            BatchEntry::ImpactLink(def) => {
                let input = def.into_input(&event_ids).map_err(|e| match e {
                    CliError::InvalidInput(msg) => {
                        CliError::InvalidInput(format!("entry {}: {}", position, msg))
                    }
                    other => other,
                })?;
                enricher.add_impact_link(input)?;
                added.impact_links += 1;
            }
        }
    }

    Ok(added)
}

impl ObservationDef {
    fn into_input(self) -> Result<ObservationInput> {
        let mut input = ObservationInput::new(
            self.pillar,
            self.indicator,
            self.indicator_code,
            self.value_numeric,
            self.observation_date,
            self.source_name,
            self.source_url,
        );
        input.confidence = parse_confidence(self.confidence.as_deref())?;
        if let Some(record_type) = self.record_type.as_deref() {
            input.record_type = RecordType::parse(record_type).ok_or_else(|| {
                CliError::InvalidInput(format!("unknown record_type '{}'", record_type))
            })?;
        }
        input.collected_by = self.collected_by;
        input.original_text = self.original_text;
        input.notes = self.notes;
        input.extras = convert_extras(self.extras)?;
        Ok(input)
    }
}

impl EventDef {
    fn into_input(self) -> Result<EventInput> {
        let mut input = EventInput::new(
            self.category,
            self.event_date,
            self.source_name,
            self.source_url,
            self.description,
        );
        input.confidence = parse_confidence(self.confidence.as_deref())?;
        input.collected_by = self.collected_by;
        input.original_text = self.original_text;
        input.notes = self.notes;
        input.extras = convert_extras(self.extras)?;
        Ok(input)
    }
}

impl ImpactLinkDef {
    fn into_input(self, event_ids: &[String]) -> Result<ImpactLinkInput> {
        let parent_id = match (self.parent_id, self.parent_event) {
            (Some(id), None) => id,
            (None, Some(index)) => event_ids.get(index).cloned().ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "parent_event {} does not name an earlier event in this batch",
                    index
                ))
            })?,
            (Some(_), Some(_)) => {
                return Err(CliError::InvalidInput(
                    "give either parent_id or parent_event, not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(CliError::InvalidInput(
                    "impact link needs parent_id or parent_event".to_string(),
                ))
            }
        };

        let direction = ImpactDirection::parse(&self.impact_direction).ok_or_else(|| {
            CliError::InvalidInput(format!(
                "unknown impact_direction '{}'",
                self.impact_direction
            ))
        })?;

        let mut input =
            ImpactLinkInput::new(parent_id, self.pillar, self.related_indicator, direction);
        input.impact_magnitude = self.impact_magnitude;
        input.lag_months = self.lag_months;
        input.evidence_basis = self.evidence_basis;
        input.confidence = parse_confidence(self.confidence.as_deref())?;
        input.collected_by = self.collected_by;
        input.notes = self.notes;
        input.extras = convert_extras(self.extras)?;
        Ok(input)
    }
}

fn parse_confidence(value: Option<&str>) -> Result<Confidence> {
    match value {
        None => Ok(Confidence::default()),
        Some(s) => Confidence::parse(s)
            .ok_or_else(|| CliError::InvalidInput(format!("unknown confidence '{}'", s))),
    }
}

fn convert_extras(raw: BTreeMap<String, serde_json::Value>) -> Result<Extras> {
    raw.into_iter()
        .map(|(key, value)| {
            let cell = match value {
                serde_json::Value::Null => CellValue::Empty,
                serde_json::Value::Bool(b) => CellValue::Bool(b),
                serde_json::Value::Number(n) => match n.as_i64() {
                    Some(i) => CellValue::Int(i),
                    None => CellValue::Float(n.as_f64().unwrap_or(f64::NAN)),
                },
                serde_json::Value::String(s) => CellValue::Text(s),
                other => {
                    return Err(CliError::InvalidInput(format!(
                        "extra '{}' must be a primitive value, got {}",
                        key, other
                    )))
                }
            };
            Ok((key, cell))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethiofi_enricher::EnricherConfig;

    fn parse(json: &str) -> Vec<BatchEntry> {
        serde_json::from_str(json).unwrap()
    }

    const BATCH: &str = r#"[
        {
            "kind": "observation",
            "pillar": "access",
            "indicator": "Account ownership",
            "indicator_code": "ACC_OWNERSHIP",
            "value_numeric": 49.0,
            "observation_date": "2024-12-31",
            "source_name": "Global Findex",
            "source_url": "https://www.worldbank.org/findex",
            "confidence": "high",
            "extras": {"gender": "all"}
        },
        {
            "kind": "event",
            "category": "policy",
            "event_date": "2024-07-29",
            "source_name": "NBE",
            "source_url": "https://nbe.gov.et",
            "description": "FX liberalization"
        },
        {
            "kind": "impact_link",
            "parent_event": 0,
            "pillar": "usage",
            "related_indicator": "USG_DIGITAL_PAYMENT",
            "impact_direction": "increase",
            "lag_months": 12
        }
    ]"#;

    #[test]
    fn test_apply_batch() {
        let mut enricher = DataEnricher::new(EnricherConfig::default());
        let added = apply_batch(&mut enricher, parse(BATCH)).unwrap();

        assert_eq!(added.observations, 1);
        assert_eq!(added.events, 1);
        assert_eq!(added.impact_links, 1);

        let log = enricher.enrichment_log();
        assert_eq!(log.len(), 3);
        let link_row = log[2].record.to_row();
        assert_eq!(
            link_row.get("parent_id").and_then(|c| c.as_text()),
            Some("EVT_1002")
        );
        let obs_row = log[0].record.to_row();
        assert_eq!(obs_row.get("confidence").and_then(|c| c.as_text()), Some("high"));
        assert_eq!(obs_row.get("gender").and_then(|c| c.as_text()), Some("all"));
    }

    #[test]
    fn test_parent_event_must_exist() {
        let json = r#"[{
            "kind": "impact_link",
            "parent_event": 0,
            "pillar": "usage",
            "related_indicator": "USG_P2P",
            "impact_direction": "increase"
        }]"#;
        let mut enricher = DataEnricher::new(EnricherConfig::default());
        let err = apply_batch(&mut enricher, parse(json)).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(ref msg) if msg.starts_with("entry 0")));
    }

    #[test]
    fn test_explicit_parent_id_kept() {
        let json = r#"[{
            "kind": "impact_link",
            "parent_id": "EVT_0007",
            "pillar": "access",
            "related_indicator": "ACC_OWNERSHIP",
            "impact_direction": "neutral"
        }]"#;
        let mut enricher = DataEnricher::new(EnricherConfig::default());
        apply_batch(&mut enricher, parse(json)).unwrap();
        let row = enricher.enrichment_log()[0].record.to_row();
        assert_eq!(row.get("parent_id").and_then(|c| c.as_text()), Some("EVT_0007"));
    }

    #[test]
    fn test_unknown_confidence_rejected() {
        let json = r#"[{
            "kind": "event",
            "category": "policy",
            "event_date": "2024-07-29",
            "source_name": "NBE",
            "source_url": "",
            "description": "x",
            "confidence": "certain"
        }]"#;
        let mut enricher = DataEnricher::new(EnricherConfig::default());
        assert!(matches!(
            apply_batch(&mut enricher, parse(json)),
            Err(CliError::InvalidInput(_))
        ));
        assert!(enricher.enrichment_log().is_empty());
    }

    #[test]
    fn test_target_record_type() {
        let json = r#"[{
            "kind": "observation",
            "record_type": "target",
            "pillar": "access",
            "indicator": "Account ownership",
            "indicator_code": "ACC_OWNERSHIP",
            "value_numeric": 70,
            "observation_date": "2030-12-31",
            "source_name": "NFIS-II",
            "source_url": ""
        }]"#;
        let mut enricher = DataEnricher::new(EnricherConfig::default());
        apply_batch(&mut enricher, parse(json)).unwrap();
        assert_eq!(
            enricher.enrichment_log()[0].record.record_type(),
            RecordType::Target
        );
    }

    #[test]
    fn test_nested_extra_rejected() {
        let mut raw = BTreeMap::new();
        raw.insert("nested".to_string(), serde_json::json!({"a": 1}));
        assert!(convert_extras(raw).is_err());
    }

    #[test]
    fn test_unknown_kind_fails_to_parse() {
        let result: std::result::Result<Vec<BatchEntry>, _> =
            serde_json::from_str(r#"[{"kind": "target"}]"#);
        assert!(result.is_err());
    }
}
