//! Session tests for the Enricher

use crate::{
    DataEnricher, EnricherConfig, EnricherError, EntryKind, EventInput, FixedClock,
    ImpactLinkInput, ObservationInput,
};
use chrono::{NaiveDate, NaiveDateTime};
use ethiofi_domain::{
    CellValue, Confidence, Dataset, IdAllocator, ImpactDirection, RecordId, RecordType, Row,
    Table,
};

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 10)
        .unwrap()
        .and_hms_opt(14, 3, 22)
        .unwrap()
}

fn enricher() -> DataEnricher {
    DataEnricher::new(EnricherConfig::default()).with_clock(FixedClock(fixed_now()))
}

fn observation(code: &str, value: f64) -> ObservationInput {
    ObservationInput::new(
        "access",
        "Account ownership",
        code,
        value,
        "2024-12-31",
        "Global Findex",
        "https://www.worldbank.org/findex",
    )
}

fn event(category: &str) -> EventInput {
    EventInput::new(
        category,
        "2024-07-29",
        "National Bank of Ethiopia",
        "https://nbe.gov.et",
        "FX liberalization",
    )
}

/// 40 observations, 8 events, 2 targets; 5 impact links
fn sample_dataset() -> Dataset {
    let mut rows = Vec::new();
    let mut n = 0;
    for (record_type, count) in [("observation", 40), ("event", 8), ("target", 2)] {
        for _ in 0..count {
            n += 1;
            rows.push(
                Row::new()
                    .with("record_id", format!("REC_{:04}", n))
                    .with("record_type", record_type)
                    .with("pillar", "access")
                    .with("indicator_code", "ACC_OWNERSHIP")
                    .with("value_numeric", 40.0 + n as f64 / 10.0)
                    .with("observation_date", "2021-12-31"),
            );
        }
    }
    let links = (1..=5).map(|i| {
        Row::new()
            .with("record_id", format!("IMP_{:04}", i))
            .with("parent_id", "EVT_0001")
            .with("record_type", "impact_link")
    });
    Dataset::new(Table::from_rows(rows), Table::from_rows(links))
}

#[test]
fn test_first_ids_follow_seed() {
    let mut enricher = enricher();
    let obs = enricher.add_observation(observation("ACC_OWNERSHIP", 49.0)).unwrap();
    let evt = enricher.add_event(event("policy")).unwrap();
    let link = enricher
        .add_impact_link(ImpactLinkInput::new(
            evt.id.as_str(),
            "access",
            "ACC_OWNERSHIP",
            ImpactDirection::Increase,
        ))
        .unwrap();

    assert_eq!(obs.id.as_str(), "REC_1001");
    assert_eq!(evt.id.as_str(), "EVT_1002");
    assert_eq!(link.id.as_str(), "IMP_1003");
    assert_eq!(evt.indicator_code, "EVT_POLICY_1002");
}

#[test]
fn test_ids_unique_across_many_calls() {
    let mut enricher = enricher();
    let mut seen = std::collections::HashSet::new();
    for i in 0..50 {
        let id = match i % 3 {
            0 => enricher.add_observation(observation("X", 1.0)).unwrap().id,
            1 => enricher.add_event(event("product_launch")).unwrap().id,
            _ => {
                enricher
                    .add_impact_link(ImpactLinkInput::new(
                        "EVT_0001",
                        "usage",
                        "USG_P2P",
                        ImpactDirection::Neutral,
                    ))
                    .unwrap()
                    .id
            }
        };
        let (_, number) = RecordId::parse_generated(id.as_str()).unwrap();
        assert!(seen.insert(number), "duplicate id number {}", number);
    }
}

#[test]
fn test_observation_defaults() {
    let mut enricher = enricher();
    let obs = enricher.add_observation(observation("ACC_OWNERSHIP", 49.0)).unwrap();

    assert_eq!(obs.record_type, RecordType::Observation);
    assert_eq!(obs.confidence, Confidence::Medium);
    assert_eq!(obs.collected_by, "Your Name");
    assert_eq!(obs.collection_date, fixed_now().date());
    assert_eq!(obs.notes, "");
}

#[test]
fn test_target_through_add_observation() {
    let mut enricher = enricher();
    let target = enricher
        .add_observation(observation("ACC_OWNERSHIP", 70.0).as_target())
        .unwrap();
    assert_eq!(target.record_type, RecordType::Target);
    assert_eq!(enricher.enrichment_log()[0].kind, EntryKind::Observation);
}

#[test]
fn test_event_type_rejected_by_add_observation() {
    let mut enricher = enricher();
    let mut input = observation("ACC_OWNERSHIP", 1.0);
    input.record_type = RecordType::Event;

    let err = enricher.add_observation(input).unwrap_err();
    assert!(matches!(err, EnricherError::InvalidInput(_)));
    assert!(enricher.enrichment_log().is_empty());
    assert_eq!(enricher.ids().current(), 1000);
}

#[test]
fn test_event_has_empty_pillar() {
    let mut enricher = enricher();
    let evt = enricher.add_event(event("infrastructure")).unwrap();
    let row = evt.to_row();
    assert_eq!(row.get("pillar"), Some(&CellValue::Text(String::new())));
    assert_eq!(row.get("indicator").and_then(|c| c.as_text()), Some("FX liberalization"));
}

#[test]
fn test_reserved_extra_is_rejected() {
    let mut enricher = enricher();
    let err = enricher
        .add_observation(observation("X", 1.0).with_extra("pillar", "usage"))
        .unwrap_err();
    assert!(matches!(err, EnricherError::ReservedField { .. }));
    assert!(enricher.enrichment_log().is_empty());
}

#[test]
fn test_extras_become_columns() {
    let mut enricher = enricher();
    enricher
        .add_observation(observation("ACC_OWNERSHIP", 36.0).with_extra("gender", "female"))
        .unwrap();
    let merged = enricher.merge_into(&Dataset::default());
    assert!(merged.data.has_column("gender"));
    assert_eq!(
        merged.data.cell(0, "gender").and_then(|c| c.as_text()),
        Some("female")
    );
}

#[test]
fn test_empty_log_merge_is_identity() {
    let original = sample_dataset();
    let merged = enricher().merge_into(&original);
    assert_eq!(merged, original);
}

#[test]
fn test_merge_appends_in_block_order() {
    let original = sample_dataset();
    let mut enricher = enricher();

    // Interleaved calls; observations still precede events after merge
    enricher.add_event(event("policy")).unwrap();
    enricher.add_observation(observation("ACC_MM_ACCOUNT", 9.45)).unwrap();
    enricher.add_event(event("partnership")).unwrap();
    enricher.add_observation(observation("ACC_OWNERSHIP", 49.0)).unwrap();

    let merged = enricher.merge_into(&original);
    assert_eq!(merged.data.len(), 54);

    let codes: Vec<&str> = (50..54)
        .filter_map(|i| merged.data.cell(i, "indicator_code").and_then(|c| c.as_text()))
        .collect();
    assert_eq!(
        codes,
        vec!["ACC_MM_ACCOUNT", "ACC_OWNERSHIP", "EVT_POLICY_1001", "EVT_PARTNERSHIP_1003"]
    );

    // Original rows untouched and first
    for i in 0..50 {
        assert_eq!(merged.data.rows()[i][..original.data.columns().len()], original.data.rows()[i][..]);
    }
}

#[test]
fn test_worked_example_counts() {
    let original = sample_dataset();
    let mut enricher = enricher();

    enricher.add_observation(observation("ACC_OWNERSHIP", 49.0)).unwrap();
    enricher.add_observation(observation("ACC_MM_ACCOUNT", 9.45)).unwrap();
    enricher.add_event(event("policy")).unwrap();

    let merged = enricher.merge_into(&original);
    assert_eq!(merged.data.len(), 53);
    assert_eq!(merged.impact_links.len(), 5);
    assert_eq!(merged.count_by_type(RecordType::Observation), 42);
    assert_eq!(merged.count_by_type(RecordType::Event), 9);
    assert_eq!(merged.count_by_type(RecordType::Target), 2);
}

#[test]
fn test_impact_link_appended_after_original_links() {
    let original = sample_dataset();
    let mut enricher = enricher();
    let evt = enricher.add_event(event("policy")).unwrap();
    enricher
        .add_impact_link(
            ImpactLinkInput::new(evt.id.as_str(), "usage", "USG_DIGITAL_PAYMENT", ImpactDirection::Increase)
                .with_magnitude(5.0)
                .with_lag_months(12),
        )
        .unwrap();

    let merged = enricher.merge_into(&original);
    assert_eq!(merged.impact_links.len(), 6);
    assert_eq!(
        merged.impact_links.cell(5, "parent_id").and_then(|c| c.as_text()),
        Some(evt.id.as_str())
    );
    assert_eq!(
        merged.impact_links.cell(5, "lag_months").and_then(|c| c.as_f64()),
        Some(12.0)
    );
}

#[test]
fn test_merge_twice_duplicates_without_clear() {
    let original = sample_dataset();
    let mut enricher = enricher();
    enricher.add_observation(observation("ACC_OWNERSHIP", 49.0)).unwrap();

    let first = enricher.merge_into(&original);
    let second = enricher.merge_into(&first);
    assert_eq!(second.data.len(), 52);
    assert_eq!(second.data.count_where("record_id", "REC_1001"), 2);
}

#[test]
fn test_clear_between_merges_prevents_duplicates() {
    let original = sample_dataset();
    let mut enricher = enricher();
    enricher.add_observation(observation("ACC_OWNERSHIP", 49.0)).unwrap();

    let first = enricher.merge_into(&original);
    enricher.clear_enrichment_log();
    let second = enricher.merge_into(&first);
    assert_eq!(second, first);

    // Counter keeps going after a clear
    let next = enricher.add_observation(observation("X", 1.0)).unwrap();
    assert_eq!(next.id.as_str(), "REC_1002");
}

#[test]
fn test_seed_from_dataset() {
    let mut dataset = sample_dataset();
    dataset
        .data
        .push_row(&Row::new().with("record_id", "REC_2042").with("record_type", "observation"));

    let mut enricher = DataEnricher::for_dataset(EnricherConfig::default(), &dataset);
    let obs = enricher.add_observation(observation("X", 1.0)).unwrap();
    assert_eq!(obs.id.as_str(), "REC_2043");
}

#[test]
fn test_explicit_allocator() {
    let mut enricher =
        DataEnricher::with_allocator(EnricherConfig::default(), IdAllocator::starting_after(0));
    let obs = enricher.add_observation(observation("X", 1.0)).unwrap();
    assert_eq!(obs.id.as_str(), "REC_0001");
}

#[test]
fn test_pending_counts() {
    let mut enricher = enricher();
    enricher.add_observation(observation("A", 1.0)).unwrap();
    enricher.add_observation(observation("B", 2.0)).unwrap();
    enricher.add_event(event("policy")).unwrap();

    let counts = enricher.pending_counts();
    assert_eq!(counts.observations, 2);
    assert_eq!(counts.events, 1);
    assert_eq!(counts.impact_links, 0);
    assert_eq!(counts.total(), 3);
}

#[test]
fn test_log_entry_json_shape() {
    let mut enricher = enricher();
    enricher
        .add_impact_link(ImpactLinkInput::new(
            "EVT_0001",
            "access",
            "ACC_OWNERSHIP",
            ImpactDirection::Decrease,
        ))
        .unwrap();

    let json = enricher.enrichment_log()[0].to_json();
    assert_eq!(json["type"], "impact_link");
    assert_eq!(json["timestamp"], "2025-01-10T14:03:22.000000");
    assert_eq!(json["data"]["record_id"], "IMP_1001");
    assert_eq!(json["data"]["impact_direction"], "decrease");
    assert_eq!(json["data"]["collection_date"], "2025-01-10");
    assert!(json["data"]["impact_magnitude"].is_null());
}
