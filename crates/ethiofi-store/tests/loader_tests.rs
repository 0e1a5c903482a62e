//! Integration tests for ethiofi-store
//!
//! These tests exercise the loader against real workbooks in a temp dir.

use ethiofi_domain::{CellValue, Dataset, RecordType, Row, Table};
use ethiofi_store::{workbook, DataLoader, DataPaths, SheetNames, StoreError};

fn main_rows(observations: usize, events: usize, targets: usize) -> Table {
    let mut rows = Vec::new();
    for i in 0..observations {
        rows.push(
            Row::new()
                .with("record_id", format!("REC_{:04}", i + 1))
                .with("record_type", "observation")
                .with("pillar", "access")
                .with("indicator_code", "ACC_OWNERSHIP")
                .with("value_numeric", 20.0 + i as f64)
                .with("gender", "all"),
        );
    }
    for i in 0..events {
        rows.push(
            Row::new()
                .with("record_id", format!("EVT_{:04}", i + 1))
                .with("record_type", "event")
                .with("pillar", ""),
        );
    }
    for i in 0..targets {
        rows.push(
            Row::new()
                .with("record_id", format!("TGT_{:04}", i + 1))
                .with("record_type", "target")
                .with("pillar", "access"),
        );
    }
    Table::from_rows(rows)
}

fn impact_rows(n: usize) -> Table {
    Table::from_rows((0..n).map(|i| {
        Row::new()
            .with("record_id", format!("IMP_{:04}", i + 1))
            .with("parent_id", "EVT_0001")
            .with("impact_direction", "increase")
    }))
}

fn seed_raw_dataset(paths: &DataPaths, dataset: &Dataset) {
    workbook::write_dataset(&paths.unified_data_file, dataset, SheetNames::SOURCE).unwrap();
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let loader = DataLoader::new(DataPaths::init(dir.path()).unwrap());

    let result = loader.load_unified_data();
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn test_load_unified_data_counts() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::init(dir.path()).unwrap();
    seed_raw_dataset(&paths, &Dataset::new(main_rows(40, 8, 2), impact_rows(5)));

    let loader = DataLoader::new(paths);
    let dataset = loader.load_unified_data().unwrap();

    assert_eq!(dataset.data.len(), 50);
    assert_eq!(dataset.impact_links.len(), 5);
    assert_eq!(dataset.count_by_type(RecordType::Observation), 40);
    assert_eq!(dataset.count_by_type(RecordType::Event), 8);
    assert_eq!(dataset.count_by_type(RecordType::Target), 2);
}

#[test]
fn test_save_then_load_enriched_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::init(dir.path()).unwrap();
    let loader = DataLoader::new(paths.clone());

    let data = main_rows(3, 1, 0);
    let impact = impact_rows(2);
    let path = loader.save_enriched_data(&data, &impact, None).unwrap();
    assert_eq!(path, paths.data_processed.join("enriched_data.xlsx"));
    assert!(path.exists());

    let reloaded = loader.load_enriched_data("enriched_data.xlsx").unwrap();
    assert_eq!(reloaded.data.len(), data.len());
    assert_eq!(reloaded.data.columns(), data.columns());
    assert_eq!(reloaded.impact_links.len(), impact.len());
    assert_eq!(reloaded.impact_links.columns(), impact.columns());
}

#[test]
fn test_enriched_file_is_not_readable_with_source_sheet_names() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::init(dir.path()).unwrap();
    let loader = DataLoader::new(paths.clone());

    let path = loader
        .save_enriched_data(&main_rows(1, 0, 0), &impact_rows(0), Some("custom.xlsx"))
        .unwrap();

    let err = workbook::read_dataset(&path, SheetNames::SOURCE).unwrap_err();
    assert!(matches!(err, StoreError::Workbook(_)));
}

#[test]
fn test_header_only_sheets_load_as_empty_tables() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::init(dir.path()).unwrap();
    let empty_main = Table::with_columns(vec!["record_id".into(), "record_type".into()]);
    seed_raw_dataset(&paths, &Dataset::new(empty_main, Table::default()));

    let dataset = DataLoader::new(paths).load_unified_data().unwrap();
    assert!(dataset.data.is_empty());
    assert_eq!(dataset.data.columns(), &["record_id", "record_type"]);
    assert!(dataset.impact_links.is_empty());
    assert_eq!(dataset.count_by_type(RecordType::Event), 0);
    assert_eq!(dataset.data.cell(0, "record_id"), None::<&CellValue>);
}
