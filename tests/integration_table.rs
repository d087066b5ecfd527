//! Integration tests for the PV data table: file loading, refresh, filtering.

use std::fs;
use std::path::PathBuf;

use streetlight_sim::table::{DataSourceError, PvTable, TableView};

const FIXTURE: &str = "\
Month,Day,Hour,Irradiance,PV_Power
1,5,9,320.0,110.5
1,5,12,540.0,198.7
2,14,12,610.0,225.3
6,1,10,850.5,310.2
6,1,11,910.0,345.8
6,21,12,1020.0,380.9
12,24,13,280.0,95.4
";

/// Writes the fixture CSV to a unique temp path and returns it.
fn fixture_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("streetlight_sim_{name}_{}.csv", std::process::id()));
    fs::write(&path, FIXTURE).expect("fixture should be writable");
    path
}

#[test]
fn loads_from_file_and_filters_by_month() {
    let path = fixture_path("month");
    let table = PvTable::load(&path).expect("fixture should load");
    assert_eq!(table.len(), 7);

    let june = table.filter(TableView::Month, Some(6));
    assert_eq!(june.len(), 3);
    assert!(june.iter().all(|r| r.month == 6));

    let all = table.filter(TableView::Month, None);
    assert_eq!(all.len(), 7);

    fs::remove_file(&path).ok();
}

#[test]
fn distinct_values_drive_the_dropdown_per_view() {
    let path = fixture_path("distinct");
    let table = PvTable::load(&path).expect("fixture should load");

    assert_eq!(table.distinct(TableView::Month), vec![1, 2, 6, 12]);
    assert_eq!(table.distinct(TableView::Day), vec![1, 5, 14, 21, 24]);
    assert_eq!(table.distinct(TableView::Hour), vec![9, 10, 11, 12, 13]);

    fs::remove_file(&path).ok();
}

#[test]
fn reload_picks_up_file_changes() {
    let path = fixture_path("reload");
    let before = PvTable::load(&path).expect("fixture should load");
    assert_eq!(before.len(), 7);

    // Each load is a fresh read, so an appended row appears on refresh
    let mut grown = FIXTURE.to_string();
    grown.push_str("3,3,15,450.0,160.0\n");
    fs::write(&path, &grown).expect("fixture should be writable");

    let after = PvTable::load(&path).expect("fixture should reload");
    assert_eq!(after.len(), 8);
    assert_eq!(before.len(), 7, "earlier snapshot is unaffected");

    fs::remove_file(&path).ok();
}

#[test]
fn missing_file_surfaces_a_data_source_error() {
    let path = std::env::temp_dir().join("streetlight_sim_does_not_exist.csv");
    let err = PvTable::load(&path);
    assert!(matches!(err, Err(DataSourceError::Io { .. })));
}

#[test]
fn malformed_file_surfaces_a_data_source_error() {
    let path = std::env::temp_dir().join(format!(
        "streetlight_sim_malformed_{}.csv",
        std::process::id()
    ));
    fs::write(&path, "Month,Day,Hour,Irradiance,PV_Power\noops,,,,\n")
        .expect("fixture should be writable");

    let err = PvTable::load(&path);
    assert!(matches!(err, Err(DataSourceError::Malformed { .. })));

    fs::remove_file(&path).ok();
}

#[test]
fn error_fallback_is_an_empty_table_not_a_crash() {
    // The CLI path degrades to PvTable::default() on any load error
    let table = PvTable::default();
    assert!(table.is_empty());
    assert!(table.filter(TableView::Hour, Some(12)).is_empty());
    assert!(table.distinct(TableView::Day).is_empty());
}
