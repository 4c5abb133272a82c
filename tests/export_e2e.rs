// tests/export_e2e.rs
use std::fs;

use badge_scrape::config::{ExportFormat, ExportOptions};
use badge_scrape::error::ExportError;
use badge_scrape::export;
use badge_scrape::file::export_dataset;
use badge_scrape::store::RecordStore;

const L: &str = "https://x/org/ibm/badge/1";

fn scenario_store() -> RecordStore {
    let store = RecordStore::new();
    store.insert_if_absent(L, "Intro");
    store.merge_attribute(L, "Type", "Course");
    store.merge_attribute(L, "Level", "Beginner");
    store.set_tags_if_unset(L, &["Python".to_string(), "Data".to_string()]);
    store
}

#[test]
fn enriched_record_becomes_expected_row() {
    let ds = export::to_dataset(&scenario_store().snapshot());
    assert_eq!(
        ds.headers.as_deref().unwrap(),
        ["Badge Title", "Badge Link", "Badge Type", "Badge Level", "Badge Time", "Badge Cost", "Badge Skills"]
    );
    assert_eq!(
        ds.rows,
        vec![vec!["Intro", L, "Course", "Beginner", "N/A", "N/A", "Python,Data"]]
    );
}

#[test]
fn one_row_per_link_with_values_or_sentinels() {
    let store = RecordStore::new();
    for i in 0..5 {
        store.insert_if_absent(&format!("https://x/b/{i}"), &format!("Badge {i}"));
        store.insert_if_absent(&format!("https://x/b/{i}"), "dup");
    }
    store.merge_attribute("https://x/b/2", "Time", "Days");
    store.merge_attribute("https://x/b/4", "Cost", "Paid");

    let snapshot = store.snapshot();
    let ds = export::to_dataset(&snapshot);
    assert_eq!(ds.rows.len(), snapshot.len());

    for rec in &snapshot {
        let rows: Vec<_> = ds.rows.iter().filter(|r| r[1] == rec.link).collect();
        assert_eq!(rows.len(), 1, "exactly one row for {}", rec.link);
        let row = rows[0];
        assert_eq!(row[0], rec.title);
        for (col, label) in [(2, "Type"), (3, "Level"), (4, "Time"), (5, "Cost")] {
            assert_eq!(row[col], rec.attribute(label).unwrap_or("N/A"));
        }
    }
}

#[test]
fn writes_csv_file_with_header() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.set_path(dir.path().join("nested").join("IBM-Badges.csv").to_str().unwrap());

    let ds = export::to_dataset(&scenario_store().snapshot());
    let path = export_dataset(&opts, &ds).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "Badge Title,Badge Link,Badge Type,Badge Level,Badge Time,Badge Cost,Badge Skills\n\
         Intro,https://x/org/ibm/badge/1,Course,Beginner,N/A,N/A,\"Python,Data\"\n"
    );
}

#[test]
fn tsv_export_uses_tabs_and_tsv_extension() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.set_path(&format!("{}/", dir.path().display()));

    let ds = export::to_dataset(&scenario_store().snapshot());
    let path = export_dataset(&opts, &ds).unwrap();

    assert_eq!(path.file_name().unwrap(), "IBM-Badges.tsv");
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.lines().nth(1).unwrap().ends_with("N/A\tN/A\tPython,Data"));
}

#[test]
fn file_in_place_of_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("out");
    fs::write(&blocker, "not a dir").unwrap();

    let mut opts = ExportOptions::default();
    opts.set_path(blocker.join("IBM-Badges.csv").to_str().unwrap());

    let err = export_dataset(&opts, &export::to_dataset(&[])).unwrap_err();
    assert!(matches!(err, ExportError::NotADirectory(_)));
}
