// FHRSView - tests/e2e_catalog.rs
//
// End-to-end tests for the load and query pipeline.
//
// These tests exercise the real filesystem, real walkdir traversal, real csv
// parsing and real chrono date handling, from authority exports on disk to
// rendered rating tables and exported rows.

use fhrsview::app::load::load_catalog;
use fhrsview::app::menu;
use fhrsview::app::session::Session;
use fhrsview::core::export::{export_csv, export_json};
use fhrsview::core::query::{RatingPredicate, RatingQuery};
use fhrsview::core::rating::Categorical;
use fhrsview::ui::console::Console;
use fhrsview::util::error::DiscoveryError;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn fixture_session() -> Session {
    let outcome = load_catalog(&fixtures_dir()).expect("fixtures must load");
    Session::new(outcome.catalog, 10)
}

fn ratings_for(session: &Session, query: &RatingQuery) -> Vec<String> {
    session
        .ratings(query)
        .iter()
        .map(|r| r.rating_value().unwrap_or("null").to_string())
        .collect()
}

// =============================================================================
// Load E2E
// =============================================================================

/// Both CSV exports load in filename order; the stray text file is reported.
#[test]
fn e2e_loads_fixture_authorities() {
    let outcome = load_catalog(&fixtures_dir()).unwrap();

    let names: Vec<_> = outcome
        .catalog
        .authorities()
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["Adur", "Worthing"]);
    assert_eq!(outcome.summary.records, 6);
    assert_eq!(outcome.summary.skipped_files, 1);
    assert_eq!(outcome.summary.skipped_rows, 0);

    assert_eq!(outcome.warnings.len(), 1, "{:?}", outcome.warnings);
    assert!(outcome.warnings[0].starts_with("Detected file which doesn't belong in directory"));
    assert!(outcome.warnings[0].ends_with("notes.txt"));
}

/// Fields parse with their fallbacks: blank scores are -1, blank dates absent.
#[test]
fn e2e_fields_parse_with_fallbacks() {
    let outcome = load_catalog(&fixtures_dir()).unwrap();
    let adur = outcome.catalog.authority("Adur").unwrap();

    let crown = &adur.records[0];
    assert_eq!(crown.fhrs_id(), 1001);
    assert_eq!(crown.business_name(), "The Crown");
    assert_eq!(crown.address_lines()[0], "1 High Street");
    assert_eq!(crown.hygiene_score(), 5);
    assert_eq!(
        crown.rating_date(),
        chrono::NaiveDate::from_ymd_opt(2019, 4, 30)
    );
    assert!((crown.latitude() - 50.83).abs() < 1e-9);

    let grocer = &adur.records[3];
    assert_eq!(grocer.hygiene_score(), -1);
    assert_eq!(grocer.longitude(), -1.0);
    assert_eq!(grocer.rating_date(), None);
    assert!(grocer.new_rating_pending());
    assert!(grocer.rating_date_nil());
}

/// A missing data directory is the only fatal load error.
#[test]
fn e2e_missing_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = load_catalog(&dir.path().join("datasets-foodsafety"));
    assert!(matches!(result, Err(DiscoveryError::RootNotFound { .. })));
}

/// Cells that are not valid UTF-8 (Windows-1252 exports) still load, with the
/// bad bytes replaced; no row is lost.
#[test]
fn e2e_non_utf8_rows_are_kept() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Arun.csv"),
        b"FHRSID,BusinessName,RatingValue\n1,Deli,4\n2,Caf\xE9 Rouge,5\n3,Bakery,5\n",
    )
    .unwrap();
    fs::write(dir.path().join("Crawley.csv"), "FHRSID,BusinessName\n9,Bakery\n").unwrap();

    let outcome = load_catalog(dir.path()).unwrap();
    assert_eq!(outcome.catalog.authorities().len(), 2);
    assert_eq!(outcome.summary.records, 4);
    assert_eq!(outcome.summary.skipped_rows, 0);
    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);

    let arun = &outcome.catalog.authority("Arun").unwrap().records;
    let names: Vec<_> = arun.iter().map(|r| r.business_name()).collect();
    assert_eq!(names, vec!["Deli", "Caf\u{FFFD} Rouge", "Bakery"]);
    assert_eq!(arun[1].rating_value(), Some("5"));

    let session = Session::new(outcome.catalog, 10);
    let found = ratings_for(&session, &RatingQuery::by_name("caf\u{FFFD} rouge"));
    assert_eq!(found, vec!["5"]);
}

// =============================================================================
// Query E2E
// =============================================================================

/// A name lookup spans authorities and is ordered oldest inspection first.
#[test]
fn e2e_ratings_span_authorities_in_date_order() {
    let session = fixture_session();
    let values = ratings_for(&session, &RatingQuery::by_name("harbour cafe"));
    assert_eq!(values, vec!["1", "3", "Exempt"]);
}

#[test]
fn e2e_numeric_predicates_skip_categorical_ratings() {
    let session = fixture_session();
    let above = ratings_for(
        &session,
        &RatingQuery::filtered("Harbour Cafe", RatingPredicate::Above(2)),
    );
    assert_eq!(above, vec!["3"]);

    let range = ratings_for(
        &session,
        &RatingQuery::filtered(
            "Harbour Cafe",
            RatingPredicate::Range {
                minimum: 0,
                maximum: 5,
            },
        ),
    );
    assert_eq!(range, vec!["1", "3"]);
}

#[test]
fn e2e_categorical_predicate() {
    let session = fixture_session();
    let awaiting = ratings_for(
        &session,
        &RatingQuery::filtered(
            "GREEN GROCER",
            RatingPredicate::Categorical(Categorical::AwaitingInspection),
        ),
    );
    assert_eq!(awaiting, vec!["AwaitingInspection"]);
}

#[test]
fn e2e_browse_lists_unique_names() {
    let session = fixture_session();
    let pager = session.browse_businesses();
    assert_eq!(
        pager.names(),
        [
            "Green Grocer".to_string(),
            "Harbour Cafe".to_string(),
            "Seaside Bakery".to_string(),
            "The Crown".to_string(),
        ]
    );
}

// =============================================================================
// Menu + export E2E
// =============================================================================

/// Scripted session: list authorities, show one table, then quit.
#[test]
fn e2e_menu_session() {
    let session = fixture_session();
    let input = "1\n3\nThe Crown\n6\n";
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    menu::run(&session, &mut console).unwrap();
    let out = String::from_utf8(console.into_output()).unwrap();

    assert!(out.contains("Adur\nWorthing\n"));
    assert!(out.contains("Display Business name for: The Crown"));
    assert!(out.contains("Tue 30/04/2019"));
}

#[test]
fn e2e_export_round_trips_fixture_rows() {
    let outcome = load_catalog(&fixtures_dir()).unwrap();
    let worthing = outcome.catalog.authority("Worthing").unwrap();

    let mut buf = Vec::new();
    let count = export_csv(&worthing.records, &mut buf).unwrap();
    assert_eq!(count, 2);

    let original = fs::read_to_string(fixtures_dir().join("Worthing.csv")).unwrap();
    let exported = String::from_utf8(buf).unwrap();
    assert_eq!(
        exported.lines().next(),
        original.lines().next(),
        "header row should match the source export"
    );
    assert!(exported.contains("2001,WB/000001,Harbour Cafe"));

    let mut json = Vec::new();
    export_json(&worthing.records, &mut json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}
