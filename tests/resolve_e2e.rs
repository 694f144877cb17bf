// tests/resolve_e2e.rs
//
// Store → resolve → present, against CSV files on disk.
//
mod common;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use fishing_calendar::config::DataOptions;
use fishing_calendar::display::{Presenter, SizeLimits};
use fishing_calendar::error::{LoadError, ResolveError};
use fishing_calendar::model::Table;
use fishing_calendar::resolve::resolve;
use fishing_calendar::store::DataStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn sydney_in_january() {
    let dir = common::sample_dir();
    let mut store = DataStore::new(DataOptions::in_dir(dir.path()));
    let snap = store.load();
    assert!(snap.report.is_clean());

    let view = resolve(&snap.tables, "Sydney", date(2026, 1, 15)).unwrap();
    assert_eq!(view.zone, "NSW East");
    assert_eq!(view.month, "January");
    assert_eq!(view.year, 2026);
    assert_eq!(view.rows.len(), 1);

    let row = view.rows[0];
    assert_eq!(row.species.species, "Snapper");
    assert_eq!(row.species.rating.as_deref(), Some("Good"));
    assert_eq!(row.species.legal_min_cm, Some(30.0));
    assert_eq!(row.species.legal_max_cm, None);
    assert_eq!(row.gear.and_then(|g| g.rod.as_deref()), Some("4-8kg"));

    let shown = Presenter::default().present(&view);
    assert_eq!(shown.cards[0].limits.label().as_deref(), Some("Min: 30 cm"));
    assert_eq!(
        shown.map.as_ref().map(|l| l.url.as_str()),
        Some("https://www.google.com/maps?q=-33.8,151.2")
    );
    assert_eq!(shown.official.url, "https://www.dpi.nsw.gov.au/fishing");
}

#[test]
fn sydney_in_february_is_empty() {
    let dir = common::sample_dir();
    let mut store = DataStore::new(DataOptions::in_dir(dir.path()));
    let view = resolve(&store.load().tables, "Sydney", date(2026, 2, 15)).unwrap();
    assert!(view.rows.is_empty());
}

#[test]
fn unknown_town_is_not_found() {
    let dir = common::sample_dir();
    let mut store = DataStore::new(DataOptions::in_dir(dir.path()));
    let res = resolve(&store.load().tables, "Unknown Town", date(2026, 1, 15));
    assert_eq!(res, Err(ResolveError::NotFound { name: "Unknown Town".into() }));
}

#[test]
fn qualified_zone_and_closed_season() {
    let dir = common::sample_dir();
    let mut store = DataStore::new(DataOptions::in_dir(dir.path()));
    let snap = store.load();

    let view = resolve(&snap.tables, "Eden", date(2026, 1, 3)).unwrap();
    assert_eq!(view.zone, "NSW South (default)");
    let names: Vec<&str> = view.rows.iter().map(|r| r.species.species.as_str()).collect();
    assert_eq!(names, vec!["Bass"]);

    let shown = Presenter::default().present(&view);
    assert_eq!(shown.cards[0].limits, SizeLimits::ClosedSeason);
    assert!(shown.map.is_none());
    assert_eq!(shown.closures, "Harbour closed to netting");

    let text = shown.render_text();
    assert!(text.contains("closed season"));
    assert!(!text.contains("Min: 30"));
}

#[test]
fn invalidate_then_load_round_trips() {
    let dir = common::sample_dir();
    let mut store = DataStore::new(DataOptions::in_dir(dir.path()));
    let before = store.load().tables.clone();
    store.invalidate();
    let after = store.load().tables.clone();
    assert_eq!(before, after);
}

#[test]
fn tables_fail_independently() {
    let dir = TempDir::new().unwrap();
    common::write(dir.path(), "locations.csv", common::LOCATIONS);
    // bad schema
    common::write(dir.path(), "fishing_data.csv", "month,species\nJanuary,Snapper\n");
    // extra field
    common::write(dir.path(), "gear_data.csv", "species,rod\nSnapper,4kg,extra\n");

    let mut store = DataStore::new(DataOptions::in_dir(dir.path()));
    let snap = store.load();

    assert_eq!(snap.tables.locations.len(), 2);
    assert!(snap.tables.species.is_empty());
    assert!(snap.tables.gear.is_empty());
    assert!(matches!(snap.report.failed(Table::Species), Some(LoadError::Schema { .. })));
    assert!(matches!(snap.report.failed(Table::Gear), Some(LoadError::Parse { .. })));

    // Messages tell a parse error apart from a missing file.
    let gear_msg = snap.report.failed(Table::Gear).unwrap().to_string();
    assert!(gear_msg.contains("parse error"), "{gear_msg}");

    // Still resolvable, just empty.
    let view = resolve(&snap.tables, "Sydney", date(2026, 1, 15)).unwrap();
    assert!(view.rows.is_empty());
}

#[test]
fn empty_store_is_not_found() {
    let dir = TempDir::new().unwrap();
    let mut store = DataStore::new(DataOptions::in_dir(dir.path()));
    let snap = store.load();
    assert_eq!(snap.report.issues.len(), 3);
    assert!(snap.report.issues.iter().all(|e| matches!(e, LoadError::Missing { .. })));
    assert!(resolve(&snap.tables, "Sydney", date(2026, 1, 15)).is_err());
}
