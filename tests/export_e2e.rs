// tests/export_e2e.rs
mod common;

use std::fs;

use chrono::NaiveDate;

use fishing_calendar::config::{DataOptions, ExportOptions};
use fishing_calendar::csv::Delim;
use fishing_calendar::display::ClosedSeason;
use fishing_calendar::file::export_to_path;
use fishing_calendar::resolve::resolve;
use fishing_calendar::store::DataStore;

#[test]
fn tsv_export_creates_parent_dirs() {
    let dir = common::sample_dir();
    let mut store = DataStore::new(DataOptions::in_dir(dir.path()));
    let snap = store.load();
    let view = resolve(&snap.tables, "Sydney", NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()).unwrap();

    let out = dir.path().join("out").join("nested").join("sydney.tsv");
    let export = ExportOptions { format: Delim::Tsv, include_headers: true };
    let written = export_to_path(&out, &view, &ClosedSeason::default(), &export).unwrap();
    assert_eq!(written, out);

    let text = fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("location_name\tzone\tmonth\tyear\tspecies"));
    assert_eq!(
        lines.next().unwrap(),
        "Sydney\tNSW East\tJanuary\t2026\tSnapper\tGood\tDawn on the reefs\t30\t\tPaternoster\t4-8kg\t4000\t15lb/20lb\tRunning sinker\tPilchard"
    );
    assert!(lines.next().is_none());
}

#[test]
fn custom_sentinels_change_what_counts_as_closed() {
    let dir = common::sample_dir();
    let mut store = DataStore::new(DataOptions::in_dir(dir.path()));
    let snap = store.load();
    let view = resolve(&snap.tables, "Sydney", NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()).unwrap();

    // "Good" is not a real sentinel; used here to flip the Snapper row.
    let closed = ClosedSeason::new(["Good"]);
    let out = dir.path().join("closed.csv");
    export_to_path(&out, &view, &closed, &ExportOptions::default()).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("Sydney,NSW East,January,2026,Snapper,Good,Dawn on the reefs,,,Paternoster,"));
}
