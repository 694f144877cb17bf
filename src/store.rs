// src/store.rs
//
// Reference data store: the three tables, loaded independently and cached
// until `invalidate()`.
//
// - A table that cannot be loaded (missing file, missing column, bad CSV)
//   comes back empty and its error goes into the `LoadReport`. The other
//   tables are unaffected.
// - `DataStore` owns the cached snapshot; callers hold it and pass it to the
//   resolver. No globals.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::options::DataOptions;
use crate::csv::read_table;
use crate::error::LoadError;
use crate::model::{GearProfile, Location, SpeciesEntry, Table};

/// The three reference tables, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableSet {
    pub locations: Vec<Location>,
    pub species: Vec<SpeciesEntry>,
    pub gear: Vec<GearProfile>,
}

impl TableSet {
    /// Location names for the picker, in table order.
    pub fn location_names(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|l| l.name.as_str())
    }

    pub fn row_count(&self, table: Table) -> usize {
        match table {
            Table::Locations => self.locations.len(),
            Table::Species => self.species.len(),
            Table::Gear => self.gear.len(),
        }
    }
}

/// Non-fatal conditions from the last load, one per failed table.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub issues: Vec<LoadError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn failed(&self, table: Table) -> Option<&LoadError> {
        self.issues.iter().find(|e| e.table() == table)
    }
}

#[derive(Debug, Default)]
pub struct Snapshot {
    pub tables: TableSet,
    pub report: LoadReport,
}

impl Snapshot {
    /// Read all three tables from disk.
    pub fn read(data: &DataOptions) -> Self {
        let mut report = LoadReport::default();

        let locations = settle(load_table(Table::Locations, &data.path(Table::Locations)), &mut report);
        let species = settle(load_table(Table::Species, &data.path(Table::Species)), &mut report);
        let gear = settle(load_table(Table::Gear, &data.path(Table::Gear)), &mut report);

        let tables = TableSet { locations, species, gear };
        logf!(
            "Store: loaded locations={}, species={}, gear={} ({} issue(s))",
            tables.row_count(Table::Locations),
            tables.row_count(Table::Species),
            tables.row_count(Table::Gear),
            report.issues.len()
        );
        Self { tables, report }
    }
}

/// Empty table on failure; the error is kept for the caller.
fn settle<T>(res: Result<Vec<T>, LoadError>, report: &mut LoadReport) -> Vec<T> {
    match res {
        Ok(rows) => rows,
        Err(e) => {
            logw!("Store: {e}");
            report.issues.push(e);
            Vec::new()
        }
    }
}

/// Open and parse one table file.
pub fn load_table<T: DeserializeOwned>(table: Table, path: &Path) -> Result<Vec<T>, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::Missing { table, path: path.to_path_buf() },
        _ => LoadError::Io { table, path: path.to_path_buf(), source },
    })?;
    logd!("Store: reading {} from {}", table, path.display());
    read_table(table, BufReader::new(file))
}

/// Cached table set with manual invalidation.
#[derive(Debug)]
pub struct DataStore {
    data: DataOptions,
    cached: Option<Snapshot>,
}

impl DataStore {
    pub fn new(data: DataOptions) -> Self {
        Self { data, cached: None }
    }

    /// Cached snapshot, reading sources first if the cache is empty.
    pub fn load(&mut self) -> &Snapshot {
        if !self.is_cached() {
            logd!("Store: cache miss");
        }
        self.cached.get_or_insert_with(|| Snapshot::read(&self.data))
    }

    /// Drop the cache; the next `load()` re-reads every table.
    pub fn invalidate(&mut self) {
        logf!("Store: cache invalidated");
        self.cached = None;
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }
}
