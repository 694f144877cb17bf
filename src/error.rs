// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::Table;

/// Why one reference table came back empty. Never fatal: the other tables
/// still load and the caller renders what it has.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{table}: file not found: {}", .path.display())]
    Missing { table: Table, path: PathBuf },

    #[error("{table}: cannot read {}: {source}", .path.display())]
    Io {
        table: Table,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{table}: missing required column(s): {}", .missing.join(", "))]
    Schema { table: Table, missing: Vec<String> },

    #[error("{table}: parse error: {source}")]
    Parse {
        table: Table,
        #[source]
        source: csv::Error,
    },
}

impl LoadError {
    pub fn table(&self) -> Table {
        match self {
            LoadError::Missing { table, .. }
            | LoadError::Io { table, .. }
            | LoadError::Schema { table, .. }
            | LoadError::Parse { table, .. } => *table,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown location: {name}")]
    NotFound { name: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export I/O: {0}")]
    Io(#[from] io::Error),

    #[error("export CSV: {0}")]
    Csv(#[from] csv::Error),
}
