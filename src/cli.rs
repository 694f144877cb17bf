// src/cli.rs
use std::io;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, bail};

use crate::config::options::AppOptions;
use crate::csv::Delim;
use crate::display::{Presenter, not_found_message};
use crate::error::ResolveError;
use crate::file;
use crate::log::{self, Sink};
use crate::resolve::resolve;
use crate::store::DataStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Tsv,
}

#[derive(Debug, Parser)]
#[command(name = "fishing_calendar", version, about = "Species, sizes and gear for a fishing spot and date")]
pub struct Args {
    /// Directory holding locations.csv, fishing_data.csv and gear_data.csv
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Config file (default: ./fishing_calendar.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Location name, exactly as listed by --list-locations
    #[arg(short, long)]
    pub location: Option<String>,

    /// Date as YYYY-MM-DD (default: today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Print known location names and exit
    #[arg(long)]
    pub list_locations: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report (text, csv or tsv) to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit a header row in csv/tsv output
    #[arg(long)]
    pub include_headers: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    log::init(Sink::Stderr)?;
    run_with(args, &mut io::stdout())
}

/// Body of `run`, writing to `out` so it can be driven from tests.
pub fn run_with<W: io::Write>(args: Args, out: &mut W) -> Result<()> {
    let mut options = AppOptions::load(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        options.data.dir = dir;
    }
    match args.format {
        OutputFormat::Csv => options.export.format = Delim::Csv,
        OutputFormat::Tsv => options.export.format = Delim::Tsv,
        OutputFormat::Text => {}
    }
    options.export.include_headers |= args.include_headers;

    let mut store = DataStore::new(options.data.clone());
    let snapshot = store.load();
    for issue in &snapshot.report.issues {
        eprintln!("warning: {issue}");
    }
    let tables = &snapshot.tables;

    if args.list_locations {
        if tables.locations.is_empty() {
            eprintln!("No locations available.");
        }
        for name in tables.location_names() {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let Some(location) = args.location else {
        bail!("--location is required (see --list-locations)");
    };
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    if !options.dates.contains(date) {
        bail!("date {date} is outside {} ..= {}", options.dates.min, options.dates.max);
    }

    let view = match resolve(tables, &location, date) {
        Ok(view) => view,
        Err(ResolveError::NotFound { name }) => {
            writeln!(out, "{}", not_found_message(&name))?;
            return Ok(());
        }
    };

    let presenter = Presenter::from(&options.display);
    match (args.format, args.out) {
        (OutputFormat::Text, None) => write!(out, "{}", presenter.present(&view))?,
        (OutputFormat::Text, Some(path)) => {
            let written = file::save_text(&path, &presenter.present(&view).render_text())?;
            eprintln!("Wrote {}", written.display());
        }
        (_, Some(path)) => {
            let written = file::export_to_path(&path, &view, &presenter.closed, &options.export)?;
            eprintln!("Wrote {}", written.display());
        }
        (_, None) => file::write_view(&mut *out, &view, &presenter.closed, &options.export)?,
    }
    Ok(())
}
