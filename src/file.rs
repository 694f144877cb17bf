// src/file.rs
//
// Export a resolved view as a flat CSV/TSV table: one line per species row,
// location context repeated on each line.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_rows;
use crate::display::{ClosedSeason, fmt_cm};
use crate::error::ExportError;
use crate::resolve::ResolvedView;

pub const EXPORT_HEADERS: [&str; 15] = [
    "location_name", "zone", "month", "year",
    "species", "rating", "best_times_notes", "legal_min_cm", "legal_max_cm", "gear_rig",
    "rod", "reel", "line_leader_weight", "rig", "bait_or_lure",
];

fn cell(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

/// Rows for export. Closed-season rows carry empty legal-size cells.
pub fn export_rows(view: &ResolvedView<'_>, closed: &ClosedSeason) -> Vec<Vec<String>> {
    view.rows
        .iter()
        .map(|row| {
            let e = row.species;
            let is_closed = closed.is_closed(e.rating.as_deref());
            let size = |v: Option<f64>| if is_closed { s!() } else { v.map(fmt_cm).unwrap_or_default() };

            let mut out = vec![
                view.location.name.clone(),
                s!(view.zone),
                s!(view.month),
                view.year.to_string(),
                e.species.clone(),
                cell(&e.rating),
                cell(&e.best_times_notes),
                size(e.legal_min_cm),
                size(e.legal_max_cm),
                cell(&e.gear_rig),
            ];
            match row.gear {
                Some(g) => out.extend([
                    cell(&g.rod),
                    cell(&g.reel),
                    cell(&g.line_leader_weight),
                    cell(&g.rig),
                    cell(&g.bait_or_lure),
                ]),
                None => out.extend(std::iter::repeat_n(s!(), 5)),
            }
            out
        })
        .collect()
}

/// Write the export table to any writer.
pub fn write_view<W: Write>(
    w: W,
    view: &ResolvedView<'_>,
    closed: &ClosedSeason,
    export: &ExportOptions,
) -> Result<(), ExportError> {
    let headers = export.include_headers.then_some(&EXPORT_HEADERS[..]);
    write_rows(w, headers, &export_rows(view, closed), export.format)?;
    Ok(())
}

/// Write the export table to `path`, creating parent directories.
/// Returns the path written to.
pub fn export_to_path(
    path: &Path,
    view: &ResolvedView<'_>,
    closed: &ClosedSeason,
    export: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    ensure_parent(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_view(&mut writer, view, closed, export)?;
    writer.flush()?;
    logf!("Export: wrote {} row(s) to {}", view.rows.len(), path.display());
    Ok(path.to_path_buf())
}

/// Save a rendered text report to `path`, creating parent directories.
pub fn save_text(path: &Path, text: &str) -> Result<PathBuf, ExportError> {
    ensure_parent(path)?;
    fs::write(path, text)?;
    logf!("Export: wrote text report to {}", path.display());
    Ok(path.to_path_buf())
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
