// src/csv.rs
use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::model::Table;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
}

impl Delim {
    pub fn byte(self) -> u8 {
        match self { Delim::Csv => b',', Delim::Tsv => b'\t' }
    }
    pub fn ext(self) -> &'static str {
        match self { Delim::Csv => "csv", Delim::Tsv => "tsv" }
    }
}

/* ---------------- Reading ---------------- */

/// Parse one reference table. The header row must carry every required
/// column of `table`; extra columns are ignored. Cells are trimmed.
pub fn read_table<T, R>(table: Table, source: R) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(source);

    let headers = rdr
        .headers()
        .map_err(|source| LoadError::Parse { table, source })?
        .clone();
    check_schema(table, &headers)?;

    let mut rows = Vec::new();
    for rec in rdr.deserialize() {
        rows.push(rec.map_err(|source| LoadError::Parse { table, source })?);
    }
    Ok(rows)
}

fn check_schema(table: Table, headers: &StringRecord) -> Result<(), LoadError> {
    let missing: Vec<String> = table
        .required_columns()
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| s!(*col))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::Schema { table, missing })
    }
}

/* ---------------- Writing ---------------- */

/// Write a header row (optional) and data rows to any writer.
pub fn write_rows<W: Write>(
    w: W,
    headers: Option<&[&str]>,
    rows: &[Vec<String>],
    delim: Delim,
) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().delimiter(delim.byte()).from_writer(w);
    if let Some(h) = headers {
        wtr.write_record(h)?;
    }
    for r in rows {
        wtr.write_record(r)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::SizeLimits;
    use crate::model::{GearProfile, Location, SpeciesEntry};
    use pretty_assertions::assert_eq;

    #[test]
    fn optional_columns_may_be_absent_or_empty() {
        let text = "location_name,zone,latitude,longitude\n\
                    Sydney,NSW East,-33.8,\n\
                    Eden,,,\n\
                    Bermagui,NSW South,n/a,150.07\n";
        let rows: Vec<Location> = read_table(Table::Locations, text.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].latitude, Some(-33.8));
        assert_eq!(rows[0].longitude, None);
        assert_eq!(rows[1].zone, None);
        assert_eq!(rows[1].state, None);
        assert_eq!(rows[2].latitude, None);
        assert_eq!(rows[2].longitude, Some(150.07));
        assert_eq!(rows[2].coordinates(), None);
    }

    #[test]
    fn cells_are_trimmed_and_quotes_honoured() {
        let text = "species, rod ,rig\n\" Snapper \",\"4-8kg, 7ft\",  Running sinker \n";
        let rows: Vec<GearProfile> = read_table(Table::Gear, text.as_bytes()).unwrap();
        assert_eq!(rows[0].species, "Snapper");
        assert_eq!(rows[0].rod.as_deref(), Some("4-8kg, 7ft"));
        assert_eq!(rows[0].rig.as_deref(), Some("Running sinker"));
    }

    #[test]
    fn numeric_sizes_parse_and_blank_max_is_none() {
        let text = "month,zone,species,legal_min_cm,legal_max_cm\nJanuary,NSW East,Snapper,30,\n";
        let rows: Vec<SpeciesEntry> = read_table(Table::Species, text.as_bytes()).unwrap();
        assert_eq!(rows[0].legal_min_cm, Some(30.0));
        assert_eq!(rows[0].legal_max_cm, None);
    }

    #[test]
    fn missing_required_column_is_schema_error() {
        let text = "month,species\nJanuary,Snapper\n";
        let err = read_table::<SpeciesEntry, _>(Table::Species, text.as_bytes()).unwrap_err();
        match err {
            LoadError::Schema { table, missing } => {
                assert_eq!(table, Table::Species);
                assert_eq!(missing, vec![s!("zone")]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn empty_source_is_schema_error() {
        let err = read_table::<GearProfile, _>(Table::Gear, "".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Schema { .. }));
    }

    #[test]
    fn ragged_row_is_parse_error() {
        let text = "species,rod\nSnapper,4-8kg,extra\n";
        let err = read_table::<GearProfile, _>(Table::Gear, text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { table: Table::Gear, .. }));
    }

    #[test]
    fn null_placeholders_in_sizes_load_as_none() {
        let text = "month,zone,species,legal_min_cm,legal_max_cm\n\
                    January,NSW East,Snapper,30,NaN\n\
                    January,NSW East,Bream,25,N/A\n\
                    January,NSW East,Tailor,null, - \n\
                    January,NSW East,Flathead,36,inf\n";
        let rows: Vec<SpeciesEntry> = read_table(Table::Species, text.as_bytes()).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].legal_min_cm, Some(30.0));
        assert_eq!(rows[0].legal_max_cm, None);
        assert_eq!(rows[1].legal_max_cm, None);
        assert_eq!((rows[2].legal_min_cm, rows[2].legal_max_cm), (None, None));
        assert_eq!(rows[3].legal_max_cm, None);

        let limits = SizeLimits::Legal { min_cm: rows[0].legal_min_cm, max_cm: rows[0].legal_max_cm };
        assert_eq!(limits.label().as_deref(), Some("Min: 30 cm"));
    }

    #[test]
    fn non_numeric_size_is_parse_error() {
        let text = "month,zone,species,legal_min_cm\nJanuary,NSW East,Snapper,thirty\n";
        let err = read_table::<SpeciesEntry, _>(Table::Species, text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn write_rows_tsv_with_headers() {
        let mut buf = Vec::new();
        let rows = vec![vec![s!("Snapper"), s!("Good")], vec![s!("Bream"), s!("a,b")]];
        write_rows(&mut buf, Some(&["species", "rating"]), &rows, Delim::Tsv).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "species\trating\nSnapper\tGood\nBream\ta,b\n");
    }
}
