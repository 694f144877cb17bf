// src/model.rs
//
// Row types for the three reference tables. Every optional column is an
// `Option`; empty cells deserialize to `None`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::config::consts::UNKNOWN_ZONE;

/// The three reference tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    Locations,
    Species,
    Gear,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Locations, Table::Species, Table::Gear];

    pub fn label(self) -> &'static str {
        match self {
            Table::Locations => "locations",
            Table::Species => "fishing data",
            Table::Gear => "gear data",
        }
    }

    /// Columns that must be present in the header row.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            Table::Locations => &["location_name", "zone"],
            Table::Species => &["month", "zone", "species"],
            Table::Gear => &["species"],
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "location_name")]
    pub name: String,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub closure_notes: Option<String>,
    #[serde(default)]
    pub reserve_notes: Option<String>,
    #[serde(default)]
    pub official_link: Option<String>,
}

impl Location {
    pub fn named(name: &str) -> Self {
        Self {
            name: s!(name),
            zone: None,
            state: None,
            latitude: None,
            longitude: None,
            closure_notes: None,
            reserve_notes: None,
            official_link: None,
        }
    }

    /// Zone label, or "Unknown" when the cell is empty.
    pub fn zone_or_unknown(&self) -> &str {
        non_blank!(self.zone).unwrap_or(UNKNOWN_ZONE)
    }

    /// Both coordinates, only when both are present and finite.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub month: String,
    #[serde(default)]
    pub zone: Option<String>,
    pub species: String,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub best_times_notes: Option<String>,
    #[serde(default, deserialize_with = "size_cm")]
    pub legal_min_cm: Option<f64>,
    #[serde(default, deserialize_with = "size_cm")]
    pub legal_max_cm: Option<f64>,
    #[serde(default)]
    pub gear_rig: Option<String>,
}

impl SpeciesEntry {
    pub fn new(month: &str, zone: &str, species: &str) -> Self {
        Self {
            month: s!(month),
            zone: Some(s!(zone)),
            species: s!(species),
            rating: None,
            best_times_notes: None,
            legal_min_cm: None,
            legal_max_cm: None,
            gear_rig: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearProfile {
    pub species: String,
    #[serde(default)]
    pub rod: Option<String>,
    #[serde(default)]
    pub reel: Option<String>,
    #[serde(default)]
    pub line_leader_weight: Option<String>,
    #[serde(default)]
    pub rig: Option<String>,
    #[serde(default)]
    pub bait_or_lure: Option<String>,
}

impl GearProfile {
    pub fn new(species: &str) -> Self {
        Self {
            species: s!(species),
            rod: None,
            reel: None,
            line_leader_weight: None,
            rig: None,
            bait_or_lure: None,
        }
    }

    /// Labelled, non-empty fields in display order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Rod", &self.rod),
            ("Reel", &self.reel),
            ("Line/Leader", &self.line_leader_weight),
            ("Rig", &self.rig),
            ("Bait/Lure", &self.bait_or_lure),
        ]
        .into_iter()
        .filter_map(|(label, v)| non_blank!(v).map(|v| (label, v)))
        .collect()
    }
}

/// Coordinates are free text in the wild ("n/a", "TBC"); anything that is
/// not a number loads as `None` instead of failing the whole table.
fn lenient_f64<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw.and_then(|s| s.trim().parse::<f64>().ok()))
}

/// Spreadsheet placeholders that mean "no value".
const NULL_WORDS: [&str; 7] = ["nan", "na", "n/a", "null", "none", "-", "--"];

/// Size cells: blanks, null placeholders and non-finite numbers load as
/// `None`. Any other non-numeric text is an error for the row.
fn size_cm<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(de)? else {
        return Ok(None);
    };
    let cell = raw.trim();
    if cell.is_empty() || NULL_WORDS.iter().any(|w| cell.eq_ignore_ascii_case(w)) {
        return Ok(None);
    }
    let cm: f64 = cell
        .parse()
        .map_err(|_| de::Error::custom(format!("size {cell:?} is not a number")))?;
    Ok(cm.is_finite().then_some(cm))
}
