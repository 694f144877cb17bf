// src/resolve.rs
//! Location → zone/month → species rows → gear.
//!
//! Pure function of its inputs and the table set: the same arguments against
//! the same tables always give the same view. The view borrows from the
//! tables and is meant to be rendered and dropped.

use chrono::{Datelike, NaiveDate};

use crate::error::ResolveError;
use crate::model::{GearProfile, Location, SpeciesEntry};
use crate::store::TableSet;
use crate::zone;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// English full month name.
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// One matched species row and its gear recommendation, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedRow<'t> {
    pub species: &'t SpeciesEntry,
    pub gear: Option<&'t GearProfile>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedView<'t> {
    pub location: &'t Location,
    pub zone: &'t str,
    pub month: &'static str,
    pub year: i32,
    /// Table order, never re-sorted. Empty is a valid answer.
    pub rows: Vec<ResolvedRow<'t>>,
}

impl ResolvedView<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// First location with exactly this name.
pub fn find_location<'t>(tables: &'t TableSet, name: &str) -> Option<&'t Location> {
    tables.locations.iter().find(|l| l.name == name)
}

/// First gear profile whose species matches, ignoring case.
pub fn gear_for<'t>(gear: &'t [GearProfile], species: &str) -> Option<&'t GearProfile> {
    let wanted = species.to_lowercase();
    gear.iter().find(|g| g.species.to_lowercase() == wanted)
}

pub fn resolve<'t>(
    tables: &'t TableSet,
    location_name: &str,
    date: NaiveDate,
) -> Result<ResolvedView<'t>, ResolveError> {
    let location = find_location(tables, location_name).ok_or_else(|| {
        logd!("Resolve: unknown location {location_name:?}");
        ResolveError::NotFound { name: s!(location_name) }
    })?;

    let zone = location.zone_or_unknown();
    let month = month_name(date);

    let rows: Vec<ResolvedRow<'t>> = tables
        .species
        .iter()
        .filter(|e| e.month == month && zone::matches(zone, e.zone.as_deref()))
        .map(|species| ResolvedRow {
            species,
            gear: gear_for(&tables.gear, &species.species),
        })
        .collect();

    logd!(
        "Resolve: {} / {} {} → zone {:?}, {} row(s)",
        location.name,
        month,
        date.year(),
        zone,
        rows.len()
    );

    Ok(ResolvedView { location, zone, month, year: date.year(), rows })
}
