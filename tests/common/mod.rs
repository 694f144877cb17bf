// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const LOCATIONS: &str = "\
location_name,zone,state,latitude,longitude,closure_notes,reserve_notes,official_link
Sydney,NSW East,NSW,-33.8,151.2,,,https://www.dpi.nsw.gov.au/fishing
Eden,NSW South (default),NSW,,,Harbour closed to netting,,
";

pub const SPECIES: &str = "\
month,zone,species,rating,best_times_notes,legal_min_cm,legal_max_cm,gear_rig
January,NSW East,Snapper,Good,Dawn on the reefs,30,,Paternoster
January,NSW South,Bass,Closed,,30,,
February,NSW South,Bream,Fair,,25,,
January,,Tailor,Good,,,,
";

pub const GEAR: &str = "\
species,rod,reel,line_leader_weight,rig,bait_or_lure
snapper,4-8kg,4000,15lb/20lb,Running sinker,Pilchard
SNAPPER,10kg,6000,,,
";

pub fn write(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

/// Temp data directory holding the three sample tables.
pub fn sample_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "locations.csv", LOCATIONS);
    write(dir.path(), "fishing_data.csv", SPECIES);
    write(dir.path(), "gear_data.csv", GEAR);
    dir
}
