// src/zone.rs
//
// Zone matching between a location's zone label and a species row's zone
// cell. Zones are free text, so this is substring matching on a canonical
// key. Fragile by nature; an explicit zone-code column would replace it.

use crate::config::consts::ZONE_QUALIFIER;

/// Text before the first `" ("`: `"NSW East (default)"` → `"NSW East"`.
pub fn canonical_key(zone: &str) -> &str {
    zone.split_once(ZONE_QUALIFIER).map_or(zone, |(key, _)| key)
}

/// Case-insensitive containment of the location's canonical key in the
/// entry's zone. An entry without a zone never matches.
pub fn matches(location_zone: &str, entry_zone: Option<&str>) -> bool {
    let Some(entry) = entry_zone else { return false };
    let key = canonical_key(location_zone).to_lowercase();
    entry.to_lowercase().contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("NSW East (default)", "NSW East")]
    #[case("NSW East", "NSW East")]
    #[case("Vic (Port Phillip) (Bay)", "Vic")]
    #[case("QLD(North)", "QLD(North)")]
    #[case("", "")]
    fn canonical_key_strips_first_qualifier(#[case] zone: &str, #[case] key: &str) {
        assert_eq!(canonical_key(zone), key);
    }

    #[rstest]
    #[case("NSW East", Some("NSW East"), true)]
    #[case("NSW East (default)", Some("nsw east"), true)]
    #[case("nsw east", Some("NSW East & Central"), true)]
    #[case("NSW East", Some("NSW South"), false)]
    #[case("NSW East", Some("East"), false)]
    #[case("NSW East", None, false)]
    fn matching(#[case] loc: &str, #[case] entry: Option<&str>, #[case] expected: bool) {
        assert_eq!(matches(loc, entry), expected);
    }
}
