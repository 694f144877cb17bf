// src/display.rs
//! Presentation adapter: `ResolvedView` → display fields.
//!
//! Both surfaces (terminal text and the GUI) draw from `DisplayView`, so the
//! defaults for absent fields and the closed-season policy live here once.

use std::fmt;

use crate::config::consts::*;
use crate::config::options::DisplayOptions;
use crate::model::GearProfile;
use crate::resolve::ResolvedView;

/// Ratings that mark a closed season. Exact, case-sensitive comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosedSeason {
    sentinels: Vec<String>,
}

impl Default for ClosedSeason {
    fn default() -> Self {
        Self { sentinels: vec![s!(DEFAULT_CLOSED_SENTINEL)] }
    }
}

impl ClosedSeason {
    pub fn new<I, S>(sentinels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { sentinels: sentinels.into_iter().map(Into::into).collect() }
    }

    pub fn is_closed(&self, rating: Option<&str>) -> bool {
        rating.is_some_and(|r| self.sentinels.iter().any(|s| s == r))
    }
}

/// What to show in place of legal sizes.
#[derive(Clone, Debug, PartialEq)]
pub enum SizeLimits {
    Legal { min_cm: Option<f64>, max_cm: Option<f64> },
    ClosedSeason,
}

impl SizeLimits {
    /// `"Min: 30 cm | Max: 60 cm"`; parts that are absent are left out.
    /// `None` when there is nothing to show.
    pub fn label(&self) -> Option<String> {
        match self {
            SizeLimits::ClosedSeason => Some(s!("Closed season")),
            SizeLimits::Legal { min_cm, max_cm } => {
                let parts: Vec<String> = [("Min", min_cm), ("Max", max_cm)]
                    .into_iter()
                    .filter_map(|(label, v)| v.map(|cm| format!("{label}: {} cm", fmt_cm(cm))))
                    .collect();
                (!parts.is_empty()).then(|| parts.join(" | "))
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, SizeLimits::ClosedSeason)
    }
}

/// `30.0` → `"30"`, `28.5` → `"28.5"`.
pub fn fmt_cm(cm: f64) -> String {
    if cm.fract() == 0.0 { format!("{cm:.0}") } else { format!("{cm}") }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesCard {
    pub species: String,
    pub rating: String,
    pub best_times: Option<String>,
    pub limits: SizeLimits,
    pub rig_notes: Option<String>,
    pub gear: Option<GearProfile>,
}

impl SpeciesCard {
    pub fn closed_warning(&self) -> Option<String> {
        self.limits
            .is_closed()
            .then(|| format!("⛔ {} is in closed season: do not target or keep.", self.species))
    }

    /// One-line gear summary, `None` when there is no profile.
    pub fn gear_summary(&self) -> Option<String> {
        let gear = self.gear.as_ref()?;
        let fields = gear.fields();
        if fields.is_empty() {
            return Some(s!("(profile has no details)"));
        }
        Some(
            fields
                .iter()
                .map(|(label, v)| format!("{label}: {v}"))
                .collect::<Vec<_>>()
                .join(" | "),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayView {
    pub title: String,
    pub month: String,
    pub zone: String,
    pub state: String,
    pub closures: String,
    pub reserve: String,
    pub official: Link,
    pub map: Option<Link>,
    pub cards: Vec<SpeciesCard>,
}

/// Display policy: closed-season sentinels and the map URL prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presenter {
    pub closed: ClosedSeason,
    pub maps_base_url: String,
}

impl Default for Presenter {
    fn default() -> Self {
        Self { closed: ClosedSeason::default(), maps_base_url: s!(MAPS_BASE_URL) }
    }
}

impl From<&DisplayOptions> for Presenter {
    fn from(opts: &DisplayOptions) -> Self {
        Self {
            closed: ClosedSeason::new(opts.closed_sentinels.iter().cloned()),
            maps_base_url: opts.maps_base_url.clone(),
        }
    }
}

impl Presenter {
    pub fn map_url(&self, lat: f64, lon: f64) -> String {
        format!("{}{lat},{lon}", self.maps_base_url)
    }

    pub fn limits(&self, rating: Option<&str>, min_cm: Option<f64>, max_cm: Option<f64>) -> SizeLimits {
        if self.closed.is_closed(rating) {
            SizeLimits::ClosedSeason
        } else {
            SizeLimits::Legal { min_cm, max_cm }
        }
    }

    pub fn present(&self, view: &ResolvedView<'_>) -> DisplayView {
        let loc = view.location;

        let map = loc.coordinates().map(|(lat, lon)| Link {
            label: format!("Open {} in Maps", loc.name),
            url: self.map_url(lat, lon),
        });

        let cards = view
            .rows
            .iter()
            .map(|row| {
                let e = row.species;
                SpeciesCard {
                    species: e.species.clone(),
                    rating: s!(non_blank!(e.rating).unwrap_or(DEFAULT_RATING)),
                    best_times: non_blank!(e.best_times_notes).map(String::from),
                    limits: self.limits(e.rating.as_deref(), e.legal_min_cm, e.legal_max_cm),
                    rig_notes: non_blank!(e.gear_rig).map(String::from),
                    gear: row.gear.cloned(),
                }
            })
            .collect();

        DisplayView {
            title: format!("📍 {} — {} {}", loc.name, view.month, view.year),
            month: s!(view.month),
            zone: s!(view.zone),
            state: s!(non_blank!(loc.state).unwrap_or(DEFAULT_STATE)),
            closures: s!(non_blank!(loc.closure_notes).unwrap_or(DEFAULT_CLOSURE_NOTES)),
            reserve: s!(non_blank!(loc.reserve_notes).unwrap_or(DEFAULT_RESERVE_NOTES)),
            official: Link {
                label: s!("Official info"),
                url: s!(non_blank!(loc.official_link).unwrap_or(DEFAULT_OFFICIAL_LINK)),
            },
            map,
            cards,
        }
    }
}

pub fn not_found_message(name: &str) -> String {
    format!("Location \"{name}\" is not in the locations table.")
}

pub fn empty_message(month: &str, zone: &str) -> String {
    format!("No species data for {month} in zone {zone}.")
}

impl DisplayView {
    pub fn closed_warnings(&self) -> impl Iterator<Item = String> + '_ {
        self.cards.iter().filter_map(SpeciesCard::closed_warning)
    }

    /// Plain-text rendering for the terminal.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DisplayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Zone: {} | State: {}", self.zone, self.state)?;
        writeln!(f)?;
        writeln!(f, "⚠️ DPI & Reserve Rules")?;
        writeln!(f, "Closures: {}", self.closures)?;
        writeln!(f, "Marine/Aquatic Reserve: {}", self.reserve)?;
        writeln!(f, "{}: {}", self.official.label, self.official.url)?;
        match &self.map {
            Some(link) => writeln!(f, "View on Google Maps: {}", link.url)?,
            None => writeln!(f, "No GPS coordinates available for this spot yet.")?,
        }
        writeln!(f, "---")?;

        if self.cards.is_empty() {
            return writeln!(f, "{}", empty_message(&self.month, &self.zone));
        }

        for card in &self.cards {
            writeln!(f, "🎣 {} — {}", card.species, card.rating)?;
            if let Some(w) = card.closed_warning() {
                writeln!(f, "   {w}")?;
            } else if let Some(sizes) = card.limits.label() {
                writeln!(f, "   Legal size: {sizes}")?;
            }
            if let Some(t) = &card.best_times {
                writeln!(f, "   Best times: {t}")?;
            }
            if let Some(r) = &card.rig_notes {
                writeln!(f, "   Rig notes: {r}")?;
            }
            match card.gear_summary() {
                Some(g) => writeln!(f, "   Gear: {g}")?,
                None => writeln!(f, "   Gear: no recommendation on file")?,
            }
        }
        Ok(())
    }
}
