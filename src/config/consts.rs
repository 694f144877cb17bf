// src/config/consts.rs

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "FISHING_CALENDAR_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Config layering
pub const CONFIG_FILE: &str = "fishing_calendar.toml";
pub const ENV_PREFIX: &str = "FISHING_CALENDAR_";

// Reference tables
pub const DEFAULT_DATA_DIR: &str = ".";
pub const LOCATIONS_FILE: &str = "locations.csv";
pub const SPECIES_FILE: &str = "fishing_data.csv";
pub const GEAR_FILE: &str = "gear_data.csv";

// Zones
pub const UNKNOWN_ZONE: &str = "Unknown";
pub const ZONE_QUALIFIER: &str = " (";

// Display
pub const DEFAULT_CLOSED_SENTINEL: &str = "Closed";
pub const MAPS_BASE_URL: &str = "https://www.google.com/maps?q=";
pub const DEFAULT_STATE: &str = "Unknown";
pub const DEFAULT_CLOSURE_NOTES: &str = "Check current rules via official site";
pub const DEFAULT_RESERVE_NOTES: &str = "Standard unless noted";
pub const DEFAULT_OFFICIAL_LINK: &str = "#";
pub const DEFAULT_RATING: &str = "Unrated";

// Date picker bounds (inclusive), as (year, month, day)
pub const DATE_MIN: (i32, u32, u32) = (2024, 1, 1);
pub const DATE_MAX: (i32, u32, u32) = (2030, 12, 31);

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
