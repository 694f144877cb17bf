// src/config/mod.rs
pub mod consts;
pub mod error;
pub mod options;
pub mod state;

pub use error::ConfigError;
pub use options::{AppOptions, DataOptions, DateRange, DisplayOptions, ExportOptions};
pub use state::{AppState, GuiState};
