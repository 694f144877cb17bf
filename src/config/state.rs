// src/config/state.rs
use chrono::{Local, NaiveDate};

use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Location picked in the left panel
    pub selected_location: Option<String>,

    /// Date picked; always inside `options.dates`
    pub date: NaiveDate,

    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_location: None,
            date: Local::now().date_naive(),
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let mut gui = GuiState::default();
        gui.date = options.dates.clamp(gui.date);
        Self { options, gui }
    }
}
