// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use fishing_calendar::{
    config::{AppOptions, AppState},
    gui,
    log::{self, Sink},
};

fn main() {
    if let Err(e) = log::init(Sink::File) {
        eprintln!("Logging disabled: {e}");
    }

    let options = AppOptions::load(None).unwrap_or_else(|e| {
        fishing_calendar::loge!("Config: {e}; using defaults");
        AppOptions::default()
    });
    let state = AppState::new(options);

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Fishing Calendar")
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
