// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    display::{DisplayView, Presenter, not_found_message},
    resolve::resolve,
    store::DataStore,
};

use super::components::{location_panel, report};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Fishing Calendar",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

/// What the central panel shows.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Nothing selected (or no locations loaded)
    Idle,
    Shown(DisplayView),
    NotFound(String),
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub store: DataStore,
    pub presenter: Presenter,

    // picker contents + load problems from the last (re)load
    pub locations: Vec<String>,
    pub issues: Vec<String>,

    // cached render; recomputed when `dirty`
    pub outcome: Outcome,
    pub dirty: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let store = DataStore::new(state.options.data.clone());
        let presenter = Presenter::from(&state.options.display);

        let mut app = Self {
            state,
            store,
            presenter,
            locations: Vec::new(),
            issues: Vec::new(),
            outcome: Outcome::Idle,
            dirty: true,
        };
        app.sync_tables();

        logf!("Init: locations={}, date={}", app.locations.len(), app.state.gui.date);
        app
    }

    /// Pull picker contents from the (possibly cached) tables. Keeps the
    /// current selection when it still exists, else picks the first location.
    fn sync_tables(&mut self) {
        let snap = self.store.load();
        self.locations = snap.tables.location_names().map(String::from).collect();
        self.issues = snap.report.issues.iter().map(|e| e.to_string()).collect();

        let gui = &mut self.state.gui;
        let still_known = gui
            .selected_location
            .as_ref()
            .is_some_and(|n| self.locations.contains(n));
        if !still_known {
            gui.selected_location = self.locations.first().cloned();
        }
        self.dirty = true;
    }

    /// "Reload data": clear the cache and re-read every table.
    pub fn reload(&mut self) {
        self.store.invalidate();
        self.sync_tables();
    }

    pub fn select_location(&mut self, name: String) {
        if self.state.gui.selected_location.as_ref() != Some(&name) {
            logd!("Select: location {name:?}");
            self.state.gui.selected_location = Some(name);
            self.dirty = true;
        }
    }

    /// Set the date, clamped into the configured range.
    pub fn select_date(&mut self, date: chrono::NaiveDate) {
        let date = self.state.options.dates.clamp(date);
        if date != self.state.gui.date {
            logd!("Select: date {date}");
            self.state.gui.date = date;
            self.dirty = true;
        }
    }

    /// Recompute the view if an input changed since the last frame.
    pub fn refresh(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        let Some(name) = self.state.gui.selected_location.clone() else {
            self.outcome = Outcome::Idle;
            return;
        };
        let date = self.state.gui.date;

        let tables = &self.store.load().tables;
        self.outcome = match resolve(tables, &name, date) {
            Ok(view) => Outcome::Shown(self.presenter.present(&view)),
            Err(e) => {
                logw!("Resolve: {e}");
                Outcome::NotFound(not_found_message(&name))
            }
        };
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("locations")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                location_panel::draw(ui, self);
            });

        self.refresh();

        egui::CentralPanel::default().show(ctx, |ui| {
            report::draw(ui, self);
        });
    }
}
