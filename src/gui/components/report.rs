// src/gui/components/report.rs
//
// Central panel: headline, rules block, links, then the species table.

use eframe::egui::{self, Color32};

use crate::display::empty_message;
use crate::gui::app::{App, Outcome};

use super::species_table;

// kill/red ≈ #DC6149
pub const CLOSED_RED: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let view = match &app.outcome {
        Outcome::Idle => {
            ui.label("Select a location on the left.");
            return;
        }
        Outcome::NotFound(msg) => {
            ui.colored_label(CLOSED_RED, msg.as_str());
            return;
        }
        Outcome::Shown(view) => view,
    };

    ui.heading(view.title.as_str());
    ui.label(format!("Zone: {} | State: {}", view.zone, view.state));
    ui.separator();

    ui.strong("⚠️ DPI & Reserve Rules");
    ui.label(format!("Closures: {}", view.closures));
    ui.label(format!("Marine/Aquatic Reserve: {}", view.reserve));
    ui.hyperlink_to(view.official.label.as_str(), view.official.url.as_str());

    match &view.map {
        Some(link) => {
            ui.horizontal(|ui| {
                ui.label("View on Google Maps:");
                ui.hyperlink_to(link.label.as_str(), link.url.as_str());
            });
            ui.small("Click to see exact location, directions, street view, etc.");
        }
        None => {
            ui.small("No GPS coordinates available for this spot yet.");
        }
    }

    ui.separator();

    if view.cards.is_empty() {
        ui.label(empty_message(&view.month, &view.zone));
        return;
    }

    for warning in view.closed_warnings() {
        ui.colored_label(CLOSED_RED, warning);
    }

    species_table::draw(ui, &view.cards);
}
