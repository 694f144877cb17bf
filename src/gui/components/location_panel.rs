// src/gui/components/location_panel.rs
//
// Left panel: date picker, location list, reload button, load warnings.
// Changes go through App::select_* so the view is marked dirty.

use eframe::egui::{self, Color32};
use egui_extras::DatePickerButton;

use crate::gui::app::App;

// text_yellow ≈ #F0D23C
const WARN: Color32 = Color32::from_rgb(0xF0, 0xD2, 0x3C);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Fishing Calendar");
    ui.separator();

    ui.label("Date");
    let mut date = app.state.gui.date;
    ui.add(DatePickerButton::new(&mut date).id_salt("fishing_date"));
    app.select_date(date);

    let range = app.state.options.dates;
    ui.small(format!("{} to {}", range.min, range.max));

    ui.separator();
    ui.label("Location");

    if app.locations.is_empty() {
        ui.weak("No locations available.");
    }

    let mut picked: Option<String> = None;
    let list_h = (ui.available_height() - 90.0).max(80.0);
    egui::ScrollArea::vertical()
        .id_salt("locations_scroll")
        .max_height(list_h)
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            for name in &app.locations {
                let selected = app.state.gui.selected_location.as_deref() == Some(name.as_str());
                if ui.selectable_label(selected, name.as_str()).clicked() {
                    picked = Some(name.clone());
                }
            }
        });
    if let Some(name) = picked {
        app.select_location(name);
    }

    ui.separator();
    if ui
        .button("🔄 Reload data")
        .on_hover_text("Clear cached tables and re-read the CSV files")
        .clicked()
    {
        app.reload();
    }

    for issue in &app.issues {
        ui.colored_label(WARN, issue.as_str());
    }
}
