// src/gui/components/species_table.rs
//
// Species rows for the current view. Purely a view over `SpeciesCard`s.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::display::SpeciesCard;

use super::report::CLOSED_RED;

const HEADERS: [&str; 6] = ["Species", "Rating", "Legal size", "Best times", "Rig notes", "Gear"];
const WIDTHS: [f32; 5] = [140.0, 90.0, 170.0, 200.0, 180.0];

pub fn draw(ui: &mut egui::Ui, cards: &[SpeciesCard]) {
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0);
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
    }
    table = table.column(Column::remainder().clip(true));

    table
        .header(24.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for card in cards {
                body.row(22.0, |mut row| {
                    let closed = card.limits.is_closed();

                    row.col(|ui| {
                        ui.label(card.species.as_str());
                    });
                    row.col(|ui| {
                        let mut rt = RichText::new(card.rating.as_str());
                        if closed { rt = rt.color(CLOSED_RED).strong(); }
                        ui.label(rt);
                    });
                    row.col(|ui| {
                        let text = card.limits.label().unwrap_or_else(|| s!("—"));
                        if closed {
                            ui.colored_label(CLOSED_RED, format!("⛔ {text}"));
                        } else {
                            ui.label(text);
                        }
                    });
                    row.col(|ui| {
                        ui.label(card.best_times.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(card.rig_notes.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        match card.gear_summary() {
                            Some(g) => { ui.label(g.as_str()).on_hover_text(g.as_str()); }
                            None => { ui.weak("No gear on file"); }
                        }
                    });
                });
            }
        });
}
