// src/gui/components/mod.rs
pub mod location_panel;
pub mod report;
pub mod species_table;
