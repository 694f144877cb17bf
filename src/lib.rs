// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod csv;
pub mod display;
pub mod error;
pub mod file;
pub mod gui;
pub mod model;
pub mod resolve;
pub mod store;
pub mod zone;

#[cfg(feature = "cli")]
pub mod cli;
