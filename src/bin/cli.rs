// src/bin/cli.rs
use fishing_calendar::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
