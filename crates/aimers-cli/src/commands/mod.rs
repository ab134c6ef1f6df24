pub mod config;
pub mod dashboard;
pub mod exam;
pub mod plan;
pub mod quote;
pub mod salat;
pub mod stats;
pub mod task;
pub mod timer;
pub mod track;

use aimers_core::{Companion, Config};
use serde::Serialize;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Load configuration and all persisted state for today.
pub fn open_companion() -> Result<Companion, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    Ok(Companion::open(config)?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
