use aimers_core::Prayer;
use clap::Subcommand;

use super::{open_companion, print_json, CliResult};

#[derive(Subcommand)]
pub enum SalatAction {
    /// Show today's checklist
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a prayer as prayed, or unmark it
    Toggle {
        /// fajr, dhuhr, asr, maghrib or isha
        prayer: Prayer,
    },
}

pub fn run(action: SalatAction) -> CliResult {
    let mut app = open_companion()?;

    match action {
        SalatAction::Show { json } => {
            let salat = app.salat();
            if json {
                return print_json(salat);
            }
            println!("Today: {} / 5 Prayed", salat.completed_count());
            for prayer in Prayer::ALL {
                let mark = if salat.is_done(prayer) { "x" } else { " " };
                println!("[{mark}] {:<8} {}", prayer.label(), prayer.time_hint());
            }
        }
        SalatAction::Toggle { prayer } => {
            let event = app.toggle_salat(prayer);
            print_json(&event)?;
        }
    }
    Ok(())
}
