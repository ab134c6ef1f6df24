use aimers_core::timer::FOCUS_PRESETS_MIN;
use aimers_core::CoreError;
use clap::Subcommand;

use super::{open_companion, print_json, CliResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start (or resume) the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Start when stopped, pause when running
    Toggle,
    /// Stop and restore the full duration
    Reset,
    /// Print current timer state as JSON
    Status,
    /// Set the focus length in minutes (presets: 25, 60, 120)
    Duration {
        minutes: u32,
    },
    /// Set or clear the label of what you are studying
    Task {
        name: Option<String>,
    },
}

pub fn run(action: TimerAction) -> CliResult {
    let mut app = open_companion()?;

    let (timer, events) = match action {
        TimerAction::Duration { minutes } => {
            if !FOCUS_PRESETS_MIN.contains(&minutes) {
                tracing::debug!(minutes, "using a non-preset focus length");
            }
            let driven = app.set_focus_duration(minutes)?;
            app.config().save()?;
            driven
        }
        action => app.drive_timer(|timer| {
            Ok::<_, CoreError>(match action {
                TimerAction::Start => timer.start(),
                TimerAction::Pause => timer.pause(),
                TimerAction::Resume => timer.resume(),
                TimerAction::Toggle => timer.toggle(),
                TimerAction::Reset => Some(timer.reset()),
                TimerAction::Task { name } => {
                    timer.set_task(name);
                    None
                }
                TimerAction::Status | TimerAction::Duration { .. } => None,
            })
        })?,
    };

    for event in &events {
        print_json(event)?;
    }
    print_json(&timer.snapshot())
}
