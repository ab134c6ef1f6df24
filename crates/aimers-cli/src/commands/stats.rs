use clap::Subcommand;

use super::{open_companion, print_json, CliResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's stats
    Today,
    /// Count one finished study block from today's plan
    BlockDone,
}

pub fn run(action: StatsAction) -> CliResult {
    let mut app = open_companion()?;

    match action {
        StatsAction::Today => {
            let goal = app.config().goals.daily_pomodoros;
            let stats = app.stats();
            print_json(&serde_json::json!({
                "date": stats.date,
                "pomodoros": stats.pomodoros,
                "pomodoroGoal": goal,
                "goalProgressPct": stats.goal_progress_pct(goal),
                "studyBlocksCompleted": stats.study_blocks_completed,
            }))?;
        }
        StatsAction::BlockDone => {
            let event = app.record_study_block();
            print_json(&event)?;
        }
    }
    Ok(())
}
