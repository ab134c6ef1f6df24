use aimers_core::quotes;
use chrono::{Local, Timelike};

use super::{open_companion, print_json, CliResult};

pub fn run(json: bool) -> CliResult {
    let app = open_companion()?;
    let summary = app.dashboard(Local::now().hour(), quotes::random_quote_index());

    if json {
        return print_json(&summary);
    }

    println!("{}! ({})", summary.greeting, summary.date);
    match summary.track {
        Some(track) => println!("Track: {} ({} subjects)", track.label(), summary.subject_count),
        None => println!("Track: not selected (run `aimers track set <track>`)"),
    }
    println!(
        "Focus: {} / {} pomodoros ({:.0}%)",
        summary.pomodoros, summary.pomodoro_goal, summary.goal_progress_pct
    );
    println!("Study blocks completed: {}", summary.study_blocks_completed);
    println!("Salat: {} / 5 prayed", summary.prayers_completed);
    println!("Open tasks: {}", summary.open_tasks);
    if let Some(exam) = &summary.next_exam {
        println!("Next exam: {} in {} days ({})", exam.name, exam.days_left, exam.date);
    }
    println!();
    println!("\"{}\"", summary.quote.text);
    println!("  -- {}", summary.quote.source);
    Ok(())
}
