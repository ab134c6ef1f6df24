use aimers_core::{BlockType, SubjectDifficulty};
use clap::Args;

use super::{open_companion, print_json, CliResult};

#[derive(Args)]
pub struct PlanArgs {
    /// Daily study hours (2-12); defaults to planner.hours_per_day
    #[arg(long)]
    hours: Option<u32>,
    /// Seed for a reproducible subject order
    #[arg(long)]
    seed: Option<u64>,
    /// Mark a subject as hard (repeatable)
    #[arg(long = "hard", value_name = "SUBJECT")]
    hard: Vec<String>,
    /// Mark a subject as easy (repeatable)
    #[arg(long = "easy", value_name = "SUBJECT")]
    easy: Vec<String>,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs) -> CliResult {
    let app = open_companion()?;

    let difficulties: Vec<(String, SubjectDifficulty)> = args
        .hard
        .into_iter()
        .map(|s| (s, SubjectDifficulty::Hard))
        .chain(args.easy.into_iter().map(|s| (s, SubjectDifficulty::Easy)))
        .collect();

    if app.track().is_none() {
        return Err("select a track first: aimers track set <track>".into());
    }

    let plan = app.generate_plan(args.hours, &difficulties, args.seed)?;
    tracing::info!(study_blocks = plan.study_block_count(), "plan generated");

    if args.json {
        return print_json(&plan);
    }

    println!(
        "Your daily plan ({} h, {} study blocks)",
        plan.hours_per_day,
        plan.study_block_count()
    );
    for block in &plan.blocks {
        let note = match block.block_type() {
            BlockType::Break => "Take a rest, stretch, drink water.",
            _ => "Focus deeply. No distractions.",
        };
        println!(
            "{:>8} - {:<8}  {:<18} {}",
            block.start_time(),
            block.end_time(),
            block.subject(),
            note
        );
    }
    Ok(())
}
