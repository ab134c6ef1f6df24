use aimers_core::Urgency;
use chrono::NaiveDate;
use clap::Subcommand;
use serde::Serialize;

use super::{open_companion, print_json, CliResult};

#[derive(Subcommand)]
pub enum ExamAction {
    /// Add an exam
    Add {
        /// Exam name (e.g. "Biology Term 1")
        name: String,
        /// Exam date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
    /// List exams, soonest first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete an exam
    Delete {
        /// Exam ID
        id: String,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExamRow<'a> {
    id: &'a str,
    name: &'a str,
    date: NaiveDate,
    days_left: i64,
    urgency: Urgency,
}

pub fn run(action: ExamAction) -> CliResult {
    let mut app = open_companion()?;

    match action {
        ExamAction::Add { name, date } => {
            let exam = app.add_exam(&name, date)?;
            eprintln!("Exam added: {}", exam.id);
            print_json(&exam)?;
        }
        ExamAction::List { json } => {
            let today = app.today();
            let rows: Vec<ExamRow<'_>> = app
                .exams()
                .by_date()
                .into_iter()
                .map(|exam| ExamRow {
                    id: &exam.id,
                    name: &exam.name,
                    date: exam.date,
                    days_left: exam.days_left(today),
                    urgency: exam.urgency(today),
                })
                .collect();
            if json {
                return print_json(&rows);
            }
            if rows.is_empty() {
                println!("no exams");
            }
            for row in rows {
                println!(
                    "{}  {:<30} {}  {} days left",
                    row.id, row.name, row.date, row.days_left
                );
            }
        }
        ExamAction::Delete { id } => {
            let exam = app.delete_exam(&id)?;
            eprintln!("Exam deleted: {}", exam.id);
        }
    }
    Ok(())
}
