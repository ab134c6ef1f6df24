//! Task management commands for CLI.

use aimers_core::{NewTask, TaskCategory, TaskStatus};
use chrono::NaiveDate;
use clap::Subcommand;

use super::{open_companion, print_json, CliResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Subject the task belongs to
        #[arg(long)]
        subject: String,
        /// homework, mcq, revision or reading (default: homework)
        #[arg(long, default_value = "homework")]
        category: TaskCategory,
        /// Due date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    /// List tasks
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a task as in progress
    Start {
        /// Task ID
        id: String,
    },
    /// Mark a task done, or back to todo
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> CliResult {
    let mut app = open_companion()?;

    match action {
        TaskAction::Add {
            title,
            subject,
            category,
            due,
        } => {
            let task = app.add_task(NewTask {
                title,
                subject,
                category,
                due_date: due,
            })?;
            eprintln!("Task created: {}", task.id);
            print_json(&task)?;
        }
        TaskAction::List { json } => {
            let tasks = app.tasks();
            if json {
                return print_json(tasks);
            }
            if tasks.is_empty() {
                println!("no tasks");
            }
            for task in tasks.tasks() {
                let mark = match task.status {
                    TaskStatus::Done => "x",
                    TaskStatus::InProgress => "~",
                    TaskStatus::Todo => " ",
                };
                println!(
                    "[{mark}] {}  {} ({}, {}) due {}",
                    task.id,
                    task.title,
                    task.subject,
                    task.category.label(),
                    task.due_date
                );
            }
        }
        TaskAction::Start { id } => {
            let task = app.set_task_status(&id, TaskStatus::InProgress)?;
            print_json(&task)?;
        }
        TaskAction::Toggle { id } => {
            let status = app.toggle_task(&id)?;
            print_json(&serde_json::json!({ "id": id, "status": status }))?;
        }
        TaskAction::Delete { id } => {
            let task = app.delete_task(&id)?;
            eprintln!("Task deleted: {}", task.id);
        }
    }
    Ok(())
}
