//! Homework tasks and upcoming exams.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskCategory {
    #[default]
    Homework,
    #[serde(rename = "MCQ")]
    Mcq,
    Revision,
    Reading,
}

impl TaskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::Homework => "Homework",
            TaskCategory::Mcq => "MCQ Practice",
            TaskCategory::Revision => "Revision",
            TaskCategory::Reading => "Reading",
        }
    }
}

impl FromStr for TaskCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "homework" => Ok(TaskCategory::Homework),
            "mcq" => Ok(TaskCategory::Mcq),
            "revision" => Ok(TaskCategory::Revision),
            "reading" => Ok(TaskCategory::Reading),
            _ => Err(ValidationError::InvalidValue {
                field: "category".into(),
                message: format!("unknown category '{s}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub category: TaskCategory,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

/// Input for [`TaskList::add`].
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub subject: String,
    pub category: TaskCategory,
    /// Defaults to today when absent.
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.0.iter().filter(|t| t.status != TaskStatus::Done).count()
    }

    /// Append a new task in the `Todo` state.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the title or subject is blank.
    pub fn add(&mut self, new: NewTask, today: NaiveDate) -> Result<&Task> {
        let title = new.title.trim();
        let subject = new.subject.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyField("title").into());
        }
        if subject.is_empty() {
            return Err(ValidationError::EmptyField("subject").into());
        }
        self.0.push(Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            subject: subject.to_string(),
            category: new.category,
            due_date: new.due_date.unwrap_or(today),
            status: TaskStatus::Todo,
        });
        Ok(&self.0[self.0.len() - 1])
    }

    /// `Done` goes back to `Todo`; anything else becomes `Done`.
    pub fn toggle(&mut self, id: &str) -> Result<TaskStatus> {
        let task = self
            .0
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found("task", id))?;
        task.status = match task.status {
            TaskStatus::Done => TaskStatus::Todo,
            TaskStatus::Todo | TaskStatus::InProgress => TaskStatus::Done,
        };
        Ok(task.status)
    }

    pub fn set_status(&mut self, id: &str, status: TaskStatus) -> Result<&Task> {
        let task = self
            .0
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found("task", id))?;
        task.status = status;
        Ok(task)
    }

    pub fn delete(&mut self, id: &str) -> Result<Task> {
        let pos = self
            .0
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| not_found("task", id))?;
        Ok(self.0.remove(pos))
    }
}

/// How close an exam is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Red,
    Yellow,
    Green,
}

impl Urgency {
    pub fn from_days_left(days: i64) -> Self {
        if days < 3 {
            Urgency::Red
        } else if days < 7 {
            Urgency::Yellow
        } else {
            Urgency::Green
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
}

impl Exam {
    /// Whole days from `today` until the exam; negative once it has passed.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }

    pub fn urgency(&self, today: NaiveDate) -> Urgency {
        Urgency::from_days_left(self.days_left(today))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamList(Vec<Exam>);

impl ExamList {
    pub fn new(exams: Vec<Exam>) -> Self {
        Self(exams)
    }

    pub fn exams(&self) -> &[Exam] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn add(&mut self, name: &str, date: NaiveDate) -> Result<&Exam> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        self.0.push(Exam {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            date,
        });
        Ok(&self.0[self.0.len() - 1])
    }

    pub fn delete(&mut self, id: &str) -> Result<Exam> {
        let pos = self
            .0
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| not_found("exam", id))?;
        Ok(self.0.remove(pos))
    }

    /// Exams ordered by date, earliest first.
    pub fn by_date(&self) -> Vec<&Exam> {
        let mut sorted: Vec<&Exam> = self.0.iter().collect();
        sorted.sort_by_key(|e| e.date);
        sorted
    }

    /// Earliest exam that is today or later.
    pub fn next_upcoming(&self, today: NaiveDate) -> Option<&Exam> {
        self.by_date().into_iter().find(|e| e.date >= today)
    }
}

fn not_found(kind: &'static str, id: &str) -> CoreError {
    CoreError::NotFound {
        kind,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn new_task(title: &str, subject: &str) -> NewTask {
        NewTask {
            title: title.into(),
            subject: subject.into(),
            ..NewTask::default()
        }
    }

    #[test]
    fn add_requires_title_and_subject() {
        let mut list = TaskList::default();
        let err = list.add(new_task("", "Physics"), date(1, 1)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyField("title"))
        ));
        let err = list.add(new_task("Read ch. 3", "  "), date(1, 1)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyField("subject"))
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn add_defaults_due_date_and_status() {
        let mut list = TaskList::default();
        let task = list.add(new_task("Vectors", "Physics"), date(4, 2)).unwrap().clone();
        assert_eq!(task.due_date, date(4, 2));
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.category, TaskCategory::Homework);
        assert_eq!(list.open_count(), 1);
    }

    #[test]
    fn toggle_flips_between_done_and_todo() {
        let mut list = TaskList::default();
        let id = list.add(new_task("MCQ set", "Biology"), date(1, 1)).unwrap().id.clone();
        assert_eq!(list.toggle(&id).unwrap(), TaskStatus::Done);
        assert_eq!(list.open_count(), 0);
        assert_eq!(list.toggle(&id).unwrap(), TaskStatus::Todo);

        let task = list.set_status(&id, TaskStatus::InProgress).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(list.open_count(), 1);
        assert_eq!(list.toggle(&id).unwrap(), TaskStatus::Done);
    }

    #[test]
    fn delete_unknown_task_is_not_found() {
        let mut list = TaskList::default();
        assert!(matches!(
            list.delete("missing"),
            Err(CoreError::NotFound { kind: "task", .. })
        ));
    }

    #[test]
    fn task_json_matches_stored_layout() {
        let mut list = TaskList::default();
        list.add(
            NewTask {
                title: "Past papers".into(),
                subject: "Chemistry".into(),
                category: TaskCategory::Mcq,
                due_date: Some(date(5, 20)),
            },
            date(1, 1),
        )
        .unwrap();
        let json = serde_json::to_value(&list).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["category"], "MCQ");
        assert_eq!(json[0]["dueDate"], "2024-05-20");
        assert_eq!(json[0]["status"], "Todo");
    }

    #[test]
    fn exams_sort_and_report_urgency() {
        let mut exams = ExamList::default();
        exams.add("Biology Term 1", date(3, 20)).unwrap();
        exams.add("Physics Mock", date(3, 3)).unwrap();
        exams.add("Chemistry Quiz", date(3, 7)).unwrap();

        let today = date(3, 1);
        let names: Vec<_> = exams.by_date().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Physics Mock", "Chemistry Quiz", "Biology Term 1"]);

        let sorted = exams.by_date();
        assert_eq!(sorted[0].days_left(today), 2);
        assert_eq!(sorted[0].urgency(today), Urgency::Red);
        assert_eq!(sorted[1].urgency(today), Urgency::Yellow);
        assert_eq!(sorted[2].urgency(today), Urgency::Green);
    }

    #[test]
    fn next_upcoming_skips_past_exams() {
        let mut exams = ExamList::default();
        exams.add("Old", date(2, 1)).unwrap();
        exams.add("New", date(6, 1)).unwrap();
        assert_eq!(exams.next_upcoming(date(3, 1)).unwrap().name, "New");
        assert!(exams.next_upcoming(date(7, 1)).is_none());
    }

    #[test]
    fn exam_name_required() {
        let mut exams = ExamList::default();
        assert!(exams.add(" ", date(1, 1)).is_err());
    }
}
