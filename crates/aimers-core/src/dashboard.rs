//! Aggregated view of today's progress.

use chrono::NaiveDate;
use serde::Serialize;

use crate::quotes::Quote;
use crate::salat::SalatRecord;
use crate::stats::DailyStats;
use crate::tasks::{Exam, ExamList, TaskList};
use crate::track::StudentTrack;

/// Greeting for the given hour of day (0..=23).
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingExam {
    pub name: String,
    pub date: NaiveDate,
    pub days_left: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub greeting: &'static str,
    pub date: NaiveDate,
    pub track: Option<StudentTrack>,
    pub subject_count: usize,
    pub prayers_completed: usize,
    pub pomodoros: u32,
    pub pomodoro_goal: u32,
    pub goal_progress_pct: f64,
    pub study_blocks_completed: u32,
    pub open_tasks: usize,
    pub next_exam: Option<UpcomingExam>,
    pub quote: Quote,
}

pub struct DashboardInput<'a> {
    pub today: NaiveDate,
    pub hour: u32,
    pub track: Option<StudentTrack>,
    pub salat: &'a SalatRecord,
    pub stats: &'a DailyStats,
    pub tasks: &'a TaskList,
    pub exams: &'a ExamList,
    pub pomodoro_goal: u32,
    pub quote: &'a Quote,
}

impl DashboardSummary {
    pub fn build(input: DashboardInput<'_>) -> Self {
        let next_exam = input
            .exams
            .next_upcoming(input.today)
            .map(|exam: &Exam| UpcomingExam {
                name: exam.name.clone(),
                date: exam.date,
                days_left: exam.days_left(input.today),
            });
        Self {
            greeting: greeting(input.hour),
            date: input.today,
            track: input.track,
            subject_count: input.track.map(|t| t.subjects().len()).unwrap_or(0),
            prayers_completed: input.salat.completed_count(),
            pomodoros: input.stats.pomodoros,
            pomodoro_goal: input.pomodoro_goal,
            goal_progress_pct: input.stats.goal_progress_pct(input.pomodoro_goal),
            study_blocks_completed: input.stats.study_blocks_completed,
            open_tasks: input.tasks.open_count(),
            next_exam,
            quote: *input.quote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::DailyRecord;
    use crate::quotes::quote_at;
    use crate::salat::Prayer;

    #[test]
    fn greeting_boundaries() {
        assert_eq!(greeting(0), "Good Morning");
        assert_eq!(greeting(11), "Good Morning");
        assert_eq!(greeting(12), "Good Afternoon");
        assert_eq!(greeting(17), "Good Afternoon");
        assert_eq!(greeting(18), "Good Evening");
        assert_eq!(greeting(23), "Good Evening");
    }

    #[test]
    fn summary_aggregates_records() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut salat = SalatRecord::fresh(today);
        salat.toggle(Prayer::Fajr);
        salat.toggle(Prayer::Dhuhr);
        let mut stats = DailyStats::fresh(today);
        stats.increment_pomodoro();
        stats.increment_pomodoro();
        let mut exams = ExamList::default();
        exams.add("Physics Final", NaiveDate::from_ymd_opt(2024, 6, 11).unwrap()).unwrap();

        let summary = DashboardSummary::build(DashboardInput {
            today,
            hour: 14,
            track: Some(StudentTrack::Medical),
            salat: &salat,
            stats: &stats,
            tasks: &TaskList::default(),
            exams: &exams,
            pomodoro_goal: 8,
            quote: quote_at(0),
        });

        assert_eq!(summary.greeting, "Good Afternoon");
        assert_eq!(summary.subject_count, 5);
        assert_eq!(summary.prayers_completed, 2);
        assert_eq!(summary.goal_progress_pct, 25.0);
        assert_eq!(summary.next_exam.unwrap().days_left, 10);
    }
}
