//! Application state facade.
//!
//! [`Companion`] loads every persisted record once, applies the daily reset,
//! and writes a record back after each mutation. Front ends (the CLI) only
//! talk to this type.

use chrono::{NaiveDate, Utc};

use crate::daily;
use crate::dashboard::{DashboardInput, DashboardSummary};
use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::planner::{BlockGenerator, StudyPlan};
use crate::quotes;
use crate::salat::{Prayer, SalatRecord};
use crate::stats::DailyStats;
use crate::storage::{keys, Config, Database, KeyValue, StateStore};
use crate::tasks::{Exam, ExamList, NewTask, Task, TaskList, TaskStatus};
use crate::timer::FocusTimer;
use crate::track::{default_subject_configs, StudentTrack, SubjectConfig, SubjectDifficulty};

pub struct Companion<B: KeyValue = Database> {
    store: StateStore<B>,
    config: Config,
    today: NaiveDate,
    track: Option<StudentTrack>,
    salat: SalatRecord,
    stats: DailyStats,
    tasks: TaskList,
    exams: ExamList,
}

impl Companion<Database> {
    /// Open the default on-disk database and load state for today.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened.
    pub fn open(config: Config) -> Result<Self> {
        let db = Database::open()?;
        Ok(Self::load(StateStore::new(db), config, daily::today()))
    }
}

impl<B: KeyValue> Companion<B> {
    pub fn load(store: StateStore<B>, config: Config, today: NaiveDate) -> Self {
        let track = store.get(keys::TRACK, None);
        let salat = store.get_daily(keys::SALAT, today);
        let stats = store.get_daily(keys::STATS, today);
        let tasks = store.get(keys::TASKS, TaskList::default());
        let exams = store.get(keys::EXAMS, ExamList::default());
        Self {
            store,
            config,
            today,
            track,
            salat,
            stats,
            tasks,
            exams,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &StateStore<B> {
        &self.store
    }

    // ── Track ────────────────────────────────────────────────────────

    pub fn track(&self) -> Option<StudentTrack> {
        self.track
    }

    pub fn set_track(&mut self, track: Option<StudentTrack>) -> Event {
        self.track = track;
        self.store.set(keys::TRACK, &self.track);
        Event::TrackChanged {
            track,
            at: Utc::now(),
        }
    }

    /// Planner input for the current track, all subjects at Medium.
    pub fn subjects(&self) -> Vec<SubjectConfig> {
        default_subject_configs(self.track)
    }

    // ── Planner ──────────────────────────────────────────────────────

    /// Generate today's plan for the current track.
    ///
    /// `hours_per_day` defaults to the configured value. `difficulties`
    /// overrides the difficulty of matching subjects (case-insensitive);
    /// unknown subject names are rejected.
    ///
    /// # Errors
    /// Returns a validation error when there is no track, when the hours
    /// are out of range, or when an override names an unknown subject.
    pub fn generate_plan(
        &self,
        hours_per_day: Option<u32>,
        difficulties: &[(String, SubjectDifficulty)],
        seed: Option<u64>,
    ) -> Result<StudyPlan> {
        let mut subjects = self.subjects();
        for (name, difficulty) in difficulties {
            let subject = subjects
                .iter_mut()
                .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| crate::error::ValidationError::InvalidValue {
                    field: "subject".into(),
                    message: format!("'{name}' is not a subject of the current track"),
                })?;
            subject.difficulty = *difficulty;
        }
        let hours = hours_per_day.unwrap_or(self.config.planner.hours_per_day);
        let generator = BlockGenerator::new(self.config.generator_config(seed));
        Ok(generator.generate(&subjects, hours)?)
    }

    // ── Salat ────────────────────────────────────────────────────────

    pub fn salat(&self) -> &SalatRecord {
        &self.salat
    }

    pub fn toggle_salat(&mut self, prayer: Prayer) -> Event {
        let done = self.salat.toggle(prayer);
        self.store.set(keys::SALAT, &self.salat);
        Event::SalatToggled {
            prayer,
            done,
            completed: self.salat.completed_count(),
            at: Utc::now(),
        }
    }

    // ── Stats ────────────────────────────────────────────────────────

    pub fn stats(&self) -> &DailyStats {
        &self.stats
    }

    pub fn record_pomodoro(&mut self) -> Event {
        let pomodoros = self.stats.increment_pomodoro();
        self.store.set(keys::STATS, &self.stats);
        Event::PomodoroRecorded {
            pomodoros,
            at: Utc::now(),
        }
    }

    pub fn record_study_block(&mut self) -> Event {
        let study_blocks_completed = self.stats.record_block_completed();
        self.store.set(keys::STATS, &self.stats);
        Event::StudyBlockRecorded {
            study_blocks_completed,
            at: Utc::now(),
        }
    }

    // ── Tasks & exams ────────────────────────────────────────────────

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn add_task(&mut self, new: NewTask) -> Result<Task> {
        let task = self.tasks.add(new, self.today)?.clone();
        self.store.set(keys::TASKS, &self.tasks);
        Ok(task)
    }

    pub fn toggle_task(&mut self, id: &str) -> Result<TaskStatus> {
        let status = self.tasks.toggle(id)?;
        self.store.set(keys::TASKS, &self.tasks);
        Ok(status)
    }

    pub fn set_task_status(&mut self, id: &str, status: TaskStatus) -> Result<Task> {
        let task = self.tasks.set_status(id, status)?.clone();
        self.store.set(keys::TASKS, &self.tasks);
        Ok(task)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<Task> {
        let task = self.tasks.delete(id)?;
        self.store.set(keys::TASKS, &self.tasks);
        Ok(task)
    }

    pub fn exams(&self) -> &ExamList {
        &self.exams
    }

    pub fn add_exam(&mut self, name: &str, date: NaiveDate) -> Result<Exam> {
        let exam = self.exams.add(name, date)?.clone();
        self.store.set(keys::EXAMS, &self.exams);
        Ok(exam)
    }

    pub fn delete_exam(&mut self, id: &str) -> Result<Exam> {
        let exam = self.exams.delete(id)?;
        self.store.set(keys::EXAMS, &self.exams);
        Ok(exam)
    }

    // ── Focus timer ──────────────────────────────────────────────────

    /// The stored timer. While idle it follows the configured lengths.
    pub fn timer(&self) -> FocusTimer {
        let mut timer = self.store.get(keys::TIMER, self.config.new_timer());
        let lengths = &self.config.timer;
        if timer.sync_durations(lengths.focus_duration, lengths.break_duration) {
            tracing::debug!(
                focus_duration = lengths.focus_duration,
                break_duration = lengths.break_duration,
                "timer picked up configured lengths"
            );
        }
        timer
    }

    /// Change the focus length on the stored timer and in the in-memory
    /// configuration. Saving the configuration is left to the caller.
    ///
    /// # Errors
    /// Returns a validation error when `minutes` is out of range.
    pub fn set_focus_duration(&mut self, minutes: u32) -> Result<(FocusTimer, Vec<Event>)> {
        let driven = self.drive_timer(|timer| Ok(Some(timer.set_focus_duration(minutes)?)))?;
        self.config.timer.focus_duration = minutes;
        Ok(driven)
    }

    /// Tick the stored timer, apply `command`, and persist the result.
    ///
    /// A focus session that finished since the last call is counted as a
    /// pomodoro. Returns every event produced, in order.
    pub fn drive_timer<F>(&mut self, command: F) -> Result<(FocusTimer, Vec<Event>)>
    where
        F: FnOnce(&mut FocusTimer) -> std::result::Result<Option<Event>, CoreError>,
    {
        let mut timer = self.timer();
        let mut events = Vec::new();
        events.extend(timer.tick());
        events.extend(command(&mut timer)?);

        let completed = events
            .iter()
            .filter(|e| matches!(e, Event::FocusCompleted { .. }))
            .count();
        for _ in 0..completed {
            let recorded = self.record_pomodoro();
            events.push(recorded);
        }

        self.store.set(keys::TIMER, &timer);
        Ok((timer, events))
    }

    // ── Dashboard ────────────────────────────────────────────────────

    pub fn dashboard(&self, hour: u32, quote_index: usize) -> DashboardSummary {
        DashboardSummary::build(DashboardInput {
            today: self.today,
            hour,
            track: self.track,
            salat: &self.salat,
            stats: &self.stats,
            tasks: &self.tasks,
            exams: &self.exams,
            pomodoro_goal: self.config.goals.daily_pomodoros,
            quote: quotes::quote_at(quote_index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::DailyRecord;
    use crate::planner::BlockType;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    fn companion(today: NaiveDate) -> Companion<Database> {
        Companion::load(
            StateStore::new(Database::open_memory().unwrap()),
            Config::default(),
            today,
        )
    }

    #[test]
    fn fresh_install_has_defaults() {
        let app = companion(day(1));
        assert!(app.track().is_none());
        assert!(app.subjects().is_empty());
        assert_eq!(app.salat().date, day(1));
        assert_eq!(app.stats().pomodoros, 0);
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn plan_without_track_is_rejected() {
        let app = companion(day(1));
        assert!(matches!(
            app.generate_plan(None, &[], Some(1)),
            Err(CoreError::Validation(
                crate::error::ValidationError::EmptySubjects
            ))
        ));
    }

    #[test]
    fn plan_uses_track_subjects_and_configured_hours() {
        let mut app = companion(day(1));
        app.set_track(Some(StudentTrack::Engineering));
        let plan = app.generate_plan(None, &[], Some(5)).unwrap();
        assert_eq!(plan.hours_per_day, 6);
        assert_eq!(plan.study_block_count(), 8);
        let known = StudentTrack::Engineering.subjects();
        assert!(plan
            .blocks
            .iter()
            .filter(|b| b.block_type() == BlockType::Study)
            .all(|b| known.contains(&b.subject())));
    }

    #[test]
    fn plan_rejects_unknown_difficulty_override() {
        let mut app = companion(day(1));
        app.set_track(Some(StudentTrack::Medical));
        let overrides = vec![("Astronomy".to_string(), SubjectDifficulty::Hard)];
        assert!(app.generate_plan(Some(4), &overrides, None).is_err());
        let overrides = vec![("biology".to_string(), SubjectDifficulty::Hard)];
        assert!(app.generate_plan(Some(4), &overrides, None).is_ok());
    }

    #[test]
    fn state_survives_reload() {
        let db = Database::open_memory().unwrap();
        let mut app = Companion::load(StateStore::new(db), Config::default(), day(3));
        app.set_track(Some(StudentTrack::Hsc12));
        app.toggle_salat(Prayer::Asr);
        app.record_pomodoro();
        app.add_task(NewTask {
            title: "Integration".into(),
            subject: "Higher Math".into(),
            ..NewTask::default()
        })
        .unwrap();
        app.add_exam("Test exam", day(20)).unwrap();

        let Companion { store, .. } = app;
        let app = Companion::load(store, Config::default(), day(3));
        assert_eq!(app.track(), Some(StudentTrack::Hsc12));
        assert!(app.salat().asr);
        assert_eq!(app.stats().pomodoros, 1);
        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.exams().exams().len(), 1);
    }

    #[test]
    fn next_day_resets_daily_records_but_keeps_lists() {
        let db = Database::open_memory().unwrap();
        let mut app = Companion::load(StateStore::new(db), Config::default(), day(3));
        app.toggle_salat(Prayer::Fajr);
        app.record_study_block();
        app.add_exam("Finals", day(28)).unwrap();

        let Companion { store, .. } = app;
        let app = Companion::load(store, Config::default(), day(4));
        assert_eq!(app.salat(), &SalatRecord::fresh(day(4)));
        assert_eq!(app.stats(), &DailyStats::fresh(day(4)));
        assert_eq!(app.exams().exams().len(), 1);
    }

    #[test]
    fn completed_focus_counts_a_pomodoro() {
        let mut app = companion(day(1));
        let (_, events) = app
            .drive_timer(|timer| {
                timer.start_at(0);
                Ok(timer.tick_at(u64::MAX / 2))
            })
            .unwrap();
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::FocusCompleted { .. })));
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::PomodoroRecorded { pomodoros: 1, .. })));
        assert_eq!(app.stats().pomodoros, 1);
    }

    #[test]
    fn timer_state_is_persisted() {
        let mut app = companion(day(1));
        app.set_focus_duration(25).unwrap();
        assert_eq!(app.config().timer.focus_duration, 25);
        assert_eq!(app.timer().focus_duration_min(), 25);
        assert_eq!(app.timer().remaining_ms(), 25 * 60_000);
        assert!(app.set_focus_duration(0).is_err());
        assert_eq!(app.config().timer.focus_duration, 25);
    }

    #[test]
    fn stored_idle_timer_follows_config_changes() {
        let mut app = companion(day(1));
        app.drive_timer(|_| Ok(None)).unwrap();
        assert_eq!(app.timer().focus_duration_min(), 120);

        let Companion { store, .. } = app;
        let mut config = Config::default();
        config.apply("timer.focus_duration", "25").unwrap();
        config.apply("timer.break_duration", "10").unwrap();
        let app = Companion::load(store, config, day(1));
        let timer = app.timer();
        assert_eq!(timer.focus_duration_min(), 25);
        assert_eq!(timer.break_duration_min(), 10);
        assert_eq!(timer.remaining_ms(), 25 * 60_000);
    }

    #[test]
    fn running_timer_ignores_config_changes_until_idle() {
        let mut app = companion(day(1));
        app.drive_timer(|timer| Ok(timer.start())).unwrap();

        let Companion { store, .. } = app;
        let mut config = Config::default();
        config.apply("timer.focus_duration", "25").unwrap();
        let mut app = Companion::load(store, config, day(1));
        assert_eq!(app.timer().focus_duration_min(), 120);

        let (timer, _) = app.drive_timer(|timer| Ok(Some(timer.reset()))).unwrap();
        assert_eq!(timer.state(), crate::timer::TimerState::Idle);
        assert_eq!(app.timer().focus_duration_min(), 25);
    }

    #[test]
    fn task_can_be_marked_in_progress() {
        let mut app = companion(day(1));
        let id = app
            .add_task(NewTask {
                title: "Past papers".into(),
                subject: "Physics".into(),
                ..NewTask::default()
            })
            .unwrap()
            .id;
        let task = app.set_task_status(&id, TaskStatus::InProgress).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(app.set_task_status("missing", TaskStatus::Done).is_err());
    }
}
