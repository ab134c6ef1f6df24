//! End-to-end persistence tests against an on-disk database.

use aimers_core::storage::keys;
use aimers_core::{
    Companion, Config, DailyRecord, DailyStats, Database, NewTask, Prayer, SalatRecord, StateStore,
    StudentTrack, TaskCategory, TaskStatus,
};
use chrono::NaiveDate;
use tempfile::TempDir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
}

fn open(dir: &TempDir, today: NaiveDate) -> Companion<Database> {
    let db = Database::open_at(&dir.path().join("aimers.db")).unwrap();
    Companion::load(StateStore::new(db), Config::default(), today)
}

#[test]
fn records_persist_across_processes() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = open(&dir, day(10));
        app.set_track(Some(StudentTrack::University));
        app.toggle_salat(Prayer::Maghrib);
        app.record_pomodoro();
        let task = app
            .add_task(NewTask {
                title: "Vocabulary list".into(),
                subject: "English".into(),
                category: TaskCategory::Reading,
                due_date: Some(day(12)),
            })
            .unwrap();
        app.toggle_task(&task.id).unwrap();
    }

    let app = open(&dir, day(10));
    assert_eq!(app.track(), Some(StudentTrack::University));
    assert!(app.salat().maghrib);
    assert_eq!(app.salat().completed_count(), 1);
    assert_eq!(app.stats().pomodoros, 1);
    assert_eq!(app.tasks().tasks()[0].status, TaskStatus::Done);
}

#[test]
fn yesterdays_records_are_reset_on_load() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = open(&dir, day(10));
        app.toggle_salat(Prayer::Fajr);
        app.record_pomodoro();
        app.record_study_block();
    }

    let app = open(&dir, day(11));
    assert_eq!(app.salat(), &SalatRecord::fresh(day(11)));
    assert_eq!(app.stats(), &DailyStats::fresh(day(11)));

    // The reset is written back, not only applied in memory.
    let raw = app.store().backend().kv_get(keys::STATS).unwrap().unwrap();
    assert!(raw.contains("2025-01-11"));
}

#[test]
fn stored_layout_uses_original_field_names() {
    let dir = TempDir::new().unwrap();
    let mut app = open(&dir, day(1));
    app.add_exam("Biology Term 1", day(20)).unwrap();
    app.record_study_block();

    let db = app.store().backend();
    let stats: serde_json::Value =
        serde_json::from_str(&db.kv_get(keys::STATS).unwrap().unwrap()).unwrap();
    assert_eq!(stats["studyBlocksCompleted"], 1);
    let exams: serde_json::Value =
        serde_json::from_str(&db.kv_get(keys::EXAMS).unwrap().unwrap()).unwrap();
    assert_eq!(exams[0]["name"], "Biology Term 1");
    assert_eq!(exams[0]["date"], "2025-01-20");
}

#[test]
fn corrupt_state_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    {
        let db = Database::open_at(&dir.path().join("aimers.db")).unwrap();
        db.kv_set(keys::TASKS, "{\"broken\":").unwrap();
        db.kv_set(keys::TRACK, "\"Astrology\"").unwrap();
    }
    let app = open(&dir, day(1));
    assert!(app.tasks().is_empty());
    assert!(app.track().is_none());
}
