use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::salat::Prayer;
use crate::timer::{TimerMode, TimerState};
use crate::track::StudentTrack;

/// Every state change in the system produces an Event.
/// The CLI prints them; callers may log or forward them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    /// A focus countdown reached zero; the timer switched to break mode.
    FocusCompleted {
        duration_min: u32,
        task: Option<String>,
        at: DateTime<Utc>,
    },
    /// A break reached zero; the timer switched back to focus mode.
    BreakCompleted {
        at: DateTime<Utc>,
    },
    FocusDurationChanged {
        minutes: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        mode: TimerMode,
        remaining_ms: u64,
        total_ms: u64,
        countdown: String,
        progress_pct: f64,
        task: Option<String>,
        at: DateTime<Utc>,
    },
    PomodoroRecorded {
        pomodoros: u32,
        at: DateTime<Utc>,
    },
    StudyBlockRecorded {
        study_blocks_completed: u32,
        at: DateTime<Utc>,
    },
    SalatToggled {
        prayer: Prayer,
        done: bool,
        completed: usize,
        at: DateTime<Utc>,
    },
    TrackChanged {
        track: Option<StudentTrack>,
        at: DateTime<Utc>,
    },
}
