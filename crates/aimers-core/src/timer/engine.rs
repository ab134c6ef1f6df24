//! Focus timer implementation.
//!
//! The timer is a wall-clock-based state machine. It does not use
//! internal threads - the caller is responsible for calling `tick()` periodically.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!           |
//!           v  (countdown reaches zero)
//! Idle in the other mode (focus -> break, break -> focus)
//! ```
//!
//! Every command has an `*_at` variant taking the current epoch milliseconds,
//! so the engine can be driven by a fake clock.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;

/// Focus lengths offered as quick picks, in minutes.
pub const FOCUS_PRESETS_MIN: [u32; 3] = [25, 60, 120];
pub const DEFAULT_FOCUS_MIN: u32 = 120;
pub const DEFAULT_BREAK_MIN: u32 = 5;
pub const MAX_FOCUS_MIN: u32 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Focus,
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Focus/break countdown.
///
/// Operates on wall-clock deltas -- no internal thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    mode: TimerMode,
    state: TimerState,
    focus_duration_min: u32,
    break_duration_min: u32,
    /// Remaining time in milliseconds for the current mode.
    remaining_ms: u64,
    /// Timestamp (ms since epoch) when the timer was last resumed/ticked.
    #[serde(default)]
    last_tick_epoch_ms: Option<u64>,
    #[serde(default)]
    task: Option<String>,
}

impl FocusTimer {
    /// Idle timer in focus mode.
    pub fn new(focus_duration_min: u32, break_duration_min: u32) -> Self {
        Self {
            mode: TimerMode::Focus,
            state: TimerState::Idle,
            focus_duration_min,
            break_duration_min,
            remaining_ms: minutes_to_ms(focus_duration_min),
            last_tick_epoch_ms: None,
            task: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn focus_duration_min(&self) -> u32 {
        self.focus_duration_min
    }

    pub fn break_duration_min(&self) -> u32 {
        self.break_duration_min
    }

    pub fn task(&self) -> Option<&str> {
        self.task.as_deref()
    }

    /// Full length of the current mode.
    pub fn total_ms(&self) -> u64 {
        match self.mode {
            TimerMode::Focus => minutes_to_ms(self.focus_duration_min),
            TimerMode::Break => minutes_to_ms(self.break_duration_min),
        }
    }

    /// 0.0 .. 100.0 progress within the current mode.
    pub fn progress_pct(&self) -> f64 {
        let total = self.total_ms();
        if total == 0 {
            return 0.0;
        }
        (1.0 - self.remaining_ms as f64 / total as f64) * 100.0
    }

    /// Remaining time as `MM:SS`.
    pub fn countdown(&self) -> String {
        format_countdown(self.remaining_ms / 1000)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            mode: self.mode,
            remaining_ms: self.remaining_ms,
            total_ms: self.total_ms(),
            countdown: self.countdown(),
            progress_pct: self.progress_pct(),
            task: self.task.clone(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        self.start_at(now_ms())
    }

    pub fn start_at(&mut self, now: u64) -> Option<Event> {
        match self.state {
            TimerState::Idle => {
                self.state = TimerState::Running;
                self.last_tick_epoch_ms = Some(now);
                Some(Event::TimerStarted {
                    mode: self.mode,
                    remaining_ms: self.remaining_ms,
                    at: Utc::now(),
                })
            }
            TimerState::Paused => self.resume_at(now),
            TimerState::Running => None,
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.pause_at(now_ms())
    }

    /// Pause a running timer. A countdown that already ran out completes
    /// instead of pausing.
    pub fn pause_at(&mut self, now: u64) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.flush_elapsed(now);
        if self.remaining_ms == 0 {
            return Some(self.complete());
        }
        self.state = TimerState::Paused;
        self.last_tick_epoch_ms = None;
        Some(Event::TimerPaused {
            remaining_ms: self.remaining_ms,
            at: Utc::now(),
        })
    }

    pub fn resume(&mut self) -> Option<Event> {
        self.resume_at(now_ms())
    }

    pub fn resume_at(&mut self, now: u64) -> Option<Event> {
        if self.state != TimerState::Paused {
            return None;
        }
        self.state = TimerState::Running;
        self.last_tick_epoch_ms = Some(now);
        Some(Event::TimerResumed {
            remaining_ms: self.remaining_ms,
            at: Utc::now(),
        })
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        self.toggle_at(now_ms())
    }

    pub fn toggle_at(&mut self, now: u64) -> Option<Event> {
        match self.state {
            TimerState::Running => self.pause_at(now),
            TimerState::Idle | TimerState::Paused => self.start_at(now),
        }
    }

    /// Stop and restore the full duration of the current mode.
    pub fn reset(&mut self) -> Event {
        self.state = TimerState::Idle;
        self.last_tick_epoch_ms = None;
        self.remaining_ms = self.total_ms();
        Event::TimerReset {
            mode: self.mode,
            at: Utc::now(),
        }
    }

    /// Change the focus length. In focus mode this also stops the timer and
    /// restarts the countdown from the new length.
    ///
    /// # Errors
    ///
    /// Returns an error if `minutes` is 0 or above [`MAX_FOCUS_MIN`].
    pub fn set_focus_duration(&mut self, minutes: u32) -> Result<Event, ValidationError> {
        if !(1..=MAX_FOCUS_MIN).contains(&minutes) {
            return Err(ValidationError::OutOfRange {
                field: "focus_duration_min",
                min: 1,
                max: MAX_FOCUS_MIN,
                value: minutes,
            });
        }
        self.focus_duration_min = minutes;
        if self.mode == TimerMode::Focus {
            self.state = TimerState::Idle;
            self.last_tick_epoch_ms = None;
            self.remaining_ms = minutes_to_ms(minutes);
        }
        Ok(Event::FocusDurationChanged {
            minutes,
            at: Utc::now(),
        })
    }

    /// Adopt new focus/break lengths while stopped. A running or paused
    /// countdown keeps its lengths until it is idle again.
    ///
    /// Returns whether anything changed.
    pub fn sync_durations(&mut self, focus_duration_min: u32, break_duration_min: u32) -> bool {
        if self.state != TimerState::Idle
            || (self.focus_duration_min == focus_duration_min
                && self.break_duration_min == break_duration_min)
        {
            return false;
        }
        self.focus_duration_min = focus_duration_min;
        self.break_duration_min = break_duration_min;
        self.remaining_ms = self.total_ms();
        true
    }

    pub fn set_task(&mut self, task: Option<String>) {
        self.task = task.filter(|t| !t.trim().is_empty());
    }

    /// Call periodically. Returns a completion event when the countdown
    /// reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        self.tick_at(now_ms())
    }

    pub fn tick_at(&mut self, now: u64) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.flush_elapsed(now);
        if self.remaining_ms == 0 {
            return Some(self.complete());
        }
        None
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete(&mut self) -> Event {
        self.state = TimerState::Idle;
        self.last_tick_epoch_ms = None;
        match self.mode {
            TimerMode::Focus => {
                self.mode = TimerMode::Break;
                self.remaining_ms = minutes_to_ms(self.break_duration_min);
                Event::FocusCompleted {
                    duration_min: self.focus_duration_min,
                    task: self.task.clone(),
                    at: Utc::now(),
                }
            }
            TimerMode::Break => {
                self.mode = TimerMode::Focus;
                self.remaining_ms = minutes_to_ms(self.focus_duration_min);
                Event::BreakCompleted { at: Utc::now() }
            }
        }
    }

    fn flush_elapsed(&mut self, now: u64) {
        if let Some(last) = self.last_tick_epoch_ms {
            let elapsed = now.saturating_sub(last);
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
            self.last_tick_epoch_ms = Some(now);
        }
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_MIN, DEFAULT_BREAK_MIN)
    }
}

/// Render whole seconds as `MM:SS`. Minutes are not capped at 59.
pub fn format_countdown(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn minutes_to_ms(minutes: u32) -> u64 {
    u64::from(minutes).saturating_mul(60).saturating_mul(1000)
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
