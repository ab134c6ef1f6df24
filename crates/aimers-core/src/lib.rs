//! # Aimers Core Library
//!
//! Business logic for the Aimers study companion. Every operation is
//! available through the standalone CLI binary; this crate holds the state
//! and rules so any front end stays a thin layer over it.
//!
//! ## Architecture
//!
//! - **Planner**: round-robin generator turning a track's subjects and a
//!   daily hour budget into alternating study/break blocks
//! - **Focus Timer**: a wall-clock-based focus/break countdown that requires
//!   the caller to periodically invoke `tick()`
//! - **Daily records**: prayer checklist and study counters that reset when
//!   the calendar date changes
//! - **Storage**: SQLite key-value state and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Companion`]: loads, mutates and persists all application state
//! - [`BlockGenerator`]: daily study-plan generator
//! - [`FocusTimer`]: focus/break state machine
//! - [`StateStore`]: typed get/set with default fallback over a [`KeyValue`] backend
//! - [`Config`]: application configuration management

pub mod companion;
pub mod daily;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod planner;
pub mod quotes;
pub mod salat;
pub mod stats;
pub mod storage;
pub mod tasks;
pub mod timer;
pub mod track;

pub use companion::Companion;
pub use daily::DailyRecord;
pub use dashboard::DashboardSummary;
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use planner::{BlockGenerator, BlockType, GeneratorConfig, StudyBlock, StudyPlan};
pub use salat::{Prayer, SalatRecord};
pub use stats::DailyStats;
pub use storage::{Config, Database, KeyValue, StateStore};
pub use tasks::{Exam, ExamList, NewTask, Task, TaskCategory, TaskList, TaskStatus, Urgency};
pub use timer::{FocusTimer, TimerMode, TimerState};
pub use track::{StudentTrack, SubjectConfig, SubjectDifficulty};
