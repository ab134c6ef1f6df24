mod engine;

pub use engine::{
    format_countdown, FocusTimer, TimerMode, TimerState, DEFAULT_BREAK_MIN, DEFAULT_FOCUS_MIN,
    FOCUS_PRESETS_MIN, MAX_FOCUS_MIN,
};
