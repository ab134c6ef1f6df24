//! Per-day study counters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::daily::DailyRecord;

pub const DEFAULT_DAILY_POMODORO_GOAL: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: NaiveDate,
    pub pomodoros: u32,
    pub study_blocks_completed: u32,
}

impl DailyStats {
    pub fn increment_pomodoro(&mut self) -> u32 {
        self.pomodoros = self.pomodoros.saturating_add(1);
        self.pomodoros
    }

    pub fn record_block_completed(&mut self) -> u32 {
        self.study_blocks_completed = self.study_blocks_completed.saturating_add(1);
        self.study_blocks_completed
    }

    /// 0.0 .. 100.0 progress towards `goal` pomodoros.
    pub fn goal_progress_pct(&self, goal: u32) -> f64 {
        if goal == 0 {
            return 100.0;
        }
        (self.pomodoros as f64 / goal as f64 * 100.0).min(100.0)
    }
}

impl DailyRecord for DailyStats {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn fresh(date: NaiveDate) -> Self {
        Self {
            date,
            pomodoros: 0,
            study_blocks_completed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yesterday_resets_to_defaults() {
        let yesterday = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let mut stats = DailyStats::fresh(yesterday);
        stats.increment_pomodoro();
        stats.record_block_completed();

        let rolled = stats.roll_over(today);
        assert_eq!(rolled.date, today);
        assert_eq!(rolled.pomodoros, 0);
        assert_eq!(rolled.study_blocks_completed, 0);
    }

    #[test]
    fn goal_progress_is_capped() {
        let mut stats = DailyStats::fresh(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(stats.goal_progress_pct(8), 0.0);
        for _ in 0..4 {
            stats.increment_pomodoro();
        }
        assert_eq!(stats.goal_progress_pct(8), 50.0);
        for _ in 0..10 {
            stats.increment_pomodoro();
        }
        assert_eq!(stats.goal_progress_pct(8), 100.0);
    }

    #[test]
    fn serialized_with_camel_case() {
        let stats = DailyStats::fresh(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["studyBlocksCompleted"], 0);
    }
}
