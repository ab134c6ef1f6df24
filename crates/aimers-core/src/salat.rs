//! Daily prayer checklist.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::daily::DailyRecord;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    /// Rough time of day, for display.
    pub fn time_hint(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Before Sunrise",
            Prayer::Dhuhr => "Noon",
            Prayer::Asr => "Afternoon",
            Prayer::Maghrib => "After Sunset",
            Prayer::Isha => "Night",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Prayer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fajr" => Ok(Prayer::Fajr),
            "dhuhr" | "zuhr" => Ok(Prayer::Dhuhr),
            "asr" => Ok(Prayer::Asr),
            "maghrib" => Ok(Prayer::Maghrib),
            "isha" => Ok(Prayer::Isha),
            _ => Err(ValidationError::InvalidValue {
                field: "prayer".into(),
                message: format!("unknown prayer '{s}'"),
            }),
        }
    }
}

/// Which of today's five prayers have been marked as prayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalatRecord {
    pub date: NaiveDate,
    pub fajr: bool,
    pub dhuhr: bool,
    pub asr: bool,
    pub maghrib: bool,
    pub isha: bool,
}

impl SalatRecord {
    pub fn is_done(&self, prayer: Prayer) -> bool {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    fn flag_mut(&mut self, prayer: Prayer) -> &mut bool {
        match prayer {
            Prayer::Fajr => &mut self.fajr,
            Prayer::Dhuhr => &mut self.dhuhr,
            Prayer::Asr => &mut self.asr,
            Prayer::Maghrib => &mut self.maghrib,
            Prayer::Isha => &mut self.isha,
        }
    }

    /// Flip one prayer and return its new state.
    pub fn toggle(&mut self, prayer: Prayer) -> bool {
        let flag = self.flag_mut(prayer);
        *flag = !*flag;
        *flag
    }

    pub fn completed_count(&self) -> usize {
        Prayer::ALL.iter().filter(|p| self.is_done(**p)).count()
    }
}

impl DailyRecord for SalatRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn fresh(date: NaiveDate) -> Self {
        Self {
            date,
            fajr: false,
            dhuhr: false,
            asr: false,
            maghrib: false,
            isha: false,
        }
    }
}
