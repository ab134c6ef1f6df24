//! Academic tracks and the subjects each one studies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The admission path or class a student is preparing for.
///
/// A student with no track yet is represented as `Option::<StudentTrack>::None`
/// and serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentTrack {
    #[serde(rename = "HSC-11")]
    Hsc11,
    #[serde(rename = "HSC-12")]
    Hsc12,
    Medical,
    Engineering,
    University,
}

const HSC_SUBJECTS: &[&str] = &[
    "Bangla",
    "English",
    "Physics",
    "Chemistry",
    "Biology",
    "Higher Math",
    "ICT",
];
const MEDICAL_SUBJECTS: &[&str] = &[
    "Biology",
    "Chemistry",
    "Physics",
    "English",
    "General Knowledge",
];
const ENGINEERING_SUBJECTS: &[&str] = &["Math", "Physics", "Chemistry", "English"];
const UNIVERSITY_SUBJECTS: &[&str] = &["Bangla", "English", "General Knowledge", "Math/IQ"];

impl StudentTrack {
    pub const ALL: [StudentTrack; 5] = [
        StudentTrack::Hsc11,
        StudentTrack::Hsc12,
        StudentTrack::Medical,
        StudentTrack::Engineering,
        StudentTrack::University,
    ];

    /// Stable identifier, matching the persisted form.
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentTrack::Hsc11 => "HSC-11",
            StudentTrack::Hsc12 => "HSC-12",
            StudentTrack::Medical => "Medical",
            StudentTrack::Engineering => "Engineering",
            StudentTrack::University => "University",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudentTrack::Hsc11 => "HSC Class 11",
            StudentTrack::Hsc12 => "HSC Class 12",
            StudentTrack::Medical => "Medical Admission",
            StudentTrack::Engineering => "Engineering Admission",
            StudentTrack::University => "University Admission",
        }
    }

    /// Ordered subject names for this track.
    pub fn subjects(&self) -> &'static [&'static str] {
        match self {
            StudentTrack::Hsc11 | StudentTrack::Hsc12 => HSC_SUBJECTS,
            StudentTrack::Medical => MEDICAL_SUBJECTS,
            StudentTrack::Engineering => ENGINEERING_SUBJECTS,
            StudentTrack::University => UNIVERSITY_SUBJECTS,
        }
    }
}

impl fmt::Display for StudentTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentTrack {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "hsc-11" | "hsc11" => Ok(StudentTrack::Hsc11),
            "hsc-12" | "hsc12" => Ok(StudentTrack::Hsc12),
            "medical" => Ok(StudentTrack::Medical),
            "engineering" => Ok(StudentTrack::Engineering),
            "university" => Ok(StudentTrack::University),
            _ => Err(ValidationError::InvalidValue {
                field: "track".into(),
                message: format!(
                    "unknown track '{s}' (expected one of HSC-11, HSC-12, Medical, Engineering, University)"
                ),
            }),
        }
    }
}

/// Subjects for an optional track; no track means no subjects.
pub fn subjects_for(track: Option<StudentTrack>) -> Vec<String> {
    track
        .map(|t| t.subjects().iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubjectDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FromStr for SubjectDifficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(SubjectDifficulty::Easy),
            "medium" => Ok(SubjectDifficulty::Medium),
            "hard" => Ok(SubjectDifficulty::Hard),
            _ => Err(ValidationError::InvalidValue {
                field: "difficulty".into(),
                message: format!("unknown difficulty '{s}'"),
            }),
        }
    }
}

/// Per-subject planner input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectConfig {
    pub name: String,
    pub difficulty: SubjectDifficulty,
    pub weekly_hours: u32,
}

impl SubjectConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            difficulty: SubjectDifficulty::Medium,
            weekly_hours: 5,
        }
    }

    pub fn with_difficulty(mut self, difficulty: SubjectDifficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

/// Default planner input for a track: every subject at Medium, 5 h/week.
pub fn default_subject_configs(track: Option<StudentTrack>) -> Vec<SubjectConfig> {
    subjects_for(track).into_iter().map(SubjectConfig::new).collect()
}
