//! Daily study-block generator.
//!
//! Subjects are shuffled once, then visited round-robin. Each visit emits a
//! study block followed by a break, until the study minutes reach the daily
//! budget. No break is emitted after the final study block.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use super::block::{BlockType, StudyBlock};
use crate::error::ValidationError;
use crate::track::{SubjectConfig, SubjectDifficulty};

pub const MIN_HOURS_PER_DAY: u32 = 2;
pub const MAX_HOURS_PER_DAY: u32 = 12;

const BREAK_LABEL: &str = "Refresh & Relax";

/// Generator knobs. Defaults reproduce the classic 45/15 day from 8:00 AM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// First block start, in minutes since midnight.
    pub origin_minute: u32,
    pub study_minutes: u32,
    pub break_minutes: u32,
    /// Put every Hard subject into the rotation twice.
    pub weight_hard_subjects: bool,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            origin_minute: 8 * 60,
            study_minutes: 45,
            break_minutes: 15,
            weight_hard_subjects: false,
            seed: None,
        }
    }
}

/// A generated day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub hours_per_day: u32,
    pub blocks: Vec<StudyBlock>,
}

impl StudyPlan {
    pub fn study_block_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.block_type() == BlockType::Study)
            .count()
    }

    pub fn study_minutes(&self) -> u32 {
        self.blocks
            .iter()
            .filter(|b| b.block_type() == BlockType::Study)
            .map(StudyBlock::duration_min)
            .sum()
    }

    pub fn total_minutes(&self) -> u32 {
        self.blocks.iter().map(StudyBlock::duration_min).sum()
    }
}

pub struct BlockGenerator {
    config: GeneratorConfig,
}

impl BlockGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build the plan for one day.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySubjects`] when `subjects` is empty and
    /// [`ValidationError::OutOfRange`] when `hours_per_day` is outside 2..=12
    /// or the configured study block length is zero.
    pub fn generate(
        &self,
        subjects: &[SubjectConfig],
        hours_per_day: u32,
    ) -> Result<StudyPlan, ValidationError> {
        if subjects.is_empty() {
            return Err(ValidationError::EmptySubjects);
        }
        if !(MIN_HOURS_PER_DAY..=MAX_HOURS_PER_DAY).contains(&hours_per_day) {
            return Err(ValidationError::OutOfRange {
                field: "hours_per_day",
                min: MIN_HOURS_PER_DAY,
                max: MAX_HOURS_PER_DAY,
                value: hours_per_day,
            });
        }
        if self.config.study_minutes == 0 {
            return Err(ValidationError::OutOfRange {
                field: "study_minutes",
                min: 1,
                max: u32::MAX,
                value: 0,
            });
        }

        let mut rotation = self.rotation(subjects);
        let mut rng = match self.config.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        rotation.shuffle(&mut rng);

        let budget = hours_per_day * 60;
        let study = self.config.study_minutes;
        let rest = self.config.break_minutes;

        let mut blocks = Vec::new();
        let mut clock = self.config.origin_minute;
        let mut allocated = 0;
        let mut index = 0;

        while allocated < budget {
            let subject = rotation[index % rotation.len()];
            blocks.push(StudyBlock::new(
                format!("study-{allocated}"),
                subject.to_string(),
                BlockType::Study,
                clock,
                clock + study,
            ));
            clock += study;
            allocated += study;
            index += 1;

            if allocated < budget {
                blocks.push(StudyBlock::new(
                    format!("break-{allocated}"),
                    BREAK_LABEL.to_string(),
                    BlockType::Break,
                    clock,
                    clock + rest,
                ));
                clock += rest;
            }
        }

        tracing::debug!(
            hours_per_day,
            study_blocks = index,
            "generated study plan"
        );

        Ok(StudyPlan {
            hours_per_day,
            blocks,
        })
    }

    fn rotation<'a>(&self, subjects: &'a [SubjectConfig]) -> Vec<&'a str> {
        let mut rotation = Vec::with_capacity(subjects.len() * 2);
        for subject in subjects {
            rotation.push(subject.name.as_str());
            if self.config.weight_hard_subjects && subject.difficulty == SubjectDifficulty::Hard {
                rotation.push(subject.name.as_str());
            }
        }
        rotation
    }
}

impl Default for BlockGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
