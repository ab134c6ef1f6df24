mod block;
mod generator;

pub use block::{format_clock, BlockType, StudyBlock};
pub use generator::{
    BlockGenerator, GeneratorConfig, StudyPlan, MAX_HOURS_PER_DAY, MIN_HOURS_PER_DAY,
};
