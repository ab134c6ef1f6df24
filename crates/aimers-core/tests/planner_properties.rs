//! Property tests for the study-block generator.

use aimers_core::planner::{BlockGenerator, BlockType, GeneratorConfig};
use aimers_core::track::{SubjectConfig, SubjectDifficulty};
use proptest::prelude::*;

fn difficulty() -> impl Strategy<Value = SubjectDifficulty> {
    prop_oneof![
        Just(SubjectDifficulty::Easy),
        Just(SubjectDifficulty::Medium),
        Just(SubjectDifficulty::Hard),
    ]
}

fn subjects() -> impl Strategy<Value = Vec<SubjectConfig>> {
    prop::collection::vec(("[A-Za-z]{1,12}", difficulty()), 1..8).prop_map(|items| {
        items
            .into_iter()
            .map(|(name, d)| SubjectConfig::new(name).with_difficulty(d))
            .collect()
    })
}

proptest! {
    #[test]
    fn study_time_covers_the_daily_budget(
        subs in subjects(),
        hours in 2u32..=12,
        seed in any::<u64>(),
        weight in any::<bool>(),
    ) {
        let generator = BlockGenerator::new(GeneratorConfig {
            seed: Some(seed),
            weight_hard_subjects: weight,
            ..GeneratorConfig::default()
        });
        let plan = generator.generate(&subs, hours).unwrap();
        prop_assert!(plan.study_minutes() >= hours * 60);
        prop_assert!(plan.total_minutes() >= hours * 60);
        // Never more than one study block past the budget.
        prop_assert!(plan.study_minutes() < hours * 60 + 45);
    }

    #[test]
    fn blocks_alternate_and_end_with_study(
        subs in subjects(),
        hours in 2u32..=12,
        seed in any::<u64>(),
    ) {
        let generator = BlockGenerator::new(GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        });
        let plan = generator.generate(&subs, hours).unwrap();
        for (i, block) in plan.blocks.iter().enumerate() {
            let expected = if i % 2 == 0 { BlockType::Study } else { BlockType::Break };
            prop_assert_eq!(block.block_type(), expected);
        }
        prop_assert_eq!(plan.blocks.last().unwrap().block_type(), BlockType::Study);
    }

    #[test]
    fn blocks_are_contiguous(subs in subjects(), hours in 2u32..=12, seed in any::<u64>()) {
        let generator = BlockGenerator::new(GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        });
        let plan = generator.generate(&subs, hours).unwrap();
        prop_assert_eq!(plan.blocks[0].start_minute(), 8 * 60);
        for pair in plan.blocks.windows(2) {
            prop_assert_eq!(pair[0].end_minute(), pair[1].start_minute());
        }
    }

    #[test]
    fn fixed_seed_is_deterministic(subs in subjects(), hours in 2u32..=12, seed in any::<u64>()) {
        let config = GeneratorConfig { seed: Some(seed), ..GeneratorConfig::default() };
        let a = BlockGenerator::new(config.clone()).generate(&subs, hours).unwrap();
        let b = BlockGenerator::new(config).generate(&subs, hours).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn unseeded_generation_still_succeeds() {
    let subs = vec![SubjectConfig::new("Physics"), SubjectConfig::new("ICT")];
    let plan = BlockGenerator::default().generate(&subs, 4).unwrap();
    assert_eq!(plan.study_block_count(), 6);
}
