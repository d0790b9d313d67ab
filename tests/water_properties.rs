// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use cistern::layout::layout_blocks_with_floor;
use cistern::model::{Height, HeightSequence, Volume};
use cistern::water::{evaluate, evaluate_two_pointer};
use proptest::prelude::*;

fn heights_strategy() -> impl Strategy<Value = Vec<Height>> {
    prop::collection::vec(0u32..=12, 0..48)
}

fn wide_heights_strategy() -> impl Strategy<Value = Vec<Height>> {
    prop::collection::vec(any::<u32>(), 0..24)
}

/// Quadratic reference: every column looks left and right for its bounding walls.
fn brute_force_profile(heights: &[Height]) -> Vec<Height> {
    (0..heights.len())
        .map(|i| {
            let left = heights[..=i].iter().copied().max().unwrap_or(0);
            let right = heights[i..].iter().copied().max().unwrap_or(0);
            left.min(right) - heights[i]
        })
        .collect()
}

proptest! {
    #[test]
    fn total_is_the_sum_of_the_profile(heights in wide_heights_strategy()) {
        let evaluation = evaluate(&heights);
        let sum: Volume = evaluation.profile().iter().map(|&depth| Volume::from(depth)).sum();
        prop_assert_eq!(evaluation.total(), sum);
        prop_assert_eq!(evaluation.len(), heights.len());
    }

    #[test]
    fn water_never_rises_above_the_lower_skyline(heights in heights_strategy()) {
        let evaluation = evaluate(&heights);
        let expected = brute_force_profile(&heights);
        prop_assert_eq!(evaluation.profile(), expected.as_slice());
    }

    #[test]
    fn evaluation_is_mirror_symmetric(heights in heights_strategy()) {
        let forward = evaluate(&heights);
        let sequence = HeightSequence::new(heights);
        let backward = evaluate(sequence.reversed().as_slice());

        prop_assert_eq!(forward.total(), backward.total());
        let mut mirrored = backward.profile().to_vec();
        mirrored.reverse();
        prop_assert_eq!(forward.profile(), mirrored.as_slice());
    }

    #[test]
    fn short_sequences_hold_no_water(heights in prop::collection::vec(any::<u32>(), 0..=2)) {
        let evaluation = evaluate(&heights);
        prop_assert_eq!(evaluation.total(), 0);
        prop_assert!(evaluation.profile().iter().all(|&depth| depth == 0));
    }

    #[test]
    fn global_maximum_stays_dry(heights in prop::collection::vec(0u32..=12, 1..48)) {
        let evaluation = evaluate(&heights);
        let max = heights.iter().copied().max().unwrap_or(0);
        for (index, &height) in heights.iter().enumerate() {
            if height == max {
                prop_assert_eq!(evaluation.profile()[index], 0);
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent(heights in heights_strategy()) {
        prop_assert_eq!(evaluate(&heights), evaluate(&heights));
    }

    #[test]
    fn two_pointer_scan_agrees(heights in wide_heights_strategy()) {
        prop_assert_eq!(evaluate_two_pointer(&heights), evaluate(&heights));
    }

    #[test]
    fn layout_cells_match_the_evaluation(heights in heights_strategy(), floor in 0u32..=10) {
        let sequence = HeightSequence::new(heights);
        let evaluation = evaluate(sequence.as_slice());
        let layout = layout_blocks_with_floor(&sequence, &evaluation, floor).expect("layout");

        let walls: Volume = sequence.iter().map(Volume::from).sum();
        prop_assert_eq!(layout.wall_cell_count(), walls);
        prop_assert_eq!(layout.water_cell_count(), evaluation.total());
        prop_assert!(layout.max_height() >= floor);
        for column in layout.columns() {
            prop_assert!(column.water_level() <= layout.max_height());
        }
    }
}
