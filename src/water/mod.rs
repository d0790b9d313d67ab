// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Trapped-water calculation.
//!
//! Water above a column rises to the lower of the tallest block on its left and the tallest block
//! on its right (both including the column itself). Everything here is pure and linear in the
//! number of columns; no input is ever rejected.

use serde::Serialize;

use crate::model::{Height, Volume};

/// Per-column water depths plus their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    profile: Vec<Height>,
    total: Volume,
}

impl Evaluation {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Water depth per column, same length as the evaluated heights.
    pub fn profile(&self) -> &[Height] {
        &self.profile
    }

    pub fn total(&self) -> Volume {
        self.total
    }

    pub fn len(&self) -> usize {
        self.profile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profile.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Height>, Volume) {
        (self.profile, self.total)
    }
}

/// Evaluates `heights` with a prefix/suffix skyline scan.
pub fn evaluate(heights: &[Height]) -> Evaluation {
    let left_max = left_max_profile(heights);
    let right_max = right_max_profile(heights);

    let mut total: Volume = 0;
    let profile = heights
        .iter()
        .zip(left_max.iter().zip(right_max.iter()))
        .map(|(&height, (&left, &right))| {
            let depth = left.min(right).saturating_sub(height);
            total += Volume::from(depth);
            depth
        })
        .collect();

    Evaluation { profile, total }
}

/// `result[i]` is the tallest height in `heights[..=i]`.
pub fn left_max_profile(heights: &[Height]) -> Vec<Height> {
    let mut running = 0;
    heights
        .iter()
        .map(|&height| {
            running = running.max(height);
            running
        })
        .collect()
}

/// `result[i]` is the tallest height in `heights[i..]`.
pub fn right_max_profile(heights: &[Height]) -> Vec<Height> {
    let mut running = 0;
    let mut profile = heights
        .iter()
        .rev()
        .map(|&height| {
            running = running.max(height);
            running
        })
        .collect::<Vec<_>>();
    profile.reverse();
    profile
}

/// Evaluates `heights` with two converging cursors and no skyline buffers.
///
/// Produces the same profile and total as [`evaluate`] for every input.
pub fn evaluate_two_pointer(heights: &[Height]) -> Evaluation {
    let mut profile = vec![0; heights.len()];
    let mut total: Volume = 0;

    if heights.len() < 3 {
        return Evaluation { profile, total };
    }

    let (mut lo, mut hi) = (0usize, heights.len() - 1);
    let (mut left_max, mut right_max) = (0, 0);

    // The side with the lower wall is bounded by its own running max: the other side is known to
    // hold something at least as tall.
    while lo < hi {
        if heights[lo] <= heights[hi] {
            left_max = left_max.max(heights[lo]);
            let depth = left_max - heights[lo];
            profile[lo] = depth;
            total += Volume::from(depth);
            lo += 1;
        } else {
            right_max = right_max.max(heights[hi]);
            let depth = right_max - heights[hi];
            profile[hi] = depth;
            total += Volume::from(depth);
            hi -= 1;
        }
    }

    Evaluation { profile, total }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{evaluate, evaluate_two_pointer, left_max_profile, right_max_profile, Evaluation};

    #[rstest]
    #[case(&[], &[], 0)]
    #[case(&[4], &[0], 0)]
    #[case(&[2, 7], &[0, 0], 0)]
    #[case(&[3, 0, 2, 0, 4], &[0, 3, 1, 3, 0], 7)]
    #[case(&[5, 4, 1, 2], &[0, 0, 3, 2], 5)]
    #[case(&[4, 2, 0, 3, 2, 5], &[0, 2, 4, 1, 2, 0], 9)]
    #[case(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1], &[0, 0, 1, 0, 1, 2, 1, 0, 0, 1, 0, 0], 6)]
    #[case(&[1, 2, 3, 4], &[0, 0, 0, 0], 0)]
    #[case(&[4, 3, 2, 1], &[0, 0, 0, 0], 0)]
    #[case(&[2, 0, 2], &[0, 2, 0], 2)]
    #[case(&[3, 3, 3], &[0, 0, 0], 0)]
    fn evaluates_known_arrangements(
        #[case] heights: &[u32],
        #[case] profile: &[u32],
        #[case] total: u64,
    ) {
        let evaluation = evaluate(heights);
        assert_eq!(evaluation.profile(), profile);
        assert_eq!(evaluation.total(), total);

        let two_pointer = evaluate_two_pointer(heights);
        assert_eq!(two_pointer, evaluation);
    }

    #[test]
    fn skyline_profiles_track_running_maximum() {
        let heights = [0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1];
        assert_eq!(left_max_profile(&heights), vec![0, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 3]);
        assert_eq!(right_max_profile(&heights), vec![3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 1]);
    }

    #[test]
    fn skyline_profiles_are_empty_for_empty_input() {
        assert!(left_max_profile(&[]).is_empty());
        assert!(right_max_profile(&[]).is_empty());
        assert_eq!(evaluate(&[]), Evaluation::empty());
    }

    #[test]
    fn total_does_not_overflow_for_tall_walls() {
        let heights = [u32::MAX, 0, 0, u32::MAX];
        let evaluation = evaluate(&heights);
        assert_eq!(evaluation.profile(), &[0, u32::MAX, u32::MAX, 0]);
        assert_eq!(evaluation.total(), 2 * u64::from(u32::MAX));
        assert_eq!(evaluate_two_pointer(&heights), evaluation);
    }
}
