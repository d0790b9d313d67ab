// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;

/// Height of a single block column, in grid units.
pub type Height = u32;

/// Amount of trapped water, in grid cells.
///
/// Wider than [`Height`] so summing a whole profile cannot overflow.
pub type Volume = u64;

/// Block heights in left-to-right order; index is the horizontal position.
///
/// The sequence is replaced wholesale on every input change and never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HeightSequence {
    heights: Vec<Height>,
}

impl HeightSequence {
    pub fn new(heights: Vec<Height>) -> Self {
        Self { heights }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Height] {
        &self.heights
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Height> {
        self.heights.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Height> + '_ {
        self.heights.iter().copied()
    }

    /// Tallest block, or `None` for an empty sequence.
    pub fn max(&self) -> Option<Height> {
        self.heights.iter().copied().max()
    }

    /// Mirrors the sequence left to right.
    pub fn reversed(&self) -> Self {
        let mut heights = self.heights.clone();
        heights.reverse();
        Self { heights }
    }

    pub fn into_vec(self) -> Vec<Height> {
        self.heights
    }
}

impl From<Vec<Height>> for HeightSequence {
    fn from(heights: Vec<Height>) -> Self {
        Self::new(heights)
    }
}

impl AsRef<[Height]> for HeightSequence {
    fn as_ref(&self) -> &[Height] {
        self.as_slice()
    }
}

/// Canonical comma-separated form, e.g. `3,0,2,0,4`.
impl fmt::Display for HeightSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = itoa::Buffer::new();
        for (idx, height) in self.heights.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            f.write_str(buf.format(*height))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::HeightSequence;

    #[test]
    fn displays_as_comma_separated_list() {
        let heights = HeightSequence::new(vec![3, 0, 2, 0, 4]);
        assert_eq!(heights.to_string(), "3,0,2,0,4");
        assert_eq!(HeightSequence::empty().to_string(), "");
    }

    #[test]
    fn max_is_none_for_empty_sequence() {
        assert_eq!(HeightSequence::empty().max(), None);
        assert_eq!(HeightSequence::new(vec![1, 5, 2]).max(), Some(5));
    }

    #[test]
    fn reversed_mirrors_positions() {
        let heights = HeightSequence::new(vec![5, 4, 1, 2]);
        assert_eq!(heights.reversed().as_slice(), &[2, 1, 4, 5]);
        assert_eq!(heights.reversed().reversed(), heights);
    }
}
