// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use cistern::model::{Height, HeightSequence};

fn mix(seed: u64, index: u64) -> u64 {
    let mut acc = seed ^ index.wrapping_mul(0x9e37_79b9_7f4a_7c15);
    acc ^= acc >> 29;
    acc = acc.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    acc ^= acc >> 32;
    acc
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Repeating `0..peak` ramps; every trough fills.
    Sawtooth,
    /// One wide basin: descending then ascending.
    Valley,
    /// Deterministic pseudo-random heights.
    Noise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightParams {
    pub len: usize,
    pub peak: Height,
    pub shape: Shape,
}

impl HeightParams {
    pub const fn new(len: usize, peak: Height, shape: Shape) -> Self {
        Self { len, peak, shape }
    }
}

pub fn generate(params: HeightParams) -> HeightSequence {
    let HeightParams { len, peak, shape } = params;
    let span = u64::from(peak.max(1));
    let heights = (0..len)
        .map(|index| {
            let value = match shape {
                Shape::Sawtooth => index as u64 % span,
                Shape::Valley => {
                    let half = (len / 2).max(1) as u64;
                    let distance = (index as u64).abs_diff(half);
                    distance * span / half
                }
                Shape::Noise => mix(0x5eed, index as u64) % (span + 1),
            };
            value.min(u64::from(peak)) as Height
        })
        .collect();
    HeightSequence::new(heights)
}

pub mod water {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        SawtoothMedium,
        ValleyLarge,
        NoiseLarge,
    }

    impl Case {
        pub const ALL: [Case; 4] = [
            Case::Small,
            Case::SawtoothMedium,
            Case::ValleyLarge,
            Case::NoiseLarge,
        ];

        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::SawtoothMedium => "sawtooth_medium",
                Self::ValleyLarge => "valley_large",
                Self::NoiseLarge => "noise_large",
            }
        }

        pub const fn params(self) -> HeightParams {
            match self {
                Self::Small => HeightParams::new(12, 3, Shape::Noise),
                Self::SawtoothMedium => HeightParams::new(10_000, 16, Shape::Sawtooth),
                Self::ValleyLarge => HeightParams::new(200_000, 1_000, Shape::Valley),
                Self::NoiseLarge => HeightParams::new(200_000, 100_000, Shape::Noise),
            }
        }
    }

    pub fn fixture(case: Case) -> HeightSequence {
        generate(case.params())
    }

    /// Comma-separated text for the parse path.
    pub fn input_text(case: Case) -> String {
        fixture(case).to_string()
    }
}

pub mod render {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Medium,
        WideShallow,
    }

    impl Case {
        pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::WideShallow];

        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Medium => "medium",
                Self::WideShallow => "wide_shallow",
            }
        }

        pub const fn params(self) -> HeightParams {
            match self {
                Self::Small => HeightParams::new(12, 7, Shape::Noise),
                Self::Medium => HeightParams::new(120, 40, Shape::Valley),
                Self::WideShallow => HeightParams::new(2_000, 12, Shape::Sawtooth),
            }
        }
    }

    pub fn fixture(case: Case) -> HeightSequence {
        generate(case.params())
    }
}
