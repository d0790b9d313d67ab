// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Controller state shared by the interactive TUI and the one-shot report.
//!
//! Every input event rebuilds the whole state from the raw text: the height sequence, the water
//! evaluation and the error are never patched individually.

use serde::Serialize;

use crate::format::{parse_heights, InvalidInputFormat};
use crate::layout::{layout_blocks_with_floor, BlockLayout, Surface, SurfaceOp};
use crate::model::{Height, HeightSequence, Volume};
use crate::water::{evaluate, Evaluation};

pub use crate::layout::DEFAULT_MAX_BLOCK_HEIGHT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    rev: u64,
    floor: Height,
    input: String,
    heights: HeightSequence,
    evaluation: Option<Evaluation>,
    error: Option<InvalidInputFormat>,
    layout: BlockLayout,
}

impl Default for UiState {
    fn default() -> Self {
        Self::with_floor(DEFAULT_MAX_BLOCK_HEIGHT)
    }
}

impl UiState {
    /// State for an empty input field, with `floor` as the smallest vertical reference.
    pub fn with_floor(floor: Height) -> Self {
        Self {
            rev: 0,
            floor,
            input: String::new(),
            heights: HeightSequence::empty(),
            evaluation: Some(Evaluation::empty()),
            error: None,
            layout: BlockLayout::empty(floor),
        }
    }

    /// Bumped on every applied input, even when the text did not change.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn floor(&self) -> Height {
        self.floor
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn heights(&self) -> &HeightSequence {
        &self.heights
    }

    /// `None` while the input is invalid.
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    pub fn error(&self) -> Option<&InvalidInputFormat> {
        self.error.as_ref()
    }

    pub fn total(&self) -> Option<Volume> {
        self.evaluation.as_ref().map(Evaluation::total)
    }

    /// The readout line, e.g. `Sum of water: 7`; the value is blank while the input is invalid.
    pub fn total_label(&self) -> String {
        match self.total() {
            Some(total) => {
                let mut buf = itoa::Buffer::new();
                format!("Sum of water: {}", buf.format(total))
            }
            None => "Sum of water: ".to_owned(),
        }
    }

    /// Replaces the raw input and re-derives everything from it.
    ///
    /// Malformed text clears the height sequence instead of reaching the calculator.
    pub fn apply_input(&mut self, raw: &str) {
        self.input = raw.to_owned();
        self.rev = self.rev.wrapping_add(1);

        match parse_heights(raw) {
            Ok(heights) => {
                let evaluation = evaluate(heights.as_slice());
                tracing::debug!(
                    columns = heights.len(),
                    total = evaluation.total(),
                    "evaluated heights"
                );
                self.layout = match layout_blocks_with_floor(&heights, &evaluation, self.floor) {
                    Ok(layout) => layout,
                    Err(err) => {
                        tracing::warn!(error = %err, "block layout unavailable");
                        BlockLayout::empty(self.floor)
                    }
                };
                self.heights = heights;
                self.evaluation = Some(evaluation);
                self.error = None;
            }
            Err(err) => {
                tracing::info!(input = err.input(), "rejected height input");
                self.heights = HeightSequence::empty();
                self.evaluation = None;
                self.error = Some(err);
                self.layout = BlockLayout::empty(self.floor);
            }
        }
    }

    /// Drawing plan for the current heights (empty while the input is invalid).
    pub fn layout(&self) -> &BlockLayout {
        &self.layout
    }

    /// Machine-readable snapshot of the current state.
    pub fn report(&self) -> EvaluationReport {
        let surface = Surface::default();
        EvaluationReport {
            input: self.input.trim().to_owned(),
            heights: self.heights.clone(),
            profile: self
                .evaluation
                .as_ref()
                .map(|evaluation| evaluation.profile().to_vec()),
            total: self.total(),
            error: self.error.as_ref().map(ToString::to_string),
            surface_ops: self.layout.surface_ops(&surface),
            clipped_cells: self.layout.clipped_cell_count(&surface),
            surface,
            layout: self.layout.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub input: String,
    pub heights: HeightSequence,
    pub profile: Option<Vec<Height>>,
    pub total: Option<Volume>,
    pub error: Option<String>,
    pub layout: BlockLayout,
    pub surface: Surface,
    pub surface_ops: Vec<SurfaceOp>,
    /// Cells that do not fit on `surface` and are left out of `surface_ops`.
    pub clipped_cells: Volume,
}
