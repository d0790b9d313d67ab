// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::Range;

use serde::Serialize;

use crate::model::{Height, HeightSequence, Volume};
use crate::water::Evaluation;

/// Edge length of one grid cell on the drawing surface.
pub const BLOCK_SIZE: u32 = 30;
/// Lowest vertical reference used for placement, even when every block is shorter.
pub const DEFAULT_MAX_BLOCK_HEIGHT: Height = 7;
pub const SURFACE_WIDTH: u32 = 600;
pub const SURFACE_HEIGHT: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Wall,
    Water,
}

/// One unit cell of the drawing plan. `slot` counts upward from the ground (slot 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BlockCell {
    column: usize,
    slot: Height,
    kind: CellKind,
}

impl BlockCell {
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn slot(&self) -> Height {
        self.slot
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnLayout {
    column: usize,
    height: Height,
    water_level: Height,
}

impl ColumnLayout {
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn height(&self) -> Height {
        self.height
    }

    /// Top of the trapped water; equals `height` when the column holds none.
    pub fn water_level(&self) -> Height {
        self.water_level
    }

    pub fn water_depth(&self) -> Height {
        self.water_level - self.height
    }

    pub fn wall_slots(&self) -> Range<Height> {
        0..self.height
    }

    pub fn water_slots(&self) -> Range<Height> {
        self.height..self.water_level
    }

    /// Columns without wall or water cells carry no index label.
    pub fn has_label(&self) -> bool {
        self.water_level > 0
    }
}

/// Spatial plan for a block arrangement: which cells are wall and which are water.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockLayout {
    max_height: Height,
    columns: Vec<ColumnLayout>,
}

impl BlockLayout {
    /// A plan with no columns.
    pub fn empty(floor: Height) -> Self {
        Self {
            max_height: floor,
            columns: Vec::new(),
        }
    }

    /// Vertical reference for placement: the tallest block or the display floor, whichever is
    /// larger.
    pub fn max_height(&self) -> Height {
        self.max_height
    }

    pub fn columns(&self) -> &[ColumnLayout] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All cells, column by column, walls bottom-up before water bottom-up.
    pub fn cells(&self) -> impl Iterator<Item = BlockCell> + '_ {
        self.columns.iter().flat_map(|column| {
            let walls = column.wall_slots().map(move |slot| BlockCell {
                column: column.column,
                slot,
                kind: CellKind::Wall,
            });
            let water = column.water_slots().map(move |slot| BlockCell {
                column: column.column,
                slot,
                kind: CellKind::Water,
            });
            walls.chain(water)
        })
    }

    pub fn wall_cell_count(&self) -> Volume {
        self.columns.iter().map(|c| Volume::from(c.height)).sum()
    }

    pub fn water_cell_count(&self) -> Volume {
        self.columns.iter().map(|c| Volume::from(c.water_depth())).sum()
    }

    /// Drawing operations for `surface`, in paint order.
    ///
    /// Each column strokes its wall cells bottom-up (labelling the column index after the ground
    /// cell), then fills its water cells. Only cells that land on the surface are emitted, so the
    /// plan stays bounded however tall the blocks are; [`Self::clipped_cell_count`] counts the
    /// rest. A label below a visible ground cell can still fall off the surface and is then marked
    /// invisible.
    pub fn surface_ops(&self, surface: &Surface) -> Vec<SurfaceOp> {
        let mut ops = Vec::new();
        let Some(lowest) = surface.lowest_visible_slot(self.max_height) else {
            return ops;
        };

        for column in self.columns.iter().take(surface.visible_columns()) {
            for slot in clip_slots(column.wall_slots(), lowest) {
                let rect = surface.cell_rect(self.max_height, column.column, slot);
                ops.push(SurfaceOp::StrokeRect {
                    visible: surface.shows_rect(&rect),
                    rect,
                });
                if slot == 0 {
                    ops.push(surface.label_op(self.max_height, column.column));
                }
            }

            for slot in clip_slots(column.water_slots(), lowest) {
                let rect = surface.cell_rect(self.max_height, column.column, slot);
                ops.push(SurfaceOp::FillRect {
                    visible: surface.shows_rect(&rect),
                    rect,
                });
                if slot == 0 {
                    ops.push(surface.label_op(self.max_height, column.column));
                }
            }
        }

        ops
    }

    /// Wall and water cells left out of [`Self::surface_ops`] because they fall off `surface`.
    pub fn clipped_cell_count(&self, surface: &Surface) -> Volume {
        let total = self.wall_cell_count() + self.water_cell_count();
        let shown: Volume = match surface.lowest_visible_slot(self.max_height) {
            Some(lowest) => self
                .columns
                .iter()
                .take(surface.visible_columns())
                .map(|c| Volume::from(c.water_level.saturating_sub(lowest)))
                .sum(),
            None => 0,
        };
        total - shown
    }
}

fn clip_slots(slots: Range<Height>, lowest: Height) -> Range<Height> {
    slots.start.max(lowest)..slots.end
}

/// Fixed-size drawing surface measured in abstract units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Surface {
    width: u32,
    height: u32,
    block_size: u32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            block_size: BLOCK_SIZE,
        }
    }
}

impl Surface {
    pub fn new(width: u32, height: u32, block_size: u32) -> Self {
        Self {
            width,
            height,
            block_size,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Rectangle of the cell at `(column, slot)`; slot 0 sits `max_height` cells below the top.
    pub fn cell_rect(&self, max_height: Height, column: usize, slot: Height) -> SurfaceRect {
        let size = u64::from(self.block_size);
        SurfaceRect {
            x: column as u64 * size,
            y: u64::from(max_height.saturating_sub(slot)) * size,
            width: size,
            height: size,
        }
    }

    /// Leading columns whose cells start inside the surface.
    fn visible_columns(&self) -> usize {
        if self.block_size == 0 {
            return 0;
        }
        usize::try_from(self.width.div_ceil(self.block_size)).unwrap_or(usize::MAX)
    }

    /// Lowest slot whose cell starts inside the surface, or `None` when no row fits.
    fn lowest_visible_slot(&self, max_height: Height) -> Option<Height> {
        if self.block_size == 0 {
            return None;
        }
        let rows = u64::from(self.height.div_ceil(self.block_size));
        if rows == 0 {
            return None;
        }
        // A cell starts on the surface when `(max_height - slot) * block_size < height`.
        let lowest = (u64::from(max_height) + 1).saturating_sub(rows);
        Some(Height::try_from(lowest).unwrap_or(max_height))
    }

    fn shows_rect(&self, rect: &SurfaceRect) -> bool {
        rect.x < u64::from(self.width) && rect.y < u64::from(self.height)
    }

    fn label_op(&self, max_height: Height, column: usize) -> SurfaceOp {
        let size = u64::from(self.block_size);
        let x = column as u64 * size + size / 2;
        let y = u64::from(max_height) * size + size * 2;
        let mut buf = itoa::Buffer::new();
        SurfaceOp::FillText {
            visible: x < u64::from(self.width) && y <= u64::from(self.height),
            x,
            y,
            text: buf.format(column).to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfaceRect {
    pub x: u64,
    pub y: u64,
    pub width: u64,
    pub height: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SurfaceOp {
    /// Bordered wall cell.
    StrokeRect { rect: SurfaceRect, visible: bool },
    /// Filled water cell.
    FillRect { rect: SurfaceRect, visible: bool },
    /// Column index label; `(x, y)` is the text baseline anchor.
    FillText {
        x: u64,
        y: u64,
        text: String,
        visible: bool,
    },
}

impl SurfaceOp {
    pub fn is_visible(&self) -> bool {
        match self {
            Self::StrokeRect { visible, .. }
            | Self::FillRect { visible, .. }
            | Self::FillText { visible, .. } => *visible,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockLayoutError {
    LengthMismatch { heights: usize, profile: usize },
}

impl std::fmt::Display for BlockLayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { heights, profile } => write!(
                f,
                "water profile covers {profile} columns but there are {heights} blocks"
            ),
        }
    }
}

impl std::error::Error for BlockLayoutError {}

/// Lays out `heights` with the default display floor.
pub fn layout_blocks(
    heights: &HeightSequence,
    evaluation: &Evaluation,
) -> Result<BlockLayout, BlockLayoutError> {
    layout_blocks_with_floor(heights, evaluation, DEFAULT_MAX_BLOCK_HEIGHT)
}

/// Lays out `heights` with `evaluation` stacked on top of each wall.
///
/// `floor` is the smallest vertical reference; taller arrangements raise it.
pub fn layout_blocks_with_floor(
    heights: &HeightSequence,
    evaluation: &Evaluation,
    floor: Height,
) -> Result<BlockLayout, BlockLayoutError> {
    if heights.len() != evaluation.len() {
        return Err(BlockLayoutError::LengthMismatch {
            heights: heights.len(),
            profile: evaluation.len(),
        });
    }

    let max_height = heights.max().unwrap_or(0).max(floor);
    let columns = heights
        .iter()
        .zip(evaluation.profile())
        .enumerate()
        .map(|(column, (height, &depth))| ColumnLayout {
            column,
            height,
            water_level: height.saturating_add(depth),
        })
        .collect();

    Ok(BlockLayout {
        max_height,
        columns,
    })
}
