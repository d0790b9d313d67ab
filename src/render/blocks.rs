// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::text::{canvas_to_string_trimmed, glyph_spans, text_len};
use super::{AnnotatedRender, Canvas, CanvasError};
use crate::layout::{BlockLayout, CellKind};

/// Characters per grid cell horizontally (neighbouring cells share a border column).
pub const CELL_WIDTH: usize = 4;
/// Lines per grid cell vertically (neighbouring cells share a border line).
pub const CELL_HEIGHT: usize = 2;
pub const WATER_GLYPH: char = '~';

const MAX_RENDER_CELLS: usize = 4_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockRenderError {
    TooLarge { width: usize, height: usize },
    Canvas(CanvasError),
}

impl fmt::Display for BlockRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { width, height } => write!(
                f,
                "arrangement too large to render as text: {width}x{height} cells (limit {MAX_RENDER_CELLS})"
            ),
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
        }
    }
}

impl std::error::Error for BlockRenderError {}

impl From<CanvasError> for BlockRenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

/// Renders `layout` as Unicode box-drawing text.
///
/// Grid rows run from `max_height - 1` (top line) down to the ground; the line below the ground
/// carries the column labels. Wall cells are outlined boxes, water cells are filled with
/// [`WATER_GLYPH`].
pub fn render_blocks_unicode(layout: &BlockLayout) -> Result<String, BlockRenderError> {
    let canvas = paint(layout)?;
    Ok(canvas_to_string_trimmed(&canvas))
}

/// Like [`render_blocks_unicode`], plus the spans occupied by water.
pub fn render_blocks_unicode_annotated(
    layout: &BlockLayout,
) -> Result<AnnotatedRender, BlockRenderError> {
    let text = render_blocks_unicode(layout)?;
    let water_spans = glyph_spans(&text, WATER_GLYPH);
    Ok(AnnotatedRender { text, water_spans })
}

fn paint(layout: &BlockLayout) -> Result<Canvas, BlockRenderError> {
    let rows = layout.max_height() as usize;
    let columns = layout.column_count();

    let too_large = || BlockRenderError::TooLarge {
        width: columns,
        height: rows,
    };
    let width = columns
        .checked_mul(CELL_WIDTH)
        .and_then(|w| w.checked_add(1))
        .ok_or_else(too_large)?;
    let height = rows
        .checked_mul(CELL_HEIGHT)
        .and_then(|h| h.checked_add(2))
        .ok_or_else(too_large)?;
    if width.checked_mul(height).map_or(true, |area| area > MAX_RENDER_CELLS) {
        return Err(too_large());
    }

    let mut canvas = Canvas::new(width, height)?;

    // Water first: wall outlines drawn afterwards win on shared borders.
    for kind in [CellKind::Water, CellKind::Wall] {
        for cell in layout.cells().filter(|cell| cell.kind() == kind) {
            let x0 = cell.column() * CELL_WIDTH;
            let y0 = (rows - 1 - cell.slot() as usize) * CELL_HEIGHT;
            let (x1, y1) = (x0 + CELL_WIDTH, y0 + CELL_HEIGHT);
            match kind {
                CellKind::Water => canvas.fill_rect(x0, y0, x1, y1, WATER_GLYPH)?,
                CellKind::Wall => canvas.draw_box(x0, y0, x1, y1)?,
            }
        }
    }

    let label_y = rows * CELL_HEIGHT + 1;
    let mut buf = itoa::Buffer::new();
    for column in layout.columns().iter().filter(|c| c.has_label()) {
        let label = buf.format(column.column());
        let center = column.column() * CELL_WIDTH + CELL_WIDTH / 2;
        let x = center.saturating_sub((text_len(label) - 1) / 2);
        canvas.write_str(x, label_y, label)?;
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::{render_blocks_unicode, render_blocks_unicode_annotated, BlockRenderError};
    use crate::layout::{layout_blocks, layout_blocks_with_floor, BlockLayout};
    use crate::model::HeightSequence;
    use crate::water::evaluate;

    fn compact_layout(heights: &[u32]) -> BlockLayout {
        let heights = HeightSequence::new(heights.to_vec());
        let evaluation = evaluate(heights.as_slice());
        layout_blocks_with_floor(&heights, &evaluation, 0).expect("layout")
    }

    #[test]
    fn renders_a_single_basin() {
        let text = render_blocks_unicode(&compact_layout(&[1, 0, 1])).expect("render");
        assert_eq!(text, "┌───┐~~~┌───┐\n│   │~~~│   │\n└───┘~~~└───┘\n  0   1   2");
    }

    #[test]
    fn renders_stacked_walls_and_water() {
        let text = render_blocks_unicode(&compact_layout(&[2, 0, 1, 2])).expect("render");
        let expected = [
            "┌───┐~~~~~~~┌───┐",
            "│   │~~~~~~~│   │",
            "├───┤~~~┌───┼───┤",
            "│   │~~~│   │   │",
            "└───┘~~~└───┴───┘",
            "  0   1   2   3",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn dry_flat_ground_renders_nothing() {
        assert_eq!(render_blocks_unicode(&compact_layout(&[])).expect("render"), "");
        assert_eq!(render_blocks_unicode(&compact_layout(&[0, 0])).expect("render"), "");
    }

    #[test]
    fn display_floor_pads_above_short_arrangements() {
        let heights = HeightSequence::new(vec![1]);
        let evaluation = evaluate(heights.as_slice());
        let layout = layout_blocks(&heights, &evaluation).expect("layout");
        let text = render_blocks_unicode(&layout).expect("render");
        let lines = text.split('\n').collect::<Vec<_>>();
        assert_eq!(lines.len(), 16);
        assert!(lines[..12].iter().all(|line| line.is_empty()));
        assert_eq!(&lines[12..], &["┌───┐", "│   │", "└───┘", "  0"]);
    }

    #[test]
    fn multi_digit_labels_stay_under_their_column() {
        let heights = (0..12).map(|_| 1).collect::<Vec<_>>();
        let text = render_blocks_unicode(&compact_layout(&heights)).expect("render");
        let labels = text.split('\n').last().expect("label line");
        assert!(labels.ends_with("  10  11"), "unexpected labels: {labels:?}");
    }

    #[test]
    fn annotated_render_reports_water_spans() {
        let render = render_blocks_unicode_annotated(&compact_layout(&[1, 0, 1])).expect("render");
        assert_eq!(render.water_spans, vec![(0, 5, 7), (1, 5, 7), (2, 5, 7)]);
    }

    #[test]
    fn refuses_oversized_arrangements() {
        let err = render_blocks_unicode(&compact_layout(&[u32::MAX, 0, u32::MAX])).unwrap_err();
        assert!(matches!(err, BlockRenderError::TooLarge { .. }), "{err:?}");
    }
}
