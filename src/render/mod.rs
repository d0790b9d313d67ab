// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for block layouts.
//!
//! Renderers produce Unicode text plus the spans of water cells, so the TUI can color them
//! without re-deriving the layout.

use std::fmt;

pub mod blocks;
mod text;

pub use blocks::{
    render_blocks_unicode, render_blocks_unicode_annotated, BlockRenderError, CELL_HEIGHT,
    CELL_WIDTH, WATER_GLYPH,
};

/// A contiguous run of cells within a single rendered line.
///
/// Coordinates are `(y, x0, x1)` in character-cell indices, inclusive.
pub type LineSpan = (usize, usize, usize);

/// Render output plus the spans covered by water.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotatedRender {
    pub text: String,
    pub water_spans: Vec<LineSpan>,
}

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';

/// Directions in which a box-drawing cell connects to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct BoxEdges(u8);

impl BoxEdges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    fn glyph(self) -> char {
        match self.0 {
            0 => ' ',
            1..=3 => UNICODE_BOX_HORIZONTAL,
            4 | 8 | 12 => UNICODE_BOX_VERTICAL,
            10 => UNICODE_BOX_TOP_LEFT,
            9 => UNICODE_BOX_TOP_RIGHT,
            6 => UNICODE_BOX_BOTTOM_LEFT,
            5 => UNICODE_BOX_BOTTOM_RIGHT,
            14 => UNICODE_BOX_TEE_RIGHT,
            13 => UNICODE_BOX_TEE_LEFT,
            11 => UNICODE_BOX_TEE_DOWN,
            7 => UNICODE_BOX_TEE_UP,
            _ => UNICODE_BOX_CROSS,
        }
    }
}

/// A fixed-size, bounds-checked character grid.
///
/// Plain glyphs overwrite whatever was in a cell. Box outlines accumulate connection edges
/// instead, so boxes that share a border render as `┬`, `├`, `┼` and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    glyphs: Vec<char>,
    edges: Vec<BoxEdges>,
}

impl Canvas {
    /// Creates a canvas filled with spaces.
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            glyphs: vec![' '; len],
            edges: vec![BoxEdges::NONE; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.glyph_at(idx))
    }

    /// Writes a plain glyph at `(x, y)`, dropping any box edges there.
    pub fn put(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.glyphs[idx] = ch;
        self.edges[idx] = BoxEdges::NONE;
        Ok(())
    }

    /// Writes `text` left-to-right from `(x, y)`, clipping at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        self.index_of(x.min(self.width.saturating_sub(1)), y)?;

        for (offset, ch) in text.chars().enumerate() {
            let cx = x + offset;
            if cx >= self.width {
                break;
            }
            self.put(cx, y, ch)?;
        }

        Ok(())
    }

    /// Fills the inclusive rectangle `(x0, y0)..=(x1, y1)` with `ch`.
    ///
    /// Nothing is written when any corner lies outside the canvas.
    pub fn fill_rect(
        &mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        ch: char,
    ) -> Result<(), CanvasError> {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));
        self.index_of(max_x, max_y)?;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                self.put(x, y, ch)?;
            }
        }

        Ok(())
    }

    /// Outlines the inclusive rectangle `(x0, y0)..=(x1, y1)` with box-drawing edges.
    ///
    /// Nothing is written when any corner lies outside the canvas.
    pub fn draw_box(
        &mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    ) -> Result<(), CanvasError> {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));
        self.index_of(max_x, max_y)?;

        for y in [min_y, max_y] {
            for x in min_x..=max_x {
                let mut edges = BoxEdges::NONE;
                if x > min_x {
                    edges = edges.union(BoxEdges::LEFT);
                }
                if x < max_x {
                    edges = edges.union(BoxEdges::RIGHT);
                }
                self.add_edges(x, y, edges);
            }
        }

        for x in [min_x, max_x] {
            for y in min_y..=max_y {
                let mut edges = BoxEdges::NONE;
                if y > min_y {
                    edges = edges.union(BoxEdges::UP);
                }
                if y < max_y {
                    edges = edges.union(BoxEdges::DOWN);
                }
                self.add_edges(x, y, edges);
            }
        }

        Ok(())
    }

    fn add_edges(&mut self, x: usize, y: usize, edges: BoxEdges) {
        let idx = (y * self.width) + x;
        self.edges[idx] = self.edges[idx].union(edges);
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y * self.width) + x)
    }

    fn glyph_at(&self, idx: usize) -> char {
        let edges = self.edges[idx];
        if edges.is_empty() {
            self.glyphs[idx]
        } else {
            edges.glyph()
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width {
                f.write_char(self.glyph_at((y * self.width) + x))?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
