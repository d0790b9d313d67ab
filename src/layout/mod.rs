// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout for block arrangements.
//!
//! Turns heights plus their water profile into a grid plan of wall and water cells, and maps that
//! plan onto a fixed-size drawing surface.

pub mod blocks;

pub use blocks::{
    layout_blocks, layout_blocks_with_floor, BlockCell, BlockLayout, BlockLayoutError, CellKind,
    ColumnLayout, Surface, SurfaceOp, SurfaceRect, BLOCK_SIZE, DEFAULT_MAX_BLOCK_HEIGHT,
    SURFACE_HEIGHT, SURFACE_WIDTH,
};
