// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cistern: trapped rain water calculator with a block renderer and terminal UI.
//!
//! Data flows one way: raw text is parsed into a [`model::HeightSequence`] ([`format`]), the
//! per-column water profile is computed ([`water`]), turned into a grid of wall and water cells
//! ([`layout`]) and drawn as text ([`render`]). [`ui::UiState`] ties the steps together for the
//! [`tui`] and the one-shot report.

pub mod format;
pub mod layout;
pub mod model;
pub mod render;
pub mod tui;
pub mod ui;
pub mod water;
