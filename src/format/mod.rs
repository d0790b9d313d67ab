// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text input parsing/export.
//!
//! Heights are typed as a comma-separated list of non-negative integers.

pub mod heights;

pub use heights::{export_heights, parse_heights, InvalidInputFormat, INVALID_INPUT_MESSAGE};
