// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Canvas, LineSpan};

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Canvas text without trailing spaces per line or trailing blank lines.
pub(crate) fn canvas_to_string_trimmed(canvas: &Canvas) -> String {
    let rendered = canvas.to_string();
    let mut lines = rendered
        .split('\n')
        .map(|line| line.trim_end_matches(' '))
        .collect::<Vec<_>>();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

/// Inclusive runs of `glyph` per line, in reading order.
pub(crate) fn glyph_spans(text: &str, glyph: char) -> Vec<LineSpan> {
    let mut spans = Vec::new();

    for (y, line) in text.split('\n').enumerate() {
        let mut run_start = None::<usize>;
        let mut x = 0usize;
        for ch in line.chars() {
            match (ch == glyph, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    spans.push((y, start, x - 1));
                    run_start = None;
                }
                _ => {}
            }
            x += 1;
        }
        if let Some(start) = run_start {
            spans.push((y, start, x - 1));
        }
    }

    spans
}
