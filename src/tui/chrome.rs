// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Focus, title, footer, and drawing-style helpers used by TUI rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Input,
    Drawing,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::Input => Self::Drawing,
            Self::Drawing => Self::Input,
        }
    }
}

fn view_title(label: &str, tail: &str) -> String {
    let mut title = format!("─ {label}");
    let tail = tail.trim();
    if !tail.is_empty() {
        title.push(' ');
        title.push_str(tail);
    }
    title.push(' ');
    title
}

fn column_count_label(columns: usize) -> String {
    match columns {
        0 => String::new(),
        1 => "[1 column]".to_owned(),
        n => format!("[{n} columns]"),
    }
}

/// Horizontal scroll that keeps the cursor inside an input box `visible` cells wide.
fn input_scroll_offset(cursor: usize, visible: u16) -> u16 {
    let visible = usize::from(visible.max(1));
    cursor
        .saturating_sub(visible - 1)
        .min(u16::MAX as usize) as u16
}

/// `(widest line, line count)` of rendered text, in cells.
fn drawing_extent(text: &str) -> (u16, u16) {
    if text.is_empty() {
        return (0, 0);
    }
    let mut width = 0usize;
    let mut height = 0usize;
    for line in text.split('\n') {
        width = width.max(line.chars().count());
        height += 1;
    }
    let clamp = |value: usize| value.min(u16::MAX as usize) as u16;
    (clamp(width), clamp(height))
}

/// Styles the block drawing: water runs get the water style, everything else the wall style.
fn drawing_text(render: &AnnotatedRender, theme: &TuiTheme) -> Text<'static> {
    if render.text.is_empty() {
        return Text::default();
    }

    let wall_style = theme.wall_style();
    let water_style = theme.water_style();
    let mut spans_iter = render.water_spans.iter().copied().peekable();
    let mut lines = Vec::<Line<'static>>::new();

    for (y, line) in render.text.split('\n').enumerate() {
        let chars = line.chars().collect::<Vec<_>>();
        let mut line_spans = Vec::<Span<'static>>::new();
        let mut x = 0usize;

        while let Some(&(span_y, start, end)) = spans_iter.peek() {
            if span_y != y {
                break;
            }
            spans_iter.next();
            push_styled_run(&mut line_spans, &chars, x, start, wall_style);
            push_styled_run(&mut line_spans, &chars, start, end + 1, water_style);
            x = end + 1;
        }
        push_styled_run(&mut line_spans, &chars, x, chars.len(), wall_style);

        lines.push(Line::from(line_spans));
    }

    Text::from(lines)
}

fn push_styled_run(
    spans: &mut Vec<Span<'static>>,
    chars: &[char],
    start: usize,
    end: usize,
    style: Style,
) {
    let end = end.min(chars.len());
    if start >= end {
        return;
    }
    spans.push(Span::styled(chars[start..end].iter().collect::<String>(), style));
}

fn footer_help_line(app: &App) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    let theme = &app.theme;

    match app.focus {
        Focus::Input => {
            push_footer_entry(&mut spans, theme, "EDIT", "←→");
            push_footer_entry(&mut spans, theme, "CLEAR", "^U");
        }
        Focus::Drawing => {
            push_footer_entry(&mut spans, theme, "PAN", "hjkl");
            push_footer_entry(&mut spans, theme, "RESET", "Home");
        }
    }
    push_footer_entry(&mut spans, theme, "FOCUS", "Tab");
    push_footer_entry(&mut spans, theme, "YANK", "^Y");
    push_footer_entry(&mut spans, theme, "QUIT", "Esc");

    if let Some(toast) = app.active_toast() {
        spans.push(Span::styled(" | ", theme.muted_style()));
        spans.push(Span::styled("Toast:".to_owned(), theme.muted_style()));
        spans.push(Span::raw(toast.to_owned()));
    }

    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, theme: &TuiTheme, label: &str, value: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ".to_owned(), theme.muted_style()));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        theme.muted_style(),
    ));
    spans.push(Span::styled(value.to_owned(), theme.key_style()));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
