// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Interactive shell (ratatui + crossterm): a heights input field, the `Sum of water` readout, an
//! inline error line and the block drawing.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::render::{render_blocks_unicode_annotated, AnnotatedRender};
use crate::ui::UiState;

mod theme;

use theme::TuiTheme;

const FOOTER_BRAND: &str = "≈ cistern ≈";
const INPUT_PLACEHOLDER: &str = "Enter here";
const PAN_STEP: u16 = 4;
const TOAST_TTL: Duration = Duration::from_secs(2);

/// Runs the interactive terminal UI with an empty input field.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_state(UiState::default())
}

/// Runs the interactive terminal UI starting from `state` (e.g. prefilled heights).
pub fn run_with_state(state: UiState) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(state, theme);

    while !app.should_quit {
        app.flush_pending_input();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        // Drain everything already queued so a burst of keystrokes costs one evaluation.
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
            if let Some(action) = app.take_external_action() {
                if let Err(err) = app.execute_external_action(action) {
                    app.set_toast(format!("Clipboard error: {err}"));
                }
            }
            if app.should_quit || !event::poll(Duration::ZERO)? {
                break;
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExternalAction {
    YankDrawing,
}

struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    state: UiState,
    theme: TuiTheme,
    input: String,
    cursor: usize,
    pending_input: bool,
    render: AnnotatedRender,
    render_error: Option<String>,
    focus: Focus,
    pan_x: u16,
    pan_y: u16,
    toast: Option<Toast>,
    pending_external_action: Option<ExternalAction>,
    should_quit: bool,
}

impl App {
    fn new(state: UiState, theme: TuiTheme) -> Self {
        let input = state.input().to_owned();
        let cursor = input.chars().count();
        let mut app = Self {
            state,
            theme,
            input,
            cursor,
            pending_input: false,
            render: AnnotatedRender::default(),
            render_error: None,
            focus: Focus::Input,
            pan_x: 0,
            pan_y: 0,
            toast: None,
            pending_external_action: None,
            should_quit: false,
        };
        app.refresh_render();
        app
    }

    /// Re-evaluates the typed text if it changed since the last frame.
    fn flush_pending_input(&mut self) {
        if !self.pending_input {
            return;
        }
        self.pending_input = false;
        self.state.apply_input(&self.input);
        self.refresh_render();
    }

    fn refresh_render(&mut self) {
        match render_blocks_unicode_annotated(self.state.layout()) {
            Ok(render) => {
                self.render = render;
                self.render_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "block drawing unavailable");
                self.render = AnnotatedRender::default();
                self.render_error = Some(err.to_string());
            }
        }
        self.clamp_pan();
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('u') => self.clear_input(),
                KeyCode::Char('y') => self.pending_external_action = Some(ExternalAction::YankDrawing),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.cycle(),
            KeyCode::BackTab => self.focus = self.focus.cycle(),
            code => match self.focus {
                Focus::Input => self.handle_input_key(code),
                Focus::Drawing => self.handle_drawing_key(code),
            },
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(ch) => {
                let at = self.cursor_byte_offset();
                self.input.insert(at, ch);
                self.cursor += 1;
                self.pending_input = true;
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return;
                }
                self.cursor -= 1;
                let at = self.cursor_byte_offset();
                self.input.remove(at);
                self.pending_input = true;
            }
            KeyCode::Delete => {
                if self.cursor >= self.input_len() {
                    return;
                }
                let at = self.cursor_byte_offset();
                self.input.remove(at);
                self.pending_input = true;
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.input_len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input_len(),
            KeyCode::Enter => self.pending_input = true,
            _ => {}
        }
    }

    fn handle_drawing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.pan_x = self.pan_x.saturating_sub(PAN_STEP),
            KeyCode::Right | KeyCode::Char('l') => self.pan_x = self.pan_x.saturating_add(PAN_STEP),
            KeyCode::Up | KeyCode::Char('k') => self.pan_y = self.pan_y.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.pan_y = self.pan_y.saturating_add(1),
            KeyCode::Home | KeyCode::Char('0') => {
                self.pan_x = 0;
                self.pan_y = 0;
            }
            _ => {}
        }
        self.clamp_pan();
    }

    fn clear_input(&mut self) {
        if self.input.is_empty() {
            return;
        }
        self.input.clear();
        self.cursor = 0;
        self.pending_input = true;
    }

    fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    fn cursor_byte_offset(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map_or(self.input.len(), |(idx, _)| idx)
    }

    fn clamp_pan(&mut self) {
        let (width, height) = drawing_extent(&self.render.text);
        self.pan_x = self.pan_x.min(width.saturating_sub(1));
        self.pan_y = self.pan_y.min(height.saturating_sub(1));
    }

    fn take_external_action(&mut self) -> Option<ExternalAction> {
        self.pending_external_action.take()
    }

    fn execute_external_action(&mut self, action: ExternalAction) -> Result<(), String> {
        match action {
            ExternalAction::YankDrawing => {
                let payload = self.yank_payload();
                let backend = copy_to_clipboard(&payload)?;
                self.set_toast(format!("Yanked drawing ({backend})"));
                Ok(())
            }
        }
    }

    fn yank_payload(&self) -> String {
        let mut payload = self.state.total_label();
        if !self.render.text.is_empty() {
            payload.push('\n');
            payload.push_str(&self.render.text);
        }
        payload
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn active_toast(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|toast| toast.expires_at > Instant::now())
            .map(|toast| toast.message.as_str())
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let (header_area, error_area, drawing_area, status_area) = (rows[0], rows[1], rows[2], rows[3]);

    let readout = app.state.total_label();
    let readout_width = (readout.chars().count() as u16).saturating_add(6).max(24);
    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(12), Constraint::Length(readout_width)])
        .split(header_area);
    let (input_area, readout_area) = (header[0], header[1]);

    let input_text = if app.input.is_empty() {
        Line::from(Span::styled(INPUT_PLACEHOLDER, app.theme.muted_style()))
    } else {
        Line::from(app.input.clone())
    };
    let input_scroll = input_scroll_offset(app.cursor, input_area.width.saturating_sub(2));
    let input = Paragraph::new(input_text)
        .style(app.theme.base_style())
        .scroll((0, input_scroll))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Heights", "e.g. 3,0,2,0,4"))
                .border_style(app.theme.panel_border_style(app.focus == Focus::Input)),
        );
    frame.render_widget(input, input_area);

    let readout = Paragraph::new(readout)
        .style(app.theme.base_style())
        .block(Block::default().borders(Borders::ALL).title(view_title("Water", "")));
    frame.render_widget(readout, readout_area);

    let error_message = app
        .state
        .error()
        .map(ToString::to_string)
        .or_else(|| app.render_error.clone());
    if let Some(message) = error_message {
        let error = Paragraph::new(message).style(app.theme.error_style());
        frame.render_widget(error, error_area);
    }

    let columns = app.state.layout().column_count();
    let drawing = Paragraph::new(drawing_text(&app.render, &app.theme))
        .style(app.theme.base_style())
        .scroll((app.pan_y, app.pan_x))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Blocks", &column_count_label(columns)))
                .border_style(app.theme.panel_border_style(app.focus == Focus::Drawing)),
        );
    frame.render_widget(drawing, drawing_area);

    let status = Paragraph::new(footer_help_line(app));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(Line::from(Span::styled(FOOTER_BRAND, app.theme.muted_style())))
        .alignment(Alignment::Right);
    frame.render_widget(brand, status_area);

    if app.focus == Focus::Input {
        let inner_width = input_area.width.saturating_sub(2);
        let cursor_col = (app.cursor as u16).saturating_sub(input_scroll);
        let cursor_x = input_area
            .x
            .saturating_add(1)
            .saturating_add(cursor_col.min(inner_width.saturating_sub(1)));
        frame.set_cursor_position((cursor_x, input_area.y.saturating_add(1)));
    }
}

include!("chrome.rs");

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        tracing::info!("terminal raw mode enabled");

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;
        tracing::info!("alternate screen enabled");

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
        tracing::info!("terminal restored");
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}
