/*
[INPUT]:  Task client, crossterm events, and log buffer
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::fmt::MakeWriter;

use taskdeck_client::{TaskClient, TaskStatus};

use super::app::{ActiveModal, AppState, Tab};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::modal::draw_modal;
use super::ui::{draw_logs, draw_tabs, draw_task_form, draw_task_list};

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

/// Bounded FIFO of rendered log lines for the Logs tab.
#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// MakeWriter that splits tracing output into lines for the LogBuffer.
#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = String::from_utf8_lossy(buf);
        self.partial.push_str(&chunk);
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial = self.partial[pos + 1..].to_string();
            let mut guard = self.buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            let mut guard = self.buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

enum UiEvent {
    Input(CrosstermEvent),
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn status_style(status: TaskStatus) -> Style {
    match status {
        TaskStatus::Created => Style::default().fg(Color::Yellow),
        TaskStatus::InProgress => Style::default().fg(Color::LightCyan),
        TaskStatus::Done => Style::default().fg(Color::LightGreen),
    }
}

pub async fn run_tui(client: TaskClient, log_buffer: LogBufferHandle) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = event_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = AppState::new(client, log_buffer);
    if let Err(err) = app.refresh_tasks().await {
        app.status_message = format!("refresh tasks failed: {err}");
    }

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                if let Some(UiEvent::Input(CrosstermEvent::Key(key))) = maybe_event {
                    if handle_key_event(&mut app, key.code).await {
                        should_quit = true;
                    }
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(area);

    draw_tabs(frame, layout[0], app.current_tab);

    match app.current_tab {
        Tab::Form => draw_task_form(frame, layout[1], &app.form),
        Tab::List => draw_task_list(frame, layout[1], app),
        Tab::Logs => draw_logs(frame, layout[1], &app.log_buffer),
    }

    draw_footer(frame, layout[2], app);

    if let Some(active_modal) = app.active_modal.as_ref() {
        let form = match active_modal {
            ActiveModal::QuickLookup(modal) => modal.to_form(),
            ActiveModal::ConfirmDelete(modal) => modal.to_form(),
        };
        let modal_area = centered_rect(area, 60, 40);
        draw_modal(frame, modal_area, &form);
    }
}

fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let line1 = match app.current_tab {
        Tab::Form => Line::from(vec![
            Span::styled("[Tab]", key_style),
            Span::raw(" Next field  "),
            Span::styled("[Up/Down]", key_style),
            Span::raw(" Status  "),
            Span::styled("[Enter]", key_style),
            Span::raw(" Activate  "),
            Span::styled("[Esc]", key_style),
            Span::raw(" List"),
        ]),
        Tab::List => Line::from(vec![
            Span::styled("[Up/Down]", key_style),
            Span::raw(" Select  "),
            Span::styled("[Enter]", key_style),
            Span::raw(" Details  "),
            Span::styled("[e]", key_style),
            Span::raw(" Edit  "),
            Span::styled("[d]", key_style),
            Span::raw(" Delete  "),
            Span::styled("[n]", key_style),
            Span::raw(" New"),
        ]),
        Tab::Logs => Line::from(vec![
            Span::styled("[1/2/3]", key_style),
            Span::raw(" Tabs  "),
            Span::styled("[q]", key_style),
            Span::raw(" Quit"),
        ]),
    };

    let line2 = match app.current_tab {
        Tab::List => Line::from(vec![
            Span::styled("[f]", key_style),
            Span::raw(" Filter  "),
            Span::styled("[g]", key_style),
            Span::raw(" Lookup  "),
            Span::styled("[r]", key_style),
            Span::raw(" Refresh  "),
            Span::styled("[q]", key_style),
            Span::raw(" Quit  "),
            Span::raw(format!("Status: {}", app.status_message)),
        ]),
        _ => Line::from(Span::raw(format!("Status: {}", app.status_message))),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn centered_rect(
    area: ratatui::layout::Rect,
    percent_x: u16,
    percent_y: u16,
) -> ratatui::layout::Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_buffer_drops_oldest_lines_at_capacity() {
        let mut buffer = LogBuffer::new(2);
        buffer.push_line("one".to_string());
        buffer.push_line("two".to_string());
        buffer.push_line("three".to_string());
        assert_eq!(buffer.snapshot(), vec!["two".to_string(), "three".to_string()]);
    }

    #[test]
    fn log_writer_splits_lines() {
        let buffer: LogBufferHandle = Arc::new(StdMutex::new(LogBuffer::new(10)));
        let factory = LogWriterFactory::new(buffer.clone());
        let mut writer = factory.make_writer();
        writer.write_all(b"first\nsec").expect("write");
        writer.write_all(b"ond\n").expect("write");

        let guard = buffer.lock().expect("log buffer lock");
        assert_eq!(
            guard.snapshot(),
            vec!["first".to_string(), "second".to_string()]
        );
    }
}
