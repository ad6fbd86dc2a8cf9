/*
[INPUT]:  AppState task rows, filter, and expanded-row set
[OUTPUT]: Task list rendered into Ratatui frame
[POS]:    TUI UI task list rendering
[UPDATE]: When row layout or pill styling changes
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, status_style};

pub(in crate::tui) fn draw_task_list(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let items = if app.tasks.is_empty() {
        vec![ListItem::new("No tasks")]
    } else {
        app.tasks
            .iter()
            .map(|task| {
                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        task.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(format!("[{}]", task.status.label()), status_style(task.status)),
                    Span::raw("  "),
                    Span::styled(task.uuid.clone(), Style::default().fg(Color::DarkGray)),
                ])];
                if app.expanded.contains(&task.uuid) {
                    let description = task.description.as_deref().unwrap_or("-");
                    lines.push(Line::from(Span::styled(
                        format!("    {description}"),
                        Style::default().fg(Color::Gray),
                    )));
                }
                ListItem::new(lines)
            })
            .collect()
    };

    let title = format!("Tasks (filter: {})", app.filter_label());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(title),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}
