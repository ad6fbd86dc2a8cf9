/*
[INPUT]:  Form state, fields, and key events
[OUTPUT]: Form rendering output and form action results
[POS]:    TUI UI shared form framework (used by the form panel and modals)
[UPDATE]: When adding field kinds or changing focus/editing behavior
*/

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::runtime::border_style;

pub(in crate::tui) struct Form {
    pub(in crate::tui) title: String,
    pub(in crate::tui) focus_index: usize,
    pub(in crate::tui) fields: Vec<Field>,
    /// Context line rendered above the fields (uuid line, confirm question)
    pub(in crate::tui) notice: Option<String>,
    /// Inline error rendered below the fields
    pub(in crate::tui) error: Option<String>,
}

pub(in crate::tui) enum Field {
    TextInput {
        label: String,
        value: String,
    },
    Select {
        label: String,
        options: Vec<String>,
        selected: usize,
    },
    Button {
        label: String,
        action: FormAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui) enum FormAction {
    Submit,
    Reset,
    Cancel,
    None,
}

pub(in crate::tui) fn draw_form(frame: &mut ratatui::Frame, area: Rect, form: &Form) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(form.title.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(notice) = &form.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    for (index, field) in form.fields.iter().enumerate() {
        let content = match field {
            Field::TextInput { label, value } => format!("{label}: {value}"),
            Field::Select {
                label,
                options,
                selected,
            } => {
                let selected_value = options.get(*selected).map(String::as_str).unwrap_or("-");
                format!("{label}: {selected_value}")
            }
            Field::Button { label, .. } => format!("[{label}]"),
        };
        let style = if index == form.focus_index {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(content, style)));
    }

    if let Some(error) = &form.error {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(error.clone(), Style::default().fg(Color::Red)),
        ]));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

pub(in crate::tui) fn handle_form_key(form: &mut Form, key: KeyCode) -> FormAction {
    match key {
        KeyCode::Esc => FormAction::Cancel,
        KeyCode::Tab => {
            if !form.fields.is_empty() {
                form.focus_index = (form.focus_index + 1) % form.fields.len();
            }
            FormAction::None
        }
        KeyCode::BackTab => {
            if !form.fields.is_empty() {
                form.focus_index = (form.focus_index + form.fields.len() - 1) % form.fields.len();
            }
            FormAction::None
        }
        KeyCode::Up => {
            if let Some(Field::Select {
                selected, options, ..
            }) = form.fields.get_mut(form.focus_index)
            {
                if !options.is_empty() {
                    *selected = selected.saturating_sub(1);
                }
            }
            FormAction::None
        }
        KeyCode::Down => {
            if let Some(Field::Select {
                selected, options, ..
            }) = form.fields.get_mut(form.focus_index)
            {
                if *selected + 1 < options.len() {
                    *selected += 1;
                }
            }
            FormAction::None
        }
        KeyCode::Backspace => {
            if let Some(Field::TextInput { value, .. }) = form.fields.get_mut(form.focus_index) {
                value.pop();
            }
            FormAction::None
        }
        KeyCode::Char(ch) => {
            if let Some(Field::TextInput { value, .. }) = form.fields.get_mut(form.focus_index) {
                value.push(ch);
            }
            FormAction::None
        }
        KeyCode::Enter => {
            if let Some(Field::Button { action, .. }) = form.fields.get(form.focus_index) {
                return *action;
            }
            FormAction::None
        }
        _ => FormAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> Form {
        Form {
            title: "Sample".to_string(),
            focus_index: 0,
            fields: vec![
                Field::TextInput {
                    label: "Name".to_string(),
                    value: String::new(),
                },
                Field::Select {
                    label: "Kind".to_string(),
                    options: vec!["one".to_string(), "two".to_string()],
                    selected: 0,
                },
                Field::Button {
                    label: "Go".to_string(),
                    action: FormAction::Submit,
                },
            ],
            notice: None,
            error: None,
        }
    }

    #[test]
    fn typing_edits_focused_text_input() {
        let mut form = sample_form();
        handle_form_key(&mut form, KeyCode::Char('h'));
        handle_form_key(&mut form, KeyCode::Char('i'));
        handle_form_key(&mut form, KeyCode::Backspace);
        match &form.fields[0] {
            Field::TextInput { value, .. } => assert_eq!(value, "h"),
            _ => panic!("expected text input"),
        }
    }

    #[test]
    fn tab_cycles_focus_and_enter_fires_button() {
        let mut form = sample_form();
        assert_eq!(handle_form_key(&mut form, KeyCode::Tab), FormAction::None);
        assert_eq!(handle_form_key(&mut form, KeyCode::Tab), FormAction::None);
        assert_eq!(form.focus_index, 2);
        assert_eq!(handle_form_key(&mut form, KeyCode::Enter), FormAction::Submit);
    }

    #[test]
    fn select_cycles_within_bounds() {
        let mut form = sample_form();
        form.focus_index = 1;
        handle_form_key(&mut form, KeyCode::Down);
        handle_form_key(&mut form, KeyCode::Down);
        match &form.fields[1] {
            Field::Select { selected, .. } => assert_eq!(*selected, 1),
            _ => panic!("expected select"),
        }
        handle_form_key(&mut form, KeyCode::Up);
        handle_form_key(&mut form, KeyCode::Up);
        match &form.fields[1] {
            Field::Select { selected, .. } => assert_eq!(*selected, 0),
            _ => panic!("expected select"),
        }
    }

    #[test]
    fn escape_cancels() {
        let mut form = sample_form();
        assert_eq!(handle_form_key(&mut form, KeyCode::Esc), FormAction::Cancel);
    }
}
