/*
[INPUT]:  Selected task summary and key events
[OUTPUT]: Delete confirmation modal state and rendering form
[POS]:    TUI UI modal for delete confirmation
[UPDATE]: When the delete flow changes
*/

use crossterm::event::KeyCode;

use crate::tui::ui::form::{Field, Form, FormAction, handle_form_key};

pub(in crate::tui) struct ConfirmDeleteModal {
    uuid: String,
    title: String,
    focus_index: usize,
}

impl ConfirmDeleteModal {
    pub(in crate::tui) fn new(uuid: String, title: String) -> Self {
        Self {
            uuid,
            title,
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn to_form(&self) -> Form {
        Form {
            title: String::from("Delete Task"),
            focus_index: self.focus_index,
            fields: vec![
                Field::Button {
                    label: String::from("Delete"),
                    action: FormAction::Submit,
                },
                Field::Button {
                    label: String::from("Cancel"),
                    action: FormAction::Cancel,
                },
            ],
            notice: Some(format!("Delete \"{}\"? This cannot be undone.", self.title)),
            error: None,
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> FormAction {
        let mut form = self.to_form();
        let action = handle_form_key(&mut form, key);
        self.focus_index = form.focus_index;
        action
    }

    pub(in crate::tui) fn uuid(&self) -> &str {
        self.uuid.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_on_default_focus_confirms() {
        let mut modal = ConfirmDeleteModal::new("u-1".to_string(), "Old task".to_string());
        assert_eq!(modal.handle_key(KeyCode::Enter), FormAction::Submit);
    }

    #[test]
    fn tab_reaches_cancel() {
        let mut modal = ConfirmDeleteModal::new("u-1".to_string(), "Old task".to_string());
        modal.handle_key(KeyCode::Tab);
        assert_eq!(modal.handle_key(KeyCode::Enter), FormAction::Cancel);
    }
}
