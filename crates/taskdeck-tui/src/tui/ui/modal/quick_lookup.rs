/*
[INPUT]:  User-entered task identifier and key events
[OUTPUT]: Quick lookup modal state and rendering form
[POS]:    TUI UI modal for fetch-by-UUID
[UPDATE]: When lookup input handling changes
*/

use crossterm::event::KeyCode;

use crate::tui::ui::form::{Field, Form, FormAction, handle_form_key};

pub(in crate::tui) struct QuickLookupModal {
    uuid_input: String,
    focus_index: usize,
    error: Option<String>,
}

impl QuickLookupModal {
    pub(in crate::tui) fn new() -> Self {
        Self {
            uuid_input: String::new(),
            focus_index: 0,
            error: None,
        }
    }

    pub(in crate::tui) fn to_form(&self) -> Form {
        Form {
            title: String::from("Find Task"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("UUID"),
                    value: self.uuid_input.clone(),
                },
                Field::Button {
                    label: String::from("Fetch"),
                    action: FormAction::Submit,
                },
                Field::Button {
                    label: String::from("Cancel"),
                    action: FormAction::Cancel,
                },
            ],
            notice: Some(String::from("Loads the task into the form, locked until reset")),
            error: self.error.clone(),
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> FormAction {
        let mut form = self.to_form();
        let action = handle_form_key(&mut form, key);
        self.apply_form(&form);
        // Submitting from the input field is the common path
        if action == FormAction::None && key == KeyCode::Enter && self.focus_index == 0 {
            return FormAction::Submit;
        }
        action
    }

    pub(in crate::tui) fn uuid_input(&self) -> &str {
        self.uuid_input.as_str()
    }

    pub(in crate::tui) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    fn apply_form(&mut self, form: &Form) {
        self.focus_index = form.focus_index;
        if let Some(Field::TextInput { value, .. }) = form.fields.first() {
            self.uuid_input = value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_fills_input() {
        let mut modal = QuickLookupModal::new();
        for ch in "ab-12".chars() {
            modal.handle_key(KeyCode::Char(ch));
        }
        assert_eq!(modal.uuid_input(), "ab-12");
    }

    #[test]
    fn enter_on_input_submits() {
        let mut modal = QuickLookupModal::new();
        modal.handle_key(KeyCode::Char('x'));
        assert_eq!(modal.handle_key(KeyCode::Enter), FormAction::Submit);
    }

    #[test]
    fn escape_cancels() {
        let mut modal = QuickLookupModal::new();
        assert_eq!(modal.handle_key(KeyCode::Esc), FormAction::Cancel);
    }
}
