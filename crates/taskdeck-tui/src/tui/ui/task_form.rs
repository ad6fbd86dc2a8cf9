/*
[INPUT]:  Task data, key events, and save-lock state
[OUTPUT]: Task form panel state and rendering
[POS]:    TUI UI task create/edit form panel
[UPDATE]: When form fields or validation rules change
*/

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use taskdeck_client::{Task, TaskStatus};

use super::form::{Field, Form, FormAction, draw_form, handle_form_key};

pub(in crate::tui) struct TaskFormPanel {
    uuid: Option<String>,
    title: String,
    description: String,
    status_index: usize,
    focus_index: usize,
    locked: bool,
    error: Option<String>,
}

impl TaskFormPanel {
    pub(in crate::tui) fn new() -> Self {
        Self {
            uuid: None,
            title: String::new(),
            description: String::new(),
            status_index: 0,
            focus_index: 0,
            locked: false,
            error: None,
        }
    }

    /// Populate the form from an existing task. The caller decides whether
    /// the save-lock applies (quick lookup locks, edit does not).
    pub(in crate::tui) fn load(&mut self, task: &Task) {
        self.uuid = Some(task.uuid.clone());
        self.title = task.title.clone();
        self.description = task.description.clone().unwrap_or_default();
        self.status_index = TaskStatus::ALL
            .iter()
            .position(|status| *status == task.status)
            .unwrap_or(0);
        self.focus_index = 0;
        self.error = None;
    }

    /// Clear every field back to defaults and release the save-lock.
    pub(in crate::tui) fn clear(&mut self) {
        *self = Self::new();
    }

    pub(in crate::tui) fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    pub(in crate::tui) fn title_trimmed(&self) -> String {
        self.title.trim().to_string()
    }

    pub(in crate::tui) fn description_trimmed(&self) -> Option<String> {
        let trimmed = self.description.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub(in crate::tui) fn status(&self) -> TaskStatus {
        TaskStatus::ALL
            .get(self.status_index)
            .copied()
            .unwrap_or_default()
    }

    pub(in crate::tui) fn is_locked(&self) -> bool {
        self.locked
    }

    pub(in crate::tui) fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub(in crate::tui) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub(in crate::tui) fn clear_error(&mut self) {
        self.error = None;
    }

    #[cfg(test)]
    pub(in crate::tui) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> FormAction {
        let mut form = self.to_form();
        let action = handle_form_key(&mut form, key);
        self.apply_form(&form);
        action
    }

    pub(in crate::tui) fn to_form(&self) -> Form {
        let notice = match (&self.uuid, self.locked) {
            (Some(uuid), true) => Some(format!("UUID: {uuid}  (locked; reset to edit)")),
            (Some(uuid), false) => Some(format!("UUID: {uuid}")),
            (None, _) => None,
        };

        Form {
            title: if self.uuid.is_some() {
                String::from("Edit Task")
            } else {
                String::from("New Task")
            },
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Title"),
                    value: self.title.clone(),
                },
                Field::TextInput {
                    label: String::from("Description"),
                    value: self.description.clone(),
                },
                Field::Select {
                    label: String::from("Status"),
                    options: TaskStatus::ALL
                        .iter()
                        .map(|status| status.label().to_string())
                        .collect(),
                    selected: self.status_index,
                },
                Field::Button {
                    label: String::from("Save"),
                    action: FormAction::Submit,
                },
                Field::Button {
                    label: String::from("Reset"),
                    action: FormAction::Reset,
                },
            ],
            notice,
            error: self.error.clone(),
        }
    }

    fn apply_form(&mut self, form: &Form) {
        self.focus_index = form.focus_index;
        if let Some(Field::TextInput { value, .. }) = form.fields.first() {
            self.title = value.clone();
        }
        if let Some(Field::TextInput { value, .. }) = form.fields.get(1) {
            self.description = value.clone();
        }
        if let Some(Field::Select { selected, .. }) = form.fields.get(2) {
            self.status_index = *selected;
        }
    }
}

pub(in crate::tui) fn draw_task_form(
    frame: &mut ratatui::Frame,
    area: Rect,
    panel: &TaskFormPanel,
) {
    let form = panel.to_form();
    draw_form(frame, area, &form);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            uuid: "0c2f6d88-1111-4222-8333-444455556666".to_string(),
            title: "Write minutes".to_string(),
            description: Some("from the weekly call".to_string()),
            status: TaskStatus::InProgress,
        }
    }

    #[test]
    fn load_then_clear_round_trip() {
        let mut panel = TaskFormPanel::new();
        panel.load(&sample_task());
        panel.set_locked(true);

        assert_eq!(panel.uuid(), Some("0c2f6d88-1111-4222-8333-444455556666"));
        assert_eq!(panel.title_trimmed(), "Write minutes");
        assert_eq!(panel.status(), TaskStatus::InProgress);
        assert!(panel.is_locked());

        panel.clear();
        assert_eq!(panel.uuid(), None);
        assert_eq!(panel.title_trimmed(), "");
        assert_eq!(panel.status(), TaskStatus::Created);
        assert!(!panel.is_locked());
    }

    #[test]
    fn typing_edits_title() {
        let mut panel = TaskFormPanel::new();
        panel.handle_key(KeyCode::Char('a'));
        panel.handle_key(KeyCode::Char('b'));
        assert_eq!(panel.title_trimmed(), "ab");
    }

    #[test]
    fn blank_description_maps_to_none() {
        let mut panel = TaskFormPanel::new();
        panel.handle_key(KeyCode::Tab);
        panel.handle_key(KeyCode::Char(' '));
        assert_eq!(panel.description_trimmed(), None);
    }

    #[test]
    fn save_button_emits_submit() {
        let mut panel = TaskFormPanel::new();
        for _ in 0..3 {
            panel.handle_key(KeyCode::Tab);
        }
        assert_eq!(panel.handle_key(KeyCode::Enter), FormAction::Submit);
    }
}
