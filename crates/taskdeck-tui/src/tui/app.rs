/*
[INPUT]:  Task client, log buffer, and user selections
[OUTPUT]: AppState helpers for TUI rendering and navigation
[POS]:    TUI app state
[UPDATE]: When tabs, modals, or selection behavior change
*/

use std::collections::HashSet;

use ratatui::widgets::ListState;
use taskdeck_client::{Task, TaskClient, TaskStatus};

use crate::tui::LogBufferHandle;
use crate::tui::ui::TaskFormPanel;
use crate::tui::ui::modal::{ConfirmDeleteModal, QuickLookupModal};

pub(super) enum ActiveModal {
    QuickLookup(QuickLookupModal),
    ConfirmDelete(ConfirmDeleteModal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Form,
    List,
    Logs,
}

pub(super) struct AppState {
    pub(super) client: TaskClient,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) tasks: Vec<Task>,
    pub(super) list_state: ListState,
    pub(super) expanded: HashSet<String>,
    pub(super) filter: Option<TaskStatus>,
    pub(super) form: TaskFormPanel,
    pub(super) current_tab: Tab,
    pub(super) status_message: String,
    pub(super) active_modal: Option<ActiveModal>,
}

impl AppState {
    pub(super) fn new(client: TaskClient, log_buffer: LogBufferHandle) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            client,
            log_buffer,
            tasks: Vec::new(),
            list_state,
            expanded: HashSet::new(),
            filter: None,
            form: TaskFormPanel::new(),
            current_tab: Tab::Form,
            status_message: "Ready".to_string(),
            active_modal: None,
        }
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        let idx = self.list_state.selected().unwrap_or(0);
        self.tasks.get(idx)
    }

    /// Change the visible tab. Entering the List tab refetches the list as a
    /// side effect; other tabs never touch the network.
    pub(super) async fn switch_to(&mut self, tab: Tab) {
        self.current_tab = tab;
        if tab == Tab::List {
            if let Err(err) = self.refresh_tasks().await {
                self.status_message = format!("refresh tasks failed: {err}");
            }
        }
    }

    pub(super) fn next_tab_target(&self) -> Tab {
        match self.current_tab {
            Tab::Form => Tab::List,
            Tab::List => Tab::Logs,
            Tab::Logs => Tab::Form,
        }
    }

    pub(super) fn open_quick_lookup(&mut self) {
        self.active_modal = Some(ActiveModal::QuickLookup(QuickLookupModal::new()));
    }

    pub(super) fn open_confirm_delete(&mut self) {
        match self.selected_task() {
            Some(task) => {
                self.active_modal = Some(ActiveModal::ConfirmDelete(ConfirmDeleteModal::new(
                    task.uuid.clone(),
                    task.title.clone(),
                )));
            }
            None => self.status_message = "no task selected".to_string(),
        }
    }

    pub(super) fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub(super) fn active_modal_mut(&mut self) -> Option<&mut ActiveModal> {
        self.active_modal.as_mut()
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        if self.tasks.is_empty() {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (self.tasks.len() - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    pub(super) fn toggle_selected_details(&mut self) {
        let Some(uuid) = self.selected_task().map(|task| task.uuid.clone()) else {
            return;
        };
        if !self.expanded.remove(&uuid) {
            self.expanded.insert(uuid);
        }
    }

    pub(super) async fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            None => Some(TaskStatus::Created),
            Some(TaskStatus::Created) => Some(TaskStatus::InProgress),
            Some(TaskStatus::InProgress) => Some(TaskStatus::Done),
            Some(TaskStatus::Done) => None,
        };
        if let Err(err) = self.refresh_tasks().await {
            self.status_message = format!("refresh tasks failed: {err}");
        }
    }

    pub(super) fn filter_label(&self) -> &'static str {
        match self.filter {
            None => "all",
            Some(status) => status.label(),
        }
    }

    /// Load the selected task into the form for editing and show the form.
    pub(super) fn edit_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            self.status_message = "no task selected".to_string();
            return;
        };
        self.form.load(&task);
        self.form.set_locked(false);
        self.current_tab = Tab::Form;
        self.status_message = format!("editing task: {}", task.uuid);
    }

    /// Clear the form for a fresh task and show it.
    pub(super) fn new_task(&mut self) {
        self.form.clear();
        self.current_tab = Tab::Form;
        self.status_message = "new task".to_string();
    }
}
