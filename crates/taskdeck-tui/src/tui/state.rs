/*
[INPUT]:  AppState with task client, form panel, and list selections
[OUTPUT]: AppState operations that talk to the task service
[POS]:    TUI state refresh and submit logic
[UPDATE]: When list refresh, save, lookup, or delete flows change
*/

use anyhow::Result;
use uuid::Uuid;

use taskdeck_client::{CreateTask, UpdateTask};

use super::app::{AppState, Tab};

/// What a quick lookup attempt did. Failures stay inline in the modal.
pub(super) enum LookupOutcome {
    Loaded,
    EmptyInput,
    Failed(String),
}

impl AppState {
    /// Fetch the task list with the current filter and clamp the selection.
    pub(super) async fn refresh_tasks(&mut self) -> Result<()> {
        let tasks = self.client.list_tasks(self.filter).await?;
        self.tasks = tasks;
        if self.tasks.is_empty() {
            self.list_state.select(None);
        } else if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= self.tasks.len() {
                self.list_state
                    .select(Some(self.tasks.len().saturating_sub(1)));
            }
        }
        Ok(())
    }

    /// Save the form: create when no uuid is present, update otherwise.
    /// Validation failures set the inline form error and never reach the
    /// network. Network errors bubble up to the status line.
    pub(super) async fn submit_form(&mut self) -> Result<()> {
        let title = self.form.title_trimmed();
        if title.is_empty() {
            self.form.set_error("title is required");
            return Ok(());
        }
        if self.form.uuid().is_some() && self.form.is_locked() {
            self.form.set_error("saving is locked; reset the form first");
            return Ok(());
        }
        self.form.clear_error();

        let description = self.form.description_trimmed();
        let status = self.form.status();

        let saved = match self.form.uuid().map(str::to_string) {
            Some(uuid) => {
                let req = UpdateTask {
                    title: Some(title),
                    description,
                    status: Some(status),
                };
                let task = self.client.update_task(&uuid, &req).await?;
                tracing::info!(uuid = %task.uuid, "task updated");
                task
            }
            None => {
                let req = CreateTask {
                    title,
                    description,
                    status,
                };
                let task = self.client.create_task(&req).await?;
                tracing::info!(uuid = %task.uuid, "task created");
                task
            }
        };

        self.form.clear();
        self.status_message = format!("task saved: {}", saved.uuid);
        if self.current_tab == Tab::List {
            self.refresh_tasks().await?;
        }
        Ok(())
    }

    /// Fetch a task by identifier and load it into the form, locked.
    /// On any failure the form is left untouched and the lock released.
    pub(super) async fn quick_lookup(&mut self, input: &str) -> LookupOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return LookupOutcome::EmptyInput;
        }
        if Uuid::parse_str(trimmed).is_err() {
            return LookupOutcome::Failed("not a valid UUID".to_string());
        }

        self.form.set_locked(true);
        match self.client.get_task(trimmed).await {
            Ok(task) => {
                self.form.load(&task);
                self.form.set_locked(true);
                self.current_tab = Tab::Form;
                self.status_message = format!("loaded task: {}", task.uuid);
                LookupOutcome::Loaded
            }
            Err(err) => {
                self.form.set_locked(false);
                tracing::warn!(uuid = %trimmed, error = %err, "quick lookup failed");
                let message = if err.is_not_found() {
                    "no task with this UUID".to_string()
                } else {
                    err.to_string()
                };
                LookupOutcome::Failed(message)
            }
        }
    }

    /// Delete a task. The list is refreshed only after the service confirms
    /// with 204; on error the rows stay as they were.
    pub(super) async fn delete_task(&mut self, uuid: &str) -> Result<()> {
        self.client.delete_task(uuid).await?;
        tracing::info!(uuid = %uuid, "task deleted");
        self.expanded.remove(uuid);
        self.status_message = format!("task deleted: {uuid}");
        self.refresh_tasks().await?;
        Ok(())
    }
}
