/*
[INPUT]:  Crossterm key events and active modal state
[OUTPUT]: TUI event routing
[POS]:    TUI key handling per tab and modal
[UPDATE]: When hotkeys or modal flows change
*/

use crossterm::event::KeyCode;

use super::app::{ActiveModal, AppState, Tab};
use super::state::LookupOutcome;
use super::ui::FormAction;

enum ModalSubmit {
    QuickLookup { input: String },
    ConfirmDelete { uuid: String },
}

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) async fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    if app.active_modal.is_some() {
        return handle_modal_key_event(app, key).await;
    }

    match app.current_tab {
        Tab::Form => handle_form_tab_key(app, key).await,
        Tab::List => handle_list_tab_key(app, key).await,
        Tab::Logs => handle_logs_tab_key(app, key).await,
    }
}

/// On the form tab every printable key belongs to the fields, so tab
/// switching is reduced to Esc (back to the list).
async fn handle_form_tab_key(app: &mut AppState, key: KeyCode) -> bool {
    match app.form.handle_key(key) {
        FormAction::Submit => {
            if let Err(err) = app.submit_form().await {
                app.status_message = format!("save failed: {err}");
            }
        }
        FormAction::Reset => {
            app.form.clear();
            app.status_message = "form reset".to_string();
        }
        FormAction::Cancel => app.switch_to(Tab::List).await,
        FormAction::None => {}
    }
    false
}

async fn handle_list_tab_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('r') => {
            if let Err(err) = app.refresh_tasks().await {
                app.status_message = format!("refresh tasks failed: {err}");
            }
        }
        KeyCode::Char('n') => app.new_task(),
        KeyCode::Char('e') => app.edit_selected(),
        KeyCode::Char('d') => app.open_confirm_delete(),
        KeyCode::Char('g') => app.open_quick_lookup(),
        KeyCode::Char('f') => app.cycle_filter().await,
        KeyCode::Char('1') => app.switch_to(Tab::Form).await,
        KeyCode::Char('2') => app.switch_to(Tab::List).await,
        KeyCode::Char('3') => app.switch_to(Tab::Logs).await,
        KeyCode::Tab => {
            let next = app.next_tab_target();
            app.switch_to(next).await;
        }
        KeyCode::Enter => app.toggle_selected_details(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        _ => {}
    }
    false
}

async fn handle_logs_tab_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('1') => app.switch_to(Tab::Form).await,
        KeyCode::Char('2') => app.switch_to(Tab::List).await,
        KeyCode::Char('3') => app.switch_to(Tab::Logs).await,
        KeyCode::Tab => {
            let next = app.next_tab_target();
            app.switch_to(next).await;
        }
        _ => {}
    }
    false
}

async fn handle_modal_key_event(app: &mut AppState, key: KeyCode) -> bool {
    let (action, submit) = match app.active_modal_mut() {
        Some(ActiveModal::QuickLookup(modal)) => {
            let action = modal.handle_key(key);
            let submit = (action == FormAction::Submit).then(|| ModalSubmit::QuickLookup {
                input: modal.uuid_input().to_string(),
            });
            (action, submit)
        }
        Some(ActiveModal::ConfirmDelete(modal)) => {
            let action = modal.handle_key(key);
            let submit = (action == FormAction::Submit).then(|| ModalSubmit::ConfirmDelete {
                uuid: modal.uuid().to_string(),
            });
            (action, submit)
        }
        None => return false,
    };

    if matches!(action, FormAction::Cancel | FormAction::Reset) {
        app.close_modal();
        return false;
    }

    if let Some(submit) = submit {
        match submit {
            ModalSubmit::QuickLookup { input } => match app.quick_lookup(&input).await {
                LookupOutcome::Loaded => app.close_modal(),
                LookupOutcome::EmptyInput => {}
                LookupOutcome::Failed(message) => {
                    if let Some(ActiveModal::QuickLookup(modal)) = app.active_modal_mut() {
                        modal.set_error(message);
                    }
                }
            },
            ModalSubmit::ConfirmDelete { uuid } => {
                if let Err(err) = app.delete_task(&uuid).await {
                    app.status_message = format!("delete failed: {err}");
                }
                app.close_modal();
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crossterm::event::KeyCode;
    use taskdeck_client::TaskClient;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::handle_key_event;
    use crate::tui::app::{ActiveModal, AppState, Tab};
    use crate::tui::runtime::LogBuffer;

    fn test_app(server: &MockServer) -> AppState {
        let client = TaskClient::with_base_url(&server.uri()).expect("client init");
        let buffer = Arc::new(Mutex::new(LogBuffer::new(100)));
        AppState::new(client, buffer)
    }

    #[tokio::test]
    async fn quit_only_outside_the_form_tab() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw("[]", "application/json"),
            )
            .mount(&server)
            .await;

        let mut app = test_app(&server);
        assert!(
            !handle_key_event(&mut app, KeyCode::Char('q')).await,
            "on the form tab 'q' is text input"
        );
        assert_eq!(app.form.title_trimmed(), "q");

        app.switch_to(Tab::List).await;
        assert!(handle_key_event(&mut app, KeyCode::Char('q')).await);
    }

    #[tokio::test]
    async fn lookup_hotkey_opens_the_modal_and_esc_closes_it() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw("[]", "application/json"),
            )
            .mount(&server)
            .await;

        let mut app = test_app(&server);
        app.switch_to(Tab::List).await;

        handle_key_event(&mut app, KeyCode::Char('g')).await;
        assert!(matches!(
            app.active_modal,
            Some(ActiveModal::QuickLookup(_))
        ));

        handle_key_event(&mut app, KeyCode::Esc).await;
        assert!(app.active_modal.is_none());
    }

    #[tokio::test]
    async fn empty_lookup_submit_keeps_the_modal_open() {
        let server = MockServer::start().await;
        let mut app = test_app(&server);
        app.open_quick_lookup();

        handle_key_event(&mut app, KeyCode::Enter).await;
        assert!(
            matches!(app.active_modal, Some(ActiveModal::QuickLookup(_))),
            "empty input is a no-op"
        );
    }
}
