/*
[INPUT]:  Task client, key events, and log buffer
[OUTPUT]: Ratatui-based TUI for the task form, list, and logs
[POS]:    TUI module root
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod state;
mod terminal;
mod ui;

pub use runtime::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};
