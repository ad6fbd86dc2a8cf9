/*
[INPUT]:  Modal state and key events
[OUTPUT]: Modal overlay rendering and modal action results
[POS]:    TUI UI modal module root
[UPDATE]: When adding new modal kinds
*/

mod confirm_delete;
mod quick_lookup;

pub(in crate::tui) use confirm_delete::ConfirmDeleteModal;
pub(in crate::tui) use quick_lookup::QuickLookupModal;

use ratatui::layout::Rect;
use ratatui::widgets::Clear;

use super::form::{Form, draw_form};

pub(in crate::tui) fn draw_modal(frame: &mut ratatui::Frame, area: Rect, form: &Form) {
    frame.render_widget(Clear, area);
    draw_form(frame, area, form);
}
