//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::dataset::Dataset;

use super::state::{AppState, PopupState, Tab};
use super::widgets::{
    render_about, render_detail, render_eda, render_footer, render_header, render_help,
    render_locations, render_quit_confirm,
};

/// Main render function: one synchronous pass producing the visible page
/// from current state.
pub fn render(frame: &mut Frame, state: &mut AppState, dataset: &Dataset) {
    let area = frame.area();

    // Main layout: header, content, key hint footer
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(10),   // Content area
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_content(frame, chunks[1], state, dataset);
    render_footer(frame, chunks[2], state);

    // Popups overlay everything and are rendered last.
    let current_tab = state.current_tab;
    match &mut state.popup {
        PopupState::None => {}
        PopupState::Help { scroll } => render_help(frame, area, current_tab, scroll),
        PopupState::Detail { dataset_index } => {
            render_detail(frame, area, dataset, *dataset_index);
        }
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
    }
}

/// Renders content based on current tab.
fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState, dataset: &Dataset) {
    match state.current_tab {
        Tab::About => render_about(frame, area, dataset),
        Tab::Locations => render_locations(frame, area, state, dataset),
        Tab::Eda => render_eda(frame, area, dataset),
    }
}
