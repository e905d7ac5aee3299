//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InputMode, PopupState, Tab};

/// Page size for PageUp/PageDown table navigation.
const PAGE_SIZE: usize = 10;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// The selected city changed; the app must rebuild the Locations rows.
    CityChanged,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    // Ctrl-C quits from anywhere, bypassing the confirm dialog.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    if state.popup.is_open() {
        return handle_popup(state, key);
    }

    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Filter => handle_filter_mode(state, key),
    }
}

/// Handles keys while a popup is open.
fn handle_popup(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match &mut state.popup {
        PopupState::QuitConfirm => match key.code {
            KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
                state.popup = PopupState::None;
                KeyAction::Quit
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                state.popup = PopupState::None;
                KeyAction::None
            }
            _ => KeyAction::None,
        },
        PopupState::Help { scroll } => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                *scroll = scroll.saturating_sub(1);
                KeyAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                *scroll = scroll.saturating_add(1);
                KeyAction::None
            }
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                state.popup = PopupState::None;
                KeyAction::None
            }
            _ => KeyAction::None,
        },
        PopupState::Detail { .. } => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                state.popup = PopupState::None;
                KeyAction::None
            }
            // Tab switching is blocked while the detail popup is open.
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('1'..='3') => {
                state.status_message = Some("Close popup (Esc) before switching tabs".to_string());
                KeyAction::None
            }
            _ => KeyAction::None,
        },
        PopupState::None => KeyAction::None,
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }

        // Tab navigation
        KeyCode::Tab => {
            state.switch_tab(state.current_tab.next());
            KeyAction::None
        }
        KeyCode::BackTab => {
            state.switch_tab(state.current_tab.prev());
            KeyAction::None
        }
        KeyCode::Char('1') => {
            state.switch_tab(Tab::About);
            KeyAction::None
        }
        KeyCode::Char('2') => {
            state.switch_tab(Tab::Locations);
            KeyAction::None
        }
        KeyCode::Char('3') => {
            state.switch_tab(Tab::Eda);
            KeyAction::None
        }

        _ if state.current_tab == Tab::Locations => handle_locations_keys(state, key),
        _ => KeyAction::None,
    }
}

/// Keys specific to the Locations tab.
fn handle_locations_keys(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // City selector
        KeyCode::Left | KeyCode::Char('h') => {
            state.prev_city();
            KeyAction::CityChanged
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.next_city();
            KeyAction::CityChanged
        }

        // Row navigation
        KeyCode::Up | KeyCode::Char('k') => {
            state.restaurant_table.select_up();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.restaurant_table.select_down();
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.restaurant_table.page_up(PAGE_SIZE);
            KeyAction::None
        }
        KeyCode::PageDown => {
            state.restaurant_table.page_down(PAGE_SIZE);
            KeyAction::None
        }
        KeyCode::Home => {
            state.restaurant_table.home();
            KeyAction::None
        }
        KeyCode::End => {
            state.restaurant_table.end();
            KeyAction::None
        }

        // Sorting
        KeyCode::Char('s') => {
            state.restaurant_table.next_sort_column();
            KeyAction::None
        }
        KeyCode::Char('S') => {
            state.restaurant_table.toggle_sort_direction();
            KeyAction::None
        }

        // Filter mode
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Filter;
            state.filter_input = state
                .restaurant_table
                .filter
                .clone()
                .unwrap_or_default();
            KeyAction::None
        }

        // Detail popup for the selected restaurant
        KeyCode::Enter => {
            if let Some(row) = state.restaurant_table.selected_item() {
                state.popup = PopupState::Detail {
                    dataset_index: row.dataset_index,
                };
            }
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

/// Handles keys in filter editing mode (incremental).
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.filter_input.clear();
            state.restaurant_table.set_filter(None);
            KeyAction::None
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
            KeyAction::None
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            apply_filter(state);
            KeyAction::None
        }
        KeyCode::Char(c) => {
            state.filter_input.push(c);
            apply_filter(state);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn apply_filter(state: &mut AppState) {
    let filter = if state.filter_input.is_empty() {
        None
    } else {
        Some(state.filter_input.clone())
    };
    state.restaurant_table.set_filter(filter);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Restaurant};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_dataset() -> Dataset {
        let restaurant = |name: &str, city: &str, cuisine: &str| Restaurant {
            name: name.to_string(),
            city: city.to_string(),
            cuisine: cuisine.to_string(),
            country: "France".to_string(),
            rating: 4.0,
            avg_meal_price: 30.0,
            latitude: 48.8,
            longitude: 2.3,
        };
        Dataset::from_rows(vec![
            restaurant("Le Bistrot", "Paris", "French"),
            restaurant("Sushi Gare", "Paris", "Japanese"),
            restaurant("Da Enzo", "Rome", "Italian"),
        ])
    }

    fn state_on_locations() -> (AppState, Dataset) {
        let dataset = sample_dataset();
        let mut state = AppState::new(dataset.cities().len());
        state.switch_tab(Tab::Locations);
        state.refresh_city_rows(&dataset);
        (state, dataset)
    }

    #[test]
    fn number_keys_switch_tabs() {
        let mut state = AppState::new(2);
        assert_eq!(state.current_tab, Tab::About);

        handle_key(&mut state, key(KeyCode::Char('2')));
        assert_eq!(state.current_tab, Tab::Locations);
        handle_key(&mut state, key(KeyCode::Char('3')));
        assert_eq!(state.current_tab, Tab::Eda);
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::About);
        handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.current_tab, Tab::Eda);
    }

    #[test]
    fn unrelated_keys_leave_tab_unchanged() {
        let mut state = AppState::new(2);
        handle_key(&mut state, key(KeyCode::Char('x')));
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.current_tab, Tab::About);
    }

    #[test]
    fn city_cycling_reports_change() {
        let (mut state, _dataset) = state_on_locations();
        let action = handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(action, KeyAction::CityChanged);
        assert_eq!(state.city_index, 1);

        let action = handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(action, KeyAction::CityChanged);
        assert_eq!(state.city_index, 0);
    }

    #[test]
    fn quit_requires_confirmation() {
        let mut state = AppState::new(1);
        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);

        // Cancel
        let action = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::None);

        // Confirm
        handle_key(&mut state, key(KeyCode::Char('q')));
        let action = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(action, KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_quits_immediately() {
        let mut state = AppState::new(1);
        let action = handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(action, KeyAction::Quit);
    }

    #[test]
    fn filter_mode_edits_table_filter_incrementally() {
        let (mut state, _dataset) = state_on_locations();
        handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.input_mode, InputMode::Filter);

        for c in "sushi".chars() {
            handle_key(&mut state, key(KeyCode::Char(c)));
        }
        assert_eq!(state.restaurant_table.filtered_items().len(), 1);

        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.restaurant_table.filter.as_deref(), Some("sushi"));
    }

    #[test]
    fn filter_escape_clears_filter() {
        let (mut state, _dataset) = state_on_locations();
        handle_key(&mut state, key(KeyCode::Char('/')));
        handle_key(&mut state, key(KeyCode::Char('z')));
        assert_eq!(state.restaurant_table.filtered_items().len(), 0);

        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.restaurant_table.filter, None);
        assert_eq!(state.restaurant_table.filtered_items().len(), 2);
    }

    #[test]
    fn enter_opens_detail_and_blocks_tab_switch() {
        let (mut state, _dataset) = state_on_locations();
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(matches!(state.popup, PopupState::Detail { .. }));

        handle_key(&mut state, key(KeyCode::Char('3')));
        assert_eq!(state.current_tab, Tab::Locations);
        assert!(state.status_message.is_some());

        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn help_popup_toggles_and_scrolls() {
        let mut state = AppState::new(1);
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::Help { scroll: 0 });

        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.popup, PopupState::Help { scroll: 1 });
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.popup, PopupState::Help { scroll: 0 });

        handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::None);
    }
}
