//! Application state management.

use ratatui::widgets::TableState as RatatuiTableState;

use crate::dataset::Dataset;

// Re-export table and models types so `use super::state::*` covers them.
pub use super::models::*;
pub use super::table::*;

/// Available tabs in the TUI. The whole application is a single-state
/// machine over these pages, with key input as the only transition source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    About,
    Locations,
    Eda,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::About, Tab::Locations, Tab::Eda]
    }

    /// Returns the display name of the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::About => "About Us",
            Tab::Locations => "Locations",
            Tab::Eda => "EDA",
        }
    }

    /// Returns the next tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::About => Tab::Locations,
            Tab::Locations => Tab::Eda,
            Tab::Eda => Tab::About,
        }
    }

    /// Returns the previous tab.
    pub fn prev(&self) -> Tab {
        match self {
            Tab::About => Tab::Eda,
            Tab::Locations => Tab::About,
            Tab::Eda => Tab::Locations,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Incremental filter editing on the Locations table (`/`).
    Filter,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Restaurant detail popup (Locations tab, Enter key).
    Detail { dataset_index: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Main application state.
///
/// Explicit and request-scoped: render functions receive it by reference;
/// nothing is process-global besides the dataset itself.
#[derive(Debug)]
pub struct AppState {
    /// Current active tab.
    pub current_tab: Tab,
    /// Input mode.
    pub input_mode: InputMode,
    /// Filter input buffer.
    pub filter_input: String,
    /// Index into the dataset's sorted city list.
    pub city_index: usize,
    /// Number of distinct cities (for wraparound cycling).
    pub city_count: usize,
    /// Restaurant table for the selected city.
    pub restaurant_table: TableState<RestaurantRow>,
    /// Active popup state.
    pub popup: PopupState,
    /// Temporary status message shown in the header (e.g., why an action
    /// was blocked).
    pub status_message: Option<String>,
    /// Ratatui table state for the Locations table (enables auto-scrolling).
    pub locations_ratatui_state: RatatuiTableState,
}

impl AppState {
    pub fn new(city_count: usize) -> Self {
        Self {
            current_tab: Tab::About,
            input_mode: InputMode::Normal,
            filter_input: String::new(),
            city_index: 0,
            city_count,
            restaurant_table: TableState::new(),
            popup: PopupState::None,
            status_message: None,
            locations_ratatui_state: RatatuiTableState::default(),
        }
    }

    /// Switches to a new tab. Switching to the current tab is a no-op.
    pub fn switch_tab(&mut self, new_tab: Tab) {
        if self.current_tab != new_tab {
            self.current_tab = new_tab;
            self.status_message = None;
        }
    }

    /// Cycles to the next city, wrapping around.
    pub fn next_city(&mut self) {
        if self.city_count > 0 {
            self.city_index = (self.city_index + 1) % self.city_count;
        }
    }

    /// Cycles to the previous city, wrapping around.
    pub fn prev_city(&mut self) {
        if self.city_count > 0 {
            self.city_index = (self.city_index + self.city_count - 1) % self.city_count;
        }
    }

    /// Name of the currently selected city.
    pub fn selected_city<'a>(&self, dataset: &'a Dataset) -> &'a str {
        dataset
            .cities()
            .get(self.city_index)
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Rebuilds the Locations table rows for the currently selected city.
    pub fn refresh_city_rows(&mut self, dataset: &Dataset) {
        let city = self.selected_city(dataset).to_string();
        let rows: Vec<RestaurantRow> = dataset
            .restaurants()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.city == city)
            .map(|(i, r)| RestaurantRow::from_restaurant(i, r))
            .collect();
        self.restaurant_table.update(rows);
        self.restaurant_table.tracked_id = None;
        self.restaurant_table.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Restaurant};

    fn restaurant(name: &str, city: &str) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            city: city.to_string(),
            cuisine: "Fusion".to_string(),
            country: "Nowhere".to_string(),
            rating: 4.0,
            avg_meal_price: 20.0,
            latitude: 10.0,
            longitude: 20.0,
        }
    }

    fn sample() -> Dataset {
        Dataset::from_rows(vec![
            restaurant("A", "Paris"),
            restaurant("B", "Rome"),
            restaurant("C", "Paris"),
            restaurant("D", "Tokyo"),
        ])
    }

    #[test]
    fn starts_on_about_with_no_popup() {
        let state = AppState::new(3);
        assert_eq!(state.current_tab, Tab::About);
        assert_eq!(state.popup, PopupState::None);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn switch_to_same_tab_is_noop() {
        let mut state = AppState::new(3);
        state.status_message = Some("kept".to_string());
        state.switch_tab(Tab::About);
        assert_eq!(state.current_tab, Tab::About);
        assert_eq!(state.status_message.as_deref(), Some("kept"));

        state.switch_tab(Tab::Eda);
        assert_eq!(state.current_tab, Tab::Eda);
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn tab_cycle_covers_all_tabs() {
        let mut tab = Tab::default();
        for _ in 0..Tab::all().len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::default());
        assert_eq!(Tab::About.prev(), Tab::Eda);
    }

    #[test]
    fn city_cycling_wraps_both_directions() {
        let mut state = AppState::new(3);
        state.prev_city();
        assert_eq!(state.city_index, 2);
        state.next_city();
        assert_eq!(state.city_index, 0);
        state.next_city();
        state.next_city();
        state.next_city();
        assert_eq!(state.city_index, 0);
    }

    #[test]
    fn refresh_city_rows_filters_to_selected_city() {
        let dataset = sample();
        let mut state = AppState::new(dataset.cities().len());

        // Cities sorted: Paris, Rome, Tokyo.
        assert_eq!(state.selected_city(&dataset), "Paris");
        state.refresh_city_rows(&dataset);
        assert_eq!(state.restaurant_table.items.len(), 2);
        assert!(state.restaurant_table.items.iter().all(|r| r.city == "Paris"));

        state.next_city();
        state.refresh_city_rows(&dataset);
        assert_eq!(state.selected_city(&dataset), "Rome");
        assert_eq!(state.restaurant_table.items.len(), 1);
    }
}
