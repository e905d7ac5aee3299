//! Generic table widget state: sorting, filtering, selection tracking.

/// Sort key types for table columns.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Float(f64),
    String(String),
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (SortKey::Float(a), SortKey::Float(b)) => a.partial_cmp(b),
            (SortKey::String(a), SortKey::String(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Trait for table row items.
pub trait TableRow: Clone {
    /// Unique identifier for selection tracking across sort/filter changes.
    fn id(&self) -> u64;

    /// Number of columns.
    fn column_count() -> usize;

    /// Column headers.
    fn headers() -> Vec<&'static str>;

    /// Cell values as strings.
    fn cells(&self) -> Vec<String>;

    /// Sort key for the specified column.
    fn sort_key(&self, column: usize) -> SortKey;

    /// Check if item matches the filter.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// State for a table widget.
#[derive(Debug, Clone)]
pub struct TableState<T: TableRow> {
    /// All items (unfiltered).
    pub items: Vec<T>,
    /// Selected row index (in filtered view).
    pub selected: usize,
    /// Sort column index.
    pub sort_column: usize,
    /// Sort direction (true = ascending).
    pub sort_ascending: bool,
    /// Filter string.
    pub filter: Option<String>,
    /// Tracked entity ID — follows the selected row across sort/filter changes.
    pub tracked_id: Option<u64>,
}

impl<T: TableRow> Default for TableState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableRow> TableState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            sort_column: 0,
            sort_ascending: true,
            filter: None,
            tracked_id: None,
        }
    }

    /// Replaces items, re-applies the current sort, and clamps selection.
    pub fn update(&mut self, new_items: Vec<T>) {
        self.items = new_items;
        self.apply_sort();

        let filtered_len = self.filtered_items().len();
        if self.selected >= filtered_len && filtered_len > 0 {
            self.selected = filtered_len - 1;
        }
    }

    /// Returns filtered and sorted items.
    pub fn filtered_items(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| {
                self.filter
                    .as_ref()
                    .map(|f| item.matches_filter(f))
                    .unwrap_or(true)
            })
            .collect()
    }

    /// Applies current sort to items.
    fn apply_sort(&mut self) {
        let col = self.sort_column;
        let asc = self.sort_ascending;

        self.items.sort_by(|a, b| {
            let key_a = a.sort_key(col);
            let key_b = b.sort_key(col);
            let cmp = key_a
                .partial_cmp(&key_b)
                .unwrap_or(std::cmp::Ordering::Equal);
            if asc { cmp } else { cmp.reverse() }
        });
    }

    /// Cycles to next sort column.
    pub fn next_sort_column(&mut self) {
        self.sort_column = (self.sort_column + 1) % T::column_count();
        self.apply_sort();
    }

    /// Toggles sort direction.
    pub fn toggle_sort_direction(&mut self) {
        self.sort_ascending = !self.sort_ascending;
        self.apply_sort();
    }

    /// Sets filter string.
    pub fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter;
        self.selected = 0;
    }

    /// Moves selection up.
    pub fn select_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.tracked_id = None;
        }
    }

    /// Moves selection down.
    pub fn select_down(&mut self) {
        let max = self.filtered_items().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
            self.tracked_id = None;
        }
    }

    /// Moves selection up by a page.
    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
        self.tracked_id = None;
    }

    /// Moves selection down by a page.
    pub fn page_down(&mut self, page_size: usize) {
        let max = self.filtered_items().len().saturating_sub(1);
        self.selected = (self.selected + page_size).min(max);
        self.tracked_id = None;
    }

    /// Moves selection to the first row.
    pub fn home(&mut self) {
        self.selected = 0;
        self.tracked_id = None;
    }

    /// Moves selection to the last row.
    pub fn end(&mut self) {
        self.selected = self.filtered_items().len().saturating_sub(1);
        self.tracked_id = None;
    }

    /// Resolves selection by tracked entity ID.
    /// If the tracked entity is found in the current filtered items, moves
    /// `selected` to its new index. If not found, clears `tracked_id` and
    /// clamps `selected`. Always updates `tracked_id` from the current row.
    pub fn resolve_selection(&mut self) {
        let ids: Vec<u64> = self.filtered_items().iter().map(|item| item.id()).collect();
        let len = ids.len();
        if len == 0 {
            self.selected = 0;
            self.tracked_id = None;
            return;
        }

        if let Some(tid) = self.tracked_id {
            if let Some(pos) = ids.iter().position(|&id| id == tid) {
                self.selected = pos;
            } else {
                self.tracked_id = None;
                if self.selected >= len {
                    self.selected = len - 1;
                }
            }
        } else if self.selected >= len {
            self.selected = len - 1;
        }

        if let Some(&id) = ids.get(self.selected) {
            self.tracked_id = Some(id);
        }
    }

    /// Returns the currently selected item, if any.
    pub fn selected_item(&self) -> Option<&T> {
        self.filtered_items().get(self.selected).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u64,
        name: String,
        value: f64,
    }

    impl TableRow for Item {
        fn id(&self) -> u64 {
            self.id
        }

        fn column_count() -> usize {
            2
        }

        fn headers() -> Vec<&'static str> {
            vec!["NAME", "VALUE"]
        }

        fn cells(&self) -> Vec<String> {
            vec![self.name.clone(), format!("{:.1}", self.value)]
        }

        fn sort_key(&self, column: usize) -> SortKey {
            match column {
                0 => SortKey::String(self.name.clone()),
                _ => SortKey::Float(self.value),
            }
        }

        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    fn item(id: u64, name: &str, value: f64) -> Item {
        Item {
            id,
            name: name.to_string(),
            value,
        }
    }

    fn sample_table() -> TableState<Item> {
        let mut table = TableState::new();
        table.update(vec![
            item(1, "alpha", 3.0),
            item(2, "beta", 1.0),
            item(3, "gamma", 2.0),
        ]);
        table
    }

    #[test]
    fn update_sorts_by_first_column_ascending() {
        let table = sample_table();
        let names: Vec<&str> = table.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn sort_column_cycles_and_direction_flips() {
        let mut table = sample_table();
        table.next_sort_column();
        let values: Vec<f64> = table.items.iter().map(|i| i.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);

        table.toggle_sort_direction();
        let values: Vec<f64> = table.items.iter().map(|i| i.value).collect();
        assert_eq!(values, vec![3.0, 2.0, 1.0]);

        // Cycling past the last column wraps back to the first.
        table.next_sort_column();
        assert_eq!(table.sort_column, 0);
    }

    #[test]
    fn filter_narrows_and_resets_selection() {
        let mut table = sample_table();
        table.selected = 2;
        table.set_filter(Some("a".to_string()));
        // "alpha", "beta", "gamma" all contain 'a'.
        assert_eq!(table.filtered_items().len(), 3);

        table.set_filter(Some("alp".to_string()));
        assert_eq!(table.filtered_items().len(), 1);
        assert_eq!(table.selected, 0);
    }

    #[test]
    fn selection_clamps_at_bounds() {
        let mut table = sample_table();
        table.select_up();
        assert_eq!(table.selected, 0);
        table.end();
        assert_eq!(table.selected, 2);
        table.select_down();
        assert_eq!(table.selected, 2);
        table.page_up(10);
        assert_eq!(table.selected, 0);
        table.page_down(10);
        assert_eq!(table.selected, 2);
    }

    #[test]
    fn tracked_id_follows_row_across_sort_change() {
        let mut table = sample_table();
        table.selected = 0; // "alpha" (value 3.0)
        table.resolve_selection();
        assert_eq!(table.tracked_id, Some(1));

        // Re-sort by value: "alpha" moves to the end.
        table.next_sort_column();
        table.resolve_selection();
        let selected = table.selected_item().unwrap();
        assert_eq!(selected.name, "alpha");
        assert_eq!(table.selected, 2);
    }
}
