//! Restaurant row model for the Locations table.

use crate::dataset::Restaurant;
use crate::tui::table::{SortKey, TableRow};

/// One row of the Locations table: a restaurant in the selected city.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantRow {
    /// Index of the row in the dataset; stable for the process lifetime.
    pub dataset_index: usize,
    pub name: String,
    pub city: String,
    pub cuisine: String,
    pub country: String,
    pub rating: f64,
    pub avg_meal_price: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl RestaurantRow {
    pub fn from_restaurant(dataset_index: usize, restaurant: &Restaurant) -> Self {
        Self {
            dataset_index,
            name: restaurant.name.clone(),
            city: restaurant.city.clone(),
            cuisine: restaurant.cuisine.clone(),
            country: restaurant.country.clone(),
            rating: restaurant.rating,
            avg_meal_price: restaurant.avg_meal_price,
            latitude: restaurant.latitude,
            longitude: restaurant.longitude,
        }
    }
}

impl TableRow for RestaurantRow {
    fn id(&self) -> u64 {
        self.dataset_index as u64
    }

    fn column_count() -> usize {
        4
    }

    fn headers() -> Vec<&'static str> {
        vec!["NAME", "CUISINE", "RATING", "PRICE"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.cuisine.clone(),
            format!("{:.1}", self.rating),
            format!("{:.2}", self.avg_meal_price),
        ]
    }

    fn sort_key(&self, column: usize) -> SortKey {
        match column {
            0 => SortKey::String(self.name.to_lowercase()),
            1 => SortKey::String(self.cuisine.to_lowercase()),
            2 => SortKey::Float(self.rating),
            _ => SortKey::Float(self.avg_meal_price),
        }
    }

    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.cuisine.to_lowercase().contains(&filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, name: &str, cuisine: &str, rating: f64, price: f64) -> RestaurantRow {
        RestaurantRow {
            dataset_index: index,
            name: name.to_string(),
            city: "Paris".to_string(),
            cuisine: cuisine.to_string(),
            country: "France".to_string(),
            rating,
            avg_meal_price: price,
            latitude: 48.8,
            longitude: 2.3,
        }
    }

    #[test]
    fn cells_match_headers() {
        let r = row(0, "Le Bistrot", "French", 4.5, 42.0);
        assert_eq!(r.cells().len(), RestaurantRow::column_count());
        assert_eq!(RestaurantRow::headers().len(), RestaurantRow::column_count());
        assert_eq!(r.cells()[2], "4.5");
        assert_eq!(r.cells()[3], "42.00");
    }

    #[test]
    fn filter_matches_name_and_cuisine_case_insensitive() {
        let r = row(0, "Le Bistrot", "French", 4.5, 42.0);
        assert!(r.matches_filter("bistrot"));
        assert!(r.matches_filter("FRENCH"));
        assert!(!r.matches_filter("sushi"));
    }
}
