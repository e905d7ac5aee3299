//! Row models for TUI tables.

mod restaurant_row;

pub use restaurant_row::RestaurantRow;
