//! eatlas - Terminal restaurant explorer.
//!
//! Browse a static restaurant dataset by city on a world map and view
//! aggregate charts (cuisine counts, rating distribution, average meal
//! price by country) in an interactive TUI.

pub mod dataset;
pub mod tui;
