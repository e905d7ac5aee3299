//! Terminal User Interface for the eatlas viewer.
//!
//! Interactive pages (About Us, Locations, EDA) over the restaurant
//! dataset, with a map canvas and aggregate charts.

mod app;
mod event;
mod input;
mod models;
mod render;
mod state;
mod style;
mod table;
mod widgets;

pub use app::App;
pub use state::{AppState, Tab};
