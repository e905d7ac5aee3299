//! TUI widgets for eatlas.

mod about;
mod detail;
mod eda;
mod header;
mod help;
mod locations;
mod quit_confirm;

pub use about::render_about;
pub use detail::render_detail;
pub use eda::render_eda;
pub use header::{render_footer, render_header};
pub use help::render_help;
pub use locations::render_locations;
pub use quit_confirm::render_quit_confirm;
