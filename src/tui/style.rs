//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Tab colors
    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::DarkGray;

    // Map colors
    pub const MAP_LAND: Color = Color::Green;
    /// Marker color for restaurant points, after the original's red markers.
    pub const MAP_MARKER: Color = Color::Red;
    pub const MAP_SELECTED: Color = Color::Yellow;

    // Chart colors
    pub const CUISINE_BAR: Color = Color::Cyan;
    pub const RATING_BAR: Color = Color::Magenta;
    pub const PRICE_BAR: Color = Color::Yellow;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab style.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab style.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Filter input style.
    pub fn filter_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Section header style for detail popups.
    pub fn section_header() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Cuisine chart bar style.
    pub fn cuisine_bar() -> Style {
        Style::default().fg(Theme::CUISINE_BAR)
    }

    /// Rating histogram bar style.
    pub fn rating_bar() -> Style {
        Style::default().fg(Theme::RATING_BAR)
    }

    /// Price chart bar style.
    pub fn price_bar() -> Style {
        Style::default().fg(Theme::PRICE_BAR)
    }
}
