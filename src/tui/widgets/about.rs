//! Static About page.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::dataset::Dataset;
use crate::tui::style::Styles;

/// Renders the About page: static text plus a short dataset summary.
pub fn render_about(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let block = Block::default()
        .title(" About Us ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut countries: Vec<&str> = dataset
        .restaurants()
        .iter()
        .map(|r| r.country.as_str())
        .collect();
    countries.sort();
    countries.dedup();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled("Where Can I Eat?", Styles::section_header())),
        Line::from(""),
        Line::from(
            "Welcome to Where Can I Eat?! This site is your go-to resource for finding \
             restaurants of all price ranges, no matter where you are in the world.",
        ),
        Line::from(""),
        Line::from(format!(
            "The catalog currently covers {} restaurants in {} cities across {} countries.",
            dataset.len(),
            dataset.cities().len(),
            countries.len(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Switch to Locations (2) to browse restaurants by city on the map, or to \
             EDA (3) for aggregate charts.",
            Styles::dim(),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, inner);
}
