//! Restaurant detail popup (Locations tab, Enter key).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::dataset::Dataset;
use crate::tui::style::Styles;

/// Renders a centered popup with the full record of one restaurant.
/// This is the map tooltip of the original layout: name, cuisine, rating,
/// plus price and coordinates.
pub fn render_detail(frame: &mut Frame, area: Rect, dataset: &Dataset, dataset_index: usize) {
    let Some(restaurant) = dataset.restaurants().get(dataset_index) else {
        return;
    };

    let popup_width = (area.width * 50 / 100).clamp(40, 64);
    let popup_height = area.height.clamp(10, 12);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", restaurant.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), Styles::section_header()),
            Span::styled(value, Styles::default()),
        ])
    };

    let content = vec![
        field("Cuisine", restaurant.cuisine.clone()),
        field("Rating", format!("{:.1}", restaurant.rating)),
        field("Price", format!("{:.2}", restaurant.avg_meal_price)),
        Line::from(""),
        field("City", restaurant.city.clone()),
        field("Country", restaurant.country.clone()),
        field(
            "Position",
            format!("{:.4}, {:.4}", restaurant.latitude, restaurant.longitude),
        ),
        Line::from(""),
        Line::from(Span::styled("Press Esc to close", Styles::help())),
    ];

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
