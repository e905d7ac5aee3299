//! EDA page: three aggregate bar charts over the full dataset.
//!
//! Each render recomputes the aggregations from the in-memory table; at a
//! few thousand rows a pass per render cycle is cheap.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};

use crate::dataset::Dataset;
use crate::dataset::aggregate::{avg_price_by_country, cuisine_counts, rating_histogram};
use crate::tui::style::Styles;

/// Renders the EDA page: cuisine counts, rating histogram, country prices.
pub fn render_eda(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let chunks = Layout::vertical([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    render_cuisine_chart(frame, chunks[0], dataset);
    render_rating_chart(frame, chunks[1], dataset);
    render_price_chart(frame, chunks[2], dataset);
}

/// Number of restaurants by cuisine, descending.
fn render_cuisine_chart(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let counts = cuisine_counts(dataset);
    let bars: Vec<Bar> = counts
        .iter()
        .map(|c| {
            Bar::default()
                .value(c.count as u64)
                .label(Line::from(c.cuisine.clone()))
                .style(Styles::cuisine_bar())
        })
        .collect();

    render_bar_chart(
        frame,
        area,
        " Number of Restaurants by Cuisine ",
        bars,
        Styles::cuisine_bar(),
    );
}

/// Frequency histogram of ratings (fixed bin count).
fn render_rating_chart(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let bins = rating_histogram(dataset);
    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::default()
                .value(b.count as u64)
                .label(Line::from(format!("{:.1}-{:.1}", b.low, b.high)))
                .style(Styles::rating_bar())
        })
        .collect();

    render_bar_chart(
        frame,
        area,
        " Distribution of Ratings ",
        bars,
        Styles::rating_bar(),
    );
}

/// Mean meal price by country, descending.
///
/// Bar heights scale the mean by 100 so fractional prices keep their
/// relative proportions; the printed value stays in currency units.
fn render_price_chart(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let prices = avg_price_by_country(dataset);
    let bars: Vec<Bar> = prices
        .iter()
        .map(|p| {
            Bar::default()
                .value((p.mean_price * 100.0).round() as u64)
                .text_value(format!("{:.2}", p.mean_price))
                .label(Line::from(p.country.clone()))
                .style(Styles::price_bar())
        })
        .collect();

    render_bar_chart(
        frame,
        area,
        " Average Meal Price by Country ",
        bars,
        Styles::price_bar(),
    );
}

fn render_bar_chart(frame: &mut Frame, area: Rect, title: &str, bars: Vec<Bar>, style: Style) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = block.inner(area);
    let bar_width = bar_width_for(inner.width, bars.len());

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(style);

    frame.render_widget(chart, area);
}

/// Picks a bar width that fits all groups in the available width, clamped
/// so labels stay readable.
fn bar_width_for(available: u16, bar_count: usize) -> u16 {
    if bar_count == 0 {
        return 1;
    }
    let per_bar = available / bar_count as u16;
    per_bar.saturating_sub(1).clamp(3, 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_shrinks_with_more_bars() {
        assert_eq!(bar_width_for(80, 4), 12);
        assert_eq!(bar_width_for(80, 10), 7);
        assert_eq!(bar_width_for(80, 40), 3);
        // Degenerate area still yields a drawable width.
        assert_eq!(bar_width_for(0, 5), 3);
        assert_eq!(bar_width_for(80, 0), 1);
    }
}
