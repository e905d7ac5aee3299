//! Locations page: city selector, restaurant table, and map canvas.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::dataset::aggregate::{WORLD_SPAN_LAT, map_viewport};
use crate::dataset::{Dataset, Restaurant};
use crate::tui::state::{AppState, TableRow};
use crate::tui::style::{Styles, Theme};

/// Renders the Locations page.
pub fn render_locations(frame: &mut Frame, area: Rect, state: &mut AppState, dataset: &Dataset) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(45), // Selector + table
        Constraint::Percentage(55), // Map
    ])
    .split(area);

    let left = Layout::vertical([
        Constraint::Length(3), // City selector
        Constraint::Min(5),    // Restaurant table
    ])
    .split(chunks[0]);

    render_city_selector(frame, left[0], state, dataset);
    render_restaurant_table(frame, left[1], state);
    render_map(frame, chunks[1], state, dataset);
}

/// Renders the city selector line. Only observed cities are offered.
fn render_city_selector(frame: &mut Frame, area: Rect, state: &AppState, dataset: &Dataset) {
    let block = Block::default()
        .title(" Choose a city ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let city = state.selected_city(dataset);
    let line = Line::from(vec![
        Span::styled("◀ ", Styles::dim()),
        Span::styled(city.to_string(), Styles::tab_active()),
        Span::styled(" ▶", Styles::dim()),
        Span::styled(
            format!("  [{}/{}]", state.city_index + 1, state.city_count),
            Styles::dim(),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        inner,
    );
}

/// Renders the restaurant table for the selected city.
fn render_restaurant_table(frame: &mut Frame, area: Rect, state: &mut AppState) {
    state.restaurant_table.resolve_selection();
    state
        .locations_ratatui_state
        .select(Some(state.restaurant_table.selected));

    let table_state = &state.restaurant_table;

    // Headers with sort indicator
    let headers: Vec<Span> = crate::tui::state::RestaurantRow::headers()
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let indicator = if i == table_state.sort_column {
                if table_state.sort_ascending { "▲" } else { "▼" }
            } else {
                ""
            };
            Span::styled(format!("{}{}", h, indicator), Styles::table_header())
        })
        .collect();
    let header = Row::new(headers).style(Styles::table_header()).height(1);

    let filtered = table_state.filtered_items();
    let rows: Vec<Row> = filtered
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let style = if idx == table_state.selected {
                Styles::selected()
            } else {
                Styles::default()
            };
            Row::new(item.cells()).style(style).height(1)
        })
        .collect();

    let title = if let Some(filter) = &table_state.filter {
        format!(
            " Restaurants (filter: {}) [{}/{}] ",
            filter,
            filtered.len(),
            table_state.items.len()
        )
    } else {
        format!(" Restaurants [{}] ", table_state.items.len())
    };

    let widths = [
        Constraint::Min(16),
        Constraint::Length(14),
        Constraint::Length(7),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Styles::selected());

    frame.render_stateful_widget(table, area, &mut state.locations_ratatui_state);
}

/// Renders the map canvas with one point per filtered restaurant.
///
/// The viewport centers on the mean position of the filtered rows; with no
/// rows it falls back to the dataset-wide mean at world zoom.
fn render_map(frame: &mut Frame, area: Rect, state: &AppState, dataset: &Dataset) {
    let subset: Vec<&Restaurant> = state
        .restaurant_table
        .filtered_items()
        .iter()
        .map(|row| &dataset.restaurants()[row.dataset_index])
        .collect();

    let viewport = map_viewport(dataset, &subset);

    let title = format!(" Map - {} ({}) ", state.selected_city(dataset), subset.len());
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);

    let (x_bounds, y_bounds) = canvas_bounds(&viewport, inner);

    let coords: Vec<(f64, f64)> = subset.iter().map(|r| (r.longitude, r.latitude)).collect();
    let selected = state
        .restaurant_table
        .selected_item()
        .map(|row| (row.longitude, row.latitude, row.name.clone()));

    let canvas = Canvas::default()
        .block(block)
        .marker(ratatui::symbols::Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Theme::MAP_LAND,
            });
            ctx.draw(&Points {
                coords: &coords,
                color: Theme::MAP_MARKER,
            });
            if let Some((lon, lat, name)) = &selected {
                ctx.draw(&Points {
                    coords: &[(*lon, *lat)],
                    color: Theme::MAP_SELECTED,
                });
                ctx.print(
                    *lon,
                    *lat,
                    Line::styled(format!(" {}", name), Styles::selected()),
                );
            }
        });

    frame.render_widget(canvas, area);
}

/// Computes canvas bounds from the viewport, deriving the longitudinal span
/// from the render area's pixel aspect ratio (braille: 2x4 dots per cell).
fn canvas_bounds(
    viewport: &crate::dataset::aggregate::MapViewport,
    area: Rect,
) -> ([f64; 2], [f64; 2]) {
    if viewport.span_lat >= WORLD_SPAN_LAT {
        return ([-180.0, 180.0], [-90.0, 90.0]);
    }

    let px_width = (area.width.max(1) as f64) * 2.0;
    let px_height = (area.height.max(1) as f64) * 4.0;
    let span_lat = viewport.span_lat;
    let span_lon = (span_lat * px_width / px_height).min(360.0);

    (
        [
            viewport.longitude - span_lon / 2.0,
            viewport.longitude + span_lon / 2.0,
        ],
        [
            viewport.latitude - span_lat / 2.0,
            viewport.latitude + span_lat / 2.0,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::aggregate::{CITY_SPAN_LAT, MapViewport};

    #[test]
    fn world_viewport_uses_full_bounds() {
        let viewport = MapViewport {
            latitude: 40.0,
            longitude: 30.0,
            span_lat: WORLD_SPAN_LAT,
        };
        let (x, y) = canvas_bounds(&viewport, Rect::new(0, 0, 80, 24));
        assert_eq!(x, [-180.0, 180.0]);
        assert_eq!(y, [-90.0, 90.0]);
    }

    #[test]
    fn city_viewport_centers_on_mean() {
        let viewport = MapViewport {
            latitude: 48.85,
            longitude: 2.35,
            span_lat: CITY_SPAN_LAT,
        };
        let (x, y) = canvas_bounds(&viewport, Rect::new(0, 0, 80, 40));
        assert!(((x[0] + x[1]) / 2.0 - 2.35).abs() < 1e-9);
        assert!(((y[0] + y[1]) / 2.0 - 48.85).abs() < 1e-9);
        assert!((y[1] - y[0] - CITY_SPAN_LAT).abs() < 1e-9);
    }
}
