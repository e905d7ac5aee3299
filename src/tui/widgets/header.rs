//! Header bar (title, tabs, status) and footer key hints.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode, Tab};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(10), // Title
        Constraint::Min(30),    // Tabs
        Constraint::Length(44), // Status message
    ])
    .split(area);

    // Title
    let title = Paragraph::new(" eatlas ").style(Styles::header());
    frame.render_widget(title, chunks[0]);

    // Tabs
    let tabs: Vec<Span> = Tab::all()
        .iter()
        .enumerate()
        .flat_map(|(i, tab)| {
            let style = if *tab == state.current_tab {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            let num = format!(" {}:", i + 1);
            let name = format!("{} ", tab.name());
            vec![Span::styled(num, Styles::dim()), Span::styled(name, style)]
        })
        .collect();
    let tabs_widget = Paragraph::new(Line::from(tabs)).style(Styles::header());
    frame.render_widget(tabs_widget, chunks[1]);

    // Status message (right side)
    if let Some(msg) = &state.status_message {
        let status = Paragraph::new(format!(" {} ", msg)).style(Styles::header());
        frame.render_widget(status, chunks[2]);
    }
}

/// Renders the one-line key hint footer for the current tab.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    if state.input_mode == InputMode::Filter {
        spans.push(Span::styled(" Filter: ", Styles::help()));
        spans.push(Span::styled(
            state.filter_input.clone(),
            Styles::filter_input(),
        ));
        spans.push(Span::styled("  Enter", Styles::help_key()));
        spans.push(Span::styled(" apply  ", Styles::help()));
        spans.push(Span::styled("Esc", Styles::help_key()));
        spans.push(Span::styled(" clear", Styles::help()));
    } else {
        let hints: &[(&str, &str)] = match state.current_tab {
            Tab::About => &[("1-3/Tab", "pages"), ("?", "help"), ("q", "quit")],
            Tab::Locations => &[
                ("←/→", "city"),
                ("↑/↓", "row"),
                ("Enter", "detail"),
                ("s/S", "sort"),
                ("/", "filter"),
                ("?", "help"),
                ("q", "quit"),
            ],
            Tab::Eda => &[("1-3/Tab", "pages"), ("?", "help"), ("q", "quit")],
        };
        for (key, what) in hints {
            spans.push(Span::styled(format!(" {}", key), Styles::help_key()));
            spans.push(Span::styled(format!(" {} ", what), Styles::help()));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
