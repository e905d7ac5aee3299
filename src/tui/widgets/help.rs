//! Help popup widget with context-sensitive keybindings.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::state::Tab;

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, tab: Tab, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 70);
    let popup_height = (area.height * 80 / 100).clamp(10, 26);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let content = help_content(tab);
    let content_lines = content.len();

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    // Clamp scroll to valid range
    let visible_height = chunks[0].height as usize;
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" to close", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn help_content(tab: Tab) -> Vec<Line<'static>> {
    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", k), Style::default().fg(Color::Yellow)),
            Span::styled(what, Style::default().fg(Color::White)),
        ])
    };
    let section = |name: &'static str| {
        Line::from(Span::styled(
            name,
            Style::default().fg(Color::Cyan),
        ))
    };

    let mut lines = vec![
        section("Navigation"),
        key("1 / 2 / 3", "About Us / Locations / EDA"),
        key("Tab", "next page"),
        key("Shift-Tab", "previous page"),
        Line::from(""),
    ];

    if tab == Tab::Locations {
        lines.extend([
            section("Locations"),
            key("← / →", "previous / next city"),
            key("↑ / ↓", "move row selection"),
            key("PgUp / PgDn", "move selection by page"),
            key("Home / End", "first / last row"),
            key("Enter", "restaurant details"),
            key("s", "cycle sort column"),
            key("S", "flip sort direction"),
            key("/", "filter by name or cuisine"),
            Line::from(""),
        ]);
    }

    lines.extend([
        section("General"),
        key("?  or F1", "this help"),
        key("q", "quit (with confirmation)"),
        key("Ctrl-C", "quit immediately"),
    ]);

    lines
}
