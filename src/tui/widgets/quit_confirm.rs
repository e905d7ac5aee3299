//! Quit confirmation popup widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

/// Renders a centered quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup_width = (area.width * 40 / 100).clamp(34, 50);
    let popup_height = 5u16.min(area.height);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Quit? ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = vec![
        Line::from("Leave eatlas?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter/q", Styles::help_key()),
            Span::styled(" quit   ", Styles::help()),
            Span::styled("Esc/n", Styles::help_key()),
            Span::styled(" stay", Styles::help()),
        ]),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
