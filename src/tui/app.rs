//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::dataset::Dataset;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    dataset: Dataset,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App over a loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        let mut state = AppState::new(dataset.cities().len());
        state.refresh_city_rows(&dataset);
        Self {
            dataset,
            state,
            should_quit: false,
        }
    }

    /// Runs the TUI application until the user quits.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Main loop: each event triggers one full synchronous re-render.
        loop {
            terminal.draw(|frame| render(frame, &mut self.state, &self.dataset))?;

            match events.next() {
                Ok(Event::Tick) | Ok(Event::Resize) => {}
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::CityChanged => {
                        self.state.refresh_city_rows(&self.dataset);
                    }
                    KeyAction::None => {}
                },
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}
