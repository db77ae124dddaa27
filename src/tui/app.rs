//! TUI application main module
//!
//! Owns the terminal and drives the event loop.

use crate::tui::event::{EventPoll, TuiEvent};
use crate::tui::state::AppState;
use crate::tui::ui::render;
use crate::wizard::{InputConfiguration, WizardController};
use ratatui::DefaultTerminal;
use tracing::info;

/// TUI application
#[derive(Debug)]
pub struct TuiApp {
    /// Terminal
    pub terminal: DefaultTerminal,
    /// Event poller
    pub event_poll: EventPoll,
    /// Application state
    pub state: AppState,
}

impl TuiApp {
    /// Create new TUI application
    pub fn new(wizard: WizardController) -> Self {
        let terminal = ratatui::init();
        Self {
            terminal,
            event_poll: EventPoll::default(),
            state: AppState::new(wizard),
        }
    }

    /// Run until the user quits; returns every configuration finished in this run
    pub fn run(mut self) -> std::io::Result<Vec<InputConfiguration>> {
        let result = self.event_loop();
        ratatui::restore();
        result?;

        info!(
            finished = self.state.finished.len(),
            last_type = self.state.last_finished().map(|c| c.type_id),
            "Interactive session complete"
        );
        Ok(self.state.finished)
    }

    fn event_loop(&mut self) -> std::io::Result<()> {
        // Initial render
        render(&mut self.terminal, &mut self.state)?;

        while !self.state.should_exit {
            match self.event_poll.next()? {
                TuiEvent::None => continue,
                event => self.state.handle_event(event),
            }
            render(&mut self.terminal, &mut self.state)?;
        }
        Ok(())
    }
}
