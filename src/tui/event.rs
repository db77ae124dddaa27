//! Event handling module
//!
//! Uses crossterm for terminal event handling.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Event poll interval (milliseconds)
const TICK_RATE: u64 = 50;

/// Event type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Tab key
    Tab,
    /// Shift+Tab
    BackTab,
    /// Page up
    PageUp,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Home key
    Home,
    /// End key
    End,
    /// Character input
    Char(char),
    /// Ctrl+C exit
    CtrlC,
    /// Window resize
    Resize(u16, u16),
    /// No event (timeout)
    None,
}

impl From<Event> for TuiEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key_event) => key_event.into(),
            Event::Resize(width, height) => TuiEvent::Resize(width, height),
            Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {
                TuiEvent::None
            }
        }
    }
}

impl From<KeyEvent> for TuiEvent {
    fn from(key: KeyEvent) -> Self {
        // Ignore release/repeat events
        if key.kind != KeyEventKind::Press {
            return TuiEvent::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
        {
            return TuiEvent::CtrlC;
        }

        match key.code {
            KeyCode::Esc => TuiEvent::Escape,
            KeyCode::Enter => TuiEvent::Enter,
            KeyCode::Up => TuiEvent::Up,
            KeyCode::Down => TuiEvent::Down,
            KeyCode::Left => TuiEvent::Left,
            KeyCode::Right => TuiEvent::Right,
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => TuiEvent::BackTab,
            KeyCode::Tab => TuiEvent::Tab,
            KeyCode::BackTab => TuiEvent::BackTab,
            KeyCode::PageUp => TuiEvent::PageUp,
            KeyCode::Backspace => TuiEvent::Backspace,
            KeyCode::Delete => TuiEvent::Delete,
            KeyCode::Home => TuiEvent::Home,
            KeyCode::End => TuiEvent::End,
            KeyCode::Char(c) => TuiEvent::Char(c),
            _ => TuiEvent::None,
        }
    }
}

/// Event poller
#[derive(Debug)]
pub struct EventPoll {
    tick_rate: Duration,
}

impl EventPoll {
    /// Create new event poller
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll next event, `TuiEvent::None` on timeout
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            Ok(event::read()?.into())
        } else {
            Ok(TuiEvent::None)
        }
    }
}

impl Default for EventPoll {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_RATE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> TuiEvent {
        KeyEvent::new(code, modifiers).into()
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), TuiEvent::Enter);
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), TuiEvent::Escape);
        assert_eq!(press(KeyCode::Char('a'), KeyModifiers::NONE), TuiEvent::Char('a'));
        assert_eq!(press(KeyCode::PageUp, KeyModifiers::NONE), TuiEvent::PageUp);
        assert_eq!(press(KeyCode::F(5), KeyModifiers::NONE), TuiEvent::None);
    }

    #[test]
    fn test_back_tab_variants() {
        assert_eq!(press(KeyCode::BackTab, KeyModifiers::SHIFT), TuiEvent::BackTab);
        assert_eq!(press(KeyCode::Tab, KeyModifiers::SHIFT), TuiEvent::BackTab);
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), TuiEvent::Tab);
    }

    #[test]
    fn test_ctrl_c() {
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), TuiEvent::CtrlC);
        assert_eq!(press(KeyCode::Char('d'), KeyModifiers::CONTROL), TuiEvent::CtrlC);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(TuiEvent::from(key), TuiEvent::None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(TuiEvent::from(Event::Resize(80, 24)), TuiEvent::Resize(80, 24));
    }
}
