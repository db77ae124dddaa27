//! UI渲染模块
//!
//! 首页始终绘制；向导打开时在其上叠加对话框。

use crate::tui::screens::{dialog, landing};
use crate::tui::state::AppState;
use crate::tui::theme::theme;
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};

/// 设置全局背景
fn set_background(area: Rect, buf: &mut Buffer) {
    let style = Style::new().bg(theme().bg);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut(Position { x, y }) {
                cell.set_style(style);
            }
        }
    }
}

/// 渲染整个应用
pub fn render(terminal: &mut DefaultTerminal, state: &mut AppState) -> std::io::Result<()> {
    terminal.draw(|frame| draw(frame, state))?;
    Ok(())
}

/// 主渲染函数
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    set_background(area, frame.buffer_mut());

    landing::draw(frame, area, state);
    if state.wizard.is_open() {
        dialog::draw(frame, area, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::event::TuiEvent;
    use crate::wizard::WizardController;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_dialog_renders_each_step() {
        let mut state = AppState::new(WizardController::default());
        assert!(rendered(&mut state).contains("Input Wizard"));

        state.handle_event(TuiEvent::Enter);
        let screen = rendered(&mut state);
        assert!(screen.contains("Select Input Type"));
        assert!(screen.contains("Date/Time"));
        assert!(screen.contains("[ Next ]"));
        assert!(!screen.contains("[ Back ]"));

        state.handle_event(TuiEvent::Enter);
        state.handle_event(TuiEvent::Char('N'));
        let screen = rendered(&mut state);
        assert!(screen.contains("Configure Input Properties"));
        assert!(screen.contains("label: [N|]"));
        assert!(screen.contains("[ Back ]"));

        state.handle_event(TuiEvent::Enter);
        let screen = rendered(&mut state);
        assert!(screen.contains("Preview Input Configuration"));
        assert!(screen.contains("Not set"));
        assert!(screen.contains("[ Finish ]"));
    }

    #[test]
    fn test_cursor_sits_in_focused_field() {
        let mut state = AppState::new(WizardController::default());
        state.handle_event(TuiEvent::Enter);
        state.handle_event(TuiEvent::Enter);
        state.handle_event(TuiEvent::Char('N'));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &mut state)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(cursor.x, cursor.y)].symbol(), "|");
        assert_eq!(buffer[(cursor.x - 1, cursor.y)].symbol(), "N");
    }
}
