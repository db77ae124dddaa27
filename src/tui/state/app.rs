//! Application state
//!
//! Maps terminal events onto wizard operations. Everything the host needs
//! beyond the wizard itself (list highlight, focused field, edit buffer)
//! lives here.

use crate::error::Error;
use crate::tui::event::TuiEvent;
use crate::tui::state::editor::FieldEditor;
use crate::wizard::{InputConfiguration, Step, Transition, WizardController};
use ratatui::widgets::ListState;
use tracing::{info, warn};

/// Application state (including UI state)
#[derive(Debug)]
pub struct AppState {
    /// Wizard session
    pub wizard: WizardController,
    /// Highlight in the type list
    pub type_list: ListState,
    /// Focused property field
    pub editor: FieldEditor,
    /// Configurations finished in this run, oldest first
    pub finished: Vec<InputConfiguration>,
    /// Last error shown in the dialog footer
    pub error_message: Option<String>,
    /// Whether to leave the event loop
    pub should_exit: bool,
}

impl AppState {
    pub fn new(wizard: WizardController) -> Self {
        let mut type_list = ListState::default();
        type_list.select(Some(0));
        Self {
            wizard,
            type_list,
            editor: FieldEditor::new(),
            finished: Vec::new(),
            error_message: None,
            should_exit: false,
        }
    }

    /// Most recently finished configuration
    pub fn last_finished(&self) -> Option<&InputConfiguration> {
        self.finished.last()
    }

    /// Handle one event
    pub fn handle_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::None | TuiEvent::Resize(_, _) => {}
            TuiEvent::CtrlC => self.should_exit = true,
            event if self.wizard.is_open() => {
                self.error_message = None;
                self.handle_dialog(event);
            }
            event => self.handle_landing(event),
        }
    }

    /// Open the wizard dialog
    pub fn open_wizard(&mut self) {
        self.wizard.open();
        self.error_message = None;
        self.sync_type_list();
        info!("Wizard opened");
    }

    fn handle_landing(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Enter | TuiEvent::Char('o') => self.open_wizard(),
            TuiEvent::Escape | TuiEvent::Char('q') => self.should_exit = true,
            _ => {}
        }
    }

    fn handle_dialog(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Escape => {
                self.wizard.close();
                info!("Wizard cancelled");
            }
            TuiEvent::Enter => self.primary_action(),
            TuiEvent::BackTab | TuiEvent::PageUp => self.back(),
            event => match self.wizard.step() {
                Step::SelectType => self.handle_select_type(event),
                Step::ConfigureProperties => self.handle_configure(event),
                Step::Preview => {
                    if event == TuiEvent::Left {
                        self.back();
                    }
                }
            },
        }
    }

    fn primary_action(&mut self) {
        if self.wizard.step() == Step::Preview {
            self.finish();
            return;
        }

        if let Transition::Moved {
            to: Step::ConfigureProperties,
            ..
        } = self.wizard.next()
        {
            self.focus_field(0);
        }
    }

    fn back(&mut self) {
        match self.wizard.back() {
            Transition::Moved {
                to: Step::SelectType,
                ..
            } => self.sync_type_list(),
            Transition::Moved {
                to: Step::ConfigureProperties,
                ..
            } => self.focus_field(self.editor.focused()),
            _ => {}
        }
    }

    /// Record the configuration, then close (full reset)
    fn finish(&mut self) {
        if let Some(config) = self.wizard.configuration() {
            info!(
                type_id = config.type_id,
                properties = config.properties.len(),
                "Input configuration finished"
            );
            self.finished.push(config);
        }
        self.wizard.close();
    }

    fn handle_select_type(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Up | TuiEvent::Left => self.move_type_highlight(false),
            TuiEvent::Down | TuiEvent::Right | TuiEvent::Tab => self.move_type_highlight(true),
            _ => {}
        }
    }

    fn move_type_highlight(&mut self, forward: bool) {
        let choices = self.wizard.catalog().list();
        let count = choices.len();
        let current = self.type_list.selected().unwrap_or(0);
        let index = if forward {
            (current + 1) % count
        } else if current == 0 {
            count - 1
        } else {
            current - 1
        };
        let id = choices[index].id;

        match self.wizard.select_type(id) {
            Ok(_) => self.type_list.select(Some(index)),
            Err(e) => self.report(e),
        }
    }

    /// Point the list highlight at the wizard's selected type
    fn sync_type_list(&mut self) {
        let index = self
            .wizard
            .catalog()
            .position(self.wizard.selected_type().id)
            .unwrap_or(0);
        self.type_list.select(Some(index));
    }

    fn handle_configure(&mut self, event: TuiEvent) {
        let count = self.wizard.properties().len();
        if count == 0 {
            return;
        }
        let focused = self.editor.focused();

        match event {
            TuiEvent::Up => self.focus_field(if focused == 0 { count - 1 } else { focused - 1 }),
            TuiEvent::Down | TuiEvent::Tab => self.focus_field((focused + 1) % count),
            TuiEvent::Left => self.editor.left(),
            TuiEvent::Right => self.editor.right(),
            TuiEvent::Home => self.editor.home(),
            TuiEvent::End => self.editor.end(),
            TuiEvent::Char(c) => {
                self.editor.insert(c);
                self.commit_field();
            }
            TuiEvent::Backspace => {
                if self.editor.backspace() {
                    self.commit_field();
                }
            }
            TuiEvent::Delete => {
                if self.editor.delete() {
                    self.commit_field();
                }
            }
            _ => {}
        }
    }

    fn focus_field(&mut self, index: usize) {
        let index = index.min(self.wizard.properties().len().saturating_sub(1));
        let value = self
            .wizard
            .properties()
            .get(index)
            .map(|p| p.value.as_str())
            .unwrap_or_default();
        self.editor.focus(index, value);
    }

    /// Push the edit buffer into the wizard
    fn commit_field(&mut self) {
        let Some(name) = self
            .wizard
            .properties()
            .get(self.editor.focused())
            .map(|p| p.name)
        else {
            return;
        };

        if let Err(e) = self.wizard.set_property_value(name, self.editor.value()) {
            self.report(e);
        }
    }

    fn report(&mut self, error: Error) {
        warn!(error = %error, "Wizard operation failed");
        self.error_message = Some(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InputKind, TypeCatalog};

    fn app() -> AppState {
        let catalog = TypeCatalog::new(&[InputKind::Text, InputKind::Numeric]).unwrap();
        AppState::new(WizardController::new(catalog))
    }

    fn send(app: &mut AppState, events: &[TuiEvent]) {
        for event in events {
            app.handle_event(event.clone());
        }
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            app.handle_event(TuiEvent::Char(c));
        }
    }

    #[test]
    fn test_landing_keys() {
        let mut app = app();
        app.handle_event(TuiEvent::Enter);
        assert!(app.wizard.is_open());

        let mut app = self::app();
        app.handle_event(TuiEvent::Char('q'));
        assert!(app.should_exit);
    }

    #[test]
    fn test_ctrl_c_exits_from_dialog() {
        let mut app = app();
        send(&mut app, &[TuiEvent::Enter, TuiEvent::CtrlC]);
        assert!(app.should_exit);
    }

    #[test]
    fn test_numeric_flow_to_finish() {
        let mut app = app();
        send(&mut app, &[TuiEvent::Enter, TuiEvent::Down, TuiEvent::Enter]);
        assert_eq!(app.wizard.step(), Step::ConfigureProperties);
        assert_eq!(app.wizard.selected_type().id, "numeric");
        assert_eq!(app.wizard.properties().len(), 6);

        type_text(&mut app, "Agx");
        app.handle_event(TuiEvent::Backspace);
        type_text(&mut app, "e");
        assert_eq!(app.wizard.properties()[0].value, "Age");

        send(&mut app, &[TuiEvent::Down, TuiEvent::Down, TuiEvent::Down]);
        type_text(&mut app, "0");

        app.handle_event(TuiEvent::Enter);
        assert_eq!(app.wizard.step(), Step::Preview);

        app.handle_event(TuiEvent::Enter);
        assert!(!app.wizard.is_open());
        assert!(app.wizard.properties().is_empty());
        let done = app.last_finished().unwrap();
        assert_eq!(done.type_id, "numeric");
        assert_eq!(done.value("label"), Some("Age"));
        assert_eq!(done.value("min"), Some("0"));
        assert_eq!(done.value("max"), Some(""));
    }

    #[test]
    fn test_escape_discards_session() {
        let mut app = app();
        send(&mut app, &[TuiEvent::Enter, TuiEvent::Enter]);
        type_text(&mut app, "Name");
        app.handle_event(TuiEvent::Escape);

        assert!(!app.wizard.is_open());
        assert!(app.finished.is_empty());

        app.handle_event(TuiEvent::Enter);
        assert_eq!(app.wizard.step(), Step::SelectType);
        assert!(app.wizard.properties().is_empty());
    }

    #[test]
    fn test_back_from_preview_keeps_values_and_focus() {
        let mut app = app();
        send(&mut app, &[TuiEvent::Enter, TuiEvent::Enter, TuiEvent::Down]);
        type_text(&mut app, "hint");
        send(&mut app, &[TuiEvent::Enter, TuiEvent::BackTab]);

        assert_eq!(app.wizard.step(), Step::ConfigureProperties);
        assert_eq!(app.editor.focused(), 1);
        assert_eq!(app.editor.value(), "hint");
        assert_eq!(app.wizard.properties()[1].value, "hint");
    }

    #[test]
    fn test_back_to_type_list_restores_highlight() {
        let mut app = app();
        send(
            &mut app,
            &[TuiEvent::Enter, TuiEvent::Down, TuiEvent::Enter, TuiEvent::PageUp],
        );
        assert_eq!(app.wizard.step(), Step::SelectType);
        assert_eq!(app.type_list.selected(), Some(1));

        // back on the first step does nothing
        app.handle_event(TuiEvent::PageUp);
        assert_eq!(app.wizard.step(), Step::SelectType);
        assert!(app.wizard.is_open());
    }

    #[test]
    fn test_type_highlight_wraps() {
        let mut app = app();
        send(&mut app, &[TuiEvent::Enter, TuiEvent::Up]);
        assert_eq!(app.type_list.selected(), Some(1));
        assert_eq!(app.wizard.selected_type().id, "numeric");

        app.handle_event(TuiEvent::Down);
        assert_eq!(app.type_list.selected(), Some(0));
        assert_eq!(app.wizard.selected_type().id, "text");
    }

    #[test]
    fn test_reopen_resets_highlight() {
        let mut app = app();
        send(&mut app, &[TuiEvent::Enter, TuiEvent::Down, TuiEvent::Escape, TuiEvent::Enter]);
        assert_eq!(app.type_list.selected(), Some(0));
        assert_eq!(app.wizard.selected_type().id, "text");
    }
}
