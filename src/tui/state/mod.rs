//! TUI state module

pub mod app;
pub mod editor;

pub use app::AppState;
pub use editor::FieldEditor;
