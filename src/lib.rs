//! Input Wizard - a step-by-step dialog for configuring form inputs
//!
//! The wizard walks through three steps:
//! - pick an input type from a fixed catalog
//! - fill in the properties that type supports
//! - preview the result, then finish
//!
//! The [`wizard`] module holds the UI-independent state machine; [`tui`]
//! hosts it in a ratatui dialog.

// Initialize i18n with locale files
rust_i18n::i18n!("locales", fallback = "en");

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod tui;
pub mod wizard;

pub use catalog::{InputKind, TypeCatalog, TypeDescriptor};
pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use i18n::init_locale;
pub use tui::{TuiApp, print_catalog, print_configuration};
pub use wizard::{InputConfiguration, Step, Transition, WizardController};
