//! Input configuration wizard
//!
//! Three steps: pick a type, fill in its properties, preview. The controller
//! is UI-agnostic; hosts drive it with user actions and render its snapshot.

pub mod controller;
pub mod state;
pub mod step;

pub use controller::{
    DEFAULT_EMPTY_VALUE_TEXT, PreviewLine, StepContent, Transition, WizardController,
};
pub use state::{InputConfiguration, PropertyEntry, WizardSnapshot, WizardState, properties_for};
pub use step::{PrimaryAction, Step};
