//! Wizard step state machine
//!
//! The controller owns a single [`WizardState`] and changes it only through
//! the operations below. Invalid transitions are ignored rather than
//! reported, so the host can forward every user action without checking the
//! current step first. Lookups of unknown ids or property names are errors.

use crate::catalog::{TypeCatalog, TypeDescriptor};
use crate::error::{Error, Result};
use crate::wizard::state::{
    InputConfiguration, PropertyEntry, WizardSnapshot, WizardState, properties_for,
};
use crate::wizard::step::Step;
use std::fmt;
use tracing::{debug, warn};

/// Preview text for a property left empty
pub const DEFAULT_EMPTY_VALUE_TEXT: &str = "Not set";

/// Outcome of a transition operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state changed
    Moved { from: Step, to: Step },
    /// The operation does not apply to the current step
    Ignored,
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored)
    }
}

/// One line of the preview step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLine<'a> {
    pub name: &'a str,
    /// Entered value, or the empty-value text
    pub value: &'a str,
    /// Whether `value` is the empty-value text
    pub is_placeholder: bool,
}

impl fmt::Display for PreviewLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// What the host renders for the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepContent<'a> {
    /// Choice control over the catalog
    SelectType {
        selected: &'a TypeDescriptor,
        choices: &'a [TypeDescriptor],
    },
    /// One text field per property
    ConfigureProperties { properties: &'a [PropertyEntry] },
    /// Read-only summary
    Preview {
        display_name: &'static str,
        lines: Vec<PreviewLine<'a>>,
    },
}

/// Step-wizard controller
#[derive(Debug, Clone)]
pub struct WizardController {
    catalog: TypeCatalog,
    state: WizardState,
    empty_value_text: String,
}

impl WizardController {
    /// Closed wizard over `catalog`
    pub fn new(catalog: TypeCatalog) -> Self {
        let state = WizardState::new(*catalog.first());
        Self {
            catalog,
            state,
            empty_value_text: DEFAULT_EMPTY_VALUE_TEXT.to_string(),
        }
    }

    /// Override the text shown in Preview for empty values
    pub fn with_empty_value_text(mut self, text: impl Into<String>) -> Self {
        self.empty_value_text = text.into();
        self
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn selected_type(&self) -> &TypeDescriptor {
        &self.state.selected_type
    }

    pub fn properties(&self) -> &[PropertyEntry] {
        &self.state.properties
    }

    /// Dialog title for the current step
    pub fn step_title(&self) -> &'static str {
        self.state.step.title()
    }

    /// Owned copy of the state for the host
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot::from(&self.state)
    }

    /// Show the dialog and restart the session
    pub fn open(&mut self) {
        self.reset();
        self.state.is_open = true;
        debug!(selected_type = self.state.selected_type.id, "wizard opened");
    }

    /// Hide the dialog and discard the session
    pub fn close(&mut self) {
        self.reset();
        debug!("wizard closed");
    }

    fn reset(&mut self) {
        self.state = WizardState::new(*self.catalog.first());
    }

    /// Change the selected type while on the first step
    pub fn select_type(&mut self, type_id: &str) -> Result<Transition> {
        if self.state.step != Step::SelectType {
            debug!(step = ?self.state.step, type_id, "select_type ignored");
            return Ok(Transition::Ignored);
        }

        let descriptor = match self.catalog.get(type_id) {
            Ok(descriptor) => *descriptor,
            Err(e) => {
                warn!(type_id, "select_type: unknown input type");
                return Err(e);
            }
        };

        self.state.selected_type = descriptor;
        debug!(type_id, "input type selected");
        Ok(Transition::Moved {
            from: Step::SelectType,
            to: Step::SelectType,
        })
    }

    /// Advance one step
    pub fn next(&mut self) -> Transition {
        let from = self.state.step;
        let Some(to) = from.next() else {
            debug!(step = ?from, "next ignored");
            return Transition::Ignored;
        };

        if from == Step::SelectType {
            self.state.properties = properties_for(&self.state.selected_type);
        }
        self.state.step = to;
        debug!(?from, ?to, "wizard advanced");
        Transition::Moved { from, to }
    }

    /// Go back one step; properties are kept
    pub fn back(&mut self) -> Transition {
        let from = self.state.step;
        let Some(to) = from.prev() else {
            debug!(step = ?from, "back ignored");
            return Transition::Ignored;
        };

        self.state.step = to;
        debug!(?from, ?to, "wizard went back");
        Transition::Moved { from, to }
    }

    /// Replace the value of property `name` while configuring
    pub fn set_property_value(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<Transition> {
        let step = self.state.step;
        if step != Step::ConfigureProperties {
            debug!(?step, name, "set_property_value ignored");
            return Ok(Transition::Ignored);
        }

        let Some(entry) = self.state.properties.iter_mut().find(|p| p.name == name) else {
            warn!(
                name,
                selected_type = self.state.selected_type.id,
                "set_property_value: unknown property"
            );
            return Err(Error::unknown_property(name));
        };

        entry.value = value.into();
        Ok(Transition::Moved { from: step, to: step })
    }

    /// Projection of the current step for rendering
    pub fn step_content(&self) -> StepContent<'_> {
        match self.state.step {
            Step::SelectType => StepContent::SelectType {
                selected: &self.state.selected_type,
                choices: self.catalog.list(),
            },
            Step::ConfigureProperties => StepContent::ConfigureProperties {
                properties: &self.state.properties,
            },
            Step::Preview => StepContent::Preview {
                display_name: self.state.selected_type.display_name,
                lines: self
                    .state
                    .properties
                    .iter()
                    .map(|p| PreviewLine {
                        name: p.name,
                        value: if p.is_empty() {
                            &self.empty_value_text
                        } else {
                            &p.value
                        },
                        is_placeholder: p.is_empty(),
                    })
                    .collect(),
            },
        }
    }

    /// The committed configuration, available on the Preview step
    pub fn configuration(&self) -> Option<InputConfiguration> {
        (self.state.step == Step::Preview).then(|| InputConfiguration {
            type_id: self.state.selected_type.id,
            display_name: self.state.selected_type.display_name,
            properties: self.state.properties.clone(),
        })
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(TypeCatalog::builtin())
    }
}
