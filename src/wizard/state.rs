//! Wizard session data

use crate::catalog::TypeDescriptor;
use crate::wizard::step::{PrimaryAction, Step};
use serde::Serialize;

/// One configurable field of the selected type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyEntry {
    /// Property name from the type's schema
    pub name: &'static str,
    /// Free-form value, empty until edited
    pub value: String,
}

impl PropertyEntry {
    /// Entry with an empty value
    pub fn empty(name: &'static str) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Build the property list for a type, in declared order with empty values
pub fn properties_for(descriptor: &TypeDescriptor) -> Vec<PropertyEntry> {
    descriptor
        .property_names
        .iter()
        .map(|name| PropertyEntry::empty(*name))
        .collect()
}

/// Wizard session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    /// Current step
    pub step: Step,
    /// Currently selected input type
    pub selected_type: TypeDescriptor,
    /// Property list for the selected type
    pub properties: Vec<PropertyEntry>,
    /// Whether the host dialog is visible
    pub is_open: bool,
}

impl WizardState {
    /// Closed session with `selected_type` as the default
    pub fn new(selected_type: TypeDescriptor) -> Self {
        Self {
            step: Step::SelectType,
            selected_type,
            properties: Vec::new(),
            is_open: false,
        }
    }
}

/// Read-only view handed to the host after every operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardSnapshot {
    pub is_open: bool,
    pub step: Step,
    /// Dialog title for `step`
    pub step_title: &'static str,
    pub selected_type: TypeDescriptor,
    pub properties: Vec<PropertyEntry>,
    /// Label of the primary button
    pub primary_action: PrimaryAction,
    /// Whether a Back control is shown
    pub can_go_back: bool,
}

impl From<&WizardState> for WizardSnapshot {
    fn from(state: &WizardState) -> Self {
        Self {
            is_open: state.is_open,
            step: state.step,
            step_title: state.step.title(),
            selected_type: state.selected_type,
            properties: state.properties.clone(),
            primary_action: state.step.primary_action(),
            can_go_back: state.step.can_go_back(),
        }
    }
}

/// The configuration a user committed with Finish
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputConfiguration {
    pub type_id: &'static str,
    pub display_name: &'static str,
    pub properties: Vec<PropertyEntry>,
}

impl InputConfiguration {
    /// Value of a property, if present
    pub fn value(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InputKind;

    #[test]
    fn test_properties_for_checkbox() {
        let props = properties_for(InputKind::Checkbox.descriptor());
        let names: Vec<&str> = props.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["label", "required", "defaultChecked"]);
        assert!(props.iter().all(PropertyEntry::is_empty));
    }

    #[test]
    fn test_snapshot_from_state() {
        let mut state = WizardState::new(*InputKind::Popup.descriptor());
        state.step = Step::Preview;
        state.is_open = true;
        let snapshot = WizardSnapshot::from(&state);
        assert_eq!(snapshot.step_title, "Preview Input Configuration");
        assert_eq!(snapshot.primary_action, PrimaryAction::Finish);
        assert!(snapshot.can_go_back);
        assert_eq!(snapshot.selected_type.id, "popup");
    }

    #[test]
    fn test_configuration_value_lookup() {
        let config = InputConfiguration {
            type_id: "text",
            display_name: "Text",
            properties: vec![PropertyEntry {
                name: "label",
                value: "Name".into(),
            }],
        };
        assert_eq!(config.value("label"), Some("Name"));
        assert_eq!(config.value("placeholder"), None);
    }
}
