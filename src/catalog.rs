//! Input type catalog
//!
//! A closed registry of input kinds. Each kind carries a static descriptor
//! with its id, display name and the ordered property names it requires.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Selectable input kind
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Single-line text field
    Text,
    /// Numeric field with bounds and step
    Numeric,
    /// Date/time picker
    #[value(name = "datetime")]
    DateTime,
    /// Single checkbox
    Checkbox,
    /// Radio button group
    Radio,
    /// Dropdown list
    Dropdown,
    /// Popup trigger
    Popup,
}

static TEXT: TypeDescriptor = TypeDescriptor {
    kind: InputKind::Text,
    id: "text",
    display_name: "Text",
    property_names: &["label", "placeholder", "required", "minLength", "maxLength"],
};

static NUMERIC: TypeDescriptor = TypeDescriptor {
    kind: InputKind::Numeric,
    id: "numeric",
    display_name: "Numeric",
    property_names: &["label", "placeholder", "required", "min", "max", "step"],
};

static DATE_TIME: TypeDescriptor = TypeDescriptor {
    kind: InputKind::DateTime,
    id: "datetime",
    display_name: "Date/Time",
    property_names: &["label", "required", "format", "minDate", "maxDate"],
};

static CHECKBOX: TypeDescriptor = TypeDescriptor {
    kind: InputKind::Checkbox,
    id: "checkbox",
    display_name: "Checkbox",
    property_names: &["label", "required", "defaultChecked"],
};

static RADIO: TypeDescriptor = TypeDescriptor {
    kind: InputKind::Radio,
    id: "radio",
    display_name: "Radio",
    property_names: &["label", "required", "options", "defaultValue"],
};

static DROPDOWN: TypeDescriptor = TypeDescriptor {
    kind: InputKind::Dropdown,
    id: "dropdown",
    display_name: "Dropdown",
    property_names: &["label", "placeholder", "required", "options", "defaultValue"],
};

static POPUP: TypeDescriptor = TypeDescriptor {
    kind: InputKind::Popup,
    id: "popup",
    display_name: "Popup",
    property_names: &["label", "title", "content", "triggerText"],
};

const ALL_KINDS: [InputKind; 7] = [
    InputKind::Text,
    InputKind::Numeric,
    InputKind::DateTime,
    InputKind::Checkbox,
    InputKind::Radio,
    InputKind::Dropdown,
    InputKind::Popup,
];

impl InputKind {
    /// All kinds in canonical order
    pub fn all() -> &'static [InputKind] {
        &ALL_KINDS
    }

    /// Static descriptor for this kind
    pub fn descriptor(self) -> &'static TypeDescriptor {
        match self {
            InputKind::Text => &TEXT,
            InputKind::Numeric => &NUMERIC,
            InputKind::DateTime => &DATE_TIME,
            InputKind::Checkbox => &CHECKBOX,
            InputKind::Radio => &RADIO,
            InputKind::Dropdown => &DROPDOWN,
            InputKind::Popup => &POPUP,
        }
    }

    /// Stable string id
    pub fn id(self) -> &'static str {
        self.descriptor().id
    }
}

/// Static definition of one selectable input type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    #[serde(skip)]
    pub kind: InputKind,
    /// Stable identifier
    pub id: &'static str,
    /// Human-readable label
    pub display_name: &'static str,
    /// Property names in display order
    pub property_names: &'static [&'static str],
}

/// Immutable, ordered registry of the input types offered by the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    types: Vec<TypeDescriptor>,
}

impl TypeCatalog {
    /// Build a catalog from kinds in display order.
    ///
    /// The first kind becomes the default selection.
    pub fn new(kinds: &[InputKind]) -> Result<Self> {
        if kinds.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut types: Vec<TypeDescriptor> = Vec::with_capacity(kinds.len());
        for kind in kinds {
            if types.iter().any(|t| t.kind == *kind) {
                return Err(Error::DuplicateType(kind.id().to_string()));
            }
            types.push(*kind.descriptor());
        }

        Ok(Self { types })
    }

    /// Catalog with every built-in kind
    pub fn builtin() -> Self {
        Self {
            types: ALL_KINDS.iter().map(|k| *k.descriptor()).collect(),
        }
    }

    /// All descriptors in display order
    pub fn list(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Look up a descriptor by id
    pub fn get(&self, id: &str) -> Result<&TypeDescriptor> {
        self.types
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::unknown_type(id))
    }

    /// Default selection
    pub fn first(&self) -> &TypeDescriptor {
        // non-empty by construction
        &self.types[0]
    }

    /// Index of `id` in display order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.types.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
