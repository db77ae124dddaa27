//! Error types for the input wizard

use crate::config::ConfigError;
use std::fmt;
use thiserror::Error;

/// Result type alias for input wizard operations
pub type Result<T> = std::result::Result<T, Error>;

/// What a failed lookup was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// An input type id in the catalog
    InputType,
    /// A property name in the current property list
    Property,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::InputType => f.write_str("input type"),
            Lookup::Property => f.write_str("property"),
        }
    }
}

/// Main error type for the input wizard
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown {lookup}: {key}")]
    NotFound { lookup: Lookup, key: String },

    #[error("Type catalog must contain at least one input type")]
    EmptyCatalog,

    #[error("Input type listed more than once in catalog: {0}")]
    DuplicateType(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build a `NotFound` for an unknown input type id
    pub fn unknown_type(id: impl Into<String>) -> Self {
        Error::NotFound {
            lookup: Lookup::InputType,
            key: id.into(),
        }
    }

    /// Build a `NotFound` for an unknown property name
    pub fn unknown_property(name: impl Into<String>) -> Self {
        Error::NotFound {
            lookup: Lookup::Property,
            key: name.into(),
        }
    }

    /// Whether this is a lookup failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
