//! Variable events: what a variable control reports when the reader commits.

use serde::{Deserialize, Serialize};

/// The first known value for a variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableInitialised {
    pub name: String,
    pub value: String,
}

/// A change to a variable's value.
///
/// `previous_value` is the value committed immediately before this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableUpdated {
    pub name: String,
    pub value: String,
    pub previous_value: String,
}

/// Either variable event, tagged so a stream of them is self-describing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum VariableEvent {
    VariableInitialised(VariableInitialised),
    VariableUpdated(VariableUpdated),
}

/// The part of a variable event the store cares about.
pub trait VariableChange {
    fn name(&self) -> &str;
    fn value(&self) -> &str;
}

impl VariableChange for VariableInitialised {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl VariableChange for VariableUpdated {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl VariableChange for VariableEvent {
    fn name(&self) -> &str {
        match self {
            Self::VariableInitialised(e) => e.name(),
            Self::VariableUpdated(e) => e.name(),
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::VariableInitialised(e) => e.value(),
            Self::VariableUpdated(e) => e.value(),
        }
    }
}
