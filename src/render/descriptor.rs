//! Render descriptors: what the dispatcher says to display for one entry.

use serde::Serialize;

use crate::model::Entry;

/// What should be displayed for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RenderDescriptor {
    /// Chapter title text.
    Title { text: String },

    /// Shell transcript lines, prompt included.
    Transcript { lines: Vec<String> },

    /// A file to create: the instruction line and the verbatim contents.
    CreateFile { file_path: String, content: String },

    /// Trusted HTML from the markdown converter.
    Html { html: String },

    /// An input control for a variable.
    VariableInput(VariableInput),

    /// Fallback text for kinds the dispatcher does not know.
    Unsupported { message: String },
}

/// An input control for a variable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableInput {
    pub label: String,
    pub masking: Masking,

    /// The declared default, kept apart from `initial_value` so "no default"
    /// and "empty default" stay distinguishable.
    pub default_value: Option<String>,

    /// What the input shows before the reader types anything.
    pub initial_value: String,
}

impl VariableInput {
    pub(super) fn for_entry(entry: &Entry) -> Self {
        let default_value = entry.parameters.first().cloned();
        Self {
            label: entry.name_or_empty().to_string(),
            masking: if entry.is_sensitive() {
                Masking::Password
            } else {
                Masking::Text
            },
            initial_value: default_value.clone().unwrap_or_default(),
            default_value,
        }
    }
}

/// How an input displays what is typed into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Masking {
    Password,
    Text,
}
