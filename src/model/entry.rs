//! Entry: one step within a chapter.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One step within a chapter.
///
/// Only `type` is required in a document; every other field is optional
/// and falls back to a documented default when read.
///
/// `values` is private to the model: the variable store is its only writer.
/// Everyone else reads it through [`Entry::values`] and [`Entry::value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: EntryKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Directory the step is shown as running in. Display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,

    /// Kind-specific arguments. May contain `${NAME}` placeholders.
    #[serde(default)]
    pub parameters: Vec<String>,

    /// Variable slots this entry may hold a value for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<String>>,

    /// Resolved variable values. Every key is an element of `variables`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) values: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_errors: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_changes: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// Whether a variable's value should be masked. Absent means masked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_exit_value: Option<i32>,

    /// Seconds. Display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_timeout: Option<u64>,
}

impl Entry {
    /// Builds an entry of the given kind with every optional field unset.
    #[must_use]
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            id: None,
            name: None,
            working_directory: None,
            parameters: Vec::new(),
            variables: None,
            values: None,
            ignore_errors: None,
            push_changes: None,
            dry_run: None,
            visible: None,
            sensitive: None,
            expected_exit_value: None,
            command_timeout: None,
        }
    }

    /// The parameter at `index`, or an empty string when absent.
    #[must_use]
    pub fn parameter(&self, index: usize) -> &str {
        self.parameters.get(index).map_or("", String::as_str)
    }

    /// The entry's name, or an empty string when absent.
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Whether input for this entry is masked. Defaults to masked.
    #[must_use]
    pub fn is_sensitive(&self) -> bool {
        self.sensitive.unwrap_or(true)
    }

    /// Whether the entry declares a slot for `name`.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.variables
            .as_ref()
            .is_some_and(|vars| vars.iter().any(|v| v == name))
    }

    /// Read-only view of the resolved values, if any were ever written.
    #[must_use]
    pub fn values(&self) -> Option<&BTreeMap<String, String>> {
        self.values.as_ref()
    }

    /// The resolved value for `name`, if one has been written.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.as_ref()?.get(name).map(String::as_str)
    }
}

/// The kind of step an entry describes.
///
/// Closed over the kinds the renderer knows. Anything else lands in
/// [`EntryKind::Unknown`] carrying the original tag, so documents with
/// newer kinds still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryKind {
    Chapter,
    Command,
    Create,
    DockerTagAndPush,
    Download,
    Markdown,
    Variable,
    Unknown(String),
}

impl EntryKind {
    /// The tag as it appears in documents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Chapter => "chapter",
            Self::Command => "command",
            Self::Create => "create",
            Self::DockerTagAndPush => "docker-tag-and-push",
            Self::Download => "download",
            Self::Markdown => "markdown",
            Self::Variable => "variable",
            Self::Unknown(tag) => tag,
        }
    }
}

impl From<String> for EntryKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "chapter" => Self::Chapter,
            "command" => Self::Command,
            "create" => Self::Create,
            "docker-tag-and-push" => Self::DockerTagAndPush,
            "download" => Self::Download,
            "markdown" => Self::Markdown,
            "variable" => Self::Variable,
            _ => Self::Unknown(tag),
        }
    }
}

impl From<EntryKind> for String {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
