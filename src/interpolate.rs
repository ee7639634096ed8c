//! Placeholder substitution for display.
//!
//! The render dispatcher leaves `${NAME}` tokens alone. A presentation
//! layer that wants readers to see their own values calls [`interpolate`]
//! on the rendered text with the chapter's [`resolved_values`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::model::{Chapter, Entry};
use crate::render::RenderDescriptor;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Merges every entry's resolved values, in entry order.
///
/// When two entries hold a value for the same name, the later entry wins.
#[must_use]
pub fn resolved_values(chapter: &Chapter) -> BTreeMap<String, String> {
    chapter
        .entries
        .iter()
        .filter_map(Entry::values)
        .flatten()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Replaces `${NAME}` tokens with their value from `values`.
///
/// Tokens without a value are left verbatim.
#[must_use]
pub fn interpolate(text: &str, values: &BTreeMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Substitutes values into the display text of a descriptor.
///
/// Titles, transcript lines and the create instruction line are substituted.
/// File contents and HTML stay verbatim.
#[must_use]
pub fn interpolate_descriptor(
    descriptor: RenderDescriptor,
    values: &BTreeMap<String, String>,
) -> RenderDescriptor {
    match descriptor {
        RenderDescriptor::Title { text } => RenderDescriptor::Title {
            text: interpolate(&text, values),
        },
        RenderDescriptor::Transcript { lines } => RenderDescriptor::Transcript {
            lines: lines.iter().map(|l| interpolate(l, values)).collect(),
        },
        RenderDescriptor::CreateFile { file_path, content } => RenderDescriptor::CreateFile {
            file_path: interpolate(&file_path, values),
            content,
        },
        other => other,
    }
}
