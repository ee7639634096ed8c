//! Render dispatcher: turns one entry into a description of what to show.
//!
//! Dispatch is an exhaustive match over [`EntryKind`]. Unknown kinds render
//! a fallback message instead of failing, so one odd step never blanks
//! the rest of the chapter. `${NAME}` placeholders in parameters pass
//! through untouched; substitution belongs to whoever displays the result.

mod descriptor;
mod markdown;

use tracing::debug;

use crate::model::{Entry, EntryKind};

pub use descriptor::{Masking, RenderDescriptor, VariableInput};
pub use markdown::{ComrakRenderer, MarkdownRenderer};

/// Prefix of the message shown for entries of an unknown kind.
///
/// The spelling is part of the user-facing contract and must not be fixed.
pub const UNSUPPORTED_PREFIX: &str = "Do not know how to renter entries of type: ";

/// Renders a single entry.
#[must_use]
pub fn render(entry: &Entry, markdown: &dyn MarkdownRenderer) -> RenderDescriptor {
    match &entry.kind {
        EntryKind::Chapter => RenderDescriptor::Title {
            text: entry.parameter(0).to_string(),
        },
        EntryKind::Command => RenderDescriptor::Transcript {
            lines: vec![format!("{}{}", prompt(entry), entry.parameters.join(" "))],
        },
        EntryKind::Create => RenderDescriptor::CreateFile {
            file_path: format!(
                "Create the file: {}, with the following contents",
                file_path(entry)
            ),
            content: entry.parameter(1).to_string(),
        },
        EntryKind::DockerTagAndPush => {
            let prompt = prompt(entry);
            let (source, target) = (entry.parameter(0), entry.parameter(1));
            RenderDescriptor::Transcript {
                lines: vec![
                    format!("{prompt}docker tag {source} {target}"),
                    format!("{prompt}docker push {target}"),
                ],
            }
        }
        EntryKind::Download => RenderDescriptor::Transcript {
            lines: vec![format!(
                "{}curl --location {} --output {}",
                prompt(entry),
                entry.parameter(0),
                entry.parameter(1)
            )],
        },
        EntryKind::Markdown => RenderDescriptor::Html {
            html: markdown.to_html(entry.parameter(0)),
        },
        EntryKind::Variable => RenderDescriptor::VariableInput(VariableInput::for_entry(entry)),
        EntryKind::Unknown(tag) => {
            debug!(kind = %tag, "no renderer for entry kind");
            RenderDescriptor::Unsupported {
                message: format!("{UNSUPPORTED_PREFIX}{tag}"),
            }
        }
    }
}

/// Renders every entry of a chapter in order.
#[must_use]
pub fn render_all<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
    markdown: &dyn MarkdownRenderer,
) -> Vec<RenderDescriptor> {
    entries
        .into_iter()
        .map(|entry| render(entry, markdown))
        .collect()
}

/// Shell prompt for transcript lines: `"<dir> $ "`, or `"$ "` without a directory.
fn prompt(entry: &Entry) -> String {
    match entry.working_directory.as_deref() {
        Some(dir) => format!("{dir} $ "),
        None => "$ ".to_string(),
    }
}

/// Path of the file a `create` entry writes: `<dir>/<name>`, with an empty
/// directory when none is set.
fn file_path(entry: &Entry) -> String {
    format!(
        "{}/{}",
        entry.working_directory.as_deref().unwrap_or_default(),
        entry.parameter(0)
    )
}
