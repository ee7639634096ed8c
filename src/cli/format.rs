//! Output formatting for CLI display.

use crate::model::Entry;
use crate::render::{Masking, RenderDescriptor, VariableInput};

/// Shown in place of a masked value.
const MASK: &str = "********";

/// Format a descriptor as terminal lines.
///
/// `current` is the value a variable input holds now; the descriptor only
/// knows the initial value.
pub(super) fn format_descriptor(
    descriptor: &RenderDescriptor,
    current: Option<&str>,
) -> Vec<String> {
    match descriptor {
        RenderDescriptor::Title { text } => vec![format!("# {text}")],
        RenderDescriptor::Transcript { lines } => lines.clone(),
        RenderDescriptor::CreateFile { file_path, content } => {
            let mut lines = vec![file_path.clone()];
            lines.extend(content.lines().map(|l| format!("    {l}")));
            lines
        }
        RenderDescriptor::Html { html } => vec![html.trim_end().to_string()],
        RenderDescriptor::VariableInput(input) => {
            let value = current.unwrap_or(input.initial_value.as_str());
            vec![format!("{}: {}", input.label, display_value(input.masking, value))]
        }
        RenderDescriptor::Unsupported { message } => vec![message.clone()],
    }
}

/// One line describing a variable input: index, label, masking, default.
pub(super) fn format_variable(index: usize, input: &VariableInput) -> String {
    let default = match (&input.default_value, input.masking) {
        (None, _) => "(none)".to_string(),
        (Some(value), masking) => display_value(masking, value),
    };
    format!(
        "{index:>3}  {}  [{}]  default: {default}",
        input.label,
        masking_label(input.masking)
    )
}

/// One line listing the slots an entry declares, if it declares any.
pub(super) fn format_slots(index: usize, entry: &Entry) -> Option<String> {
    let variables = entry.variables.as_ref().filter(|v| !v.is_empty())?;
    let slots = variables
        .iter()
        .map(|name| match entry.value(name) {
            Some(value) => format!("{name}={value}"),
            None => name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("{index:>3}  {}  slots: {slots}", entry.kind))
}

fn display_value(masking: Masking, value: &str) -> String {
    match (masking, value.is_empty()) {
        (_, true) => "(empty)".to_string(),
        (Masking::Password, false) => MASK.to_string(),
        (Masking::Text, false) => value.to_string(),
    }
}

fn masking_label(masking: Masking) -> &'static str {
    match masking {
        Masking::Password => "password",
        Masking::Text => "text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn input(masking: Masking, default: Option<&str>) -> VariableInput {
        VariableInput {
            label: "NAME".to_string(),
            masking,
            default_value: default.map(String::from),
            initial_value: default.unwrap_or_default().to_string(),
        }
    }

    #[test]
    fn create_file_indents_contents() {
        let descriptor = RenderDescriptor::CreateFile {
            file_path: "Create the file: a/Main.java, with the following contents".to_string(),
            content: "class Main {\n}".to_string(),
        };
        assert_eq!(
            format_descriptor(&descriptor, None),
            vec![
                "Create the file: a/Main.java, with the following contents",
                "    class Main {",
                "    }",
            ]
        );
    }

    #[test]
    fn password_input_is_masked() {
        let descriptor = RenderDescriptor::VariableInput(input(Masking::Password, None));
        assert_eq!(
            format_descriptor(&descriptor, Some("hunter2")),
            vec!["NAME: ********"]
        );
    }

    #[test]
    fn text_input_shows_current_value() {
        let descriptor = RenderDescriptor::VariableInput(input(Masking::Text, Some("Albert")));
        assert_eq!(format_descriptor(&descriptor, None), vec!["NAME: Albert"]);
        assert_eq!(
            format_descriptor(&descriptor, Some("Bert")),
            vec!["NAME: Bert"]
        );
        assert_eq!(format_descriptor(&descriptor, Some("")), vec!["NAME: (empty)"]);
    }

    #[test]
    fn variable_line_shows_default() {
        assert_eq!(
            format_variable(2, &input(Masking::Text, Some("Albert"))),
            "  2  NAME  [text]  default: Albert"
        );
        assert_eq!(
            format_variable(2, &input(Masking::Password, None)),
            "  2  NAME  [password]  default: (none)"
        );
    }

    #[test]
    fn slots_list_values_when_resolved() {
        let entry: Entry = serde_json::from_value(json!({
            "type": "docker-tag-and-push",
            "variables": ["DOCKER_USERNAME", "TAG"],
            "values": { "DOCKER_USERNAME": "albert" }
        }))
        .unwrap();
        assert_eq!(
            format_slots(4, &entry).unwrap(),
            "  4  docker-tag-and-push  slots: DOCKER_USERNAME=albert, TAG"
        );
    }

    #[test]
    fn no_slots_no_line() {
        let entry: Entry = serde_json::from_value(json!({ "type": "command" })).unwrap();
        assert!(format_slots(0, &entry).is_none());
    }
}
