//! Variable control: turns reader commits into variable events.
//!
//! Each variable entry gets one control. A control starts `Pristine`,
//! holding the entry's default as its baseline, and moves to `Changed`
//! once a value has been committed. Committing the value the control
//! already holds emits nothing.
//!
//! A control whose entry declares a default reports that default as
//! [`VariableInitialised`] when mounted, so later commits compare against
//! it and report [`VariableUpdated`].

use tracing::debug;

use crate::model::{Entry, VariableEvent, VariableInitialised, VariableUpdated};

/// Where a control is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ControlState {
    /// Nothing committed yet. Holds the value shown before any input.
    Pristine { baseline: String },

    /// A value has been committed (or announced at mount).
    Changed { committed: String },
}

/// Commit state for one variable input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableControl {
    name: String,
    state: ControlState,
}

impl VariableControl {
    /// Mounts a control for `entry`.
    ///
    /// Returns the mount event when the entry declares a default.
    #[must_use]
    pub fn mount(entry: &Entry) -> (Self, Option<VariableEvent>) {
        let name = entry.name_or_empty().to_string();
        match entry.parameters.first() {
            Some(default) => {
                let event = VariableEvent::VariableInitialised(VariableInitialised {
                    name: name.clone(),
                    value: default.clone(),
                });
                let control = Self {
                    name,
                    state: ControlState::Changed {
                        committed: default.clone(),
                    },
                };
                debug!(variable = %control.name, "mounted with default");
                (control, Some(event))
            }
            None => (
                Self {
                    name,
                    state: ControlState::Pristine {
                        baseline: String::new(),
                    },
                },
                None,
            ),
        }
    }

    /// The variable this control edits.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value the control currently holds.
    #[must_use]
    pub fn current(&self) -> &str {
        match &self.state {
            ControlState::Pristine { baseline } => baseline,
            ControlState::Changed { committed } => committed,
        }
    }

    /// Whether nothing has been committed yet.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        matches!(self.state, ControlState::Pristine { .. })
    }

    /// Commits `value`, returning the event it produces, if any.
    ///
    /// `previous_value` on an update is always the value committed
    /// immediately before, even when the reader cycles back to an
    /// earlier value.
    pub fn commit(&mut self, value: &str) -> Option<VariableEvent> {
        if value == self.current() {
            debug!(variable = %self.name, "commit unchanged, no event");
            return None;
        }

        let event = match &self.state {
            ControlState::Pristine { .. } => {
                VariableEvent::VariableInitialised(VariableInitialised {
                    name: self.name.clone(),
                    value: value.to_string(),
                })
            }
            ControlState::Changed { committed } => VariableEvent::VariableUpdated(VariableUpdated {
                name: self.name.clone(),
                value: value.to_string(),
                previous_value: committed.clone(),
            }),
        };
        self.state = ControlState::Changed {
            committed: value.to_string(),
        };
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn mount(value: serde_json::Value) -> (VariableControl, Option<VariableEvent>) {
        let entry: Entry = serde_json::from_value(value).unwrap();
        VariableControl::mount(&entry)
    }

    fn updated(name: &str, value: &str, previous: &str) -> VariableEvent {
        VariableEvent::VariableUpdated(VariableUpdated {
            name: name.to_string(),
            value: value.to_string(),
            previous_value: previous.to_string(),
        })
    }

    #[test]
    fn default_is_announced_at_mount() {
        let (control, event) = mount(json!({
            "type": "variable",
            "name": "NAME",
            "sensitive": false,
            "parameters": ["Albert Attard"]
        }));

        assert_eq!(
            event,
            Some(VariableEvent::VariableInitialised(VariableInitialised {
                name: "NAME".to_string(),
                value: "Albert Attard".to_string(),
            }))
        );
        assert_eq!(control.current(), "Albert Attard");
    }

    #[test]
    fn no_default_mounts_pristine_and_silent() {
        let (control, event) = mount(json!({ "name": "NAME", "type": "variable" }));
        assert!(event.is_none());
        assert!(control.is_pristine());
        assert_eq!(control.current(), "");
    }

    #[test]
    fn unchanged_commit_emits_nothing() {
        let (mut control, _) = mount(json!({ "type": "variable", "name": "NAME" }));
        assert!(control.commit("").is_none());
        assert!(control.is_pristine());

        let (mut control, _) =
            mount(json!({ "type": "variable", "name": "NAME", "parameters": ["x"] }));
        assert!(control.commit("x").is_none());
    }

    #[test]
    fn first_change_without_default_initialises() {
        let (mut control, _) = mount(json!({ "type": "variable", "name": "NAME" }));

        assert_eq!(
            control.commit("Albert"),
            Some(VariableEvent::VariableInitialised(VariableInitialised {
                name: "NAME".to_string(),
                value: "Albert".to_string(),
            }))
        );
        assert!(!control.is_pristine());
        assert_eq!(control.commit("Bert"), Some(updated("NAME", "Bert", "Albert")));
    }

    #[test]
    fn changing_back_to_the_default_is_an_update() {
        let (mut control, _) = mount(json!({
            "type": "variable",
            "name": "NAME",
            "parameters": ["Hello world"]
        }));

        let events: Vec<_> = ["Hallo Welt", "Hello world"]
            .into_iter()
            .filter_map(|v| control.commit(v))
            .collect();

        assert_eq!(
            events,
            vec![
                updated("NAME", "Hallo Welt", "Hello world"),
                updated("NAME", "Hello world", "Hallo Welt"),
            ]
        );
    }

    #[test]
    fn previous_value_tracks_the_immediately_prior_commit() {
        let (mut control, _) = mount(json!({ "type": "variable", "name": "V" }));
        control.commit("A");

        assert_eq!(control.commit("B"), Some(updated("V", "B", "A")));
        assert_eq!(control.commit("A"), Some(updated("V", "A", "B")));
        assert!(control.commit("A").is_none());
        assert_eq!(control.commit("C"), Some(updated("V", "C", "A")));
    }
}
