//! Chapter session: a loaded chapter plus the controls the reader edits.
//!
//! The session owns the chapter. Commits go through a variable control,
//! and any event that comes out is applied to every entry through the
//! store, in commit order. Callers only ever see `&Chapter`.

use std::collections::BTreeMap;

use tracing::debug;

use crate::control::VariableControl;
use crate::error::{Error, Result};
use crate::model::{Chapter, EntryKind, VariableChange, VariableEvent, set_value};
use crate::render::{MarkdownRenderer, RenderDescriptor, render_all};

/// A chapter being read, with its variable state.
#[derive(Debug, Clone)]
pub struct ChapterSession {
    chapter: Chapter,

    /// One control per variable entry, keyed by entry index.
    controls: BTreeMap<usize, VariableControl>,

    /// Every event emitted this session, in order.
    events: Vec<VariableEvent>,
}

impl ChapterSession {
    /// Starts a session, mounting a control for each variable entry.
    ///
    /// Defaults announced at mount are applied in entry order.
    #[must_use]
    pub fn new(chapter: Chapter) -> Self {
        let mut session = Self {
            chapter,
            controls: BTreeMap::new(),
            events: Vec::new(),
        };

        let mut mounted = Vec::new();
        for (index, entry) in session.chapter.entries.iter().enumerate() {
            if entry.kind == EntryKind::Variable {
                let (control, event) = VariableControl::mount(entry);
                session.controls.insert(index, control);
                mounted.extend(event);
            }
        }
        for event in mounted {
            session.apply(event);
        }

        session
    }

    /// Read-only view of the chapter.
    #[must_use]
    pub fn chapter(&self) -> &Chapter {
        &self.chapter
    }

    /// Events emitted so far, mount events included.
    #[must_use]
    pub fn events(&self) -> &[VariableEvent] {
        &self.events
    }

    /// The control for the variable entry at `index`.
    #[must_use]
    pub fn control(&self, index: usize) -> Option<&VariableControl> {
        self.controls.get(&index)
    }

    /// Commits `value` to the variable entry at `index`.
    ///
    /// Returns the emitted event, or `None` for a commit that changes nothing.
    ///
    /// # Errors
    ///
    /// [`Error::EntryNotFound`] when `index` is past the end of the chapter,
    /// [`Error::NotAVariable`] when the entry there is not a variable.
    pub fn commit(&mut self, index: usize, value: &str) -> Result<Option<VariableEvent>> {
        let Some(control) = self.controls.get_mut(&index) else {
            let entry = self
                .chapter
                .entries
                .get(index)
                .ok_or(Error::EntryNotFound(index))?;
            return Err(Error::NotAVariable {
                index,
                kind: entry.kind.to_string(),
            });
        };

        let event = control.commit(value);
        if let Some(event) = &event {
            self.apply(event.clone());
        }
        Ok(event)
    }

    /// Commits `value` to the first variable entry named `name`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownVariable`] when no variable entry has that name.
    pub fn commit_by_name(&mut self, name: &str, value: &str) -> Result<Option<VariableEvent>> {
        let index = self
            .controls
            .iter()
            .find(|(_, control)| control.name() == name)
            .map(|(index, _)| *index)
            .ok_or_else(|| Error::UnknownVariable(name.to_string()))?;
        self.commit(index, value)
    }

    /// Renders every entry against the current state.
    #[must_use]
    pub fn render(&self, markdown: &dyn MarkdownRenderer) -> Vec<RenderDescriptor> {
        render_all(&self.chapter.entries, markdown)
    }

    /// Records `event` and routes it at every entry.
    fn apply(&mut self, event: VariableEvent) {
        let written = self
            .chapter
            .entries
            .iter_mut()
            .map(|entry| set_value(entry, &event))
            .filter(|written| *written)
            .count();
        debug!(variable = event.name(), entries = written, "applied variable event");
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::model::{VariableInitialised, VariableUpdated};
    use crate::render::ComrakRenderer;

    fn chapter(value: serde_json::Value) -> Chapter {
        serde_json::from_value(value).unwrap()
    }

    fn docker_chapter() -> Chapter {
        chapter(json!({
            "entries": [
                { "type": "chapter", "parameters": ["Publish"] },
                { "type": "variable", "name": "DOCKER_USERNAME", "sensitive": false },
                {
                    "type": "docker-tag-and-push",
                    "workingDirectory": "hello-world",
                    "parameters": ["hello-world:v8.0.4", "${DOCKER_USERNAME}/hello-world:v8.0.4"],
                    "variables": ["DOCKER_USERNAME"]
                },
                { "type": "command", "parameters": ["docker", "images"] }
            ]
        }))
    }

    #[test]
    fn commit_flows_into_declaring_entries() {
        let mut session = ChapterSession::new(docker_chapter());

        let event = session.commit(1, "albert").unwrap();
        assert_eq!(
            event,
            Some(VariableEvent::VariableInitialised(VariableInitialised {
                name: "DOCKER_USERNAME".to_string(),
                value: "albert".to_string(),
            }))
        );

        let entries = &session.chapter().entries;
        assert_eq!(entries[2].value("DOCKER_USERNAME"), Some("albert"));
        assert!(entries[3].values().is_none());
        assert!(entries[1].values().is_none());
    }

    #[test]
    fn mount_defaults_are_applied() {
        let session = ChapterSession::new(chapter(json!({
            "entries": [
                { "type": "variable", "name": "NAME", "parameters": ["Albert Attard"] },
                { "type": "command", "parameters": ["echo", "${NAME}"], "variables": ["NAME"] }
            ]
        })));

        assert_eq!(session.events().len(), 1);
        assert_eq!(
            session.chapter().entries[1].value("NAME"),
            Some("Albert Attard")
        );
    }

    #[test]
    fn events_are_applied_in_commit_order() {
        let mut session = ChapterSession::new(docker_chapter());
        session.commit(1, "a").unwrap();
        session.commit(1, "b").unwrap();
        session.commit(1, "a").unwrap();

        assert_eq!(
            session.chapter().entries[2].value("DOCKER_USERNAME"),
            Some("a")
        );
        assert_eq!(session.events().len(), 3);
        assert_eq!(
            session.events()[2],
            VariableEvent::VariableUpdated(VariableUpdated {
                name: "DOCKER_USERNAME".to_string(),
                value: "a".to_string(),
                previous_value: "b".to_string(),
            })
        );
    }

    #[test]
    fn unchanged_commit_is_not_recorded() {
        let mut session = ChapterSession::new(docker_chapter());
        assert_eq!(session.commit(1, "").unwrap(), None);
        assert!(session.events().is_empty());
        assert!(session.control(1).unwrap().is_pristine());
    }

    #[test]
    fn commit_by_name_finds_the_control() {
        let mut session = ChapterSession::new(docker_chapter());
        session.commit_by_name("DOCKER_USERNAME", "albert").unwrap();
        assert_eq!(
            session.chapter().entries[2].value("DOCKER_USERNAME"),
            Some("albert")
        );
    }

    #[test]
    fn commit_to_missing_entry_fails() {
        let mut session = ChapterSession::new(docker_chapter());
        assert!(matches!(
            session.commit(9, "x"),
            Err(Error::EntryNotFound(9))
        ));
    }

    #[test]
    fn commit_to_non_variable_fails() {
        let mut session = ChapterSession::new(docker_chapter());
        let err = session.commit(3, "x").unwrap_err();
        assert!(matches!(err, Error::NotAVariable { index: 3, .. }));
        assert_eq!(err.to_string(), "entry 3 is of type 'command', not a variable");
    }

    #[test]
    fn commit_by_unknown_name_fails() {
        let mut session = ChapterSession::new(docker_chapter());
        assert!(matches!(
            session.commit_by_name("PASSWORD", "x"),
            Err(Error::UnknownVariable(name)) if name == "PASSWORD"
        ));
    }

    #[test]
    fn render_reflects_chapter_in_order() {
        let mut session = ChapterSession::new(docker_chapter());
        session.commit(1, "albert").unwrap();

        let rendered = session.render(&ComrakRenderer::default());
        assert_eq!(rendered.len(), 4);
        assert_eq!(
            rendered[0],
            RenderDescriptor::Title {
                text: "Publish".to_string()
            }
        );
        // The dispatcher never substitutes placeholders.
        assert_eq!(
            rendered[2],
            RenderDescriptor::Transcript {
                lines: vec![
                    "hello-world $ docker tag hello-world:v8.0.4 ${DOCKER_USERNAME}/hello-world:v8.0.4"
                        .to_string(),
                    "hello-world $ docker push ${DOCKER_USERNAME}/hello-world:v8.0.4".to_string(),
                ]
            }
        );
    }
}
