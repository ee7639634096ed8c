//! Chapter: the ordered document of steps shown to a reader.

use serde::{Deserialize, Serialize};

use super::Entry;

/// An ordered document of steps.
///
/// Entry order is render order. The sequence is fixed once loaded;
/// only the `values` of individual entries change during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub entries: Vec<Entry>,

    /// Where the chapter came from. Opaque, never interpreted.
    #[serde(default)]
    pub chapter_path: String,

    /// Which book the chapter belongs to. Opaque, never interpreted.
    #[serde(default)]
    pub book_path: String,
}

impl Chapter {
    /// Builds a chapter from entries with empty locators.
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            chapter_path: String::new(),
            book_path: String::new(),
        }
    }
}
