//! Chapter documents on disk.
//!
//! A chapter is a single JSON document: `{ "entries": [...] }` plus optional
//! `chapterPath` and `bookPath` locators, which are carried but never read.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Chapter;

/// Loads a chapter from a JSON file.
///
/// # Errors
///
/// [`Error::Read`] when the file cannot be read, [`Error::Chapter`] when it
/// is not a valid chapter document.
pub fn load_chapter(path: &Path) -> Result<Chapter> {
    let json = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let chapter: Chapter = serde_json::from_str(&json).map_err(|source| Error::Chapter {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), entries = chapter.entries.len(), "loaded chapter");
    Ok(chapter)
}
