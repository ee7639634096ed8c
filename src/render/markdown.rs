//! Markdown conversion, the one external collaborator of the dispatcher.

use comrak::{Options, markdown_to_html};

use crate::config::MarkdownConfig;

/// Converts markdown to HTML.
///
/// Output is trusted and inserted verbatim; no sanitization happens here.
pub trait MarkdownRenderer {
    fn to_html(&self, markdown: &str) -> String;
}

/// [`MarkdownRenderer`] backed by comrak.
pub struct ComrakRenderer {
    options: Options<'static>,
}

impl ComrakRenderer {
    /// Builds a renderer with the extensions enabled in `config`.
    ///
    /// Raw HTML in the source is passed through.
    #[must_use]
    pub fn new(config: &MarkdownConfig) -> Self {
        let mut options = Options::default();
        options.extension.table = config.tables;
        options.extension.strikethrough = config.strikethrough;
        options.extension.autolink = config.autolink;
        options.extension.tasklist = config.tasklist;
        options.render.unsafe_ = true;
        Self { options }
    }
}

impl Default for ComrakRenderer {
    fn default() -> Self {
        Self::new(&MarkdownConfig::default())
    }
}

impl MarkdownRenderer for ComrakRenderer {
    fn to_html(&self, markdown: &str) -> String {
        markdown_to_html(markdown, &self.options)
    }
}
