//! Rendering configuration for comparison reports

/// Marker pair wrapped around a rendered fragment
#[derive(Debug, Clone)]
pub struct Tag {
    pub begin: String,
    pub end: String,
}

impl Tag {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }

    pub(crate) fn wrap(&self, content: &str) -> String {
        format!("{}{}{}", self.begin, content, self.end)
    }
}

/// Options controlling how a comparison is rendered
///
/// Rendering options never influence the classification; two configurations
/// yield the same classification for the same pair of documents.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Wrapped around entries present only in the right document
    pub added: Tag,
    /// Wrapped around entries present only in the left document
    pub removed: Tag,
    /// Wrapped around `left => right` value pairs
    pub changed: Tag,
    /// Omit entries that are equal on both sides
    pub skip_matches: bool,
    /// Indentation per nesting level
    pub indent: String,
}

impl CompareOptions {
    /// Colorized configuration for immediate terminal viewing.
    ///
    /// Added entries render green, removed entries red, changed values
    /// yellow. Matched entries are kept.
    pub fn console() -> Self {
        Self {
            added: Tag::new("\x1b[0;32m", "\x1b[0m"),
            removed: Tag::new("\x1b[0;31m", "\x1b[0m"),
            changed: Tag::new("\x1b[0;33m", "\x1b[0m"),
            skip_matches: false,
            indent: "    ".to_string(),
        }
    }

    /// Plain configuration for the cumulative Markdown report.
    ///
    /// No escape codes, `+ `/`- ` markers for added and removed entries,
    /// and matched lines suppressed so only the differences remain.
    pub fn markdown() -> Self {
        Self {
            added: Tag::new("+ ", ""),
            removed: Tag::new("- ", ""),
            changed: Tag::new("", ""),
            skip_matches: true,
            indent: "    ".to_string(),
        }
    }

    /// Keep or drop matched entries in the rendering.
    pub fn with_skip_matches(mut self, skip: bool) -> Self {
        self.skip_matches = skip;
        self
    }
}
