//! Heading outline of a converted document.
//!
//! The outline is the frozen heading registry after a conversion: every
//! heading in document order with its chapter number and help tag. It is
//! what the Contents section is built from, exposed for tooling.

/// Headings of one converted document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Outline {
    /// Document title the help tags are prefixed with.
    pub title: String,
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Vec::is_empty"))]
    pub entries: Vec<OutlineEntry>,
}

/// A single heading.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct OutlineEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Chapter number, e.g. `1.2.`.
    pub chapter: String,
    /// Rendered heading text.
    pub text: String,
    /// Help tag, without the `*`/`|` delimiters.
    pub tag: String,
}

impl Outline {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the first entry carrying `tag`.
    pub fn find_tag(&self, tag: &str) -> Option<&OutlineEntry> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }
}
