//! Heading registry, help tags and chapter numbers.
//!
//! Headings are recorded in document order while the body is rendered. Chapter
//! numbers are computed afterwards from the frozen registry, which is why the
//! Contents section can only be built at finalization.

use std::path::Path;

use bstr::ByteSlice;

use crate::error::{Error, Result};

/// Casing used for help tags and the document title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagCase {
    /// `title-how_to_cook`: lowercase, spaces become underscores.
    #[default]
    Lower,
    /// `Title-HowToCook`: words capitalized, spaces removed.
    Capitalized,
}

impl TagCase {
    /// Turn heading text into the part of a help tag after the title.
    pub fn slug(self, text: &[u8]) -> String {
        let text = text.to_str_lossy();
        match self {
            TagCase::Lower => text.to_lowercase().replace(' ', "_"),
            TagCase::Capitalized => text.split(' ').map(capitalize).collect(),
        }
    }

    /// Normalize a document title.
    pub fn title(self, title: &str) -> String {
        match self {
            TagCase::Lower => title.to_lowercase(),
            TagCase::Capitalized => title.split(' ').map(capitalize).collect::<Vec<_>>().join(" "),
        }
    }
}

/// Upper-case the first character of `word`, leaving the rest alone.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Document title for a help file name: the file name without its extension.
pub fn derive_title(filename: &str, case: TagCase) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    case.title(&stem)
}

/// Help tag for `text` in a document titled `title`.
///
/// # Examples
///
/// ```
/// use vimdown::vimdoc::{TagCase, help_tag};
///
/// let text = b"How To Cook For Forty Humans";
/// assert_eq!(help_tag("rigellians", text, TagCase::Lower), "rigellians-how_to_cook_for_forty_humans");
/// assert_eq!(help_tag("Rigellians", text, TagCase::Capitalized), "Rigellians-HowToCookForFortyHumans");
/// ```
pub fn help_tag(title: &str, text: &[u8], case: TagCase) -> String {
    format!("{}-{}", title, case.slug(text))
}

/// A rendered heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Rendered inline content.
    pub text: Vec<u8>,
    /// Heading level (1-6).
    pub level: u8,
    /// Index in the registry.
    pub position: usize,
}

/// Every heading of the document, in document order.
#[derive(Debug, Clone, Default)]
pub struct HeadingRegistry {
    headings: Vec<Heading>,
}

impl HeadingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Heading> {
        self.headings.iter()
    }

    /// Append a heading and return it.
    pub fn register(&mut self, text: Vec<u8>, level: u8) -> &Heading {
        let position = self.headings.len();
        self.headings.push(Heading {
            text,
            level,
            position,
        });
        &self.headings[position]
    }

    /// Chapter number of the heading at `position`, e.g. `1.2.`.
    ///
    /// Walks back from the heading, counting earlier siblings at the current
    /// level and stepping out one counter each time a shallower heading
    /// appears. Deeper headings are skipped.
    pub fn chapter_number(&self, position: usize) -> Result<String> {
        let heading = self.headings.get(position).ok_or(Error::HeadingNotFound {
            position,
            len: self.headings.len(),
        })?;

        let mut level = heading.level;
        let mut counter = 1usize;
        let mut counters = Vec::new();

        for previous in self.headings[..position].iter().rev() {
            if previous.level == level {
                counter += 1;
            } else if previous.level < level {
                counters.push(counter);
                counter = 1;
                level = previous.level;
            }
        }
        counters.push(counter);

        let mut chapter = String::new();
        for counter in counters.iter().rev() {
            chapter.push_str(&counter.to_string());
            chapter.push('.');
        }
        Ok(chapter)
    }
}
