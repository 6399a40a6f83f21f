//! Conversion options.

use super::headings::TagCase;

/// Default line width of a help file.
pub const DEFAULT_COLUMNS: usize = 80;

/// Default indent for list items and fenced blocks.
pub const DEFAULT_INDENT: usize = 4;

/// Configuration for vimdoc output.
///
/// # Example
///
/// ```
/// use vimdown::vimdoc::{TagCase, VimdocConfig};
///
/// let config = VimdocConfig::new()
///     .with_columns(78)
///     .with_description("Plugin for cooking")
///     .with_tag_case(TagCase::Capitalized);
/// assert_eq!(config.columns, 78);
/// assert!(!config.no_toc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VimdocConfig {
    /// Line width rules and split lines are padded to.
    pub columns: usize,
    /// Free text placed right of the file name on the first line.
    pub description: String,
    /// Skip the `=`/`-` rules above level 1 and 2 headings.
    pub no_rules: bool,
    /// Skip the Contents section.
    pub no_toc: bool,
    pub tag_case: TagCase,
    /// Indent width in spaces.
    pub indent: usize,
}

impl Default for VimdocConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            description: String::new(),
            no_rules: false,
            no_toc: false,
            tag_case: TagCase::Lower,
            indent: DEFAULT_INDENT,
        }
    }
}

impl VimdocConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_no_rules(mut self, no_rules: bool) -> Self {
        self.no_rules = no_rules;
        self
    }

    pub fn with_no_toc(mut self, no_toc: bool) -> Self {
        self.no_toc = no_toc;
        self
    }

    pub fn with_tag_case(mut self, tag_case: TagCase) -> Self {
        self.tag_case = tag_case;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
