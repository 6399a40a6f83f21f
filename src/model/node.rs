//! Element tree consumed by the vimdoc renderer.
//!
//! The tree is a closed set of block and span kinds. Importers lower their
//! own AST into it; the renderer walks it depth-first in document order.

/// A parsed document: top-level blocks in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a document from its top-level blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Returns true if the document has no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Block-level elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Explicit anchor id, if the source format carries one.
        id: Option<String>,
        content: Vec<Inline>,
    },
    List {
        ordered: bool,
        items: Vec<ListItem>,
    },
    CodeBlock {
        /// Info string after the opening fence (language etc.).
        info: Option<String>,
        literal: String,
    },
    BlockQuote(Vec<Block>),
    /// Raw markup block (HTML in Markdown sources).
    RawBlock(String),
    HorizontalRule,
    Table {
        rows: Vec<TableRow>,
    },
    Footnote {
        label: String,
        blocks: Vec<Block>,
    },
    /// Document title block / front matter.
    TitleBlock(String),
}

impl Block {
    /// Paragraph holding a single text run.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(vec![Inline::text(text)])
    }

    /// Heading holding a single text run.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            id: None,
            content: vec![Inline::text(text)],
        }
    }

    /// List whose last item is flagged as the end of the list.
    pub fn list(ordered: bool, items: Vec<Vec<Block>>) -> Self {
        let count = items.len();
        let items = items
            .into_iter()
            .enumerate()
            .map(|(i, blocks)| ListItem {
                end_of_list: i + 1 == count,
                blocks,
            })
            .collect();
        Block::List { ordered, items }
    }

    /// Code block without an info string.
    pub fn code(literal: impl Into<String>) -> Self {
        Block::CodeBlock {
            info: None,
            literal: literal.into(),
        }
    }

    /// Short element name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading { .. } => "heading",
            Block::List { .. } => "list",
            Block::CodeBlock { .. } => "code block",
            Block::BlockQuote(_) => "block quote",
            Block::RawBlock(_) => "raw block",
            Block::HorizontalRule => "horizontal rule",
            Block::Table { .. } => "table",
            Block::Footnote { .. } => "footnote",
            Block::TitleBlock(_) => "title block",
        }
    }
}

/// One item of a [`Block::List`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    /// Set on the last item of its list.
    pub end_of_list: bool,
    pub blocks: Vec<Block>,
}

/// One row of a [`Block::Table`]; each cell is a run of inlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub header: bool,
    pub cells: Vec<Vec<Inline>>,
}

/// Span-level elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// Character entity, already in its final textual form.
    Entity(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    TripleEmphasis(Vec<Inline>),
    Code(String),
    /// Raw inline markup (HTML tags in Markdown sources).
    RawInline(String),
    AutoLink(String),
    Link {
        url: String,
        title: String,
        content: Vec<Inline>,
    },
    LineBreak,
    Image {
        url: String,
        title: String,
        alt: String,
    },
    Strikethrough(Vec<Inline>),
    FootnoteRef(String),
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    /// Link whose visible content is a single text run.
    pub fn link(url: impl Into<String>, text: impl Into<String>) -> Self {
        Inline::Link {
            url: url.into(),
            title: String::new(),
            content: vec![Inline::text(text)],
        }
    }

    /// Short element name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Inline::Text(_) => "text",
            Inline::Entity(_) => "entity",
            Inline::Emphasis(_) => "emphasis",
            Inline::Strong(_) => "strong emphasis",
            Inline::TripleEmphasis(_) => "triple emphasis",
            Inline::Code(_) => "inline code",
            Inline::RawInline(_) => "raw inline",
            Inline::AutoLink(_) => "autolink",
            Inline::Link { .. } => "link",
            Inline::LineBreak => "line break",
            Inline::Image { .. } => "image",
            Inline::Strikethrough(_) => "strikethrough",
            Inline::FootnoteRef(_) => "footnote reference",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_flags_last_item() {
        let list = Block::list(
            true,
            vec![
                vec![Block::paragraph("one")],
                vec![Block::paragraph("two")],
                vec![Block::paragraph("three")],
            ],
        );
        let Block::List { ordered, items } = list else {
            panic!("expected a list");
        };
        assert!(ordered);
        let flags: Vec<bool> = items.iter().map(|item| item.end_of_list).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_empty_list_has_no_items() {
        let Block::List { items, .. } = Block::list(false, Vec::new()) else {
            panic!("expected a list");
        };
        assert!(items.is_empty());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Block::HorizontalRule.kind(), "horizontal rule");
        assert_eq!(Block::Table { rows: Vec::new() }.kind(), "table");
        assert_eq!(Inline::FootnoteRef("1".into()).kind(), "footnote reference");
        assert_eq!(Inline::link("https://example.com", "x").kind(), "link");
    }
}
