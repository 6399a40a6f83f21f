//! Element tree → vimdoc rendering.
//!
//! A [`Renderer`] is one conversion session. It walks the element tree in
//! document order, one handler per element kind, writing into a single
//! [`OutputBuffer`]. Parents that need to post-process their children
//! (headings, list items, block quotes) render them into the buffer first,
//! then take the bytes back out with a [`Mark`](super::buffer::Mark).
//!
//! [`Renderer::finish`] consumes the session and runs the finalization pass.

use bstr::ByteSlice;
use tracing::{debug, warn};

use crate::error::Result;
use crate::model::{Block, Document, Inline, ListItem, Outline, TableRow};

use super::buffer::OutputBuffer;
use super::config::VimdocConfig;
use super::finalize;
use super::headings::{HeadingRegistry, derive_title, help_tag};
use super::layout;
use super::lists::{ListStack, ListStyle};

/// Non-fatal problem found while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Element kind that caused it.
    pub kind: &'static str,
    pub message: String,
}

/// Result of one conversion.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// The finished help file.
    pub text: Vec<u8>,
    /// Every heading with its chapter number and tag.
    pub outline: Outline,
    pub diagnostics: Vec<Diagnostic>,
}

/// One document conversion.
pub struct Renderer<'c> {
    config: &'c VimdocConfig,
    filename: String,
    title: String,
    out: OutputBuffer,
    lists: ListStack,
    headings: HeadingRegistry,
    /// Where the Contents section goes; set once by the document prologue.
    toc_offset: Option<usize>,
    diagnostics: Vec<Diagnostic>,
}

impl<'c> Renderer<'c> {
    /// Start a session for the help file `filename` (e.g. `plugin.txt`).
    pub fn new(config: &'c VimdocConfig, filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let title = derive_title(&filename, config.tag_case);
        Self {
            config,
            filename,
            title,
            out: OutputBuffer::new(),
            lists: ListStack::new(),
            headings: HeadingRegistry::new(),
            toc_offset: None,
            diagnostics: Vec::new(),
        }
    }

    /// Title help tags are prefixed with.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render a whole document and finalize it.
    pub fn render(mut self, document: &Document) -> Result<Rendered> {
        self.document_header();
        self.blocks(&document.blocks)?;
        self.finish()
    }

    /// First line of the file, followed by a blank line.
    ///
    /// The Contents section is later inserted right after it.
    pub fn document_header(&mut self) {
        if self.config.description.is_empty() {
            self.out.write(&self.filename);
            self.out.newline();
        } else {
            layout::split_line(
                &mut self.out,
                self.filename.as_bytes(),
                self.config.description.as_bytes(),
                b' ',
                0,
                self.config.columns,
            );
        }
        self.out.newline();

        if self.toc_offset.is_none() {
            self.toc_offset = Some(self.out.len());
        }
    }

    pub fn blocks(&mut self, blocks: &[Block]) -> Result<()> {
        for block in blocks {
            self.block(block)?;
        }
        Ok(())
    }

    pub fn block(&mut self, block: &Block) -> Result<()> {
        match block {
            Block::Paragraph(content) => self.paragraph(content),
            Block::Heading { level, content, .. } => self.heading(*level, content),
            Block::List { ordered, items } => self.list(*ordered, items)?,
            Block::CodeBlock { literal, .. } => self.fenced(literal.as_bytes()),
            Block::BlockQuote(blocks) => self.block_quote(blocks)?,
            Block::RawBlock(raw) => self.fenced(raw.as_bytes()),
            Block::HorizontalRule => layout::rule(&mut self.out, b'-', self.config.columns),
            Block::Table { rows } => self.table(rows),
            Block::Footnote { label, .. } => {
                self.unsupported(block.kind(), format!("footnote [^{label}] dropped"))
            }
            Block::TitleBlock(_) => self.unsupported(block.kind(), "title block dropped".into()),
        }
        Ok(())
    }

    fn paragraph(&mut self, content: &[Inline]) {
        let mark = self.out.mark();
        self.inlines(content);
        if self.out.unchanged_since(mark) {
            return;
        }
        self.out.write("\n\n");
    }

    fn heading(&mut self, level: u8, content: &[Inline]) {
        let start = self.out.mark();
        if !self.config.no_rules
            && let Some(fill) = layout::heading_rule(level)
        {
            layout::rule(&mut self.out, fill, self.config.columns);
        }

        let text_start = self.out.mark();
        self.inlines(content);
        if self.out.unchanged_since(text_start) {
            // No text: drop the rule too.
            self.out.truncate(start);
            return;
        }

        // A help tag must stay on one line.
        let text = self.out.take_since(text_start).replace(b"\n", b" ");
        let heading = self.headings.register(text, level);
        let tag = help_tag(&self.title, &heading.text, self.config.tag_case);
        layout::heading_line(&mut self.out, &heading.text, &tag, self.config.columns);
    }

    fn list(&mut self, ordered: bool, items: &[ListItem]) -> Result<()> {
        self.lists.push(ListStyle::from_ordered(ordered));
        for item in items {
            self.list_item(item)?;
        }
        self.lists.pop()?;
        Ok(())
    }

    fn list_item(&mut self, item: &ListItem) -> Result<()> {
        let marker = self.lists.top_mut()?.next_marker();
        self.out.write(&marker);

        let content_start = self.out.mark();
        self.blocks(&item.blocks)?;
        let content = self.out.take_since(content_start);
        layout::indent_block(&mut self.out, &content, self.config.indent, marker.len());
        if self.out.unchanged_since(content_start) {
            self.out.newline();
        }

        if item.end_of_list {
            self.out.newline();
        }
        Ok(())
    }

    fn block_quote(&mut self, blocks: &[Block]) -> Result<()> {
        let start = self.out.mark();
        self.blocks(blocks)?;
        let content = self.out.take_since(start);
        self.fenced(&content);
        Ok(())
    }

    /// Literal block between bare `>` and `<` lines.
    fn fenced(&mut self, content: &[u8]) {
        self.out.write(">\n");
        layout::indent_block(&mut self.out, content, self.config.indent, 0);
        self.out.write("<\n\n");
    }

    fn table(&mut self, rows: &[TableRow]) {
        self.unsupported("table", format!("table with {} rows dropped", rows.len()));
        for row in rows {
            self.table_row(row);
        }
    }

    fn table_row(&mut self, row: &TableRow) {
        let kind = if row.header { "header row" } else { "row" };
        self.unsupported("table row", format!("table {kind} dropped"));
        for _ in &row.cells {
            self.unsupported("table cell", "table cell dropped".into());
        }
    }

    pub fn inlines(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            self.inline(inline);
        }
    }

    pub fn inline(&mut self, inline: &Inline) {
        match inline {
            Inline::Text(text) | Inline::Entity(text) => self.out.write(text),
            Inline::Emphasis(content) | Inline::Strong(content) | Inline::TripleEmphasis(content) => {
                self.inlines(content)
            }
            Inline::Code(code) => {
                self.out.push(b'`');
                self.out.write(code);
                self.out.push(b'`');
            }
            Inline::RawInline(raw) => self.out.write(raw),
            Inline::AutoLink(link) => self.out.write(link),
            Inline::Link { url, content, .. } => {
                self.inlines(content);
                self.out.write(" (");
                self.out.write(url);
                self.out.push(b')');
            }
            Inline::LineBreak => self.out.newline(),
            // The help viewer has no way to show images.
            Inline::Image { .. } => {}
            Inline::Strikethrough(_) => {
                self.unsupported(inline.kind(), "strikethrough text dropped".into())
            }
            Inline::FootnoteRef(label) => {
                self.unsupported(inline.kind(), format!("footnote reference [^{label}] dropped"))
            }
        }
    }

    fn unsupported(&mut self, kind: &'static str, message: String) {
        warn!(kind, "{message}");
        self.diagnostics.push(Diagnostic { kind, message });
    }

    /// Finalize: build the outline, splice in the Contents section and clean
    /// up indented fence lines.
    pub fn finish(self) -> Result<Rendered> {
        let outline = finalize::outline(&self.headings, &self.title, self.config.tag_case)?;
        let body = self.out.into_bytes();

        let text = match self.toc_offset {
            Some(offset) if !self.config.no_toc => {
                let contents = finalize::contents_section(&outline, self.config);
                finalize::splice(&body, offset, &contents)
            }
            _ => body,
        };
        let text = finalize::fix_fences(&text);

        debug!(
            file = %self.filename,
            headings = outline.len(),
            diagnostics = self.diagnostics.len(),
            bytes = text.len(),
            "rendered vimdoc"
        );

        Ok(Rendered {
            text,
            outline,
            diagnostics: self.diagnostics,
        })
    }
}
