//! Markdown → element tree, via comrak.
//!
//! comrak builds an arena AST; this module lowers it into the closed
//! [`Block`]/[`Inline`] tree the renderer works on. Node kinds without a
//! counterpart are transparent: their children are lowered in their place.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::options::Options;
use comrak::{Arena, parse_document};

use crate::model::{Block, Document, Inline, ListItem, TableRow};

/// comrak options with every extension the element tree has a kind for.
pub fn markdown_options() -> Options<'static> {
    let mut options = Options::default();
    let ext = &mut options.extension;
    ext.table = true;
    ext.strikethrough = true;
    ext.footnotes = true;
    ext.autolink = true;
    ext.front_matter_delimiter = Some("---".to_string());
    options
}

/// Parse Markdown text into a [`Document`].
///
/// # Example
///
/// ```
/// use vimdown::import::parse_markdown;
/// use vimdown::model::Block;
///
/// let document = parse_markdown("# Usage\n");
/// assert_eq!(document.blocks, vec![Block::heading(1, "Usage")]);
/// ```
pub fn parse_markdown(input: &str) -> Document {
    let arena = Arena::new();
    let options = markdown_options();
    let root = parse_document(&arena, input, &options);
    Document::new(lower_blocks(root))
}

fn lower_blocks<'a>(node: &'a AstNode<'a>) -> Vec<Block> {
    let mut blocks = Vec::new();
    for child in node.children() {
        lower_block(child, &mut blocks);
    }
    blocks
}

fn lower_block<'a>(node: &'a AstNode<'a>, blocks: &mut Vec<Block>) {
    let data = node.data.borrow();
    let block = match &data.value {
        NodeValue::Paragraph => Block::Paragraph(lower_inlines(node)),
        NodeValue::Heading(heading) => Block::Heading {
            level: heading.level,
            id: None,
            content: lower_inlines(node),
        },
        NodeValue::List(list) => Block::List {
            ordered: matches!(list.list_type, ListType::Ordered),
            items: lower_items(node),
        },
        NodeValue::CodeBlock(code) => {
            let info = code.info.trim();
            Block::CodeBlock {
                info: (!info.is_empty()).then(|| info.to_string()),
                literal: code.literal.clone(),
            }
        }
        NodeValue::HtmlBlock(html) => Block::RawBlock(html.literal.clone()),
        NodeValue::BlockQuote => Block::BlockQuote(lower_blocks(node)),
        NodeValue::ThematicBreak => Block::HorizontalRule,
        NodeValue::Table(_) => Block::Table {
            rows: lower_rows(node),
        },
        NodeValue::FootnoteDefinition(definition) => Block::Footnote {
            label: definition.name.clone(),
            blocks: lower_blocks(node),
        },
        NodeValue::FrontMatter(text) => Block::TitleBlock(text.clone()),
        _ => {
            for child in node.children() {
                lower_block(child, blocks);
            }
            return;
        }
    };
    blocks.push(block);
}

/// Lower the items of a list, flagging the last one.
fn lower_items<'a>(list: &'a AstNode<'a>) -> Vec<ListItem> {
    let mut items: Vec<ListItem> = list
        .children()
        .map(|item| ListItem {
            end_of_list: false,
            blocks: lower_blocks(item),
        })
        .collect();
    if let Some(last) = items.last_mut() {
        last.end_of_list = true;
    }
    items
}

fn lower_rows<'a>(table: &'a AstNode<'a>) -> Vec<TableRow> {
    table
        .children()
        .map(|row| TableRow {
            header: matches!(row.data.borrow().value, NodeValue::TableRow(true)),
            cells: row.children().map(lower_inlines).collect(),
        })
        .collect()
}

fn lower_inlines<'a>(node: &'a AstNode<'a>) -> Vec<Inline> {
    let mut inlines = Vec::new();
    for child in node.children() {
        lower_inline(child, &mut inlines);
    }
    inlines
}

fn lower_inline<'a>(node: &'a AstNode<'a>, inlines: &mut Vec<Inline>) {
    let data = node.data.borrow();
    let inline = match &data.value {
        NodeValue::Text(text) => Inline::Text(text.to_string()),
        // Keep the source line structure.
        NodeValue::SoftBreak => Inline::text("\n"),
        NodeValue::LineBreak => Inline::LineBreak,
        NodeValue::Code(code) => Inline::Code(code.literal.clone()),
        NodeValue::HtmlInline(html) => Inline::RawInline(html.to_string()),
        NodeValue::Emph => match only_strong_child(node) {
            Some(strong) => Inline::TripleEmphasis(lower_inlines(strong)),
            None => Inline::Emphasis(lower_inlines(node)),
        },
        NodeValue::Strong => Inline::Strong(lower_inlines(node)),
        NodeValue::Strikethrough => Inline::Strikethrough(lower_inlines(node)),
        NodeValue::Link(link) => lower_link(&link.url, &link.title, lower_inlines(node)),
        NodeValue::Image(link) => Inline::Image {
            url: link.url.clone(),
            title: link.title.clone(),
            alt: collect_text(node),
        },
        NodeValue::FootnoteReference(reference) => Inline::FootnoteRef(reference.name.clone()),
        _ => {
            for child in node.children() {
                lower_inline(child, inlines);
            }
            return;
        }
    };
    inlines.push(inline);
}

/// A link whose text is its own target is an autolink.
fn lower_link(url: &str, title: &str, content: Vec<Inline>) -> Inline {
    if let [Inline::Text(text)] = content.as_slice()
        && (text == url
            || url.strip_prefix("mailto:") == Some(text.as_str())
            || url.strip_prefix("http://") == Some(text.as_str()))
    {
        return Inline::AutoLink(text.clone());
    }
    Inline::Link {
        url: url.to_string(),
        title: title.to_string(),
        content,
    }
}

/// The single `Strong` child of an `Emph` node (`***text***`).
fn only_strong_child<'a>(node: &'a AstNode<'a>) -> Option<&'a AstNode<'a>> {
    let mut children = node.children();
    let child = children.next()?;
    if children.next().is_some() {
        return None;
    }
    matches!(child.data.borrow().value, NodeValue::Strong).then_some(child)
}

/// Plain text below `node`, for image alt text.
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for descendant in node.descendants().skip(1) {
        match &descendant.data.borrow().value {
            NodeValue::Text(literal) => text.push_str(literal),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_paragraph() {
        let document = parse_markdown("# Title\n\nHello *world*.\n");
        assert_eq!(
            document.blocks,
            vec![
                Block::heading(1, "Title"),
                Block::Paragraph(vec![
                    Inline::text("Hello "),
                    Inline::Emphasis(vec![Inline::text("world")]),
                    Inline::text("."),
                ]),
            ]
        );
    }

    #[test]
    fn test_soft_break_keeps_newline() {
        let document = parse_markdown("one\ntwo\n");
        assert_eq!(
            document.blocks,
            vec![Block::Paragraph(vec![
                Inline::text("one"),
                Inline::text("\n"),
                Inline::text("two"),
            ])]
        );
    }

    #[test]
    fn test_ordered_list_flags_last_item() {
        let document = parse_markdown("1. one\n2. two\n");
        assert_eq!(
            document.blocks,
            vec![Block::list(
                true,
                vec![vec![Block::paragraph("one")], vec![Block::paragraph("two")]]
            )]
        );
    }

    #[test]
    fn test_nested_list() {
        let document = parse_markdown("- outer\n  - inner\n");
        let Block::List { ordered, items } = &document.blocks[0] else {
            panic!("expected a list");
        };
        assert!(!ordered);
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0].blocks[1], Block::List { ordered: false, .. }));
    }

    #[test]
    fn test_code_block_info() {
        let document = parse_markdown("```rust\nfn x() {}\n```\n");
        assert_eq!(
            document.blocks,
            vec![Block::CodeBlock {
                info: Some("rust".into()),
                literal: "fn x() {}\n".into(),
            }]
        );
    }

    #[test]
    fn test_block_quote_and_rule() {
        let document = parse_markdown("> quoted\n\n***\n");
        assert_eq!(
            document.blocks,
            vec![
                Block::BlockQuote(vec![Block::paragraph("quoted")]),
                Block::HorizontalRule,
            ]
        );
    }

    #[test]
    fn test_triple_emphasis() {
        let document = parse_markdown("***both***\n");
        assert_eq!(
            document.blocks,
            vec![Block::Paragraph(vec![Inline::TripleEmphasis(vec![
                Inline::text("both")
            ])])]
        );
    }

    #[test]
    fn test_links() {
        let document = parse_markdown("[site](https://example.com) <https://rust-lang.org>\n");
        assert_eq!(
            document.blocks,
            vec![Block::Paragraph(vec![
                Inline::link("https://example.com", "site"),
                Inline::text(" "),
                Inline::AutoLink("https://rust-lang.org".into()),
            ])]
        );
    }

    #[test]
    fn test_image_alt_text() {
        let document = parse_markdown("![a *fine* diagram](d.png)\n");
        let Block::Paragraph(inlines) = &document.blocks[0] else {
            panic!("expected a paragraph");
        };
        assert!(matches!(
            &inlines[0],
            Inline::Image { url, alt, .. } if url == "d.png" && alt == "a fine diagram"
        ));
    }

    #[test]
    fn test_unsupported_kinds_are_kept() {
        let input = "| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~ text[^1]\n\n[^1]: Note.\n";
        let document = parse_markdown(input);

        let Block::Table { rows } = &document.blocks[0] else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), 2);
        assert!(rows[0].header);
        assert!(!rows[1].header);
        assert_eq!(rows[1].cells.len(), 2);

        let Block::Paragraph(inlines) = &document.blocks[1] else {
            panic!("expected a paragraph");
        };
        assert!(matches!(inlines[0], Inline::Strikethrough(_)));
        assert!(inlines.iter().any(|i| matches!(i, Inline::FootnoteRef(name) if name == "1")));

        assert!(
            document
                .blocks
                .iter()
                .any(|b| matches!(b, Block::Footnote { label, .. } if label == "1"))
        );
    }

    #[test]
    fn test_front_matter() {
        let document = parse_markdown("---\ntitle: x\n---\n\n# Hi\n");
        assert!(matches!(document.blocks[0], Block::TitleBlock(_)));
        assert_eq!(document.blocks[1], Block::heading(1, "Hi"));
    }

    #[test]
    fn test_html_block() {
        let document = parse_markdown("<div>\nhi\n</div>\n");
        assert_eq!(
            document.blocks,
            vec![Block::RawBlock("<div>\nhi\n</div>\n".into())]
        );
    }
}
