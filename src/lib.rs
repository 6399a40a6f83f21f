//! # vimdown
//!
//! Convert Markdown documents into Vim help files (`:help` vimdoc format).
//!
//! ## Features
//!
//! - Headings become upper-cased lines with right-aligned `*help-tags*`
//! - Hierarchical chapter numbers and a dot-leader Contents section
//! - Nested ordered/unordered lists with hanging indents
//! - Code blocks and block quotes as `>`/`<` literal blocks
//! - A heading outline and diagnostics for elements vimdoc cannot show
//!
//! ## Quick Start
//!
//! ```
//! use vimdown::{VimdocConfig, convert};
//!
//! let rendered = convert("# Intro\n\nHello.\n", "plugin.txt", &VimdocConfig::default())?;
//! let text = String::from_utf8(rendered.text).unwrap();
//!
//! assert!(text.starts_with("plugin.txt\n"));
//! assert!(text.contains("*plugin-intro*"));
//! assert!(text.contains("1. Intro"));
//! # Ok::<(), vimdown::Error>(())
//! ```
//!
//! ## Working with Documents
//!
//! The [`Document`] element tree can also be built by hand and rendered
//! through an exporter:
//!
//! ```
//! use vimdown::export::{Exporter, VimdocExporter};
//! use vimdown::model::{Block, Document};
//!
//! let document = Document::new(vec![
//!     Block::heading(1, "Usage"),
//!     Block::list(false, vec![vec![Block::paragraph("one")]]),
//! ]);
//!
//! let mut out = Vec::new();
//! let report = VimdocExporter::new("tool.txt").export(&document, &mut out)?;
//! assert_eq!(report.outline.entries[0].tag, "tool-usage");
//! # Ok::<(), vimdown::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod import;
pub mod model;
pub mod util;
pub mod vimdoc;

pub use error::{Error, Result};
pub use import::parse_markdown;
pub use model::{Document, Outline};
pub use vimdoc::{Rendered, TagCase, VimdocConfig};

/// Parse `markdown` and render it as the help file `filename`.
pub fn convert(markdown: &str, filename: &str, config: &VimdocConfig) -> Result<Rendered> {
    let document = parse_markdown(markdown);
    vimdoc::Renderer::new(config, filename).render(&document)
}
