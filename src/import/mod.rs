//! Import module for reading source documents into the element tree.
//!
//! Markdown is parsed with comrak and lowered into [`Document`](crate::model::Document).

mod markdown;

pub use markdown::{markdown_options, parse_markdown};
