//! Core data model for document conversion.
//!
//! This module contains:
//! - The element tree (blocks and spans) that importers produce
//! - The heading outline that a conversion reports back

mod node;
mod outline;

// Re-export element tree
pub use node::{Block, Document, Inline, ListItem, TableRow};

// Re-export outline
pub use outline::{Outline, OutlineEntry};
