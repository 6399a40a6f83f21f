//! Pure vimdoc generation from the element tree.
//!
//! This module renders a [`Document`](crate::model::Document) into the plain
//! text help format read by Vim's `:help`. The design separates pure
//! rendering logic from I/O:
//!
//! - [`buffer`]: append-only output with mark/rollback for speculative writes
//! - [`layout`]: rules, split-padded lines and hanging indents
//! - [`lists`]: nested ordered/unordered list counters
//! - [`headings`]: heading registry, help tags and chapter numbers
//! - [`render`]: the per-element handlers of one conversion session
//! - [`finalize`]: Contents synthesis and fence cleanup
//!
//! The export layer ([`crate::export`]) handles writing the result.
//!
//! ## Output shape
//!
//! ```text
//! plugin.txt                                          Frobnicate all things
//!
//! ================================================================================
//! CONTENTS                                               *plugin-contents* ~
//!
//! 1. Intro......................................................|plugin-intro|
//!
//! ================================================================================
//! INTRO                                                     *plugin-intro* ~
//!
//! Text, lists with hanging indents, and literal blocks:
//!
//! >
//!     let g:plugin_enabled = 1
//! <
//! ```
//!
//! The help viewer conceals the `*`/`|` delimiters around tags, so padding
//! is widened by two columns to line up visually. Heading lines end in ` ~`
//! to be highlighted.

pub mod buffer;
mod config;
pub mod finalize;
pub mod headings;
pub mod layout;
pub mod lists;
mod render;

pub use config::{DEFAULT_COLUMNS, DEFAULT_INDENT, VimdocConfig};
pub use headings::{Heading, HeadingRegistry, TagCase, derive_title, help_tag};
pub use render::{Diagnostic, Rendered, Renderer};
