//! Export module for writing help files.
//!
//! Provides the `Exporter` trait and the vimdoc implementation.
//!
//! # Architecture
//!
//! The `Exporter` trait uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write` destination
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//!
//! use vimdown::export::{Exporter, VimdocExporter};
//! use vimdown::parse_markdown;
//!
//! let document = parse_markdown(&std::fs::read_to_string("README.md")?);
//! let mut file = File::create("plugin.txt")?;
//!
//! let report = VimdocExporter::new("plugin.txt").export(&document, &mut file)?;
//! println!("{} headings", report.outline.len());
//! # Ok::<(), vimdown::Error>(())
//! ```

use std::io::Write;

use crate::error::Result;
use crate::model::{Document, Outline};
use crate::vimdoc::Diagnostic;

mod vimdoc;

pub use vimdoc::VimdocExporter;

/// What an export produced besides the bytes themselves.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Elements that could not be represented.
    pub diagnostics: Vec<Diagnostic>,
    pub outline: Outline,
    pub bytes_written: usize,
}

/// Trait for exporting documents to specific formats.
///
/// Exporters use a builder pattern where configuration is held in the struct,
/// and the `export` method writes to any `Write` destination.
pub trait Exporter {
    /// Export the document to the provided writer.
    ///
    /// The whole output is rendered before anything is written, so a failed
    /// conversion leaves the writer untouched.
    fn export<W: Write>(&self, document: &Document, writer: &mut W) -> Result<ExportReport>;
}
