//! Vimdoc exporter.

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::model::Document;
use crate::vimdoc::{Rendered, Renderer, VimdocConfig};

use super::{ExportReport, Exporter};

/// Exporter for Vim help files.
#[derive(Debug, Clone)]
pub struct VimdocExporter {
    filename: String,
    config: VimdocConfig,
}

impl VimdocExporter {
    /// Create an exporter for the help file `filename` with default
    /// configuration.
    ///
    /// `filename` is written on the first line and its stem prefixes every
    /// help tag.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            config: VimdocConfig::default(),
        }
    }

    /// Use the specified configuration.
    pub fn with_config(mut self, config: VimdocConfig) -> Self {
        self.config = config;
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn config(&self) -> &VimdocConfig {
        &self.config
    }

    /// Render without writing anywhere.
    pub fn render(&self, document: &Document) -> Result<Rendered> {
        Renderer::new(&self.config, self.filename.as_str()).render(document)
    }
}

impl Exporter for VimdocExporter {
    fn export<W: Write>(&self, document: &Document, writer: &mut W) -> Result<ExportReport> {
        let rendered = self.render(document)?;
        writer.write_all(&rendered.text)?;
        writer.flush()?;

        debug!(file = %self.filename, bytes = rendered.text.len(), "wrote help file");

        Ok(ExportReport {
            diagnostics: rendered.diagnostics,
            outline: rendered.outline,
            bytes_written: rendered.text.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    fn document() -> Document {
        Document::new(vec![
            Block::heading(1, "Intro"),
            Block::paragraph("Hello."),
            Block::heading(2, "Usage"),
        ])
    }

    #[test]
    fn test_export_writes_rendered_text() {
        let exporter = VimdocExporter::new("tool.txt");
        let rendered = exporter.render(&document()).unwrap();

        let mut out = Vec::new();
        let report = exporter.export(&document(), &mut out).unwrap();

        assert_eq!(out, rendered.text);
        assert_eq!(report.bytes_written, out.len());
        assert_eq!(report.outline.len(), 2);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_export_uses_config() {
        let exporter = VimdocExporter::new("tool.txt")
            .with_config(VimdocConfig::new().with_no_toc(true).with_columns(20));
        let mut out = Vec::new();
        exporter.export(&document(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("tool.txt\n\n====================\nINTRO"));
        assert!(!text.contains("*tool-contents*"));
        assert_eq!(exporter.config().columns, 20);
        assert_eq!(exporter.filename(), "tool.txt");
    }
}
