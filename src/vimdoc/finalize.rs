//! Finalization pass, run once the body is complete.

use std::sync::LazyLock;

use bstr::ByteSlice;
use regex::bytes::Regex;

use crate::error::Result;
use crate::model::{Outline, OutlineEntry};

use super::buffer::OutputBuffer;
use super::config::VimdocConfig;
use super::headings::{HeadingRegistry, TagCase, help_tag};
use super::layout;

/// Heading text of the synthesized Table of Contents.
pub const CONTENTS: &str = "Contents";

/// A fence delimiter left indented by list or block indentation, possibly
/// with trailing blanks. A CR before the newline is kept.
static INDENTED_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]+([<>])[ \t]*(\r?)$").unwrap());

/// Freeze the heading registry into an outline.
pub fn outline(registry: &HeadingRegistry, title: &str, case: TagCase) -> Result<Outline> {
    let entries = registry
        .iter()
        .map(|heading| {
            Ok(OutlineEntry {
                level: heading.level,
                chapter: registry.chapter_number(heading.position)?,
                text: heading.text.to_str_lossy().into_owned(),
                tag: help_tag(title, &heading.text, case),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Outline {
        title: title.to_string(),
        entries,
    })
}

/// Build the Contents section: a level-1 style heading followed by one
/// dot-padded line per heading, linking to its tag.
pub fn contents_section(outline: &Outline, config: &VimdocConfig) -> Vec<u8> {
    let mut out = OutputBuffer::new();

    if !config.no_rules {
        layout::rule(&mut out, b'=', config.columns);
    }
    let tag = help_tag(&outline.title, CONTENTS.as_bytes(), config.tag_case);
    layout::heading_line(&mut out, CONTENTS.as_bytes(), &tag, config.columns);

    for entry in &outline.entries {
        let indent = usize::from(entry.level.saturating_sub(1)) * config.indent;
        let left = format!("{}{} {}", " ".repeat(indent), entry.chapter, entry.text);
        let link = format!("|{}|", entry.tag);
        layout::split_line(
            &mut out,
            left.as_bytes(),
            link.as_bytes(),
            b'.',
            layout::TAG_TRIM,
            config.columns,
        );
    }
    out.newline();

    out.into_bytes()
}

/// `body[..offset]`, then `section`, then `body[offset..]`.
pub fn splice(body: &[u8], offset: usize, section: &[u8]) -> Vec<u8> {
    let offset = offset.min(body.len());
    let mut text = Vec::with_capacity(body.len() + section.len());
    text.extend_from_slice(&body[..offset]);
    text.extend_from_slice(section);
    text.extend_from_slice(&body[offset..]);
    text
}

/// Strip the surrounding whitespace from indented lines holding nothing but a
/// fence delimiter.
pub fn fix_fences(text: &[u8]) -> Vec<u8> {
    if memchr::memchr2(b'<', b'>', text).is_none() {
        return text.to_vec();
    }
    INDENTED_FENCE_RE.replace_all(text, &b"$1$2"[..]).into_owned()
}
