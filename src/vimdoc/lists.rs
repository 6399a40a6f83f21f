//! Nested list counters.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Ordered,
    Unordered,
}

impl ListStyle {
    pub fn from_ordered(ordered: bool) -> Self {
        if ordered {
            ListStyle::Ordered
        } else {
            ListStyle::Unordered
        }
    }
}

/// State of one open list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFrame {
    pub style: ListStyle,
    /// Number of the next item, starting at 1.
    pub index: usize,
}

impl ListFrame {
    pub fn new(style: ListStyle) -> Self {
        Self { style, index: 1 }
    }

    /// Marker for the next item. Ordered lists advance their counter.
    pub fn next_marker(&mut self) -> String {
        match self.style {
            ListStyle::Ordered => {
                let marker = format!("{}. ", self.index);
                self.index += 1;
                marker
            }
            ListStyle::Unordered => "* ".to_string(),
        }
    }
}

/// Stack of open lists; only the innermost one is ever touched.
#[derive(Debug, Clone, Default)]
pub struct ListStack {
    frames: Vec<ListFrame>,
}

impl ListStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, style: ListStyle) {
        self.frames.push(ListFrame::new(style));
    }

    pub fn pop(&mut self) -> Result<ListFrame> {
        self.frames.pop().ok_or(Error::ListStackEmpty("pop"))
    }

    pub fn top_mut(&mut self) -> Result<&mut ListFrame> {
        self.frames.last_mut().ok_or(Error::ListStackEmpty("item"))
    }
}
