//! Error types for vimdown operations.

use thiserror::Error;

/// Errors that can occur while converting a document.
///
/// Only [`Error::Io`] is caused by the outside world. The other variants mean
/// the element traversal and the renderer disagree about document structure,
/// which is a bug rather than bad input, so the conversion is aborted.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid list operation: {0} on an empty list stack")]
    ListStackEmpty(&'static str),

    #[error("heading {position} is not registered ({len} headings known)")]
    HeadingNotFound { position: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
