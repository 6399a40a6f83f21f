//! Append-only output buffer with speculative writes.
//!
//! Handlers take a [`Mark`] before rendering children, then either keep what
//! was appended or truncate back to the mark. Marks nest: an inner handler
//! can roll back its own output without disturbing an outer mark.

/// A recorded buffer length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mark(usize);

/// Growable byte buffer the renderer writes into.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Record the current length.
    pub fn mark(&self) -> Mark {
        Mark(self.bytes.len())
    }

    /// Returns true if nothing was appended since `mark`.
    pub fn unchanged_since(&self, mark: Mark) -> bool {
        self.bytes.len() <= mark.0
    }

    /// Discard everything appended since `mark`.
    pub fn truncate(&mut self, mark: Mark) {
        self.bytes.truncate(mark.0);
    }

    /// Remove and return everything appended since `mark`.
    pub fn take_since(&mut self, mark: Mark) -> Vec<u8> {
        let start = mark.0.min(self.bytes.len());
        self.bytes.split_off(start)
    }

    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    pub fn write(&mut self, bytes: impl AsRef<[u8]>) {
        self.bytes.extend_from_slice(bytes.as_ref());
    }

    pub fn newline(&mut self) {
        self.bytes.push(b'\n');
    }

    /// Append `byte` repeated `count` times.
    pub fn repeat(&mut self, byte: u8, count: usize) {
        self.bytes.resize(self.bytes.len() + count, byte);
    }

    /// Lossy UTF-8 view.
    #[cfg(test)]
    pub fn to_str_lossy(&self) -> std::borrow::Cow<'_, str> {
        bstr::ByteSlice::to_str_lossy(self.bytes.as_slice())
    }
}
