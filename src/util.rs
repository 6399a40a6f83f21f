//! Input helpers.

use std::borrow::Cow;
use std::path::Path;

use tracing::warn;

/// Decode Markdown source bytes.
///
/// Valid UTF-8 is borrowed as is, minus a leading BOM. Anything else is read
/// as Windows-1252, which decodes every byte sequence.
///
/// # Examples
///
/// ```
/// use vimdown::util::decode_text;
///
/// assert_eq!(decode_text("Grüße".as_bytes()), "Grüße");
/// assert_eq!(decode_text(b"caf\xe9"), "café");
/// ```
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    if let (text, false) = encoding_rs::UTF_8.decode_with_bom_removal(bytes) {
        return text;
    }

    warn!(bytes = bytes.len(), "input is not valid UTF-8, reading it as Windows-1252");
    let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
    text
}

/// Help file name for a Markdown source: its stem with a `.txt` extension.
///
/// ```
/// use vimdown::util::help_filename;
///
/// assert_eq!(help_filename("docs/plugin.md"), "plugin.txt");
/// assert_eq!(help_filename("-"), "stdin.txt");
/// ```
pub fn help_filename(input: &str) -> String {
    let stem = match input {
        "-" => "stdin",
        path => Path::new(path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .unwrap_or("doc"),
    };
    format!("{stem}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_borrows() {
        assert!(matches!(decode_text(b"plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_decode_strips_bom() {
        assert!(matches!(
            decode_text(b"\xef\xbb\xbf# Title"),
            Cow::Borrowed("# Title")
        ));
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        assert_eq!(decode_text(b"\x93quoted\x94"), "\u{201c}quoted\u{201d}");
        assert_eq!(decode_text(b"Cr\xe8me"), "Crème");
    }

    #[test]
    fn test_help_filename() {
        assert_eq!(help_filename("README.md"), "README.txt");
        assert_eq!(help_filename("notes"), "notes.txt");
        assert_eq!(help_filename("/tmp/a.b.md"), "a.b.txt");
        assert_eq!(help_filename(""), "doc.txt");
    }
}
