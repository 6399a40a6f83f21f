//! Pure line-layout primitives.
//!
//! Widths are measured in characters, not bytes, so multi-byte text pads
//! the same as ASCII.

use bstr::ByteSlice;

use super::buffer::OutputBuffer;

/// Columns taken by the `*` or `|` delimiters around a tag, which the help
/// viewer conceals.
pub const TAG_TRIM: usize = 2;

/// Ends a heading line; the help viewer highlights lines ending in ` ~`.
pub const HEADING_MARKER: &str = " ~";

/// Display width of `text` in characters.
pub fn text_width(text: &[u8]) -> usize {
    text.chars().count()
}

/// Write one line of `fill` repeated to `columns`.
pub fn rule(out: &mut OutputBuffer, fill: u8, columns: usize) {
    out.repeat(fill, columns);
    out.newline();
}

/// Write `left`, padding, `right` and a newline.
///
/// Padding is `columns - (left + right) + trim`, never less than one fill
/// character. `trim` widens the padding to make up for delimiters the help
/// viewer conceals.
pub fn split_line(
    out: &mut OutputBuffer,
    left: &[u8],
    right: &[u8],
    fill: u8,
    trim: usize,
    columns: usize,
) {
    out.write(left);
    out.repeat(fill, padding(text_width(left), text_width(right), trim, columns));
    out.write(right);
    out.newline();
}

/// Fill width used by [`split_line`].
pub fn padding(left: usize, right: usize, trim: usize, columns: usize) -> usize {
    let padding = (columns + trim) as isize - (left + right) as isize;
    if padding <= 0 { 1 } else { padding as usize }
}

/// Rule character drawn above a heading of `level`, if any.
pub fn heading_rule(level: u8) -> Option<u8> {
    match level {
        1 => Some(b'='),
        2 => Some(b'-'),
        _ => None,
    }
}

/// Write a heading line: upper-cased `text` on the left, `*tag*` on the
/// right followed by [`HEADING_MARKER`], then a blank line.
pub fn heading_line(out: &mut OutputBuffer, text: &[u8], tag: &str, columns: usize) {
    let text = text.to_uppercase();
    let target = format!("*{tag}*");
    out.write(&text);
    out.repeat(
        b' ',
        padding(text_width(&text), text_width(target.as_bytes()), TAG_TRIM, columns),
    );
    out.write(&target);
    out.write(HEADING_MARKER);
    out.write("\n\n");
}

/// Write every non-blank line of `text` indented by `indent` spaces.
///
/// The first line's indent is reduced by `first_trim`, for text that follows
/// a list marker already on the line. Blank lines are dropped.
pub fn indent_block(out: &mut OutputBuffer, text: &[u8], indent: usize, first_trim: usize) {
    let mut first = true;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let width = if first {
            indent.saturating_sub(first_trim)
        } else {
            indent
        };
        first = false;
        out.repeat(b' ', width);
        out.write(line);
        out.newline();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render(f: impl FnOnce(&mut OutputBuffer)) -> String {
        let mut out = OutputBuffer::new();
        f(&mut out);
        out.to_str_lossy().into_owned()
    }

    #[test]
    fn test_rule() {
        assert_eq!(render(|out| rule(out, b'=', 5)), "=====\n");
    }

    #[test]
    fn test_split_line_fills_columns() {
        let line = render(|out| split_line(out, b"left", b"right", b' ', 0, 20));
        assert_eq!(line, "left           right\n");
        assert_eq!(line.trim_end().len(), 20);
    }

    #[test]
    fn test_split_line_trim_widens_padding() {
        let line = render(|out| split_line(out, b"A", b"*a*", b'.', 2, 10));
        assert_eq!(line, "A........*a*\n");
    }

    #[test]
    fn test_split_line_overflow_keeps_one_fill() {
        let line = render(|out| split_line(out, b"a long left side", b"right side", b'.', 0, 10));
        assert_eq!(line, "a long left side.right side\n");
    }

    #[test]
    fn test_split_line_counts_characters() {
        let line = render(|out| split_line(out, "größe".as_bytes(), b"x", b' ', 0, 10));
        assert_eq!(line, "größe    x\n");
    }

    #[test]
    fn test_heading_line() {
        let line = render(|out| heading_line(out, b"Intro", "doc-intro", 20));
        assert_eq!(line, "INTRO      *doc-intro* ~\n\n");
    }

    #[test]
    fn test_heading_line_overflow() {
        let line = render(|out| heading_line(out, b"a very long heading", "doc-a_very_long_heading", 20));
        assert_eq!(line, "A VERY LONG HEADING *doc-a_very_long_heading* ~\n\n");
    }

    #[test]
    fn test_heading_rule() {
        assert_eq!(heading_rule(1), Some(b'='));
        assert_eq!(heading_rule(2), Some(b'-'));
        assert_eq!(heading_rule(3), None);
    }

    #[test]
    fn test_indent_block_hanging_indent() {
        let text = render(|out| indent_block(out, b"first\nsecond\n", 4, 2));
        assert_eq!(text, "  first\n    second\n");
    }

    #[test]
    fn test_indent_block_drops_blank_lines() {
        let text = render(|out| indent_block(out, b"a\n\n   \nb\n\n", 2, 0));
        assert_eq!(text, "  a\n  b\n");
    }

    #[test]
    fn test_indent_block_trim_saturates() {
        let text = render(|out| indent_block(out, b"item", 4, 6));
        assert_eq!(text, "item\n");
    }

    proptest! {
        #[test]
        fn prop_split_line_always_has_fill(
            left in "[a-z ]{0,60}",
            right in "[a-z]{0,60}",
            columns in 0usize..120,
            trim in 0usize..3,
        ) {
            let line = render(|out| split_line(out, left.as_bytes(), right.as_bytes(), b'.', trim, columns));
            let body = line.strip_suffix('\n').unwrap();
            let fill = &body[left.len()..body.len() - right.len()];
            prop_assert!(!fill.is_empty());
            prop_assert!(fill.bytes().all(|b| b == b'.'));
            if left.len() + right.len() < columns + trim {
                prop_assert_eq!(body.len(), columns + trim);
            }
        }
    }
}
