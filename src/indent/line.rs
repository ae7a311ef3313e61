//! Line splitting and per-line predicates
//!
//! Everything downstream addresses text by zero-based line number and by
//! character column within the line. This module owns the conversion from a
//! document to lines and the handful of questions the later stages ask about a
//! single line.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Split a document into lines on any of `\r\n`, `\r` or `\n`.
///
/// Always yields at least one line: the empty document is one empty line, and a
/// trailing line break produces a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK.split(text).collect()
}

/// A line whose trimmed-end form is empty.
pub fn is_blank(line: &str) -> bool {
    line.trim_end().is_empty()
}

/// Whether the line has any characters at all, whitespace included.
pub fn has_content(line: &str) -> bool {
    !line.is_empty()
}

/// Whether the line has anything besides whitespace.
pub fn has_visible_content(line: &str) -> bool {
    !line.trim().is_empty()
}

fn is_indent_char(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Character column of the first non-indentation character.
///
/// Equals the line's character length when the line is entirely spaces and tabs.
pub fn leading_whitespace_end(line: &str) -> usize {
    line.chars().take_while(|&c| is_indent_char(c)).count()
}

/// Visual width of the leading run of spaces and tabs.
pub fn indentation_width(line: &str, tab_size: usize) -> usize {
    line.chars()
        .take_while(|&c| is_indent_char(c))
        .map(|c| if c == '\t' { tab_size } else { 1 })
        .sum()
}

/// Number of characters in the line.
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Byte offset of the given character column, clamped to the line end.
pub fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_every_line_break_style() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn empty_document_is_one_line() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn trailing_break_yields_trailing_empty_line() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn blank_and_content_are_distinct() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!has_content(""));
        assert!(has_content("   "));
        assert!(!has_visible_content("   "));
        assert!(has_visible_content("  x"));
    }

    #[test]
    fn tabs_expand_to_tab_size() {
        assert_eq!(indentation_width("\t  x", 4), 6);
        assert_eq!(indentation_width("\t\tx", 2), 4);
        assert_eq!(indentation_width("x\t", 4), 0);
    }

    #[test]
    fn leading_whitespace_counts_characters() {
        assert_eq!(leading_whitespace_end("\t  x"), 3);
        assert_eq!(leading_whitespace_end("   "), 3);
    }

    #[test]
    fn byte_offsets_respect_multibyte_characters() {
        assert_eq!(byte_offset("é x", 1), 2);
        assert_eq!(byte_offset("ab", 5), 2);
    }
}
