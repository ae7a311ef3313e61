//! Token extraction heuristics
//!
//! Decides how much of a marked line to highlight when the whole line is not
//! selected. Without a grammar the best guess is "the first token":
//!
//! - If the first non-whitespace character opens one of the configured
//!   delimiters, the token runs through the first matching closer on the line
//!   (or to the end of the line when there is none).
//! - Otherwise the token is the greedy run of characters sharing the first
//!   character's class: word characters (`\w`) or punctuation. Whitespace ends
//!   the run either way.

use crate::indent::line::{byte_offset, char_len};
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A(?:\w+|[^\w\s]+)").unwrap());

/// An opening character and the characters accepted as its closer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter {
    pub open: char,
    pub closers: Vec<char>,
}

impl Delimiter {
    /// Parse an entry such as `"()"` or `"'\""`. Entries shorter than two
    /// characters describe no pair and yield `None`.
    pub fn parse(entry: &str) -> Option<Self> {
        let mut chars = entry.chars();
        let open = chars.next()?;
        let closers: Vec<char> = chars.collect();
        if closers.is_empty() {
            return None;
        }
        Some(Delimiter { open, closers })
    }

    /// Parse every usable entry, preserving order; the first match wins.
    pub fn parse_all(entries: &[String]) -> Vec<Delimiter> {
        entries.iter().filter_map(|entry| Self::parse(entry)).collect()
    }
}

/// End column (exclusive) of the token starting at character column `start`.
pub fn token_end(line: &str, start: usize, delimiters: &[Delimiter]) -> usize {
    let Some(first) = line.chars().nth(start) else {
        return start;
    };

    if let Some(delimiter) = delimiters.iter().find(|d| d.open == first) {
        return line
            .chars()
            .enumerate()
            .skip(start + 1)
            .find(|(_, c)| delimiter.closers.contains(c))
            .map(|(index, _)| index + 1)
            .unwrap_or_else(|| char_len(line));
    }

    let rest = &line[byte_offset(line, start)..];
    match LEADING_TOKEN.find(rest) {
        Some(token) => start + rest[..token.end()].chars().count(),
        None => start,
    }
}
