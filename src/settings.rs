//! Detection and display policy
//!
//! A run reads one [`Settings`] value. Hosts build it however they like (the
//! `cuddle-config` crate layers TOML files over embedded defaults) and hand it to
//! the pipeline by value. Every field has a documented default, so a host that
//! knows nothing about configuration can use `Settings::default()`.

use crate::indent::spans::Mark;
use serde::{Deserialize, Serialize};

/// Tab width used when the host cannot supply a usable one.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Prefixes that never open a block unless the host says otherwise.
pub const DEFAULT_NEVER_START_WITH: &[&str] = &["/*", "//", "#", "--", "<!--"];

/// Full policy for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub detection: DetectionSettings,
    pub display: DisplaySettings,
}

/// Controls which lines open blocks and how blocks close.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionSettings {
    /// When non-empty, a line must start (after trimming) with one of these to open a block.
    pub only_start_with: Vec<String>,
    /// A line starting (after trimming) with one of these never opens a block.
    pub never_start_with: Vec<String>,
    /// Strict closing: a block needs a dedented line at its own column to close.
    /// Lenient closing (`false`): any dedent ends the block.
    pub require_closing_text: bool,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        DetectionSettings {
            only_start_with: Vec::new(),
            never_start_with: DEFAULT_NEVER_START_WITH
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
            require_closing_text: true,
        }
    }
}

impl DetectionSettings {
    /// Whether a trimmed line passes both prefix filters.
    ///
    /// Empty prefixes are ignored in both lists; an allow-list made only of empty
    /// entries therefore places no restriction at all.
    pub fn admits(&self, trimmed: &str) -> bool {
        let mut allowed = self.only_start_with.iter().filter(|p| !p.is_empty()).peekable();
        if allowed.peek().is_some() && !allowed.any(|prefix| trimmed.starts_with(prefix.as_str())) {
            return false;
        }
        !self
            .never_start_with
            .iter()
            .filter(|p| !p.is_empty())
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }
}

/// Controls how blocks are painted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Emit `bar`/`barHook` connectors on body lines.
    pub draw_connecting_lines: bool,
    pub highlight_whole_line: WholeLine,
    /// Each entry is an opening character followed by its acceptable closers.
    pub delimiters: Vec<String>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            draw_connecting_lines: true,
            highlight_whole_line: WholeLine::Never,
            delimiters: Vec::new(),
        }
    }
}

/// Which marked lines are highlighted whole instead of by token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WholeLine {
    /// Only the leading token is highlighted.
    #[default]
    Never,
    /// The closing line is highlighted whole.
    End,
    /// Every marked line except the opening one is highlighted whole.
    #[serde(alias = "endAndMiddle")]
    EndAndMiddle,
    /// Every marked line is highlighted whole.
    Always,
}

impl WholeLine {
    /// Whether a line with the given mark is highlighted whole.
    pub fn covers(self, mark: Mark) -> bool {
        match self {
            WholeLine::Never => false,
            WholeLine::End => mark == Mark::End,
            WholeLine::EndAndMiddle => mark != Mark::Start,
            WholeLine::Always => true,
        }
    }
}

/// Resolve a host-supplied tab width.
///
/// Hosts hand over whatever they have: nothing, a number, or a string such as
/// `"auto"`. Anything that is not a positive integer falls back to
/// [`DEFAULT_TAB_SIZE`].
pub fn tab_size_from(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&size| size >= 1)
        .unwrap_or(DEFAULT_TAB_SIZE)
}

/// A tab width the measurer can use: zero is not one, so it becomes
/// [`DEFAULT_TAB_SIZE`].
pub fn usable_tab_size(tab_size: usize) -> usize {
    if tab_size == 0 {
        DEFAULT_TAB_SIZE
    } else {
        tab_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();
        assert!(settings.detection.only_start_with.is_empty());
        assert_eq!(settings.detection.never_start_with.len(), 5);
        assert!(settings.detection.require_closing_text);
        assert!(settings.display.draw_connecting_lines);
        assert_eq!(settings.display.highlight_whole_line, WholeLine::Never);
        assert!(settings.display.delimiters.is_empty());
    }

    #[test]
    fn comment_openers_are_denied_by_default() {
        let detection = DetectionSettings::default();
        assert!(!detection.admits("// note"));
        assert!(!detection.admits("# heading"));
        assert!(!detection.admits("<!-- html -->"));
        assert!(detection.admits("if x:"));
    }

    #[test]
    fn allow_list_restricts_openers() {
        let detection = DetectionSettings {
            only_start_with: vec!["if".into(), "else".into()],
            ..DetectionSettings::default()
        };
        assert!(detection.admits("if x:"));
        assert!(detection.admits("else:"));
        assert!(!detection.admits("while x:"));
    }

    #[test]
    fn empty_prefixes_place_no_restriction() {
        let detection = DetectionSettings {
            only_start_with: vec![String::new()],
            never_start_with: vec![String::new()],
            require_closing_text: true,
        };
        assert!(detection.admits("anything"));
    }

    #[test]
    fn whole_line_policy_coverage() {
        assert!(!WholeLine::Never.covers(Mark::End));
        assert!(WholeLine::End.covers(Mark::End));
        assert!(!WholeLine::End.covers(Mark::Split));
        assert!(WholeLine::EndAndMiddle.covers(Mark::Split));
        assert!(!WholeLine::EndAndMiddle.covers(Mark::Start));
        assert!(WholeLine::Always.covers(Mark::Start));
    }

    #[test]
    fn whole_line_accepts_both_spellings() {
        let parse = |raw: &str| serde_json::from_str::<WholeLine>(raw).ok();
        assert_eq!(parse(r#""end-and-middle""#), Some(WholeLine::EndAndMiddle));
        assert_eq!(parse(r#""endAndMiddle""#), Some(WholeLine::EndAndMiddle));
        assert_eq!(parse(r#""always""#), Some(WholeLine::Always));
        assert_eq!(parse(r#""sometimes""#), None);
    }

    #[test]
    fn tab_size_falls_back_to_four() {
        assert_eq!(tab_size_from(None), 4);
        assert_eq!(tab_size_from(Some("auto")), 4);
        assert_eq!(tab_size_from(Some("0")), 4);
        assert_eq!(tab_size_from(Some("2")), 2);
        assert_eq!(tab_size_from(Some(" 8 ")), 8);
    }

    #[test]
    fn zero_tab_size_is_not_usable() {
        assert_eq!(usable_tab_size(0), DEFAULT_TAB_SIZE);
        assert_eq!(usable_tab_size(1), 1);
        assert_eq!(usable_tab_size(8), 8);
    }
}
