//! Open-mode normalization
//!
//! Users hand the open action a free-form command abbreviation in editor
//! style (`vs`, `vsp`, `tabe`, ...). Normalization maps the accepted short
//! forms onto one of three open modes and degrades gracefully: anything
//! unrecognized, including the empty string, opens in the same window.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

fn vsplit_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^vs(?:p(?:l(?:i(?:t)?)?)?)?$").unwrap())
}

fn tab_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^tabe(?:d(?:i(?:t)?)?)?$").unwrap())
}

/// Normalized open-mode token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenMode {
    SameWindow,
    VerticalSplit,
    NewTab,
}

impl OpenMode {
    /// Normalize a free-form command abbreviation.
    ///
    /// `vs`..`vsplit` -> vertical split, `s`..`split` or empty -> same
    /// window, `tabe`..`tabedit` -> new tab, anything else -> same window.
    pub fn normalize(input: &str) -> OpenMode {
        let input = input.trim();
        if vsplit_regex().is_match(input) {
            OpenMode::VerticalSplit
        } else if tab_regex().is_match(input) {
            OpenMode::NewTab
        } else {
            // The `s`..`split` forms, the empty string and anything
            // unrecognized all open in the same window.
            OpenMode::SameWindow
        }
    }

    /// Canonical command token for the host.
    pub fn command(&self) -> &'static str {
        match self {
            OpenMode::SameWindow => "edit",
            OpenMode::VerticalSplit => "vsplit",
            OpenMode::NewTab => "tabnew",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_split_forms() {
        for input in ["vs", "vsp", "vspl", "vspli", "vsplit"] {
            assert_eq!(OpenMode::normalize(input), OpenMode::VerticalSplit);
        }
    }

    #[test]
    fn test_same_window_forms() {
        for input in ["s", "sp", "spl", "spli", "split", ""] {
            assert_eq!(OpenMode::normalize(input), OpenMode::SameWindow);
        }
    }

    #[test]
    fn test_new_tab_forms() {
        for input in ["tabe", "tabed", "tabedi", "tabedit"] {
            assert_eq!(OpenMode::normalize(input), OpenMode::NewTab);
        }
    }

    #[test]
    fn test_graceful_fallback() {
        assert_eq!(OpenMode::normalize("xyz"), OpenMode::SameWindow);
        assert_eq!(OpenMode::normalize("vsplitx"), OpenMode::SameWindow);
        assert_eq!(OpenMode::normalize("tab"), OpenMode::SameWindow);
    }

    #[test]
    fn test_command_tokens() {
        assert_eq!(OpenMode::SameWindow.command(), "edit");
        assert_eq!(OpenMode::VerticalSplit.command(), "vsplit");
        assert_eq!(OpenMode::NewTab.command(), "tabnew");
    }
}
