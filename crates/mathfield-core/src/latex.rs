//! Low-level LaTeX string utilities
//!
//! Leaf helpers shared by the field parser and the delimiter normalizer.
//! These operate on raw text and know nothing about tokens or models.

use regex::Regex;
use std::sync::LazyLock;

static BACKSLASH_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\{2,}").expect("backslash run regex"));

/// Collapse every run of two-or-more consecutive backslashes into a single
/// backslash.
///
/// Stored items double-escape backslashes on every save round-trip; this
/// undoes any amount of that stacking in one pass.
pub fn normalize_latex(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    BACKSLASH_RUN_REGEX.replace_all(input, r"\").into_owned()
}

/// Remove every literal space character. Other whitespace is left alone.
pub fn strip_spaces(input: &str) -> String {
    input.replace(' ', "")
}

/// Count occurrences of `{` (opening braces only).
pub fn count_braces(input: &str) -> usize {
    input.chars().filter(|&c| c == '{').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_backslash_runs() {
        assert_eq!(normalize_latex(r"\\frac{1}{2}"), r"\frac{1}{2}");
        assert_eq!(normalize_latex(r"\\\\alpha"), r"\alpha");
        assert_eq!(normalize_latex(r"a\\\b"), r"a\b");
    }

    #[test]
    fn test_normalize_leaves_single_backslashes() {
        assert_eq!(normalize_latex(r"\frac{1}{2}"), r"\frac{1}{2}");
        assert_eq!(normalize_latex("x+y"), "x+y");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_latex(""), "");
    }

    #[test]
    fn test_strip_spaces_only_spaces() {
        assert_eq!(strip_spaces("x = 1 + 2"), "x=1+2");
        assert_eq!(strip_spaces("a\tb\nc"), "a\tb\nc");
        assert_eq!(strip_spaces(""), "");
    }

    #[test]
    fn test_count_braces_counts_opening_only() {
        assert_eq!(count_braces(r"\frac{1}{2}"), 2);
        assert_eq!(count_braces("}}}"), 0);
        assert_eq!(count_braces(""), 0);
    }
}
