//! Math delimiter normalization
//!
//! Wraps and unwraps a math payload in one of the delimiter pairs a
//! renderer understands:
//! - Inline LaTeX: `\(...\)`
//! - Display LaTeX: `\[...\]` (not yet supported, falls back to inline)
//! - Inline dollar: `$...$`
//! - Display dollar: `$$...$$` (not yet supported, falls back to inline)

use serde::{Deserialize, Serialize};
use tracing::warn;

const DISPLAYSTYLE: &str = r"\displaystyle";

/// A start/end marker pair used to mark a span of text as math content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MathDelimiter {
    /// `\(...\)`
    #[default]
    RoundBrackets,
    /// `\[...\]` — display form, currently unsupported
    SquareBrackets,
    /// `$...$`
    Dollar,
    /// `$$...$$` — display form, currently unsupported
    DoubleDollar,
}

impl MathDelimiter {
    /// Start and end marker strings for this pair.
    pub fn markers(self) -> (&'static str, &'static str) {
        match self {
            Self::RoundBrackets => (r"\(", r"\)"),
            Self::SquareBrackets => (r"\[", r"\]"),
            Self::Dollar => ("$", "$"),
            Self::DoubleDollar => ("$$", "$$"),
        }
    }

    /// The nearest pair the renderer currently accepts.
    fn supported(self) -> Self {
        match self {
            Self::SquareBrackets => Self::RoundBrackets,
            Self::DoubleDollar => Self::Dollar,
            other => other,
        }
    }
}

/// Result of [`unwrap_math`]: the payload with its delimiters removed, plus
/// the pair the content should be re-wrapped with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrappedMath {
    /// Content with the detected delimiter pair stripped.
    pub latex: String,
    /// Detected pair, already normalized to a supported form.
    pub delimiter: MathDelimiter,
}

/// Wrap `content` with the start/end markers of `delimiter`.
///
/// Unsupported display pairs are downgraded to their inline equivalent
/// with a warning; the result is always `start + content + end`.
pub fn wrap_math(content: &str, delimiter: MathDelimiter) -> String {
    let effective = delimiter.supported();
    if effective != delimiter {
        warn!(
            requested = ?delimiter,
            substituted = ?effective,
            "math delimiter not yet supported, substituting"
        );
    }
    let (start, end) = effective.markers();
    format!("{start}{content}{end}")
}

/// Strip a recognized delimiter pair from `content` and report which pair
/// was found.
///
/// Pairs are tested in priority order: `$$...$$`, `$...$`, `\[...\]`,
/// `\(...\)`. Content with no pair, or with only one side of a pair, is
/// returned unchanged with the default delimiter. A literal
/// `\displaystyle` prefix inside the content is removed first.
pub fn unwrap_math(content: &str) -> UnwrappedMath {
    let mut text = content.to_string();
    if let Some(pos) = text.find(DISPLAYSTYLE) {
        warn!("\\displaystyle is not supported, removing");
        text.replace_range(pos..pos + DISPLAYSTYLE.len(), "");
    }

    if let Some(inner) = strip_pair(&text, "$$", "$$") {
        warn!("$$ math delimiters are not yet supported, treating as $");
        return UnwrappedMath {
            latex: inner,
            delimiter: MathDelimiter::Dollar,
        };
    }
    if let Some(inner) = strip_pair(&text, "$", "$") {
        return UnwrappedMath {
            latex: inner,
            delimiter: MathDelimiter::Dollar,
        };
    }
    if let Some(inner) = strip_pair(&text, r"\[", r"\]") {
        warn!("\\[ \\] math delimiters are not yet supported, treating as \\( \\)");
        return UnwrappedMath {
            latex: inner,
            delimiter: MathDelimiter::RoundBrackets,
        };
    }
    if let Some(inner) = strip_pair(&text, r"\(", r"\)") {
        return UnwrappedMath {
            latex: inner,
            delimiter: MathDelimiter::RoundBrackets,
        };
    }

    UnwrappedMath {
        latex: text,
        delimiter: MathDelimiter::RoundBrackets,
    }
}

/// Both markers must be present and disjoint, so `"$"` is not a wrapped
/// empty string.
fn strip_pair(text: &str, start: &str, end: &str) -> Option<String> {
    if text.len() >= start.len() + end.len() && text.starts_with(start) && text.ends_with(end) {
        Some(text[start.len()..text.len() - end.len()].to_string())
    } else {
        None
    }
}
