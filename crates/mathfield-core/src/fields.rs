//! Static-field tokenizer and composer
//!
//! This module implements tokenization of a LaTeX string containing
//! embedded interactive answer fields:
//! - Canonical fields: `\MathQuillMathField[r1]{value}`
//! - Legacy embeds: `\embed{answerBlock}[r1]` (normalized away on parse)
//!
//! The scan produces an ordered sequence of text and field tokens; the
//! composer is its exact syntactic inverse, so a canonical string
//! round-trips byte for byte.

use crate::latex::normalize_latex;
use crate::matrix::MatrixModel;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMBED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\embed\{answerBlock\}\[(r\d+)\]").expect("embed regex"));

static FIELD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\MathQuillMathField\[(r\d+)\]\{(.*?)\}").expect("math field regex")
});

/// One run of a tokenized static math expression, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StaticToken {
    /// A literal LaTeX/text run, opaque to the engine.
    Text { value: String },
    /// An editable placeholder with its stable id (`r<digits>`) and
    /// current LaTeX content.
    Field { id: String, value: String },
}

impl StaticToken {
    /// Create a text token.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    /// Create a field token.
    pub fn field(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Field {
            id: id.into(),
            value: value.into(),
        }
    }

    /// The field id, if this token is a field.
    pub fn field_id(&self) -> Option<&str> {
        match self {
            Self::Field { id, .. } => Some(id),
            Self::Text { .. } => None,
        }
    }
}

/// Tokenize a raw LaTeX string into text and field tokens.
///
/// Backslash escaping is normalized first, then every legacy embed is
/// rewritten to an empty canonical field before the scan. Malformed input
/// never fails: anything the field pattern does not match is carried as
/// opaque text, and a fully empty input yields a single empty text token.
pub fn parse_static_latex(raw: &str) -> Vec<StaticToken> {
    let normalized = normalize_latex(raw);
    let canonical = EMBED_REGEX.replace_all(&normalized, r"\MathQuillMathField[${1}]{}");

    let mut tokens = Vec::new();
    let mut cursor = 0;
    for cap in FIELD_REGEX.captures_iter(&canonical) {
        let matched = cap.get(0).unwrap();
        if matched.start() > cursor {
            tokens.push(StaticToken::text(&canonical[cursor..matched.start()]));
        }
        tokens.push(StaticToken::field(&cap[1], &cap[2]));
        cursor = matched.end();
    }
    if cursor < canonical.len() {
        tokens.push(StaticToken::text(&canonical[cursor..]));
    }

    if tokens.is_empty() {
        tokens.push(StaticToken::text(canonical.into_owned()));
    }
    tokens
}

/// Reassemble the exact LaTeX for a token sequence.
///
/// Inverse of the parse scan. Embeds normalized during parsing are
/// intentionally emitted in canonical field syntax, never embed syntax.
pub fn compose_static_latex(tokens: &[StaticToken]) -> String {
    let mut latex = String::new();
    for token in tokens {
        match token {
            StaticToken::Text { value } => latex.push_str(value),
            StaticToken::Field { id, value } => {
                latex.push_str(&format!(r"\MathQuillMathField[{id}]{{{value}}}"));
            }
        }
    }
    latex
}

/// Parse a LaTeX matrix environment, or `None` when the string is not one.
///
/// Convenience delegation to [`MatrixModel::from_latex`].
pub fn parse_matrix_latex(latex: &str) -> Option<MatrixModel> {
    MatrixModel::from_latex(latex)
}

/// The next unused field id for a token sequence, one past the highest
/// numeric suffix present (`r1` for a sequence with no fields).
pub fn next_field_id(tokens: &[StaticToken]) -> String {
    let highest = tokens
        .iter()
        .filter_map(StaticToken::field_id)
        .filter_map(|id| id.strip_prefix('r'))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max();
    format!("r{}", highest.map_or(1, |n| n + 1))
}
