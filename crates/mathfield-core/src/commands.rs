//! Editor command registry
//!
//! Maps structured "insert this construct" commands coming from the
//! editing surface to the LaTeX text that gets spliced into a field's
//! value. Commands are inputs only and are never stored; their wire shape
//! mirrors the stored-item JSON (`{"type": "lrnexponent", ...}`), with
//! plain strings and string arrays accepted as pass-through.

use crate::matrix::{MatrixKind, MatrixModel};
use serde::{Deserialize, Serialize};

/// A named symbol from the closed set the editor toolbar offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedSymbol {
    /// `\nless`
    #[serde(rename = "nless")]
    NotLess,
    /// `\ngtr`
    #[serde(rename = "ngtr")]
    NotGreater,
}

impl NamedSymbol {
    /// The LaTeX command for this symbol.
    pub fn latex(self) -> &'static str {
        match self {
            Self::NotLess => r"\nless",
            Self::NotGreater => r"\ngtr",
        }
    }
}

/// A structured construct-insertion command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MathCommand {
    /// `<base>^{<exponent>}`
    #[serde(rename = "lrnexponent")]
    Exponent { base: String, exponent: String },
    /// `<base>^2`
    #[serde(rename = "lrnsquared")]
    Squared { base: String },
    /// `<base>_<subscript>` — single-token subscript assumed, no braces
    #[serde(rename = "lrnsubscript")]
    Subscript { base: String, subscript: String },
    /// A full matrix environment, serialized through [`MatrixModel`]
    #[serde(rename = "lrnmatrix")]
    Matrix {
        kind: MatrixKind,
        cells: Vec<Vec<String>>,
    },
    /// A named symbol
    #[serde(rename = "symbol")]
    Symbol { name: NamedSymbol },
}

impl MathCommand {
    /// The LaTeX text this command inserts.
    pub fn to_latex(&self) -> String {
        match self {
            Self::Exponent { base, exponent } => format!("{base}^{{{exponent}}}"),
            Self::Squared { base } => format!("{base}^2"),
            Self::Subscript { base, subscript } => format!("{base}_{subscript}"),
            Self::Matrix { kind, cells } => MatrixModel::new(*kind, cells.clone()).to_latex(),
            Self::Symbol { name } => name.latex().to_string(),
        }
    }
}

/// Anything a caller may hand to the registry: a structured command, a
/// plain LaTeX string (its LaTeX is itself), or a string array (joined
/// with no separator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandInput {
    Command(MathCommand),
    Sequence(Vec<String>),
    Text(String),
}

impl CommandInput {
    /// The LaTeX text this input inserts.
    pub fn to_latex(&self) -> String {
        match self {
            Self::Command(command) => command.to_latex(),
            Self::Sequence(parts) => parts.concat(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<MathCommand> for CommandInput {
    fn from(command: MathCommand) -> Self {
        Self::Command(command)
    }
}

impl From<&str> for CommandInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Resolve any command input to its LaTeX text.
pub fn command_to_latex(command: &CommandInput) -> String {
    command.to_latex()
}

/// The canonical "does this field hold a real answer" predicate: true for
/// absent or whitespace-only content.
pub fn is_empty_math_value(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponent() {
        let command = MathCommand::Exponent {
            base: "x".to_string(),
            exponent: "12".to_string(),
        };
        assert_eq!(command.to_latex(), "x^{12}");
    }

    #[test]
    fn test_squared() {
        let command = MathCommand::Squared {
            base: "y".to_string(),
        };
        assert_eq!(command.to_latex(), "y^2");
    }

    #[test]
    fn test_subscript_has_no_braces() {
        let command = MathCommand::Subscript {
            base: "a".to_string(),
            subscript: "n".to_string(),
        };
        assert_eq!(command.to_latex(), "a_n");
    }

    #[test]
    fn test_matrix_delegates_to_model() {
        let command = MathCommand::Matrix {
            kind: MatrixKind::Parens,
            cells: vec![
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string(), "4".to_string()],
            ],
        };
        assert_eq!(command.to_latex(), r"\begin{pmatrix}1&2\\3&4\end{pmatrix}");
    }

    #[test]
    fn test_symbols() {
        assert_eq!(
            MathCommand::Symbol {
                name: NamedSymbol::NotLess
            }
            .to_latex(),
            r"\nless"
        );
        assert_eq!(
            MathCommand::Symbol {
                name: NamedSymbol::NotGreater
            }
            .to_latex(),
            r"\ngtr"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(command_to_latex(&CommandInput::from(r"\pi")), r"\pi");
    }

    #[test]
    fn test_sequence_joins_with_no_separator() {
        let input = CommandInput::Sequence(vec!["a".to_string(), "+".to_string(), "b".to_string()]);
        assert_eq!(command_to_latex(&input), "a+b");
    }

    #[test]
    fn test_command_wire_shape() {
        let input: CommandInput =
            serde_json::from_str(r#"{"type": "lrnexponent", "base": "x", "exponent": "12"}"#)
                .unwrap();
        assert_eq!(command_to_latex(&input), "x^{12}");

        let input: CommandInput =
            serde_json::from_str(r#"{"type": "symbol", "name": "nless"}"#).unwrap();
        assert_eq!(command_to_latex(&input), r"\nless");

        let input: CommandInput = serde_json::from_str(r#"["1", "+", "2"]"#).unwrap();
        assert_eq!(command_to_latex(&input), "1+2");
    }

    #[test]
    fn test_is_empty_math_value() {
        assert!(is_empty_math_value(None));
        assert!(is_empty_math_value(Some("")));
        assert!(is_empty_math_value(Some("   ")));
        assert!(!is_empty_math_value(Some("x")));
    }
}
