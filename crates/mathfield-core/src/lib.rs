//! Mathfield Math Engine
//!
//! A small parser/model/serializer pipeline over LaTeX math markup for
//! interactive assessment items. This crate provides:
//! - Tokenization of static LaTeX containing embedded answer fields
//! - A bounded matrix model with bidirectional LaTeX serialization
//! - Delimiter normalization for content crossing a rendering boundary
//! - A registry mapping structured editor commands to LaTeX text
//!
//! The engine favors silent degradation over failure: malformed input is
//! returned as opaque text or signalled with `None`, never a panic, so an
//! intermediate editor state cannot crash the host UI.

pub mod commands;
pub mod delimiters;
pub mod fields;
pub mod latex;
pub mod matrix;

// Re-export main types for convenience
pub use commands::{command_to_latex, is_empty_math_value, CommandInput, MathCommand, NamedSymbol};
pub use delimiters::{unwrap_math, wrap_math, MathDelimiter, UnwrappedMath};
pub use fields::{
    compose_static_latex, next_field_id, parse_matrix_latex, parse_static_latex, StaticToken,
};
pub use latex::{count_braces, normalize_latex, strip_spaces};
pub use matrix::{CellRef, KindParseError, MatrixKind, MatrixModel, MAX_COLUMNS, MAX_ROWS};
