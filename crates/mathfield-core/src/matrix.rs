//! Bounded matrix model
//!
//! A rectangular grid of LaTeX cell strings backing a matrix environment
//! (`pmatrix`, `bmatrix`, `vmatrix`, `Bmatrix`, `Vmatrix`), with bounded
//! row/column insertion, cell deletion with empty-row/column pruning, and
//! bidirectional LaTeX serialization.
//!
//! The grid is never larger than 5×5 and never smaller than 1×1; every
//! mutation re-establishes both bounds, so a model observed from outside
//! is always rectangular and in range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of rows a matrix may hold.
pub const MAX_ROWS: usize = 5;

/// Maximum number of columns a matrix may hold.
pub const MAX_COLUMNS: usize = 5;

const ROW_SEPARATOR: &str = r"\\";
const CELL_SEPARATOR: char = '&';

/// Bracket style of a matrix environment.
///
/// Serializes as the LaTeX environment name (`pmatrix`, `Bmatrix`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatrixKind {
    /// `pmatrix` — parentheses
    #[serde(rename = "pmatrix")]
    Parens,
    /// `bmatrix` — square brackets
    #[serde(rename = "bmatrix")]
    Brackets,
    /// `vmatrix` — single vertical bars
    #[serde(rename = "vmatrix")]
    Bars,
    /// `Bmatrix` — curly braces
    #[serde(rename = "Bmatrix")]
    Braces,
    /// `Vmatrix` — double vertical bars
    #[serde(rename = "Vmatrix")]
    DoubleBars,
}

impl MatrixKind {
    /// All supported environments, in detection order.
    pub const ALL: [MatrixKind; 5] = [
        MatrixKind::Parens,
        MatrixKind::Brackets,
        MatrixKind::Bars,
        MatrixKind::Braces,
        MatrixKind::DoubleBars,
    ];

    /// The LaTeX environment name.
    pub fn env_name(self) -> &'static str {
        match self {
            Self::Parens => "pmatrix",
            Self::Brackets => "bmatrix",
            Self::Bars => "vmatrix",
            Self::Braces => "Bmatrix",
            Self::DoubleBars => "Vmatrix",
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_name())
    }
}

/// Error returned when a string names no supported matrix environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized matrix environment: {0:?}")]
pub struct KindParseError(pub String);

impl FromStr for MatrixKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.env_name() == s)
            .ok_or_else(|| KindParseError(s.to_string()))
    }
}

/// Zero-based reference to a cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub column: usize,
}

impl CellRef {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A bounded 2-D grid of LaTeX cell strings with a fixed bracket style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixModel {
    kind: MatrixKind,
    cells: Vec<Vec<String>>,
}

impl MatrixModel {
    /// Build a model of `kind` from an initial grid.
    ///
    /// An empty grid defaults to 2×2 empty cells. Jagged input is padded
    /// to rectangular and the result is clamped to 5×5.
    pub fn new(kind: MatrixKind, cells: Vec<Vec<String>>) -> Self {
        let mut model = Self { kind, cells };
        if model.cells.is_empty() {
            model.cells = vec![vec![String::new(); 2]; 2];
        }
        model.restore_shape();
        model
    }

    /// Parse a full matrix environment string.
    ///
    /// The `\begin`/`\end` names must agree and name one of the supported
    /// environments; anything else yields `None`. Rows are split on `\\`
    /// and cells on `&` with no trimming, so a serialized empty cell
    /// (rendered as a single space) reads back as `" "`.
    pub fn from_latex(latex: &str) -> Option<Self> {
        for kind in MatrixKind::ALL {
            let begin = format!(r"\begin{{{}}}", kind.env_name());
            let end = format!(r"\end{{{}}}", kind.env_name());
            let Some(body) = latex
                .strip_prefix(begin.as_str())
                .and_then(|rest| rest.strip_suffix(end.as_str()))
            else {
                continue;
            };
            let cells = body
                .split(ROW_SEPARATOR)
                .map(|row| row.split(CELL_SEPARATOR).map(str::to_string).collect())
                .collect();
            return Some(Self::new(kind, cells));
        }
        None
    }

    /// The bracket style this model was built with.
    pub fn kind(&self) -> MatrixKind {
        self.kind
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (rows are rectangular, so row 0 is authoritative).
    pub fn columns(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    /// A deep copy of the grid. Holding onto a previous result cannot
    /// mutate the model.
    pub fn value(&self) -> Vec<Vec<String>> {
        self.cells.clone()
    }

    /// Read a single cell.
    pub fn cell(&self, at: CellRef) -> Option<&str> {
        self.cells
            .get(at.row)
            .and_then(|row| row.get(at.column))
            .map(String::as_str)
    }

    /// Write a single cell. Out-of-range references are ignored.
    pub fn set_cell(&mut self, at: CellRef, value: impl Into<String>) {
        if let Some(cell) = self.cells.get_mut(at.row).and_then(|row| row.get_mut(at.column)) {
            *cell = value.into();
        }
    }

    /// Insert a row of empty cells immediately after `at.row`.
    ///
    /// No-op once the model holds 5 rows. The new row matches the width of
    /// the referenced row, or the grid width when the reference is out of
    /// range.
    pub fn insert_row_after(&mut self, at: CellRef) {
        if self.rows() >= MAX_ROWS {
            return;
        }
        let width = self
            .cells
            .get(at.row)
            .map(Vec::len)
            .unwrap_or_else(|| self.columns());
        let index = (at.row + 1).min(self.cells.len());
        self.cells.insert(index, vec![String::new(); width]);
    }

    /// Insert a column of empty cells immediately after `at.column`.
    ///
    /// No-op once the model holds 5 columns. Every row is re-clamped to 5
    /// columns afterwards.
    pub fn insert_column_after(&mut self, at: CellRef) {
        if self.columns() >= MAX_COLUMNS {
            return;
        }
        for row in &mut self.cells {
            let index = (at.column + 1).min(row.len());
            row.insert(index, String::new());
            row.truncate(MAX_COLUMNS);
        }
    }

    /// Clear the referenced cell, then prune rows and columns left
    /// entirely blank.
    ///
    /// The target row is removed when it is blank and at least one other
    /// row remains; columns are swept last-to-first, each removed when
    /// blank across all remaining rows while more than one column remains.
    /// Emptiness is evaluated in a single pass per call. The grid never
    /// shrinks below 1×1.
    pub fn delete_cell_and_cleanup(&mut self, at: CellRef) {
        let Some(cell) = self.cells.get_mut(at.row).and_then(|row| row.get_mut(at.column)) else {
            return;
        };
        cell.clear();

        if self.cells.len() > 1 && self.cells[at.row].iter().all(|c| c.trim().is_empty()) {
            self.cells.remove(at.row);
        }

        // Last to first so removals do not shift columns still pending.
        for column in (0..self.columns()).rev() {
            let blank = self
                .cells
                .iter()
                .all(|row| row.get(column).map_or(true, |c| c.trim().is_empty()));
            if blank && self.columns() > 1 {
                for row in &mut self.cells {
                    if column < row.len() {
                        row.remove(column);
                    }
                }
            }
        }

        self.restore_shape();
    }

    /// Serialize to a full matrix environment.
    ///
    /// Empty cells are rendered as a single space so two separators never
    /// touch.
    pub fn to_latex(&self) -> String {
        let body = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.is_empty() { " " } else { cell.as_str() })
                    .collect::<Vec<_>>()
                    .join(&CELL_SEPARATOR.to_string())
            })
            .collect::<Vec<_>>()
            .join(ROW_SEPARATOR);
        format!(
            r"\begin{{{kind}}}{body}\end{{{kind}}}",
            kind = self.kind.env_name()
        )
    }

    /// Re-establish the rectangularity, minimum-shape and 5×5 bounds
    /// invariants.
    fn restore_shape(&mut self) {
        if self.cells.is_empty() {
            self.cells.push(vec![String::new()]);
        }
        self.cells.truncate(MAX_ROWS);
        let width = self
            .cells
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .clamp(1, MAX_COLUMNS);
        for row in &mut self.cells {
            row.resize_with(width, String::new);
        }
    }
}
