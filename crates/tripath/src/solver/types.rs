//! Result types for the path solver.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step from row `i` to row `i + 1`.
///
/// `Left` keeps the column index, `Right` increments it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Move {
    Left,
    Right,
}

impl Move {
    /// Single-letter token used in path strings.
    #[inline]
    pub fn token(self) -> &'static str {
        match self {
            Move::Left => "L",
            Move::Right => "R",
        }
    }

    /// Cell one row up that reaches `(row, col)` via this move.
    /// Caller guarantees `row >= 1` and, for `Right`, `col >= 1`.
    #[inline]
    pub(crate) fn predecessor(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Move::Left => (row - 1, col),
            Move::Right => (row - 1, col - 1),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
        })
    }
}

/// Grid cell coordinate `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl From<(usize, usize)> for Cell {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Optimal path for one grid snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub score: f64,
    pub end_column: usize,
    /// One move per row transition, top to bottom (`rows - 1` entries).
    pub moves: Vec<Move>,
    /// Apex first, last row last (`rows` entries).
    pub visited_cells: Vec<Cell>,
}

impl PathResult {
    /// True iff the path passes through `(row, col)`.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.visited_cells
            .get(row)
            .is_some_and(|c| c.col == col)
    }

    /// Moves joined as `L -> R -> L`; empty for a single-row grid.
    pub fn path_string(&self) -> String {
        self.moves
            .iter()
            .map(|m| m.token())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score: {}\npath: {}", self.score, self.path_string())
    }
}
