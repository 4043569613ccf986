//! Top-down dynamic program over the triangle plus path reconstruction.
//!
//! `best[i][j]` is the heaviest apex-to-`(i, j)` sum. Edge cells have a single
//! predecessor; interior cells take the RIGHT predecessor `(i-1, j-1)` only
//! when it is strictly heavier than the LEFT predecessor `(i-1, j)`. The end
//! column is the first maximum of the last row. Both tie-breaks are part of the
//! observable output.

use std::fmt;

use super::types::{Cell, Move, PathResult};
use crate::grid::TriangleGrid;

/// Errors surfaced by the solver.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// No rows to walk.
    EmptyGrid,
    /// Row `row` of a raw snapshot does not have `row + 1` entries.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// NaN or infinite weight in a raw snapshot.
    NonFiniteWeight { row: usize, col: usize },
    /// Best path sum overflowed `f64`.
    ScoreOverflow,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::EmptyGrid => write!(f, "grid has no rows"),
            SolveError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} entries, a triangle needs {expected}"
            ),
            SolveError::NonFiniteWeight { row, col } => {
                write!(f, "weight at ({row}, {col}) is not finite")
            }
            SolveError::ScoreOverflow => write!(f, "best path sum is not a finite f64"),
        }
    }
}

impl std::error::Error for SolveError {}

/// DP tables for one solve call. `incoming[i - 1][j]` is the move that
/// enters cell `(i, j)`; the apex has none.
struct Table {
    best: Vec<Vec<f64>>,
    incoming: Vec<Vec<Move>>,
}

/// Maximum-weight top-to-bottom path of `grid`.
pub fn solve(grid: &TriangleGrid) -> Result<PathResult, SolveError> {
    solve_rows(grid.as_rows())
}

/// Same as [`solve`] on a raw snapshot of nested rows.
pub fn solve_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<PathResult, SolveError> {
    validate(rows)?;
    let table = fill(rows);
    let last = &table.best[table.best.len() - 1];
    let (end_column, score) = first_max(last);
    if !score.is_finite() {
        return Err(SolveError::ScoreOverflow);
    }
    let (moves, visited_cells) = reconstruct(&table.incoming, end_column);
    tracing::debug!(rows = rows.len(), score, end_column, "solved triangle");
    Ok(PathResult {
        score,
        end_column,
        moves,
        visited_cells,
    })
}

fn validate<R: AsRef<[f64]>>(rows: &[R]) -> Result<(), SolveError> {
    if rows.is_empty() {
        return Err(SolveError::EmptyGrid);
    }
    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != i + 1 {
            return Err(SolveError::Ragged {
                row: i,
                expected: i + 1,
                found: row.len(),
            });
        }
        if let Some(j) = row.iter().position(|w| !w.is_finite()) {
            return Err(SolveError::NonFiniteWeight { row: i, col: j });
        }
    }
    Ok(())
}

/// Pre: `rows` is non-empty and triangular.
fn fill<R: AsRef<[f64]>>(rows: &[R]) -> Table {
    let n = rows.len();
    let mut best: Vec<Vec<f64>> = Vec::with_capacity(n);
    let mut incoming: Vec<Vec<Move>> = Vec::with_capacity(n.saturating_sub(1));
    best.push(vec![rows[0].as_ref()[0]]);

    for (i, w) in rows.iter().enumerate().skip(1) {
        let w = w.as_ref();
        let prev = &best[i - 1];
        let mut cur = Vec::with_capacity(i + 1);
        let mut dirs = Vec::with_capacity(i + 1);
        for (j, &wj) in w.iter().enumerate() {
            let (from, mv) = if j == 0 {
                (prev[0], Move::Left)
            } else if j == i {
                (prev[i - 1], Move::Right)
            } else if prev[j - 1] > prev[j] {
                (prev[j - 1], Move::Right)
            } else {
                // ties go LEFT
                (prev[j], Move::Left)
            };
            cur.push(from + wj);
            dirs.push(mv);
        }
        best.push(cur);
        incoming.push(dirs);
    }
    Table { best, incoming }
}

/// First (smallest-index) maximum of a non-empty row.
fn first_max(row: &[f64]) -> (usize, f64) {
    let mut idx = 0;
    let mut max = row[0];
    for (j, &v) in row.iter().enumerate().skip(1) {
        if v > max {
            idx = j;
            max = v;
        }
    }
    (idx, max)
}

/// Walk back from `(rows - 1, end_column)` to the apex; output is top-down.
fn reconstruct(incoming: &[Vec<Move>], end_column: usize) -> (Vec<Move>, Vec<Cell>) {
    let mut row = incoming.len();
    let mut col = end_column;
    let mut moves = Vec::with_capacity(row);
    let mut cells = Vec::with_capacity(row + 1);
    cells.push(Cell { row, col });
    while row > 0 {
        let mv = incoming[row - 1][col];
        moves.push(mv);
        (row, col) = mv.predecessor(row, col);
        cells.push(Cell { row, col });
    }
    moves.reverse();
    cells.reverse();
    (moves, cells)
}
