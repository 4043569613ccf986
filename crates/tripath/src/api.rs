//! Flat entry points for front ends (editor, CLI).
//!
//! Thin wrappers named after the editor actions: create a grid, edit a cell,
//! solve. Everything here delegates to `grid` and `solver`.

pub use crate::grid::{GridError, TriangleGrid};
// Brute-force oracle, for callers that want to double-check small grids.
pub use crate::solver::{brute_force_best, MAX_BRUTE_FORCE_ROWS};
pub use crate::solver::{PathResult, SolveError};

/// Fresh all-zero grid with `rows` rows.
pub fn create_grid(rows: usize) -> Result<TriangleGrid, GridError> {
    TriangleGrid::new(rows)
}

/// Overwrite one cell.
pub fn set_weight(
    grid: &mut TriangleGrid,
    row: usize,
    col: usize,
    value: f64,
) -> Result<(), GridError> {
    grid.set_weight(row, col, value)
}

/// Flip one cell between 0 and 1, returning the new weight.
pub fn toggle_weight(grid: &mut TriangleGrid, row: usize, col: usize) -> Result<f64, GridError> {
    grid.toggle_weight(row, col)
}

/// Best path for the current grid.
pub fn solve(grid: &TriangleGrid) -> Result<PathResult, SolveError> {
    crate::solver::solve(grid)
}
