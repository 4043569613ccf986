//! Editable triangular weight grid.
//!
//! Row `i` (0-based) holds exactly `i + 1` cells; cell `(row, col)` is valid
//! for `0 <= col <= row < rows`. Weights are `f64` so callers may use real
//! weights, but the editor workflow only ever writes 0 or 1 (`toggle_weight`).
//!
//! Code cross-refs: `solver::solve`, `random::draw_grid`

use std::fmt;

/// Row count the interactive editor starts with.
pub const DEFAULT_ROWS: usize = 12;

/// Errors surfaced by grid construction and cell access.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Row count must be at least one.
    InvalidDimension { rows: usize },
    /// Cell lies outside the triangle `0 <= col <= row < rows`.
    OutOfBounds { row: usize, col: usize, rows: usize },
    /// NaN or infinite weight.
    NonFiniteWeight { row: usize, col: usize },
    /// Sampling range whose bounds or width are not finite.
    InvalidWeightRange { min: f64, max: f64 },
    /// Nested input whose row `row` does not have `row + 1` entries.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension { rows } => {
                write!(f, "row count must be a positive integer, got {rows}")
            }
            GridError::OutOfBounds { row, col, rows } => write!(
                f,
                "cell ({row}, {col}) is outside a triangle with {rows} rows"
            ),
            GridError::NonFiniteWeight { row, col } => {
                write!(f, "weight at ({row}, {col}) is not finite")
            }
            GridError::InvalidWeightRange { min, max } => {
                write!(f, "weight range [{min}, {max}) is not finite")
            }
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} entries, a triangle needs {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Triangular weight matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleGrid {
    weights: Vec<Vec<f64>>,
}

impl TriangleGrid {
    /// All-zero triangle with `rows` rows.
    pub fn new(rows: usize) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::InvalidDimension { rows });
        }
        let weights = (0..rows).map(|i| vec![0.0; i + 1]).collect();
        Ok(Self { weights })
    }

    /// Build from nested rows, checking shape and finiteness.
    pub fn from_rows(weights: Vec<Vec<f64>>) -> Result<Self, GridError> {
        if weights.is_empty() {
            return Err(GridError::InvalidDimension { rows: 0 });
        }
        for (i, row) in weights.iter().enumerate() {
            if row.len() != i + 1 {
                return Err(GridError::Ragged {
                    row: i,
                    expected: i + 1,
                    found: row.len(),
                });
            }
            if let Some(j) = row.iter().position(|w| !w.is_finite()) {
                return Err(GridError::NonFiniteWeight { row: i, col: j });
            }
        }
        Ok(Self { weights })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.weights.len()
    }

    /// True iff `(row, col)` lies inside the triangle.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col <= row
    }

    fn check(&self, row: usize, col: usize) -> Result<(), GridError> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows(),
            })
        }
    }

    pub fn weight(&self, row: usize, col: usize) -> Result<f64, GridError> {
        self.check(row, col)?;
        Ok(self.weights[row][col])
    }

    pub fn set_weight(&mut self, row: usize, col: usize, value: f64) -> Result<(), GridError> {
        self.check(row, col)?;
        if !value.is_finite() {
            return Err(GridError::NonFiniteWeight { row, col });
        }
        self.weights[row][col] = value;
        Ok(())
    }

    /// Flip a cell between 0 and 1 and return the new weight.
    ///
    /// Any non-zero weight counts as "on" and toggles to 0.
    pub fn toggle_weight(&mut self, row: usize, col: usize) -> Result<f64, GridError> {
        self.check(row, col)?;
        let cell = &mut self.weights[row][col];
        *cell = if *cell == 0.0 { 1.0 } else { 0.0 };
        Ok(*cell)
    }

    /// Reset every weight to 0, keeping the row count.
    pub fn clear(&mut self) {
        for row in &mut self.weights {
            row.fill(0.0);
        }
    }

    /// Read-only view of row `i`, `None` past the last row.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.weights.get(i).map(Vec::as_slice)
    }

    /// Read-only view of all rows (always triangular).
    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.weights
    }

    /// Cells in row-major order as `((row, col), weight)`.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &w)| ((i, j), w)))
    }
}
