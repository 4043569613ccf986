//! Maximum-weight paths through triangular grids.
//!
//! A `TriangleGrid` holds the editable weights (row `i` has `i + 1` cells);
//! `solver::solve` returns the heaviest apex-to-base path with deterministic
//! tie-breaks, its LEFT/RIGHT moves, and the visited cells.
//!
//! API Policy
//! - `grid`, `solver`, and `random` are the stable entry points; `api` and
//!   `prelude` are convenience re-exports and may be reshuffled.

pub mod api;
pub mod grid;
pub mod random;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use grid::{GridError, TriangleGrid, DEFAULT_ROWS};
pub use solver::{solve, Cell, Move, PathResult, SolveError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::grid::{GridError, TriangleGrid, DEFAULT_ROWS};
    pub use crate::random::{draw_grid, RandomGridCfg, ReplayToken, WeightDist};
    pub use crate::solver::{solve, solve_rows, Cell, Move, PathResult, SolveError};
}
