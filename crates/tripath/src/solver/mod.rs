//! Maximum-weight top-to-bottom path through a `TriangleGrid`.
//!
//! Purpose
//! - Score every cell with a top-down DP, pick the heaviest end cell, and walk
//!   the recorded incoming moves back to the apex.
//! - Output is deterministic: interior ties prefer the LEFT predecessor and
//!   end-column ties prefer the smallest column.
//!
//! Layout
//! - `types.rs` (Move, Cell, PathResult), `dp.rs` (tables and reconstruction),
//!   `brute.rs` (exhaustive oracle for small grids).
//!
//! Code cross-refs: `grid::TriangleGrid`, `random::draw_grid`

mod brute;
mod dp;
mod types;

pub use brute::{brute_force_best, MAX_BRUTE_FORCE_ROWS};
pub use dp::{solve, solve_rows, SolveError};
pub use types::{Cell, Move, PathResult};
