//! Random triangle grids with replay tokens.
//!
//! Purpose
//! - Reproducible inputs for property tests, benches, and the CLI `random`
//!   command. A draw is fully determined by `(RandomGridCfg, ReplayToken)`.
//!
//! Model
//! - Cells are sampled independently in row-major order from `WeightDist`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{GridError, TriangleGrid, DEFAULT_ROWS};

/// Per-cell weight distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WeightDist {
    /// 1 with probability `p_one` (clamped to [0, 1]), else 0.
    Binary { p_one: f64 },
    /// Uniform on `[min, max)`; collapses to `min` when the range is empty.
    Uniform { min: f64, max: f64 },
}

impl WeightDist {
    /// `Uniform` needs finite bounds and a finite width for `gen_range`.
    fn validate(&self) -> Result<(), GridError> {
        match *self {
            WeightDist::Binary { .. } => Ok(()),
            WeightDist::Uniform { min, max } => {
                if min.is_finite() && max.is_finite() && (max - min).is_finite() {
                    Ok(())
                } else {
                    Err(GridError::InvalidWeightRange { min, max })
                }
            }
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match *self {
            WeightDist::Binary { p_one } => {
                let p = if p_one.is_nan() { 0.0 } else { p_one.clamp(0.0, 1.0) };
                if rng.gen_bool(p) {
                    1.0
                } else {
                    0.0
                }
            }
            WeightDist::Uniform { min, max } => {
                if max > min {
                    rng.gen_range(min..max)
                } else {
                    min
                }
            }
        }
    }
}

/// Random grid configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomGridCfg {
    pub rows: usize,
    pub dist: WeightDist,
}

impl Default for RandomGridCfg {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            dist: WeightDist::Binary { p_one: 0.5 },
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one grid. Fails only for `rows == 0` or a `Uniform` range whose
/// bounds or width are not finite.
pub fn draw_grid(cfg: RandomGridCfg, tok: ReplayToken) -> Result<TriangleGrid, GridError> {
    if cfg.rows == 0 {
        return Err(GridError::InvalidDimension { rows: 0 });
    }
    cfg.dist.validate()?;
    let mut rng = tok.to_std_rng();
    let weights = (0..cfg.rows)
        .map(|i| (0..=i).map(|_| cfg.dist.sample(&mut rng)).collect())
        .collect();
    TriangleGrid::from_rows(weights)
}
