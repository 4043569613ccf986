//! Property tests: DP result against exhaustive enumeration.

use proptest::prelude::*;
use tripath::random::{draw_grid, RandomGridCfg, ReplayToken, WeightDist};
use tripath::solver::{brute_force_best, solve, Move};
use tripath::TriangleGrid;

/// Triangles with `1..=max_rows` rows drawn from `weight`.
fn triangle<S>(max_rows: usize, weight: S) -> impl Strategy<Value = Vec<Vec<f64>>>
where
    S: Strategy<Value = f64> + Clone + 'static,
{
    (1..=max_rows).prop_flat_map(move |n| {
        (0..n)
            .map(|i| prop::collection::vec(weight.clone(), i + 1))
            .collect::<Vec<_>>()
    })
}

fn binary() -> impl Strategy<Value = f64> + Clone {
    any::<bool>().prop_map(|on| if on { 1.0 } else { 0.0 })
}

fn small_int() -> impl Strategy<Value = f64> + Clone {
    (-5i32..=5).prop_map(f64::from)
}

/// Heaviest apex-to-`(row, col)` sum by enumeration.
fn best_to(rows: &[Vec<f64>], row: usize, col: usize) -> f64 {
    let mut best = f64::NEG_INFINITY;
    for mask in 0u32..(1u32 << row) {
        if mask.count_ones() as usize != col {
            continue;
        }
        let mut c = 0;
        let mut sum = rows[0][0];
        for (i, r) in rows.iter().enumerate().take(row + 1).skip(1) {
            if (mask >> (i - 1)) & 1 == 1 {
                c += 1;
            }
            sum += r[c];
        }
        best = best.max(sum);
    }
    best
}

fn check_invariants(rows: Vec<Vec<f64>>) -> Result<(), TestCaseError> {
    let n = rows.len();
    let grid = TriangleGrid::from_rows(rows.clone()).unwrap();
    let res = solve(&grid).unwrap();

    prop_assert_eq!(Some(res.score), brute_force_best(&rows));
    prop_assert_eq!(res.moves.len(), n - 1);
    prop_assert_eq!(res.visited_cells.len(), n);
    prop_assert_eq!((res.visited_cells[0].row, res.visited_cells[0].col), (0, 0));
    prop_assert_eq!(res.visited_cells[n - 1].col, res.end_column);

    let mut sum = 0.0;
    for c in &res.visited_cells {
        sum += rows[c.row][c.col];
    }
    prop_assert_eq!(sum, res.score);

    for (k, pair) in res.visited_cells.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        prop_assert_eq!(b.row, a.row + 1);
        let expected = match res.moves[k] {
            Move::Left => a.col,
            Move::Right => a.col + 1,
        };
        prop_assert_eq!(b.col, expected);
        // interior RIGHT only on a strictly heavier predecessor
        if b.col > 0 && b.col < b.row {
            let via_right = best_to(&rows, a.row, b.col - 1);
            let via_left = best_to(&rows, a.row, b.col);
            match res.moves[k] {
                Move::Right => prop_assert!(via_right > via_left),
                Move::Left => prop_assert!(via_left >= via_right),
            }
        }
    }

    // first maximal end column
    for c in 0..res.end_column {
        prop_assert!(best_to(&rows, n - 1, c) < res.score);
    }

    prop_assert_eq!(solve(&grid).unwrap(), res);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn binary_grids_match_enumeration(rows in triangle(12, binary())) {
        check_invariants(rows)?;
    }

    #[test]
    fn integer_grids_match_enumeration(rows in triangle(9, small_int())) {
        check_invariants(rows)?;
    }
}

#[test]
fn seeded_random_grids_match_enumeration() {
    for index in 0..32 {
        let cfg = RandomGridCfg {
            rows: 16,
            dist: WeightDist::Binary { p_one: 0.4 },
        };
        let grid = draw_grid(cfg, ReplayToken { seed: 2024, index }).unwrap();
        let res = solve(&grid).unwrap();
        assert_eq!(Some(res.score), brute_force_best(grid.as_rows()));
    }
}
