//! Draw a random binary triangle, solve it, and print the grid with the path.
//!
//! Usage: cargo run -p tripath --example random_path -- [rows] [seed]

use tripath::random::{draw_grid, RandomGridCfg, ReplayToken};
use tripath::solve;

fn main() {
    let mut args = std::env::args().skip(1);
    let rows = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(tripath::DEFAULT_ROWS);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let cfg = RandomGridCfg {
        rows,
        ..RandomGridCfg::default()
    };
    let grid = draw_grid(cfg, ReplayToken { seed, index: 0 }).expect("rows must be positive");
    let res = solve(&grid).expect("grid is non-empty");

    for i in 0..grid.rows() {
        let pad = " ".repeat(grid.rows() - 1 - i);
        let line: Vec<&str> = (0..=i)
            .map(|j| match (res.contains(i, j), grid.weight(i, j) == Ok(1.0)) {
                (true, true) => "@",
                (true, false) => "o",
                (false, true) => "*",
                (false, false) => ".",
            })
            .collect();
        println!("{pad}{}", line.join(" "));
    }
    println!("{res}");
}
