use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use tripath::random::{draw_grid, RandomGridCfg, ReplayToken, WeightDist};
use tripath::solver::{brute_force_best, MAX_BRUTE_FORCE_ROWS};
use tripath::TriangleGrid;

mod provenance;

use provenance::{ensure_parent, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "tripath-cli")]
#[command(about = "Maximum-weight path through a triangular grid")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a grid given as a JSON array of rows, e.g. [[1],[0,1]]
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// Also write the result as JSON (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Cross-check the score by enumerating every path (small grids only)
        #[arg(long)]
        verify: bool,
    },
    /// Emit a random binary grid as JSON
    Random {
        #[arg(long, default_value_t = tripath::DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Probability that a cell is 1
        #[arg(long, default_value_t = 0.5)]
        p_one: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let mut stdout = std::io::stdout().lock();
    match cmd.action {
        Action::Solve { input, out, verify } => solve(&input, out.as_deref(), verify, &mut stdout),
        Action::Random {
            rows,
            seed,
            index,
            p_one,
            out,
        } => random(rows, ReplayToken { seed, index }, p_one, out.as_deref(), &mut stdout),
        Action::Report => report(&mut stdout),
    }
}

fn read_grid(path: &Path) -> Result<TriangleGrid> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let rows: Vec<Vec<f64>> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as a JSON array of rows", path.display()))?;
    TriangleGrid::from_rows(rows).with_context(|| format!("invalid grid in {}", path.display()))
}

fn solve(input: &Path, out: Option<&Path>, verify: bool, stdout: &mut impl Write) -> Result<()> {
    let grid = read_grid(input)?;
    tracing::info!(input = %input.display(), rows = grid.rows(), "solve");
    let res = tripath::solve(&grid)?;

    if verify {
        match brute_force_best(grid.as_rows()) {
            Some(best) if best == res.score => tracing::info!(best, "verified by enumeration"),
            Some(best) => bail!("score mismatch: dp={} enumeration={}", res.score, best),
            None => tracing::warn!(
                rows = grid.rows(),
                max = MAX_BRUTE_FORCE_ROWS,
                "grid too tall to verify by enumeration"
            ),
        }
    }

    writeln!(stdout, "{res}")?;

    if let Some(out) = out {
        ensure_parent(out)?;
        fs::write(out, serde_json::to_vec_pretty(&res)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let params = serde_json::json!({
            "input": input.to_string_lossy(),
            "rows": grid.rows(),
            "verify": verify
        });
        let prov = write_sidecar(out, Payload::new("solve", params))?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote result");
    }
    Ok(())
}

fn random(
    rows: usize,
    tok: ReplayToken,
    p_one: f64,
    out: Option<&Path>,
    stdout: &mut impl Write,
) -> Result<()> {
    let cfg = RandomGridCfg {
        rows,
        dist: WeightDist::Binary { p_one },
    };
    let grid = draw_grid(cfg, tok)?;
    tracing::info!(rows, seed = tok.seed, index = tok.index, p_one, "random");
    let json = serde_json::to_string(grid.as_rows())?;

    match out {
        Some(out) => {
            ensure_parent(out)?;
            fs::write(out, &json).with_context(|| format!("writing {}", out.display()))?;
            let params = serde_json::json!({
                "rows": rows,
                "seed": tok.seed,
                "index": tok.index,
                "p_one": p_one
            });
            write_sidecar(out, Payload::new("random", params))?;
        }
        None => writeln!(stdout, "{json}")?,
    }
    Ok(())
}

fn report(stdout: &mut impl Write) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": tripath::VERSION,
        "default_rows": tripath::DEFAULT_ROWS,
        "max_verify_rows": MAX_BRUTE_FORCE_ROWS
    });
    writeln!(stdout, "{}", serde_json::to_string_pretty(&obj)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn solve_prints_and_writes_result() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("grid.json");
        fs::write(&input, "[[1],[0,1],[0,0,1]]").unwrap();
        let out = dir.path().join("out").join("result.json");

        let mut buf = Vec::new();
        solve(&input, Some(&out), true, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "score: 3\npath: R -> R\n");

        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["score"], 3.0);
        assert_eq!(parsed["end_column"], 2);
        assert_eq!(parsed["moves"], serde_json::json!(["RIGHT", "RIGHT"]));
        assert!(dir.path().join("out").join("result.provenance.json").exists());
    }

    #[test]
    fn solve_rejects_bad_grids() {
        let dir = tempdir().unwrap();
        let ragged = dir.path().join("ragged.json");
        fs::write(&ragged, "[[1],[0]]").unwrap();
        assert!(solve(&ragged, None, false, &mut Vec::new()).is_err());

        let empty = dir.path().join("empty.json");
        fs::write(&empty, "[]").unwrap();
        assert!(solve(&empty, None, false, &mut Vec::new()).is_err());

        let missing = dir.path().join("missing.json");
        assert!(solve(&missing, None, false, &mut Vec::new()).is_err());
    }

    #[test]
    fn random_output_is_a_solvable_grid() {
        let dir = tempdir().unwrap();
        let tok = ReplayToken { seed: 5, index: 1 };
        let mut buf = Vec::new();
        random(6, tok, 0.5, None, &mut buf).unwrap();
        let path = dir.path().join("grid.json");
        fs::write(&path, &buf).unwrap();
        let grid = read_grid(&path).unwrap();
        assert_eq!(grid.rows(), 6);

        let out = dir.path().join("grid2.json");
        random(6, tok, 0.5, Some(&out), &mut Vec::new()).unwrap();
        assert_eq!(read_grid(&out).unwrap(), grid);
        assert!(dir.path().join("grid2.provenance.json").exists());

        assert!(random(0, tok, 0.5, None, &mut Vec::new()).is_err());
    }

    #[test]
    fn report_is_json() {
        let mut buf = Vec::new();
        report(&mut buf).unwrap();
        let parsed: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["default_rows"], 12);
    }
}
