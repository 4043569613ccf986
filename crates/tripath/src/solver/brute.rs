//! Exhaustive reference for small triangles.
//!
//! Enumerates all `2^(rows-1)` LEFT/RIGHT sequences; bit `k` of the mask is the
//! move out of row `k` (set = RIGHT).

/// Largest row count `brute_force_best` accepts.
pub const MAX_BRUTE_FORCE_ROWS: usize = 20;

/// Best path sum by enumeration, `None` if `rows` is empty, not triangular,
/// or taller than [`MAX_BRUTE_FORCE_ROWS`].
pub fn brute_force_best<R: AsRef<[f64]>>(rows: &[R]) -> Option<f64> {
    let n = rows.len();
    if n == 0 || n > MAX_BRUTE_FORCE_ROWS {
        return None;
    }
    if rows
        .iter()
        .enumerate()
        .any(|(i, r)| r.as_ref().len() != i + 1)
    {
        return None;
    }
    let apex = rows[0].as_ref()[0];
    let mut best = f64::NEG_INFINITY;
    for mask in 0u32..(1u32 << (n - 1)) {
        let mut col = 0;
        let mut sum = apex;
        for (i, row) in rows.iter().enumerate().skip(1) {
            if (mask >> (i - 1)) & 1 == 1 {
                col += 1;
            }
            sum += row.as_ref()[col];
        }
        best = best.max(sum);
    }
    Some(best)
}
