//! Benchmark workloads for the dense matrix workspace.
//!
//! - [`fill_and_sum`]: write every element, then read them all back
//! - [`reassign_cycle`]: assign between matrices of alternating shapes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dense::prelude::*;
use dense::storage::SelectStorage;

/// Write `r + c` into every element through the indexed accessor, then sum
/// them through [`Expr::read`].
pub fn fill_and_sum<R, C>(m: &mut Matrix<f64, R, C>) -> f64
where
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<f64>,
{
    let (rows, cols) = m.shape();
    for c in 0..cols {
        for r in 0..rows {
            m[(r, c)] = (r + c) as f64;
        }
    }
    let mut total = 0.0;
    for c in 0..cols {
        for r in 0..rows {
            total += m.read(r, c);
        }
    }
    total
}

/// Assign `small` and `large` into `dst` alternately, `rounds` times each.
///
/// After the first round `dst` has reached its high-water capacity, so the
/// remaining rounds never reallocate.
pub fn reassign_cycle(dst: &mut MatrixXd, small: &MatrixXd, large: &MatrixXd, rounds: usize) {
    for _ in 0..rounds {
        dst.assign(large);
        dst.assign(small);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_and_sum_matches_closed_form() {
        let mut m = Matrix3d::default();
        // sum over r, c in 0..3 of (r + c) = 2 * 3 * 3 = 18
        assert_eq!(fill_and_sum(&mut m), 18.0);
    }

    #[test]
    fn reassign_cycle_stops_reallocating() {
        let small = MatrixXd::zeros(2, 2);
        let large = MatrixXd::zeros(16, 16);
        let mut dst = MatrixXd::new(1, 1);
        reassign_cycle(&mut dst, &small, &large, 1);
        let ptr = dst.as_ptr();
        reassign_cycle(&mut dst, &small, &large, 10);
        assert_eq!(dst.as_ptr(), ptr);
        assert_eq!(dst.shape(), (2, 2));
    }
}
