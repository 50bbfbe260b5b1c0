//! Deterministic matrix fixtures.

use dense::storage::SelectStorage;
use dense::Matrix;
use dense_core::Dim;

/// A `rows x cols` matrix whose elements are their own column-major
/// offsets: `m[(r, c)] == (r + c * rows) as f64`.
pub fn sequential<R, C>(rows: usize, cols: usize) -> Matrix<f64, R, C>
where
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<f64>,
{
    Matrix::from_fn(rows, cols, |r, c| (r + c * rows) as f64)
}

/// Integer counterpart of [`sequential`].
pub fn sequential_i32<R, C>(rows: usize, cols: usize) -> Matrix<i32, R, C>
where
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<i32>,
{
    Matrix::from_fn(rows, cols, |r, c| (r + c * rows) as i32)
}

/// Install an `env_logger` that writes to the test harness.
///
/// Safe to call from every test; only the first call installs a logger.
/// Set `RUST_LOG=dense_storage=trace` to see reallocation traces.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
