//! Shape and index error types.
//!
//! Every shape precondition in the workspace is checked through a
//! `try_*` function returning [`ShapeError`]. The panicking entry points
//! format the same error, so the message a caller sees on a fatal
//! violation is identical to the one a `try_*` caller can inspect.

use std::error::Error;
use std::fmt;

/// One of the two axes of a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The row axis (extent = row count).
    Rows,
    /// The column axis (extent = column count).
    Cols,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows => write!(f, "rows"),
            Self::Cols => write!(f, "cols"),
        }
    }
}

/// Violations of a shape precondition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A fixed axis was given an extent other than its compile-time one.
    FixedExtentMismatch {
        /// The offending axis.
        axis: Axis,
        /// The compile-time extent.
        expected: usize,
        /// The extent that was requested.
        got: usize,
    },
    /// An axis was given a zero extent.
    ZeroExtent {
        /// The offending axis.
        axis: Axis,
    },
    /// Two operands of an elementwise operation disagree on shape.
    ShapeMismatch {
        /// Shape of the destination (or left-hand) operand.
        expected: (usize, usize),
        /// Shape of the source (or right-hand) operand.
        got: (usize, usize),
    },
    /// `rows * cols` elements cannot be addressed: the count, or its size
    /// in bytes, does not fit in memory.
    TooLarge {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A flat element slice does not hold `rows * cols` elements.
    SliceLength {
        /// `rows * cols` for the requested shape.
        expected: usize,
        /// Length of the slice that was supplied.
        got: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedExtentMismatch {
                axis,
                expected,
                got,
            } => {
                write!(
                    f,
                    "fixed {axis} extent mismatch: expected {expected}, got {got}"
                )
            }
            Self::ZeroExtent { axis } => write!(f, "{axis} extent must be strictly positive"),
            Self::ShapeMismatch { expected, got } => {
                write!(
                    f,
                    "shape mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, got.0, got.1
                )
            }
            Self::TooLarge { rows, cols } => {
                write!(f, "{rows}x{cols} matrix exceeds the addressable size")
            }
            Self::SliceLength { expected, got } => {
                write!(
                    f,
                    "slice length mismatch: expected {expected} elements, got {got}"
                )
            }
        }
    }
}

impl Error for ShapeError {}

/// Errors from element access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// `(row, col)` lies outside `[0, rows) x [0, cols)`.
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Current row count.
        rows: usize,
        /// Current column count.
        cols: usize,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({row}, {col}) out of range for {rows}x{cols} matrix"
            ),
        }
    }
}

impl Error for IndexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_mismatch_message_names_axis() {
        let err = ShapeError::FixedExtentMismatch {
            axis: Axis::Cols,
            expected: 3,
            got: 4,
        };
        assert_eq!(
            err.to_string(),
            "fixed cols extent mismatch: expected 3, got 4"
        );
    }

    #[test]
    fn shape_mismatch_message_uses_rxc() {
        let err = ShapeError::ShapeMismatch {
            expected: (2, 3),
            got: (3, 2),
        };
        assert_eq!(err.to_string(), "shape mismatch: expected 2x3, got 3x2");
    }

    #[test]
    fn too_large_message() {
        let err = ShapeError::TooLarge { rows: 7, cols: 3 };
        assert_eq!(err.to_string(), "7x3 matrix exceeds the addressable size");
    }

    #[test]
    fn out_of_range_message() {
        let err = IndexError::OutOfRange {
            row: 5,
            col: 0,
            rows: 2,
            cols: 2,
        };
        assert_eq!(err.to_string(), "index (5, 0) out of range for 2x2 matrix");
    }
}
