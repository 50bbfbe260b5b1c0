//! Shape aliases.
//!
//! For each scalar kind and each of the shapes 2x2, 3x3, 4x4 and dynamic
//! (`X`) there is a square matrix alias, a column-vector alias and a
//! row-vector alias. Suffixes: `i` = `i32`, `f` = `f32`, `d` = `f64`, and
//! with the `complex` feature `ci`, `cf`, `cd` for `Complex` over each.

use dense_core::{Dyn, U1, U2, U3, U4};
use paste::paste;

use crate::Matrix;

#[cfg(feature = "complex")]
use num_complex::Complex;

macro_rules! alias {
    ($name:ident, $ty:ty, $doc:expr) => {
        #[doc = $doc]
        pub type $name = $ty;
    };
}

macro_rules! make_aliases_for_size {
    ($scalar:ty, $suffix:ident, $label:literal, $size:tt, $dim:ty, $size_label:literal) => {
        paste! {
            alias!(
                [<Matrix $size $suffix>],
                Matrix<$scalar, $dim, $dim>,
                concat!($size_label, " matrix of `", $label, "`.")
            );
            alias!(
                [<Vector $size $suffix>],
                Matrix<$scalar, $dim, U1>,
                concat!($size_label, " column vector of `", $label, "`.")
            );
            alias!(
                [<RowVector $size $suffix>],
                Matrix<$scalar, U1, $dim>,
                concat!($size_label, " row vector of `", $label, "`.")
            );
        }
    };
}

macro_rules! make_aliases {
    ($scalar:ty, $suffix:ident, $label:literal) => {
        make_aliases_for_size!($scalar, $suffix, $label, 2, U2, "2x2");
        make_aliases_for_size!($scalar, $suffix, $label, 3, U3, "3x3");
        make_aliases_for_size!($scalar, $suffix, $label, 4, U4, "4x4");
        make_aliases_for_size!($scalar, $suffix, $label, X, Dyn, "Dynamic-size");
    };
}

make_aliases!(i32, i, "i32");
make_aliases!(f32, f, "f32");
make_aliases!(f64, d, "f64");
#[cfg(feature = "complex")]
make_aliases!(Complex<i32>, ci, "Complex<i32>");
#[cfg(feature = "complex")]
make_aliases!(Complex<f32>, cf, "Complex<f32>");
#[cfg(feature = "complex")]
make_aliases!(Complex<f64>, cd, "Complex<f64>");
