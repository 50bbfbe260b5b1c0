//! The element bound shared by every matrix and expression.

use std::fmt::Debug;

use num_traits::NumAssign;

/// A matrix element.
///
/// Any `Copy` numeric type with the four arithmetic operators (and their
/// assigning forms), `Zero`/`One` and `Default` qualifies. This covers
/// `i32`, `f32`, `f64` and `num_complex::Complex` over each of them.
pub trait Scalar: Copy + Debug + Default + PartialEq + NumAssign + 'static {}

impl<T> Scalar for T where T: Copy + Debug + Default + PartialEq + NumAssign + 'static {}
