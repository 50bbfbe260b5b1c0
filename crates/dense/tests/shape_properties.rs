//! Shape and resize behaviour of `Matrix` across all four storage
//! strategies, exercised through the public facade.

use dense::prelude::*;
use dense_test_utils::{init_logging, sequential, sequential_i32, CountingExpr, MockExpr};

#[test]
fn construct_then_extents_for_each_category() {
    assert_eq!(Matrix::<f32, U4, U4>::new(4, 4).shape(), (4, 4));
    assert_eq!(Matrix::<f32, U3, Dyn>::new(3, 11).shape(), (3, 11));
    assert_eq!(Matrix::<f32, Dyn, U3>::new(11, 3).shape(), (11, 3));
    assert_eq!(Matrix::<f32, Dyn, Dyn>::new(6, 9).shape(), (6, 9));
}

#[test]
fn fixed_extent_mismatch_is_reported_for_each_category() {
    let fixed = Matrix::<f32, U4, U4>::try_new(4, 3).unwrap_err();
    assert_eq!(
        fixed,
        ShapeError::FixedExtentMismatch {
            axis: dense::Axis::Cols,
            expected: 4,
            got: 3,
        }
    );
    assert!(Matrix::<f32, U3, Dyn>::try_new(2, 11).is_err());
    assert!(Matrix::<f32, Dyn, U3>::try_new(11, 2).is_err());
    assert_eq!(
        Matrix::<f32, Dyn, Dyn>::try_new(0, 9).unwrap_err(),
        ShapeError::ZeroExtent {
            axis: dense::Axis::Rows,
        }
    );
}

#[test]
#[should_panic(expected = "fixed cols extent mismatch")]
fn resizing_a_fixed_axis_is_fatal() {
    let mut v = VectorXd::new(3, 1);
    v.resize(3, 2);
}

#[test]
fn assignment_resizes_two_by_three_into_one_by_one() {
    let a: MatrixXi = sequential_i32(2, 3);
    let mut b = MatrixXi::new(1, 1);
    b.assign(&a);
    assert_eq!(b.shape(), (2, 3));
    for c in 0..3 {
        for r in 0..2 {
            assert_eq!(b[(r, c)], a[(r, c)]);
        }
    }
}

#[test]
fn dynamic_two_by_two_regrow_to_three_by_two() {
    init_logging();
    let mut m = MatrixXd::new(2, 2);
    m[(0, 0)] = 1.0;
    m[(1, 0)] = 2.0;
    m[(0, 1)] = 3.0;
    m[(1, 1)] = 4.0;
    m.resize(3, 2);
    assert_eq!((m.rows(), m.cols()), (3, 2));
    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(1, 0)], 2.0);
}

#[test]
fn fixed_three_by_three_assignment_copies_without_reallocating() {
    let b: Matrix3d = sequential(3, 3);
    let mut a = Matrix3d::zeros(3, 3);
    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();
    a.assign(&b);
    assert_eq!(a.as_ptr(), a_ptr);
    assert_eq!(b.as_ptr(), b_ptr);
    assert_eq!(a.as_slice(), b.as_slice());
    assert_eq!(a.as_slice().len(), 9);
}

#[test]
fn one_dynamic_axis_capacity_is_monotonic() {
    init_logging();
    let mut v = VectorXf::new(10, 1);
    let ptr = v.as_ptr();
    v.resize(3, 1);
    v.resize(10, 1);
    assert_eq!(v.as_ptr(), ptr, "down-then-up must reuse the allocation");
    v.resize(11, 1);
    assert_ne!(v.as_ptr(), ptr, "growth past the high-water mark reallocates");

    let mut row = RowVectorXd::new(1, 4);
    let ptr = row.as_ptr();
    row.resize(1, 2);
    row.resize(1, 4);
    assert_eq!(row.as_ptr(), ptr);
    row.resize(1, 5);
    assert_ne!(row.as_ptr(), ptr);
}

#[test]
fn construct_from_non_matrix_expression() {
    let src = MockExpr::new(3, 2, |r, c| (10 * r + c) as f32);
    let m = Matrix::<f32, Dyn, U2>::from_expr(&src);
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m[(2, 1)], 21.0);
}

#[test]
fn assignment_reads_each_source_element_once() {
    let src = CountingExpr::new(MockExpr::new(4, 5, |r, c| (r * c) as f64));
    let mut dst = MatrixXd::new(1, 1);
    dst.assign(&src);
    assert_eq!(src.reads(), 20);
    assert_eq!(dst[(3, 4)], 12.0);
}

#[test]
fn rejected_assignment_reads_nothing_and_keeps_shape() {
    let src = CountingExpr::new(MockExpr::new(2, 2, |_, _| 1.0));
    let mut dst = Matrix3d::zeros(3, 3);
    assert!(dst.try_assign(&src).is_err());
    assert_eq!(src.reads(), 0);
    assert_eq!(dst.shape(), (3, 3));
}

#[test]
fn compound_assignment_from_lazy_expression() {
    let a: Matrix2d = sequential(2, 2);
    let b = Matrix2d::identity(2, 2);
    let mut acc = MatrixXd::zeros(2, 2);
    acc += &(&a).difference(&b);
    acc -= &(&b).negated();
    acc *= 2.0;
    acc /= 2.0;
    assert_eq!(acc, MatrixXd::from_expr(&a));
}

#[test]
#[should_panic(expected = "shape mismatch")]
fn compound_assignment_does_not_resize() {
    let mut acc = MatrixXd::zeros(2, 2);
    let other = MatrixXd::zeros(3, 3);
    acc += &other;
}

#[cfg(feature = "complex")]
#[test]
fn complex_scalars_flow_through() {
    let mut m = MatrixXcf::zeros(2, 2);
    m[(0, 1)] = Complex::new(1.0, 2.0);
    let mut n = Matrix2cf::default();
    n.assign(&m);
    n *= Complex::new(0.0, 1.0);
    assert_eq!(n[(0, 1)], Complex::new(-2.0, 1.0));
}

#[test]
fn overflowing_shape_is_an_error_not_a_wrapped_extent() {
    let huge = usize::MAX / 2 + 1;
    let mut m = MatrixXd::new(2, 2);
    m[(1, 1)] = 5.0;
    assert_eq!(
        m.try_resize(huge, 2),
        Err(ShapeError::TooLarge {
            rows: huge,
            cols: 2,
        })
    );
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.as_slice().len(), 4);
    assert_eq!(m.get(1, 1), Some(&5.0));

    assert!(Matrix::<f64, Dyn, U2>::try_new(huge, 2).is_err());
    assert!(Matrix::<f64, U2, Dyn>::try_new(2, huge).is_err());
}

#[test]
fn overflowing_source_shape_is_rejected_before_any_read() {
    let huge = usize::MAX / 2 + 1;
    let src = CountingExpr::new(MockExpr::new(huge, 2, |_, _| 0.0));
    let mut dst = MatrixXd::new(3, 3);
    assert!(dst.try_assign(&src).is_err());
    assert_eq!(src.reads(), 0);
    assert_eq!(dst.shape(), (3, 3));
}

#[cfg(any(debug_assertions, feature = "bounds-check"))]
#[test]
#[should_panic(expected = "index (2, 0) out of range for 2x2 matrix")]
fn out_of_range_write_panics_when_checked() {
    let mut m = MatrixXd::zeros(2, 2);
    *m.write(2, 0) = 1.0;
}

#[cfg(any(debug_assertions, feature = "bounds-check"))]
#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_index_mut_panics_when_checked() {
    let mut m = Matrix3f::zeros(3, 3);
    m[(0, 3)] = 1.0;
}
