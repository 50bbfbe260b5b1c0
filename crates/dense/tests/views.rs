//! Borrowed views used as expression operands.

use dense::prelude::*;
use dense_test_utils::sequential;

#[test]
fn view_is_an_assignable_source() {
    let a: Matrix4d = sequential(4, 4);
    let mut b = MatrixXd::new(1, 1);
    b.assign(&a.view());
    assert_eq!(b.as_slice(), a.as_slice());
}

#[test]
fn view_mut_compound_assignment_writes_through() {
    let mut a: MatrixXd = sequential(2, 3);
    let ones = MatrixXd::from_fn(2, 3, |_, _| 1.0);
    a.view_mut().add_assign_expr(&ones);
    assert_eq!(a[(1, 2)], 6.0);
}
