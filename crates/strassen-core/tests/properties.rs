//! Property-based tests for the multiplication algorithms.
//!
//! Most strategies draw small entries so random products stay in range;
//! the identity property uses the full 32-bit range.

use proptest::prelude::*;

use strassen_core::arith::{add, subtract};
use strassen_core::cancel::CancellationToken;
use strassen_core::direct::multiply_direct;
use strassen_core::options::Options;
use strassen_core::padding::next_power_of_two;
use strassen_core::{strassen, tracking, Element, Matrix};

fn square(n: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-100i32..=100, n * n)
        .prop_map(move |data| Matrix::from_vec(n, n, data).unwrap())
}

fn pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..=17).prop_flat_map(|n| (square(n), square(n)))
}

fn compute(a: &Matrix, b: &Matrix, threshold: usize) -> Matrix {
    let cancel = CancellationToken::new();
    strassen::multiply(a, b, &Options { threshold }, &cancel).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    /// Strassen and the triple loop agree for random sizes and thresholds.
    #[test]
    fn strassen_equals_direct((a, b) in pair(), threshold in 1usize..=4) {
        let expected = multiply_direct(&a, &b).unwrap();
        prop_assert_eq!(compute(&a, &b, threshold), expected);
    }

    /// A * I == A and I * A == A.
    #[test]
    fn identity_is_neutral(a in (1usize..=17).prop_flat_map(square)) {
        let id = Matrix::identity(a.rows()).unwrap();
        prop_assert_eq!(&compute(&a, &id, 2), &a);
        prop_assert_eq!(&compute(&id, &a, 2), &a);
    }

    /// The identity holds for any entries, including `i32::MIN` and `MAX`.
    #[test]
    fn identity_is_neutral_full_range(
        a in (1usize..=9).prop_flat_map(|n| {
            prop::collection::vec(any::<Element>(), n * n)
                .prop_map(move |data| Matrix::from_vec(n, n, data).unwrap())
        }),
        threshold in 1usize..=4,
    ) {
        let id = Matrix::identity(a.rows()).unwrap();
        prop_assert_eq!(&compute(&a, &id, threshold), &a);
        prop_assert_eq!(&compute(&id, &a, threshold), &a);
    }

    /// A * 0 == 0 with the original shape.
    #[test]
    fn zero_annihilates(a in (1usize..=17).prop_flat_map(square)) {
        let zero = Matrix::square(a.rows()).unwrap();
        let c = compute(&a, &zero, 2);
        prop_assert_eq!(c.shape(), a.shape());
        prop_assert!(c.as_slice().iter().all(|&v| v == 0));
    }

    /// (A + B) - B == A.
    #[test]
    fn add_then_subtract_recovers((a, b) in pair()) {
        let sum = add(&a, &b).unwrap();
        prop_assert_eq!(subtract(&sum, &b).unwrap(), a);
    }

    /// The padded side is the smallest power of two not below n.
    #[test]
    fn next_power_of_two_is_tight(n in 1usize..100_000) {
        let p = next_power_of_two(n).unwrap();
        prop_assert!(p.is_power_of_two());
        prop_assert!(p >= n);
        prop_assert!(p / 2 < n);
    }

    /// Only the returned product outlives a top-level call.
    #[test]
    fn no_intermediates_leak((a, b) in pair()) {
        let before = tracking::snapshot().live;
        let c = compute(&a, &b, 2);
        prop_assert_eq!(tracking::snapshot().live, before + 1);
        drop(c);
        prop_assert_eq!(tracking::snapshot().live, before);
    }
}

#[test]
fn fixed_sizes_match_direct() {
    for n in [1usize, 2, 3, 4, 5, 8, 16, 17] {
        let a: Vec<Element> = (0..n * n)
            .map(|i| Element::try_from(i % 11).unwrap() - 5)
            .collect();
        let b: Vec<Element> = (0..n * n)
            .map(|i| Element::try_from((i * 7) % 13).unwrap() - 6)
            .collect();
        let a = Matrix::from_vec(n, n, a).unwrap();
        let b = Matrix::from_vec(n, n, b).unwrap();
        assert_eq!(
            compute(&a, &b, 2),
            multiply_direct(&a, &b).unwrap(),
            "n={n}"
        );
    }
}

#[test]
fn recursion_allocates_and_releases() {
    let a = Matrix::identity(16).unwrap();
    tracking::reset();
    let c = compute(&a, &a, 2);
    let stats = tracking::snapshot();
    assert!(stats.allocated > 1);
    assert!(stats.peak > stats.live);
    assert_eq!(c, a);
}
