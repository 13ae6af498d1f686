//! Shared test utilities for linalgebra integration tests.
//!
//! Builders for vectors, lines and planes from literal coordinates, plus
//! tolerance-based assertions on decimals and vectors.

#![allow(dead_code)]

use linalgebra::{Decimal, Hyperplane, Line, Plane, Vector};
use std::str::FromStr;

/// Default tolerance for approximate comparisons.
pub const TOL: &str = "0.000000001";

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn vector(coords: &[&str]) -> Vector {
    Vector::parse(coords).unwrap()
}

pub fn line(a: i64, b: i64, k: i64) -> Line {
    Line::new(Vector::new([a, b]).unwrap(), k).unwrap()
}

pub fn plane(a: i64, b: i64, c: i64, k: i64) -> Plane {
    Plane::new(Vector::new([a, b, c]).unwrap(), k).unwrap()
}

pub fn plane_str(normal: [&str; 3], k: &str) -> Plane {
    Plane::new(Vector::parse(normal).unwrap(), dec(k)).unwrap()
}

/// Assert two decimals are equal within `tol`.
pub fn assert_dec_eq(a: Decimal, b: Decimal, tol: &str) {
    let delta = (a - b).abs();
    assert!(
        delta < dec(tol),
        "decimal mismatch: {a} vs {b} (delta={delta}, tol={tol})"
    );
}

/// Assert two vectors have the same dimension and agree component-wise within `tol`.
pub fn assert_vec_eq(a: &Vector, b: &Vector, tol: &str) {
    assert_eq!(a.dimension(), b.dimension(), "dimension mismatch: {a} vs {b}");
    for (x, y) in a.iter().zip(b.iter()) {
        assert!(
            (*x - *y).abs() < dec(tol),
            "vector mismatch: {a} vs {b} (tol={tol})"
        );
    }
}

/// Assert the stored coefficients and constant are identical, not just coincident.
pub fn assert_same_components<const N: usize>(a: &Hyperplane<N>, b: &Hyperplane<N>) {
    assert!(a.same_coefficients(b), "coefficient mismatch: {a} vs {b}");
}
