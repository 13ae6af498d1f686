//! Lines and planes in standard form.
//!
//! A [`Hyperplane<N>`] is the set of points `x` in N dimensions satisfying
//! `n . x = k`, where `n` is the normal vector and `k` the constant term.
//! [`Line`] and [`Plane`] are the 2D and 3D instantiations; they share the
//! predicate and basepoint logic, and lines add point-on-line and
//! intersection solving.
//!
//! Equality between hyperplanes is geometric: two hyperplanes are equal when
//! they are coincident, whatever their stored coefficients. Use
//! [`Hyperplane::same_coefficients`] to compare the stored values.
//!
//! Constant terms obey the same range limit as coordinates. A hyperplane
//! whose basepoint would fall outside that range cannot be built.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::{Intersection, Vector};
use crate::config::{check_coordinate, in_range, Tolerances};
use crate::error::{LinAlgError, Result};

/// Affine hyperplane `n . x = k` in `N` dimensions
#[derive(Debug, Clone)]
pub struct Hyperplane<const N: usize> {
    normal_vector: Vector,
    constant_term: Decimal,
    basepoint: Option<Vector>,
}

/// A line in the plane, `a x_1 + b x_2 = k`
pub type Line = Hyperplane<2>;

/// A plane in space, `a x_1 + b x_2 + c x_3 = k`
pub type Plane = Hyperplane<3>;

impl<const N: usize> Hyperplane<N> {
    /// Number of coordinates of the normal vector
    pub const DIMENSION: usize = N;

    /// Create a hyperplane from its normal vector and constant term.
    ///
    /// Fails with [`LinAlgError::DimensionMismatch`] if the normal vector does
    /// not have exactly `N` coordinates, with
    /// [`LinAlgError::InvalidCoordinate`] if the constant term is out of range
    /// and with [`LinAlgError::Overflow`] if the basepoint is.
    pub fn new(normal_vector: Vector, constant_term: impl Into<Decimal>) -> Result<Self> {
        if normal_vector.dimension() != N {
            return Err(LinAlgError::DimensionMismatch {
                expected: N,
                actual: normal_vector.dimension(),
            });
        }
        let constant_term = constant_term.into();
        check_coordinate(&constant_term)?;
        Self::from_parts(normal_vector, constant_term)
    }

    fn from_parts(normal_vector: Vector, constant_term: Decimal) -> Result<Self> {
        let basepoint = match basepoint_of(&normal_vector, constant_term) {
            Ok(point) => Some(point),
            Err(LinAlgError::DegenerateLine) => {
                debug!(normal = %normal_vector, "hyperplane has no basepoint");
                None
            }
            Err(err) => return Err(err),
        };
        Ok(Self {
            normal_vector,
            constant_term,
            basepoint,
        })
    }

    /// The normal vector `n`
    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    /// The constant term `k`
    pub fn constant_term(&self) -> Decimal {
        self.constant_term
    }

    /// A point on the hyperplane, absent when the normal vector is zero
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// Same as [`Self::DIMENSION`]
    pub fn dimension(&self) -> usize {
        N
    }

    /// Whether the normal vectors are parallel
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.normal_vector
            .parallel_unchecked(&other.normal_vector, &Tolerances::DEFAULT)
    }

    /// Whether both describe the same set of points
    pub fn is_coincident_to(&self, other: &Self) -> bool {
        if !self.is_parallel_to(other) {
            return false;
        }

        match (&self.basepoint, &other.basepoint) {
            (Some(p), Some(q)) => match self.normal_vector.normalized() {
                Ok(unit_normal) => {
                    // offset of q from p along the unit normal
                    let offset: Decimal = p
                        .iter()
                        .zip(q.iter())
                        .zip(unit_normal.iter())
                        .map(|((&a, &b), &n)| (a - b) * n)
                        .sum();
                    offset.abs() < Tolerances::DEFAULT.orthogonal
                }
                Err(_) => false,
            },
            (None, None) => {
                // 0 = k on both sides: compare the constants
                let same = (self.constant_term - other.constant_term).abs()
                    < Tolerances::DEFAULT.zero;
                trace!(same, "comparing degenerate hyperplanes");
                same
            }
            _ => false,
        }
    }

    /// Whether the stored normal vector and constant term are equal
    pub fn same_coefficients(&self, other: &Self) -> bool {
        self.normal_vector == other.normal_vector && self.constant_term == other.constant_term
    }

    /// Multiply the normal vector and the constant term by `k`
    pub fn scaled_by(&self, k: impl Into<Decimal>) -> Result<Self> {
        let k = k.into();
        let constant_term = self
            .constant_term
            .checked_mul(k)
            .filter(in_range)
            .ok_or(LinAlgError::Overflow("scaling"))?;
        Self::from_parts(self.normal_vector.scale(k)?, constant_term)
    }

    /// Sum of the two equations
    pub fn add(&self, other: &Self) -> Result<Self> {
        let constant_term = self
            .constant_term
            .checked_add(other.constant_term)
            .filter(in_range)
            .ok_or(LinAlgError::Overflow("adding"))?;
        Self::from_parts(self.normal_vector.add(&other.normal_vector)?, constant_term)
    }
}

/// Set the first nonzero coordinate so the equation holds, zero the rest
fn basepoint_of(normal_vector: &Vector, constant_term: Decimal) -> Result<Vector> {
    let index = normal_vector.first_nonzero_index()?;
    let mut coordinates = vec![Some(Decimal::ZERO); normal_vector.dimension()];
    coordinates[index] = constant_term.checked_div(normal_vector[index]);
    Vector::from_computed(coordinates, "locating the basepoint")
}

impl<const N: usize> Default for Hyperplane<N> {
    /// The degenerate `0 = 0`, with no basepoint
    fn default() -> Self {
        Self {
            normal_vector: Vector::zeros(N),
            constant_term: Decimal::ZERO,
            basepoint: None,
        }
    }
}

impl<const N: usize> PartialEq for Hyperplane<N> {
    fn eq(&self, other: &Self) -> bool {
        self.is_coincident_to(other)
    }
}

impl Line {
    /// A point on the line: on the x-axis unless the line is horizontal
    pub fn point_on_line(&self) -> Result<Vector> {
        let (a, b) = (self.normal_vector[0], self.normal_vector[1]);
        let point = if !a.is_zero() {
            [self.constant_term.checked_div(a), Some(Decimal::ZERO)]
        } else if !b.is_zero() {
            [Some(Decimal::ZERO), self.constant_term.checked_div(b)]
        } else {
            return Err(LinAlgError::DegenerateLine);
        };
        Vector::from_computed(point, "locating a point on the line")
    }

    /// Intersect two lines, solving the 2x2 system with Cramer's rule
    ///
    /// Fails with [`LinAlgError::Overflow`] only when the intersection point
    /// lies outside the coordinate range.
    pub fn intersection_with(&self, other: &Line) -> Result<Intersection> {
        if self.is_coincident_to(other) {
            trace!(line = %self, "lines are coincident");
            return Ok(Intersection::Infinite(self.clone()));
        }
        if self.is_parallel_to(other) {
            trace!(line = %self, other = %other, "lines are parallel");
            return Ok(Intersection::Empty);
        }

        let (a, b) = (self.normal_vector[0], self.normal_vector[1]);
        let (c, d) = (other.normal_vector[0], other.normal_vector[1]);
        let (k1, k2) = (self.constant_term, other.constant_term);
        // products of bounded coefficients cannot overflow
        let denominator = a * d - b * c;
        if denominator.is_zero() {
            return Ok(Intersection::Empty);
        }

        let x = (d * k1 - b * k2).checked_div(denominator);
        let y = (a * k2 - c * k1).checked_div(denominator);
        Vector::from_computed([x, y], "intersecting").map(Intersection::Point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(a: i32, b: i32, k: i32) -> Line {
        Line::new(Vector::new([a, b]).unwrap(), k).unwrap()
    }

    fn plane(a: i32, b: i32, c: i32, k: i32) -> Plane {
        Plane::new(Vector::new([a, b, c]).unwrap(), k).unwrap()
    }

    #[test]
    fn test_wrong_normal_dimension_rejected() {
        let err = Line::new(Vector::new([1, 2, 3]).unwrap(), 1).unwrap_err();
        assert_eq!(
            err,
            LinAlgError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
        assert!(Plane::new(Vector::new([1, 2]).unwrap(), 1).is_err());
    }

    #[test]
    fn test_default_is_degenerate() {
        let p = Plane::default();
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.constant_term(), Decimal::ZERO);
        assert!(p.normal_vector().is_zero());
        assert!(p.basepoint().is_none());
    }

    #[test]
    fn test_basepoint() {
        assert_eq!(line(2, 3, 6).basepoint(), Some(&Vector::new([3, 0]).unwrap()));
        assert_eq!(line(0, 4, 6).basepoint(), Some(&Vector::parse(["0", "1.5"]).unwrap()));
        assert_eq!(plane(0, 0, 2, 8).basepoint(), Some(&Vector::new([0, 0, 4]).unwrap()));
    }

    #[test]
    fn test_basepoint_skips_near_zero_coefficients() {
        let l = Line::new(Vector::parse(["0.00000000001", "2"]).unwrap(), 4).unwrap();
        assert_eq!(l.basepoint(), Some(&Vector::new([0, 2]).unwrap()));
    }

    #[test]
    fn test_parallel_lines() {
        assert!(line(2, 3, 6).is_parallel_to(&line(2, 3, 12)));
        assert!(line(2, 3, 12).is_parallel_to(&line(2, 3, 6)));
        assert!(!line(2, 3, 6).is_parallel_to(&line(3, 2, 6)));
        assert!(!line(3, 2, 6).is_parallel_to(&line(2, 3, 6)));
    }

    #[test]
    fn test_coincident_lines() {
        let l1 = line(1, 1, 1);
        let l2 = line(-3, -3, -3);
        assert!(l1.is_coincident_to(&l2));
        assert!(l2.is_coincident_to(&l1));
        assert!(l1.is_coincident_to(&l1));
        assert!(!line(1, 1, 1).is_coincident_to(&line(1, 1, 2)));
    }

    #[test]
    fn test_equality_is_coincidence() {
        assert_eq!(line(1, 1, 1), line(-3, -3, -3));
        assert!(!line(1, 1, 1).same_coefficients(&line(-3, -3, -3)));
        assert_ne!(line(1, 1, 1), line(1, 1, 2));
    }

    #[test]
    fn test_degenerate_coincidence() {
        assert_eq!(Line::default(), Line::default());
        assert_ne!(Line::default(), line(0, 0, 1));
        assert_ne!(Line::default(), line(1, 1, 1));
        assert_ne!(line(1, 1, 1), Line::default());
    }

    #[test]
    fn test_point_on_line() {
        assert_eq!(line(1, 1, 1).point_on_line().unwrap(), Vector::new([1, 0]).unwrap());
        assert_eq!(line(0, 1, 2).point_on_line().unwrap(), Vector::new([0, 2]).unwrap());
        assert_eq!(line(1, 0, 3).point_on_line().unwrap(), Vector::new([3, 0]).unwrap());
        assert_eq!(Line::default().point_on_line(), Err(LinAlgError::DegenerateLine));
    }

    #[test]
    fn test_intersection_point() {
        let result = line(1, 1, 3).intersection_with(&line(1, -1, 1)).unwrap();
        assert_eq!(result.point(), Some(&Vector::new([2, 1]).unwrap()));
    }

    #[test]
    fn test_intersection_of_parallel_lines_is_empty() {
        assert!(line(2, 3, 6).intersection_with(&line(2, 3, 12)).unwrap().is_empty());
    }

    #[test]
    fn test_intersection_of_coincident_lines_is_infinite() {
        let l1 = line(1, 1, 1);
        let l2 = line(-3, -3, -3);
        match l1.intersection_with(&l2).unwrap() {
            Intersection::Infinite(l) => {
                assert_eq!(l, l1);
                assert_eq!(l, l2);
            }
            other => panic!("expected infinite intersections, got {other:?}"),
        }
    }

    #[test]
    fn test_intersection_course_exercise() {
        let l1 = Line::new(Vector::parse(["7.204", "3.182"]).unwrap(), d("8.68")).unwrap();
        let l2 = Line::new(Vector::parse(["8.172", "4.114"]).unwrap(), d("9.883")).unwrap();
        let point = l1.intersection_with(&l2).unwrap();
        let point = point.point().unwrap();
        assert!((point[0] - d("1.173")).abs() < d("0.001"));
        assert!((point[1] - d("0.073")).abs() < d("0.001"));
    }

    #[test]
    fn test_scaled_and_added() {
        let p = plane(1, 1, -1, 3).scaled_by(-1).unwrap();
        assert!(p.same_coefficients(&plane(-1, -1, 1, -3)));

        let sum = plane(0, 1, 0, 2).add(&plane(10, 10, 10, 10)).unwrap();
        assert!(sum.same_coefficients(&plane(10, 11, 10, 12)));
    }

    #[test]
    fn test_planes() {
        assert!(plane(2, 3, 4, 6).is_parallel_to(&plane(2, 3, 4, 12)));
        assert!(!plane(2, 3, 4, 6).is_parallel_to(&plane(3, 2, 1, 6)));
        assert!(plane(1, 1, 1, 1).is_coincident_to(&plane(-3, -3, -3, -3)));
        assert!(!plane(1, 1, 1, 1).is_coincident_to(&plane(1, 1, 1, 2)));
        assert_eq!(plane(1, 1, 1, 1), plane(-3, -3, -3, -3));
    }

    fn big_line(a: Decimal, b: Decimal, k: Decimal) -> Line {
        Line::new(Vector::new([a, b]).unwrap(), k).unwrap()
    }

    #[test]
    fn test_out_of_range_inputs_rejected() {
        assert!(matches!(
            Line::new(Vector::new([1, 1]).unwrap(), Decimal::from(10_i64.pow(15))),
            Err(LinAlgError::InvalidCoordinate(_))
        ));
        assert_eq!(
            Line::new(Vector::parse(["0.000001", "1"]).unwrap(), crate::MAX_COORDINATE).unwrap_err(),
            LinAlgError::Overflow("locating the basepoint")
        );
    }

    #[test]
    fn test_large_coefficient_lines() {
        let big = crate::MAX_COORDINATE;
        let l1 = big_line(big, Decimal::ONE, Decimal::ONE);
        let l2 = big_line(Decimal::ONE, big, Decimal::ONE);
        assert!(!l1.is_parallel_to(&l2));
        assert_ne!(l1, l2);

        let point = l1.intersection_with(&l2).unwrap();
        let point = point.point().unwrap();
        assert_eq!(point[0], point[1]);
        assert!(point[0] > Decimal::ZERO && point[0] < d("0.0000000000001"));

        assert_eq!(big_line(big, big, big), line(1, 1, 1));
        assert!(big_line(big, big, big)
            .intersection_with(&line(2, 2, 2))
            .unwrap()
            .is_infinite());
    }

    #[test]
    fn test_out_of_range_results_report_overflow() {
        let big = crate::MAX_COORDINATE;
        let l1 = big_line(Decimal::ONE, Decimal::ZERO, big);
        let l2 = big_line(Decimal::ONE, d("0.001"), -big);
        assert!(matches!(
            l1.intersection_with(&l2),
            Err(LinAlgError::Overflow("intersecting"))
        ));

        assert_eq!(
            line(1, 1, 1).scaled_by(10_i64.pow(15)).unwrap_err(),
            LinAlgError::Overflow("scaling")
        );
        let wide = big_line(big, Decimal::ONE, big);
        assert_eq!(wide.add(&wide).unwrap_err(), LinAlgError::Overflow("adding"));
    }
}
