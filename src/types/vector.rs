//! Vector type for geometric operations
//!
//! Coordinates are stored as [`Decimal`] so that the coincidence and
//! parallelism checks made by lines and planes are not thrown off by binary
//! floating point drift. Angles are reported as `f64`.
//!
//! Every stored coordinate lies within [`MAX_COORDINATE`](crate::MAX_COORDINATE) in absolute value.
//! Constructors reject larger inputs with [`LinAlgError::InvalidCoordinate`],
//! and operations whose result would leave that range fail with
//! [`LinAlgError::Overflow`].

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Index, Mul};
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};

use tracing::debug;

use crate::config::{check_coordinate, in_range, Tolerances};
use crate::error::{LinAlgError, Result};

/// Unit in which [`Vector::angle_between`] reports its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// Fixed-length vector of decimal coordinates
///
/// Equality is exact, component-wise equality. The dimension is set at
/// construction and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector {
    coordinates: Vec<Decimal>,
}

impl Vector {
    /// Create a vector from anything convertible to [`Decimal`] (integers, decimals)
    pub fn new<I, T>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Decimal>,
    {
        Self::from_decimals(coordinates.into_iter().map(Into::into).collect())
    }

    /// Create a vector from decimal strings such as `"4.046"` or `"1e-9"`
    pub fn parse<I, S>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|s| parse_decimal(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_decimals(coordinates)
    }

    /// Create a vector from floating point coordinates
    ///
    /// Non-finite values are rejected.
    pub fn from_f64s(coordinates: &[f64]) -> Result<Self> {
        let coordinates = coordinates
            .iter()
            .map(|&x| {
                Decimal::from_f64(x)
                    .ok_or_else(|| LinAlgError::InvalidCoordinate(x.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_decimals(coordinates)
    }

    fn from_decimals(coordinates: Vec<Decimal>) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(LinAlgError::EmptyVector);
        }
        coordinates.iter().try_for_each(check_coordinate)?;
        Ok(Vector { coordinates })
    }

    /// Zero vector of the given dimension; callers guarantee `dimension > 0`.
    pub(crate) fn zeros(dimension: usize) -> Self {
        Vector {
            coordinates: vec![Decimal::ZERO; dimension],
        }
    }

    /// Collect computed coordinates, failing with `Overflow(op)` when one is
    /// missing or out of range. Callers guarantee at least one coordinate.
    pub(crate) fn from_computed<I>(coordinates: I, op: &'static str) -> Result<Self>
    where
        I: IntoIterator<Item = Option<Decimal>>,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|x| x.filter(in_range).ok_or(LinAlgError::Overflow(op)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Vector { coordinates })
    }

    /// Number of coordinates
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Borrow the coordinates
    pub fn coordinates(&self) -> &[Decimal] {
        &self.coordinates
    }

    /// Coordinate at `index`, if any
    pub fn get(&self, index: usize) -> Option<Decimal> {
        self.coordinates.get(index).copied()
    }

    /// Iterate over the coordinates
    pub fn iter(&self) -> impl Iterator<Item = &Decimal> {
        self.coordinates.iter()
    }

    fn check_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(LinAlgError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }
        Ok(())
    }

    fn zip_with(
        &self,
        other: &Vector,
        op: &'static str,
        f: impl Fn(Decimal, Decimal) -> Option<Decimal>,
    ) -> Result<Vector> {
        self.check_dimension(other)?;
        Self::from_computed(
            self.coordinates
                .iter()
                .zip(&other.coordinates)
                .map(|(&a, &b)| f(a, b)),
            op,
        )
    }

    /// Component-wise sum
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "adding", Decimal::checked_add)
    }

    /// Component-wise difference `self - other`
    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "subtracting", Decimal::checked_sub)
    }

    /// Multiply every coordinate by `k`
    ///
    /// Fails with [`LinAlgError::Overflow`] if a product leaves the coordinate range.
    pub fn scale(&self, k: impl Into<Decimal>) -> Result<Vector> {
        let k = k.into();
        Self::from_computed(self.coordinates.iter().map(|&x| x.checked_mul(k)), "scaling")
    }

    /// Euclidean norm
    ///
    /// Coordinates are divided by the largest absolute coordinate before
    /// squaring, so the sum stays small for any dimension.
    pub fn magnitude(&self) -> Decimal {
        let largest = self
            .coordinates
            .iter()
            .map(|x| x.abs())
            .max()
            .unwrap_or_default();
        if largest.is_zero() {
            return Decimal::ZERO;
        }
        let sum_of_squares: Decimal = self
            .coordinates
            .iter()
            .map(|&x| {
                let ratio = x / largest;
                ratio * ratio
            })
            .sum();
        sum_of_squares.sqrt().unwrap_or_default().saturating_mul(largest)
    }

    /// Unit vector in the same direction
    pub fn normalized(&self) -> Result<Vector> {
        if self.is_zero() {
            return Err(LinAlgError::ZeroVector("normalize"));
        }
        let magnitude = self.magnitude();
        Ok(Vector {
            coordinates: self.coordinates.iter().map(|&x| x / magnitude).collect(),
        })
    }

    /// Dot product
    pub fn dot(&self, other: &Vector) -> Result<Decimal> {
        self.check_dimension(other)?;
        Ok(self.dot_unchecked(other))
    }

    /// Each product is at most `MAX_COORDINATE^2`; only the running sum can saturate.
    pub(crate) fn dot_unchecked(&self, other: &Vector) -> Decimal {
        self.coordinates
            .iter()
            .zip(&other.coordinates)
            .fold(Decimal::ZERO, |sum, (&a, &b)| sum.saturating_add(a * b))
    }

    /// Angle between two vectors
    pub fn angle_between(&self, other: &Vector, unit: AngleUnit) -> Result<f64> {
        self.check_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Err(LinAlgError::ZeroVector("measure an angle against"));
        }
        let radians = self
            .angle_unchecked(other)
            .ok_or(LinAlgError::Overflow("measuring the angle"))?;
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    /// Angle in radians; both vectors must be nonzero and of equal dimension.
    ///
    /// `None` when the cosine cannot be computed in decimal arithmetic.
    fn angle_unchecked(&self, other: &Vector) -> Option<f64> {
        // divide by the larger magnitude first so the operands can be swapped
        let (a, b) = (self.magnitude(), other.magnitude());
        let cosine = self
            .dot_unchecked(other)
            .checked_div(a.max(b))?
            .checked_div(a.min(b))?
            .to_f64()?;
        // drift can push the cosine just past +-1
        Some(cosine.clamp(-1.0, 1.0).acos())
    }

    /// Whether the magnitude is below the default zero tolerance (`1e-10`)
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(Tolerances::DEFAULT.zero)
    }

    /// Whether the magnitude is strictly below `tolerance`
    pub fn is_zero_within(&self, tolerance: Decimal) -> bool {
        self.magnitude() < tolerance
    }

    /// Whether the vectors point in the same or opposite direction.
    ///
    /// The zero vector is parallel to every vector.
    pub fn is_parallel_to(&self, other: &Vector) -> Result<bool> {
        self.is_parallel_to_with(other, &Tolerances::DEFAULT)
    }

    /// [`is_parallel_to`](Self::is_parallel_to) with explicit zero and angle tolerances
    pub fn is_parallel_to_with(&self, other: &Vector, tolerances: &Tolerances) -> Result<bool> {
        self.check_dimension(other)?;
        Ok(self.parallel_unchecked(other, tolerances))
    }

    pub(crate) fn parallel_unchecked(&self, other: &Vector, tolerances: &Tolerances) -> bool {
        if self.is_zero_within(tolerances.zero) || other.is_zero_within(tolerances.zero) {
            return true;
        }
        let Some(angle) = self.angle_unchecked(other) else {
            debug!(a = %self, b = %other, "angle undefined, reporting not parallel");
            return false;
        };
        let tol = tolerances.parallel_angle;
        angle.abs() <= tol || (angle - PI).abs() <= tol * angle.abs().max(PI)
    }

    /// Whether the dot product is below the default orthogonality tolerance
    pub fn is_orthogonal_to(&self, other: &Vector) -> Result<bool> {
        self.is_orthogonal_to_within(other, Tolerances::DEFAULT.orthogonal)
    }

    /// Whether the absolute dot product is strictly below `tolerance`
    pub fn is_orthogonal_to_within(&self, other: &Vector, tolerance: Decimal) -> Result<bool> {
        Ok(self.dot(other)?.abs() < tolerance)
    }

    /// Projection of `self` onto `basis`
    pub fn projected_onto(&self, basis: &Vector) -> Result<Vector> {
        self.check_dimension(basis)?;
        if basis.is_zero() {
            return Err(LinAlgError::ZeroVector("project onto"));
        }
        // (v . b / b . b) b keeps the result exact where normalizing would round
        let weight = self
            .dot_unchecked(basis)
            .checked_div(basis.dot_unchecked(basis))
            .ok_or(LinAlgError::Overflow("projecting"))?;
        basis.scale(weight)
    }

    /// Component of `self` orthogonal to `basis`
    pub fn component_orthogonal_to(&self, basis: &Vector) -> Result<Vector> {
        let projection = self.projected_onto(basis)?;
        self.subtract(&projection)
    }

    /// Cross product, defined for 3-dimensional vectors only
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        for v in [self, other] {
            if v.dimension() != 3 {
                return Err(LinAlgError::CrossProductDimension(v.dimension()));
            }
        }
        let (x1, y1, z1) = (self.coordinates[0], self.coordinates[1], self.coordinates[2]);
        let (x2, y2, z2) = (other.coordinates[0], other.coordinates[1], other.coordinates[2]);
        // bounded coordinates keep each difference of products within Decimal range
        let coordinates = [y1 * z2 - y2 * z1, x2 * z1 - x1 * z2, x1 * y2 - x2 * y1];
        Self::from_computed(coordinates.map(Some), "taking the cross product")
    }

    /// Area of the parallelogram spanned by two 3D vectors
    pub fn parallelogram_area(&self, other: &Vector) -> Result<Decimal> {
        Ok(self.cross(other)?.magnitude())
    }

    /// Area of the triangle spanned by two 3D vectors
    pub fn triangle_area(&self, other: &Vector) -> Result<Decimal> {
        Ok(self.parallelogram_area(other)? / Decimal::TWO)
    }

    /// Index of the first coordinate whose magnitude reaches the default zero tolerance
    pub fn first_nonzero_index(&self) -> Result<usize> {
        self.first_nonzero_index_within(Tolerances::DEFAULT.zero)
    }

    /// Index of the first coordinate whose magnitude reaches `tolerance`
    pub fn first_nonzero_index_within(&self, tolerance: Decimal) -> Result<usize> {
        self.coordinates
            .iter()
            .position(|x| x.abs() >= tolerance)
            .ok_or(LinAlgError::DegenerateLine)
    }
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| LinAlgError::InvalidCoordinate(s.to_string()))
}

impl Index<usize> for Vector {
    type Output = Decimal;
    fn index(&self, index: usize) -> &Decimal {
        &self.coordinates[index]
    }
}

impl Mul<Decimal> for &Vector {
    type Output = Result<Vector>;
    fn mul(self, k: Decimal) -> Result<Vector> {
        self.scale(k)
    }
}

impl Mul<&Vector> for Decimal {
    type Output = Result<Vector>;
    fn mul(self, v: &Vector) -> Result<Vector> {
        v.scale(self)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x.normalize())?;
        }
        write!(f, ")")
    }
}
