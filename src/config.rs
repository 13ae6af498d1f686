//! Tolerance configuration for the geometric predicates.
//!
//! The defaults reproduce the thresholds the predicates were tuned with:
//! `1e-10` for "is this zero" checks and `1e-5` for comparing angles.
//!
//! Coordinates are limited to [`MAX_COORDINATE`] in absolute value. Squares,
//! dot products and 2x2 determinants of such values stay inside the range of
//! [`Decimal`], so the predicates never overflow.

use rust_decimal::Decimal;

use crate::error::{LinAlgError, Result};

/// Default near-zero threshold (`1e-10`).
pub const ZERO_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

/// Default angle tolerance used by parallelism checks, in radians.
pub const PARALLEL_ANGLE_TOLERANCE: f64 = 1e-5;

/// Largest absolute value a stored coordinate or constant term may take (`1e14`).
pub const MAX_COORDINATE: Decimal = Decimal::from_parts(0x107A_4000, 0x5AF3, 0, false, 0);

pub(crate) fn in_range(x: &Decimal) -> bool {
    x.abs() <= MAX_COORDINATE
}

/// Reject a user-supplied value outside `[-MAX_COORDINATE, MAX_COORDINATE]`.
pub(crate) fn check_coordinate(x: &Decimal) -> Result<()> {
    if in_range(x) {
        Ok(())
    } else {
        Err(LinAlgError::InvalidCoordinate(format!(
            "{x} exceeds {MAX_COORDINATE} in absolute value"
        )))
    }
}

/// Thresholds used by [`Vector`](crate::Vector) predicates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Magnitudes strictly below this are treated as zero.
    ///
    /// Default: `1e-10`.
    pub zero: Decimal,

    /// Dot products with an absolute value strictly below this count as
    /// orthogonal.
    ///
    /// Default: `1e-10`.
    pub orthogonal: Decimal,

    /// Absolute tolerance around 0 and relative tolerance around pi when
    /// comparing the angle between two vectors.
    ///
    /// Default: `1e-5`.
    pub parallel_angle: f64,
}

impl Tolerances {
    /// The default thresholds, usable in const contexts.
    pub const DEFAULT: Tolerances = Tolerances {
        zero: ZERO_TOLERANCE,
        orthogonal: ZERO_TOLERANCE,
        parallel_angle: PARALLEL_ANGLE_TOLERANCE,
    };
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}
