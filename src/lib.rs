//! # linalgebra
//!
//! A small linear algebra library: vectors, lines (2D) and planes (3D),
//! with tolerance-aware predicates, line intersection and the elementary
//! row operations on systems of equations.
//!
//! ## Features
//!
//! - Vector arithmetic, magnitude, normalization, dot and cross products
//! - Angles, parallelism and orthogonality under configurable tolerances
//! - Projection onto a basis and the orthogonal component
//! - Lines and planes sharing one generic [`Hyperplane`] type
//! - Coincidence (used as equality for lines and planes) and line intersection
//! - Equation rendering and parsing (`x_1 - 2x_2 = 3`)
//! - Row swap, row scale and row combination on a [`LinearSystem`]
//!
//! ## Quick Start
//!
//! ```rust
//! use linalgebra::{Line, Vector};
//!
//! let l1 = Line::new(Vector::new([1, 1])?, 3)?;
//! let l2: Line = "x_1 - x_2 = 1".parse()?;
//!
//! let point = l1.intersection_with(&l2)?;
//! assert_eq!(point.point(), Some(&Vector::new([2, 1])?));
//!
//! // Lines compare equal when they describe the same points
//! assert_eq!(Line::new(Vector::new([1, 1])?, 1)?, Line::new(Vector::new([-3, -3])?, -3)?);
//! # Ok::<(), linalgebra::LinAlgError>(())
//! ```
//!
//! ## Numbers
//!
//! Coordinates and constants are [`rust_decimal::Decimal`]s, which keeps the
//! coincidence checks stable where binary floating point drifts. Angles are
//! returned as `f64`. Coordinates are limited to [`MAX_COORDINATE`] in
//! absolute value; results that would exceed it fail with
//! [`LinAlgError::Overflow`].

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod linsys;
pub mod types;

// Re-export commonly used types
pub use config::{Tolerances, MAX_COORDINATE};
pub use error::{LinAlgError, Result};
pub use linsys::LinearSystem;
pub use rust_decimal::Decimal;
pub use types::{AngleUnit, Hyperplane, Intersection, Line, Plane, Vector};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
