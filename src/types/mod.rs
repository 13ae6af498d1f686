//! Geometric value types: vectors, lines and planes

mod equation;
mod hyperplane;
mod intersection;
mod vector;

pub use hyperplane::{Hyperplane, Line, Plane};
pub use intersection::Intersection;
pub use vector::{AngleUnit, Vector};
