//! Outcome of intersecting two lines

use std::fmt;

use super::{Line, Vector};

/// Result of [`Line::intersection_with`]
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    /// The lines cross at exactly one point
    Point(Vector),
    /// The lines are coincident; carries the line itself
    Infinite(Line),
    /// The lines are parallel and distinct
    Empty,
}

impl Intersection {
    /// The crossing point, if there is exactly one
    pub fn point(&self) -> Option<&Vector> {
        match self {
            Intersection::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::Empty)
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Intersection::Infinite(_))
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intersection::Point(p) => write!(f, "{}", p),
            Intersection::Infinite(_) => write!(f, "Infinite intersections - lines are coincident"),
            Intersection::Empty => {
                write!(f, "No intersection - lines are parallel and not coincident")
            }
        }
    }
}
