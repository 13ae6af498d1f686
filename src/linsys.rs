//! Systems of linear equations and the elementary row operations.
//!
//! A [`LinearSystem`] is an ordered list of hyperplanes sharing one
//! dimension. Rows are mutated in place by index; the number of rows never
//! changes. Because every row is a [`Hyperplane<N>`], rows of another
//! dimension cannot be stored; building a row from a normal vector of the
//! wrong length fails in [`Hyperplane::new`].

use std::fmt;
use std::ops::Index;

use rust_decimal::Decimal;
use tracing::trace;

use crate::error::{LinAlgError, Result};
use crate::types::Hyperplane;

/// Ordered equations `n_i . x = k_i`, planes by default
#[derive(Debug, Clone, Default)]
pub struct LinearSystem<const N: usize = 3> {
    planes: Vec<Hyperplane<N>>,
}

impl<const N: usize> LinearSystem<N> {
    /// Wrap the given rows
    pub fn new(planes: Vec<Hyperplane<N>>) -> Self {
        Self { planes }
    }

    /// Dimension shared by every row
    pub fn dimension(&self) -> usize {
        N
    }

    /// Number of equations
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Whether the system has no equations
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Row `index`, if any
    pub fn get(&self, index: usize) -> Option<&Hyperplane<N>> {
        self.planes.get(index)
    }

    /// Borrow all rows in order
    pub fn planes(&self) -> &[Hyperplane<N>] {
        &self.planes
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.planes.len() {
            return Err(LinAlgError::RowIndexOutOfRange {
                index,
                len: self.planes.len(),
            });
        }
        Ok(())
    }

    /// Replace row `index`
    pub fn set(&mut self, index: usize, plane: Hyperplane<N>) -> Result<()> {
        self.check_index(index)?;
        self.planes[index] = plane;
        Ok(())
    }

    /// Exchange rows `row1` and `row2`
    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<()> {
        self.check_index(row1)?;
        self.check_index(row2)?;
        trace!(row1, row2, "swap rows");
        self.planes.swap(row1, row2);
        Ok(())
    }

    /// Multiply row `row` by `coefficient`
    pub fn scale_row(&mut self, coefficient: impl Into<Decimal>, row: usize) -> Result<()> {
        self.check_index(row)?;
        let coefficient = coefficient.into();
        trace!(%coefficient, row, "scale row");
        self.planes[row] = self.planes[row].scaled_by(coefficient)?;
        Ok(())
    }

    /// Replace row `to` with `row[to] + coefficient * row[from]`
    pub fn add_scaled_row_to_row(
        &mut self,
        coefficient: impl Into<Decimal>,
        from: usize,
        to: usize,
    ) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let coefficient = coefficient.into();
        trace!(%coefficient, from, to, "add scaled row to row");
        let scaled = self.planes[from].scaled_by(coefficient)?;
        self.planes[to] = self.planes[to].add(&scaled)?;
        Ok(())
    }

    /// Replace row `to` with `row[from] + coefficient * row[from]`, dropping
    /// the previous content of `to`.
    #[cfg(feature = "legacy-row-combination")]
    pub fn add_scaled_row_to_row_as_observed(
        &mut self,
        coefficient: impl Into<Decimal>,
        from: usize,
        to: usize,
    ) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let scaled = self.planes[from].scaled_by(coefficient)?;
        self.planes[to] = self.planes[from].add(&scaled)?;
        Ok(())
    }

    /// For each row, the index of the first nonzero coefficient, or `None`
    /// when the normal vector is zero
    pub fn indices_of_first_nonzero_terms(&self) -> Vec<Option<usize>> {
        self.planes
            .iter()
            .map(|p| p.normal_vector().first_nonzero_index().ok())
            .collect()
    }
}

impl<const N: usize> Index<usize> for LinearSystem<N> {
    type Output = Hyperplane<N>;
    fn index(&self, index: usize) -> &Hyperplane<N> {
        &self.planes[index]
    }
}

impl<const N: usize> fmt::Display for LinearSystem<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linear System:")?;
        for (i, p) in self.planes.iter().enumerate() {
            write!(f, "\nEquation {}: {}", i + 1, p)?;
        }
        Ok(())
    }
}
