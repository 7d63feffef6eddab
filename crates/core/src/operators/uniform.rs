use ndarray::{Array1, s};
use thiserror::Error;

use crate::{ExpressionError, Field, Shape};

use super::Operators;

/// Errors that can occur when constructing a [`UniformGrid`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("a grid needs at least one cell")]
    NoCells,

    #[error("grid length must be positive and finite, got {0}")]
    InvalidLength(f64),
}

/// Finite differences on a uniform one-dimensional mesh.
///
/// The domain `[0, length]` is split into `cells` equal cells with values
/// stored at cell centres. Fluxes live on the `cells + 1` cell faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGrid {
    cells: usize,
    spacing: f64,
}

impl UniformGrid {
    /// Creates a grid of `cells` equal cells spanning `length`.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if there are no cells or the length is not a
    /// positive finite number.
    pub fn new(cells: usize, length: f64) -> Result<Self, GridError> {
        if cells == 0 {
            return Err(GridError::NoCells);
        }
        if !(length.is_finite() && length > 0.0) {
            return Err(GridError::InvalidLength(length));
        }

        #[allow(clippy::cast_precision_loss)]
        let spacing = length / cells as f64;

        Ok(Self { cells, spacing })
    }

    #[must_use]
    pub fn cells(&self) -> usize {
        self.cells
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the cell-centre coordinates.
    #[must_use]
    pub fn nodes(&self) -> Array1<f64> {
        Array1::from_iter((0..self.cells).map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let i = i as f64;
            (i + 0.5) * self.spacing
        }))
    }

    fn expect_len(
        operation: &'static str,
        field: &Array1<f64>,
        len: usize,
    ) -> Result<(), ExpressionError> {
        if field.len() == len {
            Ok(())
        } else {
            Err(ExpressionError::UnexpectedShape {
                operation,
                expected: Shape::Vector(len),
                found: Field::shape(field),
            })
        }
    }

    /// Differences between neighbouring values, one fewer than `values`.
    fn difference(&self, values: &Array1<f64>) -> Array1<f64> {
        if values.len() < 2 {
            return Array1::zeros(0);
        }
        (&values.slice(s![1..]) - &values.slice(s![..-1])) / self.spacing
    }
}

impl Operators<Array1<f64>> for UniformGrid {
    fn grad(&self, field: &Array1<f64>) -> Result<Array1<f64>, ExpressionError> {
        Self::expect_len("grad", field, self.cells)?;
        Ok(self.difference(field))
    }

    fn div(&self, flux: &Array1<f64>) -> Result<Array1<f64>, ExpressionError> {
        Self::expect_len("div", flux, self.cells + 1)?;
        Ok(self.difference(flux))
    }

    fn x_average(&self, field: &Array1<f64>) -> Result<Array1<f64>, ExpressionError> {
        Self::expect_len("x_average", field, self.cells)?;
        #[allow(clippy::cast_precision_loss)]
        let mean = field.sum() / self.cells as f64;
        Ok(Array1::scalar(mean))
    }
}
