use galvani_core::{ExpressionError, Field, Shape};

/// Fluxes prescribed at both ends of the domain.
///
/// Each side holds a single value: a scalar or a length-one field.
#[derive(Debug, Clone, PartialEq)]
pub struct NeumannBoundary<F> {
    pub left: F,
    pub right: F,
}

impl<F> NeumannBoundary<F> {
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }
}

impl<F: Field> NeumannBoundary<F> {
    /// Zero flux through both ends.
    #[must_use]
    pub fn no_flux() -> Self {
        Self::new(F::scalar(0.0), F::scalar(0.0))
    }

    /// Places the boundary values around an interior edge field.
    ///
    /// The result has two more values than `interior`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::UnexpectedShape`] if either boundary holds
    /// more than one value.
    pub(crate) fn enclose(
        &self,
        operation: &'static str,
        interior: &F,
    ) -> Result<F, ExpressionError> {
        for side in [&self.left, &self.right] {
            let found = side.shape();
            if !found.is_broadcastable() {
                return Err(ExpressionError::UnexpectedShape {
                    operation,
                    expected: Shape::Vector(1),
                    found,
                });
            }
        }

        F::concatenate(&[self.left.clone(), interior.clone(), self.right.clone()])
    }
}
