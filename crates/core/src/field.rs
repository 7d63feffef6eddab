use std::fmt::Debug;

use ndarray::Array1;

use crate::{ExpressionError, Shape};

/// The elementwise algebra equation terms are written against.
///
/// A `Field` is a one-dimensional quantity defined over part of a cell: a
/// concentration profile, a potential, a current density. Equation terms are
/// generic over `Field`, so the same term builds a symbolic graph when called
/// with [`Expr`](crate::Expr) and computes values when called with
/// [`Array1<f64>`].
///
/// Binary operations broadcast scalars (and length-one vectors) against
/// vectors. Any other shape disagreement is an error, never a panic.
pub trait Field: Clone + Debug + Sized {
    /// Creates a field holding a single constant value.
    fn scalar(value: f64) -> Self;

    /// Returns the shape of the field.
    fn shape(&self) -> Shape;

    /// Returns a field of zeros with the same shape as `self`.
    #[must_use]
    fn zeros_like(&self) -> Self;

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::IncompatibleShapes`] if the shapes cannot be
    /// broadcast together.
    fn add(&self, rhs: &Self) -> Result<Self, ExpressionError>;

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::IncompatibleShapes`] if the shapes cannot be
    /// broadcast together.
    fn sub(&self, rhs: &Self) -> Result<Self, ExpressionError>;

    /// Elementwise product.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::IncompatibleShapes`] if the shapes cannot be
    /// broadcast together.
    fn mul(&self, rhs: &Self) -> Result<Self, ExpressionError>;

    /// Elementwise quotient.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::IncompatibleShapes`] if the shapes cannot be
    /// broadcast together.
    fn divide(&self, rhs: &Self) -> Result<Self, ExpressionError>;

    /// Elementwise negation.
    #[must_use]
    fn neg(&self) -> Self;

    /// Elementwise integer power.
    #[must_use]
    fn powi(&self, exponent: i32) -> Self;

    /// Elementwise hyperbolic sine.
    #[must_use]
    fn sinh(&self) -> Self;

    /// Elementwise natural logarithm.
    #[must_use]
    fn ln(&self) -> Self;

    /// Joins fields end to end, in order.
    ///
    /// Scalars occupy a single slot in the result.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::EmptyConcatenation`] if `parts` is empty.
    fn concatenate(parts: &[Self]) -> Result<Self, ExpressionError>;

    /// Multiplies every value by a constant.
    #[must_use]
    fn scale(&self, factor: f64) -> Self;
}

impl Field for Array1<f64> {
    fn scalar(value: f64) -> Self {
        Array1::from_elem(1, value)
    }

    fn shape(&self) -> Shape {
        Shape::Vector(self.len())
    }

    fn zeros_like(&self) -> Self {
        Array1::zeros(self.len())
    }

    fn add(&self, rhs: &Self) -> Result<Self, ExpressionError> {
        zip_broadcast("add", self, rhs, |a, b| a + b)
    }

    fn sub(&self, rhs: &Self) -> Result<Self, ExpressionError> {
        zip_broadcast("sub", self, rhs, |a, b| a - b)
    }

    fn mul(&self, rhs: &Self) -> Result<Self, ExpressionError> {
        zip_broadcast("mul", self, rhs, |a, b| a * b)
    }

    fn divide(&self, rhs: &Self) -> Result<Self, ExpressionError> {
        zip_broadcast("divide", self, rhs, |a, b| a / b)
    }

    fn neg(&self) -> Self {
        self.mapv(|x| -x)
    }

    fn scale(&self, factor: f64) -> Self {
        self.mapv(|x| x * factor)
    }

    fn powi(&self, exponent: i32) -> Self {
        self.mapv(|x| x.powi(exponent))
    }

    fn sinh(&self) -> Self {
        self.mapv(f64::sinh)
    }

    fn ln(&self) -> Self {
        self.mapv(f64::ln)
    }

    fn concatenate(parts: &[Self]) -> Result<Self, ExpressionError> {
        if parts.is_empty() {
            return Err(ExpressionError::EmptyConcatenation);
        }
        Ok(parts.iter().flat_map(|part| part.iter().copied()).collect())
    }
}

/// Applies `op` elementwise, broadcasting length-one arrays.
fn zip_broadcast(
    operation: &'static str,
    lhs: &Array1<f64>,
    rhs: &Array1<f64>,
    op: impl Fn(f64, f64) -> f64,
) -> Result<Array1<f64>, ExpressionError> {
    let (left, right) = (Field::shape(lhs), Field::shape(rhs));
    let shape = left
        .broadcast(right)
        .ok_or(ExpressionError::IncompatibleShapes {
            operation,
            left,
            right,
        })?;

    let values = (0..shape.len())
        .map(|i| {
            let a = if lhs.len() == 1 { lhs[0] } else { lhs[i] };
            let b = if rhs.len() == 1 { rhs[0] } else { rhs[i] };
            op(a, b)
        })
        .collect();

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn arrays_broadcast_unit_length() -> Result<(), ExpressionError> {
        let x = array![1.0, 2.0, 3.0];
        let two = Array1::scalar(2.0);

        assert_eq!(x.mul(&two)?, array![2.0, 4.0, 6.0]);
        assert_eq!(two.sub(&x)?, array![1.0, 0.0, -1.0]);

        Ok(())
    }

    #[test]
    fn arrays_reject_mismatched_lengths() {
        let err = array![1.0, 2.0].add(&array![1.0, 2.0, 3.0]).unwrap_err();

        assert_eq!(
            err,
            ExpressionError::IncompatibleShapes {
                operation: "add",
                left: Shape::Vector(2),
                right: Shape::Vector(3),
            }
        );
    }

    #[test]
    fn array_concatenation_preserves_order() -> Result<(), ExpressionError> {
        let joined = Array1::concatenate(&[array![1.0], array![2.0, 3.0], array![4.0]])?;
        assert_eq!(joined, array![1.0, 2.0, 3.0, 4.0]);

        assert_eq!(
            Array1::<f64>::concatenate(&[]).unwrap_err(),
            ExpressionError::EmptyConcatenation
        );

        Ok(())
    }

    #[test]
    fn array_unary_functions() {
        let x = array![0.5, 1.0];

        let sinh = x.sinh();
        assert_relative_eq!(sinh[0], 0.5_f64.sinh());
        assert_relative_eq!(x.ln()[1], 0.0);
        assert_eq!(x.powi(2), array![0.25, 1.0]);
        assert_eq!(x.neg(), array![-0.5, -1.0]);
        assert_eq!(x.scale(4.0), array![2.0, 4.0]);
        assert_eq!(x.zeros_like(), array![0.0, 0.0]);
    }
}
