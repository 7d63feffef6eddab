use thiserror::Error;

use crate::Shape;

/// Errors raised while building field expressions.
///
/// Every check happens when an expression is constructed, so a model that
/// assembles without error has consistent shapes throughout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// Two operands of an elementwise operation cannot be broadcast together.
    #[error("cannot apply `{operation}` to a {left} and a {right}")]
    IncompatibleShapes {
        operation: &'static str,
        left: Shape,
        right: Shape,
    },

    /// An operand does not have the shape an operation requires.
    ///
    /// For example, a boundary flux that is not a single value, or a field
    /// whose length does not match the grid it is evaluated on.
    #[error("`{operation}` expects a {expected} but received a {found}")]
    UnexpectedShape {
        operation: &'static str,
        expected: Shape,
        found: Shape,
    },

    /// A concatenation was requested with nothing to concatenate.
    #[error("cannot concatenate an empty list of fields")]
    EmptyConcatenation,
}
