use crate::{Expr, ExpressionError};

use super::Operators;

/// Operators that build symbolic nodes instead of computing values.
///
/// Shapes are still checked: a gradient needs at least one node, and a
/// divergence at least two edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymbolicOperators;

impl Operators<Expr> for SymbolicOperators {
    fn grad(&self, field: &Expr) -> Result<Expr, ExpressionError> {
        field.gradient()
    }

    fn div(&self, flux: &Expr) -> Result<Expr, ExpressionError> {
        flux.divergence()
    }

    fn x_average(&self, field: &Expr) -> Result<Expr, ExpressionError> {
        Ok(field.x_average())
    }
}
