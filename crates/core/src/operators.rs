//! Spatial operators over fields.
//!
//! Equation terms never discretize anything themselves. They receive an
//! [`Operators`] implementation and call `grad`, `div`, and `x_average` on it.
//!
//! Two implementations are provided:
//!
//! - [`SymbolicOperators`] builds gradient, divergence, and average nodes in
//!   an [`Expr`](crate::Expr) graph, leaving discretization to the solver.
//! - [`UniformGrid`] applies finite differences to arrays on a uniform 1D
//!   mesh. It is the smallest discretization on which `grad` and `div` are
//!   exact adjoints, which makes conservation checks meaningful.

mod symbolic;
mod uniform;

pub use symbolic::SymbolicOperators;
pub use uniform::{GridError, UniformGrid};

use crate::{ExpressionError, Field};

/// Spatial operators on a one-dimensional domain.
///
/// Node-centred fields have `n` values and edge-centred fields (fluxes,
/// currents) have `n + 1` values, including both boundaries. Interior edges
/// number `n - 1`.
pub trait Operators<F: Field> {
    /// Gradient from `n` node values to `n - 1` interior edges.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpressionError`] if `field` is not a node-centred field
    /// this operator set can differentiate.
    fn grad(&self, field: &F) -> Result<F, ExpressionError>;

    /// Divergence from `n + 1` edge values to `n` nodes.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpressionError`] if `flux` is not an edge-centred field
    /// this operator set can differentiate.
    fn div(&self, flux: &F) -> Result<F, ExpressionError>;

    /// Average along the through-cell direction.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpressionError`] if `field` cannot be averaged by this
    /// operator set.
    fn x_average(&self, field: &F) -> Result<F, ExpressionError>;
}
