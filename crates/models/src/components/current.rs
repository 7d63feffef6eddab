use galvani_core::{ExpressionError, Field, Operators};

use crate::parameters::DoubleLayer;

use super::NeumannBoundary;

/// Electrolyte concentration and potential at the nodes of a domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectrolyteState<F> {
    pub concentration: F,
    pub potential: F,
}

impl<F> ElectrolyteState<F> {
    pub fn new(concentration: F, potential: F) -> Self {
        Self {
            concentration,
            potential,
        }
    }
}

/// A constitutive law for the electrolyte current density.
///
/// The law maps the state at `n` nodes to the current density on the `n - 1`
/// interior edges. Boundary currents are supplied separately.
pub trait CurrentLaw<F: Field> {
    /// Returns the current density on interior edges.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpressionError`] if the state fields are inconsistent
    /// with each other or with the operators.
    fn internal_current<O>(
        &self,
        state: &ElectrolyteState<F>,
        operators: &O,
    ) -> Result<F, ExpressionError>
    where
        O: Operators<F> + ?Sized;
}

/// Ohm's law with constant conductivity, `i = -kappa * grad(e)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ohmic {
    pub conductivity: f64,
}

impl<F: Field> CurrentLaw<F> for Ohmic {
    fn internal_current<O>(
        &self,
        state: &ElectrolyteState<F>,
        operators: &O,
    ) -> Result<F, ExpressionError>
    where
        O: Operators<F> + ?Sized,
    {
        Ok(operators.grad(&state.potential)?.scale(-self.conductivity))
    }
}

/// Current density through the electrolyte, including both boundaries.
///
/// The interior current comes from `law`. The boundary currents in
/// `current_bcs` are placed around it, giving `n + 1` edge values.
///
/// # Errors
///
/// Returns an [`ExpressionError`] if the law fails or a boundary current is
/// not a single value.
pub fn current<F, O, L>(
    state: &ElectrolyteState<F>,
    operators: &O,
    current_bcs: &NeumannBoundary<F>,
    law: &L,
) -> Result<F, ExpressionError>
where
    F: Field,
    O: Operators<F> + ?Sized,
    L: CurrentLaw<F> + ?Sized,
{
    let internal = law.internal_current(state, operators)?;
    current_bcs.enclose("current", &internal)
}

/// Charge conservation in the electrolyte.
///
/// Returns the time derivative of the potential:
///
/// ```text
/// i    = -current(state, current_bcs, law)
/// dedt = (div(i) + source) / gamma_dl
/// ```
///
/// An absent `source` is zero.
///
/// # Errors
///
/// Returns an [`ExpressionError`] if the current cannot be built or its
/// divergence does not match `source`.
pub fn electrolyte_current<F, O, L, P>(
    state: &ElectrolyteState<F>,
    operators: &O,
    current_bcs: &NeumannBoundary<F>,
    law: &L,
    param: &P,
    source: Option<&F>,
) -> Result<F, ExpressionError>
where
    F: Field,
    O: Operators<F> + ?Sized,
    L: CurrentLaw<F> + ?Sized,
    P: DoubleLayer<F> + ?Sized,
{
    let i = current(state, operators, current_bcs, law)?.neg();

    let mut balance = operators.div(&i)?;
    if let Some(source) = source {
        balance = balance.add(source)?;
    }
    log::trace!(
        "electrolyte current: potential is a {}, current is a {}",
        state.potential.shape(),
        i.shape()
    );

    balance.divide(&param.gamma_dl())
}
