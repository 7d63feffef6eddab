use std::convert::Infallible;

use galvani_core::{Expr, Shape, Submodel, VariableMap};

use crate::Domain;

use super::{crack_length_name, crack_surface_ratio_name, x_averaged_crack_surface_ratio_name};

/// Particles that never crack.
///
/// Registers the same variables as
/// [`ParticleCracking`](super::ParticleCracking), all identically zero, so
/// downstream terms read a crack surface without any crack mechanics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoCracking {
    domain: Domain,
    shape: Shape,
}

impl NoCracking {
    #[must_use]
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            shape: Shape::Scalar,
        }
    }

    /// Sets the shape of the crack length and local ratio.
    #[must_use]
    pub fn with_shape(self, shape: Shape) -> Self {
        Self { shape, ..self }
    }
}

impl Submodel for NoCracking {
    type Error = Infallible;

    fn fundamental_variables(&self) -> Result<VariableMap, Self::Error> {
        let zero = Expr::full(0.0, self.shape);

        let mut variables = VariableMap::new();
        variables.insert(crack_length_name(self.domain), zero.clone());
        variables.insert(crack_surface_ratio_name(self.domain), zero);
        variables.insert(
            x_averaged_crack_surface_ratio_name(self.domain),
            Expr::constant(0.0),
        );
        Ok(variables)
    }
}
