use galvani_core::{
    Expr, ExpressionError, Field, Operators, Shape, Submodel, SymbolicOperators, VariableMap,
};

use crate::{
    Domain,
    parameters::{CrackGeometry, CrackingParameters},
};

use super::{crack_length_name, crack_surface_ratio_name, x_averaged_crack_surface_ratio_name};

/// Cracking of active-material particles.
///
/// The crack length is the submodel's fundamental variable. Cracks expose
/// extra particle surface, so the submodel also derives the crack surface
/// area per unit electrode volume and its through-cell average.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleCracking<P = CrackingParameters> {
    domain: Domain,
    param: P,
    shape: Shape,
}

/// Crack surface area per unit electrode volume.
#[derive(Debug, Clone, PartialEq)]
pub struct CrackSurface<F> {
    /// Local crack surface-to-volume ratio.
    pub ratio: F,
    /// Crack surface-to-volume ratio averaged through the cell.
    pub x_averaged: F,
}

impl<P> ParticleCracking<P> {
    /// Creates a cracking submodel for one electrode.
    ///
    /// The crack length is a single value per electrode. Use
    /// [`with_shape`](Self::with_shape) to resolve it through the electrode.
    pub fn new(domain: Domain, param: P) -> Self {
        Self {
            domain,
            param,
            shape: Shape::Scalar,
        }
    }

    /// Sets the shape of the crack length variable.
    #[must_use]
    pub fn with_shape(self, shape: Shape) -> Self {
        Self { shape, ..self }
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn param(&self) -> &P {
        &self.param
    }
}

impl<P: CrackGeometry<Expr>> ParticleCracking<P> {
    fn surface_variables(&self, crack_length: &Expr) -> Result<VariableMap, ExpressionError> {
        let surface =
            crack_surface_variables(self.domain, crack_length, &self.param, &SymbolicOperators)?;

        let mut variables = VariableMap::new();
        variables.insert(crack_surface_ratio_name(self.domain), surface.ratio);
        variables.insert(
            x_averaged_crack_surface_ratio_name(self.domain),
            surface.x_averaged,
        );
        Ok(variables)
    }
}

impl<P: CrackGeometry<Expr>> Submodel for ParticleCracking<P> {
    type Error = ExpressionError;

    fn fundamental_variables(&self) -> Result<VariableMap, Self::Error> {
        let name = crack_length_name(self.domain);
        let crack_length = Expr::variable(name.as_str(), self.shape);

        let mut variables = VariableMap::new();
        variables.insert(name, crack_length.clone());
        variables.extend(self.surface_variables(&crack_length)?);

        log::debug!(
            "particle cracking registered {} variables for the {} electrode",
            variables.len(),
            self.domain.lowercase()
        );
        Ok(variables)
    }
}

/// Derives the crack surface-to-volume ratio from the crack length.
///
/// Each crack adds two faces of width `w_cr`, so
/// `a_cr = a * l_cr * 2 * w_cr * rho_cr`, where `a` is the active-material
/// surface area per unit volume of `domain` and `rho_cr` the number of cracks
/// per unit particle surface.
///
/// # Errors
///
/// Returns an [`ExpressionError`] if `crack_length` cannot be combined with
/// the parameters or averaged by `operators`.
pub fn crack_surface_variables<F, P, O>(
    domain: Domain,
    crack_length: &F,
    param: &P,
    operators: &O,
) -> Result<CrackSurface<F>, ExpressionError>
where
    F: Field,
    P: CrackGeometry<F> + ?Sized,
    O: Operators<F> + ?Sized,
{
    let ratio = param
        .surface_area_to_volume_ratio(domain)
        .mul(crack_length)?
        .scale(2.0)
        .mul(&param.crack_width())?
        .mul(&param.crack_density())?;
    let x_averaged = operators.x_average(&ratio)?;

    Ok(CrackSurface { ratio, x_averaged })
}
