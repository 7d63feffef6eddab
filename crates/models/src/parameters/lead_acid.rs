use galvani_core::{ExpressionError, Field};
use serde::{Deserialize, Serialize};

use crate::ParameterError;

use super::{DoubleLayer, ElectrodeKinetics};

/// Nondimensional lead-acid parameters.
///
/// All values are scaled, so the struct holds plain numbers. Use
/// [`LeadAcidParameters::new`] or [`LeadAcidParameters::validate`] to check a
/// parameter set before using it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeadAcidParameters {
    /// Double-layer capacity ratio.
    pub gamma_dl: f64,
    /// Reference exchange-current density, negative electrode.
    pub iota_ref_n: f64,
    /// Reference exchange-current density, positive electrode.
    pub iota_ref_p: f64,
    /// Open-circuit potential of the lead electrode.
    pub u_pb: NernstPotential,
    /// Open-circuit potential of the lead-dioxide electrode.
    pub u_pbo2: NernstPotential,
    /// Scaled partial molar volume of the electrolyte.
    pub molar_volume_electrolyte: f64,
    /// Scaled partial molar volume of water.
    pub molar_volume_water: f64,
}

/// An open-circuit potential of the form `reference + slope * ln(c)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NernstPotential {
    pub reference: f64,
    pub slope: f64,
}

impl NernstPotential {
    /// Builds the potential for the concentration field `c`.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpressionError`] if the terms cannot be combined.
    pub fn evaluate<F: Field>(&self, c: &F) -> Result<F, ExpressionError> {
        F::scalar(self.reference).add(&c.ln().scale(self.slope))
    }
}

impl LeadAcidParameters {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if any value is out of range.
    pub fn new(
        gamma_dl: f64,
        iota_ref_n: f64,
        iota_ref_p: f64,
        u_pb: NernstPotential,
        u_pbo2: NernstPotential,
        molar_volume_electrolyte: f64,
        molar_volume_water: f64,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            gamma_dl,
            iota_ref_n,
            iota_ref_p,
            u_pb,
            u_pbo2,
            molar_volume_electrolyte,
            molar_volume_water,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every value is in its physical range.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), ParameterError> {
        ParameterError::ensure_positive("gamma_dl", self.gamma_dl)?;
        ParameterError::ensure_positive("iota_ref_n", self.iota_ref_n)?;
        ParameterError::ensure_positive("iota_ref_p", self.iota_ref_p)?;
        ParameterError::ensure_finite("u_pb.reference", self.u_pb.reference)?;
        ParameterError::ensure_finite("u_pb.slope", self.u_pb.slope)?;
        ParameterError::ensure_finite("u_pbo2.reference", self.u_pbo2.reference)?;
        ParameterError::ensure_finite("u_pbo2.slope", self.u_pbo2.slope)?;
        ParameterError::ensure_finite("molar_volume_electrolyte", self.molar_volume_electrolyte)?;
        ParameterError::ensure_positive("molar_volume_water", self.molar_volume_water)?;
        Ok(())
    }
}

/// A representative lead-acid cell.
impl Default for LeadAcidParameters {
    fn default() -> Self {
        Self {
            gamma_dl: 0.1,
            iota_ref_n: 0.08,
            iota_ref_p: 0.006,
            u_pb: NernstPotential {
                reference: -0.294,
                slope: -0.074,
            },
            u_pbo2: NernstPotential {
                reference: 1.628,
                slope: 0.074,
            },
            molar_volume_electrolyte: 0.254,
            molar_volume_water: 0.0989,
        }
    }
}

impl<F: Field> ElectrodeKinetics<F> for LeadAcidParameters {
    fn iota_ref_n(&self) -> F {
        F::scalar(self.iota_ref_n)
    }

    fn iota_ref_p(&self) -> F {
        F::scalar(self.iota_ref_p)
    }

    fn u_pb(&self, c: &F) -> Result<F, ExpressionError> {
        self.u_pb.evaluate(c)
    }

    fn u_pbo2(&self, c: &F) -> Result<F, ExpressionError> {
        self.u_pbo2.evaluate(c)
    }

    /// Computes `cw = (1 - ve * c) / vw`.
    fn cw(&self, c: &F) -> Result<F, ExpressionError> {
        F::scalar(1.0)
            .sub(&c.scale(self.molar_volume_electrolyte))?
            .divide(&F::scalar(self.molar_volume_water))
    }
}

impl<F: Field> DoubleLayer<F> for LeadAcidParameters {
    fn gamma_dl(&self) -> F {
        F::scalar(self.gamma_dl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use galvani_core::{Expr, Shape};
    use ndarray::{Array1, array};

    #[test]
    fn default_parameters_are_valid() {
        assert!(LeadAcidParameters::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_rates() {
        let params = LeadAcidParameters::default();
        let err = LeadAcidParameters::new(
            0.0,
            params.iota_ref_n,
            params.iota_ref_p,
            params.u_pb,
            params.u_pbo2,
            params.molar_volume_electrolyte,
            params.molar_volume_water,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ParameterError::NotPositive {
                name: "gamma_dl",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_finite_potentials() {
        let params = LeadAcidParameters {
            u_pbo2: NernstPotential {
                reference: f64::NAN,
                slope: 0.0,
            },
            ..LeadAcidParameters::default()
        };

        assert!(matches!(
            params.validate(),
            Err(ParameterError::NotFinite {
                name: "u_pbo2.reference",
                ..
            })
        ));
    }

    #[test]
    fn nernst_potential_at_unit_concentration_is_reference() -> Result<(), ExpressionError> {
        let potential = NernstPotential {
            reference: 1.5,
            slope: 0.2,
        };

        let u = potential.evaluate(&array![1.0, std::f64::consts::E])?;
        assert_relative_eq!(u[0], 1.5);
        assert_relative_eq!(u[1], 1.7);

        Ok(())
    }

    #[test]
    fn water_concentration_follows_partial_volumes() -> Result<(), ExpressionError> {
        let params = LeadAcidParameters::default();

        let cw: Array1<f64> = params.cw(&array![0.0, 1.0])?;
        assert_relative_eq!(cw[0], 1.0 / 0.0989);
        assert_relative_eq!(cw[1], (1.0 - 0.254) / 0.0989);

        Ok(())
    }

    #[test]
    fn builds_symbolic_potentials() -> Result<(), ExpressionError> {
        let params = LeadAcidParameters::default();
        let c = Expr::variable("c", Shape::Vector(3));

        let u: Expr = params.u_pb(&c)?;
        assert_eq!(u.shape(), Shape::Vector(3));
        assert_eq!(u.variables(), vec!["c"]);

        let gamma: Expr = params.gamma_dl();
        assert_eq!(gamma, Expr::constant(0.1));

        Ok(())
    }
}
