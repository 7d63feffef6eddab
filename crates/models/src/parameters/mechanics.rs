use galvani_core::Field;
use serde::{Deserialize, Serialize};
use uom::si::{
    areal_number_density::per_square_meter,
    f64::{ArealNumberDensity, Length, ReciprocalLength},
    length::meter,
    reciprocal_length::reciprocal_meter,
};

use crate::{Domain, ParameterError};

use super::CrackGeometry;

/// Mechanical properties of cracked electrode particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MechanicalParameters {
    /// Number of cracks per unit particle surface area.
    pub crack_density: ArealNumberDensity,
    /// Crack width.
    pub crack_width: Length,
}

impl MechanicalParameters {
    /// Creates validated mechanical parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if either value is not positive.
    pub fn new(
        crack_density: ArealNumberDensity,
        crack_width: Length,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            crack_density,
            crack_width,
        };
        params.validate()?;
        Ok(params)
    }

    /// # Errors
    ///
    /// Returns a [`ParameterError`] if either value is not positive.
    pub fn validate(&self) -> Result<(), ParameterError> {
        ParameterError::ensure_positive(
            "crack_density",
            self.crack_density.get::<per_square_meter>(),
        )?;
        ParameterError::ensure_positive("crack_width", self.crack_width.get::<meter>())?;
        Ok(())
    }
}

/// Cracks in graphite particles.
impl Default for MechanicalParameters {
    fn default() -> Self {
        Self {
            crack_density: ArealNumberDensity::new::<per_square_meter>(3.18e15),
            crack_width: Length::new::<meter>(1.5e-8),
        }
    }
}

/// Electrode microstructure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElectrodeGeometry {
    /// Active-material surface area per unit volume, negative electrode.
    pub negative_surface_area_ratio: ReciprocalLength,
    /// Active-material surface area per unit volume, positive electrode.
    pub positive_surface_area_ratio: ReciprocalLength,
}

impl ElectrodeGeometry {
    /// Creates a validated electrode geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if either ratio is not positive.
    pub fn new(
        negative_surface_area_ratio: ReciprocalLength,
        positive_surface_area_ratio: ReciprocalLength,
    ) -> Result<Self, ParameterError> {
        let geometry = Self {
            negative_surface_area_ratio,
            positive_surface_area_ratio,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// # Errors
    ///
    /// Returns a [`ParameterError`] if either ratio is not positive.
    pub fn validate(&self) -> Result<(), ParameterError> {
        ParameterError::ensure_positive(
            "negative_surface_area_ratio",
            self.negative_surface_area_ratio.get::<reciprocal_meter>(),
        )?;
        ParameterError::ensure_positive(
            "positive_surface_area_ratio",
            self.positive_surface_area_ratio.get::<reciprocal_meter>(),
        )?;
        Ok(())
    }

    /// Returns the surface area ratio of `domain`.
    #[must_use]
    pub fn surface_area_ratio(&self, domain: Domain) -> ReciprocalLength {
        match domain {
            Domain::Negative => self.negative_surface_area_ratio,
            Domain::Positive => self.positive_surface_area_ratio,
        }
    }
}

/// Spherical particles, `a = 3 ε / R`.
impl Default for ElectrodeGeometry {
    fn default() -> Self {
        Self {
            negative_surface_area_ratio: ReciprocalLength::new::<reciprocal_meter>(
                3.0 * 0.61 / 5.0e-6,
            ),
            positive_surface_area_ratio: ReciprocalLength::new::<reciprocal_meter>(
                3.0 * 0.52 / 3.0e-6,
            ),
        }
    }
}

/// Everything the cracking submodel reads.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrackingParameters {
    pub mechanics: MechanicalParameters,
    pub geometry: ElectrodeGeometry,
}

impl CrackingParameters {
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.mechanics.validate()?;
        self.geometry.validate()
    }
}

/// Values are handed to the field in SI base units.
impl<F: Field> CrackGeometry<F> for CrackingParameters {
    fn surface_area_to_volume_ratio(&self, domain: Domain) -> F {
        F::scalar(self.geometry.surface_area_ratio(domain).get::<reciprocal_meter>())
    }

    fn crack_width(&self) -> F {
        F::scalar(self.mechanics.crack_width.get::<meter>())
    }

    fn crack_density(&self) -> F {
        F::scalar(self.mechanics.crack_density.get::<per_square_meter>())
    }
}
