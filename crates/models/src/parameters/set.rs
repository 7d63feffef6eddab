use serde::{Deserialize, Serialize};

use crate::ParameterError;

use super::{CrackingParameters, LeadAcidParameters};

/// A complete parameter set, as loaded from a configuration file.
///
/// The TOML layout mirrors the struct, with quantities in SI base units:
///
/// ```toml
/// [lead_acid]
/// gamma_dl = 0.1
/// iota_ref_n = 0.08
/// iota_ref_p = 0.006
/// molar_volume_electrolyte = 0.254
/// molar_volume_water = 0.0989
/// u_pb = { reference = -0.294, slope = -0.074 }
/// u_pbo2 = { reference = 1.628, slope = 0.074 }
///
/// [cracking.mechanics]
/// crack_density = 3.18e15  # m-2
/// crack_width = 1.5e-8     # m
///
/// [cracking.geometry]
/// negative_surface_area_ratio = 3.66e5  # m-1
/// positive_surface_area_ratio = 5.2e5   # m-1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSet {
    pub lead_acid: LeadAcidParameters,
    pub cracking: CrackingParameters,
}

impl ParameterSet {
    /// Parses and validates a parameter set from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Parse`] if the text is not a well-formed
    /// parameter set, or another [`ParameterError`] if a value is out of range.
    pub fn from_toml_str(text: &str) -> Result<Self, ParameterError> {
        let set: Self = toml::from_str(text)?;
        set.validate()?;
        log::debug!("loaded parameter set: {set:?}");
        Ok(set)
    }

    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.lead_acid.validate()?;
        self.cracking.validate()
    }
}
