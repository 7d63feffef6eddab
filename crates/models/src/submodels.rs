//! Submodels contributing named variables to a model.
//!
//! Every variant implements [`Submodel`](galvani_core::Submodel). Variants
//! describing the same physics register the same variable names, so a model
//! builder can swap one for another without touching anything downstream.

mod no_cracking;
mod particle_cracking;

pub use no_cracking::NoCracking;
pub use particle_cracking::{CrackSurface, ParticleCracking, crack_surface_variables};

use crate::Domain;

/// Name of the crack length variable.
#[must_use]
pub fn crack_length_name(domain: Domain) -> String {
    format!("{domain} electrode particle crack length [m]")
}

/// Name of the crack surface-to-volume ratio variable.
#[must_use]
pub fn crack_surface_ratio_name(domain: Domain) -> String {
    format!("{domain} crack surface to volume ratio [m-1]")
}

/// Name of the x-averaged crack surface-to-volume ratio variable.
#[must_use]
pub fn x_averaged_crack_surface_ratio_name(domain: Domain) -> String {
    format!(
        "X-averaged {} crack surface to volume ratio [m-1]",
        domain.lowercase()
    )
}
