//! Parameter sets and the capability traits equation terms read them through.
//!
//! Parameters are explicit immutable values passed to each term, never an
//! ambient namespace. Each capability trait is generic over the field type, so
//! one parameter struct serves symbolic and numeric evaluation alike.

mod lead_acid;
mod mechanics;
mod set;

pub use lead_acid::{LeadAcidParameters, NernstPotential};
pub use mechanics::{CrackingParameters, ElectrodeGeometry, MechanicalParameters};
pub use set::ParameterSet;

use galvani_core::{ExpressionError, Field};

use crate::Domain;

/// Reaction kinetics of a lead-acid cell.
///
/// Provides the reference exchange-current densities and the nonlinear
/// functions the Butler-Volmer term needs: the open-circuit potentials of the
/// lead (`U_Pb`) and lead-dioxide (`U_PbO2`) electrodes, and the water
/// concentration `cw` that corrects the positive electrode's wetted area.
pub trait ElectrodeKinetics<F: Field> {
    /// Reference exchange-current density in the negative electrode.
    fn iota_ref_n(&self) -> F;

    /// Reference exchange-current density in the positive electrode.
    fn iota_ref_p(&self) -> F;

    /// Open-circuit potential of the negative (lead) electrode.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpressionError`] if the potential cannot be built for
    /// the given concentration field.
    fn u_pb(&self, c: &F) -> Result<F, ExpressionError>;

    /// Open-circuit potential of the positive (lead dioxide) electrode.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpressionError`] if the potential cannot be built for
    /// the given concentration field.
    fn u_pbo2(&self, c: &F) -> Result<F, ExpressionError>;

    /// Water concentration as a function of acid concentration.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpressionError`] if the concentration cannot be built
    /// for the given field.
    fn cw(&self, c: &F) -> Result<F, ExpressionError>;
}

/// Double-layer charging.
pub trait DoubleLayer<F: Field> {
    /// Ratio of double-layer capacitance to the reaction time scale.
    fn gamma_dl(&self) -> F;
}

/// Geometry of particle cracks.
pub trait CrackGeometry<F: Field> {
    /// Active-material surface area per unit electrode volume, in `m⁻¹`.
    fn surface_area_to_volume_ratio(&self, domain: Domain) -> F;

    /// Crack width, in `m`.
    fn crack_width(&self) -> F;

    /// Number of cracks per unit particle surface area, in `m⁻²`.
    fn crack_density(&self) -> F;
}
