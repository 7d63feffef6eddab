//! Equation terms for electrolyte transport and electrode kinetics.
//!
//! Each term is a pure function of state fields, boundary data, and an
//! [`Operators`](galvani_core::Operators) implementation. Terms are called
//! once during model assembly and return a new field: a time derivative, a
//! current density, or a set of reaction currents.

mod boundary;
mod current;
mod diffusion;
mod kinetics;

pub use boundary::NeumannBoundary;
pub use current::{CurrentLaw, ElectrolyteState, Ohmic, current, electrolyte_current};
pub use diffusion::electrolyte_diffusion;
pub use kinetics::{ReactionCurrents, butler_volmer};
