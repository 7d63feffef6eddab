//! Battery model components and submodels.
//!
//! - [`components`]: equation terms for electrolyte diffusion, electrolyte
//!   current balance, and Butler-Volmer reaction kinetics
//! - [`submodels`]: submodels contributing named variables, such as
//!   [`ParticleCracking`](submodels::ParticleCracking)
//! - [`parameters`]: explicit, validated parameter sets and the capability
//!   traits equation terms read them through
//!
//! Every equation term is generic over [`Field`](galvani_core::Field) and
//! [`Operators`](galvani_core::Operators), so the same definition yields a
//! symbolic expression for the solver or plain numbers for checking.

mod domain;
mod error;

pub mod components;
pub mod parameters;
pub mod submodels;

pub use domain::Domain;
pub use error::ParameterError;
