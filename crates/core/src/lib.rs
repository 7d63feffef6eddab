//! Core abstractions for composing battery models from symbolic fields.
//!
//! This crate defines the pieces that equation terms and submodels build on:
//!
//! - [`Field`]: the elementwise algebra equation terms are written against
//! - [`Expr`]: an immutable symbolic expression graph implementing [`Field`]
//! - [`Operators`]: spatial operators (`grad`, `div`, `x_average`) over a field
//! - [`VariableMap`]: the ordered name → expression mapping a submodel produces
//! - [`Submodel`]: the contract shared by every submodel variant
//!
//! Equation terms written against [`Field`] and [`Operators`] work unchanged
//! for symbolic graphs ([`Expr`] with [`SymbolicOperators`]) and for plain
//! arrays ([`ndarray::Array1`] with [`UniformGrid`]).

mod error;
mod field;
mod shape;
mod submodel;

pub mod expr;
pub mod operators;
pub mod variables;

pub use error::ExpressionError;
pub use expr::Expr;
pub use field::Field;
pub use operators::{GridError, Operators, SymbolicOperators, UniformGrid};
pub use shape::Shape;
pub use submodel::Submodel;
pub use variables::{VariableConflict, VariableMap};
