use crate::VariableMap;

/// The contract shared by every submodel variant.
///
/// A submodel owns its configuration (typically a domain tag and a parameter
/// set) and contributes named variables to a model. Variants implement
/// different physics behind the same contract, and the model builder merges
/// the returned maps without knowing which variant produced them.
///
/// ## Implementing `Submodel`
///
/// Create the submodel's own variables in
/// [`fundamental_variables()`](Submodel::fundamental_variables), then derive
/// any quantities that follow from them and return everything in one map.
/// The method is called once per submodel during model assembly.
///
/// ```
/// use std::convert::Infallible;
/// use galvani_core::{Expr, Shape, Submodel, VariableMap};
///
/// struct ConstantTemperature;
///
/// impl Submodel for ConstantTemperature {
///     type Error = Infallible;
///
///     fn fundamental_variables(&self) -> Result<VariableMap, Infallible> {
///         let mut variables = VariableMap::new();
///         variables.insert("Cell temperature [K]", Expr::constant(298.15));
///         Ok(variables)
///     }
/// }
///
/// let variables = ConstantTemperature.fundamental_variables().unwrap();
/// assert!(variables.contains("Cell temperature [K]"));
/// ```
pub trait Submodel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates this submodel's variables and everything derived from them.
    ///
    /// # Errors
    ///
    /// Each submodel defines its own `Error` type, typically wrapping the
    /// [`ExpressionError`](crate::ExpressionError) raised by an inconsistent
    /// expression.
    fn fundamental_variables(&self) -> Result<VariableMap, Self::Error>;
}
