use thiserror::Error;

/// Errors that may occur when constructing or loading parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    /// A physical constant that must be strictly positive is not.
    #[error("parameter `{name}` must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    /// A parameter is NaN or infinite.
    #[error("parameter `{name}` must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    /// The parameter file could not be parsed.
    #[error("invalid parameter file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ParameterError {
    /// Checks that `value` is finite and strictly positive.
    pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64, Self> {
        Self::ensure_finite(name, value)?;
        if value > 0.0 {
            Ok(value)
        } else {
            Err(Self::NotPositive { name, value })
        }
    }

    /// Checks that `value` is finite.
    pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NotFinite { name, value })
        }
    }
}
