//! Liquid property errors.

use crate::property::Property;
use lp_core::CoreError;
use thiserror::Error;

/// Result type for function construction and evaluation.
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Result type for liquid operations.
pub type LiquidResult<T> = Result<T, LiquidError>;

/// Errors raised by a single correlation form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    /// No form registered under this tag.
    #[error("unknown function form `{tag}`")]
    UnknownForm { tag: String },

    /// Coefficient list has the wrong length for the form.
    #[error("function form `{tag}` expects {expected} coefficients, got {found}")]
    CoefficientCount {
        tag: String,
        expected: String,
        found: usize,
    },

    /// A coefficient is NaN or infinite.
    #[error("function form `{tag}` has non-finite coefficient #{index}: {value}")]
    NonFiniteCoefficient {
        tag: String,
        index: usize,
        value: f64,
    },

    /// The correlation produced NaN or infinity at the requested state.
    #[error("function form `{tag}` gave {value} at p={p} Pa, T={t} K")]
    NonFiniteResult {
        tag: String,
        p: f64,
        t: f64,
        value: f64,
    },
}

/// Errors that can occur while building, evaluating or persisting a liquid.
#[derive(Error, Debug)]
pub enum LiquidError {
    /// A required property has no entry in the definition.
    #[error("missing function definition for property `{property}`")]
    MissingProperty { property: Property },

    /// The function backing a property failed to build or evaluate.
    #[error("property `{property}`: {source}")]
    Function {
        property: Property,
        #[source]
        source: FunctionError,
    },

    /// Physical constants failed validation.
    #[error("invalid liquid constants: {0}")]
    Constants(#[from] CoreError),

    #[error("unsupported liquid file extension: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LiquidError {
    /// Attach a property name to a function error.
    pub fn function(property: Property, source: FunctionError) -> Self {
        Self::Function { property, source }
    }

    /// The property this error is about, if any.
    pub fn property(&self) -> Option<Property> {
        match self {
            Self::MissingProperty { property } | Self::Function { property, .. } => {
                Some(*property)
            }
            _ => None,
        }
    }
}

impl From<FunctionError> for CoreError {
    fn from(err: FunctionError) -> Self {
        match err {
            FunctionError::NonFiniteResult { tag, p, t, value } => CoreError::NonFinite {
                what: format!("function form `{tag}` at p={p} Pa, T={t} K"),
                value,
            },
            other => CoreError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}

impl From<LiquidError> for CoreError {
    fn from(err: LiquidError) -> Self {
        match err {
            LiquidError::Constants(inner) => inner,
            LiquidError::Function { property, source } => match CoreError::from(source) {
                CoreError::NonFinite { what, value } => CoreError::NonFinite {
                    what: format!("{property}: {what}"),
                    value,
                },
                other => CoreError::InvalidArg {
                    what: format!("{property}: {other}"),
                },
            },
            other => CoreError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
