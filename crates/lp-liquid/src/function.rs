//! The function-of-state capability backing every property slot.

use crate::config::FunctionDef;
use crate::error::FunctionResult;
use std::fmt;

/// A scalar function of pressure [Pa] and temperature [K].
///
/// Implementations are immutable once built and must be thread-safe (Send + Sync)
/// so a liquid can be queried from several threads at once. The unit of the result
/// is fixed by the property slot that owns the function, not by the function.
pub trait ThermophysicalFunction: fmt::Debug + Send + Sync {
    /// Tag this form is registered under.
    fn tag(&self) -> &str;

    /// Coefficients exactly as the form was built from them.
    fn coeffs(&self) -> &[f64];

    /// Evaluate at pressure `p` [Pa] and temperature `t` [K].
    fn f(&self, p: f64, t: f64) -> FunctionResult<f64>;

    /// Evaluate with an explicit binary-pair molecular weight `wb` [kg/kmol].
    ///
    /// Forms with no binary-pair dependence ignore `wb`.
    fn f_binary(&self, p: f64, t: f64, _wb: f64) -> FunctionResult<f64> {
        self.f(p, t)
    }

    /// Deep copy behind a fresh box.
    fn clone_box(&self) -> Box<dyn ThermophysicalFunction>;

    /// Render back to the definition this form was built from.
    fn to_def(&self) -> FunctionDef {
        FunctionDef::new(self.tag(), self.coeffs().to_vec())
    }
}

impl Clone for Box<dyn ThermophysicalFunction> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Validation helpers shared by the built-in forms.
pub(crate) mod validation {
    use crate::error::{FunctionError, FunctionResult};

    /// Ensure every coefficient is finite.
    pub fn finite_coeffs(tag: &str, coeffs: &[f64]) -> FunctionResult<()> {
        match coeffs.iter().position(|c| !c.is_finite()) {
            Some(index) => Err(FunctionError::NonFiniteCoefficient {
                tag: tag.to_string(),
                index,
                value: coeffs[index],
            }),
            None => Ok(()),
        }
    }

    /// Ensure exactly `N` finite coefficients and return them as an array.
    pub fn exact_coeffs<const N: usize>(tag: &str, coeffs: &[f64]) -> FunctionResult<[f64; N]> {
        let array: [f64; N] = coeffs
            .try_into()
            .map_err(|_| FunctionError::CoefficientCount {
                tag: tag.to_string(),
                expected: N.to_string(),
                found: coeffs.len(),
            })?;
        finite_coeffs(tag, &array)?;
        Ok(array)
    }

    /// Reject NaN or infinite evaluation results.
    pub fn finite_result(tag: &str, p: f64, t: f64, value: f64) -> FunctionResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(FunctionError::NonFiniteResult {
                tag: tag.to_string(),
                p,
                t,
                value,
            })
        }
    }
}
