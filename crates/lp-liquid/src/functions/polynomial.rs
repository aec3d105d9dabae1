//! Polynomial in temperature.

use crate::error::{FunctionError, FunctionResult};
use crate::function::{ThermophysicalFunction, validation};

/// `f(T) = a0 + a1 T + a2 T^2 + ...`, coefficients in ascending power order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub const TAG: &'static str = "polynomial";

    pub fn from_coeffs(coeffs: &[f64]) -> FunctionResult<Self> {
        if coeffs.is_empty() {
            return Err(FunctionError::CoefficientCount {
                tag: Self::TAG.to_string(),
                expected: "at least 1".to_string(),
                found: 0,
            });
        }
        validation::finite_coeffs(Self::TAG, coeffs)?;
        Ok(Self {
            coeffs: coeffs.to_vec(),
        })
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }
}

impl ThermophysicalFunction for Polynomial {
    fn tag(&self) -> &str {
        Self::TAG
    }

    fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    fn f(&self, p: f64, t: f64) -> FunctionResult<f64> {
        // Horner
        let value = self.coeffs.iter().rev().fold(0.0, |acc, &a| acc * t + a);
        validation::finite_result(Self::TAG, p, t, value)
    }

    fn clone_box(&self) -> Box<dyn ThermophysicalFunction> {
        Box::new(self.clone())
    }
}
