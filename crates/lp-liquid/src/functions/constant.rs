//! Constant value, independent of state.

use crate::error::FunctionResult;
use crate::function::{ThermophysicalFunction, validation};

#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    coeffs: [f64; 1],
}

impl Constant {
    pub const TAG: &'static str = "constant";

    pub fn new(value: f64) -> FunctionResult<Self> {
        Self::from_coeffs(&[value])
    }

    pub fn from_coeffs(coeffs: &[f64]) -> FunctionResult<Self> {
        Ok(Self {
            coeffs: validation::exact_coeffs(Self::TAG, coeffs)?,
        })
    }

    pub fn value(&self) -> f64 {
        self.coeffs[0]
    }
}

impl ThermophysicalFunction for Constant {
    fn tag(&self) -> &str {
        Self::TAG
    }

    fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    fn f(&self, _p: f64, _t: f64) -> FunctionResult<f64> {
        Ok(self.coeffs[0])
    }

    fn clone_box(&self) -> Box<dyn ThermophysicalFunction> {
        Box::new(self.clone())
    }
}
