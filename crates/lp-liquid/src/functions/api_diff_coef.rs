//! API vapour diffusivity correlation.

use crate::error::FunctionResult;
use crate::function::{ThermophysicalFunction, validation};

/// API correlation for the binary diffusivity of a vapour in a gas [m^2/s].
///
/// Coefficients `[a, b, wf, wa]`: molar volume terms `a` and `b`, molecular weight
/// of the liquid `wf` and of the default binary partner `wa` (both kg/kmol).
///
/// ```text
/// D = 3.6059e-3 (1.8 T)^1.75 sqrt(1/wf + 1/wa) / (p (a^(1/3) + b^(1/3))^2)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDiffCoefFunc {
    coeffs: [f64; 4],
    alpha: f64,
    beta: f64,
}

impl ApiDiffCoefFunc {
    pub const TAG: &'static str = "APIdiffCoefFunc";

    pub fn new(a: f64, b: f64, wf: f64, wa: f64) -> FunctionResult<Self> {
        Self::from_coeffs(&[a, b, wf, wa])
    }

    pub fn from_coeffs(coeffs: &[f64]) -> FunctionResult<Self> {
        let coeffs: [f64; 4] = validation::exact_coeffs(Self::TAG, coeffs)?;
        let [a, b, wf, wa] = coeffs;
        let beta = (a.cbrt() + b.cbrt()).powi(2);
        Ok(Self {
            coeffs,
            alpha: (1.0 / wf + 1.0 / wa).sqrt(),
            beta,
        })
    }

    fn diffusivity(&self, p: f64, t: f64, alpha: f64) -> f64 {
        3.6059e-3 * (1.8 * t).powf(1.75) * alpha / (p * self.beta)
    }
}

impl ThermophysicalFunction for ApiDiffCoefFunc {
    fn tag(&self) -> &str {
        Self::TAG
    }

    fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    fn f(&self, p: f64, t: f64) -> FunctionResult<f64> {
        validation::finite_result(Self::TAG, p, t, self.diffusivity(p, t, self.alpha))
    }

    fn f_binary(&self, p: f64, t: f64, wb: f64) -> FunctionResult<f64> {
        let wf = self.coeffs[2];
        let alpha = (1.0 / wf + 1.0 / wb).sqrt();
        validation::finite_result(Self::TAG, p, t, self.diffusivity(p, t, alpha))
    }

    fn clone_box(&self) -> Box<dyn ThermophysicalFunction> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_core::{Tolerances, nearly_equal};

    fn water_in_air() -> ApiDiffCoefFunc {
        ApiDiffCoefFunc::new(15.0, 15.0, 18.015, 28.0).unwrap()
    }

    #[test]
    fn binary_with_default_partner_matches_plain_call() {
        let d = water_in_air();
        let plain = d.f(101_325.0, 300.0).unwrap();
        let binary = d.f_binary(101_325.0, 300.0, 28.0).unwrap();
        assert!(nearly_equal(plain, binary, Tolerances { abs: 0.0, rel: 1e-15 }));
    }

    #[test]
    fn heavier_partner_diffuses_slower() {
        let d = water_in_air();
        let light = d.f_binary(101_325.0, 300.0, 4.0).unwrap();
        let heavy = d.f_binary(101_325.0, 300.0, 100.0).unwrap();
        assert!(light > heavy);
    }

    #[test]
    fn inversely_proportional_to_pressure() {
        let d = water_in_air();
        let d1 = d.f(1e5, 350.0).unwrap();
        let d2 = d.f(2e5, 350.0).unwrap();
        assert!(nearly_equal(d1 / d2, 2.0, Tolerances::default()));
    }

    #[test]
    fn zero_pressure_is_not_finite() {
        assert!(water_in_air().f(0.0, 300.0).is_err());
    }

    #[test]
    fn coefficients_roundtrip_unchanged() {
        let d = water_in_air();
        assert_eq!(d.to_def().coeffs, vec![15.0, 15.0, 18.015, 28.0]);
    }
}
