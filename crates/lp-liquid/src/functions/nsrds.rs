//! NSRDS-AIChE DIPPR correlation family.
//!
//! All forms depend on temperature only; pressure is carried through for error
//! reporting. Coefficient order follows the correlation's letter order
//! (`a, b, c, ...`), with the critical temperature first for the reduced-temperature
//! forms 6 and 14.

use crate::error::FunctionResult;
use crate::function::{ThermophysicalFunction, validation};

macro_rules! nsrds_form {
    ($(#[$meta:meta])* $name:ident, $tag:literal, $n:literal, $eval:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            coeffs: [f64; $n],
        }

        impl $name {
            pub const TAG: &'static str = $tag;

            pub fn new(coeffs: [f64; $n]) -> FunctionResult<Self> {
                Self::from_coeffs(&coeffs)
            }

            pub fn from_coeffs(coeffs: &[f64]) -> FunctionResult<Self> {
                Ok(Self {
                    coeffs: validation::exact_coeffs(Self::TAG, coeffs)?,
                })
            }
        }

        impl ThermophysicalFunction for $name {
            fn tag(&self) -> &str {
                Self::TAG
            }

            fn coeffs(&self) -> &[f64] {
                &self.coeffs
            }

            fn f(&self, p: f64, t: f64) -> FunctionResult<f64> {
                let eval: fn(&[f64; $n], f64) -> f64 = $eval;
                validation::finite_result(Self::TAG, p, t, eval(&self.coeffs, t))
            }

            fn clone_box(&self) -> Box<dyn ThermophysicalFunction> {
                Box::new(self.clone())
            }
        }
    };
}

nsrds_form!(
    /// `a + bT + cT^2 + dT^3 + eT^4 + fT^5`
    NsrdsFunc0,
    "NSRDSfunc0",
    6,
    |&[a, b, c, d, e, f], t| ((((f * t + e) * t + d) * t + c) * t + b) * t + a
);

nsrds_form!(
    /// `exp(a + b/T + c ln(T) + d T^e)`
    NsrdsFunc1,
    "NSRDSfunc1",
    5,
    |&[a, b, c, d, e], t| (a + b / t + c * t.ln() + d * t.powf(e)).exp()
);

nsrds_form!(
    /// `a T^b / (1 + c/T + d/T^2)`
    NsrdsFunc2,
    "NSRDSfunc2",
    4,
    |&[a, b, c, d], t| a * t.powf(b) / (1.0 + c / t + d / (t * t))
);

nsrds_form!(
    /// `a + b exp(-c / T^d)`
    NsrdsFunc3,
    "NSRDSfunc3",
    4,
    |&[a, b, c, d], t| a + b * (-c / t.powf(d)).exp()
);

nsrds_form!(
    /// `a + b/T + c/T^3 + d/T^8 + e/T^9`
    NsrdsFunc4,
    "NSRDSfunc4",
    5,
    |&[a, b, c, d, e], t| a + b / t + c / t.powi(3) + d / t.powi(8) + e / t.powi(9)
);

nsrds_form!(
    /// `a / b^(1 + (1 - T/c)^d)` (Rackett-type density)
    NsrdsFunc5,
    "NSRDSfunc5",
    4,
    |&[a, b, c, d], t| a / b.powf(1.0 + (1.0 - t / c).powf(d))
);

nsrds_form!(
    /// `a (1 - Tr)^(b + c Tr + d Tr^2 + e Tr^3)` with `Tr = T/Tc`; coefficients `[Tc, a, b, c, d, e]`
    NsrdsFunc6,
    "NSRDSfunc6",
    6,
    |&[tc, a, b, c, d, e], t| {
        let tr = t / tc;
        a * (1.0 - tr).powf(((e * tr + d) * tr + c) * tr + b)
    }
);

nsrds_form!(
    /// `a + b ((c/T)/sinh(c/T))^2 + d ((e/T)/cosh(e/T))^2` (Aly-Lee ideal gas heat capacity)
    NsrdsFunc7,
    "NSRDSfunc7",
    5,
    |&[a, b, c, d, e], t| {
        let cs = (c / t) / (c / t).sinh();
        let ec = (e / t) / (e / t).cosh();
        a + b * cs * cs + d * ec * ec
    }
);

nsrds_form!(
    /// `a^2/t + b - 2act - adt^2 - c^2t^3/3 - cdt^4/2 - d^2t^5/5` with `t = 1 - T/Tc`;
    /// coefficients `[Tc, a, b, c, d]`
    NsrdsFunc14,
    "NSRDSfunc14",
    5,
    |&[tc, a, b, c, d], t| {
        let x = 1.0 - t / tc;
        a * a / x + b - 2.0 * a * c * x - a * d * x.powi(2) - c * c * x.powi(3) / 3.0
            - c * d * x.powi(4) / 2.0
            - d * d * x.powi(5) / 5.0
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FunctionError;
    use lp_core::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64, rel: f64) -> bool {
        nearly_equal(a, b, Tolerances { abs: 0.0, rel })
    }

    #[test]
    fn func0_is_quintic_polynomial() {
        let f = NsrdsFunc0::new([1.0, 1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(f.f(1e5, 2.0).unwrap(), 63.0);
    }

    #[test]
    fn func1_water_vapour_pressure_near_boiling() {
        let f = NsrdsFunc1::new([73.649, -7258.2, -7.3037, 4.1653e-06, 2.0]).unwrap();
        let pv = f.f(101_325.0, 373.15).unwrap();
        assert!(pv > 95_000.0 && pv < 108_000.0, "pv = {pv}");
    }

    #[test]
    fn func2_matches_closed_form() {
        let f = NsrdsFunc2::new([2.6986e-06, 0.498, 1257.7, -19570.0]).unwrap();
        let t: f64 = 400.0;
        let expected = 2.6986e-06 * t.powf(0.498) / (1.0 + 1257.7 / t - 19570.0 / (t * t));
        assert!(close(f.f(1e5, t).unwrap(), expected, 1e-12));
    }

    #[test]
    fn func3_tends_to_a_plus_b_at_high_temperature() {
        let f = NsrdsFunc3::new([1.0, 2.0, 3.0, 1.0]).unwrap();
        let v = f.f(1e5, 1e9).unwrap();
        assert!(close(v, 3.0, 1e-6), "v = {v}");
    }

    #[test]
    fn func4_matches_closed_form() {
        let f = NsrdsFunc4::new([1.0, 10.0, 1000.0, 0.0, 0.0]).unwrap();
        assert!(close(f.f(1e5, 10.0).unwrap(), 1.0 + 1.0 + 1.0, 1e-12));
    }

    #[test]
    fn func5_water_density_near_ambient() {
        let f = NsrdsFunc5::new([98.343885, 0.30542, 647.13, 0.081]).unwrap();
        let rho = f.f(101_325.0, 300.0).unwrap();
        assert!(rho > 990.0 && rho < 1000.0, "rho = {rho}");
    }

    #[test]
    fn func5_above_critical_is_not_finite() {
        let f = NsrdsFunc5::new([98.343885, 0.30542, 647.13, 0.081]).unwrap();
        let err = f.f(101_325.0, 700.0).unwrap_err();
        assert!(matches!(err, FunctionError::NonFiniteResult { .. }));
    }

    #[test]
    fn func6_vanishes_at_critical_point() {
        let f = NsrdsFunc6::new([647.13, 0.18548, 2.717, -3.554, 2.047, 0.0]).unwrap();
        assert_eq!(f.f(1e5, 647.13).unwrap(), 0.0);
        let sigma = f.f(1e5, 300.0).unwrap();
        assert!(sigma > 0.06 && sigma < 0.08, "sigma = {sigma}");
    }

    #[test]
    fn func7_water_ideal_gas_cp() {
        let f = NsrdsFunc7::new([
            1851.73466555648,
            1487.53816264224,
            2609.3,
            493.366638912018,
            1167.6,
        ])
        .unwrap();
        let cpg = f.f(1e5, 300.0).unwrap();
        assert!(cpg > 1800.0 && cpg < 1900.0, "cpg = {cpg}");
    }

    #[test]
    fn func14_matches_closed_form() {
        let f = NsrdsFunc14::new([100.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
        // t = 0.5, a^2/t = 2
        assert!(close(f.f(1e5, 50.0).unwrap(), 2.0, 1e-12));
    }

    #[test]
    fn wrong_coefficient_count_is_rejected() {
        let err = NsrdsFunc6::from_coeffs(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            FunctionError::CoefficientCount {
                tag: "NSRDSfunc6".into(),
                expected: "6".into(),
                found: 2,
            }
        );
    }
}
