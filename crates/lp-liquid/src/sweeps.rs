//! Property sweeps over temperature or pressure.
//!
//! Used to tabulate a liquid across a range of states, e.g. for plots or for
//! checking where a correlation stops being valid.

use crate::error::LiquidResult;
use crate::liquid::Liquid;
use crate::pack::LiquidPropertyPack;
use crate::units::{Quantity, UnitError, parse_quantity};
use lp_core::{CoreError, Tolerances, ensure_finite, nearly_equal};
use std::fmt;
use thiserror::Error;

/// Type of sweep progression.
/// Upper bound on the number of points in one sweep.
pub const MAX_SWEEP_POINTS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// State variable being swept; the other one is held fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepVariable {
    Temperature,
    Pressure,
}

impl SweepVariable {
    fn quantity(self) -> Quantity {
        match self {
            Self::Temperature => Quantity::Temperature,
            Self::Pressure => Quantity::Pressure,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Sweep must have at least 2 points (got {0})")]
    TooFewPoints(usize),

    #[error("Sweep must have at most {max} points (got {requested})")]
    TooManyPoints { requested: usize, max: usize },

    #[error("Sweep bound error: {0}")]
    Bound(#[from] CoreError),

    #[error("Start and end values must be different")]
    IdenticalBounds,

    #[error("Logarithmic sweep needs positive bounds")]
    NonPositiveLogBounds,

    #[error("{which} value error: {source}")]
    Unit {
        which: &'static str,
        #[source]
        source: UnitError,
    },
}

/// Definition of a single-variable sweep, bounds in SI units.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub variable: SweepVariable,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(
        variable: SweepVariable,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        if num_points < 2 {
            return Err(SweepError::TooFewPoints(num_points));
        }
        if num_points > MAX_SWEEP_POINTS {
            return Err(SweepError::TooManyPoints {
                requested: num_points,
                max: MAX_SWEEP_POINTS,
            });
        }
        let start = ensure_finite(start, "sweep start")?;
        let end = ensure_finite(end, "sweep end")?;
        let tol = Tolerances {
            abs: 1e-12,
            rel: 0.0,
        };
        if nearly_equal(start, end, tol) {
            return Err(SweepError::IdenticalBounds);
        }
        if sweep_type == SweepType::Logarithmic && (start <= 0.0 || end <= 0.0) {
            return Err(SweepError::NonPositiveLogBounds);
        }
        Ok(Self {
            variable,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Create a sweep from user text bounds such as `"20 C"` and `"90 C"`.
    pub fn from_text(
        variable: SweepVariable,
        start_raw: &str,
        end_raw: &str,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        let quantity = variable.quantity();
        let start = parse_quantity(start_raw, quantity).map_err(|source| SweepError::Unit {
            which: "Start",
            source,
        })?;
        let end = parse_quantity(end_raw, quantity).map_err(|source| SweepError::Unit {
            which: "End",
            source,
        })?;
        Self::new(variable, start, end, num_points, sweep_type)
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        let n = self.num_points;
        let mut points: Vec<f64> = match self.sweep_type {
            SweepType::Linear => {
                let delta = (self.end - self.start) / (n - 1) as f64;
                (0..n).map(|i| self.start + i as f64 * delta).collect()
            }
            SweepType::Logarithmic => {
                let (log_start, log_end) = (self.start.ln(), self.end.ln());
                let log_delta = (log_end - log_start) / (n - 1) as f64;
                (0..n)
                    .map(|i| (log_start + i as f64 * log_delta).exp())
                    .collect()
            }
        };

        // Ensure exact endpoints
        points[0] = self.start;
        points[n - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points, {})",
            self.variable.quantity(),
            self.start,
            self.end,
            self.num_points,
            self.sweep_type
        )
    }
}

/// One evaluated sweep point.
#[derive(Debug)]
pub struct SweepPoint {
    /// Pressure [Pa]
    pub p: f64,
    /// Temperature [K]
    pub t: f64,
    pub result: LiquidResult<LiquidPropertyPack>,
}

impl Liquid {
    /// Evaluate a property pack at every sweep point.
    ///
    /// `fixed` is the value of the variable not being swept (temperature [K] for a
    /// pressure sweep, pressure [Pa] for a temperature sweep). Failed points are
    /// kept in the output with their error.
    pub fn sweep(&self, sweep: &SweepDefinition, fixed: f64) -> Vec<SweepPoint> {
        let points: Vec<SweepPoint> = sweep
            .generate_points()
            .into_iter()
            .map(|x| {
                let (p, t) = match sweep.variable {
                    SweepVariable::Temperature => (fixed, x),
                    SweepVariable::Pressure => (x, fixed),
                };
                let result = self.property_pack(p, t);
                if let Err(e) = &result {
                    tracing::warn!(p, t, error = %e, "sweep point failed");
                }
                SweepPoint { p, t, result }
            })
            .collect();

        tracing::debug!(
            sweep = %sweep,
            failed = points.iter().filter(|pt| pt.result.is_err()).count(),
            "sweep complete"
        );
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FunctionDef, LiquidDef};
    use crate::property::Property;

    #[test]
    fn linear_sweep_generation() {
        let sweep =
            SweepDefinition::new(SweepVariable::Temperature, 300.0, 400.0, 5, SweepType::Linear)
                .unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        let tol = Tolerances::default();
        assert!(nearly_equal(points[0], 300.0, tol));
        assert!(nearly_equal(points[2], 350.0, tol));
        assert!(nearly_equal(points[4], 400.0, tol));
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep =
            SweepDefinition::new(SweepVariable::Pressure, 1e5, 1e6, 3, SweepType::Logarithmic)
                .unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], 1e5);
        assert_eq!(points[2], 1e6);
        let expected_mid = (1e5_f64 * 1e6_f64).sqrt();
        assert!(nearly_equal(points[1], expected_mid, Tolerances { abs: 0.0, rel: 1e-6 }));
    }

    #[test]
    fn sweep_from_text() {
        let sweep = SweepDefinition::from_text(
            SweepVariable::Temperature,
            "20 C",
            "80 C",
            4,
            SweepType::Linear,
        )
        .unwrap();
        assert!(nearly_equal(sweep.start, 293.15, Tolerances::default()));
        assert!(nearly_equal(sweep.end, 353.15, Tolerances::default()));
    }

    #[test]
    fn reject_invalid_definitions() {
        assert_eq!(
            SweepDefinition::new(SweepVariable::Temperature, 300.0, 400.0, 1, SweepType::Linear),
            Err(SweepError::TooFewPoints(1))
        );
        assert_eq!(
            SweepDefinition::new(SweepVariable::Temperature, 300.0, 300.0, 5, SweepType::Linear),
            Err(SweepError::IdenticalBounds)
        );
        assert_eq!(
            SweepDefinition::new(SweepVariable::Pressure, 0.0, 1e5, 5, SweepType::Logarithmic),
            Err(SweepError::NonPositiveLogBounds)
        );
    }

    #[test]
    fn reject_non_finite_bounds() {
        let err =
            SweepDefinition::new(SweepVariable::Temperature, f64::NAN, 400.0, 5, SweepType::Linear)
                .unwrap_err();
        assert!(matches!(
            err,
            SweepError::Bound(CoreError::NonFinite { .. })
        ));
        assert!(
            SweepDefinition::new(
                SweepVariable::Pressure,
                1e5,
                f64::INFINITY,
                5,
                SweepType::Logarithmic
            )
            .is_err()
        );
    }

    #[test]
    fn reject_oversized_sweeps() {
        assert_eq!(
            SweepDefinition::new(
                SweepVariable::Temperature,
                300.0,
                400.0,
                usize::MAX,
                SweepType::Linear
            ),
            Err(SweepError::TooManyPoints {
                requested: usize::MAX,
                max: MAX_SWEEP_POINTS,
            })
        );
        let sweep = SweepDefinition::new(
            SweepVariable::Temperature,
            300.0,
            400.0,
            MAX_SWEEP_POINTS,
            SweepType::Linear,
        )
        .unwrap();
        assert_eq!(sweep.generate_points().len(), MAX_SWEEP_POINTS);
        assert!(matches!(
            SweepDefinition::from_text(
                SweepVariable::Pressure,
                "1 psi",
                "2 bar",
                5,
                SweepType::Linear
            ),
            Err(SweepError::Unit { which: "Start", .. })
        ));
    }

    #[test]
    fn temperature_sweep_holds_pressure_and_keeps_failures() {
        let def = Property::ALL
            .into_iter()
            .fold(LiquidDef::default(), |def, p| {
                def.with(p, FunctionDef::constant(1.0))
            })
            .with(
                Property::Rho,
                FunctionDef::new("NSRDSfunc5", vec![98.343885, 0.30542, 647.13, 0.081]),
            );
        let liquid = Liquid::from_def(&def).unwrap();
        let sweep =
            SweepDefinition::new(SweepVariable::Temperature, 300.0, 700.0, 5, SweepType::Linear)
                .unwrap();

        let points = liquid.sweep(&sweep, 101_325.0);
        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|pt| pt.p == 101_325.0));
        assert!(points[0].result.is_ok());
        // 700 K is above the critical temperature of the density correlation
        assert!(points[4].result.is_err());
    }
}
