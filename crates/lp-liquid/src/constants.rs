//! Scalar physical constants of a liquid species.

use lp_core::{CoreResult, ensure_finite, ensure_positive};
use serde::{Deserialize, Serialize};

/// Critical, triple-point and molecular constants.
///
/// Carried alongside the property functions; the functions never read them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LiquidConstants {
    /// Molecular weight [kg/kmol]
    #[serde(rename = "W")]
    pub w: f64,
    /// Critical temperature [K]
    #[serde(rename = "Tc")]
    pub tc: f64,
    /// Critical pressure [Pa]
    #[serde(rename = "Pc")]
    pub pc: f64,
    /// Critical volume [m^3/kmol]
    #[serde(rename = "Vc")]
    pub vc: f64,
    /// Critical compressibility factor
    #[serde(rename = "Zc")]
    pub zc: f64,
    /// Triple point temperature [K]
    #[serde(rename = "Tt")]
    pub tt: f64,
    /// Triple point pressure [Pa]
    #[serde(rename = "Pt")]
    pub pt: f64,
    /// Normal boiling temperature [K]
    #[serde(rename = "Tb")]
    pub tb: f64,
    /// Dipole moment [C m]
    pub dipm: f64,
    /// Pitzer acentric factor
    pub omega: f64,
    /// Solubility parameter [(J/m^3)^0.5]
    pub delta: f64,
}

impl LiquidConstants {
    /// Check every constant is finite and `W`, `Tc`, `Pc` are positive.
    pub fn validate(&self) -> CoreResult<()> {
        ensure_positive(self.w, "W")?;
        ensure_positive(self.tc, "Tc")?;
        ensure_positive(self.pc, "Pc")?;
        for (value, what) in [
            (self.vc, "Vc"),
            (self.zc, "Zc"),
            (self.tt, "Tt"),
            (self.pt, "Pt"),
            (self.tb, "Tb"),
            (self.dipm, "dipm"),
            (self.omega, "omega"),
            (self.delta, "delta"),
        ] {
            ensure_finite(value, what)?;
        }
        Ok(())
    }

    /// Reduced temperature `T / Tc`.
    pub fn reduced_temperature(&self, t: f64) -> f64 {
        t / self.tc
    }

    /// Specific gas constant [J/(kg K)].
    pub fn gas_constant(&self) -> f64 {
        lp_core::constants::R_UNIVERSAL / self.w
    }
}
