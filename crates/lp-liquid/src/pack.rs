//! All thirteen properties of a liquid evaluated at one state.

use crate::error::LiquidResult;
use crate::liquid::Liquid;
use lp_core::units::{
    Density, DynVisc, Pressure, SpecEnthalpy, SpecHeatCapacity, Temperature, ThermalCond,
    j_per_kg, j_per_kg_k, k, kg_per_m3, pa, pa_s, w_per_m_k,
};

/// Property values at a single (p, T) state.
///
/// Quantities with a uom type are stored typed; the rest are plain SI values.
#[derive(Clone, Debug)]
pub struct LiquidPropertyPack {
    /// Pressure [Pa]
    pub p: Pressure,
    /// Temperature [K]
    pub t: Temperature,
    /// Liquid density [kg/m³]
    pub rho: Density,
    /// Vapour pressure [Pa]
    pub pv: Pressure,
    /// Heat of vaporisation [J/kg]
    pub hl: SpecEnthalpy,
    /// Liquid heat capacity [J/(kg·K)]
    pub cp: SpecHeatCapacity,
    /// Liquid enthalpy [J/kg]
    pub h: SpecEnthalpy,
    /// Ideal gas heat capacity [J/(kg·K)]
    pub cpg: SpecHeatCapacity,
    /// Second virial coefficient [m³/kg]
    pub b: f64,
    /// Liquid viscosity [Pa·s]
    pub mu: DynVisc,
    /// Vapour viscosity [Pa·s]
    pub mug: DynVisc,
    /// Liquid thermal conductivity [W/(m·K)]
    pub kappa: ThermalCond,
    /// Vapour thermal conductivity [W/(m·K)]
    pub kappag: ThermalCond,
    /// Surface tension [N/m]
    pub sigma: f64,
    /// Vapour diffusivity [m²/s]
    pub d: f64,
}

impl LiquidPropertyPack {
    /// Return a summary string of the main properties (for logging).
    pub fn summary(&self) -> String {
        format!(
            "Pack(P={:.0}Pa,T={:.2}K,ρ={:.2}kg/m³,pv={:.1}Pa,hl={:.0}J/kg,cp={:.1}J/kg·K,μ={:.3e}Pa·s,σ={:.4}N/m)",
            self.p.value,
            self.t.value,
            self.rho.value,
            self.pv.value,
            self.hl.value,
            self.cp.value,
            self.mu.value,
            self.sigma
        )
    }
}

impl Liquid {
    /// Evaluate every property at (p [Pa], t [K]); fails on the first property that fails.
    pub fn property_pack(&self, p: f64, t: f64) -> LiquidResult<LiquidPropertyPack> {
        Ok(LiquidPropertyPack {
            p: pa(p),
            t: k(t),
            rho: kg_per_m3(self.rho(p, t)?),
            pv: pa(self.pv(p, t)?),
            hl: j_per_kg(self.hl(p, t)?),
            cp: j_per_kg_k(self.cp(p, t)?),
            h: j_per_kg(self.h(p, t)?),
            cpg: j_per_kg_k(self.cpg(p, t)?),
            b: self.b(p, t)?,
            mu: pa_s(self.mu(p, t)?),
            mug: pa_s(self.mug(p, t)?),
            kappa: w_per_m_k(self.kappa(p, t)?),
            kappag: w_per_m_k(self.kappag(p, t)?),
            sigma: self.sigma(p, t)?,
            d: self.d(p, t)?,
        })
    }
}
