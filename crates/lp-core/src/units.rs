// lp-core/src/units.rs

use uom::si::f64::{
    AvailableEnergy as UomAvailableEnergy, DynamicViscosity as UomDynamicViscosity,
    MassDensity as UomMassDensity, Pressure as UomPressure,
    SpecificHeatCapacity as UomSpecificHeatCapacity,
    ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type DynVisc = UomDynamicViscosity;
pub type Pressure = UomPressure;
pub type SpecEnthalpy = UomAvailableEnergy;
pub type SpecHeatCapacity = UomSpecificHeatCapacity;
pub type Temperature = UomThermodynamicTemperature;
pub type ThermalCond = UomThermalConductivity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn j_per_kg(v: f64) -> SpecEnthalpy {
    use uom::si::available_energy::joule_per_kilogram;
    SpecEnthalpy::new::<joule_per_kilogram>(v)
}

#[inline]
pub fn j_per_kg_k(v: f64) -> SpecHeatCapacity {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecHeatCapacity::new::<joule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn w_per_m_k(v: f64) -> ThermalCond {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalCond::new::<watt_per_meter_kelvin>(v)
}

pub mod constants {
    /// Standard atmosphere [Pa]
    pub const P_STD_PA: f64 = 101_325.0;

    /// Universal gas constant [J/(kmol·K)]
    pub const R_UNIVERSAL: f64 = 8_314.462_618;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_store_si_values() {
        assert_eq!(pa(101_325.0).value, 101_325.0);
        assert_eq!(k(300.0).value, 300.0);
        assert_eq!(kg_per_m3(998.0).value, 998.0);
        assert_eq!(pa_s(1e-3).value, 1e-3);
        assert_eq!(j_per_kg(2.2e6).value, 2.2e6);
        assert_eq!(j_per_kg_k(4180.0).value, 4180.0);
        assert_eq!(w_per_m_k(0.6).value, 0.6);
    }
}
