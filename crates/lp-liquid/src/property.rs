//! Physical property catalogue.

use std::fmt;
use std::str::FromStr;

/// One of the thirteen property slots of a liquid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    /// Liquid density
    Rho,
    /// Vapour pressure
    Pv,
    /// Heat of vaporisation
    Hl,
    /// Liquid heat capacity
    Cp,
    /// Liquid enthalpy
    H,
    /// Ideal gas heat capacity
    Cpg,
    /// Second virial coefficient
    B,
    /// Liquid viscosity
    Mu,
    /// Vapour viscosity
    Mug,
    /// Liquid thermal conductivity
    Kappa,
    /// Vapour thermal conductivity
    Kappag,
    /// Surface tension
    Sigma,
    /// Vapour diffusivity
    D,
}

impl Property {
    /// All properties in canonical (write) order.
    pub const ALL: [Property; 13] = [
        Property::Rho,
        Property::Pv,
        Property::Hl,
        Property::Cp,
        Property::H,
        Property::Cpg,
        Property::B,
        Property::Mu,
        Property::Mug,
        Property::Kappa,
        Property::Kappag,
        Property::Sigma,
        Property::D,
    ];

    /// Key used in liquid definition files.
    pub fn key(&self) -> &'static str {
        match self {
            Property::Rho => "rho",
            Property::Pv => "pv",
            Property::Hl => "hl",
            Property::Cp => "Cp",
            Property::H => "h",
            Property::Cpg => "Cpg",
            Property::B => "B",
            Property::Mu => "mu",
            Property::Mug => "mug",
            Property::Kappa => "kappa",
            Property::Kappag => "kappag",
            Property::Sigma => "sigma",
            Property::D => "D",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Property::Rho => "liquid density",
            Property::Pv => "vapour pressure",
            Property::Hl => "heat of vaporisation",
            Property::Cp => "liquid heat capacity",
            Property::H => "liquid enthalpy",
            Property::Cpg => "ideal gas heat capacity",
            Property::B => "second virial coefficient",
            Property::Mu => "liquid viscosity",
            Property::Mug => "vapour viscosity",
            Property::Kappa => "liquid thermal conductivity",
            Property::Kappag => "vapour thermal conductivity",
            Property::Sigma => "surface tension",
            Property::D => "vapour diffusivity",
        }
    }

    /// SI unit of the value returned for this property.
    pub fn unit(&self) -> &'static str {
        match self {
            Property::Rho => "kg/m^3",
            Property::Pv => "Pa",
            Property::Hl | Property::H => "J/kg",
            Property::Cp | Property::Cpg => "J/(kg K)",
            Property::B => "m^3/kg",
            Property::Mu | Property::Mug => "Pa s",
            Property::Kappa | Property::Kappag => "W/(m K)",
            Property::Sigma => "N/m",
            Property::D => "m^2/s",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Property {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .iter()
            .copied()
            .find(|p| p.key() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Property::ALL.iter().map(Property::key).collect();
                format!("unknown property '{}' (expected one of {})", s, known.join(", "))
            })
    }
}
