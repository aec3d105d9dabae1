//! Unit-aware parsing of state inputs.
//!
//! Property functions work in SI only; this module turns user text such as
//! `"25 C"` or `"14.7 psia"` into canonical SI values at the input boundary.

use std::fmt;
use thiserror::Error;

/// Quantity family of a parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: K)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Molar mass (canonical: kg/kmol)
    MolarMass,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::MolarMass => write!(f, "Molar Mass"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },

    #[error("Ambiguous unit '{unit}': {reason}")]
    AmbiguousUnit { unit: String, reason: &'static str },

    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: &'static str },
}

/// Parse `raw_text` as `quantity` and return the value in canonical SI units.
///
/// A bare number is taken to already be in canonical units.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let (value, raw_unit) = split_value_and_unit(raw_text)?;
    let unit = raw_unit.to_lowercase();

    let si = match quantity {
        Quantity::Temperature => parse_temperature(value, &unit)?,
        // Prefix case matters here: "mPa" is milli-, "MPa" is mega-.
        Quantity::Pressure if raw_unit == "mPa" => parse_pressure(value * 1e-3, "pa")?,
        Quantity::Pressure => parse_pressure(value, &unit)?,
        Quantity::MolarMass => parse_molar_mass(value, &unit)?,
    };
    if !si.is_finite() {
        return Err(UnitError::OutOfRange {
            value: si,
            reason: "Value must be finite",
        });
    }
    Ok(si)
}

fn unknown(unit: &str, quantity: Quantity) -> UnitError {
    UnitError::UnknownUnit {
        unit: unit.to_string(),
        quantity,
    }
}

fn parse_temperature(value: f64, unit: &str) -> Result<f64, UnitError> {
    let kelvin = match unit {
        "" | "k" | "kelvin" => value,
        "c" | "°c" | "celsius" => value + 273.15,
        "f" | "°f" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "rankine" => value * 5.0 / 9.0,
        _ => return Err(unknown(unit, Quantity::Temperature)),
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K",
        });
    }
    Ok(kelvin)
}

fn parse_pressure(value: f64, unit: &str) -> Result<f64, UnitError> {
    let pa = match unit {
        "" | "pa" | "pascal" => value,
        "kpa" => value * 1e3,
        "mpa" => value * 1e6,
        "bar" => value * 1e5,
        "mbar" | "millibar" => value * 100.0,
        "atm" => value * 101_325.0,
        "torr" => value * 133.322,
        "psia" => value * 6_894.76,
        "psig" => (value + 14.696) * 6_894.76,
        "barg" => (value + 1.0) * 1e5,
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "psi".to_string(),
                reason: "Use 'psia' (absolute) or 'psig' (gauge)",
            });
        }
        _ => return Err(unknown(unit, Quantity::Pressure)),
    };

    if pa < 0.0 {
        return Err(UnitError::OutOfRange {
            value: pa,
            reason: "Absolute pressure cannot be negative",
        });
    }
    Ok(pa)
}

fn parse_molar_mass(value: f64, unit: &str) -> Result<f64, UnitError> {
    let kg_kmol = match unit {
        "" | "kg/kmol" | "g/mol" => value,
        "kg/mol" => value * 1e3,
        _ => return Err(unknown(unit, Quantity::MolarMass)),
    };

    if kg_kmol <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kg_kmol,
            reason: "Molar mass must be positive",
        });
    }
    Ok(kg_kmol)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "70F" -> (70.0, "F")
/// - "14.7 psia" -> (14.7, "psia")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, &str), UnitError> {
    let trimmed = input.trim();

    // Exponent markers only count when followed by a digit or sign, so "1e5" parses
    // while "300 kelvin" does not swallow the 'e'.
    let bytes = trimmed.as_bytes();
    let mut split_idx = trimmed.len();
    for (i, c) in trimmed.char_indices() {
        let numeric = c.is_ascii_digit() || c == '.' || c == '-' || c == '+';
        let exponent = (c == 'e' || c == 'E')
            && i > 0
            && bytes
                .get(i + 1)
                .is_some_and(|n| n.is_ascii_digit() || *n == b'-' || *n == b'+');
        if !numeric && !exponent {
            split_idx = i;
            break;
        }
    }

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let value: f64 = num_part
        .trim()
        .parse()
        .map_err(|_| UnitError::Parse(format!("Could not parse numeric value from '{input}'")))?;

    Ok((value, unit_part.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_core::{Tolerances, nearly_equal};

    #[test]
    fn parse_kelvin() {
        assert_eq!(parse_quantity("300 K", Quantity::Temperature).unwrap(), 300.0);
        assert_eq!(parse_quantity("300K", Quantity::Temperature).unwrap(), 300.0);
        assert_eq!(parse_quantity("300", Quantity::Temperature).unwrap(), 300.0);
    }

    #[test]
    fn parse_celsius_and_fahrenheit() {
        let c0 = parse_quantity("0C", Quantity::Temperature).unwrap();
        assert!(nearly_equal(c0, 273.15, Tolerances::default()));
        let freezing = parse_quantity("32 F", Quantity::Temperature).unwrap();
        assert!(nearly_equal(freezing, 273.15, Tolerances::default()));
    }

    #[test]
    fn reject_non_positive_temperature() {
        assert!(matches!(
            parse_quantity("-300 C", Quantity::Temperature),
            Err(UnitError::OutOfRange { .. })
        ));
    }

    #[test]
    fn parse_pressure_units() {
        assert_eq!(parse_quantity("101325 Pa", Quantity::Pressure).unwrap(), 101_325.0);
        assert_eq!(parse_quantity("1 bar", Quantity::Pressure).unwrap(), 1e5);
        assert_eq!(parse_quantity("1 atm", Quantity::Pressure).unwrap(), 101_325.0);
        assert_eq!(parse_quantity("1e5", Quantity::Pressure).unwrap(), 1e5);
        assert_eq!(parse_quantity("2.5 MPa", Quantity::Pressure).unwrap(), 2.5e6);
    }

    #[test]
    fn milli_and_mega_pascal_are_distinct() {
        assert_eq!(parse_quantity("1 MPa", Quantity::Pressure).unwrap(), 1e6);
        assert_eq!(parse_quantity("1 mPa", Quantity::Pressure).unwrap(), 1e-3);
    }

    #[test]
    fn reject_overflowing_values() {
        for quantity in [Quantity::Temperature, Quantity::Pressure, Quantity::MolarMass] {
            assert!(
                matches!(
                    parse_quantity("1e400", quantity),
                    Err(UnitError::OutOfRange { .. })
                ),
                "{quantity} accepted an infinite value"
            );
        }
    }

    #[test]
    fn reject_plain_psi() {
        assert!(matches!(
            parse_quantity("14.7 psi", Quantity::Pressure),
            Err(UnitError::AmbiguousUnit { unit, .. }) if unit == "psi"
        ));
    }

    #[test]
    fn unknown_unit_names_quantity() {
        let err = parse_quantity("3 furlongs", Quantity::Pressure).unwrap_err();
        assert_eq!(
            err,
            UnitError::UnknownUnit {
                unit: "furlongs".into(),
                quantity: Quantity::Pressure
            }
        );
        assert!(err.to_string().contains("Absolute Pressure"));
    }

    #[test]
    fn parse_molar_mass_units() {
        assert_eq!(parse_quantity("28.96", Quantity::MolarMass).unwrap(), 28.96);
        assert_eq!(parse_quantity("28.96 g/mol", Quantity::MolarMass).unwrap(), 28.96);
        assert!(parse_quantity("0", Quantity::MolarMass).is_err());
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            parse_quantity("warm", Quantity::Temperature),
            Err(UnitError::Parse(_))
        ));
    }
}
