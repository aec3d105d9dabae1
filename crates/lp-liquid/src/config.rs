//! Liquid definition schema and file I/O.
//!
//! A liquid definition names, per property, the correlation form and its
//! coefficients:
//!
//! ```yaml
//! name: H2O
//! rho:
//!   tag: NSRDSfunc5
//!   coeffs: [98.343885, 0.30542, 647.13, 0.081]
//! pv:
//!   tag: NSRDSfunc1
//!   coeffs: [73.649, -7258.2, -7.3037, 4.1653e-06, 2.0]
//! # ... one entry for each of the thirteen properties
//! ```
//!
//! Property entries are optional at the schema level so that a missing one is
//! reported by [`crate::Liquid::from_def`] with the property name.

use crate::constants::LiquidConstants;
use crate::error::{LiquidError, LiquidResult};
use crate::property::Property;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tag and coefficients of one correlation form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FunctionDef {
    pub tag: String,
    #[serde(default)]
    pub coeffs: Vec<f64>,
}

impl FunctionDef {
    pub fn new(tag: impl Into<String>, coeffs: Vec<f64>) -> Self {
        Self {
            tag: tag.into(),
            coeffs,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new("constant", vec![value])
    }
}

/// Serialized form of a [`crate::Liquid`].
///
/// Field order is the canonical property order used when writing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct LiquidDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constants: Option<LiquidConstants>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rho: Option<FunctionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pv: Option<FunctionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hl: Option<FunctionDef>,
    #[serde(rename = "Cp", default, skip_serializing_if = "Option::is_none")]
    pub cp: Option<FunctionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<FunctionDef>,
    #[serde(rename = "Cpg", default, skip_serializing_if = "Option::is_none")]
    pub cpg: Option<FunctionDef>,
    #[serde(rename = "B", default, skip_serializing_if = "Option::is_none")]
    pub b: Option<FunctionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mu: Option<FunctionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mug: Option<FunctionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kappa: Option<FunctionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kappag: Option<FunctionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigma: Option<FunctionDef>,
    #[serde(rename = "D", default, skip_serializing_if = "Option::is_none")]
    pub d: Option<FunctionDef>,
}

impl LiquidDef {
    fn slot(&self, property: Property) -> &Option<FunctionDef> {
        match property {
            Property::Rho => &self.rho,
            Property::Pv => &self.pv,
            Property::Hl => &self.hl,
            Property::Cp => &self.cp,
            Property::H => &self.h,
            Property::Cpg => &self.cpg,
            Property::B => &self.b,
            Property::Mu => &self.mu,
            Property::Mug => &self.mug,
            Property::Kappa => &self.kappa,
            Property::Kappag => &self.kappag,
            Property::Sigma => &self.sigma,
            Property::D => &self.d,
        }
    }

    fn slot_mut(&mut self, property: Property) -> &mut Option<FunctionDef> {
        match property {
            Property::Rho => &mut self.rho,
            Property::Pv => &mut self.pv,
            Property::Hl => &mut self.hl,
            Property::Cp => &mut self.cp,
            Property::H => &mut self.h,
            Property::Cpg => &mut self.cpg,
            Property::B => &mut self.b,
            Property::Mu => &mut self.mu,
            Property::Mug => &mut self.mug,
            Property::Kappa => &mut self.kappa,
            Property::Kappag => &mut self.kappag,
            Property::Sigma => &mut self.sigma,
            Property::D => &mut self.d,
        }
    }

    pub fn get(&self, property: Property) -> Option<&FunctionDef> {
        self.slot(property).as_ref()
    }

    pub fn set(&mut self, property: Property, def: FunctionDef) {
        *self.slot_mut(property) = Some(def);
    }

    pub fn remove(&mut self, property: Property) -> Option<FunctionDef> {
        self.slot_mut(property).take()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, property: Property, def: FunctionDef) -> Self {
        self.set(property, def);
        self
    }

    /// Properties that have no entry, in canonical order.
    pub fn missing(&self) -> Vec<Property> {
        Property::ALL
            .into_iter()
            .filter(|p| self.get(*p).is_none())
            .collect()
    }
}

pub fn from_yaml_str(content: &str) -> LiquidResult<LiquidDef> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn to_yaml_string(def: &LiquidDef) -> LiquidResult<String> {
    Ok(serde_yaml::to_string(def)?)
}

pub fn from_json_str(content: &str) -> LiquidResult<LiquidDef> {
    Ok(serde_json::from_str(content)?)
}

pub fn to_json_string(def: &LiquidDef) -> LiquidResult<String> {
    Ok(serde_json::to_string_pretty(def)?)
}

pub fn load_yaml(path: &Path) -> LiquidResult<LiquidDef> {
    let content = std::fs::read_to_string(path)?;
    let def = from_yaml_str(&content)?;
    tracing::info!(path = %path.display(), name = ?def.name, "loaded liquid definition");
    Ok(def)
}

pub fn save_yaml(path: &Path, def: &LiquidDef) -> LiquidResult<()> {
    std::fs::write(path, to_yaml_string(def)?)?;
    tracing::info!(path = %path.display(), "saved liquid definition");
    Ok(())
}

pub fn load_json(path: &Path) -> LiquidResult<LiquidDef> {
    let content = std::fs::read_to_string(path)?;
    let def = from_json_str(&content)?;
    tracing::info!(path = %path.display(), name = ?def.name, "loaded liquid definition");
    Ok(def)
}

pub fn save_json(path: &Path, def: &LiquidDef) -> LiquidResult<()> {
    std::fs::write(path, to_json_string(def)?)?;
    tracing::info!(path = %path.display(), "saved liquid definition");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Pick the format from a file extension (`.yaml`, `.yml`, `.json`).
    pub fn from_path(path: &Path) -> LiquidResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(LiquidError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Load a definition, choosing YAML or JSON by extension.
pub fn load(path: &Path) -> LiquidResult<LiquidDef> {
    match FileFormat::from_path(path)? {
        FileFormat::Yaml => load_yaml(path),
        FileFormat::Json => load_json(path),
    }
}

/// Save a definition, choosing YAML or JSON by extension.
pub fn save(path: &Path, def: &LiquidDef) -> LiquidResult<()> {
    match FileFormat::from_path(path)? {
        FileFormat::Yaml => save_yaml(path, def),
        FileFormat::Json => save_json(path, def),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_definition_misses_everything() {
        assert_eq!(LiquidDef::default().missing(), Property::ALL.to_vec());
    }

    #[test]
    fn set_get_remove() {
        let mut def = LiquidDef::default().with(Property::Cp, FunctionDef::constant(4180.0));
        assert_eq!(def.get(Property::Cp), Some(&FunctionDef::constant(4180.0)));
        assert!(def.get(Property::Cpg).is_none());
        assert_eq!(def.remove(Property::Cp), Some(FunctionDef::constant(4180.0)));
        assert!(def.get(Property::Cp).is_none());
    }

    #[test]
    fn yaml_uses_property_keys() {
        let def = LiquidDef::default()
            .with(Property::Cp, FunctionDef::constant(4180.0))
            .with(Property::D, FunctionDef::constant(2.5e-5));
        let yaml = to_yaml_string(&def).unwrap();
        assert!(yaml.contains("Cp:"));
        assert!(yaml.contains("D:"));
        assert!(!yaml.contains("rho:"));
        assert_eq!(from_yaml_str(&yaml).unwrap(), def);
    }

    #[test]
    fn rejects_unknown_keys() {
        let yaml = "cp:\n  tag: constant\n  coeffs: [4180.0]\n";
        assert!(matches!(from_yaml_str(yaml), Err(LiquidError::Yaml(_))));
    }

    #[test]
    fn file_format_from_extension() {
        assert_eq!(
            FileFormat::from_path(Path::new("water.yml")).unwrap(),
            FileFormat::Yaml
        );
        assert_eq!(
            FileFormat::from_path(Path::new("water.JSON")).unwrap(),
            FileFormat::Json
        );
        assert!(FileFormat::from_path(Path::new("water.toml")).is_err());
    }
}
