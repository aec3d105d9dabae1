//! Liquid with run-time selected property functions.

use crate::config::LiquidDef;
use crate::constants::LiquidConstants;
use crate::error::{LiquidError, LiquidResult};
use crate::function::ThermophysicalFunction;
use crate::property::Property;
use crate::registry::FunctionRegistry;

/// Thermophysical properties of one liquid species.
///
/// Every property slot owns its own function; two slots built from identical
/// definitions still hold separate instances. All queries take pressure `p` [Pa]
/// and temperature `t` [K] and forward them unchanged to the slot's function.
/// Errors raised by a function are returned tagged with the property name.
///
/// `Clone` is deep: each slot's function is cloned into a new box.
#[derive(Debug, Clone)]
pub struct Liquid {
    name: Option<String>,
    constants: Option<LiquidConstants>,
    rho: Box<dyn ThermophysicalFunction>,
    pv: Box<dyn ThermophysicalFunction>,
    hl: Box<dyn ThermophysicalFunction>,
    cp: Box<dyn ThermophysicalFunction>,
    h: Box<dyn ThermophysicalFunction>,
    cpg: Box<dyn ThermophysicalFunction>,
    b: Box<dyn ThermophysicalFunction>,
    mu: Box<dyn ThermophysicalFunction>,
    mug: Box<dyn ThermophysicalFunction>,
    kappa: Box<dyn ThermophysicalFunction>,
    kappag: Box<dyn ThermophysicalFunction>,
    sigma: Box<dyn ThermophysicalFunction>,
    d: Box<dyn ThermophysicalFunction>,
}

impl Liquid {
    /// Build from a definition using the built-in forms.
    pub fn from_def(def: &LiquidDef) -> LiquidResult<Self> {
        Self::from_def_with(FunctionRegistry::builtin(), def)
    }

    /// Build from a definition, resolving forms in `registry`.
    ///
    /// Fails on the first property that is missing or cannot be built; no
    /// partially built liquid is ever returned.
    pub fn from_def_with(registry: &FunctionRegistry, def: &LiquidDef) -> LiquidResult<Self> {
        if let Some(constants) = &def.constants {
            constants.validate()?;
        }

        let resolve = |property: Property| -> LiquidResult<Box<dyn ThermophysicalFunction>> {
            let fdef = def
                .get(property)
                .ok_or(LiquidError::MissingProperty { property })?;
            let function = registry
                .construct(fdef)
                .map_err(|e| LiquidError::function(property, e))?;
            tracing::debug!(
                property = property.key(),
                tag = %fdef.tag,
                coeffs = fdef.coeffs.len(),
                "resolved property function"
            );
            Ok(function)
        };

        Ok(Self {
            name: def.name.clone(),
            constants: def.constants,
            rho: resolve(Property::Rho)?,
            pv: resolve(Property::Pv)?,
            hl: resolve(Property::Hl)?,
            cp: resolve(Property::Cp)?,
            h: resolve(Property::H)?,
            cpg: resolve(Property::Cpg)?,
            b: resolve(Property::B)?,
            mu: resolve(Property::Mu)?,
            mug: resolve(Property::Mug)?,
            kappa: resolve(Property::Kappa)?,
            kappag: resolve(Property::Kappag)?,
            sigma: resolve(Property::Sigma)?,
            d: resolve(Property::D)?,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn constants(&self) -> Option<&LiquidConstants> {
        self.constants.as_ref()
    }

    /// The function owned by a property slot.
    pub fn function(&self, property: Property) -> &dyn ThermophysicalFunction {
        let slot = match property {
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
        };
        slot.as_ref()
    }

    /// Evaluate any property by name.
    pub fn evaluate(&self, property: Property, p: f64, t: f64) -> LiquidResult<f64> {
        self.function(property)
            .f(p, t)
            .map_err(|e| LiquidError::function(property, e))
    }

    fn eval(
        &self,
        property: Property,
        f: &dyn ThermophysicalFunction,
        p: f64,
        t: f64,
    ) -> LiquidResult<f64> {
        f.f(p, t).map_err(|e| LiquidError::function(property, e))
    }

    /// Liquid density [kg/m^3]
    pub fn rho(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::Rho, self.rho.as_ref(), p, t)
    }

    /// Vapour pressure [Pa]
    pub fn pv(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::Pv, self.pv.as_ref(), p, t)
    }

    /// Heat of vaporisation [J/kg]
    pub fn hl(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::Hl, self.hl.as_ref(), p, t)
    }

    /// Liquid heat capacity [J/(kg K)]
    pub fn cp(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::Cp, self.cp.as_ref(), p, t)
    }

    /// Liquid enthalpy [J/kg]
    pub fn h(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::H, self.h.as_ref(), p, t)
    }

    /// Ideal gas heat capacity [J/(kg K)]
    pub fn cpg(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::Cpg, self.cpg.as_ref(), p, t)
    }

    /// Second virial coefficient [m^3/kg]
    pub fn b(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::B, self.b.as_ref(), p, t)
    }

    /// Liquid viscosity [Pa s]
    pub fn mu(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::Mu, self.mu.as_ref(), p, t)
    }

    /// Vapour viscosity [Pa s]
    pub fn mug(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::Mug, self.mug.as_ref(), p, t)
    }

    /// Liquid thermal conductivity [W/(m K)]
    pub fn kappa(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::Kappa, self.kappa.as_ref(), p, t)
    }

    /// Vapour thermal conductivity [W/(m K)]
    pub fn kappag(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::Kappag, self.kappag.as_ref(), p, t)
    }

    /// Surface tension [N/m]
    pub fn sigma(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::Sigma, self.sigma.as_ref(), p, t)
    }

    /// Vapour diffusivity [m^2/s]
    pub fn d(&self, p: f64, t: f64) -> LiquidResult<f64> {
        self.eval(Property::D, self.d.as_ref(), p, t)
    }

    /// Vapour diffusivity [m^2/s] against a binary partner of molecular weight `wb` [kg/kmol]
    pub fn d_binary(&self, p: f64, t: f64, wb: f64) -> LiquidResult<f64> {
        self.d
            .f_binary(p, t, wb)
            .map_err(|e| LiquidError::function(Property::D, e))
    }

    /// Write every slot back to a definition, in canonical property order.
    pub fn write(&self) -> LiquidDef {
        let mut def = LiquidDef {
            name: self.name.clone(),
            constants: self.constants,
            ..LiquidDef::default()
        };
        for property in Property::ALL {
            def.set(property, self.function(property).to_def());
        }
        def
    }
}
