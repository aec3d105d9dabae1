//! Run-time selection table for correlation forms.

use crate::config::FunctionDef;
use crate::error::{FunctionError, FunctionResult};
use crate::function::ThermophysicalFunction;
use crate::functions::{
    ApiDiffCoefFunc, Constant, NsrdsFunc0, NsrdsFunc1, NsrdsFunc2, NsrdsFunc3, NsrdsFunc4,
    NsrdsFunc5, NsrdsFunc6, NsrdsFunc7, NsrdsFunc14, Polynomial,
};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Builds a form from its coefficient list.
pub type FunctionConstructor = fn(&[f64]) -> FunctionResult<Box<dyn ThermophysicalFunction>>;

/// Registry mapping form tags to constructors.
///
/// Tags match exactly (case-sensitive). Use [`FunctionRegistry::builtin`] for the
/// shipped forms, or clone it and [`register`](FunctionRegistry::register) extra
/// forms before building a liquid with [`crate::Liquid::from_def_with`].
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    constructors: HashMap<String, FunctionConstructor>,
}

/// A form resolved under a tag other than its own built-in one.
///
/// Reports the resolved tag so the slot writes back under the name it was
/// configured with.
#[derive(Debug, Clone)]
struct Registered {
    tag: String,
    inner: Box<dyn ThermophysicalFunction>,
}

impl ThermophysicalFunction for Registered {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn coeffs(&self) -> &[f64] {
        self.inner.coeffs()
    }

    fn f(&self, p: f64, t: f64) -> FunctionResult<f64> {
        self.inner.f(p, t)
    }

    fn f_binary(&self, p: f64, t: f64, wb: f64) -> FunctionResult<f64> {
        self.inner.f_binary(p, t, wb)
    }

    fn clone_box(&self) -> Box<dyn ThermophysicalFunction> {
        Box::new(self.clone())
    }
}

fn boxed<F: ThermophysicalFunction + 'static>(
    built: FunctionResult<F>,
) -> FunctionResult<Box<dyn ThermophysicalFunction>> {
    built.map(|f| Box::new(f) as Box<dyn ThermophysicalFunction>)
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in form.
    pub fn builtin() -> &'static FunctionRegistry {
        static BUILTIN: OnceLock<FunctionRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut r = FunctionRegistry::new();
            r.register(Constant::TAG, |c| boxed(Constant::from_coeffs(c)));
            r.register(Polynomial::TAG, |c| boxed(Polynomial::from_coeffs(c)));
            r.register(NsrdsFunc0::TAG, |c| boxed(NsrdsFunc0::from_coeffs(c)));
            r.register(NsrdsFunc1::TAG, |c| boxed(NsrdsFunc1::from_coeffs(c)));
            r.register(NsrdsFunc2::TAG, |c| boxed(NsrdsFunc2::from_coeffs(c)));
            r.register(NsrdsFunc3::TAG, |c| boxed(NsrdsFunc3::from_coeffs(c)));
            r.register(NsrdsFunc4::TAG, |c| boxed(NsrdsFunc4::from_coeffs(c)));
            r.register(NsrdsFunc5::TAG, |c| boxed(NsrdsFunc5::from_coeffs(c)));
            r.register(NsrdsFunc6::TAG, |c| boxed(NsrdsFunc6::from_coeffs(c)));
            r.register(NsrdsFunc7::TAG, |c| boxed(NsrdsFunc7::from_coeffs(c)));
            r.register(NsrdsFunc14::TAG, |c| boxed(NsrdsFunc14::from_coeffs(c)));
            r.register(ApiDiffCoefFunc::TAG, |c| {
                boxed(ApiDiffCoefFunc::from_coeffs(c))
            });
            r
        })
    }

    /// Register (or replace) the constructor for a tag.
    pub fn register(&mut self, tag: impl Into<String>, constructor: FunctionConstructor) {
        self.constructors.insert(tag.into(), constructor);
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Build the form named by `def.tag` from `def.coeffs`.
    ///
    /// The built form always reports `def.tag` as its tag, even when the
    /// constructor was registered for a form with a different built-in name.
    pub fn construct(&self, def: &FunctionDef) -> FunctionResult<Box<dyn ThermophysicalFunction>> {
        let constructor = self
            .constructors
            .get(&def.tag)
            .ok_or_else(|| FunctionError::UnknownForm {
                tag: def.tag.clone(),
            })?;
        let inner = constructor(&def.coeffs)?;
        if inner.tag() == def.tag {
            Ok(inner)
        } else {
            Ok(Box::new(Registered {
                tag: def.tag.clone(),
                inner,
            }))
        }
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}
