//! Built-in correlation forms.
//!
//! Every form is registered in [`crate::FunctionRegistry::builtin`] under its `TAG`.

pub mod api_diff_coef;
pub mod constant;
pub mod nsrds;
pub mod polynomial;

pub use api_diff_coef::ApiDiffCoefFunc;
pub use constant::Constant;
pub use nsrds::{
    NsrdsFunc0, NsrdsFunc1, NsrdsFunc2, NsrdsFunc3, NsrdsFunc4, NsrdsFunc5, NsrdsFunc6,
    NsrdsFunc7, NsrdsFunc14,
};
pub use polynomial::Polynomial;
