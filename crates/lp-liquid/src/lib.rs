//! lp-liquid: run-time selected thermophysical properties of a single liquid.
//!
//! Provides:
//! - `ThermophysicalFunction` trait: a scalar function of (p, T)
//! - Built-in correlation forms (constant, polynomial, NSRDS family, API diffusivity)
//! - `FunctionRegistry` resolving forms by tag
//! - `Liquid`: one owned function per physical property, with typed queries
//! - `LiquidDef`: the YAML/JSON configuration a `Liquid` is built from and written back to
//!
//! # Architecture
//!
//! Each of the thirteen property slots owns a boxed function chosen at construction
//! time. Queries are a direct forward to the owned function, so the mapping from
//! property to correlation is fixed once the `Liquid` exists.
//!
//! # Example
//!
//! ```no_run
//! use lp_liquid::{Liquid, config};
//!
//! let def = config::load_yaml(std::path::Path::new("liquids/H2O.yaml")).unwrap();
//! let water = Liquid::from_def(&def).unwrap();
//! let rho = water.rho(101_325.0, 300.0).unwrap();
//! println!("Density: {rho} kg/m³");
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod function;
pub mod functions;
pub mod liquid;
pub mod pack;
pub mod property;
pub mod registry;
pub mod sweeps;
pub mod units;

// Re-exports for ergonomics
pub use config::{FunctionDef, LiquidDef};
pub use constants::LiquidConstants;
pub use error::{FunctionError, FunctionResult, LiquidError, LiquidResult};
pub use function::ThermophysicalFunction;
pub use liquid::Liquid;
pub use pack::LiquidPropertyPack;
pub use property::Property;
pub use registry::{FunctionConstructor, FunctionRegistry};
pub use sweeps::{
    MAX_SWEEP_POINTS, SweepDefinition, SweepError, SweepPoint, SweepType, SweepVariable,
};
pub use units::{Quantity, UnitError, parse_quantity};
