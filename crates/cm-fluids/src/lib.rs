//! cm-fluids: refrigerant property evaluation for the compressor map model.
//!
//! Provides:
//! - Refrigerant identifiers (pure fluids and predefined blends)
//! - Thermodynamic state representation
//! - FluidModel trait for property queries
//! - CoolProp backend for real fluid properties
//!
//! # Architecture
//!
//! This crate defines a stable API (`FluidModel` trait) that isolates the
//! compressor model from backend dependencies. Currently, CoolProp (via
//! `rfluids`) is the primary backend, but the trait allows substitution with
//! a different property database or a deterministic test double.
//!
//! # Example
//!
//! ```no_run
//! use cm_fluids::{CoolPropModel, FluidModel, Refrigerant, StateInput};
//! use cm_core::units::{k, pa};
//!
//! let model = CoolPropModel::new();
//! let suction = model
//!     .state(
//!         StateInput::PT {
//!             p: pa(1_400_000.0),
//!             t: k(304.26),
//!         },
//!         Refrigerant::R410A,
//!     )
//!     .unwrap();
//! let rho = model.rho(&suction).unwrap();
//! println!("Density: {} kg/m³", rho.value);
//! ```

pub mod coolprop;
pub mod error;
pub mod model;
pub mod refrigerant;
pub mod state;

// Re-exports for ergonomics
pub use coolprop::CoolPropModel;
pub use error::{FluidError, FluidResult};
pub use model::FluidModel;
pub use refrigerant::Refrigerant;
pub use state::{SpecEnthalpy, SpecEntropy, StateInput, ThermoState};
