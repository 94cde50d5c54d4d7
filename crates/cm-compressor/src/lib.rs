//! cm-compressor: AHRI-540 map-based compressor performance model.
//!
//! A compressor is described by two ten-coefficient bivariate polynomials in
//! evaporating and condensing saturation temperature (the manufacturer map
//! convention), plus a heat loss fraction and a displacement scale factor.
//! Evaluation corrects the raw map outputs for the actual suction superheat
//! and closes the energy balance to a full discharge state.
//!
//! Property queries go through the `FluidModel` trait from `cm-fluids`, so
//! the same model runs against the CoolProp backend or a test double.
//!
//! # Example
//!
//! ```no_run
//! use cm_compressor::{CompressorSpec, OperatingPoint, output_list};
//! use cm_core::units::{dk, k};
//! use cm_fluids::{CoolPropModel, Refrigerant};
//!
//! let spec = CompressorSpec::new(
//!     &[286.03, 6.464, 0.0, 0.0553, 0.0, 0.0, 1.93e-4, 0.0, 0.0, -5.87e-6],
//!     &[164.85, -23.79, 40.87, -0.514, 0.641, -0.282, -2.17e-3, 4.76e-3, -2.90e-3, 1.48e-3],
//!     Refrigerant::R410A,
//!     0.15,
//!     1.0,
//! ).unwrap();
//!
//! let op = OperatingPoint {
//!     t_evap: k(293.15),
//!     t_cond: k(328.15),
//!     superheat: dk(11.11),
//! };
//!
//! let model = CoolPropModel::new();
//! let perf = spec.evaluate(&model, &op).unwrap();
//! for record in output_list(&spec, &perf) {
//!     println!("{} [{}]: {}", record.label, record.unit, record.value);
//! }
//! ```

pub mod error;
pub mod map;
mod model;
pub mod report;
pub mod result;
pub mod spec;

// Re-exports
pub use error::{CompressorError, CompressorResult};
pub use map::{
    LBM_PER_HOUR_TO_KG_PER_S, MAP_COEFFICIENT_COUNT, MapPolynomial, evaluate_maps,
    kelvin_to_fahrenheit,
};
pub use model::{AHRI_REFERENCE_SUPERHEAT_K, SUPERHEAT_BLEND_FACTOR};
pub use report::{OutputRecord, output_list};
pub use result::Performance;
pub use spec::{CompressorSpec, OperatingPoint};
