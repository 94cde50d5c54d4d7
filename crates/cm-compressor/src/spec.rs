//! Compressor specification and operating point.

use crate::error::{CompressorError, CompressorResult};
use crate::map::MapPolynomial;
use cm_core::units::{TempInterval, Temperature};
use cm_fluids::Refrigerant;

/// Immutable description of a compressor: its AHRI-540 maps and the few
/// scalar parameters that go with them.
///
/// Constructed once from manufacturer map data and reused across many
/// operating-point evaluations; never mutated mid-calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressorSpec {
    /// Mass flow map (raw output in lbm/h).
    pub mass_flow_map: MapPolynomial,
    /// Shaft power map (raw output in W).
    pub power_map: MapPolynomial,
    /// Working fluid, passed through to the property evaluator.
    pub refrigerant: Refrigerant,
    /// Fraction of shaft power rejected to ambient, in [0, 1).
    pub heat_loss_fraction: f64,
    /// Displacement scale factor applied uniformly to both maps, > 0.
    pub displacement_ratio: f64,
}

impl CompressorSpec {
    /// Build a validated spec from raw coefficient slices.
    ///
    /// # Errors
    /// - `InvalidMapShape` if either coefficient slice is not exactly ten long
    /// - `InvalidArg` if `heat_loss_fraction` is outside [0, 1) or
    ///   `displacement_ratio` is not a positive finite number
    pub fn new(
        mass_flow_coeffs: &[f64],
        power_coeffs: &[f64],
        refrigerant: Refrigerant,
        heat_loss_fraction: f64,
        displacement_ratio: f64,
    ) -> CompressorResult<Self> {
        let mass_flow_map = MapPolynomial::from_slice("mass flow", mass_flow_coeffs)?;
        let power_map = MapPolynomial::from_slice("power", power_coeffs)?;

        if !heat_loss_fraction.is_finite() || !(0.0..1.0).contains(&heat_loss_fraction) {
            return Err(CompressorError::InvalidArg {
                what: "heat loss fraction must be in [0, 1)",
            });
        }
        if !displacement_ratio.is_finite() || displacement_ratio <= 0.0 {
            return Err(CompressorError::InvalidArg {
                what: "displacement ratio must be positive and finite",
            });
        }

        Ok(Self {
            mass_flow_map,
            power_map,
            refrigerant,
            heat_loss_fraction,
            displacement_ratio,
        })
    }
}

/// Boundary conditions for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Evaporating (suction dew) temperature.
    pub t_evap: Temperature,
    /// Condensing (discharge dew) temperature.
    pub t_cond: Temperature,
    /// Actual suction superheat above `t_evap`.
    pub superheat: TempInterval,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT: [f64; 10] = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

    #[test]
    fn valid_spec_is_accepted() {
        let spec = CompressorSpec::new(&FLAT, &FLAT, Refrigerant::R410A, 0.15, 1.0);
        assert!(spec.is_ok());
    }

    #[test]
    fn short_map_is_rejected_at_construction() {
        let err =
            CompressorSpec::new(&FLAT[..9], &FLAT, Refrigerant::R410A, 0.15, 1.0).unwrap_err();
        assert!(matches!(
            err,
            CompressorError::InvalidMapShape {
                which: "mass flow",
                ..
            }
        ));

        let err =
            CompressorSpec::new(&FLAT, &FLAT[..3], Refrigerant::R410A, 0.15, 1.0).unwrap_err();
        assert!(matches!(
            err,
            CompressorError::InvalidMapShape { which: "power", .. }
        ));
    }

    #[test]
    fn heat_loss_fraction_range_is_enforced() {
        assert!(CompressorSpec::new(&FLAT, &FLAT, Refrigerant::R410A, 0.0, 1.0).is_ok());
        assert!(CompressorSpec::new(&FLAT, &FLAT, Refrigerant::R410A, 1.0, 1.0).is_err());
        assert!(CompressorSpec::new(&FLAT, &FLAT, Refrigerant::R410A, -0.1, 1.0).is_err());
        assert!(CompressorSpec::new(&FLAT, &FLAT, Refrigerant::R410A, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn displacement_ratio_must_be_positive() {
        assert!(CompressorSpec::new(&FLAT, &FLAT, Refrigerant::R410A, 0.15, 0.0).is_err());
        assert!(CompressorSpec::new(&FLAT, &FLAT, Refrigerant::R410A, 0.15, -2.0).is_err());
        assert!(
            CompressorSpec::new(&FLAT, &FLAT, Refrigerant::R410A, 0.15, f64::INFINITY).is_err()
        );
    }
}
