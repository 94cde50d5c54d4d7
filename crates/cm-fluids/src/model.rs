//! Fluid property model trait and validation helpers.

use crate::error::{FluidError, FluidResult};
use crate::refrigerant::Refrigerant;
use crate::state::{SpecEnthalpy, SpecEntropy, StateInput, ThermoState};
use cm_core::units::Density;

/// Trait for fluid property models.
///
/// Implementations must be thread-safe (Send + Sync) so independent
/// compressor evaluations can run in parallel. All methods should validate
/// inputs and outputs for physical plausibility and fail observably when a
/// queried state is outside the fluid's valid envelope — never silently
/// return garbage.
pub trait FluidModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Check if this model supports the given refrigerant.
    fn supports_refrigerant(&self, refrigerant: Refrigerant) -> bool;

    /// Create a thermodynamic state from an input specification.
    ///
    /// For PT input: validates and creates the state directly.
    /// For PH/PS input: solves for temperature, then creates the state.
    /// For SatVapor input: resolves the saturation pressure at the given
    /// temperature.
    fn state(&self, input: StateInput, refrigerant: Refrigerant) -> FluidResult<ThermoState>;

    /// Compute density [kg/m³] at the given state.
    fn rho(&self, state: &ThermoState) -> FluidResult<Density>;

    /// Compute specific enthalpy [J/kg] at the given state.
    fn h(&self, state: &ThermoState) -> FluidResult<SpecEnthalpy>;

    /// Compute specific enthalpy [J/kg] directly from an input pair.
    ///
    /// Unlike `state` followed by `h`, a backend can resolve this in a
    /// single flash, so inputs that land inside the two-phase dome (e.g. an
    /// isentropic projection for a wet fluid) keep their vapor quality
    /// instead of being collapsed to a (P, T) pair.
    fn h_at(&self, input: StateInput, refrigerant: Refrigerant) -> FluidResult<SpecEnthalpy> {
        let state = self.state(input, refrigerant)?;
        self.h(&state)
    }

    /// Compute specific entropy [J/(kg·K)] at the given state.
    fn s(&self, state: &ThermoState) -> FluidResult<SpecEntropy>;
}

/// Validation helpers for fluid properties.
pub(crate) mod validation {
    use super::*;
    use cm_core::units::{Pressure, Temperature};

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> FluidResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> FluidResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure density is positive and finite.
    pub fn validate_density(rho: Density) -> FluidResult<()> {
        if !rho.value.is_finite() || rho.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure enthalpy is finite (can be negative).
    pub fn validate_enthalpy(h: f64) -> FluidResult<()> {
        if !h.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "enthalpy must be finite",
            });
        }
        Ok(())
    }

    /// Ensure entropy is finite (can be negative).
    pub fn validate_entropy(s: f64) -> FluidResult<()> {
        if !s.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "entropy must be finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use cm_core::units::{k, kgpm3, pa};

    #[test]
    fn validate_positive_pressure() {
        assert!(validate_pressure(pa(101_325.0)).is_ok());
        assert!(validate_pressure(pa(-100.0)).is_err());
        assert!(validate_pressure(pa(0.0)).is_err());
        assert!(validate_pressure(pa(f64::NAN)).is_err());
    }

    #[test]
    fn validate_positive_temperature() {
        assert!(validate_temperature(k(300.0)).is_ok());
        assert!(validate_temperature(k(-10.0)).is_err());
        assert!(validate_temperature(k(0.0)).is_err());
    }

    #[test]
    fn validate_density_positive() {
        assert!(validate_density(kgpm3(55.0)).is_ok());
        assert!(validate_density(kgpm3(-1.0)).is_err());
        assert!(validate_density(kgpm3(0.0)).is_err());
    }

    #[test]
    fn validate_enthalpy_finite() {
        assert!(validate_enthalpy(430_000.0).is_ok());
        assert!(validate_enthalpy(-15_000.0).is_ok());
        assert!(validate_enthalpy(f64::INFINITY).is_err());
    }

    #[test]
    fn validate_entropy_finite() {
        assert!(validate_entropy(1_800.0).is_ok());
        assert!(validate_entropy(f64::NAN).is_err());
    }
}
