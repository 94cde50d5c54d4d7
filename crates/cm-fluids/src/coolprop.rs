//! CoolProp-based fluid property model.

use crate::error::{FluidError, FluidResult};
use crate::model::{FluidModel, validation};
use crate::refrigerant::{BackendSubstance, Refrigerant};
use crate::state::{SpecEnthalpy, SpecEntropy, StateInput, ThermoState};
use cm_core::units::{Density, k, pa};
use rfluids::prelude::*;

/// CoolProp backend for refrigerant properties.
///
/// Supports pure fluids and the predefined blends CoolProp ships as
/// pseudo-pure mixtures (R404A, R407C, R410A, R507A).
///
/// Thread-safe: rfluids Fluid instances are stateless and can be created/used
/// from multiple threads.
pub struct CoolPropModel {
    // Future: could add configuration options here (e.g., backend selection, caching)
}

impl CoolPropModel {
    /// Create a new CoolProp model.
    pub fn new() -> Self {
        Self {}
    }

    /// Create a Fluid instance in the state defined by two inputs.
    fn fluid_in_state(
        &self,
        refrigerant: Refrigerant,
        input1: FluidInput,
        input2: FluidInput,
    ) -> FluidResult<Fluid> {
        let result = match refrigerant.backend_substance() {
            BackendSubstance::Pure(pure) => Fluid::from(pure).in_state(input1, input2),
            BackendSubstance::Mix(mix) => Fluid::from(mix).in_state(input1, input2),
        };
        result.map_err(|e| FluidError::Backend {
            message: format!("rfluids error for {}: {}", refrigerant.key(), e),
        })
    }

    /// Create a Fluid instance at a given P,T state.
    fn fluid_at_pt(&self, refrigerant: Refrigerant, p_pa: f64, t_k: f64) -> FluidResult<Fluid> {
        self.fluid_in_state(
            refrigerant,
            FluidInput::pressure(p_pa),
            FluidInput::temperature(t_k),
        )
    }

    /// Validate a state input and translate it to an rfluids input pair.
    fn flash_inputs(&self, input: &StateInput) -> FluidResult<(FluidInput, FluidInput)> {
        match input {
            StateInput::PT { p, t } => {
                validation::validate_pressure(*p)?;
                validation::validate_temperature(*t)?;
                Ok((
                    FluidInput::pressure(p.value),
                    FluidInput::temperature(t.value),
                ))
            }
            StateInput::PH { p, h } => {
                validation::validate_pressure(*p)?;
                validation::validate_enthalpy(*h)?;
                Ok((FluidInput::pressure(p.value), FluidInput::enthalpy(*h)))
            }
            StateInput::PS { p, s } => {
                validation::validate_pressure(*p)?;
                validation::validate_entropy(*s)?;
                Ok((FluidInput::pressure(p.value), FluidInput::entropy(*s)))
            }
            StateInput::SatVapor { t } => {
                validation::validate_temperature(*t)?;
                Ok((FluidInput::temperature(t.value), FluidInput::quality(1.0)))
            }
        }
    }
}

impl Default for CoolPropModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FluidModel for CoolPropModel {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn supports_refrigerant(&self, _refrigerant: Refrigerant) -> bool {
        // Every Refrigerant variant has an rfluids mapping.
        true
    }

    fn state(&self, input: StateInput, refrigerant: Refrigerant) -> FluidResult<ThermoState> {
        match input {
            StateInput::PT { p, t } => {
                validation::validate_pressure(p)?;
                validation::validate_temperature(t)?;

                // Probe the backend so invalid states fail here, not later
                let _fluid = self.fluid_at_pt(refrigerant, p.value, t.value)?;

                ThermoState::from_pt(p, t, refrigerant)
            }
            StateInput::PH { p, h } => {
                validation::validate_pressure(p)?;
                validation::validate_enthalpy(h)?;

                let mut fluid = self.fluid_in_state(
                    refrigerant,
                    FluidInput::pressure(p.value),
                    FluidInput::enthalpy(h),
                )?;
                let t_k = fluid.temperature().map_err(|e| FluidError::Backend {
                    message: format!("rfluids error getting temperature: {}", e),
                })?;

                ThermoState::from_pt(p, k(t_k), refrigerant)
            }
            StateInput::PS { p, s } => {
                validation::validate_pressure(p)?;
                validation::validate_entropy(s)?;

                let mut fluid = self.fluid_in_state(
                    refrigerant,
                    FluidInput::pressure(p.value),
                    FluidInput::entropy(s),
                )?;
                let t_k = fluid.temperature().map_err(|e| FluidError::Backend {
                    message: format!("rfluids error getting temperature: {}", e),
                })?;

                ThermoState::from_pt(p, k(t_k), refrigerant)
            }
            StateInput::SatVapor { t } => {
                validation::validate_temperature(t)?;

                let mut fluid = self.fluid_in_state(
                    refrigerant,
                    FluidInput::temperature(t.value),
                    FluidInput::quality(1.0),
                )?;
                let p_pa = fluid.pressure().map_err(|e| FluidError::Backend {
                    message: format!("rfluids error getting saturation pressure: {}", e),
                })?;

                ThermoState::from_pt(pa(p_pa), t, refrigerant)
            }
        }
    }

    fn rho(&self, state: &ThermoState) -> FluidResult<Density> {
        let mut fluid =
            self.fluid_at_pt(state.refrigerant(), state.pressure().value, state.temperature().value)?;
        let rho_val = fluid.density().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting density: {}", e),
        })?;

        use uom::si::mass_density::kilogram_per_cubic_meter;
        let rho = Density::new::<kilogram_per_cubic_meter>(rho_val);

        validation::validate_density(rho)?;
        Ok(rho)
    }

    fn h(&self, state: &ThermoState) -> FluidResult<SpecEnthalpy> {
        let mut fluid =
            self.fluid_at_pt(state.refrigerant(), state.pressure().value, state.temperature().value)?;
        let h = fluid.enthalpy().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting enthalpy: {}", e),
        })?;

        validation::validate_enthalpy(h)?;
        Ok(h)
    }

    fn s(&self, state: &ThermoState) -> FluidResult<SpecEntropy> {
        let mut fluid =
            self.fluid_at_pt(state.refrigerant(), state.pressure().value, state.temperature().value)?;
        let s = fluid.entropy().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting entropy: {}", e),
        })?;

        validation::validate_entropy(s)?;
        Ok(s)
    }

    // One flash, enthalpy taken from it directly. A PS/PH input that lands
    // inside the two-phase dome has no valid (P, T) re-flash.
    fn h_at(&self, input: StateInput, refrigerant: Refrigerant) -> FluidResult<SpecEnthalpy> {
        let (input1, input2) = self.flash_inputs(&input)?;
        let mut fluid = self.fluid_in_state(refrigerant, input1, input2)?;
        let h = fluid.enthalpy().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting enthalpy: {}", e),
        })?;

        validation::validate_enthalpy(h)?;
        Ok(h)
    }
}
