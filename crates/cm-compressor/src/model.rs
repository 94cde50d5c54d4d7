//! Performance correction: from raw map outputs to a complete discharge state.

use crate::error::{CompressorError, CompressorResult};
use crate::map::{evaluate_maps, kelvin_to_fahrenheit};
use crate::result::Performance;
use crate::spec::{CompressorSpec, OperatingPoint};
use cm_core::numeric::ensure_finite;
use cm_core::units::{dk, kgps, w};
use cm_fluids::{FluidModel, StateInput};

/// AHRI-540 map reference superheat, 20 °F expressed in kelvin.
pub const AHRI_REFERENCE_SUPERHEAT_K: f64 = 20.0 * 5.0 / 9.0;

/// Blend factor for the suction specific-volume correction to map mass flow.
/// Volumetric efficiency responds to suction density with partial sensitivity.
pub const SUPERHEAT_BLEND_FACTOR: f64 = 0.75;

fn finite_or_degenerate(value: f64, what: &'static str) -> CompressorResult<f64> {
    ensure_finite(value, what).map_err(|_| CompressorError::DegenerateMap { what })
}

impl CompressorSpec {
    /// Evaluate compressor performance at one operating point.
    ///
    /// A pure function of `(self, op)`: evaluates both maps at the
    /// saturation temperatures, corrects mass flow for the actual suction
    /// superheat relative to the map's fixed 20 °F reference, rescales map
    /// power by the actual-to-reference isentropic enthalpy rise, and closes
    /// the energy balance with `heat_loss_fraction` of shaft power rejected
    /// to ambient.
    ///
    /// # Errors
    /// - `PhysicalOrdering` if `t_cond < t_evap` or the superheat is negative
    /// - `Property` for any failed property-evaluator query, propagated
    ///   verbatim
    /// - `DegenerateMap` if the correction sequence produces a non-finite
    ///   value (zero or sign-inconsistent maps)
    ///
    /// On error no partial result is exposed.
    pub fn evaluate(
        &self,
        fluid: &dyn FluidModel,
        op: &OperatingPoint,
    ) -> CompressorResult<Performance> {
        if op.t_cond.value < op.t_evap.value {
            return Err(CompressorError::PhysicalOrdering {
                what: "condensing temperature below evaporating temperature",
            });
        }
        if op.superheat.value < 0.0 {
            return Err(CompressorError::PhysicalOrdering {
                what: "negative suction superheat",
            });
        }

        let ts_f = kelvin_to_fahrenheit(op.t_evap.value);
        let tc_f = kelvin_to_fahrenheit(op.t_cond.value);
        let (mdot_map, power_map) = evaluate_maps(
            &self.mass_flow_map,
            &self.power_map,
            ts_f,
            tc_f,
            self.displacement_ratio,
        );

        // Saturation pressures at the two dew temperatures
        let pe = fluid
            .state(StateInput::SatVapor { t: op.t_evap }, self.refrigerant)?
            .pressure();
        let pc = fluid
            .state(StateInput::SatVapor { t: op.t_cond }, self.refrigerant)?
            .pressure();

        // Map reference suction state (fixed AHRI superheat) vs actual suction state
        let t1_map = op.t_evap + dk(AHRI_REFERENCE_SUPERHEAT_K);
        let t1_actual = op.t_evap + op.superheat;

        let map_suction = fluid.state(StateInput::PT { p: pe, t: t1_map }, self.refrigerant)?;
        let v_map = 1.0 / fluid.rho(&map_suction)?.value;
        let s1_map = fluid.s(&map_suction)?;
        let h1_map = fluid.h(&map_suction)?;

        let actual_suction =
            fluid.state(StateInput::PT { p: pe, t: t1_actual }, self.refrigerant)?;
        let v_actual = 1.0 / fluid.rho(&actual_suction)?.value;
        let s1_actual = fluid.s(&actual_suction)?;
        let h1_actual = fluid.h(&actual_suction)?;

        // Specific-volume correction for superheat away from the map reference
        let mdot_r = mdot_map * (1.0 + SUPERHEAT_BLEND_FACTOR * (v_map / v_actual - 1.0));

        // Isentropic projections to condenser pressure, resolved in a single
        // flash each so a projection into the two-phase dome keeps its quality
        let h2s_map = fluid.h_at(StateInput::PS { p: pc, s: s1_map }, self.refrigerant)?;
        let h2s_actual = fluid.h_at(StateInput::PS { p: pc, s: s1_actual }, self.refrigerant)?;

        // Rescale map power by the flow ratio and the isentropic enthalpy-rise ratio
        let power =
            power_map * (mdot_r / mdot_map) * (h2s_actual - h1_actual) / (h2s_map - h1_map);

        // Energy balance: a fraction of shaft power never reaches the refrigerant
        let h2 = power * (1.0 - self.heat_loss_fraction) / mdot_r + h1_actual;
        let eta_oi = mdot_r * (h2s_actual - h1_actual) / power;

        let mdot_r = finite_or_degenerate(mdot_r, "corrected mass flow")?;
        let power = finite_or_degenerate(power, "shaft power")?;
        let h2 = finite_or_degenerate(h2, "discharge enthalpy")?;
        let eta_oi = finite_or_degenerate(eta_oi, "isentropic efficiency")?;

        let discharge = fluid.state(StateInput::PH { p: pc, h: h2 }, self.refrigerant)?;
        let q_amb = -self.heat_loss_fraction * power;

        Ok(Performance {
            mass_flow: kgps(mdot_r),
            shaft_power: w(power),
            discharge_enthalpy: h2,
            discharge_pressure: pc,
            ambient_heat_loss: w(q_amb),
            isentropic_efficiency: eta_oi,
            discharge_temperature: discharge.temperature(),
            suction_temperature: t1_actual,
            suction_enthalpy: h1_actual,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::tests::IdealVaporModel;
    use super::*;
    use cm_core::units::k;
    use cm_fluids::Refrigerant;
    use proptest::prelude::*;

    proptest! {
        // Higher lift demands more power for these coefficient sets.
        #[test]
        fn power_is_monotone_in_condensing_temperature(
            tc_low in 303.15_f64..338.0_f64,
            dt in 0.1_f64..5.0_f64,
        ) {
            let spec = CompressorSpec::new(
                &super::tests::DEMO_M,
                &super::tests::DEMO_P,
                Refrigerant::R410A,
                0.15,
                1.0,
            ).unwrap();
            let fluid = IdealVaporModel;
            let base = OperatingPoint {
                t_evap: k(275.15),
                t_cond: k(tc_low),
                superheat: cm_core::units::dk(11.11),
            };
            let lifted = OperatingPoint {
                t_cond: k(tc_low + dt),
                ..base
            };

            let p_low = spec.evaluate(&fluid, &base).unwrap().shaft_power.value;
            let p_high = spec.evaluate(&fluid, &lifted).unwrap().shaft_power.value;
            prop_assert!(p_high >= p_low);
        }
    }
}
