//! Evaluation result.

use cm_core::units::{MassRate, Power, Pressure, Temperature};
use cm_fluids::SpecEnthalpy;

/// Complete thermodynamic performance at one operating point.
///
/// Returned by value from [`CompressorSpec::evaluate`]; no state is retained
/// on the spec between calls.
///
/// [`CompressorSpec::evaluate`]: crate::CompressorSpec::evaluate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    /// Corrected refrigerant mass flow rate.
    pub mass_flow: MassRate,
    /// Shaft power.
    pub shaft_power: Power,
    /// Specific enthalpy at the discharge port [J/kg].
    pub discharge_enthalpy: SpecEnthalpy,
    /// Discharge pressure (condenser saturation pressure).
    pub discharge_pressure: Pressure,
    /// Heat rejected to ambient; negative denotes rejection from the
    /// control volume.
    pub ambient_heat_loss: Power,
    /// Overall isentropic efficiency (not clamped).
    pub isentropic_efficiency: f64,
    /// Discharge temperature.
    pub discharge_temperature: Temperature,
    /// Suction temperature (evaporating temperature plus actual superheat).
    pub suction_temperature: Temperature,
    /// Specific enthalpy at the suction port [J/kg].
    pub suction_enthalpy: SpecEnthalpy,
}

impl Performance {
    /// Energy entering the refrigerant stream: shaft power minus the part
    /// rejected to ambient.
    pub fn cycle_energy_in(&self) -> Power {
        self.shaft_power + self.ambient_heat_loss
    }
}
