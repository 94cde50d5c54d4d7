//! Tabular output records for a completed evaluation.

use crate::result::Performance;
use crate::spec::CompressorSpec;
use serde::{Deserialize, Serialize};

/// One labelled scalar in an evaluation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub label: String,
    pub unit: String,
    pub value: f64,
}

impl OutputRecord {
    fn new(label: impl Into<String>, unit: &str, value: f64) -> Self {
        Self {
            label: label.into(),
            unit: unit.to_owned(),
            value,
        }
    }
}

/// Flatten a spec and its evaluation result into a fixed-order record list.
///
/// The order is stable so downstream consumers can index by position:
/// the ten mass flow coefficients (`M1`..`M10`), the ten power coefficients
/// (`P1`..`P10`), then the scalar parameters and results.
pub fn output_list(spec: &CompressorSpec, perf: &Performance) -> Vec<OutputRecord> {
    let mut records = Vec::with_capacity(31);

    for (i, c) in spec.mass_flow_map.coefficients().iter().enumerate() {
        records.push(OutputRecord::new(format!("M{}", i + 1), "-", *c));
    }
    for (i, c) in spec.power_map.coefficients().iter().enumerate() {
        records.push(OutputRecord::new(format!("P{}", i + 1), "-", *c));
    }

    records.push(OutputRecord::new(
        "Heat Loss Fraction",
        "-",
        spec.heat_loss_fraction,
    ));
    records.push(OutputRecord::new(
        "Displacement scale factor",
        "-",
        spec.displacement_ratio,
    ));
    records.push(OutputRecord::new("Power", "W", perf.shaft_power.value));
    records.push(OutputRecord::new(
        "Mass flow rate",
        "kg/s",
        perf.mass_flow.value,
    ));
    records.push(OutputRecord::new(
        "Inlet Temperature",
        "K",
        perf.suction_temperature.value,
    ));
    records.push(OutputRecord::new(
        "Outlet Temperature",
        "K",
        perf.discharge_temperature.value,
    ));
    records.push(OutputRecord::new(
        "Inlet Enthalpy",
        "J/kg",
        perf.suction_enthalpy,
    ));
    records.push(OutputRecord::new(
        "Outlet Enthalpy",
        "J/kg",
        perf.discharge_enthalpy,
    ));
    records.push(OutputRecord::new(
        "Overall isentropic efficiency",
        "-",
        perf.isentropic_efficiency,
    ));
    records.push(OutputRecord::new(
        "Discharge pressure",
        "Pa",
        perf.discharge_pressure.value,
    ));
    records.push(OutputRecord::new(
        "Ambient heat loss",
        "W",
        perf.ambient_heat_loss.value,
    ));

    records
}
