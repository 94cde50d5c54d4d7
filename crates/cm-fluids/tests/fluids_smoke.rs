//! Integration tests for the CoolProp backend.

use cm_core::units::k;
use cm_fluids::{CoolPropModel, FluidModel, Refrigerant, StateInput};

#[test]
fn r410a_saturation_pressure_rises_with_temperature() {
    let model = CoolPropModel::new();
    let r = Refrigerant::R410A;

    let p_cold = model
        .state(StateInput::SatVapor { t: k(293.15) }, r)
        .unwrap()
        .pressure();
    let p_hot = model
        .state(StateInput::SatVapor { t: k(328.15) }, r)
        .unwrap()
        .pressure();

    assert!(p_cold.value > 0.0);
    assert!(p_hot.value > p_cold.value);
    // R410A dew pressure at 55 °C is near 3.4 MPa
    assert!(p_hot.value > 3.0e6 && p_hot.value < 3.9e6);
}

#[test]
fn isentropic_expansion_into_the_dome_keeps_enthalpy() {
    // Ammonia's saturated-vapor line slopes backward in T-s, so an
    // isentropic expansion from near-saturated vapor ends up two-phase.
    // The enthalpy must come from the PS flash itself; a (P, T) re-flash
    // has no answer inside the dome.
    let model = CoolPropModel::new();
    let r = Refrigerant::Ammonia;

    let p_hot = model
        .state(StateInput::SatVapor { t: k(300.0) }, r)
        .unwrap()
        .pressure();
    let p_cold = model
        .state(StateInput::SatVapor { t: k(250.0) }, r)
        .unwrap()
        .pressure();

    let suction = model
        .state(StateInput::PT { p: p_hot, t: k(301.0) }, r)
        .unwrap();
    let s1 = model.s(&suction).unwrap();
    let h1 = model.h(&suction).unwrap();

    let h2 = model.h_at(StateInput::PS { p: p_cold, s: s1 }, r).unwrap();
    let h_g_cold = model.h_at(StateInput::SatVapor { t: k(250.0) }, r).unwrap();

    assert!(h2.is_finite());
    assert!(h2 < h1, "expansion must lower enthalpy");
    assert!(
        h2 < h_g_cold,
        "two-phase endpoint must lie below the saturated-vapor enthalpy"
    );
}

#[test]
fn single_flash_enthalpy_agrees_with_state_query_when_superheated() {
    let model = CoolPropModel::new();
    let r = Refrigerant::R410A;

    let p = model
        .state(StateInput::SatVapor { t: k(293.15) }, r)
        .unwrap()
        .pressure();
    let state = model
        .state(StateInput::PT { p, t: k(304.26) }, r)
        .unwrap();
    let via_state = model.h(&state).unwrap();
    let direct = model
        .h_at(StateInput::PT { p, t: k(304.26) }, r)
        .unwrap();

    let rel = ((via_state - direct) / via_state).abs();
    assert!(rel < 1e-9, "single-flash and state-query enthalpy disagree");
}
