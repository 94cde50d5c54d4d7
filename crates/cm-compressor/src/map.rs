//! AHRI-540 ten-coefficient map evaluation.

use crate::error::{CompressorError, CompressorResult};

/// Number of coefficients in an AHRI-540 map polynomial.
pub const MAP_COEFFICIENT_COUNT: usize = 10;

/// Mass flow unit conversion applied to the raw map output (lbm/h → kg/s).
///
/// Part of the map contract: manufacturer maps report mass flow in lbm/h.
pub const LBM_PER_HOUR_TO_KG_PER_S: f64 = 0.000125998;

/// Convert a saturation temperature from kelvin to the map's native °F.
#[inline]
pub fn kelvin_to_fahrenheit(t_k: f64) -> f64 {
    t_k * 9.0 / 5.0 - 459.67
}

/// A third-order bivariate map polynomial in evaporator and condenser
/// saturation temperature (°F).
///
/// Term order is fixed by the AHRI-540 convention:
///
/// ```text
/// c0 + c1·Ts + c2·Tc + c3·Ts² + c4·Ts·Tc + c5·Tc²
///    + c6·Ts³ + c7·Tc·Ts² + c8·Tc²·Ts + c9·Tc³
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MapPolynomial {
    coeffs: [f64; MAP_COEFFICIENT_COUNT],
}

impl MapPolynomial {
    /// Build a map polynomial from a coefficient slice.
    ///
    /// `which` names the map ("mass flow" or "power") for error reporting.
    ///
    /// # Errors
    /// Returns `InvalidMapShape` unless the slice has exactly ten entries.
    pub fn from_slice(which: &'static str, coeffs: &[f64]) -> CompressorResult<Self> {
        let coeffs: [f64; MAP_COEFFICIENT_COUNT] =
            coeffs
                .try_into()
                .map_err(|_| CompressorError::InvalidMapShape {
                    which,
                    expected: MAP_COEFFICIENT_COUNT,
                    len: coeffs.len(),
                })?;
        Ok(Self { coeffs })
    }

    /// The coefficients in map order.
    pub fn coefficients(&self) -> &[f64; MAP_COEFFICIENT_COUNT] {
        &self.coeffs
    }

    /// Evaluate the polynomial at saturation temperatures in °F.
    ///
    /// Pure arithmetic; never fails for finite inputs.
    pub fn eval(&self, ts_f: f64, tc_f: f64) -> f64 {
        let c = &self.coeffs;
        c[0] + c[1] * ts_f
            + c[2] * tc_f
            + c[3] * ts_f * ts_f
            + c[4] * ts_f * tc_f
            + c[5] * tc_f * tc_f
            + c[6] * ts_f * ts_f * ts_f
            + c[7] * tc_f * ts_f * ts_f
            + c[8] * tc_f * tc_f * ts_f
            + c[9] * tc_f * tc_f * tc_f
    }
}

/// Evaluate both maps at saturation temperatures already converted to °F.
///
/// Returns `(mdot_map, power_map)`: mass flow in kg/s (the lbm/h map output
/// times [`LBM_PER_HOUR_TO_KG_PER_S`]) and shaft power in W, both scaled by
/// `displacement_ratio`.
pub fn evaluate_maps(
    mass_flow_map: &MapPolynomial,
    power_map: &MapPolynomial,
    ts_f: f64,
    tc_f: f64,
    displacement_ratio: f64,
) -> (f64, f64) {
    let mdot_map = mass_flow_map.eval(ts_f, tc_f) * LBM_PER_HOUR_TO_KG_PER_S * displacement_ratio;
    let power_map = power_map.eval(ts_f, tc_f) * displacement_ratio;
    (mdot_map, power_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cm_core::numeric::{Tolerances, nearly_equal};

    fn demo_mass_flow() -> MapPolynomial {
        MapPolynomial::from_slice(
            "mass flow",
            &[
                286.029_402_2,
                6.464_335_08,
                0.0,
                0.055_32,
                0.0,
                0.0,
                0.000_193,
                0.0,
                0.0,
                -5.87e-6,
            ],
        )
        .unwrap()
    }

    fn demo_power() -> MapPolynomial {
        MapPolynomial::from_slice(
            "power",
            &[
                164.854_463_6,
                -23.785_953_75,
                40.871_554_6,
                -0.514_198_05,
                0.641_107_197,
                -0.282_310_738,
                -0.002_174_527,
                0.004_757_91,
                -0.002_897_174,
                0.001_476_432,
            ],
        )
        .unwrap()
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = MapPolynomial::from_slice("mass flow", &[1.0; 9]).unwrap_err();
        assert!(matches!(
            err,
            CompressorError::InvalidMapShape { len: 9, .. }
        ));

        let err = MapPolynomial::from_slice("power", &[1.0; 11]).unwrap_err();
        assert!(matches!(
            err,
            CompressorError::InvalidMapShape { len: 11, .. }
        ));
    }

    #[test]
    fn kelvin_to_fahrenheit_reference_points() {
        let tol = Tolerances::default();
        assert!(nearly_equal(kelvin_to_fahrenheit(293.15), 68.0, tol));
        assert!(nearly_equal(kelvin_to_fahrenheit(273.15), 32.0, tol));
        assert!(nearly_equal(kelvin_to_fahrenheit(255.372_222), 0.0, Tolerances { abs: 1e-5, rel: 0.0 }));
    }

    #[test]
    fn constant_map_evaluates_to_constant() {
        let mut coeffs = [0.0; MAP_COEFFICIENT_COUNT];
        coeffs[0] = 100.0;
        let map = MapPolynomial::from_slice("power", &coeffs).unwrap();
        assert_eq!(map.eval(12.0, 110.0), 100.0);
        assert_eq!(map.eval(-40.0, 150.0), 100.0);
    }

    #[test]
    fn term_order_matches_ahri_convention() {
        // One coefficient at a time picks out exactly its term.
        let ts = 3.0;
        let tc = 5.0;
        let expected = [
            1.0,
            ts,
            tc,
            ts * ts,
            ts * tc,
            tc * tc,
            ts * ts * ts,
            tc * ts * ts,
            tc * tc * ts,
            tc * tc * tc,
        ];
        for (i, want) in expected.iter().enumerate() {
            let mut coeffs = [0.0; MAP_COEFFICIENT_COUNT];
            coeffs[i] = 1.0;
            let map = MapPolynomial::from_slice("mass flow", &coeffs).unwrap();
            assert_eq!(map.eval(ts, tc), *want, "term {}", i);
        }
    }

    #[test]
    fn mass_flow_unit_conversion_is_exact() {
        let map = demo_mass_flow();
        let power = demo_power();
        let ts_f = 45.0;
        let tc_f = 120.0;

        let raw_lbm_per_h = map.eval(ts_f, tc_f);
        let (mdot_map, _) = evaluate_maps(&map, &power, ts_f, tc_f, 1.0);

        let tol = Tolerances { abs: 0.0, rel: 1e-9 };
        assert!(nearly_equal(
            mdot_map,
            raw_lbm_per_h * LBM_PER_HOUR_TO_KG_PER_S,
            tol
        ));
    }

    #[test]
    fn displacement_ratio_scales_both_outputs() {
        let map = demo_mass_flow();
        let power = demo_power();
        let (mdot_1, power_1) = evaluate_maps(&map, &power, 20.0, 110.0, 1.0);
        let (mdot_3, power_3) = evaluate_maps(&map, &power, 20.0, 110.0, 3.0);

        let tol = Tolerances::default();
        assert!(nearly_equal(mdot_3, 3.0 * mdot_1, tol));
        assert!(nearly_equal(power_3, 3.0 * power_1, tol));
    }
}
