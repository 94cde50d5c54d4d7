//! Refrigerant identifiers.

use crate::error::FluidError;

/// Working fluids relevant for vapor-compression equipment.
///
/// Covers the common pure HFC/HFO/natural refrigerants plus the predefined
/// blends CoolProp treats as pseudo-pure mixtures (R404A, R407C, R410A,
/// R507A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refrigerant {
    /// Refrigerant R32 (difluoromethane)
    R32,
    /// Refrigerant R125 (pentafluoroethane)
    R125,
    /// Refrigerant R134a
    R134a,
    /// Refrigerant R152a
    R152a,
    /// Refrigerant R245fa
    R245fa,
    /// Refrigerant R1234yf
    R1234yf,
    /// Blend R404A (R125/R143a/R134a)
    R404A,
    /// Blend R407C (R32/R125/R134a)
    R407C,
    /// Blend R410A (R32/R125)
    R410A,
    /// Blend R507A (R125/R143a)
    R507A,
    /// Ammonia (R717)
    Ammonia,
    /// Propane (R290)
    Propane,
    /// Isobutane (R600a)
    Isobutane,
    /// Carbon dioxide (R744)
    CO2,
}

/// Backend substance kind: rfluids keeps pure fluids and predefined
/// mixtures in separate enums.
#[derive(Debug, Clone, Copy)]
pub(crate) enum BackendSubstance {
    Pure(rfluids::substance::Pure),
    Mix(rfluids::substance::PredefinedMix),
}

impl Refrigerant {
    pub const ALL: [Refrigerant; 14] = [
        Refrigerant::R32,
        Refrigerant::R125,
        Refrigerant::R134a,
        Refrigerant::R152a,
        Refrigerant::R245fa,
        Refrigerant::R1234yf,
        Refrigerant::R404A,
        Refrigerant::R407C,
        Refrigerant::R410A,
        Refrigerant::R507A,
        Refrigerant::Ammonia,
        Refrigerant::Propane,
        Refrigerant::Isobutane,
        Refrigerant::CO2,
    ];

    /// Canonical short key (ASHRAE designation where one exists).
    pub fn key(&self) -> &'static str {
        match self {
            Refrigerant::R32 => "R32",
            Refrigerant::R125 => "R125",
            Refrigerant::R134a => "R134a",
            Refrigerant::R152a => "R152a",
            Refrigerant::R245fa => "R245fa",
            Refrigerant::R1234yf => "R1234yf",
            Refrigerant::R404A => "R404A",
            Refrigerant::R407C => "R407C",
            Refrigerant::R410A => "R410A",
            Refrigerant::R507A => "R507A",
            Refrigerant::Ammonia => "R717",
            Refrigerant::Propane => "R290",
            Refrigerant::Isobutane => "R600a",
            Refrigerant::CO2 => "R744",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Refrigerant::R32 => "R32",
            Refrigerant::R125 => "R125",
            Refrigerant::R134a => "R134a",
            Refrigerant::R152a => "R152a",
            Refrigerant::R245fa => "R245fa",
            Refrigerant::R1234yf => "R1234yf",
            Refrigerant::R404A => "R404A",
            Refrigerant::R407C => "R407C",
            Refrigerant::R410A => "R410A",
            Refrigerant::R507A => "R507A",
            Refrigerant::Ammonia => "Ammonia",
            Refrigerant::Propane => "Propane",
            Refrigerant::Isobutane => "Isobutane",
            Refrigerant::CO2 => "Carbon Dioxide",
        }
    }

    /// Map to the rfluids substance (internal use for the CoolProp backend).
    pub(crate) fn backend_substance(&self) -> BackendSubstance {
        use rfluids::substance::{PredefinedMix, Pure};
        match self {
            Refrigerant::R32 => BackendSubstance::Pure(Pure::R32),
            Refrigerant::R125 => BackendSubstance::Pure(Pure::R125),
            Refrigerant::R134a => BackendSubstance::Pure(Pure::R134a),
            Refrigerant::R152a => BackendSubstance::Pure(Pure::R152a),
            Refrigerant::R245fa => BackendSubstance::Pure(Pure::R245fa),
            Refrigerant::R1234yf => BackendSubstance::Pure(Pure::R1234yf),
            Refrigerant::R404A => BackendSubstance::Mix(PredefinedMix::R404A),
            Refrigerant::R407C => BackendSubstance::Mix(PredefinedMix::R407C),
            Refrigerant::R410A => BackendSubstance::Mix(PredefinedMix::R410A),
            Refrigerant::R507A => BackendSubstance::Mix(PredefinedMix::R507A),
            Refrigerant::Ammonia => BackendSubstance::Pure(Pure::Ammonia),
            Refrigerant::Propane => BackendSubstance::Pure(Pure::nPropane),
            Refrigerant::Isobutane => BackendSubstance::Pure(Pure::Isobutane),
            Refrigerant::CO2 => BackendSubstance::Pure(Pure::CarbonDioxide),
        }
    }
}

impl std::str::FromStr for Refrigerant {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "R32" => Ok(Refrigerant::R32),
            "R125" => Ok(Refrigerant::R125),
            "R134A" => Ok(Refrigerant::R134a),
            "R152A" => Ok(Refrigerant::R152a),
            "R245FA" => Ok(Refrigerant::R245fa),
            "R1234YF" => Ok(Refrigerant::R1234yf),
            "R404A" => Ok(Refrigerant::R404A),
            "R407C" => Ok(Refrigerant::R407C),
            "R410A" => Ok(Refrigerant::R410A),
            "R507A" => Ok(Refrigerant::R507A),
            "R717" | "NH3" | "AMMONIA" => Ok(Refrigerant::Ammonia),
            "R290" | "PROPANE" | "C3H8" => Ok(Refrigerant::Propane),
            "R600A" | "ISOBUTANE" | "I-BUTANE" => Ok(Refrigerant::Isobutane),
            "R744" | "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Refrigerant::CO2),
            _ => Err(FluidError::NotSupported {
                what: "unknown refrigerant name",
            }),
        }
    }
}

impl std::fmt::Display for Refrigerant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
