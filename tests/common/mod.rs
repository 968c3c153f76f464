//! Shared test fixtures for integration tests.

use pv_design::catalog::{Inverter, SolarPanel};
use pv_design::finance::types::{BuildingType, CalculationInput, ConsumptionProfile};
use pv_design::settings::GlobalSettings;
use pv_design::site::{Coordinates, RoofDirection, SiteSolarProfile, builtin_sites};

/// Reference 550 W module used across the electrical checks.
pub fn reference_panel() -> SolarPanel {
    SolarPanel::new(
        "ref-550",
        "TommaTech",
        "TT-550-144PM",
        550.0,
        49.8,
        13.9,
        41.9,
        13.1,
        1.134,
        2.279,
        -0.27,
        175.0,
    )
}

/// Reference 20 kW two-MPPT inverter (two string inputs per MPPT).
pub fn reference_inverter() -> Inverter {
    Inverter::new(
        "ref-20k",
        "Huawei",
        "SUN2000-20KTL",
        20.0,
        1100.0,
        200.0,
        800.0,
        2,
        2,
        22.0,
        200.0,
        1800.0,
    )
}

/// Ankara profile from the built-in table.
pub fn ankara() -> SiteSolarProfile {
    builtin_sites()
        .into_iter()
        .find(|s| s.name == "Ankara")
        .expect("builtin table should contain Ankara")
}

/// A typical residential lead: balanced load, 120 m² south roof in Ankara.
pub fn default_input() -> CalculationInput {
    CalculationInput {
        consumption_profile: ConsumptionProfile::Balanced,
        building_type: BuildingType::Residential,
        bill_amount: 1600.0,
        roof_area: 120.0,
        roof_direction: RoofDirection::South,
        coordinates: Some(Coordinates { lat: 39.93, lon: 32.85 }),
    }
}

/// Default commercial settings snapshot.
pub fn default_settings() -> GlobalSettings {
    GlobalSettings::default()
}
