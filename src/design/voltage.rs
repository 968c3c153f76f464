//! Temperature-compensated string voltage sizing.
//!
//! String voltage must stay under the inverter's absolute input limit on
//! the coldest morning (Voc rises as temperature drops) and above the MPPT
//! window's lower edge on the hottest afternoon (Vmpp sags). Cell
//! temperatures of -10 °C and 70 °C against the 25 °C STC reference give
//! deltas of -35 and +45 degrees.

use serde::{Deserialize, Serialize};

use crate::catalog::{Inverter, SolarPanel};

/// Temperature delta to the coldest design condition (°C).
const COLD_DELTA_C: f64 = -35.0;

/// Temperature delta to the hottest design condition (°C).
const HOT_DELTA_C: f64 = 45.0;

/// Allowed panels-per-string window with the compensated voltages behind it.
///
/// An inverted window (`max < min`) means the panel cannot be strung for
/// this inverter at all; the orchestrator reports that as a validation
/// error rather than this module raising one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VoltageWindow {
    /// Fewest panels that keep the hot-weather string voltage inside the
    /// MPPT window.
    pub min_panels_per_string: u32,
    /// Most panels that keep the cold-weather string voltage under the
    /// absolute input limit.
    pub max_panels_per_string: u32,
    /// Single-panel Voc at the cold design temperature (V).
    pub voc_at_cold: f64,
    /// Single-panel Vmpp at the hot design temperature (V).
    pub vmpp_at_hot: f64,
}

/// Computes the panels-per-string window for a panel/inverter pair.
///
/// The temperature coefficient is re-normalized to be non-positive here as
/// well, so the math is safe even for records built outside
/// [`SolarPanel::new`].
pub fn string_voltage_window(panel: &SolarPanel, inverter: &Inverter) -> VoltageWindow {
    let coeff = -panel.temp_coeff_voc.abs();

    let voc_at_cold = panel.voc * (1.0 + COLD_DELTA_C * coeff / 100.0);
    let max_panels_per_string = (inverter.max_input_voltage / voc_at_cold).floor() as u32;

    let vmpp_at_hot = panel.vmpp * (1.0 + HOT_DELTA_C * coeff / 100.0);
    let min_panels_per_string = if vmpp_at_hot > 0.0 {
        (inverter.mppt_min_voltage / vmpp_at_hot).ceil().max(1.0) as u32
    } else {
        // Pathological coefficient: no string length can wake the MPPT.
        u32::MAX
    };

    VoltageWindow {
        min_panels_per_string,
        max_panels_per_string,
        voc_at_cold,
        vmpp_at_hot,
    }
}

impl VoltageWindow {
    /// Whether the window admits at least one string length.
    pub fn is_feasible(&self) -> bool {
        self.min_panels_per_string <= self.max_panels_per_string
    }
}
