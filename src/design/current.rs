//! Per-MPPT current safety check.

use serde::{Deserialize, Serialize};

use crate::catalog::{Inverter, SolarPanel};

/// Outcome of comparing panel short-circuit current against the inverter's
/// per-MPPT limit. Feeds a diagnostic message; an overload is a clipping
/// risk, not a blocking failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurrentCheck {
    /// Panel short-circuit current (A).
    pub panel_isc: f64,
    /// Inverter maximum current per MPPT (A).
    pub inverter_max_current: f64,
    /// `panel_isc <= inverter_max_current`.
    pub is_safe: bool,
}

/// Compares one string's worth of short-circuit current against the MPPT
/// limit.
pub fn check_string_current(panel: &SolarPanel, inverter: &Inverter) -> CurrentCheck {
    CurrentCheck {
        panel_isc: panel.isc,
        inverter_max_current: inverter.max_current_per_mppt,
        is_safe: panel.isc <= inverter.max_current_per_mppt,
    }
}
