//! Diagnostics and result records for the design pipeline.
//!
//! Validation findings accumulate into an ordered message list while the
//! pipeline keeps running (collect-all, not fail-fast); only the hard
//! blockers clear `is_valid`.

use serde::{Deserialize, Serialize};

use crate::catalog::{Battery, HeatPump, Inverter, SolarPanel};

use super::current::CurrentCheck;
use super::layout::LayoutAnalysis;
use super::ratio::RatioStatus;
use super::shadow::ShadowSpacing;
use super::strings::ElectricalConfig;
use super::voltage::VoltageWindow;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// A hard blocker for a commercial design.
    Error,
    /// Accepted risk or suboptimal choice; does not block.
    Warning,
    /// A check that passed, kept for the report.
    Success,
}

/// One validation finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub text: String,
}

impl Diagnostic {
    pub fn error(text: impl Into<String>) -> Self {
        Self { severity: Severity::Error, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { severity: Severity::Success, text: text.into() }
    }
}

/// Aggregated electrical validation for one panel/inverter pairing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// AND of the hard checks: voltage window feasible and string
    /// distribution solved. Warnings never clear this.
    pub is_valid: bool,
    /// Installed DC power over inverter AC rating.
    pub ac_dc_ratio: f64,
    /// Loading band for `ac_dc_ratio`.
    pub ratio_status: RatioStatus,
    /// String layout per MPPT; empty when the distribution is unsolved.
    pub electrical_config: Vec<ElectricalConfig>,
    /// Temperature-compensated voltage bounds.
    pub voltage_check: VoltageWindow,
    /// Per-MPPT current comparison.
    pub current_check: CurrentCheck,
    /// Ordered findings, in pipeline order.
    pub messages: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Convenience filter over `messages`.
    pub fn messages_with(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter().filter(move |m| m.severity == severity)
    }
}

/// Complete output of the engineering design engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignResult {
    /// Panel the design was validated for.
    pub panel: SolarPanel,
    /// Inverter the design was validated for.
    pub inverter: Inverter,
    /// Optional storage add-on.
    pub battery: Option<Battery>,
    /// Optional heat-pump add-on.
    pub heat_pump: Option<HeatPump>,
    /// Rack tilt from horizontal (degrees).
    pub tilt_angle: f64,
    /// Electrical validation outcome.
    pub report: ValidationReport,
    /// Winter-solstice spacing geometry.
    pub shadow: ShadowSpacing,
    /// Roof packing outcome.
    pub layout: LayoutAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_filter() {
        let report = ValidationReport {
            is_valid: true,
            ac_dc_ratio: 1.0,
            ratio_status: RatioStatus::Nominal,
            electrical_config: Vec::new(),
            voltage_check: VoltageWindow {
                min_panels_per_string: 5,
                max_panels_per_string: 20,
                voc_at_cold: 55.0,
                vmpp_at_hot: 37.0,
            },
            current_check: CurrentCheck {
                panel_isc: 13.9,
                inverter_max_current: 22.0,
                is_safe: true,
            },
            messages: vec![
                Diagnostic::success("ok"),
                Diagnostic::warning("hm"),
                Diagnostic::success("ok too"),
            ],
        };
        assert_eq!(report.messages_with(Severity::Success).count(), 2);
        assert_eq!(report.messages_with(Severity::Warning).count(), 1);
        assert_eq!(report.messages_with(Severity::Error).count(), 0);
    }
}
