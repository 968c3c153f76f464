//! Engineering design orchestrator.
//!
//! Runs shadow geometry and layout packing first, then validates the
//! resulting array electrically: voltage window, string distribution,
//! current limit, and DC/AC loading. Every check contributes a diagnostic
//! whether it passes or not; the pipeline never stops early. Only an
//! inverted voltage window or an unsolved string distribution invalidates
//! the design — current overload and loading imbalance are accepted risks
//! reported as warnings.

use tracing::{debug, warn};

use crate::catalog::{Battery, HeatPump, Inverter, SolarPanel};

use super::current::check_string_current;
use super::layout;
use super::ratio::{self, RatioStatus};
use super::report::{DesignResult, Diagnostic, ValidationReport};
use super::shadow::winter_spacing;
use super::strings::{self, Distribution};
use super::voltage::string_voltage_window;

/// Everything the design engine needs for one run.
///
/// Borrowed catalog records keep the engine free of ownership demands on
/// the caller's equipment tables.
#[derive(Debug, Clone, Copy)]
pub struct DesignRequest<'a> {
    /// Site latitude (degrees north), for shadow geometry.
    pub site_latitude: f64,
    /// Roof edge hosting the panel rows (m).
    pub roof_width: f64,
    /// Roof edge the rows advance along (m).
    pub roof_length: f64,
    /// Candidate panel.
    pub panel: &'a SolarPanel,
    /// Candidate inverter.
    pub inverter: &'a Inverter,
    /// Rack tilt from horizontal (degrees).
    pub tilt_deg: f64,
    /// Tilted racking with shadow spacing vs. flush mount.
    pub is_flat_roof: bool,
    /// Optional storage add-on.
    pub battery: Option<&'a Battery>,
    /// Optional heat-pump add-on.
    pub heat_pump: Option<&'a HeatPump>,
}

/// Produces a validated design for the requested roof and equipment.
pub fn design(request: &DesignRequest<'_>) -> DesignResult {
    debug!(
        panel = %request.panel.model,
        inverter = %request.inverter.model,
        tilt = request.tilt_deg,
        flat = request.is_flat_roof,
        "running design pipeline"
    );

    // 1. Geometry: shadow spacing, then the packing it constrains.
    // Portrait mounting, so the slope dimension is the module height.
    let shadow = winter_spacing(request.site_latitude, request.tilt_deg, request.panel.height_m);
    let layout = layout::pack(
        request.roof_width,
        request.roof_length,
        request.panel,
        request.tilt_deg,
        request.is_flat_roof,
        &shadow,
    );

    let mut messages = Vec::new();
    let mut is_valid = true;

    // 2. Voltage window.
    let voltage_check = string_voltage_window(request.panel, request.inverter);
    if voltage_check.is_feasible() {
        messages.push(Diagnostic::success(format!(
            "string length {}..{} panels keeps {:.1} V cold Voc under the {:.0} V input \
             limit and wakes the MPPT at {:.1} V hot Vmpp",
            voltage_check.min_panels_per_string,
            voltage_check.max_panels_per_string,
            voltage_check.voc_at_cold,
            request.inverter.max_input_voltage,
            voltage_check.vmpp_at_hot,
        )));
    } else {
        is_valid = false;
        messages.push(Diagnostic::error(format!(
            "panel voltage range does not fit the inverter MPPT window: maximum string \
             length {} is below the minimum {}",
            voltage_check.max_panels_per_string, voltage_check.min_panels_per_string,
        )));
    }

    // 3. String distribution for the packed panel count.
    let distribution = strings::distribute(
        layout.total_panel_count,
        request.inverter,
        voltage_check.min_panels_per_string,
        voltage_check.max_panels_per_string,
    );
    let electrical_config = match distribution {
        Distribution::Solved(config) => {
            if config.is_empty() {
                messages.push(Diagnostic::warning(
                    "no panels fit on the roof; electrical configuration is empty",
                ));
            } else {
                let strings_total: u32 = config.iter().map(|c| c.string_count).sum();
                messages.push(Diagnostic::success(format!(
                    "{} panels distributed as {} string(s) of {} across {} MPPT(s)",
                    layout.total_panel_count,
                    strings_total,
                    config[0].panels_per_string,
                    config.len(),
                )));
            }
            config
        }
        Distribution::Unsolved(reason) => {
            warn!(%reason, "string distribution failed");
            is_valid = false;
            messages.push(Diagnostic::error(format!(
                "string distribution failed: {reason}"
            )));
            Vec::new()
        }
    };

    // 4. Current limit: clipping risk, accepted with a warning.
    let current_check = check_string_current(request.panel, request.inverter);
    if current_check.is_safe {
        messages.push(Diagnostic::success(format!(
            "panel Isc {:.1} A is within the {:.1} A MPPT limit",
            current_check.panel_isc, current_check.inverter_max_current,
        )));
    } else {
        messages.push(Diagnostic::warning(format!(
            "panel Isc {:.1} A exceeds the {:.1} A MPPT limit; current clipping is \
             likely under high irradiance",
            current_check.panel_isc, current_check.inverter_max_current,
        )));
    }

    // 5. DC/AC loading.
    let ratio_analysis = ratio::analyze(layout.total_panel_count, request.panel, request.inverter);
    match ratio_analysis.status {
        RatioStatus::Underloaded => messages.push(Diagnostic::warning(format!(
            "DC/AC ratio {:.2} underloads the inverter; a smaller model would be \
             more economical",
            ratio_analysis.ratio,
        ))),
        RatioStatus::Nominal => messages.push(Diagnostic::success(format!(
            "DC/AC ratio {:.2} is nominal",
            ratio_analysis.ratio,
        ))),
        RatioStatus::Optimal => messages.push(Diagnostic::success(format!(
            "DC/AC ratio {:.2} is in the optimal oversizing band",
            ratio_analysis.ratio,
        ))),
        RatioStatus::Clipping => messages.push(Diagnostic::warning(format!(
            "DC/AC ratio {:.2} will clip routinely; consider a larger inverter",
            ratio_analysis.ratio,
        ))),
    }

    // 6. Add-ons contribute information only; they never change validity.
    if let Some(battery) = request.battery {
        if battery.is_compatible_with(&request.inverter.brand) {
            messages.push(Diagnostic::success(format!(
                "battery {} {} pairs with the {} inverter",
                battery.brand, battery.model, request.inverter.brand,
            )));
        } else {
            messages.push(Diagnostic::warning(format!(
                "battery {} {} lists no compatibility with {} inverters; a hybrid \
                 coupling kit may be required",
                battery.brand, battery.model, request.inverter.brand,
            )));
        }
    }
    if let Some(heat_pump) = request.heat_pump {
        messages.push(Diagnostic::success(format!(
            "heat pump {} {} adds about {:.1} kW of electrical load at rated output",
            heat_pump.brand,
            heat_pump.model,
            heat_pump.electrical_power_kw(),
        )));
    }

    DesignResult {
        panel: request.panel.clone(),
        inverter: request.inverter.clone(),
        battery: request.battery.cloned(),
        heat_pump: request.heat_pump.cloned(),
        tilt_angle: request.tilt_deg,
        report: ValidationReport {
            is_valid,
            ac_dc_ratio: ratio_analysis.ratio,
            ratio_status: ratio_analysis.status,
            electrical_config,
            voltage_check,
            current_check,
            messages,
        },
        shadow,
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_batteries, sample_heat_pumps};
    use crate::design::report::Severity;

    fn panel() -> SolarPanel {
        SolarPanel::new(
            "t", "Test", "T-545", 545.0, 49.6, 13.9, 41.8, 13.04, 1.134, 2.279, -0.27,
            175.0,
        )
    }

    fn inverter() -> Inverter {
        Inverter::new(
            "t", "Huawei", "T-20K", 20.0, 1100.0, 200.0, 800.0, 2, 2, 22.0, 200.0, 1800.0,
        )
    }

    fn request<'a>(panel: &'a SolarPanel, inverter: &'a Inverter) -> DesignRequest<'a> {
        DesignRequest {
            site_latitude: 39.93,
            roof_width: 10.0,
            roof_length: 12.0,
            panel,
            inverter,
            tilt_deg: 20.0,
            is_flat_roof: false,
            battery: None,
            heat_pump: None,
        }
    }

    #[test]
    fn valid_design_collects_success_messages() {
        let (p, inv) = (panel(), inverter());
        let result = design(&request(&p, &inv));
        assert!(result.report.is_valid, "messages: {:?}", result.report.messages);
        assert!(!result.report.electrical_config.is_empty());
        assert!(result.report.messages_with(Severity::Error).count() == 0);
        assert!(result.report.messages_with(Severity::Success).count() >= 3);
    }

    #[test]
    fn config_panel_sum_matches_layout() {
        let (p, inv) = (panel(), inverter());
        let result = design(&request(&p, &inv));
        let packed: u32 = result
            .report
            .electrical_config
            .iter()
            .map(|c| c.string_count * c.panels_per_string)
            .sum();
        assert_eq!(packed, result.layout.total_panel_count);
    }

    #[test]
    fn unsolved_distribution_invalidates_but_keeps_reporting() {
        let p = panel();
        // Single-MPPT single-string inverter cannot take the packed array.
        let inv = Inverter::new(
            "t", "Test", "T-5K", 5.0, 1100.0, 200.0, 800.0, 1, 1, 22.0, 200.0, 900.0,
        );
        let result = design(&request(&p, &inv));
        assert!(!result.report.is_valid);
        assert!(result.report.messages_with(Severity::Error).count() >= 1);
        // The pipeline still ran the later checks.
        assert!(result.report.messages_with(Severity::Success).count() >= 1);
        assert!(result.report.electrical_config.is_empty());
    }

    #[test]
    fn current_overload_is_a_warning_not_a_blocker() {
        let p = panel();
        let inv = Inverter::new(
            "t", "Test", "T-20K", 20.0, 1100.0, 200.0, 800.0, 2, 2, 13.5, 200.0, 1800.0,
        );
        let result = design(&request(&p, &inv));
        assert!(
            result
                .report
                .messages_with(Severity::Warning)
                .any(|m| m.text.contains("Isc")),
            "messages: {:?}",
            result.report.messages
        );
        assert!(!result.report.current_check.is_safe);
        // Overload alone does not clear validity.
        assert_eq!(
            result.report.is_valid,
            result.report.messages_with(Severity::Error).count() == 0
        );
    }

    #[test]
    fn empty_roof_produces_empty_but_valid_degenerate_design() {
        let (p, inv) = (panel(), inverter());
        let mut req = request(&p, &inv);
        req.roof_width = 0.0;
        let result = design(&req);
        assert_eq!(result.layout.total_panel_count, 0);
        assert!(result.report.electrical_config.is_empty());
        // Zero panels distribute trivially; validity hinges on the voltage
        // window only.
        assert!(result.report.is_valid);
    }

    #[test]
    fn battery_compatibility_messages() {
        let (p, inv) = (panel(), inverter()); // Huawei inverter
        let batteries = sample_batteries();

        let mut req = request(&p, &inv);
        req.battery = Some(&batteries[0]); // Huawei-only battery
        let result = design(&req);
        assert!(
            result
                .report
                .messages_with(Severity::Success)
                .any(|m| m.text.contains("pairs with"))
        );

        let fronius = Inverter::new(
            "t", "Fronius", "Symo", 10.0, 1000.0, 200.0, 800.0, 2, 2, 27.0, 200.0, 1600.0,
        );
        let mut req = request(&p, &fronius);
        req.battery = Some(&batteries[0]);
        let result = design(&req);
        assert!(
            result
                .report
                .messages_with(Severity::Warning)
                .any(|m| m.text.contains("compatibility"))
        );
        // Compatibility never blocks.
        assert!(result.report.is_valid);
    }

    #[test]
    fn heat_pump_is_informational() {
        let (p, inv) = (panel(), inverter());
        let pumps = sample_heat_pumps();
        let mut req = request(&p, &inv);
        req.heat_pump = Some(&pumps[0]);
        let with = design(&req);
        req.heat_pump = None;
        let without = design(&req);
        assert_eq!(with.report.is_valid, without.report.is_valid);
        assert_eq!(
            with.report.messages.len(),
            without.report.messages.len() + 1
        );
    }

    #[test]
    fn deterministic_across_calls() {
        let (p, inv) = (panel(), inverter());
        let a = design(&request(&p, &inv));
        let b = design(&request(&p, &inv));
        assert_eq!(a.report.is_valid, b.report.is_valid);
        assert_eq!(a.report.electrical_config, b.report.electrical_config);
        assert_eq!(a.layout.total_panel_count, b.layout.total_panel_count);
        assert_eq!(a.report.messages.len(), b.report.messages.len());
    }
}
