//! Multi-scenario financial simulation engine.
//!
//! Pure and deterministic: every call recomputes the full result from its
//! inputs, so concurrent callers need no coordination. Presentation
//! rounding happens only at the aggregation boundary; running series
//! compound on unrounded values.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::Error;
use crate::settings::GlobalSettings;
use crate::site::{self, SiteSolarProfile};

use super::types::{
    CalculationInput, MonthlyData, ScenarioKind, ScenarioResult, SimulationResult,
    YearlyData,
};

/// Heuristic roof area consumed per installed kW (m²/kW).
const AREA_PER_KW_M2: f64 = 6.0;

/// Grid feed-in price as a fraction of the purchase tariff.
const SELL_PRICE_MULTIPLIER: f64 = 0.6;

/// Avoided CO₂ per produced kWh (kg).
const CO2_KG_PER_KWH: f64 = 0.65;

/// Projection horizon in years.
const PROJECTION_YEARS: u32 = 25;

/// The maintenance event (inverter replacement) lands in this year.
const MAINTENANCE_YEAR: u32 = 10;

const DAYS_IN_MONTH: [f64; 12] = [
    31.0, 28.0, 31.0, 30.0, 31.0, 30.0, 31.0, 31.0, 30.0, 31.0, 30.0, 31.0,
];

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Runs the full simulation, resolving the site from the input coordinates.
///
/// # Errors
///
/// Returns [`Error::DataNotFound`] if the input carries no coordinates or
/// no solar profile resolves from `sites`.
pub fn simulate(
    input: &CalculationInput,
    settings: &GlobalSettings,
    sites: &[SiteSolarProfile],
) -> Result<SimulationResult, Error> {
    let coords = input
        .coordinates
        .ok_or_else(|| Error::data_not_found("site coordinates"))?;
    let matched = site::resolve_nearest(coords, sites)?;
    Ok(simulate_with_profile(input, settings, &matched.profile))
}

/// Runs the full simulation against an already-resolved solar profile.
///
/// Produces one [`ScenarioResult`] per scenario and recommends Optimal.
pub fn simulate_with_profile(
    input: &CalculationInput,
    settings: &GlobalSettings,
    profile: &SiteSolarProfile,
) -> SimulationResult {
    let mut scenarios = BTreeMap::new();
    for kind in ScenarioKind::ALL {
        scenarios.insert(kind, run_scenario(kind, input, settings, profile));
    }

    SimulationResult {
        scenarios,
        recommended: ScenarioKind::Optimal,
        site: profile.clone(),
        input: input.clone(),
    }
}

fn run_scenario(
    kind: ScenarioKind,
    input: &CalculationInput,
    settings: &GlobalSettings,
    profile: &SiteSolarProfile,
) -> ScenarioResult {
    let direction_eff = input.roof_direction.efficiency();
    let tariff = settings.electricity_price * input.building_type.tariff_multiplier();
    let annual_consumption = (input.bill_amount / tariff) * 12.0;

    // 1. Size against the offset target, then clamp to the roof. A
    // non-positive roof area degrades to a zero-size system, not an error.
    let system_efficiency = 1.0 - kind.system_loss_factor();
    let specific_yield = profile.avg_insolation * 365.0 * direction_eff;
    let target_kw =
        (annual_consumption * kind.offset_target()) / (specific_yield * system_efficiency);
    let max_kw_from_roof = (input.roof_area / AREA_PER_KW_M2).max(0.0);
    let system_kw = target_kw.min(max_kw_from_roof);
    let panel_count = ((system_kw * 1000.0) / settings.panel_wattage).ceil() as u32;

    debug!(scenario = %kind, system_kw, panel_count, "scenario sized");

    // 2. Self-consumption rate from the daily load shape.
    let self_consumption_rate = (input.consumption_profile.base_self_consumption()
        + kind.self_consumption_nudge())
    .clamp(0.20, 0.95);

    // 3. First-year monthly simulation on a flat consumption profile.
    let monthly_consumption = annual_consumption / 12.0;
    let mut monthly = Vec::with_capacity(12);
    let mut annual_production = 0.0;
    let mut annual_savings = 0.0;
    let mut annual_self_consumed = 0.0;
    let mut annual_surplus = 0.0;

    for (index, factor) in profile.monthly_factors.iter().enumerate() {
        let monthly_insolation = profile.avg_insolation * factor;
        let production = system_kw
            * monthly_insolation
            * DAYS_IN_MONTH[index]
            * system_efficiency
            * direction_eff;
        let self_consumed = production.min(monthly_consumption) * self_consumption_rate;
        let surplus = (production - self_consumed).max(0.0);
        let deficit = (monthly_consumption - production).max(0.0);
        let savings = self_consumed * tariff + surplus * tariff * SELL_PRICE_MULTIPLIER;

        annual_production += production;
        annual_savings += savings;
        annual_self_consumed += self_consumed;
        annual_surplus += surplus;

        monthly.push(MonthlyData {
            month: MONTH_LABELS[index].to_string(),
            production: production.round(),
            consumption: monthly_consumption.round(),
            surplus: surplus.round(),
            deficit: deficit.round(),
            savings: savings.round(),
        });
    }

    // 4. Capex.
    let total_cost_usd = system_kw * settings.system_cost_per_kw;
    let total_cost_local = total_cost_usd * settings.usd_rate;

    // 5. 25-year projection with compounding degradation and inflation.
    let mut yearly = Vec::with_capacity(PROJECTION_YEARS as usize);
    let mut cumulative_savings = 0.0;
    let mut cumulative_cost = total_cost_local;
    let mut cumulative_bill_without_solar = 0.0;

    for year in 1..=PROJECTION_YEARS {
        let degradation_factor =
            (1.0 - settings.panel_degradation_rate).powi(year as i32 - 1);
        let inflation_factor =
            (1.0 + settings.energy_inflation_rate).powi(year as i32 - 1);

        let year_production = annual_production * degradation_factor;
        let year_savings = annual_savings * degradation_factor * inflation_factor;
        let year_bill_without_solar = annual_consumption * tariff * inflation_factor;
        cumulative_bill_without_solar += year_bill_without_solar;

        let maintenance = if year == MAINTENANCE_YEAR {
            total_cost_local * settings.maintenance_cost_fraction
        } else {
            0.0
        };

        cumulative_savings += year_savings;
        cumulative_cost += maintenance;

        let roi_pct = if total_cost_local > 0.0 {
            (cumulative_savings / total_cost_local) * 100.0
        } else {
            0.0
        };

        yearly.push(YearlyData {
            year,
            production: year_production.round(),
            consumption: annual_consumption.round(),
            savings: year_savings.round(),
            cumulative_savings: cumulative_savings.round(),
            cumulative_cost: cumulative_cost.round(),
            net_profit: (cumulative_savings - cumulative_cost).round(),
            roi_pct: round1(roi_pct),
            degradation_factor: round4(degradation_factor),
            cash_flow_without_solar: -cumulative_bill_without_solar.round(),
        });
    }

    // 6. Aggregates. Payback always reports a year; an unprofitable system
    // reports the full horizon.
    let payback_year = yearly
        .iter()
        .find(|y| y.net_profit > 0.0)
        .map_or(PROJECTION_YEARS, |y| y.year);
    let self_consumption_pct = if annual_production > 0.0 {
        (annual_self_consumed / annual_production) * 100.0
    } else {
        0.0
    };
    let co2_saved_tons = annual_production * CO2_KG_PER_KWH / 1000.0;
    let net_profit_25_years = yearly[PROJECTION_YEARS as usize - 1].net_profit;
    let average_roi_pct = yearly[PROJECTION_YEARS as usize - 1].roi_pct;

    ScenarioResult {
        kind,
        system_size_kw: round2(system_kw),
        panel_count,
        total_cost_usd: total_cost_usd.round(),
        total_cost_local: total_cost_local.round(),
        payback_year,
        net_profit_25_years,
        monthly_savings: (annual_savings / 12.0).round(),
        co2_saved_tons: round2(co2_saved_tons),
        self_consumption_pct: round1(self_consumption_pct),
        monthly,
        yearly,
        average_roi_pct,
        grid_sale_revenue: (annual_surplus * tariff * SELL_PRICE_MULTIPLIER).round(),
        initial_investment: total_cost_local.round(),
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
