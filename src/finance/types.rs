//! Input, scenario, and result records for the financial simulation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::site::{Coordinates, RoofDirection, SiteSolarProfile};

/// How the customer's consumption is distributed across the day.
///
/// Drives the self-consumption rate: daytime load overlaps production,
/// evening load mostly does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsumptionProfile {
    /// Load concentrated 08:00–18:00 (offices, workshops).
    DayWeighted,
    /// Flat around-the-clock load (factories, home office).
    Balanced,
    /// Load after 18:00 (typical households).
    EveningWeighted,
}

impl ConsumptionProfile {
    /// Base fraction of production consumed on site, before the scenario
    /// nudge and clamp.
    pub fn base_self_consumption(self) -> f64 {
        match self {
            ConsumptionProfile::DayWeighted => 0.90,
            ConsumptionProfile::Balanced => 0.65,
            ConsumptionProfile::EveningWeighted => 0.40,
        }
    }
}

/// Subscription class, selecting the tariff applied to the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    Residential,
    Commercial,
    Industrial,
}

impl BuildingType {
    /// Tariff multiplier applied to [`crate::settings::GlobalSettings::electricity_price`].
    pub fn tariff_multiplier(self) -> f64 {
        match self {
            BuildingType::Residential => 1.0,
            BuildingType::Commercial => 1.25,
            BuildingType::Industrial => 0.9,
        }
    }
}

/// Validated numeric input handed over by the wizard collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Daily consumption shape.
    pub consumption_profile: ConsumptionProfile,
    /// Subscription class.
    pub building_type: BuildingType,
    /// Current monthly bill (local currency).
    pub bill_amount: f64,
    /// Usable roof area (m²).
    pub roof_area: f64,
    /// Roof orientation.
    pub roof_direction: RoofDirection,
    /// Roof coordinates from the map collaborator, when drawn.
    pub coordinates: Option<Coordinates>,
}

/// The three named sizing scenarios.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ScenarioKind {
    /// 70% offset, 20% system losses.
    Conservative,
    /// 100% offset, 15% system losses. Always the recommendation.
    Optimal,
    /// 120% offset, 12% system losses.
    Aggressive,
}

impl ScenarioKind {
    /// Fraction of annual consumption the system targets.
    pub fn offset_target(self) -> f64 {
        match self {
            ScenarioKind::Conservative => 0.7,
            ScenarioKind::Optimal => 1.0,
            ScenarioKind::Aggressive => 1.2,
        }
    }

    /// Combined wiring/soiling/inverter loss fraction assumed.
    pub fn system_loss_factor(self) -> f64 {
        match self {
            ScenarioKind::Conservative => 0.20,
            ScenarioKind::Optimal => 0.15,
            ScenarioKind::Aggressive => 0.12,
        }
    }

    /// Adjustment applied to the profile's base self-consumption rate.
    pub fn self_consumption_nudge(self) -> f64 {
        match self {
            ScenarioKind::Conservative => -0.05,
            ScenarioKind::Optimal => 0.0,
            ScenarioKind::Aggressive => 0.05,
        }
    }

    /// All scenarios in evaluation order.
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::Conservative,
        ScenarioKind::Optimal,
        ScenarioKind::Aggressive,
    ];
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScenarioKind::Conservative => "Conservative",
            ScenarioKind::Optimal => "Optimal",
            ScenarioKind::Aggressive => "Aggressive",
        };
        write!(f, "{name}")
    }
}

/// One month of the first-year production/savings simulation.
///
/// Energy in kWh, money in local currency, rounded for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyData {
    /// Month label ("Jan" through "Dec").
    pub month: String,
    /// PV production (kWh).
    pub production: f64,
    /// Consumption (kWh, flat profile).
    pub consumption: f64,
    /// Production exported to the grid (kWh).
    pub surplus: f64,
    /// Consumption still drawn from the grid (kWh).
    pub deficit: f64,
    /// Bill reduction plus sale revenue (local currency).
    pub savings: f64,
}

/// One year of the 25-year cash-flow projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyData {
    /// Year number, 1-based.
    pub year: u32,
    /// Degraded production (kWh).
    pub production: f64,
    /// Consumption (kWh, held constant).
    pub consumption: f64,
    /// Savings for this year, degradation- and inflation-scaled.
    pub savings: f64,
    /// Running savings total.
    pub cumulative_savings: f64,
    /// Running cost total (capex plus the year-10 maintenance event).
    pub cumulative_cost: f64,
    /// `cumulative_savings - cumulative_cost`.
    pub net_profit: f64,
    /// Cumulative savings as a percentage of capex.
    pub roi_pct: f64,
    /// `(1 - degradation)^(year-1)`, rounded to 4 decimals.
    pub degradation_factor: f64,
    /// Negative running total of what the grid would have billed without
    /// solar, for the comparison chart.
    pub cash_flow_without_solar: f64,
}

/// Aggregate result for one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario this result belongs to.
    pub kind: ScenarioKind,
    /// Installed DC size (kW, roof-clamped).
    pub system_size_kw: f64,
    /// Module count at the assumed panel wattage.
    pub panel_count: u32,
    /// Capex (USD).
    pub total_cost_usd: f64,
    /// Capex (local currency).
    pub total_cost_local: f64,
    /// First year with positive net profit, or 25.
    pub payback_year: u32,
    /// Net profit at year 25 (local currency).
    pub net_profit_25_years: f64,
    /// First-year average monthly savings (local currency).
    pub monthly_savings: f64,
    /// Avoided CO₂ (tons/year).
    pub co2_saved_tons: f64,
    /// Share of production consumed on site (%).
    pub self_consumption_pct: f64,
    /// First-year monthly simulation, January through December.
    pub monthly: Vec<MonthlyData>,
    /// 25-year projection.
    pub yearly: Vec<YearlyData>,
    /// ROI at year 25 (%).
    pub average_roi_pct: f64,
    /// First-year revenue from surplus sold to the grid (local currency).
    pub grid_sale_revenue: f64,
    /// Capex in local currency (duplicate of `total_cost_local`, kept as
    /// the reporting collaborator's field name).
    pub initial_investment: f64,
}

/// Complete simulation output: one result per scenario plus the resolved
/// site and the original input, so a report can be regenerated later from
/// the same numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Per-scenario results, keyed in scenario order.
    pub scenarios: BTreeMap<ScenarioKind, ScenarioResult>,
    /// The scenario presented first. Always [`ScenarioKind::Optimal`].
    pub recommended: ScenarioKind,
    /// The solar profile the simulation ran against.
    pub site: SiteSolarProfile,
    /// The input as received.
    pub input: CalculationInput,
}
