/// Multi-scenario simulation engine.
pub mod engine;
/// Input, scenario, and result records.
pub mod types;

pub use engine::{simulate, simulate_with_profile};
pub use types::{
    BuildingType, CalculationInput, ConsumptionProfile, MonthlyData, ScenarioKind,
    ScenarioResult, SimulationResult, YearlyData,
};
