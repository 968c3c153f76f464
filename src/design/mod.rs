/// Isc versus MPPT current-limit check.
pub mod current;
/// Orchestrator combining all checks into one report.
pub mod engine;
/// 2-D panel packing onto the roof plane.
pub mod layout;
/// DC/AC loading ratio classification.
pub mod ratio;
/// Diagnostics, validation report, and design result records.
pub mod report;
/// Winter-solstice shadow spacing geometry.
pub mod shadow;
/// String/MPPT distribution search.
pub mod strings;
/// Temperature-compensated string voltage bounds.
pub mod voltage;

pub use engine::{DesignRequest, design};
pub use report::{DesignResult, Diagnostic, Severity, ValidationReport};
