//! DC/AC loading ratio classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Inverter, SolarPanel};

/// Inverter loading band for a given DC array.
///
/// Band edges are fixed and inclusive at the lower edge of each subsequent
/// tier: `<0.8` underloaded, `[0.8, 1.1]` nominal, `(1.1, 1.35]` optimal,
/// `>1.35` clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioStatus {
    /// Inverter capacity wasted; the array is too small.
    Underloaded,
    /// Conventional 1:1 sizing.
    Nominal,
    /// Deliberate oversizing that maximizes yield per inverter.
    Optimal,
    /// Oversized to the point of routine power clipping.
    Clipping,
}

impl fmt::Display for RatioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RatioStatus::Underloaded => "underloaded",
            RatioStatus::Nominal => "nominal",
            RatioStatus::Optimal => "optimal",
            RatioStatus::Clipping => "clipping",
        };
        write!(f, "{name}")
    }
}

/// DC/AC ratio and its band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RatioAnalysis {
    /// Installed DC power over inverter AC rating.
    pub ratio: f64,
    /// Loading band the ratio falls into.
    pub status: RatioStatus,
}

/// Classifies the DC/AC ratio for a panel count on one inverter.
pub fn analyze(total_panel_count: u32, panel: &SolarPanel, inverter: &Inverter) -> RatioAnalysis {
    let dc_kw = f64::from(total_panel_count) * panel.power_w / 1000.0;
    let ratio = dc_kw / inverter.power_kw;
    RatioAnalysis {
        ratio,
        status: classify(ratio),
    }
}

fn classify(ratio: f64) -> RatioStatus {
    if ratio < 0.8 {
        RatioStatus::Underloaded
    } else if ratio <= 1.1 {
        RatioStatus::Nominal
    } else if ratio <= 1.35 {
        RatioStatus::Optimal
    } else {
        RatioStatus::Clipping
    }
}
