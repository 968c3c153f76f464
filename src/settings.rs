//! Global commercial settings snapshot, loadable from TOML.
//!
//! The settings provider hands the engines one immutable snapshot per call.
//! Defaults match current Tier-1 equipment pricing; operators override them
//! from a TOML file.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Commercial and physical assumptions shared by every calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalSettings {
    /// Local currency per USD.
    pub usd_rate: f64,
    /// Base grid tariff (local currency per kWh) before building-type
    /// multipliers.
    pub electricity_price: f64,
    /// Panel wattage assumed when converting system size to a module count.
    pub panel_wattage: f64,
    /// Turnkey installed cost (USD per kW DC).
    pub system_cost_per_kw: f64,
    /// Annual real energy-price inflation (fraction, e.g. 0.05).
    pub energy_inflation_rate: f64,
    /// Annual panel output degradation (fraction, e.g. 0.005).
    pub panel_degradation_rate: f64,
    /// One-time maintenance charge at year 10, as a fraction of capex
    /// (covers the inverter replacement).
    pub maintenance_cost_fraction: f64,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            usd_rate: 34.50,
            electricity_price: 3.5,
            panel_wattage: 550.0,
            system_cost_per_kw: 800.0,
            energy_inflation_rate: 0.05,
            panel_degradation_rate: 0.005,
            maintenance_cost_fraction: 0.05,
        }
    }
}

/// Settings error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Field path (e.g. `"usd_rate"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "settings error: {}: {}", self.field, self.message)
    }
}

impl GlobalSettings {
    /// Parses settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "settings".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the snapshot is usable.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.usd_rate <= 0.0 {
            errors.push(ConfigError {
                field: "usd_rate".into(),
                message: "must be > 0".into(),
            });
        }
        if self.electricity_price <= 0.0 {
            errors.push(ConfigError {
                field: "electricity_price".into(),
                message: "must be > 0".into(),
            });
        }
        if self.panel_wattage <= 0.0 {
            errors.push(ConfigError {
                field: "panel_wattage".into(),
                message: "must be > 0".into(),
            });
        }
        if self.system_cost_per_kw <= 0.0 {
            errors.push(ConfigError {
                field: "system_cost_per_kw".into(),
                message: "must be > 0".into(),
            });
        }
        if !(0.0..1.0).contains(&self.energy_inflation_rate) {
            errors.push(ConfigError {
                field: "energy_inflation_rate".into(),
                message: "must be in [0.0, 1.0)".into(),
            });
        }
        if !(0.0..1.0).contains(&self.panel_degradation_rate) {
            errors.push(ConfigError {
                field: "panel_degradation_rate".into(),
                message: "must be in [0.0, 1.0)".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.maintenance_cost_fraction) {
            errors.push(ConfigError {
                field: "maintenance_cost_fraction".into(),
                message: "must be in [0.0, 1.0]".into(),
            });
        }

        errors
    }
}
