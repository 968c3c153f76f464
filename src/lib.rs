//! Rooftop photovoltaic feasibility and design core.
//!
//! Two pure calculation engines: a multi-scenario financial simulation
//! ([`finance`]) that sizes a system against a roof and projects 25 years of
//! savings, and an engineering design pipeline ([`design`]) that validates a
//! panel/inverter pair electrically and packs panels onto the roof.

pub mod catalog;
/// Engineering design pipeline: voltage, current, ratio, string
/// distribution, shadow spacing, and layout packing.
pub mod design;
pub mod error;
/// CSV export of monthly and yearly projection series.
pub mod export;
/// Financial simulation engine and its input/result types.
pub mod finance;
pub mod settings;
pub mod site;
