//! String/MPPT distribution search.
//!
//! Bounded brute force: scan candidate string lengths longest-first (longer
//! strings mean lower current and lower ohmic losses), accept the first
//! length that divides the panel count and fits the inverter's string
//! capacity, then spread the strings across MPPTs with a balanced greedy
//! assignment. Only perfectly symmetric layouts are attempted; mixing
//! string lengths across MPPTs is out of scope by design.

use serde::{Deserialize, Serialize};

use crate::catalog::Inverter;

/// One MPPT channel's share of the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectricalConfig {
    /// MPPT channel number, 1-based.
    pub mppt_id: u32,
    /// Parallel strings on this channel.
    pub string_count: u32,
    /// Series panels per string (same length on every channel).
    pub panels_per_string: u32,
}

/// Outcome of the distribution search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distribution {
    /// A feasible symmetric layout, one entry per MPPT actually used.
    Solved(Vec<ElectricalConfig>),
    /// No symmetric layout exists; the reason is meant for the report. The
    /// caller must treat this as blocking for a commercial design.
    Unsolved(String),
}

impl Distribution {
    /// Returns the configuration if the search succeeded.
    pub fn config(&self) -> Option<&[ElectricalConfig]> {
        match self {
            Distribution::Solved(config) => Some(config),
            Distribution::Unsolved(_) => None,
        }
    }
}

/// Searches for a string layout for `total_panels` on the given inverter.
///
/// `min_per_string`/`max_per_string` come from the voltage window. Zero
/// panels succeed trivially with an empty configuration. Re-running with
/// identical inputs yields an identical result.
pub fn distribute(
    total_panels: u32,
    inverter: &Inverter,
    min_per_string: u32,
    max_per_string: u32,
) -> Distribution {
    if total_panels == 0 {
        return Distribution::Solved(Vec::new());
    }

    let capacity = inverter.total_string_capacity();
    // A string longer than the array cannot divide it.
    let upper = max_per_string.min(total_panels);
    let lower = min_per_string.max(1);

    for length in (lower..=upper).rev() {
        if total_panels % length != 0 {
            continue;
        }
        let num_strings = total_panels / length;
        if num_strings > capacity {
            continue;
        }
        return Distribution::Solved(assign_to_mppts(num_strings, length, inverter));
    }

    Distribution::Unsolved(format!(
        "no string length in [{min_per_string}, {max_per_string}] divides {total_panels} \
         panels into at most {capacity} strings"
    ))
}

/// Spreads `num_strings` strings of `length` panels across the inverter's
/// MPPTs: each channel takes `ceil(remaining / remaining_channels)` strings,
/// capped at the per-channel input count. Balanced and deterministic, not
/// necessarily globally optimal.
fn assign_to_mppts(num_strings: u32, length: u32, inverter: &Inverter) -> Vec<ElectricalConfig> {
    let mut config = Vec::new();
    let mut remaining = num_strings;

    for mppt in 0..inverter.mppt_count {
        if remaining == 0 {
            break;
        }
        let remaining_mppts = inverter.mppt_count - mppt;
        let take = remaining
            .div_ceil(remaining_mppts)
            .min(inverter.max_strings_per_mppt);
        config.push(ElectricalConfig {
            mppt_id: mppt + 1,
            string_count: take,
            panels_per_string: length,
        });
        remaining -= take;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inverter(mppt_count: u32, strings_per_mppt: u32) -> Inverter {
        Inverter::new(
            "t",
            "Test",
            "T",
            20.0,
            1100.0,
            200.0,
            800.0,
            mppt_count,
            strings_per_mppt,
            22.0,
            200.0,
            1800.0,
        )
    }

    fn panel_sum(config: &[ElectricalConfig]) -> u32 {
        config
            .iter()
            .map(|c| c.string_count * c.panels_per_string)
            .sum()
    }

    #[test]
    fn twenty_panels_split_into_two_tens() {
        let inv = inverter(2, 2);
        let dist = distribute(20, &inv, 8, 13);
        let config = dist.config().expect("20 panels should distribute");
        assert_eq!(config.len(), 2);
        assert_eq!(config[0].panels_per_string, 10);
        assert_eq!(config[0].string_count, 1);
        assert_eq!(config[1].string_count, 1);
        assert_eq!(panel_sum(config), 20);
    }

    #[test]
    fn prefers_longest_string() {
        // 24 panels, range [6, 12]: 12 divides, so two strings of 12 beat
        // four of 6.
        let inv = inverter(2, 2);
        let dist = distribute(24, &inv, 6, 12);
        let config = dist.config().expect("24 panels should distribute");
        assert_eq!(config[0].panels_per_string, 12);
        assert_eq!(panel_sum(config), 24);
    }

    #[test]
    fn prime_count_outside_range_is_unsolved() {
        let inv = inverter(2, 2);
        let dist = distribute(7, &inv, 8, 13);
        match dist {
            Distribution::Unsolved(reason) => assert!(reason.contains("7 panels")),
            Distribution::Solved(_) => panic!("7 panels must not distribute in [8, 13]"),
        }
    }

    #[test]
    fn zero_panels_is_trivially_solved() {
        let inv = inverter(2, 2);
        assert_eq!(distribute(0, &inv, 8, 13), Distribution::Solved(Vec::new()));
    }

    #[test]
    fn inverted_window_is_unsolved() {
        let inv = inverter(2, 2);
        assert!(matches!(
            distribute(20, &inv, 13, 8),
            Distribution::Unsolved(_)
        ));
    }

    #[test]
    fn respects_total_string_capacity() {
        // 40 panels in strings of 10 needs 4 strings; a 2x1 inverter only
        // takes 2.
        let inv = inverter(2, 1);
        assert!(matches!(
            distribute(40, &inv, 10, 10),
            Distribution::Unsolved(_)
        ));
    }

    #[test]
    fn greedy_assignment_balances_channels() {
        // 36 panels in strings of 12 -> 3 strings on a 2x2 inverter:
        // ceil(3/2)=2 on MPPT 1, then 1 on MPPT 2.
        let inv = inverter(2, 2);
        let config = distribute(36, &inv, 10, 12)
            .config()
            .expect("36 panels should distribute")
            .to_vec();
        assert_eq!(config.len(), 2);
        assert_eq!((config[0].string_count, config[1].string_count), (2, 1));
        assert_eq!(panel_sum(&config), 36);
    }

    #[test]
    fn string_count_never_exceeds_capacity() {
        let inv = inverter(3, 2);
        for total in [6, 12, 18, 24, 30, 36] {
            if let Some(config) = distribute(total, &inv, 2, 12).config() {
                let strings: u32 = config.iter().map(|c| c.string_count).sum();
                assert!(strings <= inv.total_string_capacity());
                assert!(config.iter().all(|c| c.string_count <= inv.max_strings_per_mppt));
                assert_eq!(panel_sum(config), total);
            }
        }
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let inv = inverter(2, 2);
        assert_eq!(distribute(20, &inv, 8, 13), distribute(20, &inv, 8, 13));
    }
}
