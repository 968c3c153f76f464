//! Winter-solstice shadow spacing.
//!
//! On December 21 the sun reaches its lowest noon elevation; rows spaced
//! for that day never shade each other. Solar altitude is approximated as
//! `90 - latitude - 23.45` degrees (solar declination at the solstice).

use serde::{Deserialize, Serialize};

/// Solar declination at the winter solstice (degrees).
const SOLSTICE_DECLINATION_DEG: f64 = 23.45;

/// Spacing returned when the altitude geometry degenerates (near-polar
/// sites where the tangent vanishes).
const DEGENERATE_SPACING_M: f64 = 15.0;

/// Plausibility clamp for the computed shadow length (m). Keeps downstream
/// layout numbers renderable; not a physical law.
const MIN_SPACING_M: f64 = 0.5;
const MAX_SPACING_M: f64 = 20.0;

/// Row-spacing geometry for the worst-case sun angle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShadowSpacing {
    /// Minimum clear row-to-row distance (m).
    pub min_spacing: f64,
    /// Noon solar altitude at the winter solstice (degrees).
    pub altitude_deg: f64,
    /// Shadow cast by a tilted panel at that altitude (m).
    pub shadow_length: f64,
}

/// Computes the clamped winter-solstice row spacing.
///
/// # Arguments
///
/// * `latitude` - Site latitude (degrees north)
/// * `tilt_deg` - Panel tilt from horizontal (degrees)
/// * `panel_length_m` - Panel dimension along the slope (m)
pub fn winter_spacing(latitude: f64, tilt_deg: f64, panel_length_m: f64) -> ShadowSpacing {
    let altitude_deg = 90.0 - latitude - SOLSTICE_DECLINATION_DEG;
    let altitude_tan = altitude_deg.to_radians().tan();

    if altitude_tan.abs() < 0.01 {
        return ShadowSpacing {
            min_spacing: DEGENERATE_SPACING_M,
            altitude_deg,
            shadow_length: DEGENERATE_SPACING_M,
        };
    }

    let raw = panel_length_m * tilt_deg.to_radians().sin() / altitude_tan;
    let clamped = raw.clamp(MIN_SPACING_M, MAX_SPACING_M);

    ShadowSpacing {
        min_spacing: clamped,
        altitude_deg,
        shadow_length: clamped,
    }
}
