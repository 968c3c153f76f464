//! Site solar profiles, roof orientation, and location resolution.
//!
//! A [`SiteSolarProfile`] carries the per-location insolation data the
//! financial engine consumes: average daily sun hours, twelve monthly
//! multipliers shaping the season, and the latitude used for shadow
//! geometry. A built-in table covers eleven Turkish provinces (GEPA
//! averages); callers with their own measurement data can pass any profile
//! list to the resolver.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Error;

/// Matches farther than this (in degrees of lat/lon distance) are flagged
/// as approximate.
pub const FAR_MATCH_THRESHOLD_DEG: f64 = 1.8;

/// Roof orientation relative to the equator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoofDirection {
    South,
    SouthEast,
    SouthWest,
    East,
    West,
    North,
}

impl RoofDirection {
    /// Yield multiplier for this orientation relative to due south.
    pub fn efficiency(self) -> f64 {
        match self {
            RoofDirection::South => 1.0,
            RoofDirection::SouthEast | RoofDirection::SouthWest => 0.96,
            RoofDirection::East | RoofDirection::West => 0.88,
            RoofDirection::North => 0.65,
        }
    }
}

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude (degrees, positive north).
    pub lat: f64,
    /// Longitude (degrees, positive east).
    pub lon: f64,
}

/// Per-location solar yield profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSolarProfile {
    /// Location name (province for the built-in table).
    pub name: String,
    /// Latitude (degrees).
    pub latitude: f64,
    /// Longitude (degrees).
    pub longitude: f64,
    /// Average daily insolation across the year (hours/day).
    pub avg_insolation: f64,
    /// Monthly insolation multipliers, January through December (all > 0).
    pub monthly_factors: [f64; 12],
    /// Typical monthly bill for the location, used as a form default by the
    /// wizard collaborator.
    pub default_bill_amount: f64,
}

impl SiteSolarProfile {
    /// Creates a profile, checking the seasonal shape.
    ///
    /// # Panics
    ///
    /// Panics if `avg_insolation` or any monthly factor is non-positive.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        avg_insolation: f64,
        monthly_factors: [f64; 12],
        default_bill_amount: f64,
    ) -> Self {
        assert!(avg_insolation > 0.0, "avg_insolation must be > 0");
        assert!(
            monthly_factors.iter().all(|f| *f > 0.0),
            "monthly factors must be > 0"
        );
        Self {
            name: name.into(),
            latitude,
            longitude,
            avg_insolation,
            monthly_factors,
            default_bill_amount,
        }
    }
}

/// Result of nearest-neighbor site resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMatch {
    /// The matched profile.
    pub profile: SiteSolarProfile,
    /// Lat/lon distance between the query and the matched site (degrees).
    pub distance_deg: f64,
    /// Whether the match exceeds [`FAR_MATCH_THRESHOLD_DEG`].
    pub is_far: bool,
}

/// Resolves the profile nearest to the given coordinates.
///
/// Distance is plain Euclidean in lat/lon space, which is adequate at
/// province granularity. A match farther than [`FAR_MATCH_THRESHOLD_DEG`]
/// is returned with `is_far = true` and logged as a warning.
///
/// # Errors
///
/// Returns [`Error::DataNotFound`] if `sites` is empty.
pub fn resolve_nearest(
    coords: Coordinates,
    sites: &[SiteSolarProfile],
) -> Result<SiteMatch, Error> {
    let mut best: Option<(&SiteSolarProfile, f64)> = None;
    for site in sites {
        let d_lat = site.latitude - coords.lat;
        let d_lon = site.longitude - coords.lon;
        let dist = (d_lat * d_lat + d_lon * d_lon).sqrt();
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((site, dist));
        }
    }

    let (profile, distance_deg) =
        best.ok_or_else(|| Error::data_not_found("solar profile"))?;
    let is_far = distance_deg > FAR_MATCH_THRESHOLD_DEG;
    if is_far {
        warn!(
            site = %profile.name,
            distance_deg,
            "nearest solar profile is far from the requested coordinates"
        );
    }

    Ok(SiteMatch {
        profile: profile.clone(),
        distance_deg,
        is_far,
    })
}

/// Built-in province profile table (GEPA long-term averages).
pub fn builtin_sites() -> Vec<SiteSolarProfile> {
    vec![
        SiteSolarProfile::new(
            "Adana",
            37.00,
            35.32,
            5.5,
            [
                0.60, 0.70, 0.85, 1.00, 1.15, 1.25, 1.30, 1.28, 1.15, 0.95, 0.75, 0.60,
            ],
            2200.0,
        ),
        SiteSolarProfile::new(
            "Ankara",
            39.93,
            32.85,
            4.8,
            [
                0.55, 0.65, 0.85, 1.00, 1.20, 1.30, 1.35, 1.30, 1.10, 0.90, 0.65, 0.50,
            ],
            1600.0,
        ),
        SiteSolarProfile::new(
            "Antalya",
            36.89,
            30.71,
            5.6,
            [
                0.62, 0.72, 0.87, 1.02, 1.18, 1.28, 1.32, 1.30, 1.18, 0.98, 0.78, 0.62,
            ],
            2400.0,
        ),
        SiteSolarProfile::new(
            "Bursa",
            40.18,
            29.06,
            4.2,
            [
                0.58, 0.68, 0.83, 0.98, 1.15, 1.25, 1.28, 1.25, 1.08, 0.88, 0.68, 0.55,
            ],
            1800.0,
        ),
        SiteSolarProfile::new(
            "Diyarbakır",
            37.91,
            40.23,
            5.3,
            [
                0.58, 0.68, 0.85, 1.02, 1.20, 1.30, 1.35, 1.32, 1.15, 0.92, 0.72, 0.58,
            ],
            2100.0,
        ),
        SiteSolarProfile::new(
            "İstanbul",
            41.00,
            28.97,
            4.0,
            [
                0.55, 0.65, 0.80, 0.95, 1.15, 1.25, 1.30, 1.25, 1.05, 0.85, 0.65, 0.52,
            ],
            1950.0,
        ),
        SiteSolarProfile::new(
            "İzmir",
            38.42,
            27.14,
            5.1,
            [
                0.60, 0.70, 0.85, 1.00, 1.18, 1.27, 1.32, 1.28, 1.12, 0.92, 0.72, 0.60,
            ],
            2000.0,
        ),
        SiteSolarProfile::new(
            "Konya",
            37.87,
            32.48,
            5.0,
            [
                0.56, 0.66, 0.84, 1.00, 1.20, 1.30, 1.35, 1.30, 1.12, 0.90, 0.70, 0.55,
            ],
            1500.0,
        ),
        SiteSolarProfile::new(
            "Trabzon",
            41.00,
            39.71,
            3.8,
            [
                0.52, 0.62, 0.78, 0.92, 1.12, 1.22, 1.28, 1.22, 1.02, 0.82, 0.62, 0.50,
            ],
            1400.0,
        ),
        SiteSolarProfile::new(
            "Şanlıurfa",
            37.15,
            38.79,
            5.4,
            [
                0.58, 0.68, 0.86, 1.03, 1.22, 1.32, 1.36, 1.33, 1.16, 0.93, 0.73, 0.58,
            ],
            2300.0,
        ),
        SiteSolarProfile::new(
            "Van",
            38.50,
            43.37,
            4.6,
            [
                0.50, 0.60, 0.80, 0.98, 1.20, 1.30, 1.38, 1.32, 1.10, 0.88, 0.65, 0.48,
            ],
            1700.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn south_is_full_efficiency() {
        assert_eq!(RoofDirection::South.efficiency(), 1.0);
        assert_eq!(RoofDirection::North.efficiency(), 0.65);
        assert_eq!(RoofDirection::East.efficiency(), RoofDirection::West.efficiency());
    }

    #[test]
    fn builtin_table_is_well_formed() {
        let sites = builtin_sites();
        assert_eq!(sites.len(), 11);
        for site in &sites {
            assert!(site.avg_insolation > 0.0);
            assert!(site.monthly_factors.iter().all(|f| *f > 0.0));
        }
    }

    #[test]
    fn resolves_exact_city() {
        let sites = builtin_sites();
        let m = resolve_nearest(Coordinates { lat: 39.93, lon: 32.85 }, &sites)
            .expect("builtin table should resolve");
        assert_eq!(m.profile.name, "Ankara");
        assert!(m.distance_deg < 1e-9);
        assert!(!m.is_far);
    }

    #[test]
    fn resolves_nearest_neighbor() {
        let sites = builtin_sites();
        // Polatlı, ~0.6 degrees west of Ankara.
        let m = resolve_nearest(Coordinates { lat: 39.58, lon: 32.15 }, &sites)
            .expect("builtin table should resolve");
        assert_eq!(m.profile.name, "Ankara");
        assert!(!m.is_far);
    }

    #[test]
    fn far_match_is_flagged() {
        let sites = vec![builtin_sites().remove(0)]; // Adana only
        let m = resolve_nearest(Coordinates { lat: 41.00, lon: 28.97 }, &sites)
            .expect("single site should resolve");
        assert_eq!(m.profile.name, "Adana");
        assert!(m.is_far);
        assert!(m.distance_deg > FAR_MATCH_THRESHOLD_DEG);
    }

    #[test]
    fn empty_table_is_data_not_found() {
        let err = resolve_nearest(Coordinates { lat: 39.93, lon: 32.85 }, &[]);
        assert!(matches!(err, Err(Error::DataNotFound { .. })));
    }

    #[test]
    #[should_panic]
    fn non_positive_monthly_factor_panics() {
        let mut factors = [1.0; 12];
        factors[3] = 0.0;
        SiteSolarProfile::new("X", 39.0, 32.0, 4.5, factors, 1000.0);
    }
}
