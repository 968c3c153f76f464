//! Immutable equipment catalog records.
//!
//! Panels, inverters, batteries, and heat pumps are value objects supplied
//! by an external catalog provider. Constructors reject out-of-range values
//! instead of letting `NaN` propagate into the calculation engines. A small
//! built-in sample catalog mirrors typical Tier-1 equipment for tests and
//! demos.

use serde::{Deserialize, Serialize};

/// A photovoltaic module catalog entry.
///
/// All electrical parameters are datasheet STC values. `temp_coeff_voc` is
/// stored normalized to be non-positive: a positive input is treated as a
/// datasheet sign error and corrected silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarPanel {
    /// Catalog identifier.
    pub id: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Model designation.
    pub model: String,
    /// Rated power at STC (W).
    pub power_w: f64,
    /// Open-circuit voltage (V).
    pub voc: f64,
    /// Short-circuit current (A).
    pub isc: f64,
    /// Maximum-power-point voltage (V).
    pub vmpp: f64,
    /// Maximum-power-point current (A).
    pub impp: f64,
    /// Module width (m).
    pub width_m: f64,
    /// Module height (m).
    pub height_m: f64,
    /// Temperature coefficient of Voc (%/°C, always <= 0 after construction).
    pub temp_coeff_voc: f64,
    /// Unit price (USD).
    pub price_usd: f64,
}

impl SolarPanel {
    /// Creates a new panel record.
    ///
    /// # Arguments
    ///
    /// * `id`, `brand`, `model` - Catalog identity
    /// * `power_w`, `voc`, `isc`, `vmpp`, `impp` - STC electrical values (all must be > 0)
    /// * `width_m`, `height_m` - Module dimensions in meters (must be > 0)
    /// * `temp_coeff_voc` - Voc temperature coefficient (%/°C); sign is normalized to <= 0
    /// * `price_usd` - Unit price (must be >= 0)
    ///
    /// # Panics
    ///
    /// Panics if any electrical value or dimension is non-positive, or if the
    /// price is negative.
    #[expect(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        power_w: f64,
        voc: f64,
        isc: f64,
        vmpp: f64,
        impp: f64,
        width_m: f64,
        height_m: f64,
        temp_coeff_voc: f64,
        price_usd: f64,
    ) -> Self {
        assert!(power_w > 0.0, "power_w must be > 0");
        assert!(voc > 0.0, "voc must be > 0");
        assert!(isc > 0.0, "isc must be > 0");
        assert!(vmpp > 0.0, "vmpp must be > 0");
        assert!(impp > 0.0, "impp must be > 0");
        assert!(width_m > 0.0 && height_m > 0.0, "dimensions must be > 0");
        assert!(price_usd >= 0.0, "price_usd must be >= 0");
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            power_w,
            voc,
            isc,
            vmpp,
            impp,
            width_m,
            height_m,
            // Voc drops with temperature; the coefficient is negative by physics.
            temp_coeff_voc: -temp_coeff_voc.abs(),
            price_usd,
        }
    }

    /// Module footprint area (m²).
    pub fn area_m2(&self) -> f64 {
        self.width_m * self.height_m
    }
}

/// A string inverter catalog entry with MPPT topology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inverter {
    /// Catalog identifier.
    pub id: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Model designation.
    pub model: String,
    /// Rated AC output power (kW).
    pub power_kw: f64,
    /// Absolute maximum DC input voltage (V).
    pub max_input_voltage: f64,
    /// Lower bound of the MPPT operating voltage window (V).
    pub mppt_min_voltage: f64,
    /// Upper bound of the MPPT operating voltage window (V).
    pub mppt_max_voltage: f64,
    /// Number of independent MPPT channels (>= 1).
    pub mppt_count: u32,
    /// Physical string inputs per MPPT channel (>= 1).
    pub max_strings_per_mppt: u32,
    /// Maximum short-circuit current per MPPT channel (A).
    pub max_current_per_mppt: f64,
    /// DC voltage required to start the inverter (V).
    pub start_voltage: f64,
    /// Unit price (USD).
    pub price_usd: f64,
}

impl Inverter {
    /// Creates a new inverter record.
    ///
    /// # Panics
    ///
    /// Panics if any power/voltage/current value is non-positive, if the MPPT
    /// voltage window is inverted, or if `mppt_count` or
    /// `max_strings_per_mppt` is zero.
    #[expect(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        power_kw: f64,
        max_input_voltage: f64,
        mppt_min_voltage: f64,
        mppt_max_voltage: f64,
        mppt_count: u32,
        max_strings_per_mppt: u32,
        max_current_per_mppt: f64,
        start_voltage: f64,
        price_usd: f64,
    ) -> Self {
        assert!(power_kw > 0.0, "power_kw must be > 0");
        assert!(max_input_voltage > 0.0, "max_input_voltage must be > 0");
        assert!(
            mppt_min_voltage > 0.0 && mppt_max_voltage > mppt_min_voltage,
            "MPPT voltage window must be positive and non-inverted"
        );
        assert!(mppt_count >= 1, "mppt_count must be >= 1");
        assert!(max_strings_per_mppt >= 1, "max_strings_per_mppt must be >= 1");
        assert!(max_current_per_mppt > 0.0, "max_current_per_mppt must be > 0");
        assert!(start_voltage > 0.0, "start_voltage must be > 0");
        assert!(price_usd >= 0.0, "price_usd must be >= 0");
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            power_kw,
            max_input_voltage,
            mppt_min_voltage,
            mppt_max_voltage,
            mppt_count,
            max_strings_per_mppt,
            max_current_per_mppt,
            start_voltage,
            price_usd,
        }
    }

    /// Total string inputs across all MPPT channels.
    pub fn total_string_capacity(&self) -> u32 {
        self.mppt_count * self.max_strings_per_mppt
    }
}

/// A storage battery add-on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battery {
    /// Catalog identifier.
    pub id: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Model designation.
    pub model: String,
    /// Usable energy capacity (kWh).
    pub capacity_kwh: f64,
    /// Maximum output power (kW).
    pub max_output_kw: f64,
    /// Inverter brands this battery pairs with; `"All"` matches any brand.
    pub compatible_brands: Vec<String>,
    /// Unit price (USD).
    pub price_usd: f64,
}

impl Battery {
    /// Whether this battery is compatible with the given inverter brand.
    pub fn is_compatible_with(&self, inverter_brand: &str) -> bool {
        self.compatible_brands
            .iter()
            .any(|b| b == "All" || b == inverter_brand)
    }
}

/// A heat-pump add-on (modeled as an extra consumer, no electrical checks).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatPump {
    /// Catalog identifier.
    pub id: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Model designation.
    pub model: String,
    /// Heating capacity (kW thermal).
    pub thermal_power_kw: f64,
    /// Coefficient of performance.
    pub cop: f64,
    /// Unit price (USD).
    pub price_usd: f64,
}

impl HeatPump {
    /// Electrical input power at rated thermal output (kW).
    pub fn electrical_power_kw(&self) -> f64 {
        if self.cop > 0.0 {
            self.thermal_power_kw / self.cop
        } else {
            0.0
        }
    }
}

/// Built-in sample panel catalog.
pub fn sample_panels() -> Vec<SolarPanel> {
    vec![
        SolarPanel::new(
            "p1",
            "CW Enerji",
            "CW-108PM-455W",
            455.0,
            49.30,
            11.60,
            41.50,
            10.97,
            1.048,
            2.108,
            -0.27,
            145.0,
        ),
        SolarPanel::new(
            "p2",
            "TommaTech",
            "TT-545-144PM",
            545.0,
            49.60,
            13.90,
            41.80,
            13.04,
            1.134,
            2.279,
            -0.27,
            175.0,
        ),
        SolarPanel::new(
            "p3",
            "Jinko Solar",
            "Tiger Neo 600W",
            600.0,
            51.50,
            14.50,
            42.80,
            14.02,
            1.134,
            2.465,
            -0.25,
            200.0,
        ),
    ]
}

/// Built-in sample inverter catalog.
pub fn sample_inverters() -> Vec<Inverter> {
    vec![
        Inverter::new(
            "inv1",
            "Huawei",
            "SUN2000-10KTL",
            10.0,
            1100.0,
            140.0,
            980.0,
            2,
            2,
            13.5,
            200.0,
            1200.0,
        ),
        Inverter::new(
            "inv2",
            "Huawei",
            "SUN2000-20KTL",
            20.0,
            1100.0,
            200.0,
            800.0,
            2,
            2,
            22.0,
            200.0,
            1800.0,
        ),
        Inverter::new(
            "inv3",
            "Growatt",
            "MID 15KTL3-X",
            15.0,
            1100.0,
            200.0,
            1000.0,
            2,
            2,
            26.0,
            250.0,
            1400.0,
        ),
        Inverter::new(
            "inv4",
            "Fronius",
            "Symo 10.0-3-M",
            10.0,
            1000.0,
            200.0,
            800.0,
            2,
            2,
            27.0,
            200.0,
            1600.0,
        ),
    ]
}

/// Built-in sample battery catalog.
pub fn sample_batteries() -> Vec<Battery> {
    vec![
        Battery {
            id: "bat1".into(),
            brand: "Huawei".into(),
            model: "LUNA2000-10".into(),
            capacity_kwh: 10.0,
            max_output_kw: 5.0,
            compatible_brands: vec!["Huawei".into()],
            price_usd: 3200.0,
        },
        Battery {
            id: "bat2".into(),
            brand: "Pylontech".into(),
            model: "Force H2".into(),
            capacity_kwh: 10.65,
            max_output_kw: 7.1,
            compatible_brands: vec!["All".into()],
            price_usd: 2900.0,
        },
    ]
}

/// Built-in sample heat-pump catalog.
pub fn sample_heat_pumps() -> Vec<HeatPump> {
    vec![
        HeatPump {
            id: "hp1".into(),
            brand: "Daikin".into(),
            model: "Altherma 3".into(),
            thermal_power_kw: 8.0,
            cop: 4.5,
            price_usd: 5200.0,
        },
        HeatPump {
            id: "hp2".into(),
            brand: "Mitsubishi".into(),
            model: "Ecodan 11".into(),
            thermal_power_kw: 11.2,
            cop: 4.3,
            price_usd: 6100.0,
        },
    ]
}
