//! 2-D panel packing on the roof plane.
//!
//! Portrait-mounted panels on a rectangular roof: columns across the width
//! at a fixed clamp gap, rows along the length at either a flush-mount gap
//! (pitched roof) or the tilted projection plus the winter shadow spacing
//! (flat-roof racking). The rectangle list is complete and unbounded; any
//! cap on how many rectangles get drawn belongs to the renderer.

use serde::{Deserialize, Serialize};

use crate::catalog::SolarPanel;

use super::shadow::ShadowSpacing;

/// Clamp gap between adjacent columns (m).
const LATERAL_GAP_M: f64 = 0.02;

/// Row gap for flush mounting on a pitched roof (m).
const FLUSH_ROW_GAP_M: f64 = 0.05;

/// One panel's footprint rectangle, in roof coordinates (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Complete packing result for one roof/panel/geometry combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutAnalysis {
    /// Panels that fit (`rows * columns`).
    pub total_panel_count: u32,
    /// Row count along the roof length.
    pub rows: u32,
    /// Column count across the roof width.
    pub columns: u32,
    /// Module area actually covered (m²).
    pub used_area: f64,
    /// `used_area / roof_area` as a percentage; 0 for a zero-area roof.
    pub packing_efficiency: f64,
    /// Installed DC power (kW).
    pub total_dc_size_kw: f64,
    /// Roof width as given (m).
    pub roof_width: f64,
    /// Roof length as given (m).
    pub roof_length: f64,
    /// Every panel footprint in row-major order, for rendering.
    pub grid: Vec<PanelRect>,
}

/// Packs panels onto the roof.
///
/// Non-positive roof dimensions yield an empty layout, not an error.
///
/// # Arguments
///
/// * `roof_width` - Roof edge hosting the rows (m)
/// * `roof_length` - Roof edge the rows advance along (m)
/// * `panel` - Module being placed (portrait)
/// * `tilt_deg` - Rack tilt from horizontal (degrees)
/// * `is_flat_roof` - Tilted racking with shadow spacing vs. flush mount
/// * `spacing` - Winter shadow spacing, used only for flat roofs
pub fn pack(
    roof_width: f64,
    roof_length: f64,
    panel: &SolarPanel,
    tilt_deg: f64,
    is_flat_roof: bool,
    spacing: &ShadowSpacing,
) -> LayoutAnalysis {
    let lateral_pitch = panel.width_m + LATERAL_GAP_M;
    let (footprint_depth, longitudinal_pitch) = if is_flat_roof {
        let projection = tilt_deg.to_radians().cos() * panel.height_m;
        (projection, projection + spacing.min_spacing)
    } else {
        (panel.height_m, panel.height_m + FLUSH_ROW_GAP_M)
    };

    let columns = (roof_width / lateral_pitch).floor().max(0.0) as u32;
    let rows = (roof_length / longitudinal_pitch).floor().max(0.0) as u32;
    let total_panel_count = rows * columns;

    let used_area = f64::from(total_panel_count) * panel.area_m2();
    let roof_area = roof_width * roof_length;
    let packing_efficiency = if roof_area > 0.0 {
        used_area / roof_area * 100.0
    } else {
        0.0
    };

    let mut grid = Vec::with_capacity(total_panel_count as usize);
    for row in 0..rows {
        for col in 0..columns {
            grid.push(PanelRect {
                x: f64::from(col) * lateral_pitch,
                y: f64::from(row) * longitudinal_pitch,
                w: panel.width_m,
                h: footprint_depth,
            });
        }
    }

    LayoutAnalysis {
        total_panel_count,
        rows,
        columns,
        used_area,
        packing_efficiency,
        total_dc_size_kw: f64::from(total_panel_count) * panel.power_w / 1000.0,
        roof_width,
        roof_length,
        grid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::shadow::winter_spacing;

    fn panel() -> SolarPanel {
        SolarPanel::new(
            "t", "Test", "T", 545.0, 49.6, 13.9, 41.8, 13.04, 1.134, 2.279, -0.27, 175.0,
        )
    }

    fn spacing() -> ShadowSpacing {
        winter_spacing(39.93, 20.0, 2.279)
    }

    #[test]
    fn pitched_roof_counts() {
        let layout = pack(10.0, 12.0, &panel(), 20.0, false, &spacing());
        // columns = floor(10 / 1.154) = 8, rows = floor(12 / 2.329) = 5
        assert_eq!(layout.columns, 8);
        assert_eq!(layout.rows, 5);
        assert_eq!(layout.total_panel_count, 40);
        assert_eq!(layout.grid.len(), 40);
        assert!((layout.total_dc_size_kw - 40.0 * 0.545).abs() < 1e-9);
    }

    #[test]
    fn flat_roof_rows_clear_shadow() {
        let flat = pack(10.0, 12.0, &panel(), 20.0, true, &spacing());
        let pitched = pack(10.0, 12.0, &panel(), 20.0, false, &spacing());
        // Shadow spacing stretches the row pitch, so fewer rows fit.
        assert!(flat.rows < pitched.rows);
        assert_eq!(flat.columns, pitched.columns);
    }

    #[test]
    fn zero_width_roof_is_empty_layout() {
        let layout = pack(0.0, 12.0, &panel(), 20.0, false, &spacing());
        assert_eq!(layout.total_panel_count, 0);
        assert_eq!(layout.packing_efficiency, 0.0);
        assert!(layout.grid.is_empty());
    }

    #[test]
    fn negative_dimensions_are_empty_layout() {
        let layout = pack(-4.0, -3.0, &panel(), 20.0, false, &spacing());
        assert_eq!(layout.total_panel_count, 0);
        assert_eq!(layout.packing_efficiency, 0.0);
    }

    #[test]
    fn grid_is_row_major_and_within_roof() {
        let layout = pack(10.0, 12.0, &panel(), 20.0, false, &spacing());
        assert_eq!(layout.grid[0], PanelRect { x: 0.0, y: 0.0, w: 1.134, h: 2.279 });
        // Second rectangle advances in x, not y.
        assert_eq!(layout.grid[1].y, 0.0);
        assert!(layout.grid[1].x > 0.0);
        for rect in &layout.grid {
            assert!(rect.x + rect.w <= layout.roof_width + 1e-9);
            assert!(rect.y + rect.h <= layout.roof_length + 1e-9);
        }
    }

    #[test]
    fn rectangle_list_is_never_truncated() {
        // A warehouse roof: hundreds of rectangles, all emitted.
        let layout = pack(60.0, 80.0, &panel(), 20.0, false, &spacing());
        assert!(layout.total_panel_count > 500);
        assert_eq!(layout.grid.len(), layout.total_panel_count as usize);
    }

    #[test]
    fn packing_efficiency_is_a_percentage() {
        let layout = pack(10.0, 12.0, &panel(), 20.0, false, &spacing());
        let expected = layout.used_area / 120.0 * 100.0;
        assert!((layout.packing_efficiency - expected).abs() < 1e-9);
        assert!(layout.packing_efficiency > 0.0 && layout.packing_efficiency < 100.0);
    }
}
