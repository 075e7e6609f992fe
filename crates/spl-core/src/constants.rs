/// On-axis reference level: SPL in dB at 1 m from the source.
pub const REFERENCE_SPL_DB: f64 = 100.0;

/// Level forced onto every point outside the coverage cone. An abrupt
/// cutoff, chosen for visual clarity rather than acoustic accuracy.
pub const OFF_AXIS_FLOOR_DB: f64 = 50.0;

/// Added to every distance so the log term stays finite at the source.
pub const DISTANCE_EPSILON_M: f64 = 1e-6;

/// Fixed heatmap color scale (dB).
pub const COLOR_SCALE_MIN_DB: f64 = 70.0;
pub const COLOR_SCALE_MAX_DB: f64 = 105.0;

/// Default listening plane: width axis (m).
pub const PLANE_WIDTH_MIN_M: f64 = -10.0;
pub const PLANE_WIDTH_MAX_M: f64 = 10.0;

/// Default listening plane: distance axis (m).
pub const PLANE_DEPTH_MIN_M: f64 = 0.0;
pub const PLANE_DEPTH_MAX_M: f64 = 20.0;

/// Samples per axis of the default grid.
pub const GRID_SAMPLES: usize = 200;

/// Slider bounds for the beam parameters (degrees).
pub const COVERAGE_MIN_DEG: f64 = 30.0;
pub const COVERAGE_MAX_DEG: f64 = 120.0;
pub const ROTATION_MIN_DEG: f64 = -90.0;
pub const ROTATION_MAX_DEG: f64 = 90.0;

/// Free-field SPL in dB at `distance` metres on the beam axis.
///
/// Inverse square law: 6 dB drop per doubling of distance, referenced
/// to [`REFERENCE_SPL_DB`] at 1 m. The epsilon keeps the value finite
/// at the source itself.
pub fn isl_spl(distance: f64) -> f64 {
    REFERENCE_SPL_DB - 20.0 * (distance + DISTANCE_EPSILON_M).log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isl_reference_at_unit_distance() {
        let spl = isl_spl(1.0);
        assert!((spl - REFERENCE_SPL_DB).abs() < 1e-5, "spl = {spl}");
    }

    #[test]
    fn test_isl_six_db_per_doubling() {
        let expected = 20.0 * 2.0_f64.log10();
        for d in [1.0, 2.5, 10.0] {
            let drop = isl_spl(d) - isl_spl(2.0 * d);
            assert!(
                (drop - expected).abs() < 1e-5,
                "doubling from {d} m dropped {drop} dB, expected {expected}"
            );
        }
    }

    #[test]
    fn test_isl_finite_at_source() {
        let spl = isl_spl(0.0);
        assert!(spl.is_finite(), "spl at the source must be finite, got {spl}");
        // 100 − 20·log10(1e-6) = 220 dB
        assert!((spl - 220.0).abs() < 1e-6, "spl = {spl}");
    }
}
