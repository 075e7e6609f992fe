// Inferno color mapping for the SPL heatmap.

use egui::Color32;
use spl_core::constants::{COLOR_SCALE_MAX_DB, COLOR_SCALE_MIN_DB};

/// Inferno anchors sampled at 11 evenly spaced stops; intermediate
/// values are linearly interpolated.
const INFERNO: [[u8; 3]; 11] = [
    [0, 0, 4],
    [22, 11, 57],
    [66, 10, 104],
    [106, 23, 110],
    [147, 38, 103],
    [188, 55, 84],
    [221, 81, 58],
    [243, 120, 25],
    [252, 165, 10],
    [246, 215, 70],
    [252, 255, 164],
];

/// Look up the inferno map at `t`, clamped to [0, 1].
pub fn inferno(t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (INFERNO.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(INFERNO.len() - 2);
    let frac = scaled - i as f64;

    let lo = INFERNO[i];
    let hi = INFERNO[i + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;

    Color32::from_rgb(
        lerp(lo[0], hi[0]),
        lerp(lo[1], hi[1]),
        lerp(lo[2], hi[2]),
    )
}

/// Map an SPL value onto the fixed heatmap color scale. Values outside
/// 70–105 dB saturate at the scale ends.
pub fn spl_to_color(spl: f64) -> Color32 {
    let t = (spl - COLOR_SCALE_MIN_DB) / (COLOR_SCALE_MAX_DB - COLOR_SCALE_MIN_DB);
    inferno(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(inferno(0.0), Color32::from_rgb(0, 0, 4));
        assert_eq!(inferno(1.0), Color32::from_rgb(252, 255, 164));
    }

    #[test]
    fn test_out_of_scale_values_saturate() {
        // The off-axis floor (50 dB) sits below the scale and must pin
        // to the dark end; anything past 105 dB pins to the bright end.
        assert_eq!(spl_to_color(50.0), inferno(0.0));
        assert_eq!(spl_to_color(69.9), inferno(0.0));
        assert_eq!(spl_to_color(220.0), inferno(1.0));
    }

    #[test]
    fn test_scale_anchors_map_exactly() {
        assert_eq!(spl_to_color(70.0), inferno(0.0));
        assert_eq!(spl_to_color(105.0), inferno(1.0));
        assert_eq!(spl_to_color(87.5), inferno(0.5));
    }

    #[test]
    fn test_midscale_is_warm() {
        // Inferno runs dark purple → orange → pale yellow: by midscale
        // red dominates blue.
        let mid = inferno(0.5);
        assert!(mid.r() > mid.b(), "mid = {mid:?}");
    }
}
