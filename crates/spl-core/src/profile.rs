use crate::field::spl_at;
use crate::SplParams;

/// Sample SPL along the beam's center line.
///
/// Returns `(distance, spl)` pairs from just past the source out to
/// `max_distance` metres. Every sample sits on the aim axis, so the
/// curve is the pure inverse-square falloff whatever the rotation —
/// the plot's job is to show the 6 dB-per-doubling slope next to the
/// heatmap.
pub fn axis_profile(params: &SplParams, max_distance: f64, samples: usize) -> Vec<[f64; 2]> {
    let (sin_r, cos_r) = params.rotation_deg.to_radians().sin_cos();
    let step = max_distance / samples as f64;

    (1..=samples)
        .map(|i| {
            let d = i as f64 * step;
            let spl = spl_at(sin_r * d, cos_r * d, params.coverage_deg, params.rotation_deg);
            [d, spl]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::OFF_AXIS_FLOOR_DB;

    #[test]
    fn test_profile_length_and_range() {
        let params = SplParams::default();
        let profile = axis_profile(&params, 20.0, 256);
        assert_eq!(profile.len(), 256);
        assert!((profile[0][0] - 20.0 / 256.0).abs() < 1e-12);
        assert!((profile[255][0] - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_profile_strictly_decreasing() {
        let params = SplParams::default();
        let profile = axis_profile(&params, 20.0, 128);
        for pair in profile.windows(2) {
            assert!(
                pair[1][1] < pair[0][1],
                "SPL must fall with distance: {:?} then {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_profile_hits_isl_landmarks() {
        let params = SplParams::default();
        let profile = axis_profile(&params, 20.0, 400);
        // Sample 199 sits at exactly 10 m: 100 − 20·log10(10) = 80 dB.
        let [d, spl] = profile[199];
        assert!((d - 10.0).abs() < 1e-9, "d = {d}");
        assert!((spl - 80.0).abs() < 1e-4, "spl = {spl}");
    }

    #[test]
    fn test_profile_stays_on_axis_under_rotation() {
        // The center line is inside the beam for any rotation, so no
        // sample may collapse to the off-axis floor.
        for rotation in [-90.0, -30.0, 45.0, 90.0] {
            let params = SplParams {
                coverage_deg: 30.0,
                rotation_deg: rotation,
            };
            let profile = axis_profile(&params, 20.0, 64);
            for [d, spl] in profile {
                assert!(
                    spl > OFF_AXIS_FLOOR_DB,
                    "rotation {rotation}°: sample at {d} m fell to the floor"
                );
            }
        }
    }
}
