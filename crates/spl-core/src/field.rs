use crate::constants::{isl_spl, OFF_AXIS_FLOOR_DB};
use crate::grid::Grid;
use crate::{Speaker, SplParams};
use ndarray::Array2;
use std::f64::consts::{PI, TAU};

/// Wrap an angle in radians into (−π, π].
pub fn wrap_angle(a: f64) -> f64 {
    PI - (PI - a).rem_euclid(TAU)
}

/// SPL in dB at a single point offset `(dx, dy)` metres from the
/// speaker, where `dy` points up the distance axis.
///
/// Inside the coverage cone the level follows the inverse square law;
/// outside it is forced to the fixed off-axis floor. Rotation 0 aims
/// the beam straight up the distance axis, positive rotation swings it
/// toward +x. A point exactly on the cone edge counts as inside.
pub fn spl_at(dx: f64, dy: f64, coverage_deg: f64, rotation_deg: f64) -> f64 {
    let distance = (dx * dx + dy * dy).sqrt();

    // Azimuth measured from the distance axis, positive toward +x,
    // so it lives in the same convention as the rotation slider.
    let azimuth = dx.atan2(dy);
    let offset = wrap_angle(azimuth - rotation_deg.to_radians());

    let half_coverage = (coverage_deg / 2.0).to_radians();
    if offset.abs() > half_coverage {
        OFF_AXIS_FLOOR_DB
    } else {
        isl_spl(distance)
    }
}

/// Evaluate the SPL field over the whole grid. The returned array has
/// the grid's shape; the evaluation reads nothing but its arguments.
pub fn spl_map(grid: &Grid, speaker: &Speaker, params: &SplParams) -> Array2<f64> {
    Array2::from_shape_fn(grid.shape(), |(r, c)| {
        spl_at(
            grid.x[[r, c]] - speaker.position[0],
            grid.y[[r, c]] - speaker.position[1],
            params.coverage_deg,
            params.rotation_deg,
        )
    })
}
