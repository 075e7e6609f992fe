pub mod constants;
pub mod field;
pub mod grid;
pub mod profile;

use grid::Grid;
use ndarray::Array2;

// ---------------------------------------------------------------------------
// Shared interface types — the render layer builds against these
// ---------------------------------------------------------------------------

/// The two user-adjustable beam parameters, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplParams {
    /// Full angular width of the on-axis beam, slider range [30, 120].
    pub coverage_deg: f64,
    /// Beam aim offset from the vertical distance axis, positive toward
    /// +x, slider range [−90, 90].
    pub rotation_deg: f64,
}

impl Default for SplParams {
    fn default() -> Self {
        Self {
            coverage_deg: 90.0,
            rotation_deg: 0.0,
        }
    }
}

/// A point source at a fixed position on the listening plane.
#[derive(Debug, Clone, Copy)]
pub struct Speaker {
    /// (x, y) position in metres.
    pub position: [f64; 2],
}

impl Default for Speaker {
    fn default() -> Self {
        Self { position: [0.0, 0.0] }
    }
}

/// Results of one field evaluation — everything the UI consumes.
/// Recomputed whole on every parameter change, never updated in place.
#[derive(Debug, Clone)]
pub struct SplResult {
    /// SPL in dB per grid point, same shape as the grid.
    pub spl: Array2<f64>,
    /// `(distance, spl)` samples along the beam's center line.
    pub axis_profile: Vec<[f64; 2]>,
}

/// Evaluate the SPL field and the on-axis falloff profile for the
/// current parameters. Pure over its inputs.
pub fn compute(grid: &Grid, speaker: &Speaker, params: &SplParams) -> SplResult {
    let spl = field::spl_map(grid, speaker, params);
    let axis_profile = profile::axis_profile(params, grid.depth(), 256);

    SplResult { spl, axis_profile }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_bundles_matching_shapes() {
        let grid = Grid::new(-10.0, 10.0, 0.0, 20.0, 32, 48);
        let result = compute(&grid, &Speaker::default(), &SplParams::default());
        assert_eq!(result.spl.dim(), grid.shape());
        assert_eq!(result.axis_profile.len(), 256);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let grid = Grid::new(-10.0, 10.0, 0.0, 20.0, 16, 16);
        let params = SplParams {
            coverage_deg: 60.0,
            rotation_deg: 25.0,
        };
        let a = compute(&grid, &Speaker::default(), &params);
        let b = compute(&grid, &Speaker::default(), &params);
        assert_eq!(a.spl, b.spl, "same inputs must give the same field");
    }
}
