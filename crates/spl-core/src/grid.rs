use crate::constants::{
    GRID_SAMPLES, PLANE_DEPTH_MAX_M, PLANE_DEPTH_MIN_M, PLANE_WIDTH_MAX_M, PLANE_WIDTH_MIN_M,
};
use ndarray::Array2;

/// A fixed 2D sampling of the rectangular listening plane.
///
/// Paired coordinate arrays of identical shape: row index walks the
/// distance axis (y), column index the width axis (x). Immutable after
/// creation — the field evaluator only ever reads from it.
pub struct Grid {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
    /// Plane bounds, kept for mapping the field onto screen space.
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Grid {
    /// Sample the rectangle [x_min, x_max] × [y_min, y_max] on an
    /// evenly spaced `cols` × `rows` lattice, endpoints included.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64, cols: usize, rows: usize) -> Self {
        debug_assert!(cols >= 2 && rows >= 2, "grid needs at least 2 samples per axis");

        let dx = (x_max - x_min) / (cols - 1) as f64;
        let dy = (y_max - y_min) / (rows - 1) as f64;

        let x = Array2::from_shape_fn((rows, cols), |(_, c)| x_min + c as f64 * dx);
        let y = Array2::from_shape_fn((rows, cols), |(r, _)| y_min + r as f64 * dy);

        Self {
            x,
            y,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// The default listening plane: 20 m wide, 20 m deep, 200×200.
    pub fn listening_plane() -> Self {
        Self::new(
            PLANE_WIDTH_MIN_M,
            PLANE_WIDTH_MAX_M,
            PLANE_DEPTH_MIN_M,
            PLANE_DEPTH_MAX_M,
            GRID_SAMPLES,
            GRID_SAMPLES,
        )
    }

    /// (rows, cols) of both coordinate arrays.
    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }

    /// Extent of the distance axis in metres.
    pub fn depth(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Extent of the width axis in metres.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_arrays_share_shape() {
        let grid = Grid::new(-10.0, 10.0, 0.0, 20.0, 50, 40);
        assert_eq!(grid.x.dim(), (40, 50));
        assert_eq!(grid.y.dim(), (40, 50));
    }

    #[test]
    fn test_endpoints_included() {
        let grid = Grid::new(-10.0, 10.0, 0.0, 20.0, 200, 200);
        assert!((grid.x[[0, 0]] - -10.0).abs() < 1e-12);
        assert!((grid.x[[0, 199]] - 10.0).abs() < 1e-12);
        assert!((grid.y[[0, 0]] - 0.0).abs() < 1e-12);
        assert!((grid.y[[199, 0]] - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_even_spacing() {
        let grid = Grid::new(0.0, 1.0, 0.0, 2.0, 11, 21);
        for c in 1..11 {
            let step = grid.x[[0, c]] - grid.x[[0, c - 1]];
            assert!((step - 0.1).abs() < 1e-12, "x step at col {c} = {step}");
        }
        for r in 1..21 {
            let step = grid.y[[r, 0]] - grid.y[[r - 1, 0]];
            assert!((step - 0.1).abs() < 1e-12, "y step at row {r} = {step}");
        }
    }

    #[test]
    fn test_default_plane_matches_constants() {
        let grid = Grid::listening_plane();
        assert_eq!(grid.shape(), (GRID_SAMPLES, GRID_SAMPLES));
        assert!((grid.width() - 20.0).abs() < 1e-12);
        assert!((grid.depth() - 20.0).abs() < 1e-12);
    }
}
