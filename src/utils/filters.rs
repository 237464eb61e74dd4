//! Gradient smoothing filters
//!
//! Both filters are pure grid-to-grid maps; neither wraps around nor pads
//! the image borders.

use crate::models::PixelGrid;

/// Largest cell value
pub fn max_value(grid: &PixelGrid<f64>) -> f64 {
    grid.as_slice()
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Divide every cell by the grid maximum; an all-zero grid is returned unchanged
pub fn normalise(grid: PixelGrid<f64>) -> PixelGrid<f64> {
    let max = max_value(&grid);
    if max == 0.0 {
        return grid;
    }
    grid.transform(|v| v / max)
}

/// Mean over the (2r+1)x(2r+1) window around each cell, clipped to the grid.
/// Border cells average over the samples that exist.
pub fn box_blur(grid: &PixelGrid<f64>, radius: usize) -> PixelGrid<f64> {
    let r = radius as i64;
    grid.par_transform_with_point(|_, p| {
        let mut sum = 0.0;
        let mut count = 0usize;
        for dx in -r..=r {
            for dy in -r..=r {
                let (x, y) = (p.x as i64 + dx, p.y as i64 + dy);
                if let Ok(v) = grid.get(x, y) {
                    sum += *v;
                    count += 1;
                }
            }
        }
        // the centre cell always exists
        sum / count as f64
    })
}
