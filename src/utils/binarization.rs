//! Convert floating-point grids to boolean masks
//! Returns grids where true = "keep" (bar-like gradient or dark pixel)
use crate::models::PixelGrid;

/// Mask cells whose value is at or above `threshold`
pub fn threshold_mask(grid: &PixelGrid<f64>, threshold: f64) -> PixelGrid<bool> {
    grid.transform(|v| *v >= threshold)
}

/// Mark luminance cells strictly darker than `level` as bars
pub fn binarize_dark(grey: &PixelGrid<f64>, level: f64) -> PixelGrid<bool> {
    grey.transform(|v| *v < level)
}
