//! Barcode-likelihood gradient
//! Bars are near-vertical, so they show strong horizontal and weak vertical
//! luminance change. Subtracting the vertical term suppresses text and
//! diagonal contours.
use crate::models::PixelGrid;

/// `max(0, |dI/dx| - |dI/dy|)` using central differences; zero on the image border
pub fn barcode_gradient(grey: &PixelGrid<f64>) -> PixelGrid<f64> {
    let (width, height) = (grey.width(), grey.height());
    grey.par_transform_with_point(|_, p| {
        let (x, y) = (p.x as usize, p.y as usize);
        let horizontal = if x == 0 || x == width - 1 {
            0.0
        } else {
            grey[(x + 1, y)] - grey[(x - 1, y)]
        };
        let vertical = if y == 0 || y == height - 1 {
            0.0
        } else {
            grey[(x, y + 1)] - grey[(x, y - 1)]
        };
        (horizontal.abs() - vertical.abs()).max(0.0)
    })
}
