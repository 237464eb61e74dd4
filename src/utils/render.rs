//! Diagnostic images of intermediate pipeline stages.
//!
//! Nothing here affects decoding; these helpers exist so the intermediate
//! grids can be inspected while tuning.

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::models::{PixelGrid, Rectangle};

/// Outline colour for candidate regions (yellow-green)
pub const HIGHLIGHT: Rgb<u8> = Rgb([154, 205, 50]);

/// Stretch a grid's value range over 0..=255; a constant grid renders black
pub fn render_intensity_map(grid: &PixelGrid<f64>) -> GrayImage {
    let values = grid.as_slice();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        if range == 0.0 {
            return Luma([0]);
        }
        let v = grid[(x as usize, y as usize)];
        Luma([(255.0 * (v - min) / range).round_ties_even() as u8])
    })
}

/// Masked cells white, everything else black
pub fn render_mask(mask: &PixelGrid<bool>) -> GrayImage {
    GrayImage::from_fn(mask.width() as u32, mask.height() as u32, |x, y| {
        Luma([if mask[(x as usize, y as usize)] { 255 } else { 0 }])
    })
}

/// Outline width that stays visible on large images without hiding small ones
pub fn pen_width(image_width: u32) -> u32 {
    ((image_width as f64 / 500.0).round() as u32).clamp(2, 8)
}

/// Copy of `image` with each region outlined
pub fn highlight_regions(image: &RgbImage, regions: &[Rectangle]) -> RgbImage {
    let mut out = image.clone();
    let pen = pen_width(image.width()) as i32;
    let (w, h) = (image.width() as i32, image.height() as i32);
    for r in regions {
        for y in r.top..r.bottom() {
            for x in r.left..r.right() {
                let on_edge = x < r.left + pen
                    || x >= r.right() - pen
                    || y < r.top + pen
                    || y >= r.bottom() - pen;
                if on_edge && x >= 0 && y >= 0 && x < w && y < h {
                    out.put_pixel(x as u32, y as u32, HIGHLIGHT);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_map_stretches_range() {
        let grid = PixelGrid::from_slice(3, 1, &[10.0, 15.0, 20.0]).unwrap();
        let img = render_intensity_map(&grid);
        assert_eq!(img.get_pixel(0, 0).0, [0]);
        assert_eq!(img.get_pixel(1, 0).0, [128]);
        assert_eq!(img.get_pixel(2, 0).0, [255]);
    }

    #[test]
    fn test_constant_grid_renders_black() {
        let grid = PixelGrid::filled(2, 2, 3.0).unwrap();
        let img = render_intensity_map(&grid);
        assert!(img.pixels().all(|p| p.0 == [0]));
    }

    #[test]
    fn test_pen_width_bounds() {
        assert_eq!(pen_width(100), 2);
        assert_eq!(pen_width(2000), 4);
        assert_eq!(pen_width(100_000), 8);
    }

    #[test]
    fn test_highlight_outline_only() {
        let img = RgbImage::new(40, 40);
        let out = highlight_regions(&img, &[Rectangle::new(5, 5, 20, 20)]);
        assert_eq!(*out.get_pixel(5, 5), HIGHLIGHT);
        assert_eq!(*out.get_pixel(6, 15), HIGHLIGHT);
        assert_eq!(out.get_pixel(15, 15).0, [0, 0, 0]);
        assert_eq!(out.get_pixel(30, 30).0, [0, 0, 0]);
    }
}
