//! Convert RGB pixel sources to floating-point luminance grids
//! Y = 0.2989*R + 0.5870*G + 0.1140*B, values in [0, 255]
//!
//! Sources above the localisation size limit are first downsampled with the
//! `image` crate so the gradient stages work on a bounded grid.
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
use rayon::prelude::*;

use crate::config::ScanOptions;
use crate::error::GridError;
use crate::models::{PixelGrid, Rectangle};

/// Luminance coefficients
const COEF_R: f64 = 0.2989;
const COEF_G: f64 = 0.5870;
const COEF_B: f64 = 0.1140;

/// Anything that can be sampled as 8-bit RGB
pub trait PixelSource: Sync {
    /// Width in pixels
    fn width(&self) -> u32;
    /// Height in pixels
    fn height(&self) -> u32;
    /// Red, green and blue components at (x, y)
    fn rgb(&self, x: u32, y: u32) -> [u8; 3];
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }
}

impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = self.get_pixel(x, y).0;
        [r, g, b]
    }
}

/// Raw interleaved RGB bytes (3 bytes per pixel, row-major)
#[derive(Debug, Clone)]
pub struct RgbBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl RgbBuffer {
    /// Wrap an RGB buffer; returns `None` if it is not `width * height * 3` bytes long
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        if data.len() != width as usize * height as usize * 3 {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }
}

impl PixelSource for RgbBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

/// A rectangular window onto another source, without copying
pub struct RegionView<'a, S: PixelSource + ?Sized> {
    source: &'a S,
    area: Rectangle,
}

impl<'a, S: PixelSource + ?Sized> RegionView<'a, S> {
    /// View `area` of `source`, clipped to the source bounds.
    /// Returns `None` when nothing of `area` lies inside the source.
    pub fn new(source: &'a S, area: Rectangle) -> Option<Self> {
        let full = Rectangle::new(0, 0, source.width() as i32, source.height() as i32);
        let area = full.intersection(&area)?;
        Some(Self { source, area })
    }

    /// Clipped area in source coordinates
    pub fn area(&self) -> Rectangle {
        self.area
    }
}

impl<S: PixelSource + ?Sized> PixelSource for RegionView<'_, S> {
    fn width(&self) -> u32 {
        self.area.width as u32
    }

    fn height(&self) -> u32 {
        self.area.height as u32
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        self.source
            .rgb(self.area.left as u32 + x, self.area.top as u32 + y)
    }
}

/// Luminance of a single pixel
#[inline]
pub fn luminance([r, g, b]: [u8; 3]) -> f64 {
    COEF_R * r as f64 + COEF_G * g as f64 + COEF_B * b as f64
}

/// Full-resolution luminance grid; rows are converted in parallel
pub fn to_greyscale<S: PixelSource + ?Sized>(source: &S) -> Result<PixelGrid<f64>, GridError> {
    let width = source.width() as usize;
    let height = source.height() as usize;
    let values: Vec<f64> = (0..width * height)
        .into_par_iter()
        .map(|i| luminance(source.rgb((i % width) as u32, (i / width) as u32)))
        .collect();
    PixelGrid::from_vec(width, height, values)
}

/// Dimensions after scaling the longer side to `resize_to`, minor side truncated
pub fn downscaled_dimensions(width: u32, height: u32, resize_to: u32) -> (u32, u32) {
    if width > height {
        let h = (height as f64 / width as f64 * resize_to as f64) as u32;
        (resize_to, h.max(1))
    } else {
        let w = (width as f64 / height as f64 * resize_to as f64) as u32;
        (w.max(1), resize_to)
    }
}

/// Copy any source into an owned `RgbImage`
pub fn to_rgb_image<S: PixelSource + ?Sized>(source: &S) -> RgbImage {
    RgbImage::from_fn(source.width(), source.height(), |x, y| Rgb(source.rgb(x, y)))
}

/// Luminance grid used for localisation, downsampled when the source is large
pub fn working_greyscale<S: PixelSource + ?Sized>(
    source: &S,
    opts: &ScanOptions,
) -> Result<PixelGrid<f64>, GridError> {
    let (width, height) = (source.width(), source.height());
    if width.max(height) <= opts.resize_above {
        return to_greyscale(source);
    }

    let (target_w, target_h) = downscaled_dimensions(width, height, opts.resize_to);
    log::debug!(
        "downsampling {}x{} source to {}x{} for localisation",
        width,
        height,
        target_w,
        target_h
    );
    let resized = image::imageops::resize(
        &to_rgb_image(source),
        target_w,
        target_h,
        FilterType::Triangle,
    );
    to_greyscale(&resized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(rgb))
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance([0, 0, 0]), 0.0);
        // coefficients sum to 0.9999, so white lands just under 255
        assert!((luminance([255, 255, 255]) - 0.9999 * 255.0).abs() < 1e-9);
        let expected = 0.2989 * 10.0 + 0.5870 * 20.0 + 0.1140 * 30.0;
        assert!((luminance([10, 20, 30]) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_to_greyscale_layout() {
        let mut img = solid(3, 2, [0, 0, 0]);
        img.put_pixel(2, 1, Rgb([255, 255, 255]));
        let grey = to_greyscale(&img).unwrap();
        assert_eq!((grey.width(), grey.height()), (3, 2));
        assert!(grey[(2, 1)] > 254.9);
        assert_eq!(grey[(1, 1)], 0.0);
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let img = RgbImage::new(0, 5);
        assert!(matches!(to_greyscale(&img), Err(GridError::ZeroArea { .. })));
    }

    #[test]
    fn test_downscaled_dimensions_truncate_minor_side() {
        assert_eq!(downscaled_dimensions(1000, 333, 300), (300, 99));
        assert_eq!(downscaled_dimensions(500, 1000, 300), (150, 300));
        assert_eq!(downscaled_dimensions(600, 600, 300), (300, 300));
        assert_eq!(downscaled_dimensions(10000, 1, 300), (300, 1));
    }

    #[test]
    fn test_working_greyscale_resize_policy() {
        let opts = ScanOptions::default();
        let small = solid(450, 100, [10, 20, 30]);
        let grid = working_greyscale(&small, &opts).unwrap();
        assert_eq!((grid.width(), grid.height()), (450, 100));

        let large = solid(900, 300, [10, 20, 30]);
        let grid = working_greyscale(&large, &opts).unwrap();
        assert_eq!((grid.width(), grid.height()), (300, 100));
    }

    #[test]
    fn test_region_view_offsets_and_clips() {
        let mut img = solid(10, 10, [0, 0, 0]);
        img.put_pixel(4, 5, Rgb([1, 2, 3]));
        let view = RegionView::new(&img, Rectangle::new(4, 5, 20, 20)).unwrap();
        assert_eq!((view.width(), view.height()), (6, 5));
        assert_eq!(view.rgb(0, 0), [1, 2, 3]);
        assert!(RegionView::new(&img, Rectangle::new(10, 0, 5, 5)).is_none());
    }

    #[test]
    fn test_rgb_buffer_length_checked() {
        assert!(RgbBuffer::new(vec![0; 11], 2, 2).is_none());
        let buf = RgbBuffer::new(vec![1, 2, 3, 4, 5, 6], 2, 1).unwrap();
        assert_eq!(buf.rgb(1, 0), [4, 5, 6]);
    }
}
