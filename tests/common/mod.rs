//! Synthetic EAN-13 images shared by integration tests and benchmarks.
#![allow(dead_code)]

use image::{Rgb, RgbImage};
use rust_ean::PixelGrid;
use rust_ean::decoder::tables::DIGIT_PATTERNS;

/// Run widths in modules for a 12-digit value: start guard, six digits,
/// centre guard, six digits, end guard. The first run is dark.
pub fn ean_runs(value: &str) -> Vec<usize> {
    let digits: Vec<usize> = value.bytes().map(|b| (b - b'0') as usize).collect();
    assert_eq!(digits.len(), 12, "expected twelve digits");

    let mut runs = vec![1, 1, 1];
    for &d in &digits[..6] {
        runs.extend(DIGIT_PATTERNS[d].iter().map(|&m| m as usize));
    }
    runs.extend([1, 1, 1, 1, 1]);
    for &d in &digits[6..] {
        runs.extend(DIGIT_PATTERNS[d].iter().map(|&m| m as usize));
    }
    runs.extend([1, 1, 1]);
    runs
}

/// Width in pixels of a full barcode at `module` pixels per module
pub fn barcode_width(module: u32) -> u32 {
    95 * module
}

/// Paint black bars for `value` onto `image`
pub fn draw_barcode(
    image: &mut RgbImage,
    value: &str,
    left: u32,
    top: u32,
    module: u32,
    height: u32,
) {
    let mut x = left;
    for (i, run) in ean_runs(value).into_iter().enumerate() {
        let width = run as u32 * module;
        if i % 2 == 0 {
            for px in x..x + width {
                for py in top..top + height {
                    image.put_pixel(px, py, Rgb([0, 0, 0]));
                }
            }
        }
        x += width;
    }
}

/// White image with one barcode drawn on it
pub fn barcode_image(
    width: u32,
    height: u32,
    value: &str,
    left: u32,
    top: u32,
    module: u32,
    bar_height: u32,
) -> RgbImage {
    let mut image = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    draw_barcode(&mut image, value, left, top, module, bar_height);
    image
}

/// Mask of `rows` identical scan lines with a quiet zone either side
pub fn barcode_mask(value: &str, module: usize, rows: usize) -> PixelGrid<bool> {
    let quiet = 9 * module;
    let mut line = vec![false; quiet];
    for (i, run) in ean_runs(value).into_iter().enumerate() {
        line.extend(std::iter::repeat_n(i % 2 == 0, run * module));
    }
    line.extend(std::iter::repeat_n(false, quiet));
    let width = line.len();
    PixelGrid::from_fn(width, rows, |p| line[p.x as usize]).unwrap()
}
