use crate::detector::LocalisationStages;
use crate::models::PixelGrid;
use crate::utils::render::{highlight_regions, render_intensity_map, render_mask};
use image::{ImageResult, RgbImage};
use std::fs;
use std::path::Path;

/// Load an image from disk as 8-bit RGB.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> ImageResult<RgbImage> {
    Ok(image::open(path)?.to_rgb8())
}

/// Summary statistics for a luminance grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreyStats {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
    /// Mean value.
    pub mean: f64,
}

/// Summary statistics for a boolean mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskStats {
    /// Count of masked cells.
    pub masked: usize,
    /// Total cells in the mask.
    pub total: usize,
    /// Ratio of masked cells to total cells.
    pub ratio: f64,
}

/// Compute min/max/mean for a grid.
pub fn grey_stats(grid: &PixelGrid<f64>) -> GreyStats {
    let values = grid.as_slice();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    GreyStats { min, max, mean }
}

/// Compute masked-cell stats for a mask.
pub fn mask_stats(mask: &PixelGrid<bool>) -> MaskStats {
    let masked = mask.as_slice().iter().filter(|v| **v).count();
    let total = mask.as_slice().len();
    MaskStats {
        masked,
        total,
        ratio: masked as f64 / total as f64,
    }
}

/// Write the gradient, mask and highlighted-candidate images into `dir`.
///
/// Files are named `CombinedGradients.png`, `Mask.png` and
/// `PossibleBarcodeAreas.png`; the directory is created if missing.
pub fn save_interim_images<P: AsRef<Path>>(
    dir: P,
    source: &RgbImage,
    stages: &LocalisationStages,
) -> ImageResult<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    render_intensity_map(&stages.gradient).save(dir.join("CombinedGradients.png"))?;
    render_mask(&stages.mask).save(dir.join("Mask.png"))?;
    highlight_regions(source, &stages.candidates).save(dir.join("PossibleBarcodeAreas.png"))?;
    Ok(())
}
