//! Barcode localisation
//!
//! This module finds rectangles in a photograph that look like 1D barcodes:
//! - Barcode-likelihood gradient (strong horizontal, weak vertical change)
//! - Normalise, blur and threshold into a mask
//! - Connected components and bounding-box merging
//! - Candidate selection and mapping back to source coordinates

/// Flood-fill connected components of a boolean mask
pub mod connected_components;
/// Horizontal-minus-vertical gradient
pub mod gradient;
/// Bounding-box merging and candidate selection
pub mod regions;

use log::debug;

use crate::config::ScanOptions;
use crate::error::GridError;
use crate::models::{PixelGrid, Rectangle};
use crate::utils::binarization::threshold_mask;
use crate::utils::filters::{box_blur, normalise};
use crate::utils::grayscale::{PixelSource, working_greyscale};
use connected_components::find_components;
use gradient::barcode_gradient;
use regions::{merged_component_bounds, select_candidates};

/// Intermediate grids of one localisation run
#[derive(Debug, Clone)]
pub struct LocalisationStages {
    /// Luminance of the (possibly downsampled) working image
    pub greyscale: PixelGrid<f64>,
    /// Raw barcode-likelihood gradient
    pub gradient: PixelGrid<f64>,
    /// Thresholded, blurred, normalised gradient
    pub mask: PixelGrid<bool>,
    /// Merged component bounds in working-grid coordinates
    pub regions: Vec<Rectangle>,
    /// Candidate rectangles in source coordinates
    pub candidates: Vec<Rectangle>,
}

/// Run the whole localisation pipeline, keeping every intermediate grid
pub fn localise<S: PixelSource + ?Sized>(
    source: &S,
    opts: &ScanOptions,
) -> Result<LocalisationStages, GridError> {
    let greyscale = working_greyscale(source, opts)?;
    let gradient = barcode_gradient(&greyscale);
    let blurred = box_blur(&normalise(gradient.clone()), opts.blur_radius);
    let mask = threshold_mask(&blurred, opts.mask_threshold);

    let components = find_components(&mask);
    let regions = merged_component_bounds(&components);
    let scale = source.width() as f64 / greyscale.width() as f64;
    let candidates = select_candidates(&regions, greyscale.bounds(), scale);

    debug!(
        "localise: working grid {}x{}, {} components, {} merged regions, {} candidates",
        greyscale.width(),
        greyscale.height(),
        components.len(),
        regions.len(),
        candidates.len()
    );

    Ok(LocalisationStages {
        greyscale,
        gradient,
        mask,
        regions,
        candidates,
    })
}

/// Candidate barcode rectangles in source coordinates, as an unordered set
pub fn find_candidate_regions<S: PixelSource + ?Sized>(
    source: &S,
    opts: &ScanOptions,
) -> Result<Vec<Rectangle>, GridError> {
    Ok(localise(source, opts)?.candidates)
}
