//! RustEAN - EAN-13 barcode localisation and decoding
//!
//! Finds barcode-shaped regions in a photograph and reads the twelve digits
//! encoded by the bar widths along a horizontal scan line.
//!
//! Localisation works on a (possibly downsampled) luminance grid: a
//! horizontal-minus-vertical gradient highlights bars, which are blurred,
//! thresholded, grouped into connected components and merged into disjoint
//! rectangles. Each candidate rectangle is then binarised at full
//! resolution and scanned row by row.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Tunable pipeline constants
pub mod config;
/// EAN-13 decoding (run lengths, digit patterns, check digit)
pub mod decoder;
/// Barcode localisation (gradient, components, region merging)
pub mod detector;
/// Error types
pub mod error;
/// Core data structures (PixelGrid, Point, Rectangle, Barcode)
pub mod models;
/// Helpers for the command-line tool (image loading, grid statistics)
pub mod tools;
/// Utility functions (greyscale, filters, binarisation, rendering)
pub mod utils;

pub use config::ScanOptions;
pub use decoder::{decode_line, decode_region};
pub use error::{DecodeError, GridError};
pub use models::{Barcode, PixelGrid, Point, Rectangle};
pub use utils::grayscale::{PixelSource, RegionView, RgbBuffer};

use log::debug;
use rayon::prelude::*;

use decoder::decode_region_with;

/// Candidate barcode rectangles in source coordinates, using default options.
///
/// The result is a set: its order carries no meaning.
pub fn find_candidate_regions<S: PixelSource + ?Sized>(
    source: &S,
) -> Result<Vec<Rectangle>, GridError> {
    Scanner::new().find_candidate_regions(source)
}

/// Localise and decode every barcode in an image, using default options
pub fn scan<S: PixelSource + ?Sized>(source: &S) -> Result<Vec<Barcode>, GridError> {
    Scanner::new().scan(source)
}

/// Scanner with explicit options
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    /// Scanner with the default pipeline constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner with custom options
    pub fn with_options(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Scanner configured from `EAN_*` environment variables
    pub fn from_env() -> Self {
        Self::with_options(ScanOptions::from_env())
    }

    /// Options in use
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Candidate barcode rectangles in source coordinates (unordered)
    pub fn find_candidate_regions<S: PixelSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Vec<Rectangle>, GridError> {
        detector::find_candidate_regions(source, &self.options)
    }

    /// Decode a cropped barcode region
    pub fn decode_region<S: PixelSource + ?Sized>(&self, source: &S) -> Result<String, DecodeError> {
        decode_region_with(source, &self.options).map(|(_, value)| value)
    }

    /// Every barcode that decodes, in candidate-region order
    pub fn scan<S: PixelSource + ?Sized>(&self, source: &S) -> Result<Vec<Barcode>, GridError> {
        let regions = self.find_candidate_regions(source)?;
        Ok(regions
            .par_iter()
            .filter_map(|area| self.decode_area(source, *area))
            .collect())
    }

    /// The first candidate region that decodes (lowest region index)
    pub fn scan_first<S: PixelSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Option<Barcode>, GridError> {
        let regions = self.find_candidate_regions(source)?;
        Ok(regions
            .par_iter()
            .find_map_first(|area| self.decode_area(source, *area)))
    }

    fn decode_area<S: PixelSource + ?Sized>(&self, source: &S, area: Rectangle) -> Option<Barcode> {
        let view = RegionView::new(source, area)?;
        match decode_region_with(&view, &self.options) {
            Ok((row, value)) => {
                debug!("region {:?}: decoded {} on row {}", view.area(), value, row);
                Some(Barcode::new(value, view.area(), row))
            }
            Err(err) => {
                debug!("region {:?}: {}", view.area(), err);
                None
            }
        }
    }
}
