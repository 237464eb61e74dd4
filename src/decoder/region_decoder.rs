//! Decode a candidate region by trying its rows top to bottom.

use log::{debug, trace};
use rayon::prelude::*;

use super::line_decoder::decode_line_with;
use crate::config::ScanOptions;
use crate::error::DecodeError;
use crate::models::PixelGrid;
use crate::utils::binarization::binarize_dark;
use crate::utils::grayscale::{PixelSource, to_greyscale};

/// Decode a region with default options
///
/// A zero-area source is reported as [`DecodeError::NoBarcodeInRegion`]
/// rather than as a [`GridError`](crate::error::GridError).
pub fn decode_region<S: PixelSource + ?Sized>(source: &S) -> Result<String, DecodeError> {
    decode_region_with(source, &ScanOptions::default()).map(|(_, value)| value)
}

/// Binarise a region at mid-grey and return the first decodable row and its value
///
/// A zero-area source yields [`DecodeError::NoBarcodeInRegion`], logged at
/// debug level, instead of a grid error.
pub fn decode_region_with<S: PixelSource + ?Sized>(
    source: &S,
    opts: &ScanOptions,
) -> Result<(usize, String), DecodeError> {
    let grey = match to_greyscale(source) {
        Ok(grey) => grey,
        Err(err) => {
            debug!("decode_region: skipping region ({err})");
            return Err(DecodeError::NoBarcodeInRegion);
        }
    };
    let mask = binarize_dark(&grey, opts.dark_level());
    decode_mask_rows(&mask, opts)
}

/// First row of `mask` (true = dark) that decodes.
///
/// Rows are tried in parallel, but the result is always the lowest
/// successful row, as if they had been tried top to bottom.
pub fn decode_mask_rows(
    mask: &PixelGrid<bool>,
    opts: &ScanOptions,
) -> Result<(usize, String), DecodeError> {
    (0..mask.height())
        .into_par_iter()
        .find_map_first(|y| match decode_line_with(mask, y, opts) {
            Ok(value) => Some((y, value)),
            Err(err) => {
                trace!("row {y}: {err}");
                None
            }
        })
        .ok_or(DecodeError::NoBarcodeInRegion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_blank_region_has_no_barcode() {
        let img = RgbImage::from_pixel(120, 20, Rgb([255, 255, 255]));
        assert_eq!(decode_region(&img), Err(DecodeError::NoBarcodeInRegion));
    }

    #[test]
    fn test_empty_region_has_no_barcode() {
        let img = RgbImage::new(0, 0);
        assert_eq!(decode_region(&img), Err(DecodeError::NoBarcodeInRegion));
        let flat = RgbImage::new(120, 0);
        assert_eq!(
            decode_region_with(&flat, &ScanOptions::default()),
            Err(DecodeError::NoBarcodeInRegion)
        );
    }

    #[test]
    fn test_mask_rows_without_bars() {
        let mask = PixelGrid::filled(100, 4, true).unwrap();
        assert_eq!(
            decode_mask_rows(&mask, &ScanOptions::default()),
            Err(DecodeError::NoBarcodeInRegion)
        );
    }
}
