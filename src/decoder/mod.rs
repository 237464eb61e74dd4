//! EAN-13 decoding
//!
//! This module turns a binarised barcode region into its twelve digits:
//! - Run-length segmentation of scan lines
//! - Bar-width normalisation and digit lookup
//! - Check digit validation
//! - Row-by-row region scanning

/// Check digit over the first eleven digits
pub mod checksum;
/// Module-width search for one digit group
pub mod digits;
/// Single scan-line decoder
pub mod line_decoder;
/// Row-by-row region decoder
pub mod region_decoder;
/// Run-length segments of a mask row
pub mod runs;
/// Digit pattern table
pub mod tables;

pub use line_decoder::{decode_line, decode_line_with};
pub use region_decoder::{decode_mask_rows, decode_region, decode_region_with};
