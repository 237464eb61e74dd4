//! Error types
//!
//! Two kinds of failure exist. [`GridError`] marks a broken contract (bad
//! dimensions, coordinates outside a grid) and is never expected during a
//! normal scan. [`DecodeError`] is the everyday "this row / region holds no
//! readable barcode" outcome and callers are expected to move on to the next
//! row or region when they see one.

use thiserror::Error;

/// Contract violations on [`PixelGrid`](crate::models::PixelGrid) construction and access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grids must have at least one column and one row
    #[error("zero-area grids are not supported ({width}x{height})")]
    ZeroArea {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Backing buffer does not hold exactly `width * height` cells
    #[error("grid buffer holds {actual} cells, expected {expected}")]
    DataLength {
        /// `width * height`
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },

    /// Coordinate outside `[0, width) x [0, height)`
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange {
        /// Requested column
        x: i64,
        /// Requested row
        y: i64,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },
}

/// Reasons a scan line or region did not yield an EAN-13 value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The row holds fewer run segments than guards plus twelve digits need
    #[error("not enough bars: found {found} run segments, need at least {required}")]
    NotEnoughBars {
        /// Segments present after dropping the leading margin
        found: usize,
        /// Minimum segment count
        required: usize,
    },

    /// The bar-width search could not scale a digit group to seven modules
    #[error("bar widths {lengths:?} could not be normalised to seven modules")]
    PatternUnresolvable {
        /// Raw pixel lengths of the four runs
        lengths: [usize; 4],
    },

    /// Normalised widths are not one of the ten digit patterns
    #[error("module pattern {pattern:?} does not match any digit")]
    UnknownDigitPattern {
        /// Normalised module widths
        pattern: [u8; 4],
    },

    /// The twelfth digit disagrees with the check digit of the first eleven
    #[error("check digit mismatch: expected {expected}, read {found}")]
    ChecksumMismatch {
        /// Check digit computed from the first eleven digits
        expected: u8,
        /// Digit read from the bars
        found: u8,
    },

    /// Every row of a candidate region failed to decode
    #[error("no barcode in this region")]
    NoBarcodeInRegion,
}
