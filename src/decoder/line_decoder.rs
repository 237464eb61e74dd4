//! Decode one horizontal scan line of a barcode mask.
//!
//! Run lengths after the left quiet zone are consumed in fourteen groups:
//! the start guard (3 runs), six left digits (4 runs each), the centre
//! guard (5 runs) and six right digits. Guards are skipped, not validated,
//! and the end guard may be cut off. The twelfth digit must match the check
//! digit of the first eleven.

use super::checksum::check_digit;
use super::digits::decode_digit;
use super::runs::bar_lengths;
use crate::config::ScanOptions;
use crate::error::DecodeError;
use crate::models::PixelGrid;

/// Runs in the start guard
pub const START_GUARD_RUNS: usize = 3;
/// Runs in the centre guard
pub const CENTRE_GUARD_RUNS: usize = 5;
/// Runs per encoded digit
pub const DIGIT_RUNS: usize = 4;
/// Digits read from the bars
pub const DIGIT_COUNT: usize = 12;

/// Runs consumed by the guards and twelve digits
const RUNS_CONSUMED: usize = START_GUARD_RUNS + CENTRE_GUARD_RUNS + DIGIT_COUNT * DIGIT_RUNS;

/// Decode row `row` of `mask` (true = dark) with default options
///
/// # Panics
/// If `row` is outside the mask.
pub fn decode_line(mask: &PixelGrid<bool>, row: usize) -> Result<String, DecodeError> {
    decode_line_with(mask, row, &ScanOptions::default())
}

/// Decode row `row` of `mask` (true = dark)
///
/// # Panics
/// If `row` is outside the mask.
pub fn decode_line_with(
    mask: &PixelGrid<bool>,
    row: usize,
    opts: &ScanOptions,
) -> Result<String, DecodeError> {
    assert!(
        row < mask.height(),
        "scan line {row} is outside a mask of height {}",
        mask.height()
    );

    let lengths = bar_lengths(mask, row);
    let required = opts.min_segments.max(RUNS_CONSUMED);
    if lengths.len() < required {
        return Err(DecodeError::NotEnoughBars {
            found: lengths.len(),
            required,
        });
    }

    let mut digits = [0u8; DIGIT_COUNT];
    let mut offset = 0;
    let mut next = 0;
    for group in 0..14 {
        match group {
            0 => offset += START_GUARD_RUNS,
            7 => offset += CENTRE_GUARD_RUNS,
            _ => {
                let runs = [
                    lengths[offset],
                    lengths[offset + 1],
                    lengths[offset + 2],
                    lengths[offset + 3],
                ];
                digits[next] = decode_digit(runs, opts.max_width_attempts)?;
                next += 1;
                offset += DIGIT_RUNS;
            }
        }
    }

    let [data @ .., found] = digits;
    let expected = check_digit(&data);
    if found != expected {
        return Err(DecodeError::ChecksumMismatch { expected, found });
    }

    Ok(digits.iter().map(|d| char::from(b'0' + d)).collect())
}
