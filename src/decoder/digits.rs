//! Bar-width normalisation for one digit group.
//!
//! Four measured run lengths are scaled to whole modules by guessing the
//! width of a single module. The first guess is `total / 7`; when the
//! rounded widths do not add up to seven the guess is nudged by a tenth of
//! the first guess and the rounding is retried. A guess that has already
//! been tried means the search is cycling and the group is unreadable.

use super::tables::{MODULES_PER_DIGIT, digit_for_pattern};
use crate::error::DecodeError;

/// Module count for one run at the given module width.
/// Halves round to even; zero-width runs still count as one module.
fn modules(length: usize, module_width: f64) -> u32 {
    // anything above 8 already rules out a seven-module group
    (length as f64 / module_width)
        .round_ties_even()
        .clamp(1.0, 8.0) as u32
}

/// Whole-module widths summing to seven for four measured runs
pub fn normalise_bar_widths(
    lengths: [usize; 4],
    max_attempts: usize,
) -> Result<[u8; 4], DecodeError> {
    let unresolvable = DecodeError::PatternUnresolvable { lengths };
    let total: usize = lengths.iter().sum();
    let mut module_width = total as f64 / MODULES_PER_DIGIT as f64;
    let step = module_width / 10.0;
    let mut attempted: Vec<f64> = Vec::new();

    for _ in 0..max_attempts {
        if module_width <= 0.0 {
            return Err(unresolvable);
        }
        let normalised = lengths.map(|l| modules(l, module_width));
        let sum: u32 = normalised.iter().sum();
        if sum == MODULES_PER_DIGIT {
            return Ok(normalised.map(|m| m as u8));
        }

        attempted.push(module_width);
        if sum > MODULES_PER_DIGIT {
            module_width += step;
        } else {
            module_width -= step;
        }
        if attempted.contains(&module_width) {
            log::trace!("bar widths {lengths:?} cycle at module width {module_width}");
            return Err(unresolvable);
        }
    }

    Err(unresolvable)
}

/// Decode one digit from its four run lengths
pub fn decode_digit(lengths: [usize; 4], max_attempts: usize) -> Result<u8, DecodeError> {
    let pattern = normalise_bar_widths(lengths, max_attempts)?;
    digit_for_pattern(&pattern).ok_or(DecodeError::UnknownDigitPattern { pattern })
}
