//! EAN-13 digit patterns

/// Module widths (bar/space alternation, seven modules in total) for digits 0-9.
///
/// Only widths are compared, so the left-hand odd-parity and right-hand
/// patterns share one table.
pub const DIGIT_PATTERNS: [[u8; 4]; 10] = [
    [3, 2, 1, 1],
    [2, 2, 2, 1],
    [2, 1, 2, 2],
    [1, 4, 1, 1],
    [1, 1, 3, 2],
    [1, 2, 3, 1],
    [1, 1, 1, 4],
    [1, 3, 1, 2],
    [1, 2, 1, 3],
    [3, 1, 1, 2],
];

/// Modules in one digit
pub const MODULES_PER_DIGIT: u32 = 7;

/// Digit whose pattern equals `pattern`
pub fn digit_for_pattern(pattern: &[u8; 4]) -> Option<u8> {
    DIGIT_PATTERNS
        .iter()
        .position(|p| p == pattern)
        .map(|d| d as u8)
}
