//! UPC-style mod-10 check digit

/// Check digit for the first eleven digits.
///
/// Even (0-based) positions weigh 3, odd positions weigh 1; the digit is
/// the complement of the weighted sum mod 10.
pub fn check_digit(digits: &[u8; 11]) -> u8 {
    let total: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d as u32 * 3 } else { d as u32 })
        .sum();
    match total % 10 {
        0 => 0,
        m => (10 - m) as u8,
    }
}
