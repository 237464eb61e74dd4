//! Run-length segmentation of a mask row
use crate::models::PixelGrid;

/// A maximal run of equal mask values along a scan line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSegment {
    /// Mask value of the run (true = dark bar)
    pub dark: bool,
    /// Run length in pixels (always > 0)
    pub length: usize,
}

/// Collapse consecutive equal values into runs, left to right
pub fn run_segments(row: &[bool]) -> Vec<RunSegment> {
    let mut segments: Vec<RunSegment> = Vec::new();
    for &value in row {
        match segments.last_mut() {
            Some(last) if last.dark == value => last.length += 1,
            _ => segments.push(RunSegment {
                dark: value,
                length: 1,
            }),
        }
    }
    segments
}

/// Run lengths of one mask row with a single leading light run (the quiet zone) dropped
///
/// # Panics
/// If `row` is outside the mask.
pub fn bar_lengths(mask: &PixelGrid<bool>, row: usize) -> Vec<usize> {
    let mut segments = run_segments(mask.row(row));
    if segments.first().is_some_and(|s| !s.dark) {
        segments.remove(0);
    }
    segments.into_iter().map(|s| s.length).collect()
}
