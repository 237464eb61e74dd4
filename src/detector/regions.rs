//! Turn mask components into candidate barcode rectangles.
//!
//! Components are boxed, boxes that overlap are merged until the set is
//! disjoint, and each merged box is re-tightened around the components it
//! covers. Wide boxes are then padded horizontally and mapped back to
//! source-image coordinates.

use super::connected_components::ConnectedComponent;
use crate::models::Rectangle;

/// Tight bounds, widened symmetrically when the component is taller than wide
pub fn squared_off_bounds(component: &ConnectedComponent) -> Rectangle {
    let bounds = component.bounds();
    if bounds.height > bounds.width {
        bounds.inflate((bounds.height - bounds.width) / 2, 0)
    } else {
        bounds
    }
}

/// Merge overlapping rectangles until no two intersect.
///
/// Works on an index-addressed arena: find the first intersecting pair,
/// replace both with their union, and rescan from the start.
pub fn merge_overlapping(mut boxes: Vec<Rectangle>) -> Vec<Rectangle> {
    'rescan: loop {
        for i in 0..boxes.len() {
            for j in (i + 1)..boxes.len() {
                if boxes[i].intersects(&boxes[j]) {
                    let merged = boxes[i].union(&boxes[j]);
                    // j > i, so removing j first keeps i valid
                    boxes.swap_remove(j);
                    boxes.swap_remove(i);
                    boxes.push(merged);
                    continue 'rescan;
                }
            }
        }
        return boxes;
    }
}

/// Disjoint bounding rectangles for a set of components.
///
/// Each merged rectangle is recomputed as the union of the tight bounds of
/// every component with at least one point inside it. The output is a set;
/// its order carries no meaning.
pub fn merged_component_bounds(components: &[ConnectedComponent]) -> Vec<Rectangle> {
    let squared: Vec<Rectangle> = components.iter().map(squared_off_bounds).collect();
    let merged = merge_overlapping(squared);

    merged
        .iter()
        .filter_map(|area| {
            components
                .iter()
                .filter(|c| c.overlaps(area))
                .map(|c| c.bounds())
                .reduce(|a, b| a.union(&b))
        })
        .collect()
}

/// Keep wide regions, pad them, and map them into source coordinates.
///
/// `working` is the bounds of the grid the regions were found in and
/// `scale` is `source_width / working_width`.
pub fn select_candidates(regions: &[Rectangle], working: Rectangle, scale: f64) -> Vec<Rectangle> {
    regions
        .iter()
        .filter(|r| r.width > r.height)
        .filter_map(|r| r.inflate(r.width / 10, 0).intersection(&working))
        .map(|r| r.scale(scale))
        .filter(|r| !r.is_empty())
        .collect()
}
