//! Connected components of a boolean mask
//! Groups masked cells into 4-connected regions using an explicit work-list
//! flood fill, so stack usage stays bounded regardless of mask size.
use crate::models::{PixelGrid, Point, Rectangle};

/// A non-empty set of 4-connected masked points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    points: Vec<Point>,
}

impl ConnectedComponent {
    /// Points in the component, in fill order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points (always > 0)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; components are never empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Tightest rectangle containing every point
    pub fn bounds(&self) -> Rectangle {
        let first = self.points[0];
        let (min_x, min_y, max_x, max_y) = self.points.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        );
        Rectangle::from_ltrb(min_x, min_y, max_x + 1, max_y + 1)
    }

    /// Whether any point lies inside `area`
    pub fn overlaps(&self, area: &Rectangle) -> bool {
        self.points.iter().any(|p| area.contains(*p))
    }
}

/// Find every connected region of `true` cells.
/// The returned order is an implementation detail; treat it as a set.
pub fn find_components(mask: &PixelGrid<bool>) -> Vec<ConnectedComponent> {
    let width = mask.width();
    let mut visited = vec![false; width * mask.height()];
    let mut components = Vec::new();

    for (seed, _) in mask.enumerate_where(|_, masked| *masked) {
        if visited[seed.y as usize * width + seed.x as usize] {
            continue;
        }
        components.push(flood_fill(mask, seed, &mut visited));
    }

    components
}

fn flood_fill(mask: &PixelGrid<bool>, seed: Point, visited: &mut [bool]) -> ConnectedComponent {
    let width = mask.width();
    let origin_value = mask[seed];
    let mut points = Vec::new();
    let mut pending = vec![seed];

    while let Some(p) = pending.pop() {
        let Ok(value) = mask.get(p.x as i64, p.y as i64) else {
            continue;
        };
        let idx = p.y as usize * width + p.x as usize;
        if *value != origin_value || visited[idx] {
            continue;
        }
        visited[idx] = true;
        points.push(p);
        pending.extend(p.neighbours4());
    }

    ConnectedComponent { points }
}
