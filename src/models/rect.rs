use super::Point;

/// Axis-aligned integer rectangle, half-open on the right and bottom edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    /// Left edge (inclusive)
    pub left: i32,
    /// Top edge (inclusive)
    pub top: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rectangle {
    /// Create a rectangle from its top-left corner and size
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges (right/bottom exclusive)
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// True when the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True when the interiors overlap; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rectangle) -> bool {
        other.left < self.right()
            && self.left < other.right()
            && other.top < self.bottom()
            && self.top < other.bottom()
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Rectangle::from_ltrb(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Overlapping area, or `None` when the rectangles are disjoint
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > left && bottom > top {
            Some(Rectangle::from_ltrb(left, top, right, bottom))
        } else {
            None
        }
    }

    /// Grow by `dx` on the left and right and by `dy` on the top and bottom
    pub fn inflate(&self, dx: i32, dy: i32) -> Rectangle {
        Rectangle::new(
            self.left - dx,
            self.top - dy,
            self.width + 2 * dx,
            self.height + 2 * dy,
        )
    }

    /// Whether the pixel at `p` lies inside
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    /// Multiply every edge and dimension by `factor`, truncating toward zero
    pub fn scale(&self, factor: f64) -> Rectangle {
        Rectangle::new(
            (self.left as f64 * factor) as i32,
            (self.top as f64 * factor) as i32,
            (self.width as f64 * factor) as i32,
            (self.height as f64 * factor) as i32,
        )
    }
}
