//! Immutable two-dimensional pixel container shared by every pipeline stage.
//!
//! Cells are stored row-major in one flat buffer (`index = y * width + x`).
//! Grids are never mutated after construction; every stage produces a new
//! grid through [`PixelGrid::transform`] or one of its variants.

use std::ops::Index;

use rayon::prelude::*;

use super::{Point, Rectangle};
use crate::error::GridError;

/// Fixed-size 2D grid of `T`, at least 1x1
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

fn check_dimensions(width: usize, height: usize, len: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::ZeroArea { width, height });
    }
    let expected = width * height;
    if len != expected {
        return Err(GridError::DataLength {
            expected,
            actual: len,
        });
    }
    Ok(())
}

impl<T: Clone> PixelGrid<T> {
    /// Build a grid from row-major values, copying them
    pub fn from_slice(width: usize, height: usize, values: &[T]) -> Result<Self, GridError> {
        check_dimensions(width, height, values.len())?;
        Ok(Self {
            width,
            height,
            data: values.to_vec(),
        })
    }

    /// Grid with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self, GridError> {
        Self::from_vec(width, height, vec![value; width * height])
    }
}

impl<T> PixelGrid<T> {
    /// Build a grid that takes ownership of an already-isolated row-major buffer
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, GridError> {
        check_dimensions(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid by evaluating `f` at every coordinate
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(Point) -> T,
    ) -> Result<Self, GridError> {
        check_dimensions(width, height, width * height)?;
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(Point::new(x as i32, y as i32)));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Grid width (always > 0)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (always > 0)
    pub fn height(&self) -> usize {
        self.height
    }

    /// The rectangle `(0, 0, width, height)`
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Whether `(x, y)` addresses a cell
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Bounds-checked access
    pub fn get(&self, x: i64, y: i64) -> Result<&T, GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(&self.data[y as usize * self.width + x as usize])
    }

    /// One row of cells, left to right
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &[T] {
        assert!(
            y < self.height,
            "row {y} is outside a grid of height {}",
            self.height
        );
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Cells as a row-major slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Every `(point, value)` pair in column-major order (outer loop over x)
    pub fn enumerate(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        let height = self.height;
        (0..self.width).flat_map(move |x| {
            (0..height).map(move |y| {
                (
                    Point::new(x as i32, y as i32),
                    &self.data[y * self.width + x],
                )
            })
        })
    }

    /// [`enumerate`](Self::enumerate) restricted to cells accepted by `filter`
    pub fn enumerate_where<'a, F>(&'a self, mut filter: F) -> impl Iterator<Item = (Point, &'a T)> + 'a
    where
        F: FnMut(Point, &T) -> bool + 'a,
    {
        self.enumerate().filter(move |(p, v)| filter(*p, *v))
    }

    /// Map every cell to a new grid of the same dimensions
    pub fn transform<U>(&self, mut f: impl FnMut(&T) -> U) -> PixelGrid<U> {
        PixelGrid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(&mut f).collect(),
        }
    }

    /// Map every cell, with its coordinate, to a new grid in parallel; `f` must be pure
    pub fn par_transform_with_point<U, F>(&self, f: F) -> PixelGrid<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T, Point) -> U + Sync,
    {
        let width = self.width;
        PixelGrid {
            width,
            height: self.height,
            data: self
                .data
                .par_iter()
                .enumerate()
                .map(|(i, v)| f(v, Point::new((i % width) as i32, (i / width) as i32)))
                .collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for PixelGrid<T> {
    type Output = T;

    /// # Panics
    /// If the coordinate is outside the grid.
    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(
            x < self.width && y < self.height,
            "coordinate ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        &self.data[y * self.width + x]
    }
}

impl<T> Index<Point> for PixelGrid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        match self.get(p.x as i64, p.y as i64) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PixelGrid<i32> {
        PixelGrid::from_slice(3, 2, &[1, 2, 3, 4, 5, 6]).unwrap()
    }

    #[test]
    fn test_row_major_layout() {
        let g = sample();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(*g.get(2, 0).unwrap(), 3);
        assert_eq!(*g.get(0, 1).unwrap(), 4);
        assert_eq!(g[(1, 1)], 5);
        assert_eq!(g.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_zero_area_rejected() {
        assert_eq!(
            PixelGrid::<u8>::from_slice(0, 4, &[]),
            Err(GridError::ZeroArea {
                width: 0,
                height: 4
            })
        );
        assert!(matches!(
            PixelGrid::from_vec(2, 2, vec![0u8; 3]),
            Err(GridError::DataLength {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_out_of_range_access() {
        let g = sample();
        for (x, y) in [(-1, 0), (3, 0), (0, -1), (0, 2), (i64::MAX, 0)] {
            assert!(
                matches!(g.get(x, y), Err(GridError::OutOfRange { .. })),
                "({x}, {y}) should be rejected"
            );
        }
        let mask = g.transform(|v| *v > 2);
        assert!(mask.get(0, 2).is_err());
        assert!(mask.get(-1, 1).is_err());
    }

    #[test]
    #[should_panic]
    fn test_index_panics_out_of_range() {
        let g = sample();
        let _ = g[(3, 0)];
    }

    #[test]
    fn test_source_is_copied() {
        let mut values = vec![1, 2, 3, 4];
        let g = PixelGrid::from_slice(2, 2, &values).unwrap();
        values[0] = 99;
        assert_eq!(g[(0, 0)], 1);
    }

    #[test]
    fn test_enumerate_is_column_major() {
        let g = sample();
        let order: Vec<i32> = g.enumerate().map(|(_, v)| *v).collect();
        assert_eq!(order, vec![1, 4, 2, 5, 3, 6]);
        let points: Vec<Point> = g.enumerate().take(2).map(|(p, _)| p).collect();
        assert_eq!(points, vec![Point::new(0, 0), Point::new(0, 1)]);
    }

    #[test]
    fn test_enumerate_where_filters() {
        let g = sample();
        let even: Vec<i32> = g.enumerate_where(|_, v| v % 2 == 0).map(|(_, v)| *v).collect();
        assert_eq!(even, vec![4, 2, 6]);
    }

    #[test]
    fn test_transform_preserves_dimensions() {
        let g = sample();
        let doubled = g.transform(|v| f64::from(*v) * 2.0);
        assert_eq!((doubled.width(), doubled.height()), (3, 2));
        for (p, v) in g.enumerate() {
            assert_eq!(doubled[p], f64::from(*v) * 2.0);
        }
    }

    #[test]
    fn test_par_transform_with_point_sees_coordinates() {
        let g = sample();
        let coords = g.par_transform_with_point(|_, p| (p.x, p.y));
        assert_eq!(coords[(2, 1)], (2, 1));
        let par = g.par_transform_with_point(|v, p| v + p.x);
        assert_eq!(par.as_slice(), &[1, 3, 5, 4, 6, 8]);
    }
}
