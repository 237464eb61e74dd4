//! Core data structures shared by localisation and decoding

/// Decoded barcode result
pub mod barcode;
/// Immutable 2D grid container
pub mod grid;
/// Integer pixel coordinate
pub mod point;
/// Axis-aligned integer rectangle
pub mod rect;

pub use barcode::Barcode;
pub use grid::PixelGrid;
pub use point::Point;
pub use rect::Rectangle;
