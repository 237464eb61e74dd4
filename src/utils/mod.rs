//! Utility functions for image processing
//!
//! This module provides the grid-level helpers used by localisation and
//! decoding:
//! - Greyscale conversion (RGB sources to luminance grids)
//! - Normalisation and box blur
//! - Threshold masks
//! - Rendering grids and highlights back to images

pub mod binarization;
pub mod filters;
pub mod grayscale;
pub mod render;
