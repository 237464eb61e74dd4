//! Tunable constants for localisation and decoding.
//!
//! [`ScanOptions::default`] reproduces the fixed pipeline constants; the
//! `EAN_*` environment variables override individual values for
//! experimentation without rebuilding.

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Long side above which the source is downsampled before localisation
pub const DEFAULT_RESIZE_ABOVE: u32 = 450;
/// Long side of the downsampled working image
pub const DEFAULT_RESIZE_TO: u32 = 300;
/// Box blur radius applied to the normalised gradient
pub const DEFAULT_BLUR_RADIUS: usize = 2;
/// Blurred gradient level at or above which a cell is masked
pub const DEFAULT_MASK_THRESHOLD: f64 = 1.0 / 3.0;
/// Fraction of full intensity below which a region pixel counts as a dark bar
pub const DEFAULT_DARK_THRESHOLD: f64 = 0.5;
/// Guard (3) + six digits (24) + centre guard (5) + six digits (24) + one trailing run
pub const DEFAULT_MIN_SEGMENTS: usize = 57;
/// Cap on bar-width guesses per digit group
pub const DEFAULT_MAX_WIDTH_ATTEMPTS: usize = 1000;

/// Options shared by localisation and decoding
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    /// Downsample when the longer side exceeds this many pixels
    pub resize_above: u32,
    /// Target longer side when downsampling
    pub resize_to: u32,
    /// Gradient blur radius
    pub blur_radius: usize,
    /// Mask threshold on the normalised, blurred gradient
    pub mask_threshold: f64,
    /// Dark-pixel threshold as a fraction of 255
    pub dark_threshold: f64,
    /// Minimum run segments a scan line must hold
    pub min_segments: usize,
    /// Bar-width search cap per digit group
    pub max_width_attempts: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            resize_above: DEFAULT_RESIZE_ABOVE,
            resize_to: DEFAULT_RESIZE_TO,
            blur_radius: DEFAULT_BLUR_RADIUS,
            mask_threshold: DEFAULT_MASK_THRESHOLD,
            dark_threshold: DEFAULT_DARK_THRESHOLD,
            min_segments: DEFAULT_MIN_SEGMENTS,
            max_width_attempts: DEFAULT_MAX_WIDTH_ATTEMPTS,
        }
    }
}

impl ScanOptions {
    /// Defaults overridden by `EAN_RESIZE_ABOVE`, `EAN_RESIZE_TO`,
    /// `EAN_BLUR_RADIUS`, `EAN_MASK_THRESHOLD` and `EAN_DARK_THRESHOLD`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            resize_above: parse_env_usize("EAN_RESIZE_ABOVE", defaults.resize_above as usize)
                as u32,
            resize_to: (parse_env_usize("EAN_RESIZE_TO", defaults.resize_to as usize) as u32)
                .max(1),
            blur_radius: parse_env_usize("EAN_BLUR_RADIUS", defaults.blur_radius).min(16),
            mask_threshold: parse_env_f64("EAN_MASK_THRESHOLD", defaults.mask_threshold)
                .clamp(0.0, 1.0),
            dark_threshold: parse_env_f64("EAN_DARK_THRESHOLD", defaults.dark_threshold)
                .clamp(0.0, 1.0),
            ..defaults
        }
    }

    /// Luminance below which a region pixel is dark
    pub fn dark_level(&self) -> f64 {
        self.dark_threshold * 255.0
    }
}
