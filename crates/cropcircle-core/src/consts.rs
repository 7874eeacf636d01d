/// Minimum output pixel count (side * side) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Side length of the on-screen circular viewport, in pixels.
pub const DEFAULT_VIEWPORT_SIZE: u32 = 200;

/// Side length of the exported square bitmap, in pixels.
pub const DEFAULT_OUTPUT_SIZE: u32 = 200;

/// Largest output surface the compositor will allocate.
pub const MAX_OUTPUT_SIZE: u32 = 8192;

/// JPEG quality (1..=100) used for exported avatars.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Upload ceiling for source files. Default: 2 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Largest decoded width or height accepted by intake.
pub const DEFAULT_MAX_DIMENSION: u32 = 16_384;

/// MIME types accepted by intake.
pub const DEFAULT_ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Background colour outside the circular clip and outside the source image.
/// Black matches what a transparent canvas becomes after JPEG encoding.
pub const DEFAULT_FILL: [u8; 3] = [0, 0, 0];

/// Slider range and the anchor position that maps to `fit_zoom`.
pub const SLIDER_MIN: u8 = 0;
pub const SLIDER_MID: u8 = 50;
pub const SLIDER_MAX: u8 = 100;

/// Slider position applied whenever a new image is loaded.
pub const DEFAULT_SLIDER: u8 = SLIDER_MID;

/// Source-pixel footprint per output pixel above which the compositor
/// switches from single bilinear taps to a supersampled average.
pub const SUPERSAMPLE_FOOTPRINT: f64 = 2.0;

/// Upper bound on supersampling taps per axis.
pub const MAX_SUPERSAMPLE_TAPS: u32 = 8;
