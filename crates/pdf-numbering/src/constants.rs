//! Shared constants for layout and composition
//!
//! This module centralizes the fixed numbers used by the optimizer, the
//! composer and the crop mark generator.

// =============================================================================
// Layout Optimizer
// =============================================================================

/// Largest row and column count the optimizer tries.
///
/// The search is exhaustive over `1..=MAX_GRID_DIMENSION` on both axes, so at
/// most 100 items fit on a page regardless of how small the item is.
pub const MAX_GRID_DIMENSION: usize = 10;

// =============================================================================
// Labels
// =============================================================================

/// Item edge length (mm) at which the configured font size is used unscaled
pub const REFERENCE_ITEM_SIZE_MM: f32 = 100.0;

/// Smallest label font size after scaling (points)
pub const MIN_LABEL_FONT_PT: f32 = 8.0;

/// Screen points to print points (configured sizes are in 96 dpi CSS pixels)
pub const SCREEN_TO_PRINT_RATIO: f32 = 72.0 / 96.0;

/// Approximate advance of glyphs without metrics, as a fraction of the em
pub const FALLBACK_CHAR_WIDTH_RATIO: f32 = 0.5;

// =============================================================================
// Crop Marks
// =============================================================================

/// Gap between a crop mark and the grid edge (mm)
pub const CROP_MARK_OFFSET_MM: f32 = 2.0;

/// Length of every crop mark (mm)
pub const CROP_MARK_LENGTH_MM: f32 = 5.0;

/// Stroke width of crop marks (mm)
pub const CROP_MARK_WIDTH_MM: f32 = 0.3;

// =============================================================================
// Output
// =============================================================================

/// JPEG quality used when embedding the source image
pub const EMBEDDED_JPEG_QUALITY: u8 = 90;

/// Prefix of generated file names
pub const OUTPUT_FILE_PREFIX: &str = "numeracao";
