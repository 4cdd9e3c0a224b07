//! Unit conversion between pixels, millimetres and PDF points

/// Millimetres per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / MM_PER_INCH;

/// Reference resolution used to derive an item's physical size from its pixels
pub const DEFAULT_DPI: f32 = 254.0;

/// Convert a pixel length at `dpi` to millimetres. `dpi` must be positive.
#[inline]
pub fn pixels_to_mm(pixels: f32, dpi: f32) -> f32 {
    pixels * MM_PER_INCH / dpi
}

/// Convert millimetres to a pixel length at `dpi`. `dpi` must be positive.
#[inline]
pub fn mm_to_pixels(mm: f32, dpi: f32) -> f32 {
    mm * dpi / MM_PER_INCH
}

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_to_mm_at_default_dpi() {
        // 254 dpi = 10 pixels per millimetre
        assert!((pixels_to_mm(700.0, DEFAULT_DPI) - 70.0).abs() < 1e-3);
        assert!((pixels_to_mm(300.0, 300.0) - 25.4).abs() < 1e-3);
    }

    #[test]
    fn test_mm_to_pixels_inverts() {
        let px = mm_to_pixels(pixels_to_mm(1234.0, 96.0), 96.0);
        assert!((px - 1234.0).abs() < 1e-2);
    }

    #[test]
    fn test_points() {
        assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-3);
        assert!((pt_to_mm(72.0) - 25.4).abs() < 1e-3);
    }
}
