//! Aspect-preserving resize.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::error::{AsciiError, Result};

/// Resampling filter for the resize. Catmull-Rom is the bicubic filter.
const FILTER: FilterType = FilterType::CatmullRom;

/// Compute the output dimensions for a target width.
///
/// Height is `round(height / width * target_width)`, at least one row.
pub fn target_dimensions(width: u32, height: u32, target_width: u32) -> Result<(u32, u32)> {
    if target_width == 0 {
        return Err(AsciiError::InvalidDimension {
            message: "target width must be positive".to_string(),
        });
    }

    if width == 0 || height == 0 {
        return Err(AsciiError::InvalidDimension {
            message: format!("source image is {}x{}", width, height),
        });
    }

    let aspect = height as f64 / width as f64;
    let target_height = (aspect * target_width as f64).round().max(1.0);

    if target_height > u32::MAX as f64 {
        return Err(AsciiError::InvalidDimension {
            message: format!(
                "target height {} for width {} exceeds {}",
                target_height,
                target_width,
                u32::MAX
            ),
        });
    }

    Ok((target_width, target_height as u32))
}

/// Resize an image to the target width, preserving its aspect ratio.
///
/// Runs on the original colour data; convert to luminance afterwards.
pub fn scale(image: &DynamicImage, target_width: u32) -> Result<DynamicImage> {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = target_dimensions(width, height, target_width)?;

    Ok(image.resize_exact(new_width, new_height, FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_target_dimensions_halves_height() {
        assert_eq!(target_dimensions(200, 100, 100).unwrap(), (100, 50));
    }

    #[test]
    fn test_target_dimensions_upscale() {
        assert_eq!(target_dimensions(10, 20, 100).unwrap(), (100, 200));
    }

    #[test]
    fn test_target_dimensions_rounds() {
        // 3 / 7 * 10 = 4.28...
        assert_eq!(target_dimensions(7, 3, 10).unwrap(), (10, 4));
        // 5 / 8 * 10 = 6.25, 7 / 8 * 10 = 8.75
        assert_eq!(target_dimensions(8, 5, 10).unwrap(), (10, 6));
        assert_eq!(target_dimensions(8, 7, 10).unwrap(), (10, 9));
    }

    #[test]
    fn test_target_dimensions_minimum_one_row() {
        assert_eq!(target_dimensions(1000, 1, 100).unwrap(), (100, 1));
    }

    #[test]
    fn test_target_dimensions_zero_target() {
        let err = target_dimensions(200, 100, 0).unwrap_err();
        assert!(matches!(err, AsciiError::InvalidDimension { .. }));
    }

    #[test]
    fn test_target_dimensions_degenerate_source() {
        assert!(matches!(
            target_dimensions(0, 100, 100),
            Err(AsciiError::InvalidDimension { .. })
        ));
        assert!(matches!(
            target_dimensions(100, 0, 100),
            Err(AsciiError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_target_dimensions_height_overflow() {
        // 50_000 / 1 * 100_000 = 5_000_000_000 rows
        let err = target_dimensions(1, 50_000, 100_000).unwrap_err();
        assert!(matches!(err, AsciiError::InvalidDimension { .. }));
        assert!(err.to_string().contains("5000000000"));
    }

    #[test]
    fn test_target_dimensions_largest_height() {
        assert_eq!(target_dimensions(1, u32::MAX, 1).unwrap(), (1, u32::MAX));
    }

    #[test]
    fn test_scale_produces_target_size() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(200, 100));
        let scaled = scale(&image, 100).unwrap();
        assert_eq!(scaled.dimensions(), (100, 50));
    }

    #[test]
    fn test_scale_does_not_touch_source() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(40, 20));
        let _ = scale(&image, 10).unwrap();
        assert_eq!(image.dimensions(), (40, 20));
    }
}
