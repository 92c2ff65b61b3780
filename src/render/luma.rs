//! Luminance conversion.

use image::{DynamicImage, GrayImage};

/// Reduce an image to one 8-bit luminance value per pixel.
///
/// Uses the `image` crate's weighted luma conversion. Alpha is dropped.
pub fn to_luminance(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_white_and_black() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 255, 255]));
        img.put_pixel(1, 0, Rgb([0, 0, 0]));

        let luma = to_luminance(&DynamicImage::ImageRgb8(img));

        assert_eq!(luma.dimensions(), (2, 1));
        assert_eq!(luma.get_pixel(0, 0).0, [255]);
        assert_eq!(luma.get_pixel(1, 0).0, [0]);
    }

    #[test]
    fn test_green_brighter_than_blue() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([0, 255, 0]));
        img.put_pixel(1, 0, Rgb([0, 0, 255]));

        let luma = to_luminance(&DynamicImage::ImageRgb8(img));

        // Weighted luma, not a channel average
        assert!(luma.get_pixel(0, 0).0[0] > luma.get_pixel(1, 0).0[0]);
    }

    #[test]
    fn test_alpha_ignored() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 0]));

        let luma = to_luminance(&DynamicImage::ImageRgba8(img));

        assert_eq!(luma.get_pixel(0, 0).0, [255]);
    }
}
