use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::color::Rgb;
use crate::error::DetectResult;

/// Longest side, in pixels, an image is analyzed at
pub const MAX_DIMENSION: u32 = 400;

/// Pixels with alpha below this are treated as transparent
pub const MIN_ALPHA: u8 = 125;

/// Average brightness below this is a shadow artifact
pub const MIN_BRIGHTNESS: f32 = 10.0;

/// Average brightness above this is a highlight artifact
pub const MAX_BRIGHTNESS: f32 = 245.0;

/// Decode raw file bytes into an image
pub fn decode_image(bytes: &[u8]) -> DetectResult<DynamicImage> {
    let img = image::load_from_memory(bytes)?;
    debug!("Decoded image: {}x{}", img.width(), img.height());
    Ok(img)
}

/// Downscale so neither side exceeds [`MAX_DIMENSION`], keeping the aspect
/// ratio, and convert to RGBA.
pub fn prepare_pixels(img: &DynamicImage) -> RgbaImage {
    if img.width() > MAX_DIMENSION || img.height() > MAX_DIMENSION {
        let resized = img.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Triangle);
        debug!(
            "Downscaled {}x{} to {}x{}",
            img.width(),
            img.height(),
            resized.width(),
            resized.height()
        );
        resized.to_rgba8()
    } else {
        img.to_rgba8()
    }
}

/// Whether a sampled pixel is representative garment color
pub fn is_usable_pixel(rgba: [u8; 4]) -> bool {
    if rgba[3] < MIN_ALPHA {
        return false;
    }

    let brightness = (rgba[0] as f32 + rgba[1] as f32 + rgba[2] as f32) / 3.0;
    (MIN_BRIGHTNESS..=MAX_BRIGHTNESS).contains(&brightness)
}

/// Walk the pixel buffer linearly every `stride` pixels and keep the usable ones
pub fn sample_pixels(img: &RgbaImage, stride: usize) -> Vec<Rgb> {
    let pixels: Vec<Rgb> = img
        .as_raw()
        .chunks_exact(4)
        .step_by(stride.max(1))
        .filter(|px| is_usable_pixel([px[0], px[1], px[2], px[3]]))
        .map(|px| [px[0], px[1], px[2]])
        .collect();

    debug!(
        "Sampled {} usable pixels from {}x{} at stride {}",
        pixels.len(),
        img.width(),
        img.height(),
        stride
    );
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_is_usable_pixel() {
        assert!(is_usable_pixel([21, 96, 189, 255]));
        assert!(!is_usable_pixel([21, 96, 189, 124])); // Mostly transparent
        assert!(is_usable_pixel([21, 96, 189, 125]));
        assert!(!is_usable_pixel([0, 0, 0, 255])); // Shadow
        assert!(!is_usable_pixel([255, 255, 255, 255])); // Highlight
        assert!(is_usable_pixel([10, 10, 10, 255]));
        assert!(is_usable_pixel([245, 245, 245, 255]));
        assert!(!is_usable_pixel([246, 246, 246, 255]));
    }

    #[test]
    fn test_sample_stride() {
        let img = RgbaImage::from_pixel(10, 10, Rgba([200, 30, 30, 255]));
        assert_eq!(sample_pixels(&img, 1).len(), 100);
        assert_eq!(sample_pixels(&img, 10).len(), 10);
        assert_eq!(sample_pixels(&img, 3).len(), 34);
        assert_eq!(sample_pixels(&img, 0).len(), 100);
    }

    #[test]
    fn test_sample_filters_extremes() {
        let mut img = RgbaImage::from_pixel(4, 1, Rgba([200, 30, 30, 255]));
        img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(2, 0, Rgba([200, 30, 30, 0]));

        assert_eq!(sample_pixels(&img, 1), vec![[200, 30, 30], [200, 30, 30]]);
    }

    #[test]
    fn test_prepare_pixels_downscales_keeping_ratio() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(1600, 1200));
        let prepared = prepare_pixels(&img);
        assert_eq!(prepared.dimensions(), (400, 300));

        let img = DynamicImage::ImageRgba8(RgbaImage::new(300, 900));
        let prepared = prepare_pixels(&img);
        assert!(prepared.height() <= MAX_DIMENSION);
        assert!(prepared.width() <= 134);
    }

    #[test]
    fn test_prepare_pixels_keeps_small_images() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(320, 240));
        assert_eq!(prepare_pixels(&img).dimensions(), (320, 240));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_image(b"definitely not an image").is_err());
    }
}
