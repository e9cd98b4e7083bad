//! Garment photo loading and flat color averaging
//!
//! This module is the sampling collaborator in front of the scoring core: it
//! decodes one photo and reduces it to a single averaged RGB sample.
//!
//! ## Supported Formats
//!
//! Via the `image` crate: JPEG, PNG, GIF (first frame), WebP, TIFF, BMP, ICO,
//! TGA and PNM.
//!
//! ## Sampling
//!
//! The photo is stretched onto a square grid (100×100 by default) and every
//! grid pixel contributes equally to the mean. Fully transparent pixels count
//! as black, matching what a cleared canvas reports for them.

use image::{DynamicImage, ImageReader};
use std::path::Path;
use tracing::{debug, instrument};

use crate::color::RgbSample;
use crate::config::SamplingConfig;
use crate::error::{HarmonyError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
    /// ICO image
    Ico,
    /// TGA image
    Tga,
    /// PNM image (PBM, PGM, PPM)
    Pnm,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            "ico" => Some(ImageFormat::Ico),
            "tga" => Some(ImageFormat::Tga),
            "pbm" | "pgm" | "ppm" | "pnm" => Some(ImageFormat::Pnm),
            _ => None,
        }
    }
}

/// Load a garment photo from disk
///
/// # Errors
///
/// Returns `UnsupportedFormat` for unknown extensions and `ImageLoadError`
/// if the file cannot be opened or decoded.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let format = ImageFormat::from_extension(path).ok_or_else(|| {
        HarmonyError::UnsupportedFormat {
            path: path.display().to_string(),
        }
    })?;

    let reader = ImageReader::open(path).map_err(|e| {
        HarmonyError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let img = reader.decode().map_err(|e| {
        HarmonyError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    debug!(?format, width = img.width(), height = img.height(), "decoded image");
    Ok(img)
}

/// Average an image down to one RGB sample
///
/// # Errors
///
/// Returns `ProcessingError` for images with no pixels and
/// `InvalidParameter` if the sampling grid is out of range.
pub fn average_color(image: &DynamicImage, config: &SamplingConfig) -> Result<RgbSample> {
    config.validate()?;

    if image.width() == 0 || image.height() == 0 {
        return Err(HarmonyError::ProcessingError(
            "Image has no pixels to sample".to_string(),
        ));
    }

    let size = config.grid_size;
    let grid = image
        .resize_exact(size, size, config.filter.into())
        .to_rgba8();

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    let mut count = 0u64;
    for pixel in grid.pixels() {
        let [pr, pg, pb, alpha] = pixel.0;
        if alpha > 0 {
            r += pr as u64;
            g += pg as u64;
            b += pb as u64;
        }
        count += 1;
    }

    let count = count as f64;
    Ok(RgbSample::new(
        r as f64 / count,
        g as f64 / count,
        b as f64 / count,
    ))
}

/// Load a photo and average it in one step
#[instrument(skip_all, fields(path = %path.display()))]
pub fn sample_file(path: &Path, config: &SamplingConfig) -> Result<RgbSample> {
    let img = load_image(path)?;
    let sample = average_color(&img, config)?;
    debug!(r = sample.r, g = sample.g, b = sample.b, "sampled average color");
    Ok(sample)
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &[
        "jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp", "ico", "tga", "pbm", "pgm",
        "ppm", "pnm",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImageFormat::from_extension(Path::new("shirt.jpg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("shirt.JPEG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("pants.png")),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("shoes.webp")),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::from_extension(Path::new("shoes.heic")), None);
        assert_eq!(ImageFormat::from_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_supported_extensions() {
        for ext in supported_extensions() {
            let path = format!("garment.{}", ext);
            assert!(ImageFormat::from_extension(Path::new(&path)).is_some(), "{}", ext);
        }
        assert!(!supported_extensions().contains(&"heic"));
    }

    #[test]
    fn test_uniform_image_averages_to_itself() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(37, 53, Rgb([200, 40, 90])));
        let sample = average_color(&img, &SamplingConfig::default()).unwrap();

        assert!((sample.r - 200.0).abs() < 1.0);
        assert!((sample.g - 40.0).abs() < 1.0);
        assert!((sample.b - 90.0).abs() < 1.0);
    }

    #[test]
    fn test_split_image_averages_halves() {
        let img = RgbImage::from_fn(100, 100, |x, _| {
            if x < 50 {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 0, 255])
            }
        });
        let sample = average_color(&DynamicImage::ImageRgb8(img), &SamplingConfig::default())
            .unwrap();

        assert!((sample.r - 127.5).abs() < 1.0);
        assert!(sample.g.abs() < 0.5);
        assert!((sample.b - 127.5).abs() < 1.0);
    }

    #[test]
    fn test_transparent_pixels_count_as_black() {
        let img = RgbaImage::from_fn(100, 100, |_, y| {
            if y < 50 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([255, 255, 255, 0])
            }
        });
        let config = SamplingConfig {
            filter: crate::config::ResizeFilter::Nearest,
            ..SamplingConfig::default()
        };
        let sample = average_color(&DynamicImage::ImageRgba8(img), &config).unwrap();

        assert!((sample.r - 127.5).abs() < 0.5);
        assert!((sample.g - 127.5).abs() < 0.5);
        assert!((sample.b - 127.5).abs() < 0.5);
    }

    #[test]
    fn test_empty_image_rejected() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        let err = average_color(&img, &SamplingConfig::default()).unwrap_err();
        assert!(matches!(err, HarmonyError::ProcessingError(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_image(Path::new("outfit.docx")).unwrap_err();
        assert!(matches!(err, HarmonyError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = sample_file(Path::new("nonexistent_shirt.png"), &SamplingConfig::default())
            .unwrap_err();
        assert!(matches!(err, HarmonyError::ImageLoadError { .. }));
    }
}
