//! Near-white to transparent recolouring.

use std::path::PathBuf;

use image::{DynamicImage, Rgba, RgbaImage};

use crate::error::Result;
use crate::image::{load_rgba, save_png, LOGO_DIR};

/// Pixel written in place of every near-white pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Configuration for the transparent background transform.
#[derive(Debug, Clone)]
pub struct RecolorConfig {
    /// Source image.
    pub input: PathBuf,

    /// Destination PNG.
    pub output: PathBuf,

    /// A pixel is near-white when red, green and blue all exceed this value.
    pub threshold: u8,
}

impl Default for RecolorConfig {
    fn default() -> Self {
        let dir = PathBuf::from(LOGO_DIR);
        Self {
            input: dir.join("logo_main_user.png"),
            output: dir.join("logo_main_user_transparent.png"),
            threshold: 240,
        }
    }
}

/// Outcome of [`remove_background`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecolorReport {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Number of pixels replaced with [`TRANSPARENT`].
    pub cleared: u64,
}

/// Whether the colour channels of `pixel` are all strictly above `threshold`.
///
/// Alpha is ignored.
#[inline]
#[must_use]
pub fn is_near_white(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r > threshold && g > threshold && b > threshold
}

/// Replace every near-white pixel with [`TRANSPARENT`], passing all others
/// through unchanged.
#[must_use]
pub fn apply(input: &RgbaImage, threshold: u8) -> RgbaImage {
    let mut output = input.clone();
    for pixel in output.pixels_mut() {
        if is_near_white(pixel, threshold) {
            *pixel = TRANSPARENT;
        }
    }
    output
}

/// Load the configured image, make its near-white background transparent
/// and save the result as PNG.
///
/// # Errors
///
/// Returns a decode error if the input is missing or unreadable (nothing is
/// written in that case) and an encode error if the output cannot be saved.
pub fn remove_background(config: &RecolorConfig) -> Result<RecolorReport> {
    tracing::info!("Processing image: {}", config.input.display());

    let input = load_rgba(&config.input)?;
    let cleared = input
        .pixels()
        .filter(|p| is_near_white(p, config.threshold))
        .count() as u64;
    tracing::debug!(
        "{cleared} of {} pixels above threshold {}",
        u64::from(input.width()) * u64::from(input.height()),
        config.threshold
    );

    let output = apply(&input, config.threshold);
    let (width, height) = output.dimensions();
    save_png(&DynamicImage::ImageRgba8(output), &config.output)?;

    Ok(RecolorReport {
        output: config.output.clone(),
        width,
        height,
        cleared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: u8 = 240;

    #[test]
    fn test_white_and_black_pair() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));

        let out = apply(&img, THRESHOLD);

        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 0]));
        assert_eq!(out.get_pixel(1, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!is_near_white(&Rgba([240, 255, 255, 255]), THRESHOLD));
        assert!(!is_near_white(&Rgba([255, 240, 255, 255]), THRESHOLD));
        assert!(!is_near_white(&Rgba([255, 255, 240, 255]), THRESHOLD));
        assert!(is_near_white(&Rgba([241, 241, 241, 255]), THRESHOLD));
    }

    #[test]
    fn test_alpha_ignored_by_predicate() {
        assert!(is_near_white(&Rgba([250, 250, 250, 0]), THRESHOLD));
        assert!(is_near_white(&Rgba([250, 250, 250, 17]), THRESHOLD));
        assert!(!is_near_white(&Rgba([10, 250, 250, 255]), THRESHOLD));
    }

    #[test]
    fn test_every_pixel_classified() {
        // Sweep a band of values either side of the threshold.
        let mut img = RgbaImage::new(32, 32);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let r = 225 + (x % 30) as u8;
            let g = 225 + (y % 30) as u8;
            let b = 225 + ((x + y) % 30) as u8;
            *pixel = Rgba([r, g, b, (x * 8) as u8]);
        }

        let out = apply(&img, THRESHOLD);

        assert_eq!(out.dimensions(), img.dimensions());
        for (before, after) in img.pixels().zip(out.pixels()) {
            if before[0] > 240 && before[1] > 240 && before[2] > 240 {
                assert_eq!(after, &TRANSPARENT);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn test_fully_white_becomes_fully_transparent() {
        let img = RgbaImage::from_pixel(5, 3, Rgba([250, 252, 255, 255]));
        let out = apply(&img, THRESHOLD);

        assert!(out.pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn test_no_white_unchanged() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([12, 200, 240, 128]));
        assert_eq!(apply(&img, THRESHOLD), img);
    }

    #[test]
    fn test_idempotent() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([241, 250, 244, 90]));
        img.put_pixel(2, 0, Rgba([100, 100, 100, 255]));

        let once = apply(&img, THRESHOLD);
        assert_eq!(apply(&once, THRESHOLD), once);
    }

    #[test]
    fn test_remove_background_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("logo.png");
        let output = dir.path().join("logo_transparent.png");

        let mut img = image::RgbImage::from_pixel(4, 2, image::Rgb([255, 255, 255]));
        img.put_pixel(1, 1, image::Rgb([30, 60, 90]));
        img.save(&input).unwrap();

        let config = RecolorConfig {
            input,
            output: output.clone(),
            ..RecolorConfig::default()
        };
        let report = remove_background(&config).unwrap();

        assert_eq!(report.cleared, 7);
        assert_eq!((report.width, report.height), (4, 2));

        let saved = load_rgba(&output).unwrap();
        assert_eq!(saved.get_pixel(0, 0), &TRANSPARENT);
        assert_eq!(saved.get_pixel(1, 1), &Rgba([30, 60, 90, 255]));
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let config = RecolorConfig {
            input: dir.path().join("missing.png"),
            output: output.clone(),
            ..RecolorConfig::default()
        };

        let err = remove_background(&config).unwrap_err();
        assert!(err.is_decode());
        assert!(!output.exists());
    }
}
