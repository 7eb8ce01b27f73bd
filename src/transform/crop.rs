//! Bottom crop followed by a trim to the content bounding box.

use std::path::PathBuf;

use image::{DynamicImage, GenericImageView};

use crate::error::{Error, Result};
use crate::image::{load, save_png, LOGO_DIR};

/// Configuration for the bottom crop.
#[derive(Debug, Clone)]
pub struct CropConfig {
    /// Source image.
    pub input: PathBuf,

    /// Destination PNG.
    pub output: PathBuf,

    /// Fraction of the height kept from the top (0.0-1.0].
    pub keep_fraction: f64,
}

impl Default for CropConfig {
    fn default() -> Self {
        let dir = PathBuf::from(LOGO_DIR);
        Self {
            input: dir.join("logo_ref_3.png"),
            output: dir.join("logo_ref_3_cropped.png"),
            keep_fraction: 0.75,
        }
    }
}

impl CropConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `keep_fraction` is not in `(0.0, 1.0]`.
    pub fn validate(&self) -> Result<()> {
        if !(self.keep_fraction > 0.0 && self.keep_fraction <= 1.0) {
            return Err(Error::InvalidParameter {
                name: "keep_fraction".to_string(),
                reason: "must be greater than 0.0 and at most 1.0".to_string(),
            });
        }

        Ok(())
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Number of rows kept when cropping `height` to `fraction`, rounded down.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn keep_height(height: u32, fraction: f64) -> u32 {
    // Safe: fraction is validated to (0, 1], so the product fits in u32
    (f64::from(height) * fraction).floor() as u32
}

/// Minimal bounding box of the non-background pixels of `img`.
///
/// With an alpha channel, a pixel counts as content when its alpha is
/// non-zero. Without one, when any channel is non-zero. Returns `None` when
/// no pixel is content.
#[must_use]
pub fn content_bbox(img: &DynamicImage) -> Option<Rect> {
    let (width, height) = img.dimensions();

    if img.color().has_alpha() {
        let rgba = img.to_rgba16();
        bbox_where(width, height, |x, y| rgba.get_pixel(x, y)[3] != 0)
    } else {
        let rgb = img.to_rgb16();
        bbox_where(width, height, |x, y| {
            rgb.get_pixel(x, y).0.iter().any(|&c| c != 0)
        })
    }
}

fn bbox_where(width: u32, height: u32, is_content: impl Fn(u32, u32) -> bool) -> Option<Rect> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for y in 0..height {
        for x in 0..width {
            if !is_content(x, y) {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }

    bounds.map(|(x0, y0, x1, y1)| Rect {
        x: x0,
        y: y0,
        width: x1 - x0 + 1,
        height: y1 - y0 + 1,
    })
}

/// Keep the top `fraction` of `img`, then trim to its content bounding box.
///
/// When the kept region has no content, it is returned as-is.
///
/// # Errors
///
/// Returns an error if the kept region would be empty.
pub fn crop_and_trim(img: &DynamicImage, fraction: f64) -> Result<DynamicImage> {
    let (width, height) = img.dimensions();
    let new_height = keep_height(height, fraction);

    if width == 0 || new_height == 0 {
        return Err(Error::UnsupportedDimensions {
            width,
            height,
            reason: format!("keeping {fraction} of the height leaves no rows"),
        });
    }

    let cropped = img.crop_imm(0, 0, width, new_height);
    tracing::debug!("Cropped to {width}x{new_height}");

    match content_bbox(&cropped) {
        Some(bbox) => {
            tracing::debug!(
                "Content bounding box at ({}, {}) {}x{}",
                bbox.x,
                bbox.y,
                bbox.width,
                bbox.height
            );
            Ok(cropped.crop_imm(bbox.x, bbox.y, bbox.width, bbox.height))
        }
        None => Ok(cropped),
    }
}

/// Outcome of [`crop_logo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropReport {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Crop the bottom of the configured image, trim it and save it as PNG.
///
/// # Errors
///
/// Returns a decode error if the input is missing or unreadable (nothing is
/// written in that case) and an encode error if the output cannot be saved.
pub fn crop_logo(config: &CropConfig) -> Result<CropReport> {
    config.validate()?;

    tracing::info!("Processing image: {}", config.input.display());

    let img = load(&config.input)?;
    let trimmed = crop_and_trim(&img, config.keep_fraction)?;
    let (width, height) = trimmed.dimensions();

    tracing::info!(
        "Trimmed {}x{} to {width}x{height}",
        img.width(),
        img.height()
    );
    save_png(&trimmed, &config.output)?;

    Ok(CropReport {
        output: config.output.clone(),
        width,
        height,
    })
}
