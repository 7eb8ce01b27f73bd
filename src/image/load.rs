//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::error::{Error, Result};

/// Load an image from disk in its native colour type.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the path does not exist and
/// [`Error::Decode`] if the file cannot be decoded.
pub fn load<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img)
}

/// Load an image and promote it to 8-bit RGBA.
///
/// Images without an alpha channel get a fully opaque one.
///
/// # Errors
///
/// Same as [`load`].
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    load(path).map(|img| img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("missing.png")).unwrap_err();

        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.is_decode());
    }

    #[test]
    fn test_rgb_promoted_to_opaque_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        RgbImage::from_pixel(3, 2, Rgb([10, 20, 30])).save(&path).unwrap();

        let img = load_rgba(&path).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert!(img.pixels().all(|p| p.0 == [10, 20, 30, 255]));
    }
}
