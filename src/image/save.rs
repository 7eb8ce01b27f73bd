//! Image saving utilities.

use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::{Error, Result};

/// Save an image as PNG.
///
/// The format is always PNG regardless of the path's extension.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the image cannot be encoded or written.
pub fn save_png<P: AsRef<Path>>(img: &DynamicImage, path: P) -> Result<()> {
    let path = path.as_ref();

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_save_then_load_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0]));

        save_png(&DynamicImage::ImageRgba8(img.clone()), &path).unwrap();

        let loaded = crate::image::load_rgba(&path).unwrap();
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_unwritable_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.png");
        let img = DynamicImage::new_rgba8(2, 2);

        let err = save_png(&img, &path).unwrap_err();
        assert!(matches!(err, Error::Encode { .. }));
        assert!(!path.exists());
    }
}
