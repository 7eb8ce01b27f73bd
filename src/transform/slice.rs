//! Fixed-grid slicing of a composite image.

use std::path::PathBuf;

use image::{DynamicImage, GenericImageView};

use crate::error::{Error, Result};
use crate::image::{load, save_png, LOGO_DIR};

/// Configuration for the grid slicer.
#[derive(Debug, Clone)]
pub struct SliceConfig {
    /// Composite source image.
    pub input: PathBuf,

    /// Directory receiving the numbered slices.
    pub output_dir: PathBuf,

    /// File name prefix; slice `n` is written to `{prefix}{n}.png`.
    pub file_prefix: String,

    /// Number of grid columns.
    pub cols: u32,

    /// Number of grid rows.
    pub rows: u32,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(LOGO_DIR).join("original.png"),
            output_dir: PathBuf::from(LOGO_DIR),
            file_prefix: "logo_ref_".to_string(),
            cols: 3,
            rows: 3,
        }
    }
}

impl SliceConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no columns or no rows.
    pub fn validate(&self) -> Result<()> {
        if self.cols == 0 {
            return Err(Error::InvalidParameter {
                name: "cols".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.rows == 0 {
            return Err(Error::InvalidParameter {
                name: "rows".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Output path of the slice numbered `index` (1-based).
    #[must_use]
    pub fn output_path(&self, index: u32) -> PathBuf {
        self.output_dir.join(format!("{}{index}.png", self.file_prefix))
    }
}

/// One grid cell in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// 1-based position in row-major order.
    pub index: u32,
    pub row: u32,
    pub col: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the cells of a `cols` x `rows` grid over a `width` x `height`
/// image, in row-major order.
///
/// Cell sizes come from integer division, so any remainder columns on the
/// right and rows at the bottom belong to no cell.
#[must_use]
pub fn grid_cells(width: u32, height: u32, cols: u32, rows: u32) -> Vec<Cell> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let step_x = width / cols;
    let step_y = height / rows;

    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .map(|(row, col)| Cell {
            index: row * cols + col + 1,
            row,
            col,
            x: col * step_x,
            y: row * step_y,
            width: step_x,
            height: step_y,
        })
        .collect()
}

/// Cut `img` into `cols` x `rows` equally sized sub-images, row-major.
///
/// # Errors
///
/// Returns an error if the grid is empty or the image is smaller than the
/// grid in either direction.
pub fn slice(img: &DynamicImage, cols: u32, rows: u32) -> Result<Vec<DynamicImage>> {
    let (width, height) = img.dimensions();

    if cols == 0 || rows == 0 {
        return Err(Error::InvalidParameter {
            name: "grid".to_string(),
            reason: format!("{cols}x{rows} grid has no cells"),
        });
    }

    if width < cols || height < rows {
        return Err(Error::UnsupportedDimensions {
            width,
            height,
            reason: format!("too small for a {cols}x{rows} grid"),
        });
    }

    Ok(grid_cells(width, height, cols, rows)
        .into_iter()
        .map(|cell| img.crop_imm(cell.x, cell.y, cell.width, cell.height))
        .collect())
}

/// Outcome of [`slice_logos`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceReport {
    pub source_width: u32,
    pub source_height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    /// Written files, in slice order.
    pub outputs: Vec<PathBuf>,
}

/// Slice the configured composite image and save each cell as a numbered
/// PNG.
///
/// # Errors
///
/// Returns a decode error if the input is missing or unreadable (nothing is
/// written in that case), a dimension error if the image is smaller than
/// the grid, and an encode error if a slice cannot be saved.
pub fn slice_logos(config: &SliceConfig) -> Result<SliceReport> {
    config.validate()?;

    let img = load(&config.input)?;
    let (width, height) = img.dimensions();

    tracing::info!("Image size: {width}x{height}");
    tracing::info!("Slicing into {}x{} grid...", config.cols, config.rows);

    let tiles = slice(&img, config.cols, config.rows)?;
    let cells = grid_cells(width, height, config.cols, config.rows);

    let mut outputs = Vec::with_capacity(tiles.len());
    for (cell, tile) in cells.iter().zip(&tiles) {
        tracing::debug!(
            "Cell {} (row {}, col {}) at ({}, {}) {}x{}",
            cell.index,
            cell.row,
            cell.col,
            cell.x,
            cell.y,
            cell.width,
            cell.height
        );
        let path = config.output_path(cell.index);
        save_png(tile, &path)?;
        outputs.push(path);
    }

    Ok(SliceReport {
        source_width: width,
        source_height: height,
        cell_width: width / config.cols,
        cell_height: height / config.rows,
        outputs,
    })
}
