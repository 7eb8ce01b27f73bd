//! # logokit
//!
//! One-shot raster transforms for logo assets:
//!
//! - [`remove_background`]: turn near-white pixels fully transparent.
//! - [`slice_logos`]: cut a composite sheet into a fixed grid of numbered tiles.
//! - [`crop_logo`]: drop the bottom of an image and trim it to its content.
//!
//! Each operation takes a config record whose `Default` points at the usual
//! files under `public/logos/`.
//!
//! ## Example
//!
//! ```no_run
//! use logokit::{remove_background, RecolorConfig};
//!
//! # fn main() -> logokit::Result<()> {
//! let report = remove_background(&RecolorConfig::default())?;
//! println!("cleared {} pixels", report.cleared);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod transform;

pub use error::{Error, Result};
pub use transform::{
    crop_logo, remove_background, slice_logos, CropConfig, RecolorConfig, SliceConfig,
};
