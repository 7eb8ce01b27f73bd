//! Raster transforms applied to logo assets.

pub mod crop;
pub mod recolor;
pub mod slice;

pub use crop::{crop_logo, CropConfig, CropReport};
pub use recolor::{remove_background, RecolorConfig, RecolorReport};
pub use slice::{slice_logos, SliceConfig, SliceReport};
