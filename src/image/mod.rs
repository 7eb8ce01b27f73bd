//! Image loading and saving utilities.

mod load;
mod save;

pub use load::{load, load_rgba};
pub use save::save_png;

/// Default directory holding the logo assets.
pub const LOGO_DIR: &str = "public/logos";
