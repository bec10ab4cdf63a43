//! SVG figure rendering via plotters.

use std::fmt;
use std::path::Path;

use crate::error::AppError;

pub mod rotation;
pub mod sky;

pub use rotation::*;
pub use sky::*;

pub(crate) fn draw_error(path: &Path, err: impl fmt::Display) -> AppError {
    AppError::io(format!("Failed to render '{}': {err}", path.display()))
}
