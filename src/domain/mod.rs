//! Domain types used throughout the pipelines.
//!
//! This module defines:
//!
//! - pipeline configurations (`SkyConfig`, `RotationConfig`)
//! - the validated galaxy model (`GalaxyModel`)
//! - sampled sky positions and converted catalog rows
//! - evaluated velocity profiles and the assembled rotation curve

pub mod types;

pub use types::*;
