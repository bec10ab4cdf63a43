//! Analytic circular-velocity models.
//!
//! Components are implemented as small, pure functions over a validated
//! `GalaxyModel` so the pipeline and tests can evaluate them independently.

pub mod velocity;

pub use velocity::*;
