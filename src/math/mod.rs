//! Mathematical utilities: modified Bessel functions and the Mollweide projection.

pub mod bessel;
pub mod mollweide;

pub use bessel::*;
pub use mollweide::*;
