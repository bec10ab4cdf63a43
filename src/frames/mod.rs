//! Celestial reference-frame conversions.
//!
//! All conversions are fixed-epoch rotations of unit direction vectors:
//!
//! - equatorial (ICRS, J2000) ↔ galactic, via the Hipparcos-era rotation
//!   matrix (the same values SOFA applies in `icrs2g`)
//! - equatorial ↔ ecliptic, via a tilt about the x-axis by the IAU 2006
//!   mean obliquity at J2000
//!
//! Positions are directions only; no parallax, proper motion, or epoch
//! propagation is modeled.

pub mod catalog;
pub mod rotation;
pub mod spherical;

pub use catalog::*;
pub use rotation::*;
pub use spherical::*;
