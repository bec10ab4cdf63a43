//! Fixed rotation matrices between the equatorial, galactic, and ecliptic
//! frames.
//!
//! The equatorial→galactic rotation uses the ESA/Hipparcos derivation
//! (Hipparcos catalogue Vol. 1, Eq. 1.5.11), which is also the matrix SOFA
//! applies in `icrs2g`. The equatorial→ecliptic rotation tilts about the
//! x-axis by the IAU 2006 mean obliquity of the ecliptic at J2000.0.
//!
//! Both rotations are orthonormal, so the inverse conversions use the
//! transpose.

use nalgebra::{Matrix3, Vector3};

use crate::frames::spherical::{angles_deg, unit_vector};

/// IAU 2006 mean obliquity of the ecliptic at J2000.0, arcseconds.
const OBLIQUITY_J2000_ARCSEC: f64 = 84_381.406;

/// Rows are the galactic x, y, z axes expressed in equatorial coordinates.
fn galactic_rotation() -> Matrix3<f64> {
    Matrix3::new(
        -0.054_875_560_416_215_368,
        -0.873_437_090_234_885,
        -0.483_835_015_548_713_2,
        0.494_109_427_875_583_65,
        -0.444_829_629_960_011_2,
        0.746_982_244_497_218_8,
        -0.867_666_149_019_004_7,
        -0.198_076_373_431_201_52,
        0.455_983_776_175_066_9,
    )
}

/// Rotation about +x by the J2000 mean obliquity (equatorial → ecliptic).
fn ecliptic_rotation() -> Matrix3<f64> {
    let eps = (OBLIQUITY_J2000_ARCSEC / 3600.0).to_radians();
    let (sin_e, cos_e) = eps.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, cos_e, sin_e, //
        0.0, -sin_e, cos_e,
    )
}

fn rotate(m: &Matrix3<f64>, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
    let v: Vector3<f64> = m * unit_vector(lon_deg, lat_deg);
    angles_deg(&v)
}

/// Convert equatorial `(ra_deg, dec_deg)` to galactic `(l_deg, b_deg)`.
pub fn equatorial_to_galactic(ra_deg: f64, dec_deg: f64) -> (f64, f64) {
    rotate(&galactic_rotation(), ra_deg, dec_deg)
}

/// Convert galactic `(l_deg, b_deg)` back to equatorial `(ra_deg, dec_deg)`.
pub fn galactic_to_equatorial(l_deg: f64, b_deg: f64) -> (f64, f64) {
    rotate(&galactic_rotation().transpose(), l_deg, b_deg)
}

/// Convert equatorial `(ra_deg, dec_deg)` to ecliptic `(lon_deg, lat_deg)`.
pub fn equatorial_to_ecliptic(ra_deg: f64, dec_deg: f64) -> (f64, f64) {
    rotate(&ecliptic_rotation(), ra_deg, dec_deg)
}

/// Convert ecliptic `(lon_deg, lat_deg)` back to equatorial `(ra_deg, dec_deg)`.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64) -> (f64, f64) {
    rotate(&ecliptic_rotation().transpose(), lon_deg, lat_deg)
}
