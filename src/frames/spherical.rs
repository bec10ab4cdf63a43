//! Unit-vector ↔ spherical angle conversion.

use std::f64::consts::PI;

use nalgebra::Vector3;

/// Convert `(lon_deg, lat_deg)` to a unit direction vector.
///
/// Longitude is measured in the x-y plane from +x toward +y; latitude is
/// elevation above the x-y plane.
pub fn unit_vector(lon_deg: f64, lat_deg: f64) -> Vector3<f64> {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let cos_lat = lat.cos();
    Vector3::new(cos_lat * lon.cos(), cos_lat * lon.sin(), lat.sin())
}

/// Convert a direction vector to `(lon_deg, lat_deg)`.
///
/// Longitude is returned in `[0, 360)`, latitude in `[-90, 90]`. The zero
/// vector maps to `(0, 0)`.
pub fn angles_deg(v: &Vector3<f64>) -> (f64, f64) {
    let r = v.norm();
    if r == 0.0 {
        return (0.0, 0.0);
    }

    let lon = {
        let raw = v.y.atan2(v.x);
        if raw < 0.0 { raw + 2.0 * PI } else { raw }
    };
    let lat = (v.z / r).asin();

    (lon.to_degrees(), lat.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn along_x_axis() {
        let (lon, lat) = angles_deg(&Vector3::new(1.0, 0.0, 0.0));
        assert!(lon.abs() < EPS);
        assert!(lat.abs() < EPS);
    }

    #[test]
    fn along_y_axis() {
        let (lon, lat) = angles_deg(&Vector3::new(0.0, 1.0, 0.0));
        assert!((lon - 90.0).abs() < EPS);
        assert!(lat.abs() < EPS);
    }

    #[test]
    fn along_z_axis() {
        let (_, lat) = angles_deg(&Vector3::new(0.0, 0.0, 1.0));
        assert!((lat - 90.0).abs() < EPS);
    }

    #[test]
    fn longitude_always_in_range() {
        // Third quadrant direction → lon in [180, 270).
        let (lon, _) = angles_deg(&Vector3::new(-1.0, -1.0, 0.0));
        assert!((0.0..360.0).contains(&lon));
        assert!((lon - 225.0).abs() < EPS);
    }

    #[test]
    fn roundtrip() {
        for &(lon, lat) in &[(12.5, -33.0), (200.0, 71.25), (359.0, -89.0), (90.0, 0.0)] {
            let v = unit_vector(lon, lat);
            assert!((v.norm() - 1.0).abs() < EPS, "unit vector norm at ({lon}, {lat})");
            let (lon_back, lat_back) = angles_deg(&v);
            assert!((lon - lon_back).abs() < 1e-9, "lon {lon} -> {lon_back}");
            assert!((lat - lat_back).abs() < 1e-9, "lat {lat} -> {lat_back}");
        }
    }

    #[test]
    fn zero_vector() {
        let (lon, lat) = angles_deg(&Vector3::zeros());
        assert_eq!(lon, 0.0);
        assert_eq!(lat, 0.0);
    }
}
