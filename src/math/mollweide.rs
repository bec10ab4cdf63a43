//! Mollweide projection of sky coordinates.
//!
//! The all-sky figure plots every frame in the equal-area Mollweide
//! projection. For longitude `λ` in `[-180, 180]` degrees and latitude `φ`,
//! the forward map is:
//!
//! - solve `2θ + sin 2θ = π sin φ` for the auxiliary angle `θ`
//! - `x = (2√2/π) λ cos θ`
//! - `y = √2 sin θ`
//!
//! Numerical notes:
//! - The auxiliary equation is solved with Newton's method. The derivative
//!   `2 + 2 cos 2θ` vanishes at the poles, so `|sin φ|` at 1 short-circuits
//!   to `θ = ±π/2`.
//! - `x` lies in `[-2√2, 2√2]` and `y` in `[-√2, √2]`.
//!
//! Catalog longitudes arrive in `[0, 360)`; wrap them with
//! [`wrap_longitude_deg`] before projecting.

use std::f64::consts::{PI, SQRT_2};

/// Largest projected |x| (the equator endpoints at λ = ±180°).
pub const X_MAX: f64 = 2.0 * SQRT_2;

/// Largest projected |y| (the poles).
pub const Y_MAX: f64 = SQRT_2;

/// Convergence tolerance for the Newton solve of the auxiliary angle.
const THETA_TOL: f64 = 1e-12;

/// Hard cap on Newton iterations; mid-latitudes converge in well under 10.
const MAX_ITER: usize = 32;

/// Wrap a longitude in degrees to `[-180, 180)`.
pub fn wrap_longitude_deg(lon_deg: f64) -> f64 {
    (lon_deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Project `(lon_deg, lat_deg)` to Mollweide plane coordinates.
///
/// The longitude must already lie in `[-180, 180]`. Returns `(x, y)` with
/// `|x| <= X_MAX` and `|y| <= Y_MAX`.
pub fn project_deg(lon_deg: f64, lat_deg: f64) -> (f64, f64) {
    let lambda = lon_deg.to_radians();
    let theta = auxiliary_angle(lat_deg.to_radians());

    let x = (2.0 * SQRT_2 / PI) * lambda * theta.cos();
    let y = SQRT_2 * theta.sin();
    (x, y)
}

/// Solve `2θ + sin 2θ = π sin φ` by Newton iteration.
fn auxiliary_angle(phi: f64) -> f64 {
    let sin_phi = phi.sin();
    if sin_phi.abs() >= 1.0 - 1e-12 {
        return (PI / 2.0).copysign(sin_phi);
    }

    let rhs = PI * sin_phi;
    let mut theta = phi;
    for _ in 0..MAX_ITER {
        let f = 2.0 * theta + (2.0 * theta).sin() - rhs;
        let fp = 2.0 + 2.0 * (2.0 * theta).cos();
        let step = f / fp;
        theta -= step;
        if step.abs() < THETA_TOL {
            break;
        }
    }
    theta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        let (x, y) = project_deg(0.0, 0.0);
        assert_eq!(x, 0.0);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn equator_endpoints_hit_the_ellipse_edge() {
        let (x_east, y_east) = project_deg(180.0, 0.0);
        assert!((x_east - X_MAX).abs() < 1e-12, "λ=180° maps to +X_MAX, got {x_east}");
        assert_eq!(y_east, 0.0);

        let (x_west, _) = project_deg(-180.0, 0.0);
        assert!((x_west + X_MAX).abs() < 1e-12, "λ=-180° maps to -X_MAX, got {x_west}");
    }

    #[test]
    fn poles_collapse_to_a_point() {
        for &lon in &[-180.0, -45.0, 0.0, 90.0] {
            let (x_n, y_n) = project_deg(lon, 90.0);
            let (x_s, y_s) = project_deg(lon, -90.0);
            assert!(x_n.abs() < 1e-9, "north pole x at lon {lon}: {x_n}");
            assert!(x_s.abs() < 1e-9, "south pole x at lon {lon}: {x_s}");
            assert!((y_n - Y_MAX).abs() < 1e-12);
            assert!((y_s + Y_MAX).abs() < 1e-12);
        }
    }

    #[test]
    fn projection_is_antisymmetric() {
        let (x, y) = project_deg(60.0, 40.0);
        let (x_mirror, y_same) = project_deg(-60.0, 40.0);
        let (x_same, y_mirror) = project_deg(60.0, -40.0);
        assert!((x + x_mirror).abs() < 1e-12);
        assert!((y - y_same).abs() < 1e-12);
        assert!((x - x_same).abs() < 1e-12);
        assert!((y + y_mirror).abs() < 1e-12);
    }

    #[test]
    fn bounds_hold_on_a_grid() {
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lon = -180.0;
            while lon <= 180.0 {
                let (x, y) = project_deg(lon, lat);
                assert!(x.is_finite() && y.is_finite(), "({lon}, {lat}) projected to ({x}, {y})");
                assert!(x.abs() <= X_MAX + 1e-9, "x out of bounds at ({lon}, {lat}): {x}");
                assert!(y.abs() <= Y_MAX + 1e-9, "y out of bounds at ({lon}, {lat}): {y}");
                lon += 30.0;
            }
            lat += 15.0;
        }
    }

    #[test]
    fn wrap_covers_both_conventions() {
        assert_eq!(wrap_longitude_deg(0.0), 0.0);
        assert_eq!(wrap_longitude_deg(90.0), 90.0);
        assert_eq!(wrap_longitude_deg(270.0), -90.0);
        assert_eq!(wrap_longitude_deg(180.0), -180.0);
        assert_eq!(wrap_longitude_deg(-180.0), -180.0);
        assert!((wrap_longitude_deg(359.0) + 1.0).abs() < 1e-12);
    }
}
