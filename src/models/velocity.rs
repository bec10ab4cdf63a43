//! Disk, halo, and total circular-velocity evaluation.
//!
//! Components:
//!
//! - Freeman exponential disk, with `y = r / (2 Rd)`:
//!   `v² = 4π G M_d y² (I0(y)K0(y) − I1(y)K1(y)) / Rd`
//! - NFW halo, with `x = r / Rs` and concentration `c`:
//!   `v² = (G M_h / Rs) · (ln(1+x) − x/(1+x)) / (ln(1+c) − c/(1+c))`
//! - total: element-wise quadrature `sqrt(v_disk² + v_halo²)`
//!
//! Numerical notes:
//! - Both components vanish exactly at `r = 0`. The disk evaluation guards
//!   `y = 0`, where `K0`/`K1` diverge and the product would be NaN; the
//!   analytic limit of `y²(I0K0 − I1K1)` there is 0.
//! - A non-finite or negative `v²` anywhere on a grid degrades the whole
//!   component to zeros with a diagnostic (see `VelocityProfile`), so one
//!   bad sample never aborts the run or leaks NaN into artifacts.

use std::f64::consts::PI;

use crate::domain::{GalaxyModel, RADIUS_FLOOR_KPC, RotationCurve, VelocityProfile};
use crate::error::AppError;
use crate::math::bessel;

/// Squared disk circular velocity at one radius, (km/s)².
fn disk_velocity_squared(model: &GalaxyModel, radius_kpc: f64) -> f64 {
    let y = radius_kpc / (2.0 * model.disk_scale_length_kpc);
    if y == 0.0 {
        return 0.0;
    }

    let bracket = bessel::i0(y) * bessel::k0(y) - bessel::i1(y) * bessel::k1(y);
    4.0 * PI * model.grav_kpc_km2_s2_msun * model.disk_mass_msun * y * y * bracket
        / model.disk_scale_length_kpc
}

/// Squared halo circular velocity at one radius, (km/s)².
fn halo_velocity_squared(model: &GalaxyModel, radius_kpc: f64) -> f64 {
    let x = radius_kpc / model.halo_scale_radius_kpc;
    let c = model.halo_concentration;
    let shape = (1.0 + x).ln() - x / (1.0 + x);
    let mass_norm = (1.0 + c).ln() - c / (1.0 + c);

    model.grav_kpc_km2_s2_msun * model.halo_mass_msun / model.halo_scale_radius_kpc * shape
        / mass_norm
}

/// Evaluate one component over a grid with the degrade-to-zero policy.
fn evaluate_component(
    name: &str,
    radii_kpc: &[f64],
    squared: impl Fn(f64) -> f64,
) -> VelocityProfile {
    let mut kms = Vec::with_capacity(radii_kpc.len());
    for &r in radii_kpc {
        if !(r.is_finite() && r >= 0.0) {
            return VelocityProfile::degraded(
                radii_kpc.len(),
                format!("{name}: invalid radius {r} kpc"),
            );
        }
        let v2 = squared(r);
        if !v2.is_finite() || v2 < 0.0 {
            return VelocityProfile::degraded(
                radii_kpc.len(),
                format!("{name}: v² = {v2} (km/s)² at r = {r} kpc"),
            );
        }
        kms.push(v2.sqrt());
    }
    VelocityProfile::computed(kms)
}

/// Freeman exponential-disk circular velocity over a radius grid, km/s.
pub fn disk_velocity(model: &GalaxyModel, radii_kpc: &[f64]) -> VelocityProfile {
    evaluate_component("disk", radii_kpc, |r| disk_velocity_squared(model, r))
}

/// NFW halo circular velocity over a radius grid, km/s.
pub fn halo_velocity(model: &GalaxyModel, radii_kpc: &[f64]) -> VelocityProfile {
    evaluate_component("halo", radii_kpc, |r| halo_velocity_squared(model, r))
}

/// Total circular velocity: element-wise quadrature of disk and halo.
///
/// A degraded component contributes only zeros, so the total falls back to
/// the surviving component; diagnostics from both inputs are carried over.
pub fn total_velocity(disk: &VelocityProfile, halo: &VelocityProfile) -> VelocityProfile {
    let kms: Vec<f64> = disk
        .kms
        .iter()
        .zip(&halo.kms)
        .map(|(&d, &h)| (d * d + h * h).sqrt())
        .collect();

    let degraded = match (&disk.degraded, &halo.degraded) {
        (None, None) => None,
        (Some(d), None) => Some(d.clone()),
        (None, Some(h)) => Some(h.clone()),
        (Some(d), Some(h)) => Some(format!("{d}; {h}")),
    };

    VelocityProfile { kms, degraded }
}

/// Linear radius grid over `[RADIUS_FLOOR_KPC, r_max]`.
fn build_grid(r_max_kpc: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![RADIUS_FLOOR_KPC];
    }
    let span = r_max_kpc - RADIUS_FLOOR_KPC;
    (0..n)
        .map(|i| RADIUS_FLOOR_KPC + span * (i as f64) / ((n - 1) as f64))
        .collect()
}

/// Sample the disk, halo, and total velocity curves over a linear grid.
///
/// `r_max_kpc` must lie beyond the grid floor and `n_points` must be at
/// least 1; violations are input errors.
pub fn sample_rotation_curve(
    model: &GalaxyModel,
    r_max_kpc: f64,
    n_points: usize,
) -> Result<RotationCurve, AppError> {
    if n_points == 0 {
        return Err(AppError::input("Curve sampling needs at least one point."));
    }
    if !(r_max_kpc.is_finite() && r_max_kpc > RADIUS_FLOOR_KPC) {
        return Err(AppError::input(format!(
            "Maximum radius must be finite and > {RADIUS_FLOOR_KPC} kpc (got {r_max_kpc})."
        )));
    }

    let radii_kpc = build_grid(r_max_kpc, n_points);
    let disk = disk_velocity(model, &radii_kpc);
    let halo = halo_velocity(model, &radii_kpc);
    let total = total_velocity(&disk, &halo);

    Ok(RotationCurve {
        radii_kpc,
        disk,
        halo,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GalaxyModel;

    fn model() -> GalaxyModel {
        GalaxyModel::milky_way()
    }

    #[test]
    fn components_vanish_at_zero_radius() {
        let m = model();
        let disk = disk_velocity(&m, &[0.0]);
        let halo = halo_velocity(&m, &[0.0]);
        assert_eq!(disk.kms, vec![0.0], "disk velocity at r = 0 must be exactly 0");
        assert_eq!(halo.kms, vec![0.0], "halo velocity at r = 0 must be exactly 0");
        assert!(!disk.is_degraded());
        assert!(!halo.is_degraded());
    }

    #[test]
    fn default_model_reference_velocities() {
        // Disk at one scale length; halo inside and at the scale radius.
        let m = model();
        let disk = disk_velocity(&m, &[3.0]);
        let halo = halo_velocity(&m, &[3.0, 20.0]);

        assert!(disk.kms[0] > 0.0);
        assert!((disk.kms[0] - 353.8).abs() < 1.0, "disk at 3 kpc: got {}", disk.kms[0]);
        assert!((halo.kms[0] - 34.95).abs() < 0.2, "halo at 3 kpc: got {}", halo.kms[0]);
        assert!((halo.kms[1] - 159.05).abs() < 0.5, "halo at 20 kpc: got {}", halo.kms[1]);
        assert!(
            halo.kms[0] < halo.kms[1],
            "halo velocity must grow from 3 to 20 kpc"
        );
    }

    #[test]
    fn total_is_quadrature_and_dominates_components() {
        let m = model();
        let curve = sample_rotation_curve(&m, 30.0, 100).unwrap();
        for i in 0..curve.radii_kpc.len() {
            let d = curve.disk.kms[i];
            let h = curve.halo.kms[i];
            let t = curve.total.kms[i];
            assert!(
                t >= d.max(h) - 1e-9,
                "total must dominate both components at index {i}"
            );
            assert!(
                (t - (d * d + h * h).sqrt()).abs() < 1e-9,
                "total must be the quadrature sum at index {i}"
            );
        }
    }

    #[test]
    fn sampled_curve_is_aligned_and_finite() {
        let m = model();
        let curve = sample_rotation_curve(&m, 30.0, 100).unwrap();
        assert_eq!(curve.radii_kpc.len(), 100);
        assert_eq!(curve.disk.len(), 100);
        assert_eq!(curve.halo.len(), 100);
        assert_eq!(curve.total.len(), 100);
        assert!((curve.radii_kpc[0] - RADIUS_FLOOR_KPC).abs() < 1e-12);
        assert!((curve.radii_kpc[99] - 30.0).abs() < 1e-12);

        for v in curve
            .disk
            .kms
            .iter()
            .chain(&curve.halo.kms)
            .chain(&curve.total.kms)
        {
            assert!(v.is_finite() && *v >= 0.0, "velocity {v} out of range");
        }
    }

    #[test]
    fn halo_velocity_never_dips_with_radius() {
        let m = model();
        let curve = sample_rotation_curve(&m, 30.0, 100).unwrap();
        for w in curve.halo.kms.windows(2) {
            assert!(w[1] >= w[0] - 1e-9, "halo velocity dipped: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn invalid_radius_degrades_to_zeros() {
        let m = model();
        let disk = disk_velocity(&m, &[1.0, f64::INFINITY, 5.0]);
        assert!(disk.is_degraded());
        assert_eq!(disk.kms, vec![0.0; 3], "degraded profile keeps the grid length");

        let halo = halo_velocity(&m, &[f64::NAN]);
        assert!(halo.is_degraded());
        assert_eq!(halo.kms, vec![0.0]);

        let negative = halo_velocity(&m, &[-2.0]);
        assert!(negative.is_degraded());
    }

    #[test]
    fn degraded_total_keeps_surviving_component() {
        let disk = VelocityProfile::degraded(3, "disk: invalid radius inf kpc");
        let halo = VelocityProfile::computed(vec![10.0, 20.0, 30.0]);
        let total = total_velocity(&disk, &halo);
        assert!(total.is_degraded());
        assert_eq!(total.kms, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn sampling_rejects_bad_grid_settings() {
        let m = model();
        assert_eq!(sample_rotation_curve(&m, 30.0, 0).unwrap_err().exit_code(), 2);
        assert_eq!(sample_rotation_curve(&m, 0.05, 100).unwrap_err().exit_code(), 2);
        assert_eq!(sample_rotation_curve(&m, f64::NAN, 100).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn single_point_grid_sits_on_the_floor() {
        let m = model();
        let curve = sample_rotation_curve(&m, 30.0, 1).unwrap();
        assert_eq!(curve.radii_kpc, vec![RADIUS_FLOOR_KPC]);
        assert_eq!(curve.total.len(), 1);
    }
}
