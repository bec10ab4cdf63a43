//! Formatted terminal summaries.
//!
//! We keep formatting code in one place so:
//! - the math and pipeline code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use chrono::Local;

use crate::data::SampleStats;
use crate::domain::{GalaxyModel, RotationCurve, SkyConfig};

/// Format the sky-catalog run summary (seed + sample extremes).
pub fn format_sky_summary(config: &SkyConfig, stats: &SampleStats) -> String {
    let mut out = String::new();

    out.push_str("=== astro - Random Sky Catalog ===\n");
    out.push_str(&format!(
        "Run at: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Seed: {}\n", config.seed));
    out.push_str(&format!(
        "Points: n={} | RA=[{:.2}, {:.2}]deg | Dec=[{:.2}, {:.2}]deg\n",
        stats.n_points,
        stats.ra_min_deg,
        stats.ra_max_deg,
        stats.dec_min_deg,
        stats.dec_max_deg,
    ));

    out
}

/// Format the rotation-curve run summary (model, grid, velocities, and any
/// degraded components).
pub fn format_rotation_summary(model: &GalaxyModel, curve: &RotationCurve) -> String {
    let mut out = String::new();

    out.push_str("=== astro - Galaxy Rotation Curve ===\n");
    out.push_str(&format!(
        "Run at: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!(
        "Disk: M={:.3e} Msun | Rd={:.2} kpc\n",
        model.disk_mass_msun, model.disk_scale_length_kpc,
    ));
    out.push_str(&format!(
        "Halo: M={:.3e} Msun | Rs={:.2} kpc | c={:.1}\n",
        model.halo_mass_msun, model.halo_scale_radius_kpc, model.halo_concentration,
    ));

    let r_first = curve.radii_kpc.first().copied().unwrap_or(0.0);
    let r_last = curve.radii_kpc.last().copied().unwrap_or(0.0);
    out.push_str(&format!(
        "Grid: n={} | r=[{:.2}, {:.2}]kpc\n",
        curve.radii_kpc.len(),
        r_first,
        r_last,
    ));

    out.push_str("\nVelocities:\n");
    out.push_str(&format!("- peak total: {:.1} km/s\n", curve.peak_total_kms()));
    if let (Some(d), Some(h), Some(t)) = (
        curve.disk.kms.last(),
        curve.halo.kms.last(),
        curve.total.kms.last(),
    ) {
        out.push_str(&format!(
            "- at r={r_last:.1} kpc: disk={d:.1} | halo={h:.1} | total={t:.1} km/s\n"
        ));
    }
    for reason in [&curve.disk.degraded, &curve.halo.degraded]
        .into_iter()
        .flatten()
    {
        out.push_str(&format!("  (degraded) {reason}\n"));
    }

    out
}
