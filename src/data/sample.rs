//! Seeded random sky-position generation.
//!
//! Positions are drawn uniformly in equatorial coordinates: right ascension
//! over `[0, 360)` degrees and declination over `[-90, 90]` degrees. The
//! same seed always reproduces the same catalog.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::{SkyConfig, SkyPoint};
use crate::error::AppError;

/// Extremes of a generated sample, for the run summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    pub n_points: usize,
    pub ra_min_deg: f64,
    pub ra_max_deg: f64,
    pub dec_min_deg: f64,
    pub dec_max_deg: f64,
}

/// A generated equatorial catalog plus its summary statistics.
#[derive(Debug, Clone)]
pub struct SkySample {
    pub points: Vec<SkyPoint>,
    pub stats: SampleStats,
}

/// Draw `config.count` uniform sky positions from a seeded generator.
pub fn generate_sky_sample(config: &SkyConfig) -> Result<SkySample, AppError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let points: Vec<SkyPoint> = (0..config.count)
        .map(|_| SkyPoint {
            ra_deg: rng.gen_range(0.0..360.0),
            dec_deg: rng.gen_range(-90.0..=90.0),
        })
        .collect();

    let stats = compute_stats(&points)
        .ok_or_else(|| AppError::input("Sample size must be at least 1."))?;

    Ok(SkySample { points, stats })
}

fn compute_stats(points: &[SkyPoint]) -> Option<SampleStats> {
    let first = points.first()?;
    let mut stats = SampleStats {
        n_points: points.len(),
        ra_min_deg: first.ra_deg,
        ra_max_deg: first.ra_deg,
        dec_min_deg: first.dec_deg,
        dec_max_deg: first.dec_deg,
    };
    for p in &points[1..] {
        stats.ra_min_deg = stats.ra_min_deg.min(p.ra_deg);
        stats.ra_max_deg = stats.ra_max_deg.max(p.ra_deg);
        stats.dec_min_deg = stats.dec_min_deg.min(p.dec_deg);
        stats.dec_max_deg = stats.dec_max_deg.max(p.dec_deg);
    }
    Some(stats)
}
