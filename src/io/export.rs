//! CSV writers for catalogs and rotation-curve tables.
//!
//! Headers come from the serde field names on the row types, so the files
//! keep stable, machine-readable columns. Any filesystem failure maps to
//! an I/O error naming the offending path.

use std::path::Path;

use serde::Serialize;

use crate::domain::{CurveRow, RotationCurve, SkyCatalog, SkyPoint};
use crate::error::AppError;

/// Write the raw equatorial sample (`RA,Dec`).
pub fn write_initial_catalog(path: &Path, points: &[SkyPoint]) -> Result<(), AppError> {
    write_rows(path, points.iter().copied())
}

/// Write the fully converted catalog with all three frames.
pub fn write_full_catalog(path: &Path, catalog: &SkyCatalog) -> Result<(), AppError> {
    write_rows(path, catalog.rows.iter().copied())
}

/// Write the sampled rotation curve, one row per grid radius.
pub fn write_curve_table(path: &Path, curve: &RotationCurve) -> Result<(), AppError> {
    let rows = curve
        .radii_kpc
        .iter()
        .zip(&curve.disk.kms)
        .zip(&curve.halo.kms)
        .zip(&curve.total.kms)
        .map(|(((&radius_kpc, &v_disk_kms), &v_halo_kms), &v_total_kms)| CurveRow {
            radius_kpc,
            v_disk_kms,
            v_halo_kms,
            v_total_kms,
        });
    write_rows(path, rows)
}

fn write_rows<T, I>(path: &Path, rows: I) -> Result<(), AppError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = csv::Writer::from_path(path)
        .map_err(|err| AppError::io(format!("Failed to create '{}': {err}", path.display())))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|err| AppError::io(format!("Failed to write '{}': {err}", path.display())))?;
    }
    writer
        .flush()
        .map_err(|err| AppError::io(format!("Failed to flush '{}': {err}", path.display())))
}
