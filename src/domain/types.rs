//! Core data types for the sky-catalog and rotation-curve pipelines.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::AppError;

/// Newton's gravitational constant in kpc (km/s)² / Msun.
pub const GRAV_KPC_KM2_S2_PER_MSUN: f64 = 4.300_917_270e-6;

/// Innermost radius of the sampled rotation-curve grid, kpc.
///
/// Sampling starts slightly off-center; both component velocities vanish at
/// r = 0 and the floor keeps the first grid point away from it.
pub const RADIUS_FLOOR_KPC: f64 = 0.1;

/// Configuration for the `sky` pipeline.
#[derive(Debug, Clone)]
pub struct SkyConfig {
    /// Number of random positions to draw.
    pub count: usize,
    /// PRNG seed; equal seeds reproduce the same catalog.
    pub seed: u64,
    /// Render the all-sky figure.
    pub plot: bool,
}

/// Configuration for the `rotation` pipeline.
#[derive(Debug, Clone)]
pub struct RotationConfig {
    pub disk_mass_msun: f64,
    pub disk_scale_length_kpc: f64,
    pub halo_scale_radius_kpc: f64,
    pub halo_concentration: f64,
    pub halo_mass_msun: f64,
    /// Outer edge of the sampled radius grid, kpc.
    pub r_max_kpc: f64,
    /// Number of grid samples.
    pub n_points: usize,
    /// Optional CSV tabulation of the sampled curves.
    pub export: Option<PathBuf>,
    /// Render the rotation-curve figure.
    pub plot: bool,
}

/// A two-component galaxy: exponential disk plus NFW dark-matter halo.
///
/// All fields are plain `f64` in one fixed unit system (kpc, km/s, solar
/// masses); the unit is part of each field name. Construction validates
/// every parameter, so a value of this type always describes a physical
/// model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyModel {
    /// Total disk mass, Msun.
    pub disk_mass_msun: f64,
    /// Exponential disk scale length, kpc.
    pub disk_scale_length_kpc: f64,
    /// NFW halo scale radius, kpc.
    pub halo_scale_radius_kpc: f64,
    /// NFW concentration parameter (dimensionless).
    pub halo_concentration: f64,
    /// Halo mass within the virial radius, Msun.
    pub halo_mass_msun: f64,
    /// Gravitational constant, kpc (km/s)² / Msun. Fixed at construction.
    pub grav_kpc_km2_s2_msun: f64,
}

impl GalaxyModel {
    /// Milky-Way-like defaults, shared with the CLI.
    pub const DEFAULT_DISK_MASS_MSUN: f64 = 5.0e10;
    pub const DEFAULT_DISK_SCALE_LENGTH_KPC: f64 = 3.0;
    pub const DEFAULT_HALO_SCALE_RADIUS_KPC: f64 = 20.0;
    pub const DEFAULT_HALO_CONCENTRATION: f64 = 12.0;
    pub const DEFAULT_HALO_MASS_MSUN: f64 = 1.0e12;

    /// Build a model, validating that every parameter is finite and > 0.
    pub fn new(
        disk_mass_msun: f64,
        disk_scale_length_kpc: f64,
        halo_scale_radius_kpc: f64,
        halo_concentration: f64,
        halo_mass_msun: f64,
    ) -> Result<Self, AppError> {
        check_positive("disk mass", disk_mass_msun)?;
        check_positive("disk scale length", disk_scale_length_kpc)?;
        check_positive("halo scale radius", halo_scale_radius_kpc)?;
        check_positive("halo concentration", halo_concentration)?;
        check_positive("halo mass", halo_mass_msun)?;

        Ok(Self {
            disk_mass_msun,
            disk_scale_length_kpc,
            halo_scale_radius_kpc,
            halo_concentration,
            halo_mass_msun,
            grav_kpc_km2_s2_msun: GRAV_KPC_KM2_S2_PER_MSUN,
        })
    }

    /// The default Milky-Way-like model.
    pub fn milky_way() -> Self {
        // The defaults are known-valid, so no fallible constructor here.
        Self {
            disk_mass_msun: Self::DEFAULT_DISK_MASS_MSUN,
            disk_scale_length_kpc: Self::DEFAULT_DISK_SCALE_LENGTH_KPC,
            halo_scale_radius_kpc: Self::DEFAULT_HALO_SCALE_RADIUS_KPC,
            halo_concentration: Self::DEFAULT_HALO_CONCENTRATION,
            halo_mass_msun: Self::DEFAULT_HALO_MASS_MSUN,
            grav_kpc_km2_s2_msun: GRAV_KPC_KM2_S2_PER_MSUN,
        }
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), AppError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(AppError::input(format!(
            "Galaxy model {name} must be finite and > 0 (got {value})."
        )));
    }
    Ok(())
}

/// One velocity component evaluated over a radius grid.
///
/// When evaluation hits a numerical domain violation the profile degrades
/// to zeros of the same length instead of aborting, and `degraded` records
/// the diagnostic. Zeroed output is therefore distinguishable from a
/// genuinely zero velocity field.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityProfile {
    /// Circular velocity per grid radius, km/s.
    pub kms: Vec<f64>,
    /// Diagnostic set when the component degraded to zeros.
    pub degraded: Option<String>,
}

impl VelocityProfile {
    /// A successfully computed profile.
    pub fn computed(kms: Vec<f64>) -> Self {
        Self { kms, degraded: None }
    }

    /// A degraded profile: zeros with a diagnostic.
    pub fn degraded(len: usize, reason: impl Into<String>) -> Self {
        Self {
            kms: vec![0.0; len],
            degraded: Some(reason.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    pub fn len(&self) -> usize {
        self.kms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kms.is_empty()
    }
}

/// A sampled rotation curve: one radius grid and three aligned velocity
/// profiles.
#[derive(Debug, Clone)]
pub struct RotationCurve {
    /// Sampled radii, kpc, ascending from the grid floor.
    pub radii_kpc: Vec<f64>,
    pub disk: VelocityProfile,
    pub halo: VelocityProfile,
    pub total: VelocityProfile,
}

impl RotationCurve {
    /// Largest total velocity on the grid (0 for an empty grid).
    pub fn peak_total_kms(&self) -> f64 {
        self.total.kms.iter().copied().fold(0.0, f64::max)
    }
}

/// A random equatorial position.
///
/// Serialized field names match the initial-catalog CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkyPoint {
    /// Right ascension, degrees in [0, 360).
    #[serde(rename = "RA")]
    pub ra_deg: f64,
    /// Declination, degrees in [-90, 90].
    #[serde(rename = "Dec")]
    pub dec_deg: f64,
}

/// One fully converted catalog row.
///
/// Serialized field names match the combined-catalog CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateRow {
    #[serde(rename = "RA_deg")]
    pub ra_deg: f64,
    #[serde(rename = "Dec_deg")]
    pub dec_deg: f64,
    #[serde(rename = "Galactic_l_deg")]
    pub gal_l_deg: f64,
    #[serde(rename = "Galactic_b_deg")]
    pub gal_b_deg: f64,
    #[serde(rename = "Ecliptic_lon_deg")]
    pub ecl_lon_deg: f64,
    #[serde(rename = "Ecliptic_lat_deg")]
    pub ecl_lat_deg: f64,
}

/// The converted catalog of one `sky` run.
#[derive(Debug, Clone)]
pub struct SkyCatalog {
    pub rows: Vec<CoordinateRow>,
}

impl SkyCatalog {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One row of the rotation-curve tabulation CSV.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurveRow {
    pub radius_kpc: f64,
    pub v_disk_kms: f64,
    pub v_halo_kms: f64,
    pub v_total_kms: f64,
}
