//! Shared pipeline logic for the two batch workflows.
//!
//! Keeping this in one place avoids duplicating the core workflows:
//! - sky: generate -> convert -> CSV (initial, combined) -> Mollweide figure
//! - rotation: validate model -> sample curves -> figure -> optional CSV
//!
//! The CLI front-end then focuses on argument mapping and presentation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::{SkySample, generate_sky_sample};
use crate::domain::{GalaxyModel, RotationConfig, RotationCurve, SkyCatalog, SkyConfig};
use crate::error::AppError;
use crate::frames::convert_catalog;
use crate::models::sample_rotation_curve;

/// Fixed artifact locations, relative to the working directory.
pub const DATA_DIR: &str = "data";
pub const PLOTS_DIR: &str = "plots";
pub const INITIAL_CATALOG_CSV: &str = "data/initial_coordinates.csv";
pub const FULL_CATALOG_CSV: &str = "data/all_coordinates.csv";
pub const SKY_FIGURE_SVG: &str = "plots/coordinate_systems.svg";
pub const ROTATION_FIGURE_SVG: &str = "plots/rotation_curve.svg";

/// All computed outputs of one `astro sky` run.
#[derive(Debug, Clone)]
pub struct SkyRunOutput {
    pub sample: SkySample,
    pub catalog: SkyCatalog,
    pub figure: Option<PathBuf>,
}

/// All computed outputs of one `astro rotation` run.
#[derive(Debug, Clone)]
pub struct RotationRunOutput {
    pub model: GalaxyModel,
    pub curve: RotationCurve,
    pub figure: Option<PathBuf>,
    pub export: Option<PathBuf>,
}

/// Execute the full coordinate pipeline and return the computed outputs.
pub fn run_sky(config: &SkyConfig) -> Result<SkyRunOutput, AppError> {
    ensure_dir(Path::new(DATA_DIR))?;

    // 1) Generate the random equatorial sample and persist it as drawn.
    println!("Generating random coordinates...");
    let sample = generate_sky_sample(config)?;
    crate::io::write_initial_catalog(Path::new(INITIAL_CATALOG_CSV), &sample.points)?;

    // 2) Convert into galactic and ecliptic frames.
    println!("Converting coordinates between systems...");
    let catalog = convert_catalog(&sample.points);

    // 3) Persist the combined catalog.
    println!("Saving coordinates to CSV...");
    crate::io::write_full_catalog(Path::new(FULL_CATALOG_CSV), &catalog)?;

    // 4) Render the all-sky figure.
    let figure = if config.plot {
        println!("Creating Mollweide projection plots...");
        ensure_dir(Path::new(PLOTS_DIR))?;
        let path = PathBuf::from(SKY_FIGURE_SVG);
        crate::plot::render_sky_figure(&path, &catalog)?;
        Some(path)
    } else {
        None
    };

    Ok(SkyRunOutput {
        sample,
        catalog,
        figure,
    })
}

/// Execute the rotation-curve pipeline and return the computed outputs.
pub fn run_rotation(config: &RotationConfig) -> Result<RotationRunOutput, AppError> {
    // 1) Validate the galaxy model up front.
    let model = GalaxyModel::new(
        config.disk_mass_msun,
        config.disk_scale_length_kpc,
        config.halo_scale_radius_kpc,
        config.halo_concentration,
        config.halo_mass_msun,
    )?;

    // 2) Sample all three curves over the radius grid.
    println!("Sampling rotation curves...");
    let curve = sample_rotation_curve(&model, config.r_max_kpc, config.n_points)?;
    if !curve.peak_total_kms().is_finite() {
        return Err(AppError::numeric(
            "Non-finite velocities survived curve sampling.",
        ));
    }

    // 3) Render the figure.
    let figure = if config.plot {
        println!("Creating rotation curve plot...");
        ensure_dir(Path::new(PLOTS_DIR))?;
        let path = PathBuf::from(ROTATION_FIGURE_SVG);
        crate::plot::render_rotation_figure(&path, &curve)?;
        Some(path)
    } else {
        None
    };

    // 4) Optional CSV tabulation.
    let export = match &config.export {
        Some(path) => {
            println!("Saving rotation curve to CSV...");
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                ensure_dir(parent)?;
            }
            crate::io::write_curve_table(path, &curve)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(RotationRunOutput {
        model,
        curve,
        figure,
        export,
    })
}

fn ensure_dir(path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(path).map_err(|err| {
        AppError::io(format!(
            "Failed to create directory '{}': {err}",
            path.display()
        ))
    })
}
