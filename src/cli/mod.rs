//! Command-line parsing for the sky-catalog and rotation-curve pipelines.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the math and rendering code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::GalaxyModel;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "astro", version, about = "Random sky catalogs and galaxy rotation curves")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a random sky catalog, convert it across frames, and plot it.
    Sky(SkyArgs),
    /// Sample a disk plus halo rotation curve, tabulate it, and plot it.
    Rotation(RotationArgs),
}

/// Options for the sky-catalog pipeline.
#[derive(Debug, Parser, Clone)]
pub struct SkyArgs {
    /// Number of random sky positions to generate.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: usize,

    /// Random seed for position generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Render the Mollweide figure (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Skip figure rendering.
    #[arg(long)]
    pub no_plot: bool,
}

/// Options for the rotation-curve pipeline.
#[derive(Debug, Parser, Clone)]
pub struct RotationArgs {
    /// Disk mass (solar masses).
    #[arg(long, default_value_t = GalaxyModel::DEFAULT_DISK_MASS_MSUN)]
    pub disk_mass: f64,

    /// Disk scale length (kpc).
    #[arg(long, default_value_t = GalaxyModel::DEFAULT_DISK_SCALE_LENGTH_KPC)]
    pub disk_scale_length: f64,

    /// Halo scale radius (kpc).
    #[arg(long, default_value_t = GalaxyModel::DEFAULT_HALO_SCALE_RADIUS_KPC)]
    pub halo_scale_radius: f64,

    /// Halo concentration parameter.
    #[arg(long, default_value_t = GalaxyModel::DEFAULT_HALO_CONCENTRATION)]
    pub halo_concentration: f64,

    /// Halo mass (solar masses).
    #[arg(long, default_value_t = GalaxyModel::DEFAULT_HALO_MASS_MSUN)]
    pub halo_mass: f64,

    /// Maximum sampled radius (kpc).
    #[arg(long, default_value_t = 30.0)]
    pub r_max: f64,

    /// Number of radius samples.
    #[arg(long, default_value_t = 100)]
    pub points: usize,

    /// Export the sampled curve to a CSV at this path.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Render the figure (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Skip figure rendering.
    #[arg(long)]
    pub no_plot: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_defaults_parse() {
        let cli = Cli::try_parse_from(["astro", "sky"]).unwrap();
        match cli.command {
            Command::Sky(args) => {
                assert_eq!(args.count, 100);
                assert_eq!(args.seed, 42);
                assert!(args.plot);
                assert!(!args.no_plot);
            }
            _ => panic!("expected the sky subcommand"),
        }
    }

    #[test]
    fn rotation_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "astro",
            "rotation",
            "--disk-mass",
            "6e10",
            "--r-max",
            "25",
            "--points",
            "50",
            "--no-plot",
        ])
        .unwrap();
        match cli.command {
            Command::Rotation(args) => {
                assert_eq!(args.disk_mass, 6e10);
                assert_eq!(args.disk_scale_length, GalaxyModel::DEFAULT_DISK_SCALE_LENGTH_KPC);
                assert_eq!(args.r_max, 25.0);
                assert_eq!(args.points, 50);
                assert!(args.no_plot);
            }
            _ => panic!("expected the rotation subcommand"),
        }
    }
}
