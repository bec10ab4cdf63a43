//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the selected pipeline (sky catalog or rotation curve)
//! - prints stage progress and the end-of-run summary

use clap::Parser;

use crate::cli::{Cli, Command, RotationArgs, SkyArgs};
use crate::domain::{RotationConfig, SkyConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `astro` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Sky(args) => handle_sky(args),
        Command::Rotation(args) => handle_rotation(args),
    }
}

fn handle_sky(args: SkyArgs) -> Result<(), AppError> {
    let config = sky_config_from_args(&args);
    let run = pipeline::run_sky(&config)?;

    println!(
        "{}",
        crate::report::format_sky_summary(&config, &run.sample.stats)
    );
    println!("Process completed successfully!");
    Ok(())
}

fn handle_rotation(args: RotationArgs) -> Result<(), AppError> {
    let config = rotation_config_from_args(&args);
    let run = pipeline::run_rotation(&config)?;

    println!(
        "{}",
        crate::report::format_rotation_summary(&run.model, &run.curve)
    );
    println!("Process completed successfully!");
    Ok(())
}

pub fn sky_config_from_args(args: &SkyArgs) -> SkyConfig {
    SkyConfig {
        count: args.count,
        seed: args.seed,
        plot: args.plot && !args.no_plot,
    }
}

pub fn rotation_config_from_args(args: &RotationArgs) -> RotationConfig {
    RotationConfig {
        disk_mass_msun: args.disk_mass,
        disk_scale_length_kpc: args.disk_scale_length,
        halo_scale_radius_kpc: args.halo_scale_radius,
        halo_concentration: args.halo_concentration,
        halo_mass_msun: args.halo_mass,
        r_max_kpc: args.r_max,
        n_points: args.points,
        export: args.export.clone(),
        plot: args.plot && !args.no_plot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_plot_flag_wins_over_plot_default() {
        let cli = Cli::try_parse_from(["astro", "sky", "--no-plot"]).unwrap();
        let Command::Sky(args) = cli.command else {
            panic!("expected the sky subcommand");
        };
        let config = sky_config_from_args(&args);
        assert!(!config.plot);
    }

    #[test]
    fn rotation_args_map_onto_config() {
        let cli = Cli::try_parse_from([
            "astro",
            "rotation",
            "--halo-mass",
            "2e12",
            "--export",
            "out/curve.csv",
        ])
        .unwrap();
        let Command::Rotation(args) = cli.command else {
            panic!("expected the rotation subcommand");
        };
        let config = rotation_config_from_args(&args);
        assert_eq!(config.halo_mass_msun, 2e12);
        assert_eq!(config.r_max_kpc, 30.0);
        assert_eq!(config.n_points, 100);
        assert_eq!(config.export.as_deref(), Some(std::path::Path::new("out/curve.csv")));
        assert!(config.plot);
    }
}
