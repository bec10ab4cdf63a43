//! Rotation-curve figure: disk and halo dashed, total solid.

use std::path::Path;

use plotters::prelude::*;

use crate::domain::RotationCurve;
use crate::error::AppError;

use super::draw_error;

const FIGURE_SIZE: (u32, u32) = (1000, 700);

/// Render the sampled curves into one SVG chart with a legend.
pub fn render_rotation_figure(path: &Path, curve: &RotationCurve) -> Result<(), AppError> {
    let x_max = curve.radii_kpc.last().copied().unwrap_or(1.0);
    let y_max = (curve.peak_total_kms() * 1.1).max(1.0);

    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|err| draw_error(path, err))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Galaxy Rotation Curve", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(|err| draw_error(path, err))?;

    chart
        .configure_mesh()
        .x_desc("Radius (kpc)")
        .y_desc("Rotation Velocity (km/s)")
        .light_line_style(&BLACK.mix(0.08))
        .draw()
        .map_err(|err| draw_error(path, err))?;

    let disk = pair(&curve.radii_kpc, &curve.disk.kms);
    let halo = pair(&curve.radii_kpc, &curve.halo.kms);
    let total = pair(&curve.radii_kpc, &curve.total.kms);

    // Long dashes for the disk, short for the halo, solid for the total.
    chart
        .draw_series(DashedLineSeries::new(disk, 8, 6, BLUE.stroke_width(2)))
        .map_err(|err| draw_error(path, err))?
        .label("Disk")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(DashedLineSeries::new(halo, 2, 5, RED.stroke_width(2)))
        .map_err(|err| draw_error(path, err))?
        .label("Dark Matter Halo")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(total, BLACK.stroke_width(2)))
        .map_err(|err| draw_error(path, err))?
        .label("Total")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .border_style(&BLACK.mix(0.4))
        .background_style(&WHITE.mix(0.9))
        .draw()
        .map_err(|err| draw_error(path, err))?;

    root.present().map_err(|err| draw_error(path, err))
}

fn pair(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}
