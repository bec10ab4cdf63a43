//! Three-panel Mollweide sky figure.
//!
//! One panel per frame (equatorial, galactic, ecliptic), stacked
//! vertically. Each panel shows the projected catalog as a scatter over a
//! light graticule: the outer ellipse, meridians every 60 degrees, and
//! parallels every 30 degrees.

use std::f64::consts::PI;
use std::path::Path;

use plotters::prelude::*;

use crate::domain::{CoordinateRow, SkyCatalog};
use crate::error::AppError;
use crate::math::mollweide;

use super::draw_error;

const FIGURE_SIZE: (u32, u32) = (900, 1200);
const BOUNDARY_SEGMENTS: usize = 120;
const MERIDIANS_DEG: [f64; 5] = [-120.0, -60.0, 0.0, 60.0, 120.0];
const PARALLELS_DEG: [f64; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];
// Data-range padding so boundary strokes and edge markers are not clipped.
const PAD: f64 = 0.06;

/// Render the converted catalog as a three-panel Mollweide SVG.
pub fn render_sky_figure(path: &Path, catalog: &SkyCatalog) -> Result<(), AppError> {
    let panels = [
        (
            "Equatorial Coordinates (RA/Dec)",
            "Equatorial",
            BLUE,
            project_all(catalog, |r| (r.ra_deg, r.dec_deg)),
        ),
        (
            "Galactic Coordinates (l/b)",
            "Galactic",
            RED,
            project_all(catalog, |r| (r.gal_l_deg, r.gal_b_deg)),
        ),
        (
            "Ecliptic Coordinates (lon/lat)",
            "Ecliptic",
            RGBColor(0, 128, 0),
            project_all(catalog, |r| (r.ecl_lon_deg, r.ecl_lat_deg)),
        ),
    ];

    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|err| draw_error(path, err))?;

    let areas = root.split_evenly((3, 1));
    for (area, (title, label, color, points)) in areas.iter().zip(panels) {
        let mut chart = ChartBuilder::on(area)
            .caption(title, ("sans-serif", 22))
            .margin(10)
            .build_cartesian_2d(
                -(mollweide::X_MAX + PAD)..(mollweide::X_MAX + PAD),
                -(mollweide::Y_MAX + PAD)..(mollweide::Y_MAX + PAD),
            )
            .map_err(|err| draw_error(path, err))?;

        for line in graticule_polylines() {
            chart
                .draw_series(LineSeries::new(line, &BLACK.mix(0.25)))
                .map_err(|err| draw_error(path, err))?;
        }

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 2, color.mix(0.5).filled())),
            )
            .map_err(|err| draw_error(path, err))?
            .label(label)
            .legend(move |(x, y)| Circle::new((x + 10, y), 3, color.mix(0.5).filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .border_style(&BLACK.mix(0.4))
            .background_style(&WHITE.mix(0.9))
            .draw()
            .map_err(|err| draw_error(path, err))?;
    }

    root.present().map_err(|err| draw_error(path, err))
}

/// Project every catalog row under one frame accessor, wrapping longitude
/// into the projection's `[-180, 180]` domain first.
fn project_all(
    catalog: &SkyCatalog,
    lon_lat: impl Fn(&CoordinateRow) -> (f64, f64),
) -> Vec<(f64, f64)> {
    catalog
        .rows
        .iter()
        .map(|row| {
            let (lon, lat) = lon_lat(row);
            mollweide::project_deg(mollweide::wrap_longitude_deg(lon), lat)
        })
        .collect()
}

/// Graticule in projected coordinates: outer ellipse, then meridians,
/// then parallels. Parallels are horizontal in this projection, so their
/// endpoints suffice.
fn graticule_polylines() -> Vec<Vec<(f64, f64)>> {
    let mut lines = Vec::new();

    let boundary = (0..=BOUNDARY_SEGMENTS)
        .map(|i| {
            let t = 2.0 * PI * (i as f64) / (BOUNDARY_SEGMENTS as f64);
            (mollweide::X_MAX * t.cos(), mollweide::Y_MAX * t.sin())
        })
        .collect();
    lines.push(boundary);

    for &lon in &MERIDIANS_DEG {
        let meridian = (0..=60)
            .map(|i| mollweide::project_deg(lon, -90.0 + 3.0 * f64::from(i)))
            .collect();
        lines.push(meridian);
    }

    for &lat in &PARALLELS_DEG {
        lines.push(vec![
            mollweide::project_deg(-180.0, lat),
            mollweide::project_deg(180.0, lat),
        ]);
    }

    lines
}
