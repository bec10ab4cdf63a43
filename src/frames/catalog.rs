//! Batch conversion of an equatorial catalog into galactic and ecliptic frames.

use crate::domain::{CoordinateRow, SkyCatalog, SkyPoint};

use super::{equatorial_to_ecliptic, equatorial_to_galactic};

/// Convert one equatorial position into a fully populated catalog row.
pub fn convert_point(point: &SkyPoint) -> CoordinateRow {
    let (gal_l_deg, gal_b_deg) = equatorial_to_galactic(point.ra_deg, point.dec_deg);
    let (ecl_lon_deg, ecl_lat_deg) = equatorial_to_ecliptic(point.ra_deg, point.dec_deg);
    CoordinateRow {
        ra_deg: point.ra_deg,
        dec_deg: point.dec_deg,
        gal_l_deg,
        gal_b_deg,
        ecl_lon_deg,
        ecl_lat_deg,
    }
}

/// Convert a whole equatorial sample, row for row.
pub fn convert_catalog(points: &[SkyPoint]) -> SkyCatalog {
    SkyCatalog {
        rows: points.iter().map(convert_point).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_preserves_input_and_fills_both_frames() {
        let point = SkyPoint {
            ra_deg: 0.0,
            dec_deg: 0.0,
        };
        let row = convert_point(&point);
        assert_eq!(row.ra_deg, 0.0);
        assert_eq!(row.dec_deg, 0.0);
        assert!((row.gal_l_deg - 96.3373).abs() < 1e-3, "got l = {}", row.gal_l_deg);
        assert!((row.gal_b_deg + 60.1886).abs() < 1e-3, "got b = {}", row.gal_b_deg);
        assert!(row.ecl_lon_deg.abs() < 1e-9, "vernal equinox stays at the origin");
        assert!(row.ecl_lat_deg.abs() < 1e-9);
    }

    #[test]
    fn catalog_converts_every_point() {
        let points = vec![
            SkyPoint { ra_deg: 10.0, dec_deg: 20.0 },
            SkyPoint { ra_deg: 200.0, dec_deg: -45.0 },
            SkyPoint { ra_deg: 359.5, dec_deg: 89.0 },
        ];
        let catalog = convert_catalog(&points);
        assert_eq!(catalog.len(), points.len());
        for (row, point) in catalog.rows.iter().zip(&points) {
            assert_eq!(row.ra_deg, point.ra_deg);
            assert_eq!(row.dec_deg, point.dec_deg);
            assert!((-90.0..=90.0).contains(&row.gal_b_deg));
            assert!((-90.0..=90.0).contains(&row.ecl_lat_deg));
            assert!((0.0..360.0).contains(&row.gal_l_deg));
            assert!((0.0..360.0).contains(&row.ecl_lon_deg));
        }
    }
}
