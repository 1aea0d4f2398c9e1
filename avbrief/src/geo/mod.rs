//! Great-circle distance between coordinates and airports.
//!
//! Uses the spherical law of cosines, which is plenty accurate at
//! airport-to-airport scales. Formula from williams.best.vwh.net/avform.htm#Dist.

use crate::domain::Icao;
use crate::minima::AirportTable;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Nautical miles per kilometer.
const NM_PER_KM: f64 = 0.5399568;

/// A position in decimal degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    /// Latitude in decimal degrees
    pub lat_deg: f64,
    /// Longitude in decimal degrees
    pub lon_deg: f64,
}

impl LatLon {
    /// Create a position from decimal degrees.
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

/// Error returned when a distance lookup names an unknown airport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("identifier {0} not found in reference data")]
pub struct UnknownAirport(pub Icao);

/// Great-circle distance between two positions, in nautical miles.
///
/// # Examples
///
/// ```
/// use avbrief::geo::{LatLon, great_circle_nm};
///
/// let chievres = LatLon::new(50.583333, 3.833333);
/// let brussels = LatLon::new(50.897170, 4.483602);
/// let nm = great_circle_nm(chievres, brussels);
/// assert!((nm - 31.07).abs() < 0.5);
/// ```
pub fn great_circle_nm(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.lat_deg.to_radians();
    let lon1 = a.lon_deg.to_radians();
    let lat2 = b.lat_deg.to_radians();
    let lon2 = b.lon_deg.to_radians();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon1 - lon2).cos();

    // Rounding can push the cosine just past ±1 for identical or
    // antipodal points, which would make acos return NaN.
    let angle = cos_angle.clamp(-1.0, 1.0).acos();

    angle * EARTH_RADIUS_KM * NM_PER_KM
}

/// Great-circle distance between two airports in the reference table,
/// in nautical miles.
pub fn distance_between(
    a: &Icao,
    b: &Icao,
    table: &AirportTable,
) -> Result<f64, UnknownAirport> {
    let record_a = table.get(a).ok_or(UnknownAirport(*a))?;
    let record_b = table.get(b).ok_or(UnknownAirport(*b))?;
    Ok(great_circle_nm(record_a.position(), record_b.position()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CHIEVRES: LatLon = LatLon {
        lat_deg: 50.583333,
        lon_deg: 3.833333,
    };
    const BRUSSELS: LatLon = LatLon {
        lat_deg: 50.897170,
        lon_deg: 4.483602,
    };

    #[test]
    fn chievres_to_brussels() {
        let nm = great_circle_nm(CHIEVRES, BRUSSELS);
        assert!((nm - 31.07).abs() < 0.5, "got {nm}");
    }

    #[test]
    fn identical_points_are_zero_not_nan() {
        let nm = great_circle_nm(CHIEVRES, CHIEVRES);
        assert_eq!(nm, 0.0);
    }

    #[test]
    fn symmetric() {
        let there = great_circle_nm(CHIEVRES, BRUSSELS);
        let back = great_circle_nm(BRUSSELS, CHIEVRES);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn antipodal_points_do_not_nan() {
        let a = LatLon::new(0.0, 0.0);
        let b = LatLon::new(0.0, 180.0);
        let nm = great_circle_nm(a, b);
        assert!(nm.is_finite());
        // half the Earth's circumference
        assert!((nm - std::f64::consts::PI * EARTH_RADIUS_KM * NM_PER_KM).abs() < 1.0);
    }

    #[test]
    fn lookup_by_identifier() {
        let input = "HEADER\n\n\
            EBCV,Chievres,50.583333,3.833333,200,400,600,2000,600,2000\n\
            EBBR,Brussels,50.897170,4.483602,200,400,600,2000,600,2000\n";
        let table = AirportTable::from_reader(Cursor::new(input)).unwrap();

        let ebcv = Icao::parse("EBCV").unwrap();
        let ebbr = Icao::parse("EBBR").unwrap();
        let nm = distance_between(&ebcv, &ebbr, &table).unwrap();
        assert!((nm - 31.07).abs() < 0.5);
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let table = AirportTable::from_reader(Cursor::new("HEADER\n\n")).unwrap();
        let ebcv = Icao::parse("EBCV").unwrap();
        let ebbr = Icao::parse("EBBR").unwrap();
        let err = distance_between(&ebcv, &ebbr, &table).unwrap_err();
        assert_eq!(err, UnknownAirport(ebcv));
        assert_eq!(err.to_string(), "identifier EBCV not found in reference data");
    }
}
