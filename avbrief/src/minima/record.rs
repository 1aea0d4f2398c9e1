//! Airport reference records and per-line parsing.

use crate::domain::Icao;
use crate::geo::LatLon;

/// A ceiling/visibility pair, in feet and meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minima {
    /// Lowest usable cloud ceiling, in feet
    pub ceiling_ft: u32,
    /// Minimum visibility, in meters
    pub visibility_m: u32,
}

/// One airport's reference data: position plus approach minima.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportRecord {
    /// Airport name
    pub name: String,
    /// Latitude in decimal degrees, north positive
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive
    pub longitude: f64,
    /// Minima to file this airport as a destination
    pub destination: Minima,
    /// Minima to file a destination with no alternate
    pub no_alternate: Minima,
    /// Minima to file this airport as an alternate
    pub alternate: Minima,
}

impl AirportRecord {
    /// The airport's position.
    pub fn position(&self) -> LatLon {
        LatLon::new(self.latitude, self.longitude)
    }
}

/// Why a reference-file line was skipped.
///
/// Malformed lines never abort a load; they are skipped and the reason
/// is logged so a bad file is diagnosable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    /// The line did not split into exactly ten comma-separated fields
    #[error("expected 10 comma-separated fields, found {found}")]
    WrongFieldCount { found: usize },

    /// The identifier field is not a valid ICAO code
    #[error("identifier is not a valid ICAO code")]
    BadIdentifier,

    /// A numeric field did not parse
    #[error("field {field} is not a valid number")]
    BadNumber { field: &'static str },
}

/// Parse one record line into an identifier and its airport record.
///
/// The line must split on commas into exactly ten fields: identifier,
/// name, latitude, longitude, then destination, no-alternate and
/// alternate ceiling/visibility pairs. No quoting of commas within
/// fields is supported.
pub fn parse_record(line: &str) -> Result<(Icao, AirportRecord), SkipReason> {
    let fields: Vec<&str> = line.trim().split(',').collect();

    if fields.len() != 10 {
        return Err(SkipReason::WrongFieldCount {
            found: fields.len(),
        });
    }

    let icao = Icao::parse(fields[0]).map_err(|_| SkipReason::BadIdentifier)?;
    let name = fields[1].to_string();
    let latitude = parse_f64(fields[2], "latitude")?;
    let longitude = parse_f64(fields[3], "longitude")?;
    let destination = parse_minima(fields[4], fields[5], "destination")?;
    let no_alternate = parse_minima(fields[6], fields[7], "no-alternate")?;
    let alternate = parse_minima(fields[8], fields[9], "alternate")?;

    Ok((
        icao,
        AirportRecord {
            name,
            latitude,
            longitude,
            destination,
            no_alternate,
            alternate,
        },
    ))
}

fn parse_f64(field: &str, name: &'static str) -> Result<f64, SkipReason> {
    field
        .trim()
        .parse()
        .map_err(|_| SkipReason::BadNumber { field: name })
}

fn parse_minima(
    ceiling: &str,
    visibility: &str,
    name: &'static str,
) -> Result<Minima, SkipReason> {
    let ceiling_ft = ceiling
        .trim()
        .parse()
        .map_err(|_| SkipReason::BadNumber { field: name })?;
    let visibility_m = visibility
        .trim()
        .parse()
        .map_err(|_| SkipReason::BadNumber { field: name })?;
    Ok(Minima {
        ceiling_ft,
        visibility_m,
    })
}
