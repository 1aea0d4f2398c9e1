//! Report selection and briefing assembly.
//!
//! NOAA publishes two TAF variants per airport. The selector fetches
//! both and keeps whichever was issued later, using the fixed-width
//! `YYYY/MM/DD HH:MM` first line: because it is zero-padded, plain
//! string comparison orders the same way as the instants themselves.

use crate::domain::Icao;
use crate::noaa::{Bulletin, FetchError, MockNoaaClient, NoaaClient, Product};

/// Trait for fetching weather products.
///
/// This abstraction allows the selector to run against the live NOAA
/// client or mock data.
#[allow(async_fn_in_trait)]
pub trait ReportSource {
    /// Fetch an airport's terminal aerodrome forecast.
    async fn taf(&self, icao: &Icao) -> Result<Bulletin, FetchError>;

    /// Fetch an airport's short-range terminal aerodrome forecast.
    async fn short_taf(&self, icao: &Icao) -> Result<Bulletin, FetchError>;

    /// Fetch an airport's routine observation report.
    async fn metar(&self, icao: &Icao) -> Result<String, FetchError>;
}

impl ReportSource for NoaaClient {
    async fn taf(&self, icao: &Icao) -> Result<Bulletin, FetchError> {
        self.fetch_taf(icao).await
    }

    async fn short_taf(&self, icao: &Icao) -> Result<Bulletin, FetchError> {
        self.fetch_short_taf(icao).await
    }

    async fn metar(&self, icao: &Icao) -> Result<String, FetchError> {
        self.fetch_metar(icao).await
    }
}

impl ReportSource for MockNoaaClient {
    async fn taf(&self, icao: &Icao) -> Result<Bulletin, FetchError> {
        self.fetch_lines(icao, Product::Taf)
    }

    async fn short_taf(&self, icao: &Icao) -> Result<Bulletin, FetchError> {
        self.fetch_lines(icao, Product::ShortTaf)
    }

    async fn metar(&self, icao: &Icao) -> Result<String, FetchError> {
        self.fetch_product(icao, Product::Metar)
    }
}

/// Pick the more recent of the two forecast variants.
///
/// If the standard fetch failed, the short result is returned
/// unconditionally, even if it also failed. If only the short fetch
/// failed, the standard bulletin is returned. When both succeeded the
/// bulletin with the lexicographically later first line wins; ties go
/// to the short variant.
pub fn select_latest(
    taf: Result<Bulletin, FetchError>,
    short: Result<Bulletin, FetchError>,
) -> Result<Bulletin, FetchError> {
    match (taf, short) {
        (Err(_), short) => short,
        (taf @ Ok(_), Err(_)) => taf,
        (Ok(taf), Ok(short)) => {
            if taf.first_line() > short.first_line() {
                Ok(taf)
            } else {
                Ok(short)
            }
        }
    }
}

/// Fetch both forecast variants for an airport and keep the later one.
///
/// The two fetches are issued sequentially; there is no parallelism to
/// reason about and no shared state between the calls.
pub async fn latest_forecast(
    source: &impl ReportSource,
    icao: &Icao,
) -> Result<Bulletin, FetchError> {
    let taf = source.taf(icao).await;
    let short = source.short_taf(icao).await;
    select_latest(taf, short)
}

/// A weather briefing for one airport: latest forecast plus current
/// observation.
///
/// Each product's outcome is carried independently so a missing METAR
/// does not discard a perfectly good forecast.
#[derive(Debug)]
pub struct Briefing {
    /// The airport briefed
    pub icao: Icao,
    /// Most recent forecast variant
    pub forecast: Result<Bulletin, FetchError>,
    /// Routine observation report
    pub observation: Result<String, FetchError>,
}

/// Assemble a briefing for one airport.
pub async fn fetch_briefing(source: &impl ReportSource, icao: &Icao) -> Briefing {
    let forecast = latest_forecast(source, icao).await;
    let observation = source.metar(icao).await;

    Briefing {
        icao: *icao,
        forecast,
        observation,
    }
}
