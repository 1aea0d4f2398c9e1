//! NOAA text-server HTTP client.
//!
//! Provides async methods for downloading the per-airport product files
//! NOAA publishes as plain text under fixed directory paths, one file
//! per airport named `{ICAO}.TXT`.

use std::fmt;

use tracing::debug;

use crate::domain::Icao;

use super::bulletin::Bulletin;
use super::error::FetchError;

/// Default base URL for the NOAA text-file server.
const DEFAULT_BASE_URL: &str = "https://tgftp.nws.noaa.gov/data";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A weather product kind published by the text server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    /// Terminal aerodrome forecast (24-30 hour)
    Taf,
    /// Short-range terminal aerodrome forecast
    ShortTaf,
    /// Routine observation report
    Metar,
}

impl Product {
    /// The server directory this product is published under.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Product::Taf => "forecasts/taf/stations",
            Product::ShortTaf => "forecasts/shorttaf/stations",
            Product::Metar => "observations/metar/stations",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Product::Taf => "TAF",
            Product::ShortTaf => "short TAF",
            Product::Metar => "METAR",
        };
        f.write_str(name)
    }
}

/// Configuration for the NOAA client.
#[derive(Debug, Clone)]
pub struct NoaaConfig {
    /// Base URL for the text server
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NoaaConfig {
    /// Create a config with the production server defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NoaaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the NOAA text-file server.
///
/// Each fetch downloads one whole product file and returns it as a fresh
/// value; there is no caching, retrying, or request concurrency.
#[derive(Debug, Clone)]
pub struct NoaaClient {
    http: reqwest::Client,
    base_url: String,
}

impl NoaaClient {
    /// Create a new NOAA client with the given configuration.
    pub fn new(config: NoaaConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch an airport's terminal aerodrome forecast.
    pub async fn fetch_taf(&self, icao: &Icao) -> Result<Bulletin, FetchError> {
        self.fetch_lines(icao, Product::Taf).await
    }

    /// Fetch an airport's short-range terminal aerodrome forecast.
    pub async fn fetch_short_taf(&self, icao: &Icao) -> Result<Bulletin, FetchError> {
        self.fetch_lines(icao, Product::ShortTaf).await
    }

    /// Fetch an airport's routine observation report as one text blob.
    pub async fn fetch_metar(&self, icao: &Icao) -> Result<String, FetchError> {
        let body = self.fetch_product(icao, Product::Metar).await?;
        Ok(body.trim().to_string())
    }

    /// Fetch a product and split it into a bulletin of normalized lines.
    async fn fetch_lines(&self, icao: &Icao, product: Product) -> Result<Bulletin, FetchError> {
        let body = self.fetch_product(icao, product).await?;
        Ok(Bulletin::from_text(&body))
    }

    /// Download one whole product file, with status triage.
    async fn fetch_product(&self, icao: &Icao, product: Product) -> Result<String, FetchError> {
        let url = format!("{}/{}/{}.TXT", self.base_url, product.path_segment(), icao);
        debug!(%url, "fetching {} for {}", product, icao);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                icao: *icao,
                product,
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;

        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody {
                icao: *icao,
                product,
            });
        }

        Ok(body)
    }
}
