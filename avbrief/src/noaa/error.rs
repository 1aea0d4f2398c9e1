//! NOAA client error types.

use std::fmt;

use crate::domain::Icao;

use super::client::Product;

/// Errors from the NOAA text-server client.
#[derive(Debug)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Server returned an error status code
    Status { status: u16, body: String },

    /// No product file exists for this airport
    NotFound { icao: Icao, product: Product },

    /// The fetch succeeded but the product file was empty.
    /// Distinct from a failed fetch so callers never have to compare
    /// against a magic value to tell the two apart.
    EmptyBody { icao: Icao, product: Product },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "HTTP error: {e}"),
            FetchError::Status { status, body } => {
                write!(f, "server error {status}")?;
                if !body.is_empty() {
                    write!(f, ": {body}")?;
                }
                Ok(())
            }
            FetchError::NotFound { icao, product } => {
                write!(f, "no {product} on file for {icao}")
            }
            FetchError::EmptyBody { icao, product } => {
                write!(f, "empty {product} file for {icao}")
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err)
    }
}
