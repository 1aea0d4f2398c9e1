//! NOAA text-server client.
//!
//! This module provides an HTTP client for the NOAA aviation weather
//! text server, which publishes TAF, short TAF and METAR products as
//! one plain-text file per airport.
//!
//! Key characteristics of the server:
//! - Products live under fixed directory paths, one `{ICAO}.TXT` file each
//! - The first line of each file is the issue time, `YYYY/MM/DD HH:MM`
//! - There is no API surface beyond downloading the whole file

mod bulletin;
mod client;
mod error;
mod mock;

pub use bulletin::{Bulletin, normalize_line};
pub use client::{NoaaClient, NoaaConfig, Product};
pub use error::FetchError;
pub use mock::MockNoaaClient;
