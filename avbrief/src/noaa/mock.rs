//! Mock NOAA client for testing without network access.
//!
//! Loads sample product files from a local directory tree and serves
//! them as if they were live server responses.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::Icao;

use super::bulletin::Bulletin;
use super::client::Product;
use super::error::FetchError;

/// Mock NOAA client that serves product files from a directory.
///
/// Expects the server's directory layout under `root`: one subdirectory
/// per product (see [`Product::path_segment`]) containing `{ICAO}.TXT`
/// files. Useful for development and tests that must not touch the
/// real server.
#[derive(Debug, Clone)]
pub struct MockNoaaClient {
    /// Pre-loaded product files, keyed by product and airport.
    files: HashMap<(Product, Icao), String>,
}

impl MockNoaaClient {
    /// Create a mock client by loading every `{ICAO}.TXT` file under the
    /// product subdirectories of `root`.
    ///
    /// Product subdirectories that do not exist are simply empty; files
    /// whose names are not valid ICAO identifiers are skipped.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, FetchError> {
        let root = root.as_ref();
        let mut files = HashMap::new();

        for product in [Product::Taf, Product::ShortTaf, Product::Metar] {
            let dir = root.join(product.path_segment());
            if !dir.is_dir() {
                continue;
            }

            let entries = std::fs::read_dir(&dir).map_err(|e| FetchError::Status {
                status: 0,
                body: format!("failed to read mock data directory {:?}: {}", dir, e),
            })?;

            for entry in entries {
                let entry = entry.map_err(|e| FetchError::Status {
                    status: 0,
                    body: format!("failed to read directory entry: {}", e),
                })?;

                let path = entry.path();
                if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("TXT") {
                    continue;
                }

                // Extract the identifier from the filename (e.g. "EBCV.TXT" -> "EBCV")
                let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let Ok(icao) = Icao::parse(stem) else {
                    continue;
                };

                let text = std::fs::read_to_string(&path).map_err(|e| FetchError::Status {
                    status: 0,
                    body: format!("failed to read {:?}: {}", path, e),
                })?;

                files.insert((product, icao), text);
            }
        }

        Ok(Self { files })
    }

    /// Number of loaded product files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if no product files were loaded.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Serve a product file for an airport, as the live client would.
    pub fn fetch_product(&self, icao: &Icao, product: Product) -> Result<String, FetchError> {
        let text = self
            .files
            .get(&(product, *icao))
            .ok_or(FetchError::NotFound {
                icao: *icao,
                product,
            })?;

        if text.trim().is_empty() {
            return Err(FetchError::EmptyBody {
                icao: *icao,
                product,
            });
        }

        Ok(text.clone())
    }

    /// Serve a forecast product as a bulletin of normalized lines.
    pub fn fetch_lines(&self, icao: &Icao, product: Product) -> Result<Bulletin, FetchError> {
        let body = self.fetch_product(icao, product)?;
        Ok(Bulletin::from_text(&body))
    }
}
