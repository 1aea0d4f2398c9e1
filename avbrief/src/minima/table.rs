//! Airport reference-data table.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::domain::Icao;

use super::error::MinimaError;
use super::record::{AirportRecord, parse_record};

/// Lookup table of airport reference data, keyed by ICAO identifier.
///
/// Built once from a reference file and then only read. Each identifier
/// maps to exactly one record; when the file repeats an identifier, the
/// last record wins and the overwrite is logged.
#[derive(Debug, Clone, Default)]
pub struct AirportTable {
    inner: HashMap<Icao, AirportRecord>,
}

impl AirportTable {
    /// Parse a reference file from any buffered reader.
    ///
    /// The file starts with a free-form header: every line up to and
    /// including the first blank line is skipped. Each following line is
    /// one comma-separated record; malformed lines are skipped with a
    /// logged reason and parsing continues.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, MinimaError> {
        let mut lines = reader.lines();

        // Skip over the header.
        let mut header_terminated = false;
        for line in lines.by_ref() {
            if line?.trim().is_empty() {
                header_terminated = true;
                break;
            }
        }
        if !header_terminated {
            return Err(MinimaError::MissingHeader);
        }

        // Read the records, accumulating them in the map.
        let mut inner = HashMap::new();
        for (index, line) in lines.enumerate() {
            let line = line?;
            match parse_record(&line) {
                Ok((icao, record)) => {
                    if inner.insert(icao, record).is_some() {
                        warn!(line = index + 1, %icao, "duplicate identifier, keeping last record");
                    }
                }
                Err(reason) => {
                    warn!(line = index + 1, %reason, "skipping malformed record");
                }
            }
        }

        Ok(Self { inner })
    }

    /// Load a reference file by path.
    ///
    /// The file handle lives only for the duration of the parse and is
    /// released on every exit path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MinimaError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Look up an airport's record.
    pub fn get(&self, icao: &Icao) -> Option<&AirportRecord> {
        self.inner.get(icao)
    }

    /// Number of airports in the table.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True if the table holds no airports.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over all airports in the table.
    pub fn iter(&self) -> impl Iterator<Item = (&Icao, &AirportRecord)> {
        self.inner.iter()
    }
}
