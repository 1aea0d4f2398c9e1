//! Bulletin text handling.
//!
//! A bulletin is one downloaded product file: an ordered sequence of
//! text lines whose first line conventionally carries the issue time
//! as a `YYYY/MM/DD HH:MM` prefix. Bulletins are created fresh per
//! fetch and discarded after use; nothing is cached.

use std::fmt;

use crate::domain::{ReportTime, TimeParseError};

/// One weather bulletin, as an ordered sequence of normalized lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bulletin {
    lines: Vec<String>,
}

impl Bulletin {
    /// Build a bulletin from raw product-file text.
    ///
    /// Each line is normalized (trimmed of surrounding whitespace);
    /// trailing blank lines are dropped.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(|l| normalize_line(l.as_bytes())).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self { lines }
    }

    /// The bulletin's lines, in file order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The first line, which carries the issue-time prefix.
    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Parse the issue time from the first line.
    pub fn issued_at(&self) -> Result<ReportTime, TimeParseError> {
        ReportTime::parse(self.first_line().unwrap_or(""))
    }

    /// True if the bulletin contains no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Bulletin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Decode one raw product line to text and strip surrounding whitespace.
///
/// NOAA product files are ASCII in practice; any stray non-UTF-8 byte is
/// replaced rather than failing the whole bulletin.
pub fn normalize_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim().to_string()
}
