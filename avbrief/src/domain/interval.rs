//! Validity-interval extraction for forecast header lines.
//!
//! A TAF header carries its validity period as a `DDHH/DDHH` group, e.g.
//! `TAF EBCV 051615Z 0519/0607 30005KT 8000 BKN015` is valid from day 05
//! hour 19 through day 06 hour 07.

/// Error returned when a line contains no validity-interval group.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no validity interval group in line")]
pub struct IntervalError;

/// Extract the validity-interval token from a forecast header line.
///
/// Scans whitespace-delimited tokens for the first one shaped like
/// `\d{4}/\d{4}` (four digits, a slash, four digits) and returns it.
///
/// # Examples
///
/// ```
/// use avbrief::domain::validity_interval;
///
/// let line = "TAF EBCV 051615Z 0519/0607 30005KT 8000 BKN015";
/// assert_eq!(validity_interval(line).unwrap(), "0519/0607");
///
/// assert!(validity_interval("EBCV 060838Z VRB03KT 5000 BR").is_err());
/// ```
pub fn validity_interval(line: &str) -> Result<&str, IntervalError> {
    line.split_whitespace()
        .find(|token| is_interval_token(token))
        .ok_or(IntervalError)
}

/// True if the token matches `\d{4}/\d{4}`.
fn is_interval_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 9
        && bytes[4] == b'/'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..].iter().all(u8::is_ascii_digit)
}
