//! Aviation weather briefing library.
//!
//! Answers: "what is the weather at these airports, and how far apart
//! are they?" Fetches TAF, short-TAF and METAR products from the NOAA
//! text server, loads a local reference file of airport coordinates and
//! approach minima, and computes great-circle distances.

pub mod briefing;
pub mod domain;
pub mod geo;
pub mod minima;
pub mod noaa;
