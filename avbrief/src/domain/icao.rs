//! Airport identifier types.

use std::fmt;

/// Error returned when parsing an invalid ICAO identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ICAO identifier: {reason}")]
pub struct InvalidIcao {
    reason: &'static str,
}

/// A valid 4-letter ICAO airport identifier.
///
/// ICAO identifiers are always 4 uppercase ASCII letters. This type
/// guarantees that any `Icao` value is valid by construction, so the
/// fetch and lookup paths never see a malformed code.
///
/// # Examples
///
/// ```
/// use avbrief::domain::Icao;
///
/// let ebcv = Icao::parse("EBCV").unwrap();
/// assert_eq!(ebcv.as_str(), "EBCV");
///
/// // Lowercase is rejected
/// assert!(Icao::parse("ebcv").is_err());
///
/// // Wrong length is rejected
/// assert!(Icao::parse("EBC").is_err());
/// assert!(Icao::parse("EBCVX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icao([u8; 4]);

impl Icao {
    /// Parse an ICAO identifier from a string.
    ///
    /// The input must be exactly 4 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidIcao> {
        let bytes = s.as_bytes();

        if bytes.len() != 4 {
            return Err(InvalidIcao {
                reason: "must be exactly 4 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidIcao {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Icao([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Icao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Icao({})", self.as_str())
    }
}

impl fmt::Display for Icao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_icao() {
        assert!(Icao::parse("EBCV").is_ok());
        assert!(Icao::parse("EDDK").is_ok());
        assert!(Icao::parse("KPWM").is_ok());
        assert!(Icao::parse("AAAA").is_ok());
        assert!(Icao::parse("ZZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(Icao::parse("ebcv").is_err());
        assert!(Icao::parse("Ebcv").is_err());
        assert!(Icao::parse("EBCv").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Icao::parse("").is_err());
        assert!(Icao::parse("E").is_err());
        assert!(Icao::parse("EBC").is_err());
        assert!(Icao::parse("EBCVX").is_err());
        assert!(Icao::parse("CHIEVRES").is_err());
    }

    #[test]
    fn reject_non_ascii() {
        assert!(Icao::parse("EB1V").is_err());
        assert!(Icao::parse("EB-V").is_err());
        assert!(Icao::parse("EB V").is_err());
        assert!(Icao::parse("EBÖV").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let icao = Icao::parse("EBCV").unwrap();
        assert_eq!(icao.as_str(), "EBCV");
    }

    #[test]
    fn display() {
        let icao = Icao::parse("EDDK").unwrap();
        assert_eq!(format!("{}", icao), "EDDK");
    }

    #[test]
    fn debug() {
        let icao = Icao::parse("KPWM").unwrap();
        assert_eq!(format!("{:?}", icao), "Icao(KPWM)");
    }

    #[test]
    fn equality() {
        let a = Icao::parse("EBCV").unwrap();
        let b = Icao::parse("EBCV").unwrap();
        let c = Icao::parse("EDDK").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Icao::parse("EBCV").unwrap());
        assert!(set.contains(&Icao::parse("EBCV").unwrap()));
        assert!(!set.contains(&Icao::parse("EDDK").unwrap()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid ICAO identifiers: 4 uppercase ASCII letters
    fn valid_icao_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z]{4}")
            .unwrap()
            .prop_filter("must be 4 chars", |s| s.len() == 4)
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_icao_string()) {
            let icao = Icao::parse(&s).unwrap();
            prop_assert_eq!(icao.as_str(), s.as_str());
        }

        /// Any valid identifier can be parsed
        #[test]
        fn valid_always_parses(s in valid_icao_string()) {
            prop_assert!(Icao::parse(&s).is_ok());
        }

        /// Lowercase letters are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{4}") {
            prop_assert!(Icao::parse(&s).is_err());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,3}|[A-Z]{5,10}") {
            prop_assert!(Icao::parse(&s).is_err());
        }

        /// Strings with digits are rejected
        #[test]
        fn digits_rejected(s in "[A-Z0-9]{4}".prop_filter("has digit", |s| s.chars().any(|c| c.is_ascii_digit()))) {
            prop_assert!(Icao::parse(&s).is_err());
        }
    }
}
