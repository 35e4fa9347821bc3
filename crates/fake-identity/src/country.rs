//! Country keys accepted by the generator.
//!
//! Four countries receive full treatment (regional locale, fallback pools and
//! a national identifier). Any other key is carried verbatim as
//! [`Country::Unsupported`] and generated with the generic locale.

use std::fmt;

/// Country keys with full support, in menu order.
pub const SUPPORTED_COUNTRIES: [&str; 4] = ["Nigeria", "USA", "Canada", "Germany"];

/// A country with a fallback pool, a locale mapping and a national ID shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedCountry {
    /// Nigeria (`"Nigeria"`).
    Nigeria,
    /// United States (`"USA"`).
    Usa,
    /// Canada (`"Canada"`).
    Canada,
    /// Germany (`"Germany"`).
    Germany,
}

impl SupportedCountry {
    /// All supported countries, in menu order.
    pub const ALL: [Self; 4] = [Self::Nigeria, Self::Usa, Self::Canada, Self::Germany];

    /// Returns the key used by front-ends for this country.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Nigeria => "Nigeria",
            Self::Usa => "USA",
            Self::Canada => "Canada",
            Self::Germany => "Germany",
        }
    }

    /// Looks up a supported country by its exact key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|country| country.key() == key)
    }
}

/// A country key as supplied by a front-end.
///
/// Parsing never fails: keys outside [`SUPPORTED_COUNTRIES`] become
/// [`Country::Unsupported`].
///
/// # Example
///
/// ```
/// use fake_identity::{Country, SupportedCountry};
///
/// assert_eq!(Country::parse("USA"), Country::Supported(SupportedCountry::Usa));
/// assert_eq!(Country::parse("France"), Country::Unsupported("France".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Country {
    /// One of the four fully supported countries.
    Supported(SupportedCountry),
    /// Any other key, kept as supplied.
    Unsupported(String),
}

impl Country {
    /// Parses a front-end key. Matching is exact and case-sensitive.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        SupportedCountry::from_key(key)
            .map_or_else(|| Self::Unsupported(key.to_owned()), Self::Supported)
    }

    /// Returns the supported country, if any.
    #[must_use]
    pub const fn supported(&self) -> Option<SupportedCountry> {
        match self {
            Self::Supported(country) => Some(*country),
            Self::Unsupported(_) => None,
        }
    }

    /// Returns the key exactly as it should be displayed.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Supported(country) => country.key(),
            Self::Unsupported(key) => key,
        }
    }
}

impl From<SupportedCountry> for Country {
    fn from(country: SupportedCountry) -> Self {
        Self::Supported(country)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Nigeria", SupportedCountry::Nigeria)]
    #[case("USA", SupportedCountry::Usa)]
    #[case("Canada", SupportedCountry::Canada)]
    #[case("Germany", SupportedCountry::Germany)]
    fn parses_supported_keys(#[case] key: &str, #[case] expected: SupportedCountry) {
        assert_eq!(Country::parse(key), Country::Supported(expected));
    }

    #[rstest]
    #[case("France")]
    #[case("usa")]
    #[case(" Canada")]
    #[case("")]
    fn keeps_other_keys_verbatim(#[case] key: &str) {
        let country = Country::parse(key);

        assert_eq!(country, Country::Unsupported(key.to_owned()));
        assert_eq!(country.key(), key);
        assert!(country.supported().is_none());
    }

    #[test]
    fn supported_keys_match_menu_order() {
        let keys: Vec<&str> = SupportedCountry::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, SUPPORTED_COUNTRIES);
    }

    #[test]
    fn display_uses_key() {
        assert_eq!(Country::from(SupportedCountry::Usa).to_string(), "USA");
        assert_eq!(Country::parse("Atlantis").to_string(), "Atlantis");
    }
}
