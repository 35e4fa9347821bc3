//! Country-shaped national identifiers.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::country::{Country, SupportedCountry};
use crate::field::{FieldKind, generate_field};
use crate::provider::LocaleData;
use crate::rng::IdentityRng;

/// Ten-digit German identifiers.
pub const GERMANY_ID_RANGE: RangeInclusive<u64> = 1_000_000_000..=9_999_999_999;

/// Nine-digit Canadian identifiers.
pub const CANADA_ID_RANGE: RangeInclusive<u64> = 100_000_000..=999_999_999;

/// Eleven-digit Nigerian identifiers.
pub const NIGERIA_ID_RANGE: RangeInclusive<u64> = 10_000_000_000..=99_999_999_999;

/// Produces the national identifier for `country`.
///
/// US identifiers come from the provider's SSN data, or the sentinel when the
/// provider has none. The other supported countries draw a uniform number of
/// fixed digit length. Unsupported countries have no identifier.
pub fn synthesize_national_id(
    provider: &dyn LocaleData,
    country: &Country,
    rng: &mut IdentityRng,
) -> Option<String> {
    let supported = country.supported()?;
    let id = match supported {
        SupportedCountry::Usa => {
            generate_field(provider, FieldKind::Ssn, country, None, rng).into_value()
        }
        SupportedCountry::Germany => numeric_id(GERMANY_ID_RANGE, rng),
        SupportedCountry::Canada => numeric_id(CANADA_ID_RANGE, rng),
        SupportedCountry::Nigeria => numeric_id(NIGERIA_ID_RANGE, rng),
    };
    Some(id)
}

fn numeric_id(range: RangeInclusive<u64>, rng: &mut IdentityRng) -> String {
    rng.random_range(range).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalog::SENTINEL;
    use crate::provider::FakeLocale;
    use crate::rng::seeded_rng;

    #[fixture]
    fn generic() -> FakeLocale {
        FakeLocale::generic(NaiveDate::from_ymd_opt(2026, 2, 24).expect("valid date"))
    }

    #[rstest]
    #[case("Germany", GERMANY_ID_RANGE, 10)]
    #[case("Canada", CANADA_ID_RANGE, 9)]
    #[case("Nigeria", NIGERIA_ID_RANGE, 11)]
    fn numeric_ids_match_country_shape(
        generic: FakeLocale,
        #[case] key: &str,
        #[case] range: RangeInclusive<u64>,
        #[case] digits: usize,
    ) {
        let country = Country::parse(key);
        let mut rng = seeded_rng(2026);

        for _ in 0..200 {
            let id = synthesize_national_id(&generic, &country, &mut rng).expect("id present");
            assert_eq!(id.len(), digits, "{key}: {id}");
            assert!(id.chars().all(|c| c.is_ascii_digit()), "{key}: {id}");
            let value: u64 = id.parse().expect("numeric id");
            assert!(range.contains(&value), "{key}: {id}");
        }
    }

    #[test]
    fn usa_uses_provider_ssn() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 24).expect("valid date");
        let provider = FakeLocale::for_tag("en_US", today).expect("bundled");
        let mut rng = seeded_rng(5);

        let id = synthesize_national_id(&provider, &Country::parse("USA"), &mut rng)
            .expect("id present");

        assert_eq!(id.len(), 11, "{id}");
        assert_eq!(id.matches('-').count(), 2, "{id}");
    }

    #[rstest]
    fn usa_without_ssn_data_is_sentinel(generic: FakeLocale) {
        let mut rng = seeded_rng(5);

        let id = synthesize_national_id(&generic, &Country::parse("USA"), &mut rng);

        assert_eq!(id.as_deref(), Some(SENTINEL));
    }

    #[rstest]
    #[case("France")]
    #[case("germany")]
    #[case("")]
    fn unsupported_countries_have_no_id(generic: FakeLocale, #[case] key: &str) {
        let mut rng = seeded_rng(5);
        assert!(synthesize_national_id(&generic, &Country::parse(key), &mut rng).is_none());
    }
}
