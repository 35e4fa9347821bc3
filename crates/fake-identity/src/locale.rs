//! Country to locale resolution.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{debug, warn};

use crate::country::{Country, SupportedCountry};
use crate::provider::FakeLocale;

/// Returns the locale tag mapped to a supported country.
#[must_use]
pub const fn locale_tag(country: SupportedCountry) -> &'static str {
    match country {
        SupportedCountry::Nigeria => "en_NG",
        SupportedCountry::Usa => "en_US",
        SupportedCountry::Canada => "en_CA",
        SupportedCountry::Germany => "de_DE",
    }
}

/// Maps countries to locale data providers.
///
/// Resolution never fails. Unsupported countries get the generic provider,
/// and mapped tags without bundled data degrade to it with a warning.
#[derive(Clone)]
pub struct LocaleResolver {
    clock: Arc<dyn Clock>,
}

impl LocaleResolver {
    /// Creates a resolver whose providers are anchored to `clock`'s date.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Resolves the provider for `country`.
    ///
    /// # Example
    ///
    /// ```
    /// use fake_identity::{Country, LocaleData, LocaleResolver};
    ///
    /// let resolver = LocaleResolver::default();
    ///
    /// assert_eq!(resolver.resolve(&Country::parse("Germany")).tag(), "de_DE");
    /// // No data is bundled for en_NG, so Nigeria uses the generic locale.
    /// assert_eq!(resolver.resolve(&Country::parse("Nigeria")).tag(), "en");
    /// assert_eq!(resolver.resolve(&Country::parse("France")).tag(), "en");
    /// ```
    #[must_use]
    pub fn resolve(&self, country: &Country) -> FakeLocale {
        let today = self.clock.utc().date_naive();
        let Some(supported) = country.supported() else {
            debug!(country = %country, "country has no locale mapping; using generic locale");
            return FakeLocale::generic(today);
        };
        let tag = locale_tag(supported);
        FakeLocale::for_tag(tag, today).unwrap_or_else(|error| {
            warn!(
                locale = tag,
                country = %country,
                error = %error,
                "locale data unavailable; falling back to generic locale"
            );
            FakeLocale::generic(today)
        })
    }
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl std::fmt::Debug for LocaleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleResolver").finish_non_exhaustive()
    }
}
