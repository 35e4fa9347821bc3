//! Capability-checked field generation with catalogue fallback.
//!
//! A locale either produces a field ([`Generation::Generated`]) or reports it
//! cannot ([`Generation::Unavailable`]). [`Generation::or_fallback`] turns that
//! into a [`FieldOutcome`], consulting the static fallback pools and finally
//! the sentinel. Nothing in this module returns an error.

use tracing::debug;

use crate::catalog::{FallbackCategory, SENTINEL, pick_fallback};
use crate::country::Country;
use crate::provider::LocaleData;
use crate::record::Gender;
use crate::rng::IdentityRng;

/// The semantic fields a locale may be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Full name built from a male first name.
    NameMale,
    /// Full name built from a female first name.
    NameFemale,
    /// Full name without a gender preference.
    Name,
    /// Street line of an address.
    StreetAddress,
    /// City name.
    City,
    /// Postal or ZIP code.
    PostalCode,
    /// Phone number.
    Phone,
    /// Email address at a free mail provider.
    Email,
    /// ISO-8601 date of birth.
    DateOfBirth,
    /// Job title.
    Job,
    /// Short biography sentence.
    Bio,
    /// Social security number.
    Ssn,
}

impl FieldKind {
    /// Returns a stable lowercase name for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NameMale => "name_male",
            Self::NameFemale => "name_female",
            Self::Name => "name",
            Self::StreetAddress => "street_address",
            Self::City => "city",
            Self::PostalCode => "postal_code",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::DateOfBirth => "date_of_birth",
            Self::Job => "job",
            Self::Bio => "bio",
            Self::Ssn => "ssn",
        }
    }

    /// Returns the fallback pool consulted when this field is unavailable.
    #[must_use]
    pub const fn fallback_category(self) -> Option<FallbackCategory> {
        match self {
            Self::StreetAddress => Some(FallbackCategory::Streets),
            Self::City => Some(FallbackCategory::Cities),
            Self::Phone => Some(FallbackCategory::Phones),
            Self::NameMale
            | Self::NameFemale
            | Self::Name
            | Self::PostalCode
            | Self::Email
            | Self::DateOfBirth
            | Self::Job
            | Self::Bio
            | Self::Ssn => None,
        }
    }
}

/// Result of asking a locale for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// The locale produced a value.
    Generated(String),
    /// The locale cannot produce this field.
    Unavailable,
}

impl Generation {
    /// Wraps a produced value, treating an empty string as unavailable.
    #[must_use]
    pub fn from_value(value: String) -> Self {
        if value.trim().is_empty() {
            Self::Unavailable
        } else {
            Self::Generated(value)
        }
    }

    /// Wraps an optional value, treating `None` or an empty string as
    /// unavailable.
    #[must_use]
    pub fn from_option(value: Option<String>) -> Self {
        value.map_or(Self::Unavailable, Self::from_value)
    }

    /// Resolves an unavailable field through the fallback pool, then the
    /// sentinel.
    pub fn or_fallback(
        self,
        country: &Country,
        category: Option<FallbackCategory>,
        rng: &mut IdentityRng,
    ) -> FieldOutcome {
        match self {
            Self::Generated(value) => FieldOutcome::Generated(value),
            Self::Unavailable => category
                .and_then(|cat| pick_fallback(country, cat, rng))
                .map_or(FieldOutcome::Sentinel, FieldOutcome::Fallback),
        }
    }
}

/// Where a field's final value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Produced by the locale.
    Generated(String),
    /// Picked from the country's fallback pool.
    Fallback(&'static str),
    /// Neither source could help; the value is [`SENTINEL`].
    Sentinel,
}

impl FieldOutcome {
    /// Returns the value as a borrowed string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Generated(value) => value,
            Self::Fallback(value) => value,
            Self::Sentinel => SENTINEL,
        }
    }

    /// Consumes the outcome and returns the owned value.
    #[must_use]
    pub fn into_value(self) -> String {
        match self {
            Self::Generated(value) => value,
            Self::Fallback(value) => value.to_owned(),
            Self::Sentinel => SENTINEL.to_owned(),
        }
    }
}

/// Asks `provider` for `kind`, falling back per `fallback` when it cannot.
///
/// # Example
///
/// ```
/// use fake_identity::{
///     Country, FieldKind, FieldOutcome, FakeLocale, generate_field, seeded_rng,
/// };
///
/// let provider = FakeLocale::generic(chrono::NaiveDate::MIN);
/// let mut rng = seeded_rng(1);
/// let country = Country::parse("USA");
///
/// // The generic locale has no SSN data and SSNs have no fallback pool.
/// let ssn = generate_field(&provider, FieldKind::Ssn, &country, None, &mut rng);
/// assert_eq!(ssn, FieldOutcome::Sentinel);
/// ```
pub fn generate_field(
    provider: &dyn LocaleData,
    kind: FieldKind,
    country: &Country,
    fallback: Option<FallbackCategory>,
    rng: &mut IdentityRng,
) -> FieldOutcome {
    let generation = attempt(provider, kind, rng);
    if generation == Generation::Unavailable {
        debug!(
            field = kind.as_str(),
            locale = provider.tag(),
            country = %country,
            "locale cannot produce field; using fallback"
        );
    }
    generation.or_fallback(country, fallback, rng)
}

/// Generates a full name for `gender`.
///
/// Tries the gendered name first, then the gender-neutral one, then the
/// sentinel. Names have no fallback pool.
pub fn generate_name(
    provider: &dyn LocaleData,
    gender: Gender,
    country: &Country,
    rng: &mut IdentityRng,
) -> String {
    let gendered = match gender {
        Gender::Male => FieldKind::NameMale,
        Gender::Female => FieldKind::NameFemale,
    };
    match attempt(provider, gendered, rng) {
        Generation::Generated(name) => name,
        Generation::Unavailable => {
            generate_field(provider, FieldKind::Name, country, None, rng).into_value()
        }
    }
}

fn attempt(provider: &dyn LocaleData, kind: FieldKind, rng: &mut IdentityRng) -> Generation {
    if !provider.supports(kind) {
        return Generation::Unavailable;
    }
    match provider.generate(kind, rng) {
        Generation::Generated(value) => Generation::from_value(value),
        Generation::Unavailable => Generation::Unavailable,
    }
}
