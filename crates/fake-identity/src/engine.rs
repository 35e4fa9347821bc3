//! Identity assembly.
//!
//! This module ties the pieces together: it resolves a locale for the
//! country, generates each field in a fixed order and returns the finished
//! [`IdentityRecord`]. Assembly always succeeds; unavailable fields end up as
//! fallback values or the sentinel.

use std::sync::Arc;

use mockable::Clock;

use crate::country::Country;
use crate::field::{FieldKind, generate_field, generate_name};
use crate::locale::LocaleResolver;
use crate::national_id::synthesize_national_id;
use crate::provider::LocaleData;
use crate::record::{Gender, IdentityRecord};
use crate::rng::IdentityRng;

/// Generates identity records for any country key.
///
/// The engine holds no mutable state; randomness is passed in on every call.
/// [`IdentityEngine::default`] anchors dates to the system clock.
///
/// # Example
///
/// ```
/// use fake_identity::{Country, IdentityEngine, seeded_rng};
///
/// let engine = IdentityEngine::default();
/// let mut rng = seeded_rng(42);
///
/// let record = engine.generate(&Country::parse("Nigeria"), &mut rng);
///
/// let id = record.national_id.expect("Nigeria has a national ID");
/// assert_eq!(id.len(), 11);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdentityEngine {
    resolver: LocaleResolver,
}

impl IdentityEngine {
    /// Creates an engine whose dates of birth are anchored to `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            resolver: LocaleResolver::new(clock),
        }
    }

    /// Returns the locale resolver used by this engine.
    #[must_use]
    pub const fn resolver(&self) -> &LocaleResolver {
        &self.resolver
    }

    /// Generates a record for `country` using its resolved locale.
    pub fn generate(&self, country: &Country, rng: &mut IdentityRng) -> IdentityRecord {
        let provider = self.resolver.resolve(country);
        assemble_identity(country, &provider, rng)
    }

    /// Parses `country_key`, generates a record and renders it as text.
    pub fn generate_text(&self, country_key: &str, rng: &mut IdentityRng) -> String {
        self.generate(&Country::parse(country_key), rng).render()
    }
}

/// Assembles a record for `country` from an explicit provider.
///
/// Fields are generated in display order: gender, name, date of birth, job,
/// street, city, postal code, phone, email, national ID, bio.
pub fn assemble_identity(
    country: &Country,
    provider: &dyn LocaleData,
    rng: &mut IdentityRng,
) -> IdentityRecord {
    let gender = Gender::random(rng);
    let name = generate_name(provider, gender, country, rng);
    let date_of_birth = field(provider, FieldKind::DateOfBirth, country, rng);
    let job = field(provider, FieldKind::Job, country, rng);
    let street = field(provider, FieldKind::StreetAddress, country, rng);
    let city = field(provider, FieldKind::City, country, rng);
    let postal_code = field(provider, FieldKind::PostalCode, country, rng);
    let phone = field(provider, FieldKind::Phone, country, rng);
    let email = field(provider, FieldKind::Email, country, rng);
    let national_id = synthesize_national_id(provider, country, rng);
    let bio = field(provider, FieldKind::Bio, country, rng);

    IdentityRecord {
        country: country.key().to_owned(),
        name,
        gender,
        date_of_birth,
        job,
        street,
        city,
        postal_code,
        phone,
        email,
        national_id,
        bio,
    }
}

fn field(
    provider: &dyn LocaleData,
    kind: FieldKind,
    country: &Country,
    rng: &mut IdentityRng,
) -> String {
    generate_field(provider, kind, country, kind.fallback_category(), rng).into_value()
}
