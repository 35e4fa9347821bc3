//! Synthetic identity records for testing and demonstration purposes.
//!
//! This crate generates believable, per-country identity records: name,
//! address, contact details and a country-shaped national identifier. It
//! never fails a record. Fields a locale cannot produce come from static
//! per-country fallback pools or the `"Not available"` sentinel.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Locale resolution for Nigeria, the USA, Canada and Germany, with a
//!   generic locale for any other country key
//! - Capability-checked field generation with catalogue fallback
//! - National identifiers shaped per supported country
//! - A canonical text rendering and a JSON form of each record
//! - Reproducible output from a seeded random source
//!
//! # Example
//!
//! ```
//! use fake_identity::{Country, IdentityEngine, seeded_rng};
//!
//! let engine = IdentityEngine::default();
//! let country = Country::parse("Germany");
//!
//! let first = engine.generate(&country, &mut seeded_rng(42));
//! let second = engine.generate(&country, &mut seeded_rng(42));
//!
//! assert_eq!(first, second);
//! assert_eq!(first.national_id.map(|id| id.len()), Some(10));
//! ```

mod catalog;
pub mod cli;
mod config;
mod country;
mod engine;
mod error;
mod field;
mod locale;
mod national_id;
mod provider;
mod record;
mod rng;
mod source;
#[cfg(test)]
mod test_support;

pub use catalog::{FallbackCategory, SENTINEL, pick_fallback, pool};
pub use config::IdentitySettings;
pub use country::{Country, SUPPORTED_COUNTRIES, SupportedCountry};
pub use engine::{IdentityEngine, assemble_identity};
pub use error::LocaleError;
pub use field::{FieldKind, FieldOutcome, Generation, generate_field, generate_name};
pub use locale::{LocaleResolver, locale_tag};
pub use national_id::{
    CANADA_ID_RANGE, GERMANY_ID_RANGE, NIGERIA_ID_RANGE, synthesize_national_id,
};
pub use provider::{FakeLocale, GENERIC_LOCALE_TAG, LocaleData};
pub use record::{Gender, IdentityRecord};
pub use rng::{IdentityRng, entropy_rng, seeded_rng};
pub use source::IdentitySource;
