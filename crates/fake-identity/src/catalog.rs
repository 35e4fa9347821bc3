//! Static fallback pools used when a locale cannot produce a field.

use rand::seq::IndexedRandom;

use crate::country::{Country, SupportedCountry};
use crate::rng::IdentityRng;

/// Value used when neither the locale nor a fallback pool can produce a field.
pub const SENTINEL: &str = "Not available";

/// Field families that have a static fallback pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackCategory {
    /// Street addresses.
    Streets,
    /// City names.
    Cities,
    /// Phone numbers.
    Phones,
}

const NIGERIA_STREETS: &[&str] = &[
    "12 Ahmadu Bello Way",
    "45 Unity Rd",
    "101 Bompai St",
    "77 Broad St",
    "9 Tafawa Balewa Ln",
];
const NIGERIA_CITIES: &[&str] = &["Lagos", "Abuja", "Kano", "Port Harcourt", "Ibadan"];
const NIGERIA_PHONES: &[&str] = &["+2348034567890", "+2348061122334", "+2347019988776"];

const USA_STREETS: &[&str] = &[
    "123 Main St",
    "456 Elm Ave",
    "789 Oak Blvd",
    "321 Pine Rd",
    "55 Maple Dr",
];
const USA_CITIES: &[&str] = &["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];
const USA_PHONES: &[&str] = &["+1-202-555-0145", "+1-415-555-0199", "+1-646-555-0111"];

const CANADA_STREETS: &[&str] = &["55 King St", "88 Queen Ave", "200 Bay Rd", "17 Yonge St"];
const CANADA_CITIES: &[&str] = &["Toronto", "Vancouver", "Ottawa", "Montreal"];
const CANADA_PHONES: &[&str] = &["+1-416-555-0133", "+1-604-555-0188", "+1-613-555-0190"];

const GERMANY_STREETS: &[&str] = &[
    "10 Alexanderplatz",
    "25 Hauptstrasse",
    "88 Lindenweg",
    "42 Goetheplatz",
];
const GERMANY_CITIES: &[&str] = &["Berlin", "Munich", "Hamburg", "Frankfurt"];
const GERMANY_PHONES: &[&str] = &["+49-30-123456", "+49-89-987654", "+49-40-543210"];

/// Returns the fallback pool for a supported country and category.
///
/// Every pool is non-empty.
#[must_use]
pub const fn pool(country: SupportedCountry, category: FallbackCategory) -> &'static [&'static str] {
    match (country, category) {
        (SupportedCountry::Nigeria, FallbackCategory::Streets) => NIGERIA_STREETS,
        (SupportedCountry::Nigeria, FallbackCategory::Cities) => NIGERIA_CITIES,
        (SupportedCountry::Nigeria, FallbackCategory::Phones) => NIGERIA_PHONES,
        (SupportedCountry::Usa, FallbackCategory::Streets) => USA_STREETS,
        (SupportedCountry::Usa, FallbackCategory::Cities) => USA_CITIES,
        (SupportedCountry::Usa, FallbackCategory::Phones) => USA_PHONES,
        (SupportedCountry::Canada, FallbackCategory::Streets) => CANADA_STREETS,
        (SupportedCountry::Canada, FallbackCategory::Cities) => CANADA_CITIES,
        (SupportedCountry::Canada, FallbackCategory::Phones) => CANADA_PHONES,
        (SupportedCountry::Germany, FallbackCategory::Streets) => GERMANY_STREETS,
        (SupportedCountry::Germany, FallbackCategory::Cities) => GERMANY_CITIES,
        (SupportedCountry::Germany, FallbackCategory::Phones) => GERMANY_PHONES,
    }
}

/// Picks a uniformly random fallback value for the country, if it has a pool.
///
/// Unsupported countries have no pools and always yield `None`.
pub fn pick_fallback(
    country: &Country,
    category: FallbackCategory,
    rng: &mut IdentityRng,
) -> Option<&'static str> {
    let supported = country.supported()?;
    pool(supported, category).choose(rng).copied()
}
