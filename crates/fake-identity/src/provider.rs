//! Locale data providers.
//!
//! [`LocaleData`] is the capability seam the field generator talks to.
//! [`FakeLocale`] implements it on top of the `fake` crate's locale tables,
//! adding the regional pieces those tables lack: gendered first names, US
//! social security numbers, Canadian and German postal codes and the German
//! street layout.

use std::ops::RangeInclusive;

use chrono::{Days, Months, NaiveDate};
use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StreetName, ZipCode};
use fake::faker::internet::raw::FreeEmail;
use fake::faker::job::raw::Title;
use fake::faker::lorem::raw::Sentence;
use fake::faker::name::raw::{LastName, Name};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{DE_DE, Data, EN};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::LocaleError;
use crate::field::{FieldKind, Generation};
use crate::rng::IdentityRng;

/// Tag reported by the generic provider.
pub const GENERIC_LOCALE_TAG: &str = "en";

/// Oldest generated age, in months (115 years).
const MAX_AGE_MONTHS: u32 = 1380;

/// Word count range for the biography sentence.
const BIO_MIN_WORDS: usize = 4;
const BIO_MAX_WORDS: usize = 10;

/// Area number never issued for SSNs; drawn values at or above it shift up.
const SSN_RESERVED_AREA: u16 = 666;

/// German house numbers run from 1 to this bound.
const GERMAN_MAX_HOUSE_NUMBER: u16 = 200;

/// Lowest and highest five-digit German postcode.
const GERMAN_POSTCODE_RANGE: RangeInclusive<u32> = 1_067..=99_998;

pub(crate) const ENGLISH_MALE_FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven",
];

pub(crate) const ENGLISH_FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary",
    "Patricia",
    "Jennifer",
    "Linda",
    "Elizabeth",
    "Barbara",
    "Susan",
    "Jessica",
    "Sarah",
    "Karen",
    "Lisa",
    "Nancy",
    "Margaret",
    "Emily",
    "Olivia",
];

pub(crate) const GERMAN_MALE_FIRST_NAMES: &[&str] = &[
    "Lukas", "Jonas", "Felix", "Maximilian", "Paul", "Leon", "Tobias", "Stefan", "Jürgen",
    "Klaus", "Wolfgang", "Matthias", "Andreas", "Uwe", "Dieter",
];

pub(crate) const GERMAN_FEMALE_FIRST_NAMES: &[&str] = &[
    "Anna", "Lena", "Sophie", "Marie", "Hannah", "Katharina", "Ursula", "Monika", "Sabine",
    "Petra", "Angelika", "Birgit", "Renate", "Ingrid", "Greta",
];

/// Suffixes joined onto a surname to form a German street name.
const GERMAN_STREET_SUFFIXES: &[&str] = &[
    "straße", "weg", "platz", "allee", "gasse", "ring", "damm",
];

const POSTAL_FIRST_LETTERS: &[char] = &[
    'A', 'B', 'C', 'E', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V', 'X', 'Y',
];

const POSTAL_LETTERS: &[char] = &[
    'A', 'B', 'C', 'E', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V', 'W', 'X',
    'Y', 'Z',
];

/// A source of realistic field values for one language/region.
///
/// Implementations report which fields they can produce through
/// [`LocaleData::supports`]; [`LocaleData::generate`] may still return
/// [`Generation::Unavailable`] when a supported field cannot be produced.
pub trait LocaleData: Send + Sync {
    /// Returns the locale tag, for example `en_US`.
    fn tag(&self) -> &str;

    /// Returns `true` when this locale has data for `field`.
    fn supports(&self, field: FieldKind) -> bool;

    /// Produces a value for `field`.
    fn generate(&self, field: FieldKind, rng: &mut IdentityRng) -> Generation;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavour {
    EnUs,
    EnCa,
    DeDe,
    Generic,
}

impl Flavour {
    const fn male_first_names(self) -> &'static [&'static str] {
        match self {
            Self::DeDe => GERMAN_MALE_FIRST_NAMES,
            Self::EnUs | Self::EnCa | Self::Generic => ENGLISH_MALE_FIRST_NAMES,
        }
    }

    const fn female_first_names(self) -> &'static [&'static str] {
        match self {
            Self::DeDe => GERMAN_FEMALE_FIRST_NAMES,
            Self::EnUs | Self::EnCa | Self::Generic => ENGLISH_FEMALE_FIRST_NAMES,
        }
    }
}

/// Locale data backed by the `fake` crate.
///
/// Dates of birth are drawn relative to `today`, so a fixed anchor date plus
/// a seeded random source reproduces the same records.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fake_identity::{FakeLocale, FieldKind, LocaleData};
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");
/// let locale = FakeLocale::for_tag("en_US", today).expect("bundled locale");
///
/// assert!(locale.supports(FieldKind::Ssn));
/// assert!(FakeLocale::for_tag("en_NG", today).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeLocale {
    flavour: Flavour,
    today: NaiveDate,
}

impl FakeLocale {
    /// Builds the provider for a locale tag.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::UnknownTag`] when no data is bundled for `tag`.
    pub fn for_tag(tag: &str, today: NaiveDate) -> Result<Self, LocaleError> {
        let flavour = match tag {
            "en_US" => Flavour::EnUs,
            "en_CA" => Flavour::EnCa,
            "de_DE" => Flavour::DeDe,
            GENERIC_LOCALE_TAG => Flavour::Generic,
            _ => {
                return Err(LocaleError::UnknownTag {
                    tag: tag.to_owned(),
                });
            }
        };
        Ok(Self { flavour, today })
    }

    /// Builds the generic provider used for unmapped countries and tags.
    #[must_use]
    pub const fn generic(today: NaiveDate) -> Self {
        Self {
            flavour: Flavour::Generic,
            today,
        }
    }

    /// Returns the anchor date for date-of-birth generation.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    fn generate_with<L: Data + Copy + fake::faker::impls::address::CityNameGenFn>(
        &self,
        locale: L,
        field: FieldKind,
        rng: &mut IdentityRng,
    ) -> Generation {
        match field {
            FieldKind::NameMale => Generation::from_option(gendered_name(
                self.flavour.male_first_names(),
                locale,
                rng,
            )),
            FieldKind::NameFemale => Generation::from_option(gendered_name(
                self.flavour.female_first_names(),
                locale,
                rng,
            )),
            FieldKind::Name => Generation::from_value(Name(locale).fake_with_rng(rng)),
            FieldKind::StreetAddress => {
                Generation::from_option(self.street_address(locale, rng))
            }
            FieldKind::City => Generation::from_value(CityName(locale).fake_with_rng(rng)),
            FieldKind::PostalCode => self.postal_code(locale, rng),
            FieldKind::Phone => Generation::from_value(PhoneNumber(locale).fake_with_rng(rng)),
            FieldKind::Email => Generation::from_value(FreeEmail(locale).fake_with_rng(rng)),
            FieldKind::DateOfBirth => Generation::from_option(
                date_of_birth(self.today, rng).map(|date| date.to_string()),
            ),
            FieldKind::Job => Generation::from_value(Title(locale).fake_with_rng(rng)),
            FieldKind::Bio => Generation::from_value(
                Sentence(locale, BIO_MIN_WORDS..BIO_MAX_WORDS).fake_with_rng(rng),
            ),
            FieldKind::Ssn => Generation::from_value(ssn(rng)),
        }
    }

    fn street_address<L: Data + Copy>(
        &self,
        locale: L,
        rng: &mut IdentityRng,
    ) -> Option<String> {
        match self.flavour {
            Flavour::DeDe => german_street_address(locale, rng),
            Flavour::EnUs | Flavour::EnCa | Flavour::Generic => {
                let number: String = BuildingNumber(locale).fake_with_rng(rng);
                let street: String = StreetName(locale).fake_with_rng(rng);
                Some(format!("{number} {street}"))
            }
        }
    }

    fn postal_code<L: Data + Copy>(&self, locale: L, rng: &mut IdentityRng) -> Generation {
        match self.flavour {
            Flavour::EnCa => Generation::from_option(canadian_postal_code(rng)),
            Flavour::DeDe => Generation::from_value(german_postcode(rng)),
            Flavour::EnUs | Flavour::Generic => {
                Generation::from_value(ZipCode(locale).fake_with_rng(rng))
            }
        }
    }
}

impl LocaleData for FakeLocale {
    fn tag(&self) -> &str {
        match self.flavour {
            Flavour::EnUs => "en_US",
            Flavour::EnCa => "en_CA",
            Flavour::DeDe => "de_DE",
            Flavour::Generic => GENERIC_LOCALE_TAG,
        }
    }

    fn supports(&self, field: FieldKind) -> bool {
        match field {
            FieldKind::Ssn => self.flavour == Flavour::EnUs,
            FieldKind::NameMale
            | FieldKind::NameFemale
            | FieldKind::Name
            | FieldKind::StreetAddress
            | FieldKind::City
            | FieldKind::PostalCode
            | FieldKind::Phone
            | FieldKind::Email
            | FieldKind::DateOfBirth
            | FieldKind::Job
            | FieldKind::Bio => true,
        }
    }

    fn generate(&self, field: FieldKind, rng: &mut IdentityRng) -> Generation {
        if !self.supports(field) {
            return Generation::Unavailable;
        }
        match self.flavour {
            Flavour::DeDe => self.generate_with(DE_DE, field, rng),
            Flavour::EnUs | Flavour::EnCa | Flavour::Generic => {
                self.generate_with(EN, field, rng)
            }
        }
    }
}

fn gendered_name<L: Data + Copy>(
    first_names: &[&str],
    locale: L,
    rng: &mut IdentityRng,
) -> Option<String> {
    let first = first_names.choose(rng)?;
    let last: String = LastName(locale).fake_with_rng(rng);
    Some(format!("{first} {last}"))
}

/// Formats `<Surname><suffix> <number>`, for example `Müllerstraße 12`.
fn german_street_address<L: Data + Copy>(locale: L, rng: &mut IdentityRng) -> Option<String> {
    let surname: String = LastName(locale).fake_with_rng(rng);
    let suffix = GERMAN_STREET_SUFFIXES.choose(rng)?;
    let number = rng.random_range(1..=GERMAN_MAX_HOUSE_NUMBER);
    Some(format!("{surname}{suffix} {number}"))
}

/// Formats a five-digit German postcode, keeping leading zeros.
fn german_postcode(rng: &mut IdentityRng) -> String {
    let code = rng.random_range(GERMAN_POSTCODE_RANGE);
    format!("{code:05}")
}

/// Draws a date between `MAX_AGE_MONTHS` before `today` and `today`.
fn date_of_birth(today: NaiveDate, rng: &mut IdentityRng) -> Option<NaiveDate> {
    let earliest = today.checked_sub_months(Months::new(MAX_AGE_MONTHS))?;
    let span = u64::try_from(today.signed_duration_since(earliest).num_days()).ok()?;
    let offset = rng.random_range(0..=span);
    earliest.checked_add_days(Days::new(offset))
}

/// Formats `AAA-GG-SSSS` with area 001-899 (never 666), group 01-99 and
/// serial 0001-9999.
fn ssn(rng: &mut IdentityRng) -> String {
    let drawn_area: u16 = rng.random_range(1..=898);
    let area = if drawn_area >= SSN_RESERVED_AREA {
        drawn_area + 1
    } else {
        drawn_area
    };
    let group: u8 = rng.random_range(1..=99);
    let serial: u16 = rng.random_range(1..=9999);
    format!("{area:03}-{group:02}-{serial:04}")
}

/// Formats `A1A 1A1` using the letters Canada Post allows in each position.
fn canadian_postal_code(rng: &mut IdentityRng) -> Option<String> {
    let first = POSTAL_FIRST_LETTERS.choose(rng)?;
    let second = POSTAL_LETTERS.choose(rng)?;
    let third = POSTAL_LETTERS.choose(rng)?;
    let d1: u8 = rng.random_range(0..=9);
    let d2: u8 = rng.random_range(0..=9);
    let d3: u8 = rng.random_range(0..=9);
    Some(format!("{first}{d1}{second} {d2}{third}{d3}"))
}
