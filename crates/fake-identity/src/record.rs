//! Generated identity records and their canonical text rendering.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::rng::IdentityRng;

/// Separator line printed under the rendering header.
const RENDER_SEPARATOR: &str = "-------------------------------";

/// Gender assigned to a generated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Picks a gender uniformly at random.
    pub fn random(rng: &mut IdentityRng) -> Self {
        if rng.random::<bool>() {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthetic identity.
///
/// Every string field holds a generated value, a fallback value or
/// `"Not available"`. `national_id` is present only for supported countries
/// and is left out of the JSON form when absent.
///
/// # Example
///
/// ```
/// use fake_identity::{Gender, IdentityRecord};
///
/// let record = IdentityRecord {
///     country: "Canada".to_owned(),
///     name: "Ada Lovelace".to_owned(),
///     gender: Gender::Female,
///     date_of_birth: "1990-12-10".to_owned(),
///     job: "Engineer".to_owned(),
///     street: "55 King St".to_owned(),
///     city: "Toronto".to_owned(),
///     postal_code: "M5H 2N2".to_owned(),
///     phone: "+1-416-555-0133".to_owned(),
///     email: "ada@example.com".to_owned(),
///     national_id: Some("123456789".to_owned()),
///     bio: "Enjoys analytical engines.".to_owned(),
/// };
///
/// assert!(record.render().contains("🏠 Address: 55 King St, Toronto"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    /// Country key as supplied by the caller.
    pub country: String,
    /// Full name.
    pub name: String,
    /// Gender used to pick the name.
    pub gender: Gender,
    /// Date of birth in ISO-8601 form.
    pub date_of_birth: String,
    /// Job title.
    pub job: String,
    /// Street line of the address.
    pub street: String,
    /// City name.
    pub city: String,
    /// Postal or ZIP code.
    pub postal_code: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Country-shaped national identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    /// Short biography.
    pub bio: String,
}

impl IdentityRecord {
    /// Renders the canonical multi-line text form.
    ///
    /// Front-ends display this verbatim; the labels and line order are fixed.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IdentityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🌍 {} — Fake Identity", self.country)?;
        writeln!(f, "{RENDER_SEPARATOR}")?;
        writeln!(f, "👤 Name: {}", self.name)?;
        writeln!(f, "⚥ Gender: {}", self.gender)?;
        writeln!(f, "🎂 DOB: {}", self.date_of_birth)?;
        writeln!(f, "🏢 Job: {}", self.job)?;
        writeln!(f, "🏠 Address: {}, {}", self.street, self.city)?;
        writeln!(f, "🏷️ Postal Code: {}", self.postal_code)?;
        writeln!(f, "📞 Phone: {}", self.phone)?;
        writeln!(f, "✉️ Email: {}", self.email)?;
        if let Some(national_id) = &self.national_id {
            writeln!(f, "🆔 National ID: {national_id}")?;
        }
        write!(f, "📝 Bio: {}", self.bio)
    }
}
