//! A shareable identity generator owning its random source.
//!
//! Front-ends serving several sessions at once can keep one
//! [`IdentitySource`] behind an `Arc`. Each request locks the random source
//! only for the duration of a single record.

use std::sync::{Mutex, PoisonError};

use crate::country::Country;
use crate::engine::IdentityEngine;
use crate::record::IdentityRecord;
use crate::rng::{IdentityRng, entropy_rng, seeded_rng};

/// An [`IdentityEngine`] paired with a mutex-guarded random source.
///
/// # Example
///
/// ```
/// use fake_identity::{IdentityEngine, IdentitySource};
///
/// let source = IdentitySource::seeded(IdentityEngine::default(), 7);
/// let record = source.generate("France");
///
/// assert!(record.national_id.is_none());
/// ```
#[derive(Debug)]
pub struct IdentitySource {
    engine: IdentityEngine,
    rng: Mutex<IdentityRng>,
}

impl IdentitySource {
    /// Pairs `engine` with an explicit random source.
    #[must_use]
    pub const fn new(engine: IdentityEngine, rng: IdentityRng) -> Self {
        Self {
            engine,
            rng: Mutex::new(rng),
        }
    }

    /// Pairs `engine` with a random source seeded from `seed`.
    #[must_use]
    pub fn seeded(engine: IdentityEngine, seed: u64) -> Self {
        Self::new(engine, seeded_rng(seed))
    }

    /// Pairs `engine` with a random source seeded from entropy.
    #[must_use]
    pub fn from_entropy(engine: IdentityEngine) -> Self {
        Self::new(engine, entropy_rng())
    }

    /// Generates a record for a raw country key.
    #[must_use]
    pub fn generate(&self, country_key: &str) -> IdentityRecord {
        self.generate_for(&Country::parse(country_key))
    }

    /// Generates a record for a parsed country.
    #[must_use]
    pub fn generate_for(&self, country: &Country) -> IdentityRecord {
        // The RNG has no invariant a panicking holder could break.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.engine.generate(country, &mut rng)
    }

    /// Generates a record and renders it as text.
    #[must_use]
    pub fn generate_text(&self, country_key: &str) -> String {
        self.generate(country_key).render()
    }
}
