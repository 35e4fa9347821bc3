//! Random source handed to every generation call.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The random source used throughout generation.
///
/// A fixed seed always reproduces the same sequence, which keeps generated
/// identities stable in tests and demos.
pub type IdentityRng = ChaCha8Rng;

/// Creates a deterministic random source from a seed.
#[must_use]
pub fn seeded_rng(seed: u64) -> IdentityRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Creates a random source seeded from the thread-local generator.
#[must_use]
pub fn entropy_rng() -> IdentityRng {
    ChaCha8Rng::from_rng(&mut rand::rng())
}
