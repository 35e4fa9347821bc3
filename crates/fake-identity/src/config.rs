//! Command-line settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_COUNTRY: &str = "Nigeria";
const DEFAULT_COUNT: usize = 1;

/// Settings for the `fake-identity` command.
///
/// Values come from CLI flags, `FAKE_IDENTITY_*` environment variables or a
/// configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FAKE_IDENTITY")]
pub struct IdentitySettings {
    /// Country key to generate identities for.
    pub country: Option<String>,
    /// Seed for reproducible output.
    pub seed: Option<u64>,
    /// Number of identities to generate.
    pub count: Option<usize>,
    /// Emit JSON instead of the text rendering.
    #[ortho_config(default = false)]
    pub json: bool,
    /// Print the supported country keys and exit.
    #[ortho_config(default = false)]
    pub list_countries: bool,
}

impl IdentitySettings {
    /// Returns the configured country key, falling back to the default.
    #[must_use]
    pub fn country(&self) -> &str {
        self.country.as_deref().unwrap_or(DEFAULT_COUNTRY)
    }

    /// Returns the configured identity count, falling back to the default.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const ENV_KEYS: [&str; 5] = [
        "FAKE_IDENTITY_COUNTRY",
        "FAKE_IDENTITY_SEED",
        "FAKE_IDENTITY_COUNT",
        "FAKE_IDENTITY_JSON",
        "FAKE_IDENTITY_LIST_COUNTRIES",
    ];

    fn load_from_empty_args() -> IdentitySettings {
        IdentitySettings::load_from_iter([OsString::from("fake-identity")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(ENV_KEYS.map(|key| (key, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.country(), "Nigeria");
        assert_eq!(settings.count(), 1);
        assert!(settings.seed.is_none());
        assert!(!settings.json);
        assert!(!settings.list_countries);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("FAKE_IDENTITY_COUNTRY", Some("Germany".to_owned())),
            ("FAKE_IDENTITY_SEED", Some("2026".to_owned())),
            ("FAKE_IDENTITY_COUNT", Some("3".to_owned())),
            ("FAKE_IDENTITY_JSON", Some("true".to_owned())),
            ("FAKE_IDENTITY_LIST_COUNTRIES", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.country(), "Germany");
        assert_eq!(settings.seed, Some(2026));
        assert_eq!(settings.count(), 3);
        assert!(settings.json);
    }

    #[rstest]
    fn command_line_flags_are_respected() {
        let _guard = lock_env(ENV_KEYS.map(|key| (key, None::<String>)));

        let settings = IdentitySettings::load_from_iter(
            ["fake-identity", "--country", "Canada", "--seed", "7"].map(OsString::from),
        )
        .expect("config should load");

        assert_eq!(settings.country(), "Canada");
        assert_eq!(settings.seed, Some(7));
    }
}
