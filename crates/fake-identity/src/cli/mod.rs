//! CLI support for generating identities from the command line.
//!
//! The binary delegates to these functions so they can be exercised in tests
//! without spawning a subprocess.

mod error;

use std::ffi::OsString;
use std::io::Write;

use ortho_config::OrthoConfig;
use tracing::info;

pub use error::CliError;

use crate::config::IdentitySettings;
use crate::country::{Country, SUPPORTED_COUNTRIES};
use crate::engine::IdentityEngine;
use crate::record::IdentityRecord;
use crate::rng::{entropy_rng, seeded_rng};

/// Output encoding for generated identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Canonical text rendering, one block per identity.
    Text,
    /// Pretty-printed JSON array.
    Json,
}

impl OutputFormat {
    /// Selects the format requested by `settings`.
    #[must_use]
    pub const fn from_settings(settings: &IdentitySettings) -> Self {
        if settings.json { Self::Json } else { Self::Text }
    }
}

/// Loads settings from command-line arguments, environment and files.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the settings cannot be loaded.
pub fn load_settings<I>(args: I) -> Result<IdentitySettings, CliError>
where
    I: IntoIterator<Item = OsString>,
{
    IdentitySettings::load_from_iter(args).map_err(|err| CliError::Config {
        message: err.to_string(),
    })
}

/// Generates identities per `settings` and writes them to `out`.
///
/// # Errors
///
/// Returns [`CliError`] when the count is zero, serialisation fails or the
/// output cannot be written.
///
/// # Example
///
/// ```
/// use fake_identity::{IdentityEngine, IdentitySettings, cli};
///
/// let settings = IdentitySettings {
///     country: Some("Canada".to_owned()),
///     seed: Some(7),
///     count: Some(2),
///     json: false,
///     list_countries: false,
/// };
/// let mut out = Vec::new();
///
/// cli::run(&settings, &IdentityEngine::default(), &mut out).expect("run succeeds");
///
/// let text = String::from_utf8(out).expect("utf-8 output");
/// assert_eq!(text.matches("🌍 Canada — Fake Identity").count(), 2);
/// ```
pub fn run<W: Write>(
    settings: &IdentitySettings,
    engine: &IdentityEngine,
    out: &mut W,
) -> Result<(), CliError> {
    if settings.list_countries {
        return write_output(out, &SUPPORTED_COUNTRIES.join("\n"));
    }

    let count = settings.count();
    if count == 0 {
        return Err(CliError::InvalidCount);
    }

    let country = Country::parse(settings.country());
    let mut rng = settings.seed.map_or_else(entropy_rng, seeded_rng);
    info!(
        country = %country,
        count,
        seeded = settings.seed.is_some(),
        "generating identities"
    );

    let records: Vec<IdentityRecord> = (0..count)
        .map(|_| engine.generate(&country, &mut rng))
        .collect();
    let rendered = render_records(&records, OutputFormat::from_settings(settings))?;
    write_output(out, &rendered)
}

/// Renders records in the requested format.
///
/// Text blocks are separated by a blank line.
///
/// # Errors
///
/// Returns [`CliError::Serialize`] if JSON serialisation fails.
pub fn render_records(
    records: &[IdentityRecord],
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(records
            .iter()
            .map(IdentityRecord::render)
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(records).map_err(|err| CliError::Serialize {
                message: err.to_string(),
            })
        }
    }
}

fn write_output<W: Write>(out: &mut W, contents: &str) -> Result<(), CliError> {
    writeln!(out, "{contents}").map_err(|err| CliError::Write {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;
