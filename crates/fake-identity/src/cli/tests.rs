//! Unit tests for the identity CLI helpers.

use rstest::{fixture, rstest};

use super::*;
use crate::test_support::fixture_engine;

fn settings(country: &str, seed: u64, count: usize, json: bool) -> IdentitySettings {
    IdentitySettings {
        country: Some(country.to_owned()),
        seed: Some(seed),
        count: Some(count),
        json,
        list_countries: false,
    }
}

fn run_to_string(settings: &IdentitySettings) -> Result<String, CliError> {
    let mut out = Vec::new();
    run(settings, &fixture_engine(), &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[fixture]
fn german_json() -> IdentitySettings {
    settings("Germany", 2026, 3, true)
}

#[test]
fn lists_supported_countries() {
    let listing = IdentitySettings {
        list_countries: true,
        ..settings("ignored", 1, 1, false)
    };

    let output = run_to_string(&listing).expect("run succeeds");

    assert_eq!(output, "Nigeria\nUSA\nCanada\nGermany\n");
}

#[test]
fn rejects_zero_count() {
    let err = run_to_string(&settings("USA", 1, 0, false)).expect_err("expected error");

    assert_eq!(err, CliError::InvalidCount);
}

#[rstest]
#[case(1)]
#[case(4)]
fn text_output_has_one_block_per_identity(#[case] count: usize) {
    let output = run_to_string(&settings("Nigeria", 5, count, false)).expect("run succeeds");

    assert_eq!(output.matches("🌍 Nigeria — Fake Identity").count(), count);
    assert_eq!(output.matches("🆔 National ID: ").count(), count);
    assert_eq!(output.split("\n\n").count(), count);
}

#[rstest]
fn json_output_parses_back(german_json: IdentitySettings) {
    let output = run_to_string(&german_json).expect("run succeeds");

    let records: Vec<IdentityRecord> = serde_json::from_str(&output).expect("valid json");
    assert_eq!(records.len(), 3);
    for record in records {
        assert_eq!(record.country, "Germany");
        assert_eq!(record.national_id.map(|id| id.len()), Some(10));
    }
}

#[rstest]
fn seeded_runs_are_reproducible(german_json: IdentitySettings) {
    let first = run_to_string(&german_json).expect("first run");
    let second = run_to_string(&german_json).expect("second run");

    assert_eq!(first, second);
}

#[test]
fn unsupported_country_json_has_no_national_id() {
    let output = run_to_string(&settings("France", 9, 2, true)).expect("run succeeds");

    assert!(!output.contains("nationalId"));
    assert!(output.contains("\"country\": \"France\""));
}

#[test]
fn output_format_follows_json_flag() {
    assert_eq!(
        OutputFormat::from_settings(&settings("USA", 1, 1, true)),
        OutputFormat::Json
    );
    assert_eq!(
        OutputFormat::from_settings(&settings("USA", 1, 1, false)),
        OutputFormat::Text
    );
}

#[test]
fn render_records_handles_empty_slice() {
    assert_eq!(render_records(&[], OutputFormat::Text).expect("text"), "");
    assert_eq!(render_records(&[], OutputFormat::Json).expect("json"), "[]");
}

#[test]
fn write_failures_are_reported() {
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = run(
        &settings("USA", 1, 1, false),
        &fixture_engine(),
        &mut FailingWriter,
    )
    .expect_err("expected error");

    assert!(matches!(err, CliError::Write { .. }), "{err:?}");
}
