//! Error types for the fake-identity crate.
//!
//! The generation engine itself never fails; these errors describe the
//! conditions it recovers from internally, so callers that build providers
//! directly can see why a lookup was refused.

use thiserror::Error;

/// Errors raised while building a locale data provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// No data is bundled for the requested locale tag.
    #[error("no locale data bundled for tag '{tag}'")]
    UnknownTag {
        /// The locale tag that was requested.
        tag: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_error_unknown_tag_formats_correctly() {
        let err = LocaleError::UnknownTag {
            tag: "en_NG".to_owned(),
        };
        assert_eq!(err.to_string(), "no locale data bundled for tag 'en_NG'");
    }
}
