//! Error types for the identity CLI.

use thiserror::Error;

/// Errors surfaced by the CLI settings and output flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings could not be loaded from flags, environment or file.
    #[error("invalid configuration: {message}")]
    Config {
        /// Loader error message.
        message: String,
    },
    /// The requested identity count was zero.
    #[error("count must be at least 1")]
    InvalidCount,
    /// Records could not be serialised to JSON.
    #[error("failed to serialise identities: {message}")]
    Serialize {
        /// Serialiser error message.
        message: String,
    },
    /// Output could not be written.
    #[error("failed to write output: {message}")]
    Write {
        /// I/O error message.
        message: String,
    },
}
