//! Error types emitted by the Airwave CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace denies `clippy::result_large_err`.

use std::sync::Arc;

use airwave_core::ConfigError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Airwave CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a regular file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },
    /// An input file could not be opened.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },
    /// An input file did not hold the expected JSON document.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Decoder failure.
        source: serde_json::Error,
    },
    /// The scoring configuration failed validation.
    #[error("scoring configuration is invalid: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// The ranking could not be encoded as JSON.
    #[error("failed to serialize ranking: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// The ranking could not be written to the output stream.
    #[error("failed to write ranking output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
