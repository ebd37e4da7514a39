//! Error types emitted by the Placewise CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use placewise_core::PlaceError;
use placewise_notify::SettingsError;
use placewise_scorer::ScoreWeightsError;
use thiserror::Error;

/// Errors emitted by the Placewise CLI.
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
        field: &'static str,
        env: &'static str,
    },
    /// A numeric option is outside its accepted range.
    #[error("{field} must be a positive, finite number (got {value})")]
    InvalidOption { field: &'static str, value: f64 },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the request file failed.
    #[error("failed to open request at {path:?}: {source}")]
    OpenRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse request JSON at {path:?}: {source}")]
    ParseRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The request carried invalid place data.
    #[error("request in {path:?} has invalid place data: {source}")]
    InvalidRequest {
        path: Utf8PathBuf,
        #[source]
        source: PlaceError,
    },
    /// The request carried unusable alert thresholds.
    #[error("request in {path:?} has invalid alert settings: {source}")]
    InvalidSettings {
        path: Utf8PathBuf,
        #[source]
        source: SettingsError,
    },
    /// The request carried unusable score weights.
    #[error("request in {path:?} has invalid weights: {source}")]
    InvalidWeights {
        path: Utf8PathBuf,
        #[source]
        source: ScoreWeightsError,
    },
    /// Serialising the response failed.
    #[error("failed to serialise response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the response failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
