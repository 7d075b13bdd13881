//! CLI error type

use std::io;
use std::path::PathBuf;

use examtick_common::ExamInputError;

/// Anything that stops the CLI from producing output
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode settings: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Input(#[from] ExamInputError),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
