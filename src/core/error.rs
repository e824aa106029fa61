use std::path::PathBuf;

use thiserror::Error;

use crate::core::chromosome::TableError;

/// Errors raised while rewriting PED files or anonymizing MAP files.
///
/// Both pipelines share this type so that a failure is reported the same way
/// whichever file was being processed.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration mismatch: {patterns} patterns but {replacements} replacements")]
    ConfigurationMismatch { patterns: usize, replacements: usize },

    #[error("Output collision: {} is targeted by more than one output", .0.display())]
    OutputCollision(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Table(#[from] TableError),
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
