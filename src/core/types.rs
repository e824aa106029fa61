use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::error::PipelineError;

/// How identifiers are matched by the substitution passes
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Identifiers are regular expressions; `.` in `CM007758.1` matches any character.
    /// Replacements may reference capture groups (`$1`, `${name}`).
    #[default]
    Regex,
    /// Identifiers and replacements are taken verbatim.
    Literal,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regex => write!(f, "regex"),
            Self::Literal => write!(f, "literal"),
        }
    }
}

/// Result of running a pipeline end to end.
///
/// All transformation work happens in memory before the first output is
/// written, so a `Failed` outcome never leaves files behind. `Partial` means
/// some outputs were persisted before a later write failed; `written` lists
/// exactly which ones.
#[derive(Debug)]
pub enum Outcome<T> {
    Success {
        written: Vec<PathBuf>,
        summary: T,
    },
    Partial {
        written: Vec<PathBuf>,
        summary: T,
        error: PipelineError,
    },
    Failed {
        error: PipelineError,
    },
}

impl<T> Outcome<T> {
    /// Build an outcome from the files persisted so far and the write result
    #[must_use]
    pub fn from_writes(
        written: Vec<PathBuf>,
        result: Result<(), PipelineError>,
        summary: T,
    ) -> Self {
        match result {
            Ok(()) => Self::Success { written, summary },
            Err(error) if written.is_empty() => Self::Failed { error },
            Err(error) => Self::Partial {
                written,
                summary,
                error,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Files persisted by this run
    pub fn written(&self) -> &[PathBuf] {
        match self {
            Self::Success { written, .. } | Self::Partial { written, .. } => written,
            Self::Failed { .. } => &[],
        }
    }

    pub fn summary(&self) -> Option<&T> {
        match self {
            Self::Success { summary, .. } | Self::Partial { summary, .. } => Some(summary),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&PipelineError> {
        match self {
            Self::Success { .. } => None,
            Self::Partial { error, .. } | Self::Failed { error } => Some(error),
        }
    }
}
