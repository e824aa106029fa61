//! End-to-end PED and MAP processing.
//!
//! Both pipelines follow the same policy: read the input, run every
//! transformation in memory, then persist outputs one file at a time. The
//! result is an [`Outcome`](crate::core::types::Outcome):
//!
//! - `Success`: every output was written
//! - `Partial`: a write failed after earlier outputs were persisted
//! - `Failed`: nothing was written
//!
//! ## Example
//!
//! ```rust,no_run
//! use pedmap::core::rules::RuleSet;
//! use pedmap::pipeline::ped::{run_ped, PedOutputs};
//! use std::path::Path;
//!
//! let rules = RuleSet::from_lists(&["^F".to_string()], &["M".to_string()]).unwrap();
//! let input = Path::new("cohort.ped");
//! let outcome = run_ped(input, &PedOutputs::derive_from(input), &rules);
//! assert!(outcome.is_success());
//! ```

use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::error::PipelineError;
use crate::parsing::lines::write_lines;

pub mod map;
pub mod ped;

/// Persist files in order, stopping at the first failure.
///
/// Returns the paths written before the failure along with the failure itself.
fn persist_all(files: &[(&Path, &[String])]) -> (Vec<PathBuf>, Result<(), PipelineError>) {
    let mut written = Vec::with_capacity(files.len());

    for &(path, lines) in files {
        if let Err(e) = write_lines(path, lines) {
            return (written, Err(e));
        }
        info!(path = %path.display(), lines = lines.len(), "Wrote output");
        written.push(path.to_path_buf());
    }

    (written, Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_all_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("missing").join("bad.txt");
        let after = dir.path().join("after.txt");
        let lines = vec!["a".to_string()];

        let (written, result) = persist_all(&[
            (good.as_path(), lines.as_slice()),
            (bad.as_path(), lines.as_slice()),
            (after.as_path(), lines.as_slice()),
        ]);

        assert_eq!(written, vec![good.clone()]);
        assert!(result.is_err());
        assert!(good.exists());
        assert!(!after.exists());
    }
}
