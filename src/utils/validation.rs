//! Centralized validation helpers.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::core::chromosome::TableError;
use crate::core::error::PipelineError;

/// Check that patterns and replacements can be zipped into rules.
///
/// # Errors
///
/// Returns `PipelineError::ConfigurationMismatch` if the lists differ in length.
///
/// # Examples
///
/// ```
/// use pedmap::utils::validation::validate_rule_lists;
///
/// let patterns = vec!["^F".to_string()];
/// assert!(validate_rule_lists(&patterns, &["M".to_string()]).is_ok());
/// assert!(validate_rule_lists(&patterns, &[]).is_err());
/// ```
pub fn validate_rule_lists(
    patterns: &[String],
    replacements: &[String],
) -> Result<(), PipelineError> {
    if patterns.len() == replacements.len() {
        Ok(())
    } else {
        Err(PipelineError::ConfigurationMismatch {
            patterns: patterns.len(),
            replacements: replacements.len(),
        })
    }
}

/// Absolute, lexically resolved form of an output path.
///
/// Relative paths are joined to the working directory, `.` components are
/// dropped and `..` removes the preceding component. Symlinks are not followed.
fn normalize_output_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() && !resolved.has_root() {
                    resolved.push(component);
                }
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// Reject output sets where two outputs would land on the same file.
///
/// # Errors
///
/// Returns `PipelineError::OutputCollision` naming the first repeated path.
pub fn validate_output_targets(paths: &[&Path]) -> Result<(), PipelineError> {
    let mut seen = HashSet::new();
    for path in paths {
        if !seen.insert(normalize_output_path(path)) {
            return Err(PipelineError::OutputCollision(path.to_path_buf()));
        }
    }
    Ok(())
}

/// Validate a chromosome accession list.
///
/// # Errors
///
/// Returns `TableError::Invalid` if the list is empty, or an entry is blank or
/// repeated.
pub fn validate_accessions(accessions: &[String]) -> Result<(), TableError> {
    if accessions.is_empty() {
        return Err(TableError::Invalid("no accessions".to_string()));
    }

    let mut seen = HashSet::new();
    for (i, accession) in accessions.iter().enumerate() {
        if accession.trim().is_empty() {
            return Err(TableError::Invalid(format!(
                "accession at index {i} is empty"
            )));
        }
        if !seen.insert(accession.as_str()) {
            return Err(TableError::Invalid(format!(
                "duplicate accession '{accession}' at index {i}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rule_lists() {
        let patterns = vec!["a".to_string(), "b".to_string()];
        let replacements = vec!["x".to_string(), "y".to_string()];
        assert!(validate_rule_lists(&patterns, &replacements).is_ok());
        assert!(validate_rule_lists(&[], &[]).is_ok());
        assert!(matches!(
            validate_rule_lists(&patterns, &replacements[..1]),
            Err(PipelineError::ConfigurationMismatch {
                patterns: 2,
                replacements: 1
            })
        ));
    }

    #[test]
    fn test_output_collision() {
        let contigs = Path::new("contigs.txt");
        let map = Path::new("out/anonymized.map");
        assert!(validate_output_targets(&[contigs, map]).is_ok());

        let dotted = Path::new("./contigs.txt");
        match validate_output_targets(&[contigs, map, dotted]) {
            Err(PipelineError::OutputCollision(path)) => assert_eq!(path, dotted),
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn test_output_collision_across_spellings() {
        let relative = Path::new("contigs.txt");
        let absolute = std::env::current_dir().unwrap().join("contigs.txt");
        assert!(matches!(
            validate_output_targets(&[relative, absolute.as_path()]),
            Err(PipelineError::OutputCollision(_))
        ));

        let detour = Path::new("out/../contigs.txt");
        assert!(matches!(
            validate_output_targets(&[relative, detour]),
            Err(PipelineError::OutputCollision(_))
        ));

        let sibling = Path::new("out/contigs.txt");
        assert!(validate_output_targets(&[relative, sibling]).is_ok());
    }

    #[test]
    fn test_normalize_output_path() {
        assert_eq!(
            normalize_output_path(Path::new("/data/./run/../cohort.map")),
            Path::new("/data/cohort.map")
        );
        assert_eq!(
            normalize_output_path(Path::new("/../cohort.map")),
            Path::new("/cohort.map")
        );
    }

    #[test]
    fn test_validate_accessions() {
        assert!(validate_accessions(&["CM007757.1".to_string()]).is_ok());
        assert!(validate_accessions(&[]).is_err());
        assert!(validate_accessions(&[" ".to_string()]).is_err());
        assert!(validate_accessions(&["A".to_string(), "A".to_string()]).is_err());
    }
}
