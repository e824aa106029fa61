//! JSON configuration for rename rules and map anonymization.
//!
//! ```json
//! {
//!   "patterns": ["^F", "^X"],
//!   "replacements": ["M", "Y"],
//!   "match_mode": "regex",
//!   "chromosomes": "tables/custom.json"
//! }
//! ```
//!
//! Every field is optional. A relative `chromosomes` path is resolved against
//! the directory containing the configuration file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::chromosome::ChromosomeTable;
use crate::core::error::PipelineError;
use crate::core::rules::RuleSet;
use crate::core::types::MatchMode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenameConfig {
    /// Rename patterns, in precedence order
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Replacement for the pattern at the same position
    #[serde(default)]
    pub replacements: Vec<String>,

    /// Matching mode for the map substitution passes
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Custom chromosome table (embedded table when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chromosomes: Option<PathBuf>,
}

impl RenameConfig {
    /// Load a configuration file
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Io` if the file cannot be read or
    /// `PipelineError::InvalidConfig` if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let content = std::fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
        let mut config = Self::from_json(&content)?;

        if let Some(base) = path.parent() {
            config.chromosomes = config.chromosomes.take().map(|table| {
                if table.is_relative() {
                    base.join(table)
                } else {
                    table
                }
            });
        }

        Ok(config)
    }

    /// Parse a configuration from JSON
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidConfig` for malformed JSON or unknown fields.
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        serde_json::from_str(json).map_err(|e| PipelineError::InvalidConfig(e.to_string()))
    }

    /// Apply command-line values on top of this configuration.
    ///
    /// Non-empty rule lists replace the configured lists as a whole, so a
    /// pattern from the command line is never paired with a replacement from
    /// the file.
    #[must_use]
    pub fn with_overrides(
        mut self,
        patterns: Vec<String>,
        replacements: Vec<String>,
        match_mode: Option<MatchMode>,
        chromosomes: Option<PathBuf>,
    ) -> Self {
        if !patterns.is_empty() || !replacements.is_empty() {
            self.patterns = patterns;
            self.replacements = replacements;
        }
        if let Some(mode) = match_mode {
            self.match_mode = mode;
        }
        if chromosomes.is_some() {
            self.chromosomes = chromosomes;
        }
        self
    }

    /// Validate and compile the rename rules
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::ConfigurationMismatch` or
    /// `PipelineError::InvalidPattern`.
    pub fn rule_set(&self) -> Result<RuleSet, PipelineError> {
        RuleSet::from_lists(&self.patterns, &self.replacements)
    }

    /// Load the configured chromosome table, or the embedded one
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Table` if the table cannot be loaded.
    pub fn chromosome_table(&self) -> Result<ChromosomeTable, PipelineError> {
        let table = match &self.chromosomes {
            Some(path) => ChromosomeTable::load_from_file(path)?,
            None => ChromosomeTable::load_embedded()?,
        };
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = RenameConfig::from_json(
            r#"{"patterns": ["^F"], "replacements": ["M"], "match_mode": "literal"}"#,
        )
        .unwrap();
        assert_eq!(config.patterns, vec!["^F"]);
        assert_eq!(config.match_mode, MatchMode::Literal);
        assert!(config.chromosomes.is_none());
        assert_eq!(config.rule_set().unwrap().len(), 1);
    }

    #[test]
    fn test_defaults() {
        let config = RenameConfig::from_json("{}").unwrap();
        assert_eq!(config, RenameConfig::default());
        assert!(config.rule_set().unwrap().is_empty());
        assert_eq!(config.chromosome_table().unwrap().len(), 24);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = RenameConfig::from_json(r#"{"pattern": ["^F"]}"#).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidConfig(_)));
    }

    #[test]
    fn test_mismatched_lists() {
        let config =
            RenameConfig::from_json(r#"{"patterns": ["^F", "^X"], "replacements": ["M"]}"#)
                .unwrap();
        assert!(matches!(
            config.rule_set(),
            Err(PipelineError::ConfigurationMismatch { .. })
        ));
    }

    #[test]
    fn test_overrides_replace_rule_lists() {
        let config = RenameConfig::from_json(r#"{"patterns": ["^F"], "replacements": ["M"]}"#)
            .unwrap()
            .with_overrides(
                vec!["^X".to_string()],
                vec!["Y".to_string()],
                Some(MatchMode::Literal),
                None,
            );
        assert_eq!(config.patterns, vec!["^X"]);
        assert_eq!(config.replacements, vec!["Y"]);
        assert_eq!(config.match_mode, MatchMode::Literal);

        let untouched = config.clone().with_overrides(Vec::new(), Vec::new(), None, None);
        assert_eq!(untouched, config);
    }

    #[test]
    fn test_relative_table_path_resolved() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("table.json"),
            r#"{"version": "1.0.0", "accessions": ["NC_1.1"]}"#,
        )
        .unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"chromosomes": "table.json"}"#).unwrap();

        let config = RenameConfig::load(&config_path).unwrap();
        assert_eq!(config.chromosomes, Some(dir.path().join("table.json")));
        assert_eq!(config.chromosome_table().unwrap().len(), 1);
    }
}
