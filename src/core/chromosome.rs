use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::utils::validation::validate_accessions;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read chromosome table: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse chromosome table: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid chromosome table: {0}")]
    Invalid(String),
}

/// Table version for compatibility checking
pub const TABLE_VERSION: &str = "1.0.0";

/// Number of accessions in the embedded table
pub const CHROMOSOME_COUNT: usize = 24;

/// Serializable table format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableData {
    pub version: String,
    pub accessions: Vec<String>,
}

/// Ordered catalog of chromosome accessions.
///
/// The accession at index `i` is always replaced by the decimal string `i + 1`.
/// A table is never modified after it is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromosomeTable {
    accessions: Vec<String>,
}

impl ChromosomeTable {
    /// Build a table from accessions in chromosome order
    ///
    /// # Errors
    ///
    /// Returns `TableError::Invalid` if the list is empty or has blank or
    /// duplicate entries.
    pub fn new(accessions: Vec<String>) -> Result<Self, TableError> {
        validate_accessions(&accessions)?;
        Ok(Self { accessions })
    }

    /// Load the embedded default table
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded JSON is malformed or does not hold
    /// exactly `CHROMOSOME_COUNT` accessions, which the build script rules out.
    pub fn load_embedded() -> Result<Self, TableError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_TABLE: &str = include_str!("../../catalogs/chromosomes.json");
        let table = Self::from_json(EMBEDDED_TABLE)?;
        if table.len() != CHROMOSOME_COUNT {
            return Err(TableError::Invalid(format!(
                "embedded table has {} accessions, expected {CHROMOSOME_COUNT}",
                table.len()
            )));
        }
        Ok(table)
    }

    /// Load a table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `TableError::ReadError` if the file cannot be read, or a parse or
    /// validation error for invalid content.
    pub fn load_from_file(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a table from JSON
    ///
    /// # Errors
    ///
    /// Returns `TableError::ParseError` for malformed JSON or
    /// `TableError::Invalid` if the accession list is unusable.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let data: TableData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != TABLE_VERSION {
            warn!(
                expected = TABLE_VERSION,
                found = %data.version,
                "Chromosome table version mismatch"
            );
        }

        Self::new(data.accessions)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&TableData {
            version: TABLE_VERSION.to_string(),
            accessions: self.accessions.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.accessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessions.is_empty()
    }

    pub fn accessions(&self) -> &[String] {
        &self.accessions
    }

    /// Chromosome number (1-based) for an exact accession
    pub fn number_for(&self, accession: &str) -> Option<usize> {
        self.accessions
            .iter()
            .position(|a| a == accession)
            .map(|i| i + 1)
    }

    /// Substitution pairs `(accession, number)` in table order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, String)> {
        self.accessions
            .iter()
            .enumerate()
            .map(|(i, accession)| (accession.as_str(), (i + 1).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_table() {
        let table = ChromosomeTable::load_embedded().unwrap();
        assert_eq!(table.len(), CHROMOSOME_COUNT);
        assert_eq!(table.accessions()[0], "CM007757.1");
        assert_eq!(table.accessions()[23], "CM007780.1");
        assert_eq!(table.number_for("CM007758.1"), Some(2));
    }

    #[test]
    fn test_pairs_are_positional() {
        let table = ChromosomeTable::load_embedded().unwrap();
        for (i, (accession, number)) in table.pairs().enumerate() {
            assert_eq!(accession, table.accessions()[i]);
            assert_eq!(number, (i + 1).to_string());
            assert_eq!(table.number_for(accession), Some(i + 1));
        }
        assert_eq!(table.number_for("chr1"), None);
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = ChromosomeTable::new(vec!["A.1".to_string(), "A.1".to_string()]);
        assert!(matches!(result, Err(TableError::Invalid(_))));
    }

    #[test]
    fn test_load_custom_table() {
        let mut temp = NamedTempFile::with_suffix(".json").unwrap();
        temp.write_all(br#"{"version": "1.0.0", "accessions": ["NC_1.1", "NC_2.1"]}"#)
            .unwrap();
        temp.flush().unwrap();

        let table = ChromosomeTable::load_from_file(temp.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.number_for("NC_2.1"), Some(2));
    }

    #[test]
    fn test_json_roundtrip() {
        let table = ChromosomeTable::load_embedded().unwrap();
        let reloaded = ChromosomeTable::from_json(&table.to_json().unwrap()).unwrap();
        assert_eq!(table, reloaded);
    }
}
