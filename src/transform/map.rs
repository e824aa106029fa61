use serde::Serialize;
use tracing::debug;

use crate::core::chromosome::ChromosomeTable;
use crate::core::error::PipelineError;
use crate::core::types::MatchMode;
use crate::transform::contigs::{extract_unique_contigs, first_field};
use crate::transform::substitution::SubstitutionEngine;

/// Anonymized label for the contig first seen at `index`
pub fn contig_label(index: usize) -> String {
    format!("contig{}", index + 1)
}

/// An original contig identifier and the label it was replaced with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContigAssignment {
    pub original: String,
    pub label: String,
}

/// Output of one [`MapTransformer::transform`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTransform {
    /// Lines after both substitution passes
    pub lines: Vec<String>,

    /// First field of every transformed line, one per line
    pub contig_listing: Vec<String>,

    /// Contig labels in first-seen order
    pub contigs: Vec<ContigAssignment>,
}

/// Replaces chromosome accessions with numbers and contig identifiers with
/// sequential `contig<N>` labels.
///
/// The chromosome pass runs first. Contig identifiers are captured from the
/// original text, so an identifier whose text the chromosome pass rewrote will
/// no longer match in the contig pass and keeps its rewritten form. Accessions
/// themselves are longer than two characters and therefore also consume a
/// contig number even though the chromosome pass has already replaced them.
#[derive(Debug, Clone)]
pub struct MapTransformer<'a> {
    table: &'a ChromosomeTable,
    engine: SubstitutionEngine,
}

impl<'a> MapTransformer<'a> {
    pub fn new(table: &'a ChromosomeTable, mode: MatchMode) -> Self {
        Self {
            table,
            engine: SubstitutionEngine::new(mode),
        }
    }

    /// Transform MAP lines. The input is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidPattern` if an accession or contig
    /// identifier is not a valid pattern in [`MatchMode::Regex`].
    pub fn transform<S: AsRef<str>>(&self, input: &[S]) -> Result<MapTransform, PipelineError> {
        let originals = extract_unique_contigs(input);
        let mut lines: Vec<String> = input.iter().map(|l| l.as_ref().to_string()).collect();

        let chromosome_pairs: Vec<(&str, String)> = self.table.pairs().collect();
        self.engine.apply(&mut lines, &chromosome_pairs)?;

        let contigs: Vec<ContigAssignment> = originals
            .into_iter()
            .enumerate()
            .map(|(i, original)| ContigAssignment {
                original,
                label: contig_label(i),
            })
            .collect();
        let contig_pairs: Vec<(&str, &str)> = contigs
            .iter()
            .map(|c| (c.original.as_str(), c.label.as_str()))
            .collect();
        self.engine.apply(&mut lines, &contig_pairs)?;

        let contig_listing = lines
            .iter()
            .map(|line| first_field(line).to_string())
            .collect();

        debug!(
            lines = lines.len(),
            contigs = contigs.len(),
            mode = %self.engine.mode(),
            "Transformed map"
        );

        Ok(MapTransform {
            lines,
            contig_listing,
            contigs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ChromosomeTable {
        ChromosomeTable::load_embedded().unwrap()
    }

    #[test]
    fn test_contig_renaming() {
        let table = table();
        let input = [
            "scaffold_10\tm1\t0\t100",
            "scaffold_2\tm2\t0\t200",
            "scaffold_10\tm3\t0\t300",
        ];
        let result = MapTransformer::new(&table, MatchMode::Regex)
            .transform(&input)
            .unwrap();

        assert_eq!(
            result.contig_listing,
            vec!["contig1", "contig2", "contig1"]
        );
        assert_eq!(result.lines[1], "contig2\tm2\t0\t200");
        assert_eq!(result.contigs[0].original, "scaffold_10");
        assert_eq!(result.contigs[0].label, "contig1");
    }

    #[test]
    fn test_chromosome_accession_to_number() {
        let table = table();
        let input = ["CM007758.1\tm1\t0\t100", "CM007780.1\tm2\t0\t200"];
        let result = MapTransformer::new(&table, MatchMode::Regex)
            .transform(&input)
            .unwrap();

        assert_eq!(result.lines[0], "2\tm1\t0\t100");
        assert_eq!(result.contig_listing, vec!["2", "24"]);
    }

    #[test]
    fn test_accessions_consume_contig_numbers() {
        let table = table();
        let input = ["CM007757.1\tm1\t0\t1", "scaffold_9\tm2\t0\t2"];
        let result = MapTransformer::new(&table, MatchMode::Regex)
            .transform(&input)
            .unwrap();

        assert_eq!(result.contig_listing, vec!["1", "contig2"]);
    }

    #[test]
    fn test_short_names_untouched() {
        let table = table();
        let input = ["1\tm1\t0\t1", "X\tm2\t0\t2", ""];
        let result = MapTransformer::new(&table, MatchMode::Regex)
            .transform(&input)
            .unwrap();

        assert_eq!(result.lines, vec!["1\tm1\t0\t1", "X\tm2\t0\t2", ""]);
        assert_eq!(result.contig_listing, vec!["1", "X", ""]);
        assert!(result.contigs.is_empty());
    }

    #[test]
    fn test_contig_replaced_in_every_column() {
        let table = table();
        let input = ["tig001\ttig001_m1\t0\t1"];
        let result = MapTransformer::new(&table, MatchMode::Literal)
            .transform(&input)
            .unwrap();

        assert_eq!(result.lines, vec!["contig1\tcontig1_m1\t0\t1"]);
    }

    #[test]
    fn test_transform_is_repeatable() {
        let table = table();
        let input = vec!["scaffold_1\tm1".to_string(), "CM007760.1\tm2".to_string()];
        let transformer = MapTransformer::new(&table, MatchMode::Regex);

        let first = transformer.transform(&input).unwrap();
        let second = transformer.transform(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(input[0], "scaffold_1\tm1");
    }

    #[test]
    fn test_invalid_contig_pattern() {
        let table = table();
        let input = ["scaf(fold\tm1"];

        let err = MapTransformer::new(&table, MatchMode::Regex)
            .transform(&input)
            .unwrap_err();
        assert!(matches!(err, PipelineError::InvalidPattern { .. }));

        let result = MapTransformer::new(&table, MatchMode::Literal)
            .transform(&input)
            .unwrap();
        assert_eq!(result.contig_listing, vec!["contig1"]);
    }
}
