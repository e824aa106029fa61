use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::core::chromosome::ChromosomeTable;
use crate::core::types::{MatchMode, Outcome};
use crate::parsing::lines::read_lines;
use crate::pipeline::persist_all;
use crate::transform::contigs::first_field;
use crate::transform::map::{ContigAssignment, MapTransformer};
use crate::utils::validation::validate_output_targets;

/// Default name of the contig listing
pub const DEFAULT_CONTIG_LISTING: &str = "contigs.txt";

/// Where the MAP pipeline writes its outputs.
///
/// Every target receives its own independent transform of the input. The
/// contig listing is rewritten for each target, so after the run it holds the
/// listing of the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapOutputs {
    pub contig_listing: PathBuf,
    pub targets: Vec<PathBuf>,
}

impl MapOutputs {
    /// `<stem>_anonymized.map` beside the input, `contigs.txt` in the working directory
    pub fn derive_from(input: &Path) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        let stem = stem.strip_suffix(".map").unwrap_or(&stem).to_string();

        Self {
            contig_listing: PathBuf::from(DEFAULT_CONTIG_LISTING),
            targets: vec![input.with_file_name(format!("{stem}_anonymized.map"))],
        }
    }

    pub(crate) fn all_paths(&self) -> Vec<&Path> {
        std::iter::once(self.contig_listing.as_path())
            .chain(self.targets.iter().map(PathBuf::as_path))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MapSummary {
    /// Lines in each transformed map
    pub lines: usize,
    /// Lines whose first field was a known chromosome accession
    pub chromosome_lines: usize,
    /// Contig labels in first-seen order
    pub contigs: Vec<ContigAssignment>,
    /// Number of transformed maps
    pub targets: usize,
}

/// Anonymize a MAP file once per output target
pub fn run_map(
    input: &Path,
    outputs: &MapOutputs,
    table: &ChromosomeTable,
    mode: MatchMode,
) -> Outcome<MapSummary> {
    if let Err(error) = validate_output_targets(&outputs.all_paths()) {
        return Outcome::Failed { error };
    }

    let lines = match read_lines(input) {
        Ok(lines) => lines,
        Err(error) => return Outcome::Failed { error },
    };
    info!(path = %input.display(), lines = lines.len(), %mode, "Read MAP file");

    let transformer = MapTransformer::new(table, mode);
    let mut transforms = Vec::with_capacity(outputs.targets.len());
    for target in &outputs.targets {
        debug!(output = %target.display(), "Transforming map");
        match transformer.transform(&lines) {
            Ok(transform) => transforms.push(transform),
            Err(error) => return Outcome::Failed { error },
        }
    }

    let summary = MapSummary {
        lines: lines.len(),
        chromosome_lines: lines
            .iter()
            .filter(|line| table.number_for(first_field(line)).is_some())
            .count(),
        contigs: transforms
            .first()
            .map(|t| t.contigs.clone())
            .unwrap_or_default(),
        targets: outputs.targets.len(),
    };

    let mut files: Vec<(&Path, &[String])> = Vec::with_capacity(transforms.len() * 2);
    for (target, transform) in outputs.targets.iter().zip(&transforms) {
        files.push((
            outputs.contig_listing.as_path(),
            transform.contig_listing.as_slice(),
        ));
        files.push((target.as_path(), transform.lines.as_slice()));
    }
    let (written, result) = persist_all(&files);

    Outcome::from_writes(written, result, summary)
}
