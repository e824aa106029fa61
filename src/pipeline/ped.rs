use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::core::rules::RuleSet;
use crate::core::types::Outcome;
use crate::parsing::lines::read_lines;
use crate::pipeline::persist_all;
use crate::transform::ped::NameRewriter;
use crate::utils::validation::validate_output_targets;

/// Where the PED pipeline writes its two outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PedOutputs {
    pub rewritten: PathBuf,
    pub rename_log: PathBuf,
}

impl PedOutputs {
    /// `<stem>_Modified.ped` and `<stem>_Modified.txt` beside the input
    pub fn derive_from(input: &Path) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        // `cohort.ped.gz` -> `cohort`
        let stem = stem.strip_suffix(".ped").unwrap_or(&stem).to_string();

        Self {
            rewritten: input.with_file_name(format!("{stem}_Modified.ped")),
            rename_log: input.with_file_name(format!("{stem}_Modified.txt")),
        }
    }

    pub(crate) fn all_paths(&self) -> [&Path; 2] {
        [self.rewritten.as_path(), self.rename_log.as_path()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PedSummary {
    /// Lines in the rewritten file
    pub lines: usize,
    /// Entries in the rename log (non-blank lines)
    pub logged: usize,
    /// Identifiers changed by a rule
    pub renamed: usize,
    /// Blank lines carried through without a log entry
    pub blank: usize,
}

/// Rename PED sample identifiers and write the rewritten file and rename log
pub fn run_ped(input: &Path, outputs: &PedOutputs, rules: &RuleSet) -> Outcome<PedSummary> {
    if let Err(error) = validate_output_targets(&outputs.all_paths()) {
        return Outcome::Failed { error };
    }

    let lines = match read_lines(input) {
        Ok(lines) => lines,
        Err(error) => return Outcome::Failed { error },
    };
    info!(path = %input.display(), lines = lines.len(), rules = rules.len(), "Read PED file");

    let rewrite = NameRewriter::new(rules).rewrite(&lines);
    let summary = PedSummary {
        lines: rewrite.lines.len(),
        logged: rewrite.rename_log.len(),
        renamed: rewrite.renamed,
        blank: rewrite.lines.len() - rewrite.rename_log.len(),
    };

    if summary.blank > 0 {
        warn!(
            blank = summary.blank,
            "Blank PED lines have no rename log entry; log and rewritten file differ in length"
        );
    }

    let (written, result) = persist_all(&[
        (outputs.rewritten.as_path(), rewrite.lines.as_slice()),
        (outputs.rename_log.as_path(), rewrite.rename_log.as_slice()),
    ]);

    Outcome::from_writes(written, result, summary)
}
