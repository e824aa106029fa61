//! Command-line interface for pedmap.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **rename**: Rename sample identifiers in a PED file
//! - **anonymize**: Replace chromosome accessions and contig names in a MAP file
//! - **run**: Rename a PED file, then anonymize its MAP file, from one configuration
//! - **chromosomes**: Show the chromosome accession table
//!
//! ## Usage
//!
//! ```text
//! # Rename FAM* samples to MAM*
//! pedmap rename cohort.ped -p '^F' -r M
//!
//! # Several rules at once; the first rule that changes an identifier wins
//! pedmap rename cohort.ped -p '^F,^X' -r 'M,Y'
//!
//! # Anonymize a map into two independently named outputs
//! pedmap anonymize cohort.map -o public.map -o archive.map --contigs contigs.txt
//!
//! # Whole workflow from a configuration file, JSON summary
//! pedmap run --config rules.json cohort.ped cohort.map --format json
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::types::Outcome;
use crate::parsing::config::RenameConfig;

pub mod anonymize;
pub mod chromosomes;
pub mod rename;
pub mod run;

#[derive(Parser)]
#[command(name = "pedmap")]
#[command(version)]
#[command(about = "Rename PED sample identifiers and anonymize MAP chromosome and contig names")]
#[command(
    long_about = "pedmap rewrites PLINK-style pedigree (.ped) and linkage map (.map) files.\n\nIt provides:\n- Ordered, first-match-wins regex renaming of PED sample identifiers, with a rename log\n- Replacement of known chromosome accessions with chromosome numbers\n- Replacement of contig identifiers with sequential contig<N> labels"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rename sample identifiers in a PED file
    Rename(rename::RenameArgs),

    /// Anonymize chromosome and contig names in a MAP file
    Anonymize(anonymize::AnonymizeArgs),

    /// Rename a PED file, then anonymize a MAP file
    Run(run::RunArgs),

    /// Show the chromosome accession table
    Chromosomes(chromosomes::ChromosomesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a configuration file, or start from defaults
pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<RenameConfig> {
    match path {
        Some(path) => Ok(RenameConfig::load(path)?),
        None => Ok(RenameConfig::default()),
    }
}

/// Convert a pipeline outcome into the summary and written paths, or an error
/// that says which files, if any, were left on disk.
pub(crate) fn finish<T>(outcome: Outcome<T>, step: &str) -> anyhow::Result<(T, Vec<PathBuf>)> {
    match outcome {
        Outcome::Success { written, summary } => Ok((summary, written)),
        Outcome::Partial { written, error, .. } => {
            let written = written
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Err(anyhow::Error::new(error)
                .context(format!("{step} failed after writing {written}")))
        }
        Outcome::Failed { error } => Err(anyhow::Error::new(error)
            .context(format!("{step} failed; no files were written"))),
    }
}
