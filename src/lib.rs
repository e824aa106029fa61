//! # pedmap
//!
//! A library for renaming sample identifiers in pedigree (PED) files and
//! anonymizing chromosome and contig names in linkage map (MAP) files.
//!
//! Sharing genotype data often means hiding where it came from: sample names
//! carry family or site codes, and map files name the exact assembly
//! accessions and scaffolds the markers were called against. `pedmap` rewrites
//! both files deterministically so the same inputs always produce the same
//! anonymized outputs.
//!
//! ## Features
//!
//! - **Rule-based renaming**: ordered regex rules, first rule that changes an identifier wins
//! - **Rename log**: the final identifier of every PED record, in input order
//! - **Chromosome numbering**: known accessions become `1`, `2`, ... by table position
//! - **Contig labelling**: scaffolds become `contig1`, `contig2`, ... in first-seen order
//! - **Safe outputs**: all work happens in memory and files are replaced atomically
//!
//! ## Example
//!
//! ```rust
//! use pedmap::{NameRewriter, RuleSet};
//!
//! let rules = RuleSet::from_lists(&["^F".to_string()], &["M".to_string()]).unwrap();
//! let result = NameRewriter::new(&rules).rewrite(&["FAM1 0 0 1 2", "XAM1 0 0 1 2"]);
//!
//! assert_eq!(result.lines[0], "MAM1\t0\t0\t1\t2");
//! assert_eq!(result.rename_log, vec!["MAM1", "XAM1"]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Rules, chromosome table, shared types and errors
//! - [`transform`]: In-memory PED and MAP transformations
//! - [`parsing`]: Line file I/O and JSON configuration
//! - [`pipeline`]: End-to-end processing with uniform outcomes
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod pipeline;
pub mod transform;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::chromosome::ChromosomeTable;
pub use crate::core::error::PipelineError;
pub use crate::core::rules::{PatternRule, RuleSet};
pub use crate::core::types::*;
pub use crate::transform::map::{MapTransform, MapTransformer};
pub use crate::transform::ped::{NameRewriter, PedRewrite};
