//! Core data types for PED renaming and MAP anonymization.
//!
//! - [`PatternRule`](rules::PatternRule), [`RuleSet`](rules::RuleSet): ordered rename rules
//! - [`ChromosomeTable`](chromosome::ChromosomeTable): accession to chromosome number catalog
//! - [`MatchMode`](types::MatchMode), [`Outcome`](types::Outcome): pipeline options and results
//! - [`PipelineError`](error::PipelineError): the error type shared by both pipelines
//!
//! ## Chromosome numbering
//!
//! The embedded table maps GenBank accessions to numbers by position:
//!
//! | Accession  | Number |
//! |------------|--------|
//! | CM007757.1 | 1      |
//! | CM007758.1 | 2      |
//! | ...        | ...    |
//! | CM007780.1 | 24     |

pub mod chromosome;
pub mod error;
pub mod rules;
pub mod types;
