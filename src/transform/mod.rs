//! In-memory transformations of PED and MAP lines.
//!
//! - [`ped`]: rename the sample identifier column with a [`RuleSet`](crate::core::rules::RuleSet)
//! - [`map`]: replace chromosome accessions with numbers and contigs with `contig<N>` labels
//! - [`contigs`]: extract distinct contig identifiers from MAP lines
//! - [`substitution`]: the ordered replace-all engine used by the MAP passes
//!
//! ## Example
//!
//! ```rust
//! use pedmap::core::chromosome::ChromosomeTable;
//! use pedmap::core::types::MatchMode;
//! use pedmap::transform::map::MapTransformer;
//!
//! let table = ChromosomeTable::load_embedded().unwrap();
//! let map = ["CM007758.1\tsnp1\t0\t1200", "scaffold_7\tsnp2\t0\t88"];
//!
//! let result = MapTransformer::new(&table, MatchMode::Regex)
//!     .transform(&map)
//!     .unwrap();
//! assert_eq!(result.lines[0], "2\tsnp1\t0\t1200");
//! assert_eq!(result.contig_listing, vec!["2", "contig2"]);
//! ```

pub mod contigs;
pub mod map;
pub mod ped;
pub mod substitution;
