//! Input and output handling.
//!
//! - **Line files**: PED, MAP, rename logs, and contig listings are plain UTF-8
//!   text read and written whole. Inputs ending in `.gz` are decompressed.
//! - **Configuration**: rename rules, match mode, and an optional custom
//!   chromosome table, stored as JSON.
//!
//! Outputs are written to a temporary file next to the destination and then
//! moved into place, so an interrupted write never leaves a truncated file.

pub mod config;
pub mod lines;
