use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::{anonymize, finish, load_config, rename, OutputFormat};
use crate::pipeline::map::{run_map, MapOutputs, DEFAULT_CONTIG_LISTING};
use crate::pipeline::ped::{run_ped, PedOutputs};
use crate::utils::validation::validate_output_targets;

#[derive(Args)]
pub struct RunArgs {
    /// Input PED file
    #[arg(required = true)]
    pub ped: PathBuf,

    /// Input MAP file
    #[arg(required = true)]
    pub map: PathBuf,

    /// JSON configuration with patterns, replacements, match mode, and chromosome table
    #[arg(long, required = true)]
    pub config: PathBuf,

    /// Contig listing, rewritten for every MAP output
    #[arg(long, default_value = DEFAULT_CONTIG_LISTING)]
    pub contigs: PathBuf,

    /// Transformed MAP file; repeat for several copies [default: <stem>_anonymized.map]
    #[arg(long = "map-output")]
    pub map_outputs: Vec<PathBuf>,
}

/// Execute run subcommand.
///
/// The MAP step only starts once the PED step has written both of its outputs.
/// Outputs of both steps are checked against each other before anything is
/// written.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, two outputs share a path,
/// or either step fails.
pub fn run(args: RunArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(Some(args.config.as_path()))?;
    let rules = config.rule_set()?;
    let table = config.chromosome_table()?;

    let ped_outputs = PedOutputs::derive_from(&args.ped);
    let mut map_outputs = MapOutputs::derive_from(&args.map);
    map_outputs.contig_listing = args.contigs;
    if !args.map_outputs.is_empty() {
        map_outputs.targets = args.map_outputs;
    }

    let mut targets = ped_outputs.all_paths().to_vec();
    targets.extend(map_outputs.all_paths());
    validate_output_targets(&targets)?;

    let (ped_summary, ped_written) =
        finish(run_ped(&args.ped, &ped_outputs, &rules), "PED rewrite")?;
    info!(renamed = ped_summary.renamed, "PED step complete");

    let outcome = run_map(&args.map, &map_outputs, &table, config.match_mode);
    let (map_summary, map_written) = finish(outcome, "MAP anonymization")?;

    rename::print_summary(&args.ped, &ped_summary, &ped_written, format)?;
    anonymize::print_summary(&args.map, &map_summary, &map_written, format)
}
