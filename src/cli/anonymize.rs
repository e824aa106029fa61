use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{finish, load_config, OutputFormat};
use crate::core::types::MatchMode;
use crate::pipeline::map::{run_map, MapOutputs, MapSummary, DEFAULT_CONTIG_LISTING};

#[derive(Args)]
pub struct AnonymizeArgs {
    /// Input MAP file (optionally gzip-compressed)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Transformed MAP file; repeat to write several independently transformed copies
    /// [default: <stem>_anonymized.map]
    #[arg(short, long = "output")]
    pub outputs: Vec<PathBuf>,

    /// Contig listing, rewritten for every output
    #[arg(long, default_value = DEFAULT_CONTIG_LISTING)]
    pub contigs: PathBuf,

    /// How accessions and contig identifiers are matched (overrides the configuration)
    #[arg(long, value_enum)]
    pub mode: Option<MatchMode>,

    /// Custom chromosome table (JSON)
    #[arg(long)]
    pub chromosomes: Option<PathBuf>,

    /// JSON configuration with match mode and chromosome table
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute anonymize subcommand
///
/// # Errors
///
/// Returns an error if the configuration or chromosome table is invalid, the
/// input cannot be read, a pattern does not compile, or an output cannot be
/// written.
pub fn run(args: AnonymizeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?.with_overrides(
        Vec::new(),
        Vec::new(),
        args.mode,
        args.chromosomes,
    );
    let table = config.chromosome_table()?;

    let mut outputs = MapOutputs::derive_from(&args.input);
    outputs.contig_listing = args.contigs;
    if !args.outputs.is_empty() {
        outputs.targets = args.outputs;
    }

    let outcome = run_map(&args.input, &outputs, &table, config.match_mode);
    let (summary, written) = finish(outcome, "MAP anonymization")?;
    print_summary(&args.input, &summary, &written, format)
}

pub(crate) fn print_summary(
    input: &Path,
    summary: &MapSummary,
    written: &[PathBuf],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_summary(input, summary, written),
        OutputFormat::Json => print_json_summary(input, summary, written)?,
        OutputFormat::Tsv => print_tsv_summary(summary),
    }
    Ok(())
}

fn print_text_summary(input: &Path, summary: &MapSummary, written: &[PathBuf]) {
    println!("MAP Anonymization");
    println!("{}", "=".repeat(60));
    println!("\nInput: {}", input.display());
    println!("  Lines: {}", summary.lines);
    println!("  Chromosome accession lines: {}", summary.chromosome_lines);
    println!("  Contig labels: {}", summary.contigs.len());
    println!("  Outputs: {}", summary.targets);

    if !summary.contigs.is_empty() {
        println!("\nContigs:");
        for contig in &summary.contigs {
            println!("  {} -> {}", contig.original, contig.label);
        }
    }

    println!("\nWritten:");
    for path in written {
        println!("  {}", path.display());
    }
}

fn print_json_summary(
    input: &Path,
    summary: &MapSummary,
    written: &[PathBuf],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": input.display().to_string(),
        "summary": summary,
        "written": written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(summary: &MapSummary) {
    println!("original\tlabel");
    for contig in &summary.contigs {
        println!("{}\t{}", contig.original, contig.label);
    }
}
