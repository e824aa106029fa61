use std::path::{Path, PathBuf};

use clap::Args;
use tracing::warn;

use crate::cli::{finish, load_config, OutputFormat};
use crate::pipeline::ped::{run_ped, PedOutputs, PedSummary};

#[derive(Args)]
pub struct RenameArgs {
    /// Input PED file (optionally gzip-compressed)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Pattern matched against sample identifiers; repeat or separate with commas
    #[arg(short, long = "pattern", value_delimiter = ',')]
    pub patterns: Vec<String>,

    /// Replacement for the pattern at the same position; repeat or separate with commas
    #[arg(short, long = "replacement", value_delimiter = ',')]
    pub replacements: Vec<String>,

    /// JSON configuration with patterns and replacements
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Rewritten PED file [default: <stem>_Modified.ped]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rename log [default: <stem>_Modified.txt]
    #[arg(long)]
    pub log: Option<PathBuf>,
}

/// Execute rename subcommand
///
/// # Errors
///
/// Returns an error if the rules are invalid, the input cannot be read, or an
/// output cannot be written.
pub fn run(args: RenameArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?.with_overrides(
        args.patterns,
        args.replacements,
        None,
        None,
    );
    let rules = config.rule_set()?;
    if rules.is_empty() {
        warn!("No rename rules given; identifiers are copied unchanged");
    }

    let mut outputs = PedOutputs::derive_from(&args.input);
    if let Some(path) = &args.output {
        outputs.rewritten.clone_from(path);
    }
    if let Some(path) = &args.log {
        outputs.rename_log.clone_from(path);
    }

    let (summary, written) = finish(run_ped(&args.input, &outputs, &rules), "PED rewrite")?;
    print_summary(&args.input, &summary, &written, format)
}

pub(crate) fn print_summary(
    input: &Path,
    summary: &PedSummary,
    written: &[PathBuf],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_summary(input, summary, written),
        OutputFormat::Json => print_json_summary(input, summary, written)?,
        OutputFormat::Tsv => print_tsv_summary(input, summary),
    }
    Ok(())
}

fn print_text_summary(input: &Path, summary: &PedSummary, written: &[PathBuf]) {
    println!("PED Rewrite");
    println!("{}", "=".repeat(60));
    println!("\nInput: {}", input.display());
    println!("  Lines: {}", summary.lines);
    println!("  Logged identifiers: {}", summary.logged);
    println!("  Renamed identifiers: {}", summary.renamed);
    if summary.blank > 0 {
        println!("  Blank lines (not logged): {}", summary.blank);
    }

    println!("\nWritten:");
    for path in written {
        println!("  {}", path.display());
    }
}

fn print_json_summary(
    input: &Path,
    summary: &PedSummary,
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

fn print_tsv_summary(input: &Path, summary: &PedSummary) {
    println!("input\tlines\tlogged\trenamed\tblank");
    println!(
        "{}\t{}\t{}\t{}\t{}",
        input.display(),
        summary.lines,
        summary.logged,
        summary.renamed,
        summary.blank
    );
}
