use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_config, OutputFormat};
use crate::core::chromosome::ChromosomeTable;

#[derive(Args)]
pub struct ChromosomesArgs {
    /// Custom chromosome table (JSON) instead of the embedded one
    #[arg(long)]
    pub chromosomes: Option<PathBuf>,

    /// JSON configuration naming a chromosome table
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute chromosomes subcommand
///
/// # Errors
///
/// Returns an error if the table cannot be loaded.
pub fn run(args: ChromosomesArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?.with_overrides(
        Vec::new(),
        Vec::new(),
        None,
        args.chromosomes,
    );
    let table = config.chromosome_table()?;

    match format {
        OutputFormat::Text => print_text_table(&table),
        OutputFormat::Json => println!("{}", table.to_json()?),
        OutputFormat::Tsv => print_tsv_table(&table),
    }

    Ok(())
}

fn print_text_table(table: &ChromosomeTable) {
    println!("Chromosome Table ({} accessions)", table.len());
    println!("{}", "=".repeat(60));
    for (accession, number) in table.pairs() {
        println!("  {accession:<20} -> {number}");
    }
}

fn print_tsv_table(table: &ChromosomeTable) {
    println!("accession\tchromosome");
    for (accession, number) in table.pairs() {
        println!("{accession}\t{number}");
    }
}
