use clap::Parser;
use tracing_subscriber::EnvFilter;

use pedmap::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("pedmap=debug,info")
    } else {
        EnvFilter::new("pedmap=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Rename(args) => {
            cli::rename::run(args, cli.format)?;
        }
        cli::Commands::Anonymize(args) => {
            cli::anonymize::run(args, cli.format)?;
        }
        cli::Commands::Run(args) => {
            cli::run::run(args, cli.format)?;
        }
        cli::Commands::Chromosomes(args) => {
            cli::chromosomes::run(args, cli.format)?;
        }
    }

    Ok(())
}
