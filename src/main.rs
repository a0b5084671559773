use clap::Parser;
use miette::Result;
use tracing_subscriber::EnvFilter;

use gly::cli::{Cli, Commands, Settings};
use gly::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let printer = Printer::new();
    let config = gly::load_config(".")?;
    let settings = Settings::new(cli.separator, config)?;

    match cli.command {
        Commands::Gabc(args) => gly::cli::gabc::run(args, &settings, &printer)?,
        Commands::Preview(args) => gly::cli::preview::run(args, &settings, &printer)?,
        Commands::List(args) => {
            if !gly::cli::list::run(args, &settings)? {
                printer.error("Failed", "some files could not be listed");
                std::process::exit(1);
            }
        }
        Commands::Dump(args) => gly::cli::dump::run(args, &settings)?,
        Commands::Fmt(args) => gly::cli::fmt::run(args, &settings, &printer)?,
        Commands::Completions(args) => gly::cli::completions::run(args)?,
    }

    Ok(())
}
