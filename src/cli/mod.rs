pub mod completions;
pub mod dump;
pub mod fmt;
pub mod gabc;
pub mod list;
pub mod preview;

use clap::{Parser as ClapParser, Subcommand};

use crate::discovery::Config;
use crate::error::Result;
use crate::parser::Parser;

/// gly - convert gly chant notation to gabc and build previews
#[derive(ClapParser, Debug)]
#[command(name = "gly")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Syllable separator (default is double dash "--")
    #[arg(long, short, global = true)]
    pub separator: Option<String>,

    /// Log filter, e.g. "debug" or "gly::parser=trace" (RUST_LOG wins if set)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert gly to gabc
    Gabc(gabc::GabcArgs),

    /// Convert to gabc AND generate a PDF preview
    Preview(preview::PreviewArgs),

    /// List scores contained in files
    List(list::ListArgs),

    /// Print the parsed document as JSON or YAML
    Dump(dump::DumpArgs),

    /// Print files in normalized gly notation
    Fmt(fmt::FmtArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Settings shared by all commands: project config and the parser built
/// from the effective separator.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    pub parser: Parser,
}

impl Settings {
    /// Resolve settings; a separator given on the command line beats the
    /// one from gly.yaml.
    pub fn new(separator: Option<String>, config: Config) -> Result<Self> {
        let parser = match separator.or_else(|| config.separator.clone()) {
            Some(separator) => Parser::with_separator(separator)?,
            None => Parser::new(),
        };
        Ok(Self { config, parser })
    }
}
