//! gabc command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{DocumentGabcConvertor, GabcOptions};

use super::Settings;

/// Convert gly to gabc
#[derive(Args, Debug)]
pub struct GabcArgs {
    /// Input files to convert
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output file name (used as the stem of each score's file name)
    #[arg(long, short)]
    pub output: Option<String>,

    /// Output directory
    #[arg(long, short = 'd')]
    pub output_directory: Option<PathBuf>,
}

pub fn run(args: GabcArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    let options = GabcOptions {
        output_stem: args.output.clone(),
        output_directory: args
            .output_directory
            .clone()
            .or_else(|| settings.config.output_directory.clone()),
        suffix_always: false,
    };

    let mut total = 0;
    for file in &args.files {
        let document = settings.parser.parse(file)?;
        if document.scores().next().is_none() {
            printer.warning("Skipped", &format!("{}: no scores", display_path(file)));
            continue;
        }
        let written = DocumentGabcConvertor::new(&document, options.clone()).convert()?;

        for (_, path) in &written {
            printer.status(
                "Converted",
                &format!("{} -> {}", display_path(file), display_path(path)),
            );
        }
        total += written.len();
    }

    printer.status("Finished", &plural(total, "score", "scores"));
    Ok(())
}
