//! Fmt command: rewrite files in normalized gly notation.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{GlyError, Result};
use crate::output::{display_path, Printer};
use crate::render::document_to_gly;

use super::Settings;

/// Print files in normalized gly notation
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Files to format
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Rewrite the files in place instead of printing
    #[arg(long, short)]
    pub write: bool,
}

pub fn run(args: FmtArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    for file in &args.files {
        let document = settings.parser.parse(file)?;
        let formatted = document_to_gly(&document, settings.parser.separator());

        if args.write {
            fs::write(file, formatted).map_err(|e| GlyError::Io {
                path: file.clone(),
                message: format!("Failed to write file: {}", e),
            })?;
            printer.status("Formatted", &display_path(file));
        } else {
            print!("{}", formatted);
        }
    }
    Ok(())
}
