//! List command implementation.

use std::io;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::expand_paths;
use crate::error::Result;
use crate::list::{ListFormat, Lister};

use super::Settings;

/// List scores contained in files
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Files (or directories with --recursive) to list
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Recursively traverse directories
    #[arg(long, short)]
    pub recursive: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value_t)]
    pub format: ListFormat,
}

/// Returns false if any file could not be listed.
pub fn run(args: ListArgs, settings: &Settings) -> Result<bool> {
    let files = expand_paths(&args.files, args.recursive, &settings.config);

    let mut lister = Lister::new(files, args.format, settings.parser.clone());
    lister.list(&mut io::stdout().lock(), &mut io::stderr().lock())?;

    Ok(!lister.has_errors())
}
