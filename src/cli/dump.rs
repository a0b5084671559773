//! Dump command: the parsed document as JSON or YAML.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{GlyError, Result};
use crate::types::Document;

use super::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DumpFormat {
    #[default]
    Json,
    Yaml,
}

/// Print the parsed document as JSON or YAML
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Files to dump
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: DumpFormat,
}

pub fn run(args: DumpArgs, settings: &Settings) -> Result<()> {
    for file in &args.files {
        let document = settings.parser.parse(file)?;
        println!("{}", serialize(&document, args.format)?);
    }
    Ok(())
}

pub fn serialize(document: &Document, format: DumpFormat) -> Result<String> {
    let result = match format {
        DumpFormat::Json => serde_json::to_string_pretty(document).map_err(|e| e.to_string()),
        DumpFormat::Yaml => serde_yaml::to_string(document).map_err(|e| e.to_string()),
    };
    result.map_err(|message| GlyError::Build {
        message: format!("Failed to serialize document: {}", message),
        help: None,
    })
}
