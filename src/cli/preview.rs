//! Preview command implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{GlyError, Result};
use crate::output::{display_path, Printer};
use crate::parser::Parser;
use crate::preview::{PreviewGenerator, PreviewOptions};
use crate::types::Document;

use super::Settings;

/// Convert to gabc AND generate a PDF preview
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Input files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only generate preview assets, don't compile them
    #[arg(long, short = 'B')]
    pub no_build: bool,

    /// Produce the main LaTeX file without document definition (implies --no-build)
    #[arg(long, short = 'D')]
    pub no_document: bool,

    /// Include full document and score headers
    #[arg(long, short = 'H')]
    pub full_headers: bool,

    /// Use custom document template
    #[arg(long, short)]
    pub template: Option<PathBuf>,

    /// Output directory
    #[arg(long, short = 'd')]
    pub output_directory: Option<PathBuf>,
}

pub fn run(args: PreviewArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    let template = match args.template.as_ref().or(settings.config.template.as_ref()) {
        Some(path) => Some(read_template(path)?),
        None => None,
    };

    let options = PreviewOptions {
        no_build: args.no_build,
        no_document: args.no_document,
        full_headers: args.full_headers || settings.config.full_headers,
        output_directory: args
            .output_directory
            .clone()
            .or_else(|| settings.config.output_directory.clone()),
    };
    let generator = PreviewGenerator::new(template, options);

    for file in &args.files {
        let document = parse_with_extension_fallback(&settings.parser, file)?;
        let output = generator.process(&document)?;

        printer.status("Generated", &display_path(&output.tex));
        if output.built {
            printer.status("Built", &display_path(&output.tex.with_extension("pdf")));
        }
    }

    Ok(())
}

fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GlyError::NotFound {
            path: path.to_path_buf(),
        },
        _ => GlyError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read template: {}", e),
        },
    })
}

/// `gly preview kyrie` finds `kyrie.gly`.
fn parse_with_extension_fallback(parser: &Parser, file: &Path) -> Result<Document> {
    match parser.parse(file) {
        Err(GlyError::NotFound { path }) => {
            let mut with_extension = file.as_os_str().to_owned();
            with_extension.push(".gly");
            let with_extension = PathBuf::from(with_extension);
            if with_extension.exists() {
                parser.parse(&with_extension)
            } else {
                Err(GlyError::NotFound { path })
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_extension_fallback() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("kyrie.gly"), "c4 f\n").unwrap();

        let doc = parse_with_extension_fallback(&Parser::new(), &dir.path().join("kyrie")).unwrap();

        assert_eq!(doc.path, Some(dir.path().join("kyrie.gly")));
    }

    #[test]
    fn test_extension_fallback_reports_original_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gloria");

        let result = parse_with_extension_fallback(&Parser::new(), &missing);

        match result {
            Err(GlyError::NotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_template() {
        let result = read_template(Path::new("/nonexistent/template.tex"));

        assert!(matches!(result, Err(GlyError::NotFound { .. })));
    }
}
