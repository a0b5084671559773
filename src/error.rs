use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gly operations
#[derive(Error, Diagnostic, Debug)]
pub enum GlyError {
    #[error("File not found: '{}'", .path.display())]
    #[diagnostic(code(gly::not_found))]
    NotFound { path: PathBuf },

    #[error("IO error: {0}")]
    #[diagnostic(code(gly::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {}: {message}", .path.display())]
    #[diagnostic(code(gly::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error at {}: {message}", origin(.path.as_deref(), .line))]
    #[diagnostic(code(gly::parse))]
    Parse {
        path: Option<PathBuf>,
        /// 1-based number of the line being processed when the error occurred
        line: usize,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(gly::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(gly::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

fn origin(path: Option<&Path>, line: &usize) -> String {
    match path {
        Some(path) => format!("{}:{}", path.display(), line),
        None => format!("line {}", line),
    }
}

pub type Result<T> = std::result::Result<T, GlyError>;
