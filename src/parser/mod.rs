//! Parser for gly source files.
//!
//! gly is a line-oriented notation for chant scores. Each line is either a
//! block keyword, an explicitly tagged line, or an unmarked line whose type
//! is autodetected.
//!
//! # Document Structure
//!
//! - `\header` starts the document header (`key: value` lines)
//! - `\score` starts a new score; unmarked lines are header fields (before
//!   any content), lyrics or music
//! - `\markup` starts a block of verbatim text
//! - `\lyrics` / `\music` alone on a line switch every following line to
//!   that type; `\l ...` / `\m ...` / `\markup ...` tag a single line
//! - `%` starts a comment
//!
//! # Usage
//!
//! ```ignore
//! use gly::parser::Parser;
//!
//! let document = Parser::new().parse("kyrie.gly")?;
//!
//! for score in document.scores() {
//!     println!("{}", score.readable_lyrics());
//! }
//! ```

mod context;
pub mod line;
pub mod lyrics;
pub mod music;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{GlyError, Result};
use crate::types::Document;

pub use context::{classify, BlockMode, LineKind, ParseContext};
pub use lyrics::split_lyrics;
pub use music::{split_music, MusicSplit};

/// Syllable separator used when none is configured.
pub const DEFAULT_SYLLABLE_SEPARATOR: &str = "--";

/// gly parser. Holds configuration only; every parse call has its own state.
#[derive(Debug, Clone)]
pub struct Parser {
    syllable_separator: String,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            syllable_separator: DEFAULT_SYLLABLE_SEPARATOR.to_string(),
        }
    }
}

impl Parser {
    /// Create a parser using the default `--` syllable separator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom syllable separator.
    ///
    /// The separator is matched as literal text and must not be empty or
    /// contain whitespace.
    pub fn with_separator(separator: impl Into<String>) -> Result<Self> {
        let separator = separator.into();
        if separator.is_empty() || separator.chars().any(char::is_whitespace) {
            return Err(GlyError::Config {
                message: format!("Invalid syllable separator {:?}", separator),
                help: Some("Use a non-empty separator without spaces, e.g. --".to_string()),
            });
        }
        Ok(Self {
            syllable_separator: separator,
        })
    }

    pub fn separator(&self) -> &str {
        &self.syllable_separator
    }

    /// Parse a gly file.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Document> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => GlyError::NotFound {
                path: path.to_path_buf(),
            },
            _ => GlyError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to open file: {}", e),
            },
        })?;

        self.parse_source(BufReader::new(file), Some(path))
    }

    /// Parse from an already open reader.
    pub fn parse_reader(&self, reader: impl BufRead) -> Result<Document> {
        self.parse_source(reader, None)
    }

    /// Parse in-memory gly text.
    pub fn parse_str(&self, text: &str) -> Result<Document> {
        self.parse_source(text.as_bytes(), None)
    }

    fn parse_source(&self, reader: impl BufRead, path: Option<&Path>) -> Result<Document> {
        let mut context = ParseContext::new(&self.syllable_separator, path.map(Path::to_path_buf));
        for line in reader.lines() {
            let line = line.map_err(|e| match path {
                Some(path) => GlyError::Io {
                    path: path.to_path_buf(),
                    message: format!("Failed to read file: {}", e),
                },
                None => GlyError::IoError(e),
            })?;
            context.process_line(&line)?;
        }
        context.finish()
    }
}
