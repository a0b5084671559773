//! gabc output.
//!
//! Every score becomes one gabc file: the score headers as `key: value;`
//! lines, a `%%` separator and the body, where music chunks are paired
//! with lyric syllables.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{GlyError, Result};
use crate::types::{Document, Score};

/// Clefs: `c1`-`c4`, `f1`-`f4`, optionally with a flat (`cb3`).
static CLEF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[cf]b?[1-4]$").unwrap());

/// Divisiones: bar lines built from `, ; :` and backtick, with modifiers.
static DIVISIO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[,;:`][,;:`'?_0-9]*$").unwrap());

/// Does this chunk stand without a syllable?
pub fn is_nonlyrical(chunk: &str) -> bool {
    CLEF.is_match(chunk) || DIVISIO.is_match(chunk) || chunk.contains('(')
}

/// Render a single score as gabc.
pub fn score_to_gabc(score: &Score) -> String {
    let mut out = String::new();

    if !score.headers.contains_key("name") {
        let _ = writeln!(out, "name: {};", fallback_name(score));
    }
    for (key, value) in score.headers.iter() {
        let _ = writeln!(out, "{}: {};", key, value);
    }
    out.push_str("%%\n");
    out.push_str(&gabc_body(score));
    out.push('\n');
    out
}

fn fallback_name(score: &Score) -> String {
    let lyrics = score.readable_lyrics();
    if lyrics.is_empty() {
        "Untitled".to_string()
    } else {
        lyrics.split_whitespace().take(5).collect::<Vec<_>>().join(" ")
    }
}

/// Accumulates gabc body text, inserting a space between words.
#[derive(Default)]
struct BodyWriter {
    out: String,
    in_word: bool,
}

impl BodyWriter {
    fn push(&mut self, text: &str, word_end: bool) {
        if !self.in_word && !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self.in_word = !word_end;
    }
}

/// Pair music chunks with syllables.
fn gabc_body(score: &Score) -> String {
    let mut syllables = score.lyrics.iter().flat_map(|word| {
        let last = word.len() - 1;
        word.syllables()
            .iter()
            .enumerate()
            .map(move |(i, s)| (s.as_str(), i == last))
    });

    let mut body = BodyWriter::default();

    for chunk in &score.music {
        if is_nonlyrical(chunk) {
            // a note-less chunk never sits inside a word
            body.in_word = false;
            if chunk.contains('(') {
                body.push(chunk, true);
            } else {
                body.push(&format!("({})", chunk), true);
            }
            continue;
        }

        match syllables.next() {
            Some((syllable, word_end)) => body.push(&format!("{}({})", syllable, chunk), word_end),
            None => body.push(&format!("({})", chunk), true),
        }
    }

    for (syllable, word_end) in syllables {
        body.push(&format!("{}()", syllable), word_end);
    }

    body.out
}

/// Options for writing a document's scores to gabc files.
#[derive(Debug, Clone, Default)]
pub struct GabcOptions {
    /// Output file stem replacing the source file name.
    pub output_stem: Option<String>,
    /// Directory to write into (default: current directory).
    pub output_directory: Option<PathBuf>,
    /// Suffix file names with the score id or index even for a single score.
    pub suffix_always: bool,
}

/// Writes the scores of a document as gabc files.
pub struct DocumentGabcConvertor<'a> {
    document: &'a Document,
    options: GabcOptions,
}

impl<'a> DocumentGabcConvertor<'a> {
    pub fn new(document: &'a Document, options: GabcOptions) -> Self {
        Self { document, options }
    }

    /// Output path for every score, in document order.
    pub fn output_paths(&self) -> Result<Vec<PathBuf>> {
        let stem = self.stem()?;
        let count = self.document.scores().count();
        let dir = self
            .options
            .output_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(self
            .document
            .scores()
            .enumerate()
            .map(|(i, score)| {
                let name = if count == 1 && !self.options.suffix_always {
                    format!("{}.gabc", stem)
                } else {
                    let suffix = score
                        .id()
                        .map(str::to_string)
                        .unwrap_or_else(|| (i + 1).to_string());
                    format!("{}_{}.gabc", stem, suffix)
                };
                dir.join(name)
            })
            .collect())
    }

    /// Write all scores. Returns (score, written path) pairs.
    pub fn convert(&self) -> Result<Vec<(&'a Score, PathBuf)>> {
        let paths = self.output_paths()?;
        if let Some(dir) = &self.options.output_directory {
            create_dir(dir)?;
        }

        let mut written = Vec::with_capacity(paths.len());
        for (score, path) in self.document.scores().zip(paths) {
            fs::write(&path, score_to_gabc(score)).map_err(|e| GlyError::Io {
                path: path.clone(),
                message: format!("Failed to write gabc: {}", e),
            })?;
            tracing::debug!(path = %path.display(), "gabc written");
            written.push((score, path));
        }
        Ok(written)
    }

    fn stem(&self) -> Result<String> {
        if let Some(stem) = &self.options.output_stem {
            return Ok(stem.trim_end_matches(".gabc").to_string());
        }
        self.document
            .path
            .as_deref()
            .and_then(Path::file_stem)
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .ok_or_else(|| GlyError::Build {
                message: "Cannot derive gabc file name for a document without a path".to_string(),
                help: Some("Pass --output to name the output file".to_string()),
            })
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| GlyError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    Ok(())
}
