//! Score lister: a quick inventory of what gly files contain.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::parser::Parser;
use crate::types::Document;

/// Output format of the lister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListFormat {
    /// File name, document title and one numbered line per score
    #[default]
    Overview,
    /// `path:index:lyrics`, one line per score
    Grep,
}

/// Lists the scores of a set of files.
pub struct Lister {
    files: Vec<PathBuf>,
    format: ListFormat,
    parser: Parser,
    errors: usize,
}

impl Lister {
    pub fn new(files: Vec<PathBuf>, format: ListFormat, parser: Parser) -> Self {
        Self {
            files,
            format,
            parser,
            errors: 0,
        }
    }

    /// List every file to `out`. Files that fail to parse are reported to
    /// `err` and skipped.
    pub fn list(&mut self, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        let mut listed_any = false;
        for file in &self.files {
            let document = match self.parser.parse(file) {
                Ok(document) => document,
                Err(e) => {
                    writeln!(err, "{}: {}", file.display(), e)?;
                    self.errors += 1;
                    continue;
                }
            };

            match self.format {
                ListFormat::Overview => {
                    if listed_any {
                        writeln!(out)?;
                    }
                    write_overview(out, file, &document)?;
                }
                ListFormat::Grep => write_grep(out, file, &document)?,
            }
            listed_any = true;
        }
        Ok(())
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

fn write_overview(out: &mut impl Write, file: &Path, document: &Document) -> io::Result<()> {
    writeln!(out, "{}", file.display())?;
    if let Some(title) = document.header.get("title") {
        writeln!(out, "  title: {}", title)?;
    }
    for (i, score) in document.scores().enumerate() {
        match score.id() {
            Some(id) => writeln!(out, "  {}. {}: {}", i + 1, id, score.readable_lyrics())?,
            None => writeln!(out, "  {}. {}", i + 1, score.readable_lyrics())?,
        }
    }
    Ok(())
}

fn write_grep(out: &mut impl Write, file: &Path, document: &Document) -> io::Result<()> {
    for (i, score) in document.scores().enumerate() {
        writeln!(out, "{}:{}:{}", file.display(), i + 1, score.readable_lyrics())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run(files: Vec<PathBuf>, format: ListFormat) -> (String, String, bool) {
        let mut lister = Lister::new(files, format, Parser::new());
        let mut out = Vec::new();
        let mut err = Vec::new();
        lister.list(&mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            lister.has_errors(),
        )
    }

    #[test]
    fn test_overview_and_grep() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kyrie.gly");
        fs::write(
            &path,
            "\\header\ntitle: Ordinary\n\\score\nid: k\nKy -- ri -- e\nc4 f g h\n\\score\nChri -- ste\nc4 g h\n",
        )
        .unwrap();

        let (out, err, failed) = run(vec![path.clone()], ListFormat::Overview);
        assert!(!failed);
        assert!(err.is_empty());
        assert_eq!(
            out,
            format!("{}\n  title: Ordinary\n  1. k: Kyrie\n  2. Christe\n", path.display())
        );

        let (out, _, _) = run(vec![path.clone()], ListFormat::Grep);
        assert_eq!(
            out,
            format!("{p}:1:Kyrie\n{p}:2:Christe\n", p = path.display())
        );
    }

    #[test]
    fn test_errors_reported_and_listing_continues() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.gly");
        fs::write(&good, "A -- men\nc4 f\n").unwrap();
        let missing = dir.path().join("missing.gly");

        let (out, err, failed) = run(vec![missing, good], ListFormat::Grep);

        assert!(failed);
        assert!(err.contains("File not found"));
        assert!(out.ends_with(":1:Amen\n"));
    }

    #[test]
    fn test_overview_separates_only_listed_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.gly");
        let kyrie = dir.path().join("kyrie.gly");
        let gloria = dir.path().join("gloria.gly");
        fs::write(&kyrie, "Ky -- ri -- e\nc4 f\n").unwrap();
        fs::write(&gloria, "Glo -- ri -- a\nc4 g\n").unwrap();

        let (out, _, failed) = run(vec![missing, kyrie.clone(), gloria.clone()], ListFormat::Overview);

        assert!(failed);
        assert_eq!(
            out,
            format!(
                "{}\n  1. Kyrie\n\n{}\n  1. Gloria\n",
                kyrie.display(),
                gloria.display()
            )
        );
    }
}
