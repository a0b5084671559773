//! Per-parse mutable state and the line classifier.

use std::path::PathBuf;

use tracing::{debug, trace, warn};

use crate::error::{GlyError, Result};
use crate::types::{ConstructionError, Document, Markup, Score, Word};

use super::line::{self, Explicit, Keyword};
use super::lyrics::split_lyrics;
use super::music::split_music;

/// Persistent line-interpretation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockMode {
    /// Unmarked lines are autodetected.
    #[default]
    Score,
    /// Lines are fields of the document header.
    Header,
    /// Lines are appended verbatim to the current markup block.
    Markup,
    Lyrics,
    Music,
}

/// What an unmarked line in score mode turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Lyrics,
    Music,
}

/// One autodetection rule: a predicate and the kind it assigns.
struct Rule {
    kind: LineKind,
    applies: fn(&str, &Score, &str) -> bool,
}

/// Autodetection rules, tried top to bottom; the first match wins and
/// anything left over is music.
const AUTODETECT_RULES: &[Rule] = &[
    Rule {
        kind: LineKind::Header,
        applies: is_header_line,
    },
    Rule {
        kind: LineKind::Music,
        applies: is_gabc_line,
    },
    Rule {
        kind: LineKind::Lyrics,
        applies: is_lyrics_line,
    },
];

/// Header fields are only recognized before the score has any content.
fn is_header_line(line: &str, score: &Score, _separator: &str) -> bool {
    score.accepts_headers() && line::looks_like_header_field(line)
}

/// Syllables already paired with notes, `KY(hg) ri(h)`, are notation.
fn is_gabc_line(line: &str, _score: &Score, _separator: &str) -> bool {
    line::is_gabc_notation(line)
}

fn is_lyrics_line(line: &str, _score: &Score, separator: &str) -> bool {
    !line::contains_square_brackets(line)
        && (line.contains(separator) || line::contains_unmusical_letters(line))
}

/// Classify an unmarked line for the given in-progress score.
pub fn classify(line: &str, score: &Score, separator: &str) -> LineKind {
    AUTODETECT_RULES
        .iter()
        .find(|rule| (rule.applies)(line, score, separator))
        .map_or(LineKind::Music, |rule| rule.kind)
}

/// State of a single parse pass.
///
/// Owns the document under construction and the score being filled.
/// Nothing here outlives the pass.
pub struct ParseContext<'p> {
    separator: &'p str,
    path: Option<PathBuf>,
    mode: BlockMode,
    score: Option<Score>,
    document: Document,
    line_number: usize,
}

impl<'p> ParseContext<'p> {
    pub fn new(separator: &'p str, path: Option<PathBuf>) -> Self {
        Self {
            separator,
            document: Document::with_path(path.clone()),
            path,
            mode: BlockMode::Score,
            score: Some(Score::new()),
            line_number: 0,
        }
    }

    pub fn mode(&self) -> BlockMode {
        self.mode
    }

    /// Process the next input line.
    pub fn process_line(&mut self, raw: &str) -> Result<()> {
        self.line_number += 1;
        let stripped = line::strip_comment(raw);
        let line = stripped.as_ref();

        if line::is_blank(line) {
            if self.mode == BlockMode::Markup {
                self.append_markup(line);
            }
            return Ok(());
        }

        if let Some(keyword) = Keyword::detect(line) {
            return self.switch_block(keyword);
        }

        if let Some(explicit) = Explicit::detect(line) {
            trace!(line = self.line_number, ?explicit, "explicit line");
            return match explicit {
                Explicit::Lyrics(rest) => self.add_lyrics(rest),
                Explicit::Music(rest) => {
                    self.add_music(rest);
                    Ok(())
                }
                Explicit::Markup(rest) => {
                    self.finalize_score()?;
                    self.document.push_markup(Markup::with_line(rest));
                    Ok(())
                }
            };
        }

        match self.mode {
            BlockMode::Header => {
                let (key, value) = line::split_header_field(line);
                self.document.header.set(key, value);
            }
            BlockMode::Markup => self.append_markup(line),
            BlockMode::Lyrics => self.add_lyrics(line)?,
            BlockMode::Music => self.add_music(line),
            BlockMode::Score => self.autodetect(line)?,
        }
        Ok(())
    }

    /// Finalize the pending score and hand out the document.
    pub fn finish(mut self) -> Result<Document> {
        self.finalize_score()?;
        Ok(self.document)
    }

    fn switch_block(&mut self, keyword: Keyword) -> Result<()> {
        debug!(line = self.line_number, ?keyword, "block keyword");
        match keyword {
            Keyword::Score => {
                self.finalize_score()?;
                self.score = Some(Score::new());
                self.mode = BlockMode::Score;
            }
            Keyword::Header => {
                self.finalize_score()?;
                self.mode = BlockMode::Header;
            }
            Keyword::Markup => {
                self.finalize_score()?;
                self.document.push_markup(Markup::new());
                self.mode = BlockMode::Markup;
            }
            Keyword::Lyrics => self.mode = BlockMode::Lyrics,
            Keyword::Music => self.mode = BlockMode::Music,
        }
        Ok(())
    }

    fn autodetect(&mut self, line: &str) -> Result<()> {
        let separator = self.separator;
        let kind = classify(line, self.score_mut(), separator);
        trace!(line = self.line_number, ?kind, "autodetected");
        match kind {
            LineKind::Header => {
                let (key, value) = line::split_header_field(line);
                self.score_mut().headers.set(key, value);
                Ok(())
            }
            LineKind::Lyrics => self.add_lyrics(line),
            LineKind::Music => {
                self.add_music(line);
                Ok(())
            }
        }
    }

    /// The score explicit and autodetected content goes to.
    ///
    /// Lyrics and music never land in the document header or a markup
    /// block: coming from those modes, a pending score is started while the
    /// block mode stays as it is.
    fn score_mut(&mut self) -> &mut Score {
        self.score.get_or_insert_with(Score::new)
    }

    fn add_lyrics(&mut self, line: &str) -> Result<()> {
        let words = split_lyrics(line, self.separator);
        let mut parsed = Vec::with_capacity(words.len());
        for syllables in words {
            parsed.push(Word::new(syllables).map_err(|e| self.construction_error(e))?);
        }
        self.score_mut().lyrics.extend(parsed);
        Ok(())
    }

    fn add_music(&mut self, line: &str) {
        let split = split_music(line);
        if split.unclosed_bracket {
            warn!(
                path = ?self.path,
                line = self.line_number,
                "unterminated '[' in music line, rest of line kept as one chunk"
            );
        }
        let chunks: Vec<String> = split.chunks.into_iter().map(str::to_string).collect();
        self.score_mut().music.extend(chunks);
    }

    fn append_markup(&mut self, line: &str) {
        match self.document.last_markup_mut() {
            Some(markup) => markup.push_line(line),
            None => self.document.push_markup(Markup::with_line(line)),
        }
    }

    /// Move the pending score, if it has content, into the document.
    fn finalize_score(&mut self) -> Result<()> {
        let Some(score) = self.score.take() else {
            return Ok(());
        };
        if score.is_empty() {
            return Ok(());
        }
        debug!(
            line = self.line_number,
            id = score.id(),
            words = score.lyrics.len(),
            chunks = score.music.len(),
            "score finalized"
        );
        self.document
            .push_score(score)
            .map_err(|e| self.construction_error(e))
    }

    fn construction_error(&self, error: ConstructionError) -> GlyError {
        let help = match error {
            ConstructionError::DuplicateScoreId(_) => {
                Some("Give every score in the file a distinct id header".to_string())
            }
            ConstructionError::EmptyWord => None,
        };
        GlyError::Parse {
            path: self.path.clone(),
            line: self.line_number,
            message: error.to_string(),
            help,
        }
    }
}
