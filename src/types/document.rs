//! Parsed gly documents.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use super::{Headers, Markup, Score};

/// Violation of a data-model invariant while building a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("a word must have at least one syllable")]
    EmptyWord,

    #[error("duplicate score id '{0}'")]
    DuplicateScoreId(String),
}

/// One unit of document content, in rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Unit {
    Score(Score),
    Markup(Markup),
}

impl Unit {
    pub fn as_score(&self) -> Option<&Score> {
        match self {
            Unit::Score(score) => Some(score),
            Unit::Markup(_) => None,
        }
    }

    pub fn as_markup(&self) -> Option<&Markup> {
        match self {
            Unit::Markup(markup) => Some(markup),
            Unit::Score(_) => None,
        }
    }
}

/// A parsed document: a document-level header and ordered content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Source file, when parsed from a named file.
    pub path: Option<PathBuf>,

    /// Document-level header fields (title etc.).
    pub header: Headers,

    content: Vec<Unit>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty document read from `path`.
    pub fn with_path(path: Option<PathBuf>) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// Content units in source order.
    pub fn content(&self) -> &[Unit] {
        &self.content
    }

    /// Append a finished score.
    ///
    /// Empty scores are ignored. A score whose `id` is already taken by an
    /// earlier score is rejected.
    pub fn push_score(&mut self, score: Score) -> Result<(), ConstructionError> {
        if score.is_empty() {
            return Ok(());
        }
        if let Some(id) = score.id() {
            if self.score_by_id(id).is_some() {
                return Err(ConstructionError::DuplicateScoreId(id.to_string()));
            }
        }
        self.content.push(Unit::Score(score));
        Ok(())
    }

    pub fn push_markup(&mut self, markup: Markup) {
        self.content.push(Unit::Markup(markup));
    }

    /// The markup block most recently appended, if it is the last unit.
    pub fn last_markup_mut(&mut self) -> Option<&mut Markup> {
        match self.content.last_mut() {
            Some(Unit::Markup(markup)) => Some(markup),
            _ => None,
        }
    }

    pub fn scores(&self) -> impl Iterator<Item = &Score> {
        self.content.iter().filter_map(Unit::as_score)
    }

    pub fn markups(&self) -> impl Iterator<Item = &Markup> {
        self.content.iter().filter_map(Unit::as_markup)
    }

    pub fn score_by_id(&self, id: &str) -> Option<&Score> {
        self.scores().find(|s| s.id() == Some(id))
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.content.is_empty()
    }
}
