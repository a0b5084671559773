//! Score type: one musical movement.
//!
//! A score collects its header fields, the lyric words and the music
//! chunks found between two block boundaries of a gly document.
//!
//! # Example
//!
//! ```text
//! \score
//! id: kyrie-xi
//! Ky -- ri -- e e -- le -- i -- son
//! c4 f gh h
//! ```

use serde::Serialize;

use super::{Headers, Word};

/// A score definition - headers plus ordered lyrics and music.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    /// Header fields scoped to this score.
    pub headers: Headers,

    /// Lyric words in source order.
    pub lyrics: Vec<Word>,

    /// Music chunks in source order (opaque notation tokens).
    pub music: Vec<String>,
}

impl Score {
    /// Create an empty score.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the score has no headers, lyrics or music.
    ///
    /// Empty scores are parser scratch state and never enter a document.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.lyrics.is_empty() && self.music.is_empty()
    }

    /// Headers are only recognized before any lyrics or music.
    pub fn accepts_headers(&self) -> bool {
        self.lyrics.is_empty() && self.music.is_empty()
    }

    /// Value of the `id` header, if present.
    pub fn id(&self) -> Option<&str> {
        self.headers.get("id")
    }

    /// Lyrics as plain text: words separated by spaces.
    pub fn readable_lyrics(&self) -> String {
        self.lyrics
            .iter()
            .map(Word::readable)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Total number of syllables across all words.
    pub fn syllable_count(&self) -> usize {
        self.lyrics.iter().map(Word::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_score_is_empty() {
        let score = Score::new();

        assert!(score.is_empty());
        assert!(score.accepts_headers());
    }

    #[test]
    fn test_headers_make_score_non_empty() {
        let mut score = Score::new();
        score.headers.set("id", "k1");

        assert!(!score.is_empty());
        assert!(score.accepts_headers());
        assert_eq!(score.id(), Some("k1"));
    }

    #[test]
    fn test_music_closes_header_window() {
        let mut score = Score::new();
        score.music.push("c4".to_string());

        assert!(!score.accepts_headers());
    }

    #[test]
    fn test_readable_lyrics() {
        let mut score = Score::new();
        score.lyrics.push(Word::new(["Ky", "ri", "e"]).unwrap());
        score.lyrics.push(Word::new(["e", "le", "i", "son"]).unwrap());

        assert_eq!(score.readable_lyrics(), "Kyrie eleison");
        assert_eq!(score.syllable_count(), 7);
    }
}
