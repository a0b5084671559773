//! Lyric words split into syllables.

use serde::Serialize;

use super::ConstructionError;

/// A lyric word: an ordered, non-empty list of syllables.
///
/// Syllables are stored already unescaped, so an underscore written in the
/// source appears here as a plain space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    syllables: Vec<String>,
}

impl Word {
    /// Create a word from its syllables.
    ///
    /// Fails with [`ConstructionError::EmptyWord`] if there are no syllables.
    pub fn new<S: Into<String>>(
        syllables: impl IntoIterator<Item = S>,
    ) -> Result<Self, ConstructionError> {
        let syllables: Vec<String> = syllables.into_iter().map(Into::into).collect();
        if syllables.is_empty() {
            return Err(ConstructionError::EmptyWord);
        }
        Ok(Self { syllables })
    }

    pub fn syllables(&self) -> &[String] {
        &self.syllables
    }

    /// Number of syllables (always at least one).
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// The word as it would be read, syllables joined without separators.
    pub fn readable(&self) -> String {
        self.syllables.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_syllable_word() {
        let word = Word::new(["Deus"]).unwrap();

        assert_eq!(word.len(), 1);
        assert_eq!(word.syllables(), ["Deus"]);
    }

    #[test]
    fn test_empty_word_rejected() {
        let result = Word::new(Vec::<String>::new());

        assert_eq!(result, Err(ConstructionError::EmptyWord));
    }

    #[test]
    fn test_readable() {
        let word = Word::new(["e", "le", "i", "son"]).unwrap();

        assert_eq!(word.readable(), "eleison");
    }
}
