//! Lyrics tokenizing: words and syllables.

/// Escape for a space inside a single syllable.
pub const SPACE_ESCAPE: char = '_';

/// Split a lyrics line into words, each word a list of syllables.
///
/// Words are separated by whitespace runs, except runs touching the
/// separator on either side: `Ky -- ri -- e` is one word. Syllables are
/// split on the separator (surrounding whitespace dropped) and underscores
/// become spaces. The separator is matched as literal text.
pub fn split_lyrics(line: &str, separator: &str) -> Vec<Vec<String>> {
    split_words(line.trim(), separator)
        .into_iter()
        .map(|word| split_syllables(word, separator))
        .filter(|syllables| !syllables.is_empty())
        .collect()
}

fn split_words<'a>(line: &'a str, separator: &str) -> Vec<&'a str> {
    let mut words = Vec::new();
    let mut word_start = 0;
    let mut run_start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            run_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = run_start.take() {
            if !line[..start].ends_with(separator) && !line[i..].starts_with(separator) {
                words.push(&line[word_start..start]);
                word_start = i;
            }
        }
    }

    let end = run_start.unwrap_or(line.len());
    words.push(&line[word_start..end]);
    words.retain(|w| !w.is_empty());
    words
}

fn split_syllables(word: &str, separator: &str) -> Vec<String> {
    let mut syllables: Vec<String> = word
        .split(separator)
        .map(|s| s.trim().replace(SPACE_ESCAPE, " "))
        .collect();

    // A dangling separator does not open another syllable.
    while syllables.last().is_some_and(|s| s.is_empty()) {
        syllables.pop();
    }
    syllables
}
