//! Line-level recognizers: comments, block keywords, explicit prefixes and
//! the content heuristics used for unmarked lines.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// `\keyword` alone on a line (surrounding whitespace allowed).
static KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\\(score|header|markup|lyrics|music)\s*$").unwrap());

static EXPLICIT_LYRICS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\l(?:yrics)?\s+").unwrap());
static EXPLICIT_MUSIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\m(?:usic)?\s+").unwrap());
static EXPLICIT_MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\markup\s+").unwrap());

/// A parenthesized gabc note group.
static NOTE_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^()]*)\)").unwrap());

/// Identifier characters immediately followed by a colon.
static HEADER_FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w-]+:").unwrap());

/// Letters that may appear in music lines. Incomplete on purpose: it only
/// has to tell notation apart from ordinary words.
const MUSIC_LETTERS: &str = "abcdefghijklmorsvwxz";

/// A block keyword standing alone on its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Score,
    Header,
    Markup,
    Lyrics,
    Music,
}

impl Keyword {
    pub fn detect(line: &str) -> Option<Self> {
        let caps = KEYWORD.captures(line)?;
        match &caps[1] {
            "score" => Some(Keyword::Score),
            "header" => Some(Keyword::Header),
            "markup" => Some(Keyword::Markup),
            "lyrics" => Some(Keyword::Lyrics),
            "music" => Some(Keyword::Music),
            _ => None,
        }
    }
}

/// A line carrying its own type tag, consumed without changing block mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Explicit<'a> {
    Lyrics(&'a str),
    Music(&'a str),
    Markup(&'a str),
}

impl<'a> Explicit<'a> {
    pub fn detect(line: &'a str) -> Option<Self> {
        if let Some(m) = EXPLICIT_LYRICS.find(line) {
            return Some(Explicit::Lyrics(&line[m.end()..]));
        }
        if let Some(m) = EXPLICIT_MUSIC.find(line) {
            return Some(Explicit::Music(&line[m.end()..]));
        }
        if let Some(m) = EXPLICIT_MARKUP.find(line) {
            return Some(Explicit::Markup(&line[m.end()..]));
        }
        None
    }
}

/// Remove a trailing `%` comment.
///
/// `\%` is an escaped percent sign: it does not start a comment and is
/// turned into a plain `%`.
pub fn strip_comment(line: &str) -> Cow<'_, str> {
    if !line.contains('%') {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'%') => {
                out.push('%');
                chars.next();
            }
            '%' => break,
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub fn looks_like_header_field(line: &str) -> bool {
    HEADER_FIELD.is_match(line)
}

/// Square brackets open notation option groups and always mean music.
pub fn contains_square_brackets(line: &str) -> bool {
    line.contains('[')
}

/// True if every chunk of the line is gabc such as `(c3)` or `KY(hg)`.
///
/// Each parenthesized group must hold notation: not empty and only music
/// letters, so `(repeat)` stays text.
pub fn is_gabc_notation(line: &str) -> bool {
    let mut chunks = line.split_whitespace().peekable();
    chunks.peek().is_some() && chunks.all(is_gabc_chunk)
}

fn is_gabc_chunk(chunk: &str) -> bool {
    if !chunk.ends_with(')') {
        return false;
    }
    let mut groups = NOTE_GROUP.captures_iter(chunk).peekable();
    groups.peek().is_some()
        && groups.all(|group| {
            let notes = &group[1];
            !notes.trim().is_empty() && !contains_unmusical_letters(notes)
        })
}

/// True if the line has a letter that cannot be part of music notation.
pub fn contains_unmusical_letters(line: &str) -> bool {
    line.chars()
        .filter(|c| c.is_alphabetic())
        .any(|c| !c.is_ascii() || !MUSIC_LETTERS.contains(c.to_ascii_lowercase()))
}

/// Split a header line at the first colon into a trimmed key and value.
///
/// A line without a colon becomes a key with an empty value.
pub fn split_header_field(line: &str) -> (&str, &str) {
    match line.split_once(':') {
        Some((key, value)) => (key.trim(), value.trim()),
        None => (line.trim(), ""),
    }
}
