//! gly output: renders a document back to gly source.
//!
//! Only explicit forms are written (`\header`, `\score`, `\l`, `\m`,
//! `\markup`), so the result parses back to the same document whatever the
//! autodetection heuristics would make of the content.

use std::fmt::Write as _;

use crate::parser::lyrics::SPACE_ESCAPE;
use crate::parser::music::split_music;
use crate::types::{Document, Headers, Markup, Score, Unit, Word};

/// Render a document as gly source using the given syllable separator.
pub fn document_to_gly(document: &Document, separator: &str) -> String {
    let mut out = String::new();

    if !document.header.is_empty() {
        out.push_str("\\header\n");
        write_headers(&mut out, &document.header);
        out.push('\n');
    }

    for unit in document.content() {
        match unit {
            Unit::Score(score) => write_score(&mut out, score, separator),
            Unit::Markup(markup) => write_markup(&mut out, markup),
        }
    }

    out
}

fn write_headers(out: &mut String, headers: &Headers) {
    for (key, value) in headers.iter() {
        let _ = writeln!(out, "{}: {}", escape(key), escape(value));
    }
}

fn write_score(out: &mut String, score: &Score, separator: &str) {
    out.push_str("\\score\n");
    write_headers(out, &score.headers);

    for line in lyric_lines(&score.lyrics, separator) {
        let _ = writeln!(out, "\\l {}", line.join(" "));
    }
    for line in music_lines(&score.music) {
        let _ = writeln!(out, "\\m {}", escape(&line.join(" ")));
    }
    out.push('\n');
}

/// Group words into `\l` lines. A word opening with an empty syllable
/// would join the preceding word, so it starts a line of its own.
fn lyric_lines(words: &[Word], separator: &str) -> Vec<Vec<String>> {
    let mut lines: Vec<Vec<String>> = Vec::new();
    for word in words {
        let leading_empty = word.syllables().first().is_some_and(|s| s.is_empty());
        match lines.last_mut() {
            Some(line) if !leading_empty => line.push(word_to_gly(word, separator)),
            _ => lines.push(vec![word_to_gly(word, separator)]),
        }
    }
    lines
}

/// Group chunks into `\m` lines. A chunk with an unclosed `[` swallows the
/// rest of its line, so it always ends one.
fn music_lines(chunks: &[String]) -> Vec<Vec<&str>> {
    let mut lines: Vec<Vec<&str>> = vec![Vec::new()];
    for chunk in chunks {
        if let Some(line) = lines.last_mut() {
            line.push(chunk);
        }
        if split_music(chunk).unclosed_bracket {
            lines.push(Vec::new());
        }
    }
    lines.retain(|line| !line.is_empty());
    lines
}

// Blank lines belong to the markup block, so nothing is added after it.
fn write_markup(out: &mut String, markup: &Markup) {
    if let [line] = markup.lines() {
        if !line.trim().is_empty() && !line.starts_with(char::is_whitespace) {
            let _ = writeln!(out, "\\markup {}", escape(line));
            return;
        }
    }

    out.push_str("\\markup\n");
    for line in markup.lines() {
        out.push_str(&escape(line));
        out.push('\n');
    }
}

fn word_to_gly(word: &Word, separator: &str) -> String {
    let syllables: Vec<String> = word
        .syllables()
        .iter()
        .map(|s| escape(&s.replace(' ', &SPACE_ESCAPE.to_string())))
        .collect();
    syllables.join(&format!(" {} ", separator))
}

/// Escape `%` so it is not read as a comment.
fn escape(text: &str) -> String {
    text.replace('%', "\\%")
}
