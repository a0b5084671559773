//! Music tokenizing: bracket-aware chunk splitting.

/// Result of splitting a music line into chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicSplit<'a> {
    pub chunks: Vec<&'a str>,
    /// A `[` was left open at the end of the line.
    pub unclosed_bracket: bool,
}

/// Split a music line on whitespace outside `[...]` groups.
///
/// Brackets are kept verbatim in their chunk. An unclosed `[` extends to
/// the end of the line and a stray `]` is ignored.
pub fn split_music(line: &str) -> MusicSplit<'_> {
    let mut chunks = Vec::new();
    let mut depth: usize = 0;
    let mut chunk_start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ => {}
        }

        if c.is_whitespace() && depth == 0 {
            if let Some(start) = chunk_start.take() {
                chunks.push(&line[start..i]);
            }
        } else if chunk_start.is_none() {
            chunk_start = Some(i);
        }
    }

    if let Some(start) = chunk_start {
        chunks.push(line[start..].trim_end());
    }

    MusicSplit {
        chunks,
        unclosed_bracket: depth > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_chunks() {
        let split = split_music("(c3) KY(hg) ri(h) e(hgh.)");

        assert_eq!(split.chunks, vec!["(c3)", "KY(hg)", "ri(h)", "e(hgh.)"]);
        assert!(!split.unclosed_bracket);
    }

    #[test]
    fn test_bracket_group_stays_together() {
        let split = split_music("(c4) ab[ove](h) cd");
        assert_eq!(split.chunks, vec!["(c4)", "ab[ove](h)", "cd"]);

        let split = split_music("f [a b](h) g");
        assert_eq!(split.chunks, vec!["f", "[a b](h)", "g"]);
    }

    #[test]
    fn test_nested_brackets() {
        let split = split_music("g[x [y z]] h");

        assert_eq!(split.chunks, vec!["g[x [y z]]", "h"]);
    }

    #[test]
    fn test_unclosed_bracket_runs_to_end() {
        let split = split_music("c4 f[ll: 1 g h  ");

        assert_eq!(split.chunks, vec!["c4", "f[ll: 1 g h"]);
        assert!(split.unclosed_bracket);
    }

    #[test]
    fn test_stray_closing_bracket() {
        let split = split_music("f] g");

        assert_eq!(split.chunks, vec!["f]", "g"]);
        assert!(!split.unclosed_bracket);
    }

    #[test]
    fn test_surrounding_whitespace() {
        let split = split_music("\t c4  f \t");

        assert_eq!(split.chunks, vec!["c4", "f"]);
    }
}
