// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Source of <kbd>Tab</kbd> completion candidates.
///
/// `line` is the text before the cursor and `cursor` is a scalar (not byte) offset
/// into it. Implementations must be pure and return candidates sorted ascending.
/// Each candidate is a whole word: the engine works out how much of it has already
/// been typed.
pub trait Completer {
    fn complete(&self, line: &str, cursor: usize) -> Vec<String>;
}

impl<F> Completer for F
where
    F: Fn(&str, usize) -> Vec<String>,
{
    fn complete(&self, line: &str, cursor: usize) -> Vec<String> { self(line, cursor) }
}

/// Byte offset of the `cursor`th scalar in `line`, clamped to `line.len()`.
#[must_use]
pub fn byte_offset_of(line: &str, cursor: usize) -> usize {
    line.char_indices()
        .nth(cursor)
        .map_or(line.len(), |(offset, _)| offset)
}

/// The token that contains `cursor`: from just after the last `delim` before the
/// cursor, up to (not including) the first `delim` after it.
#[must_use]
pub fn token_at<'a>(line: &'a str, cursor: usize, delim: &str) -> &'a str {
    let cursor = byte_offset_of(line, cursor);
    let (before, after) = line.split_at(cursor);
    let start = if delim.is_empty() {
        0
    } else {
        before.rfind(delim).map_or(0, |pos| pos + delim.len())
    };
    let end = if delim.is_empty() {
        line.len()
    } else {
        after.find(delim).map_or(line.len(), |pos| cursor + pos)
    };
    &line[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("dog ca", 6, " ", "ca" ; "last token")]
    #[test_case("cat ", 4, " ", "" ; "after delimiter")]
    #[test_case("ab cd ef", 4, " ", "cd" ; "middle token spans cursor")]
    #[test_case("héllo wörld", 9, " ", "wörld" ; "multibyte")]
    #[test_case("a,b", 3, ",", "b" ; "custom delimiter")]
    #[test_case("abc", 3, "", "abc" ; "empty delimiter")]
    fn test_token_at(line: &str, cursor: usize, delim: &str, expected: &str) {
        assert_eq!(token_at(line, cursor, delim), expected);
    }

    #[test]
    fn test_closure_is_completer() {
        let completer = |line: &str, _: usize| vec![format!("{line}!")];
        assert_eq!(completer.complete("hi", 2), vec!["hi!".to_string()]);
    }

    #[test]
    fn test_byte_offset_of() {
        assert_eq!(byte_offset_of("héllo", 2), 3);
        assert_eq!(byte_offset_of("héllo", 99), 6);
    }
}
