// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Completer, token_at};

/// Delimiter that splits the line into words.
pub const DEFAULT_WORD_DELIMITER: &str = " ";

/// Completes the word under the cursor from a fixed, sorted vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCompleter {
    words: Vec<String>,
    delimiter: String,
}

impl SimpleCompleter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut it = Self {
            words: vec![],
            delimiter: DEFAULT_WORD_DELIMITER.to_string(),
        };
        it.set_list(words);
        it
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Replaces the vocabulary. It is kept sorted.
    pub fn set_list<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self.words.sort();
    }

    /// Sorted insert.
    pub fn add_string(&mut self, word: impl Into<String>) {
        let word = word.into();
        let pos = self.words.partition_point(|it| *it < word);
        self.words.insert(pos, word);
    }

    /// Removes one occurrence of `word`. Does nothing if it isn't present.
    pub fn remove_string(&mut self, word: &str) {
        if let Ok(pos) = self.words.binary_search_by(|it| it.as_str().cmp(word)) {
            self.words.remove(pos);
        }
    }

    #[must_use]
    pub fn words(&self) -> &[String] { &self.words }
}

impl Completer for SimpleCompleter {
    fn complete(&self, line: &str, cursor: usize) -> Vec<String> {
        let prefix = token_at(line, cursor, &self.delimiter);
        let first = self.words.partition_point(|it| it.as_str() < prefix);
        self.words[first..]
            .iter()
            .take_while(|it| it.starts_with(prefix))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const ANIMALS: [&str; 6] = ["cat", "catch", "cats", "caught", "cough", "dog"];

    #[test_case("", &["cat", "catch", "cats", "caught", "cough", "dog"] ; "empty")]
    #[test_case("c", &["cat", "catch", "cats", "caught", "cough"] ; "c")]
    #[test_case("d", &["dog"] ; "d")]
    #[test_case("e", &[] ; "no match")]
    #[test_case("ca", &["cat", "catch", "cats", "caught"] ; "ca")]
    #[test_case("co", &["cough"] ; "co")]
    #[test_case("do", &["dog"] ; "do")]
    #[test_case("cat", &["cat", "catch", "cats"] ; "cat")]
    #[test_case("dog", &["dog"] ; "dog")]
    #[test_case("cat ", &["cat", "catch", "cats", "caught", "cough", "dog"] ; "after space")]
    #[test_case("dog ca", &["cat", "catch", "cats", "caught"] ; "second word")]
    fn test_complete(input: &str, expected: &[&str]) {
        let completer = SimpleCompleter::new(ANIMALS);
        let actual = completer.complete(input, input.chars().count());
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_list_is_sorted() {
        let completer = SimpleCompleter::new(["dog", "cat", "cough"]);
        assert_eq!(completer.words(), &["cat", "cough", "dog"]);
    }

    #[test]
    fn test_add_and_remove_string() {
        let mut completer = SimpleCompleter::new(["cat", "dog"]);
        completer.add_string("cow");
        assert_eq!(completer.words(), &["cat", "cow", "dog"]);

        completer.remove_string("cat");
        completer.remove_string("not-there");
        assert_eq!(completer.words(), &["cow", "dog"]);
    }

    #[test]
    fn test_custom_delimiter() {
        let completer = SimpleCompleter::new(ANIMALS).with_delimiter(",");
        assert_eq!(completer.complete("dog,co", 6), vec!["cough".to_string()]);
    }
}
