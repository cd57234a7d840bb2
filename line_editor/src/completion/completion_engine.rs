// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! <kbd>Tab</kbd> handling.
//!
//! 1. First press: ask the [`Completer`] for candidates. With one candidate, fill it
//!    in. With several, fill in their longest common prefix and remember the list.
//! 2. Second press (list still remembered): ask the session to print the list.
//!
//! Any other key forgets the list, see [`CompletionEngine::reset`].
//!
//! Only the part of the completion that hasn't been typed yet is inserted. With
//! `"dog ca"` typed and `"cat"` as the completion, the overlap is `"ca"` and `"t"` is
//! inserted at the cursor.

use super::Completer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionAction {
    Nothing,
    /// Insert this text at the cursor.
    Insert(String),
    /// Print [`CompletionEngine::candidates`] below the line.
    DisplayCandidates,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompletionEngine {
    candidates: Vec<String>,
    display_mode: bool,
}

impl CompletionEngine {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn candidates(&self) -> &[String] { &self.candidates }

    #[must_use]
    pub fn is_display_mode(&self) -> bool { self.display_mode }

    /// Forgets the remembered candidates.
    pub fn reset(&mut self) {
        self.candidates.clear();
        self.display_mode = false;
    }

    /// `typed` is the text before the cursor, `cursor` its length in scalars.
    pub fn complete(
        &mut self,
        typed: &str,
        cursor: usize,
        completer: &dyn Completer,
    ) -> CompletionAction {
        if self.display_mode {
            return CompletionAction::DisplayCandidates;
        }

        let candidates = completer.complete(typed, cursor);
        let completion = match candidates.as_slice() {
            [] => return CompletionAction::Nothing,
            [only] => only.clone(),
            [..] => {
                let prefix = longest_common_prefix(&candidates, typed);
                self.candidates = candidates;
                self.display_mode = true;
                prefix
            }
        };

        let overlap = find_overlap(typed, &completion);
        let remainder: String = completion.chars().skip(overlap).collect();
        if remainder.is_empty() {
            CompletionAction::Nothing
        } else {
            CompletionAction::Insert(remainder)
        }
    }
}

/// Compares scalar by scalar, no locale rules.
#[must_use]
pub fn common_prefix(lhs: &str, rhs: &str) -> String {
    lhs.chars()
        .zip(rhs.chars())
        .take_while(|(l, r)| l == r)
        .map(|(l, _)| l)
        .collect()
}

/// Folds [`common_prefix`] over `candidates` left to right. Stops early once the
/// running prefix equals `typed`.
#[must_use]
pub fn longest_common_prefix(candidates: &[String], typed: &str) -> String {
    let mut iter = candidates.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };
    let mut prefix = first.clone();
    for it in iter {
        prefix = common_prefix(&prefix, it);
        if prefix == typed {
            break;
        }
    }
    prefix
}

/// Length (in scalars) of the longest tail of `typed` that is also a head of
/// `completion`.
#[must_use]
pub fn find_overlap(typed: &str, completion: &str) -> usize {
    let completion: Vec<char> = completion.chars().collect();
    let typed: Vec<char> = typed.chars().collect();
    let max = completion.len().min(typed.len());
    (0..=max)
        .rev()
        .find(|&len| typed[typed.len() - len..] == completion[..len])
        .unwrap_or(0)
}
