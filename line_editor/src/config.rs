// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::DEFAULT_HISTORY_CAPACITY;

/// Used when the terminal reports a width of 0 (e.g. a serial console).
pub const DEFAULT_FALLBACK_COLUMNS: usize = 80;

/// `TERM` values that get plain line reading instead of editing.
pub const DEFAULT_UNSUPPORTED_TERMS: [&str; 2] = ["dumb", "cons25"];

/// Knobs for a [`crate::LineSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSessionConfig {
    pub history_capacity: usize,
    pub fallback_columns: usize,
    /// Compared case insensitively against `TERM`.
    pub unsupported_terms: Vec<String>,
    /// A second <kbd>Tab</kbd> with several matches lists them below the line.
    pub print_candidates_on_second_tab: bool,
}

impl Default for LineSessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            fallback_columns: DEFAULT_FALLBACK_COLUMNS,
            unsupported_terms: DEFAULT_UNSUPPORTED_TERMS
                .iter()
                .map(ToString::to_string)
                .collect(),
            print_candidates_on_second_tab: true,
        }
    }
}

impl LineSessionConfig {
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_fallback_columns(mut self, columns: usize) -> Self {
        self.fallback_columns = columns;
        self
    }

    #[must_use]
    pub fn with_unsupported_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unsupported_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_print_candidates_on_second_tab(mut self, enabled: bool) -> Self {
        self.print_candidates_on_second_tab = enabled;
        self
    }
}
