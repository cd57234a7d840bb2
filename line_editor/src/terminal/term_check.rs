// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::LineSessionConfig;
use std::env;

/// Whether the terminal can handle the escape sequences the editor emits. Decided
/// once, when the session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSupport {
    Supported,
    /// Read plain lines, no editing.
    Unsupported,
}

impl TermSupport {
    /// Reads `TERM` from the environment.
    #[must_use]
    pub fn detect(config: &LineSessionConfig) -> Self {
        let term = env::var("TERM").ok();
        Self::from_term(term.as_deref(), &config.unsupported_terms)
    }

    /// Case insensitive match of `term` against `unsupported`. A missing `TERM` is
    /// treated as supported.
    #[must_use]
    pub fn from_term(term: Option<&str>, unsupported: &[String]) -> Self {
        let Some(term) = term else {
            return TermSupport::Supported;
        };
        if unsupported.iter().any(|it| it.eq_ignore_ascii_case(term)) {
            TermSupport::Unsupported
        } else {
            TermSupport::Supported
        }
    }
}
