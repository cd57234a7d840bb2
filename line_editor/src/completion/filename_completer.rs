// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Completer, DEFAULT_WORD_DELIMITER, byte_offset_of};
use std::{env, fs, io,
          path::{Path, PathBuf}};

/// Completes the path before the cursor against a directory listing.
///
/// | Typed          | Directory listed            |
/// |----------------|-----------------------------|
/// | `/usr/lo`      | `/usr`                      |
/// | `~/Doc`        | `$HOME` (or `%USERPROFILE%`)|
/// | `src/ma`       | `<cwd>/src`                 |
/// | `Car`          | `<cwd>`                     |
///
/// Candidates are bare entry names (directories get a trailing `/`), sorted. Errors
/// reading the directory produce no candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameCompleter {
    delimiter: String,
    base_dir: Option<PathBuf>,
}

impl Default for FilenameCompleter {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_WORD_DELIMITER.to_string(),
            base_dir: None,
        }
    }
}

impl FilenameCompleter {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Resolve relative paths against `dir` instead of the current directory.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Splits the typed path into the directory to list and the file name prefix.
    /// Returns `None` for `~user` forms, which aren't supported.
    fn resolve(&self, typed: &str) -> Option<(PathBuf, String)> {
        let (dir_part, name_prefix) = match typed.rfind('/') {
            Some(pos) => (&typed[..=pos], &typed[pos + 1..]),
            None => ("", typed),
        };

        let dir = if Path::new(dir_part).is_absolute() {
            PathBuf::from(dir_part)
        } else if let Some(rest) = dir_part.strip_prefix("~/") {
            home_dir()?.join(rest)
        } else if typed.starts_with('~') {
            return None;
        } else {
            self.base_dir
                .clone()
                .or_else(|| env::current_dir().ok())?
                .join(dir_part)
        };

        Some((dir, name_prefix.to_string()))
    }
}

fn home_dir() -> Option<PathBuf> {
    let key = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    env::var_os(key).map(PathBuf::from)
}

fn list_matching(dir: &Path, prefix: &str) -> io::Result<Vec<String>> {
    let mut acc = vec![];
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if !name.starts_with(prefix) {
            continue;
        }
        if entry.file_type()?.is_dir() {
            acc.push(format!("{name}/"));
        } else {
            acc.push(name);
        }
    }
    acc.sort();
    Ok(acc)
}

impl Completer for FilenameCompleter {
    fn complete(&self, line: &str, cursor: usize) -> Vec<String> {
        let before = &line[..byte_offset_of(line, cursor)];
        let typed = if self.delimiter.is_empty() {
            before
        } else {
            before
                .rfind(self.delimiter.as_str())
                .map_or(before, |pos| &before[pos + self.delimiter.len()..])
        };

        let Some((dir, prefix)) = self.resolve(typed) else {
            return vec![];
        };

        match list_matching(&dir, &prefix) {
            Ok(it) => it,
            Err(err) => {
                tracing::warn!(
                    message = "filename completion failed",
                    dir = %dir.display(),
                    error = %err
                );
                vec![]
            }
        }
    }
}
