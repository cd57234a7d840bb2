// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The read loop. [`LineSession`] owns the terminal, the input stream and all the
//! editor state, and reads one line per [`LineSession::read_line`] call.
//!
//! ```text
//!  Idle ──read_line──► Reading ──Submit──────► Line(text)
//!                         │    ──Cancel──────► Cancelled
//!                         │    ──Ctrl+D/EOF──► Eof
//!                         └────error─────────► Err(ReadlineError)
//! ```
//!
//! Raw mode is only held while a read is in progress, see [`RawModeGuard`].

use crate::{CharReader, CompletionAction, CompletionEngine, Completer, DriverError,
            EditBuffer, History, KeyDispatcher, LineSessionConfig, Operation,
            RawModeGuard, ReadlineError, Renderer, TermSupport, TerminalDriver,
            default_terminal};
use std::{fmt::{Debug, Formatter},
          io::{self, Read},
          ops::ControlFlow};

/// Outcome of a [`LineSession::read_line`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadlineEvent {
    /// The submitted text, without the line terminator.
    Line(String),
    /// The user pressed `Ctrl+C`. The partial line is discarded.
    Cancelled,
    /// `Ctrl+D` on an empty tail, or the input stream ended.
    Eof,
}

/// Everything the read loop mutates, kept apart from the terminal and the input so
/// both can be borrowed at once.
struct EditorState {
    config: LineSessionConfig,
    buffer: EditBuffer,
    history: History,
    dispatcher: KeyDispatcher,
    completion: CompletionEngine,
    completer: Option<Box<dyn Completer>>,
    renderer: Renderer,
}

impl Debug for EditorState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorState")
            .field("config", &self.config)
            .field("buffer", &self.buffer)
            .field("history", &self.history)
            .field("dispatcher", &self.dispatcher)
            .field("completion", &self.completion)
            .field("has_completer", &self.completer.is_some())
            .field("renderer", &self.renderer)
            .finish()
    }
}

pub struct LineSession {
    editor: EditorState,
    terminal: Box<dyn TerminalDriver>,
    input: CharReader<Box<dyn Read>>,
    term_support: TermSupport,
}

impl Debug for LineSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSession")
            .field("editor", &self.editor)
            .field("terminal", &self.terminal)
            .field("term_support", &self.term_support)
            .finish_non_exhaustive()
    }
}

impl LineSession {
    /// Reads from stdin and draws with [`default_terminal`]. `TERM` is checked once,
    /// here.
    #[must_use]
    pub fn new(config: LineSessionConfig) -> Self {
        let term_support = TermSupport::detect(&config);
        Self::with_io(
            config,
            default_terminal(),
            Box::new(io::stdin()),
            term_support,
        )
    }

    /// Bring your own terminal and input stream.
    #[must_use]
    pub fn with_io(
        config: LineSessionConfig,
        terminal: Box<dyn TerminalDriver>,
        input: Box<dyn Read>,
        term_support: TermSupport,
    ) -> Self {
        let history = History::new(config.history_capacity);
        let renderer = Renderer::new(config.fallback_columns);
        Self {
            editor: EditorState {
                config,
                buffer: EditBuffer::new(),
                history,
                dispatcher: KeyDispatcher::new(),
                completion: CompletionEngine::new(),
                completer: None,
                renderer,
            },
            terminal,
            input: CharReader::new(input),
            term_support,
        }
    }

    /// Enables <kbd>Tab</kbd> completion. Without a completer, <kbd>Tab</kbd> inserts
    /// a literal tab.
    #[must_use]
    pub fn with_completer(mut self, completer: impl Completer + 'static) -> Self {
        self.editor.completer = Some(Box::new(completer));
        self
    }

    pub fn set_completer(&mut self, completer: Option<Box<dyn Completer>>) {
        self.editor.completer = completer;
    }

    /// Lines are never added automatically, the caller decides what to keep.
    pub fn add_history(&mut self, line: impl Into<String>) { self.editor.history.add(line); }

    /// Resizes the history. Existing entries are discarded.
    pub fn set_max_history(&mut self, capacity: usize) {
        self.editor.history.set_capacity(capacity);
    }

    #[must_use]
    pub fn history(&self) -> &History { &self.editor.history }

    #[must_use]
    pub fn term_support(&self) -> TermSupport { self.term_support }

    /// Shows `prompt` and reads one line.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::Io`] if the input stream fails.
    /// - [`ReadlineError::Driver`] if a terminal primitive fails. The terminal is
    ///   already restored when this is returned.
    pub fn read_line(&mut self, prompt: &str) -> Result<ReadlineEvent, ReadlineError> {
        if self.term_support == TermSupport::Unsupported {
            return self.read_plain_line(prompt);
        }

        let mut guard = RawModeGuard::new(self.terminal.as_mut())?;
        let result = self.editor.edit_line(&mut *guard, &mut self.input, prompt);
        let restore_result = guard.finish();
        let event = result?;
        restore_result?;

        tracing::info!(message = "read_line done", event = ?event);
        Ok(event)
    }

    fn read_plain_line(&mut self, prompt: &str) -> Result<ReadlineEvent, ReadlineError> {
        tracing::info!(message = "unsupported terminal, reading a plain line");

        self.terminal.write_text(prompt)?;
        self.terminal.flush()?;

        Ok(match self.input.read_plain_line()? {
            Some(line) => ReadlineEvent::Line(line),
            None => ReadlineEvent::Eof,
        })
    }
}

impl EditorState {
    fn edit_line(
        &mut self,
        term: &mut dyn TerminalDriver,
        input: &mut CharReader<Box<dyn Read>>,
        prompt: &str,
    ) -> Result<ReadlineEvent, ReadlineError> {
        let cols = self.columns(term);

        self.buffer.reset();
        self.dispatcher.reset();
        self.completion.reset();
        self.history.reset_browsing();
        self.renderer.reset(cols);
        self.renderer.redraw(term, prompt, &self.buffer)?;

        loop {
            let Some(ch) = input.read_char()? else {
                self.renderer.move_below_block(term)?;
                self.buffer.reset();
                return Ok(ReadlineEvent::Eof);
            };

            let op = self.dispatcher.feed(ch);
            if crate::DEBUG_LINE_EDITOR {
                tracing::debug! {
                    message = "key",
                    input = ?ch,
                    operation = %op,
                    escape_state = ?self.dispatcher.state(),
                };
            }

            if op != Operation::Complete {
                self.completion.reset();
            }

            if let ControlFlow::Break(event) = self.apply(term, prompt, op)? {
                return Ok(event);
            }
        }
    }

    /// Width from the driver, or the configured fallback when it reports 0 or fails.
    fn columns(&self, term: &mut dyn TerminalDriver) -> usize {
        match term.columns() {
            Ok(0) => {
                tracing::warn!(
                    message = "terminal reports 0 columns, using fallback",
                    fallback = self.config.fallback_columns
                );
                self.config.fallback_columns
            }
            Ok(cols) => cols,
            Err(err) => {
                tracing::warn!(
                    message = "can't query columns, using fallback",
                    fallback = self.config.fallback_columns,
                    error = ?err
                );
                self.config.fallback_columns
            }
        }
    }

    fn apply(
        &mut self,
        term: &mut dyn TerminalDriver,
        prompt: &str,
        op: Operation,
    ) -> Result<ControlFlow<ReadlineEvent>, DriverError> {
        let cursor = self.buffer.cursor();
        let needs_redraw = op.needs_redraw();

        match op {
            Operation::InsertChar(ch) => {
                self.buffer.insert_char(cursor, ch);
                self.buffer.set_cursor(cursor + 1);
            }
            Operation::InsertString(text) => {
                let inserted = self.buffer.insert_str(cursor, &text);
                self.buffer.set_cursor(cursor + inserted);
            }
            Operation::Backspace => {
                if cursor == 0 {
                    return Ok(ControlFlow::Continue(()));
                }
                self.buffer.remove_at(cursor - 1);
                self.buffer.set_cursor(cursor - 1);
            }
            Operation::DeleteForward => {
                self.buffer.remove_at(cursor);
            }
            Operation::DeleteToStart => self.buffer.truncate_until(cursor),
            Operation::DeleteToEnd => self.buffer.truncate_from(cursor),
            Operation::ClearScreen => {
                self.renderer.clear_screen(term, prompt, &self.buffer)?;
                return Ok(ControlFlow::Continue(()));
            }
            Operation::MoveHome => self.buffer.set_cursor(0),
            Operation::MoveEnd => self.buffer.set_cursor(self.buffer.len()),
            Operation::MoveRight => self.buffer.set_cursor(cursor + 1),
            Operation::MoveLeft => self.buffer.set_cursor(cursor.saturating_sub(1)),
            Operation::HistoryPrev => {
                if let Some(entry) = self.history.recall_prev() {
                    self.buffer.replace_all(entry);
                }
            }
            Operation::HistoryNext => {
                if let Some(entry) = self.history.recall_next() {
                    self.buffer.replace_all(entry);
                }
            }
            Operation::Complete => return self.complete(term, prompt),
            Operation::Transpose => {
                if !self.buffer.transpose_at(cursor) {
                    return Ok(ControlFlow::Continue(()));
                }
            }
            Operation::EndOfInput => {
                if cursor + 1 >= self.buffer.len() {
                    return self.finish(term, ReadlineEvent::Eof);
                }
                self.buffer.remove_at(cursor);
            }
            Operation::Cancel => return self.finish(term, ReadlineEvent::Cancelled),
            Operation::Submit => {
                let line = self.buffer.content_as_text();
                return self.finish(term, ReadlineEvent::Line(line));
            }
            Operation::EscapeSeen | Operation::NoOp => {}
        }

        if needs_redraw {
            self.renderer.redraw(term, prompt, &self.buffer)?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn complete(
        &mut self,
        term: &mut dyn TerminalDriver,
        prompt: &str,
    ) -> Result<ControlFlow<ReadlineEvent>, DriverError> {
        let Some(completer) = self.completer.as_deref() else {
            return self.apply(term, prompt, Operation::InsertChar('\t'));
        };

        let typed = self.buffer.text_before_cursor();
        match self
            .completion
            .complete(&typed, self.buffer.cursor(), completer)
        {
            CompletionAction::Nothing => Ok(ControlFlow::Continue(())),
            CompletionAction::Insert(text) => {
                self.apply(term, prompt, Operation::InsertString(text))
            }
            CompletionAction::DisplayCandidates => {
                if self.config.print_candidates_on_second_tab {
                    self.renderer.print_candidates(
                        term,
                        self.completion.candidates(),
                        prompt,
                        &self.buffer,
                    )?;
                }
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    /// Leaves the block on screen, moves below it and ends the read.
    fn finish(
        &mut self,
        term: &mut dyn TerminalDriver,
        event: ReadlineEvent,
    ) -> Result<ControlFlow<ReadlineEvent>, DriverError> {
        self.renderer.move_below_block(term)?;
        self.buffer.reset();
        Ok(ControlFlow::Break(event))
    }
}
