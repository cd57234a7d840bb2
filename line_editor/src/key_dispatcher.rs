// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns decoded input scalars into [`Operation`]s.
//!
//! Control codes (0-31, 127) are looked up in [`CONTROL_KEY_TABLE`]. Everything
//! else is inserted as text. `ESC` starts a multi byte sequence that is resolved by
//! the [`EscapeState`] machine, one scalar at a time:
//!
//! ```text
//!             ESC              '['             '1'..='6'          any
//!  Normal ─────────► SawEscape ───► SawCsi ─────────────► SawExtendedCsi ───► Normal
//!                        │             │  A B C D F H                 ("3~" = delete)
//!                        │             └──────────────► Normal
//!                        │  'O'              F H
//!                        └──────► SawSs3 ──────────────► Normal
//! ```
//!
//! Any byte that doesn't fit the grammar resolves to [`Operation::NoOp`] and the
//! machine returns to [`EscapeState::Normal`].

use strum_macros::{Display, EnumCount};

pub const ANSI_ESC: char = '\x1b';
pub const ANSI_CSI_BRACKET: char = '[';
pub const ANSI_SS3_O: char = 'O';
pub const ANSI_FUNCTION_KEY_TERMINATOR: char = '~';
pub const ANSI_DEL: char = '\x7f';

pub const ARROW_UP_FINAL: char = 'A';
pub const ARROW_DOWN_FINAL: char = 'B';
pub const ARROW_RIGHT_FINAL: char = 'C';
pub const ARROW_LEFT_FINAL: char = 'D';
pub const SPECIAL_END_FINAL: char = 'F';
pub const SPECIAL_HOME_FINAL: char = 'H';

/// `ESC [ 3 ~` is the delete key.
pub const DELETE_KEY_PARAM: char = '3';

/// What a single input scalar (or the tail of an escape sequence) asks the editor
/// to do.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumCount)]
pub enum Operation {
    InsertChar(char),
    InsertString(String),
    Backspace,
    DeleteForward,
    DeleteToStart,
    DeleteToEnd,
    ClearScreen,
    MoveHome,
    MoveEnd,
    MoveRight,
    MoveLeft,
    HistoryPrev,
    HistoryNext,
    Complete,
    Cancel,
    EndOfInput,
    Submit,
    Transpose,
    /// An escape sequence is in progress, more input is needed.
    EscapeSeen,
    NoOp,
}

impl Operation {
    /// Whether the operation can change what's on screen.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Operation::EscapeSeen | Operation::NoOp)
    }
}

/// Unbound control key.
const NOOP: Operation = Operation::NoOp;

/// Indexed by control code. 127 (DEL) is handled separately.
pub const CONTROL_KEY_TABLE: [Operation; 32] = [
    NOOP,                     // 0  ctrl-@
    Operation::MoveHome,      // 1  ctrl-a
    Operation::MoveLeft,      // 2  ctrl-b
    Operation::Cancel,        // 3  ctrl-c
    Operation::EndOfInput,    // 4  ctrl-d
    Operation::MoveEnd,       // 5  ctrl-e
    Operation::MoveRight,     // 6  ctrl-f
    NOOP,                     // 7  ctrl-g
    Operation::Backspace,     // 8  ctrl-h
    Operation::Complete,      // 9  tab
    Operation::Submit,        // 10 \n
    Operation::DeleteToEnd,   // 11 ctrl-k
    Operation::ClearScreen,   // 12 ctrl-l
    Operation::Submit,        // 13 \r
    NOOP,                     // 14 ctrl-n
    Operation::Submit,        // 15 ctrl-o
    Operation::HistoryPrev,   // 16 ctrl-p
    NOOP,                     // 17 ctrl-q, quoted insert
    NOOP,                     // 18 ctrl-r, reverse search
    NOOP,                     // 19 ctrl-s
    Operation::Transpose,     // 20 ctrl-t
    Operation::DeleteToStart, // 21 ctrl-u
    NOOP,                     // 22 ctrl-v
    NOOP,                     // 23 ctrl-w, word kill
    NOOP,                     // 24 ctrl-x
    NOOP,                     // 25 ctrl-y
    NOOP,                     // 26 ctrl-z
    Operation::EscapeSeen,    // 27 esc
    NOOP,                     // 28
    NOOP,                     // 29
    NOOP,                     // 30
    NOOP,                     // 31
];

/// Position inside a multi byte escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeState {
    #[default]
    Normal,
    /// Saw `ESC`.
    SawEscape,
    /// Saw `ESC [`.
    SawCsi,
    /// Saw `ESC O` (application keypad mode).
    SawSs3,
    /// Saw `ESC [ <param>` with `param` in `'1'..='6'`.
    SawExtendedCsi { param: char },
}

#[derive(Debug, Default)]
pub struct KeyDispatcher {
    state: EscapeState,
}

impl KeyDispatcher {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn state(&self) -> EscapeState { self.state }

    pub fn reset(&mut self) { self.state = EscapeState::Normal; }

    /// Resolves one input scalar. Returns [`Operation::EscapeSeen`] while an escape
    /// sequence is incomplete.
    pub fn feed(&mut self, ch: char) -> Operation {
        let (next_state, op) = match self.state {
            EscapeState::Normal => Self::resolve_normal(ch),
            EscapeState::SawEscape => match ch {
                ANSI_CSI_BRACKET => (EscapeState::SawCsi, Operation::EscapeSeen),
                ANSI_SS3_O => (EscapeState::SawSs3, Operation::EscapeSeen),
                _ => (EscapeState::Normal, Operation::NoOp),
            },
            EscapeState::SawCsi => Self::resolve_csi(ch),
            EscapeState::SawSs3 => (EscapeState::Normal, match ch {
                SPECIAL_END_FINAL => Operation::MoveEnd,
                SPECIAL_HOME_FINAL => Operation::MoveHome,
                _ => Operation::NoOp,
            }),
            EscapeState::SawExtendedCsi { param } => {
                let op = if param == DELETE_KEY_PARAM
                    && ch == ANSI_FUNCTION_KEY_TERMINATOR
                {
                    Operation::DeleteForward
                } else {
                    Operation::NoOp
                };
                (EscapeState::Normal, op)
            }
        };
        self.state = next_state;
        op
    }

    fn resolve_normal(ch: char) -> (EscapeState, Operation) {
        let op = match ch {
            ANSI_DEL => Operation::Backspace,
            _ => match u8::try_from(ch) {
                Ok(code) if code < 32 => CONTROL_KEY_TABLE[usize::from(code)].clone(),
                _ => Operation::InsertChar(ch),
            },
        };
        let next_state = if ch == ANSI_ESC {
            EscapeState::SawEscape
        } else {
            EscapeState::Normal
        };
        (next_state, op)
    }

    /// `A` (up arrow) recalls the next slot, `B` (down arrow) the previous one.
    fn resolve_csi(ch: char) -> (EscapeState, Operation) {
        let op = match ch {
            '1'..='6' => {
                return (EscapeState::SawExtendedCsi { param: ch }, Operation::EscapeSeen);
            }
            ARROW_UP_FINAL => Operation::HistoryNext,
            ARROW_DOWN_FINAL => Operation::HistoryPrev,
            ARROW_RIGHT_FINAL => Operation::MoveRight,
            ARROW_LEFT_FINAL => Operation::MoveLeft,
            SPECIAL_END_FINAL => Operation::MoveEnd,
            SPECIAL_HOME_FINAL => Operation::MoveHome,
            _ => Operation::NoOp,
        };
        (EscapeState::Normal, op)
    }
}
