// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The handful of CSI sequences the editor emits.

use std::fmt::{Display, Formatter, Result};

pub const CSI_START: &str = "\x1b[";

/// Cursor Up (CUU) - ESC [ n A
pub const CUU_CURSOR_UP: char = 'A';
/// Cursor Down (CUD) - ESC [ n B
pub const CUD_CURSOR_DOWN: char = 'B';
/// Cursor Horizontal Absolute (CHA) - ESC [ n G, 1 based.
pub const CHA_CURSOR_COLUMN: char = 'G';
/// Cursor Position (CUP) - ESC [ H with no params is the top left corner.
pub const CUP_CURSOR_POSITION: char = 'H';
/// Erase Display (ED) - ESC [ n J
pub const ED_ERASE_DISPLAY: char = 'J';

/// Parameter for [`ED_ERASE_DISPLAY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseDisplayMode {
    /// From the cursor to the end of the screen.
    ToEnd = 0,
    /// The whole screen.
    All = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    CursorUp(u16),
    CursorDown(u16),
    /// 1 based column.
    CursorHorizontalAbsolute(u16),
    CursorHome,
    EraseDisplay(EraseDisplayMode),
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(CSI_START)?;
        match self {
            CsiSequence::CursorUp(n) => write!(f, "{n}{CUU_CURSOR_UP}"),
            CsiSequence::CursorDown(n) => write!(f, "{n}{CUD_CURSOR_DOWN}"),
            CsiSequence::CursorHorizontalAbsolute(n) => {
                write!(f, "{n}{CHA_CURSOR_COLUMN}")
            }
            CsiSequence::CursorHome => write!(f, "{CUP_CURSOR_POSITION}"),
            CsiSequence::EraseDisplay(mode) => {
                write!(f, "{}{ED_ERASE_DISPLAY}", *mode as u8)
            }
        }
    }
}

/// Clamps a screen distance into the `u16` a CSI parameter can carry.
#[must_use]
pub fn csi_param(n: usize) -> u16 { u16::try_from(n).unwrap_or(u16::MAX) }

/// Sequences that put the cursor at absolute column `abs_x` (0 based) and `rel_y`
/// rows away (negative is up). No vertical sequence when `rel_y == 0`.
#[must_use]
pub fn move_cursor_sequences(abs_x: usize, rel_y: isize) -> Vec<CsiSequence> {
    let mut acc = vec![CsiSequence::CursorHorizontalAbsolute(csi_param(
        abs_x.saturating_add(1),
    ))];
    match rel_y.cmp(&0) {
        std::cmp::Ordering::Greater => {
            acc.push(CsiSequence::CursorDown(csi_param(rel_y.unsigned_abs())));
        }
        std::cmp::Ordering::Less => {
            acc.push(CsiSequence::CursorUp(csi_param(rel_y.unsigned_abs())));
        }
        std::cmp::Ordering::Equal => {}
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(CsiSequence::CursorUp(3), "\x1b[3A" ; "up")]
    #[test_case(CsiSequence::CursorDown(1), "\x1b[1B" ; "down")]
    #[test_case(CsiSequence::CursorHorizontalAbsolute(1), "\x1b[1G" ; "column")]
    #[test_case(CsiSequence::CursorHome, "\x1b[H" ; "home")]
    #[test_case(CsiSequence::EraseDisplay(EraseDisplayMode::ToEnd), "\x1b[0J" ; "erase to end")]
    #[test_case(CsiSequence::EraseDisplay(EraseDisplayMode::All), "\x1b[2J" ; "erase all")]
    fn test_display(seq: CsiSequence, expected: &str) {
        assert_eq!(seq.to_string(), expected);
    }

    #[test]
    fn test_move_cursor_sequences() {
        let render = |x, y| {
            move_cursor_sequences(x, y)
                .iter()
                .map(ToString::to_string)
                .collect::<String>()
        };
        assert_eq!(render(0, 0), "\x1b[1G");
        assert_eq!(render(4, -2), "\x1b[5G\x1b[2A");
        assert_eq!(render(9, 1), "\x1b[10G\x1b[1B");
    }
}
