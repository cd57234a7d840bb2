// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Blocking, byte at a time input decoding.
//!
//! Raw mode delivers one byte per keystroke byte, and a multi byte UTF-8 character
//! (or an escape sequence) may arrive split across reads. [`CharReader`] pulls bytes
//! one by one and assembles complete scalars. Malformed input becomes
//! [`char::REPLACEMENT_CHARACTER`] instead of an error.

use std::io::{self, Read};

pub const UTF8_1BYTE_MAX: u8 = 0b0111_1111;
pub const UTF8_2BYTE_MIN: u8 = 0b1100_0000;
pub const UTF8_2BYTE_MAX: u8 = 0b1101_1111;
pub const UTF8_3BYTE_MIN: u8 = 0b1110_0000;
pub const UTF8_3BYTE_MAX: u8 = 0b1110_1111;
pub const UTF8_4BYTE_MIN: u8 = 0b1111_0000;
pub const UTF8_4BYTE_MAX: u8 = 0b1111_0111;
pub const UTF8_CONTINUATION_MASK: u8 = 0b1100_0000;
pub const UTF8_CONTINUATION_PATTERN: u8 = 0b1000_0000;

/// Total length of the sequence started by `first`, or `None` for a byte that
/// can't start one.
#[must_use]
pub fn utf8_sequence_len(first: u8) -> Option<usize> {
    match first {
        0..=UTF8_1BYTE_MAX => Some(1),
        UTF8_2BYTE_MIN..=UTF8_2BYTE_MAX => Some(2),
        UTF8_3BYTE_MIN..=UTF8_3BYTE_MAX => Some(3),
        UTF8_4BYTE_MIN..=UTF8_4BYTE_MAX => Some(4),
        _ => None,
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & UTF8_CONTINUATION_MASK == UTF8_CONTINUATION_PATTERN
}

#[derive(Debug)]
pub struct CharReader<R> {
    inner: R,
    /// A byte read ahead that turned out to start the next character.
    pushback: Option<u8>,
}

impl<R: Read> CharReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushback: None,
        }
    }

    /// `Ok(None)` at end of input. Interrupted reads are retried.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushback.take() {
            return Ok(Some(byte));
        }
        let mut buf = [0_u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }

    /// Next scalar, or `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// I/O errors from the underlying reader, unmodified.
    pub fn read_char(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };
        let Some(len) = utf8_sequence_len(first) else {
            return Ok(Some(char::REPLACEMENT_CHARACTER));
        };

        let mut bytes = [first, 0, 0, 0];
        for slot in bytes.iter_mut().take(len).skip(1) {
            match self.read_byte()? {
                Some(byte) if is_continuation(byte) => *slot = byte,
                Some(byte) => {
                    self.pushback = Some(byte);
                    return Ok(Some(char::REPLACEMENT_CHARACTER));
                }
                None => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }

        Ok(Some(
            std::str::from_utf8(&bytes[..len])
                .ok()
                .and_then(|it| it.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        ))
    }

    /// Reads up to and including `\n`, for terminals that get no editing. The
    /// terminator (`\n` or `\r\n`) is stripped. `Ok(None)` when the input is already
    /// exhausted; a final unterminated line is still returned.
    ///
    /// # Errors
    ///
    /// I/O errors from the underlying reader, unmodified.
    pub fn read_plain_line(&mut self) -> io::Result<Option<String>> {
        let mut acc = vec![];
        let mut saw_newline = false;
        while let Some(byte) = self.read_byte()? {
            if byte == b'\n' {
                saw_newline = true;
                break;
            }
            acc.push(byte);
        }
        if acc.is_empty() && !saw_newline {
            return Ok(None);
        }
        if acc.last() == Some(&b'\r') {
            acc.pop();
        }
        Ok(Some(String::from_utf8_lossy(&acc).into_owned()))
    }
}
