// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::{Arc, Mutex}};

/// You can safely clone this struct, since it only contains an `Arc<Mutex<Vec<u8>>>`.
/// The inner `buffer` will not be cloned, just the [Arc] will be cloned.
#[derive(Clone, Default, Debug)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl StdoutMock {
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        let buffer_data = self.buffer.lock().unwrap();
        String::from_utf8(buffer_data.clone()).expect("utf8")
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

#[test]
fn test_stdout_mock_clone_shares_buffer() {
    let mut stdout_mock = StdoutMock::default();
    let stdout_mock_clone = stdout_mock.clone(); // Points to the same inner value as `stdout_mock`.

    stdout_mock.write_all(b"hello world").unwrap();
    stdout_mock.flush().unwrap();

    pretty_assertions::assert_eq!(
        stdout_mock_clone.get_copy_of_buffer_as_string(),
        "hello world"
    );
}
