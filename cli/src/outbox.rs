//! Session seams for the terminal: outbound frame buffer and line input.

use std::collections::VecDeque;

use session::{InputSink, Transport, TransportError};

/// Frames accepted by the session, waiting for the socket writer.
///
/// The run loop drains it right after every event, so it never holds more
/// than the output of a single submit.
#[derive(Debug, Default)]
pub struct Outbox {
    pending: VecDeque<String>,
}

impl Outbox {
    pub fn pop(&mut self) -> Option<String> {
        self.pending.pop_front()
    }
}

impl Transport for Outbox {
    fn send_text(&mut self, text: String) -> Result<(), TransportError> {
        self.pending.push_back(text);
        Ok(())
    }
}

/// The most recent stdin line, standing in for an input field.
#[derive(Debug, Default)]
pub struct LineInput {
    value: String,
}

impl LineInput {
    pub fn set(&mut self, line: String) {
        self.value = line;
    }
}

impl InputSink for LineInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn clear(&mut self) {
        self.value.clear();
    }
}
