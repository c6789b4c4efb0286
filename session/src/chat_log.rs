//! Append-only chat history.
//!
//! Entries hold plain text exactly as received. Escaping is the renderer's
//! job: the browser emits text nodes and the terminal strips control
//! characters, so no entry is ever interpreted as markup.

#[cfg(test)]
#[path = "chat_log_test.rs"]
mod chat_log_test;

use serde::Serialize;

use crate::sink::LogSink;

/// Fixed notice appended once when the connection is gone for good.
pub const DISCONNECT_NOTICE: &str = "You were disconnected. Refresh page to create new connection.";

/// Rendering style of a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular chat message.
    Message,
    /// Server status notice.
    Server,
    /// Terminal disconnect notice.
    Disconnect,
}

/// One rendered line of chat history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub kind: EntryKind,
    pub text: String,
}

impl LogEntry {
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self { kind: EntryKind::Message, text: text.into() }
    }

    #[must_use]
    pub fn server(text: impl Into<String>) -> Self {
        Self { kind: EntryKind::Server, text: text.into() }
    }

    #[must_use]
    pub fn disconnect() -> Self {
        Self { kind: EntryKind::Disconnect, text: DISCONNECT_NOTICE.to_owned() }
    }
}

/// In-memory log, used as the browser's reactive state and in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatLog {
    pub entries: Vec<LogEntry>,
}

impl ChatLog {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }
}

impl LogSink for ChatLog {
    fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }
}
