//! Seams between the session and its host environment.

use crate::chat_log::LogEntry;
use crate::error::TransportError;

/// Outbound half of the chat connection.
///
/// Sends are fire-and-forget: `Ok` means the text was handed to the socket
/// writer, not that the peer received it.
pub trait Transport {
    /// Hand one encoded frame to the socket.
    ///
    /// # Errors
    ///
    /// Returns an error when the writer can no longer accept text.
    fn send_text(&mut self, text: String) -> Result<(), TransportError>;
}

/// Visible surface that accumulates rendered history.
pub trait LogSink {
    fn append(&mut self, entry: LogEntry);
}

/// Text input the user types into.
pub trait InputSink {
    /// Current input value, untrimmed.
    fn value(&self) -> String;
    fn clear(&mut self);
}
