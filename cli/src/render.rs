//! Terminal rendering of chat log entries.
//!
//! Payloads come straight off the wire, so control characters are replaced
//! before printing; a peer cannot move the cursor or recolor the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::io::Write;

use session::{EntryKind, LogEntry, LogSink};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per entry.
    Text,
    /// One JSON object per entry.
    Json,
}

/// Replace control characters (including ESC and newlines) with U+FFFD.
#[must_use]
pub fn sanitize_terminal(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() && c != '\t' { char::REPLACEMENT_CHARACTER } else { c })
        .collect()
}

/// Render one entry as a text line, without the trailing newline.
#[must_use]
pub fn render_line(entry: &LogEntry) -> String {
    let text = sanitize_terminal(&entry.text);
    match entry.kind {
        EntryKind::Message => text,
        EntryKind::Server => format!("[server] {text}"),
        EntryKind::Disconnect => format!("*** {text}"),
    }
}

/// Log sink that prints each entry as it arrives.
pub struct TerminalLog<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> TerminalLog<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    fn write_entry(&mut self, entry: &LogEntry) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", render_line(entry))?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, entry)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> LogSink for TerminalLog<W> {
    fn append(&mut self, entry: LogEntry) {
        if let Err(error) = self.write_entry(&entry) {
            tracing::warn!(%error, "failed to write chat log entry");
        }
    }
}
