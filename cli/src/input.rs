//! Line reader for stdin that tolerates invalid UTF-8.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Yields newline-terminated lines, replacing invalid UTF-8 with U+FFFD.
///
/// Partially read bytes stay buffered across calls, so `next_line` is safe
/// to use as a `tokio::select!` branch.
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: Vec::new() }
    }

    /// Next line without its `\n` or `\r\n`, or `None` at EOF.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error from the reader.
    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let read = self.reader.read_until(b'\n', &mut self.buf).await?;
        if read == 0 && self.buf.is_empty() {
            return Ok(None);
        }

        let mut bytes = std::mem::take(&mut self.buf);
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }

        match String::from_utf8(bytes) {
            Ok(line) => Ok(Some(line)),
            Err(e) => {
                tracing::warn!("input line is not valid UTF-8; replacing invalid bytes");
                Ok(Some(String::from_utf8_lossy(e.as_bytes()).into_owned()))
            }
        }
    }
}
