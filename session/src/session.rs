//! The chat session: one connection, one log, one input.
//!
//! Event handlers run to completion on the caller's thread. The session never
//! blocks and never queues: an outbound frame is either handed to the
//! transport immediately or rejected with an error.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use frames::{Frame, decode_frame, encode_frame};

use crate::chat_log::LogEntry;
use crate::config::{CommandPolicy, SessionConfig};
use crate::connection::{CloseOutcome, ConnectionStatus};
use crate::error::SessionError;
use crate::sink::{InputSink, LogSink, Transport};

/// Key name reported for the confirm key.
const CONFIRM_KEY: &str = "Enter";
/// Legacy key code for the confirm key.
const CONFIRM_KEY_CODE: u32 = 13;

/// Whether a key event is the confirm key that submits the input.
#[must_use]
pub fn is_confirm_key(key: &str, key_code: u32) -> bool {
    key == CONFIRM_KEY || key_code == CONFIRM_KEY_CODE
}

/// Result of a successful [`ChatSession::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Input was empty; nothing was built or sent.
    Empty,
    /// Frame was handed to the transport.
    Sent(Frame),
    /// Command frame was built but the policy keeps it off the wire.
    Discarded(Frame),
}

/// Explicit session state for one chat client run.
pub struct ChatSession<T, L, I> {
    config: SessionConfig,
    status: ConnectionStatus,
    attempts: u32,
    notified: bool,
    transport: T,
    log: L,
    input: I,
}

impl<T, L, I> ChatSession<T, L, I>
where
    T: Transport,
    L: LogSink,
    I: InputSink,
{
    pub fn new(config: SessionConfig, transport: T, log: L, input: I) -> Self {
        Self {
            config,
            status: ConnectionStatus::Connecting,
            attempts: 0,
            notified: false,
            transport,
            log,
            input,
        }
    }

    #[must_use]
    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    #[must_use]
    pub fn log(&self) -> &L {
        &self.log
    }

    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Transport reported the connection as open.
    pub fn on_open(&mut self) {
        if self.status == ConnectionStatus::Closed {
            log::warn!("ignoring open event on a closed session");
            return;
        }
        self.status = ConnectionStatus::Open;
        self.attempts = 0;
        log::info!("chat connection open");
    }

    /// Handle one inbound text frame. Returns `true` if the log changed.
    pub fn on_frame(&mut self, raw: &str) -> bool {
        log::debug!("inbound frame: {raw}");

        match decode_frame(raw) {
            Ok(Frame::Message(payload)) => {
                self.log.append(LogEntry::message(payload));
                true
            }
            Ok(Frame::Server(payload)) => {
                self.log.append(LogEntry::server(payload));
                true
            }
            Ok(frame) => {
                log::debug!("dropping inbound frame with tag `{}`", frame.tag());
                false
            }
            Err(e) => {
                log::debug!("dropping malformed inbound frame: {e}");
                false
            }
        }
    }

    /// Transport reported closure, from either end.
    ///
    /// The disconnect notice is appended the first time the session becomes
    /// terminal and never again.
    pub fn on_close(&mut self) -> CloseOutcome {
        if self.status == ConnectionStatus::Closed {
            return CloseOutcome::Terminal;
        }

        let policy = self.config.reconnect;
        if self.attempts < policy.max_attempts {
            self.attempts += 1;
            self.status = ConnectionStatus::Reconnecting;
            let delay = policy.delay_for(self.attempts);
            log::info!(
                "chat connection closed; reconnect attempt {}/{} in {}ms",
                self.attempts,
                policy.max_attempts,
                delay.as_millis()
            );
            return CloseOutcome::Retry(delay);
        }

        self.status = ConnectionStatus::Closed;
        if !self.notified {
            self.notified = true;
            self.log.append(LogEntry::disconnect());
        }
        log::info!("chat connection closed");
        CloseOutcome::Terminal
    }

    /// Read the input, send it as a tagged frame, and clear the input.
    ///
    /// Input whose trimmed form starts with the command prefix becomes a
    /// `COMMAND` frame; everything else is sent as `MESSAGE` with the exact
    /// untrimmed text. The input is left untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotOpen`] when the connection is not open and
    /// [`SessionError::Transport`] when the transport rejects the frame.
    pub fn submit(&mut self) -> Result<Submission, SessionError> {
        let value = self.input.value();
        if value.is_empty() {
            return Ok(Submission::Empty);
        }

        let frame = self.frame_for_input(&value);
        let submission = if matches!(frame, Frame::Command(_))
            && self.config.command_policy == CommandPolicy::Discard
        {
            log::debug!("command built but not sent: {}", frame.payload());
            Submission::Discarded(frame)
        } else {
            self.send(&frame)?;
            Submission::Sent(frame)
        };

        self.input.clear();
        Ok(submission)
    }

    fn frame_for_input(&self, value: &str) -> Frame {
        match value.trim().strip_prefix(self.config.command_prefix) {
            Some(command) => Frame::Command(command.to_owned()),
            None => Frame::Message(value.to_owned()),
        }
    }

    fn send(&mut self, frame: &Frame) -> Result<(), SessionError> {
        if self.status != ConnectionStatus::Open {
            log::warn!("send attempted while connection is {}", self.status);
            return Err(SessionError::NotOpen(self.status));
        }
        self.transport.send_text(encode_frame(frame))?;
        Ok(())
    }
}
