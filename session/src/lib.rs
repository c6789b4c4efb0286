//! # session
//!
//! Transport-agnostic chat session shared by the browser `client` and the
//! terminal `cli`.
//!
//! SYSTEM CONTEXT
//! ==============
//! A front end owns one [`ChatSession`] per run and feeds it events from its
//! own event loop: socket open, inbound text, socket close, and user submit.
//! The session decodes frames with the `frames` codec, appends entries to its
//! [`LogSink`], reads and clears its [`InputSink`], and writes outbound text
//! to its [`Transport`]. Front ends supply the three seams.

pub mod chat_log;
pub mod config;
pub mod connection;
pub mod error;
pub mod session;
pub mod sink;

pub use chat_log::{ChatLog, DISCONNECT_NOTICE, EntryKind, LogEntry};
pub use config::{CommandPolicy, SessionConfig};
pub use connection::{CloseOutcome, ConnectionStatus, ReconnectPolicy};
pub use error::{SessionError, TransportError};
pub use session::{ChatSession, Submission, is_confirm_key};
pub use sink::{InputSink, LogSink, Transport};
