//! Shared frame model and text codec for the chat WebSocket transport.
//!
//! This crate owns the wire representation used by both `client` and `cli`.
//! A frame travels as a single text message shaped `TAG:payload`: the tag
//! names the frame kind and the payload is everything after the first `:`,
//! including any further `:` characters.


/// Delimiter between tag and payload on the wire.
const DELIMITER: char = ':';

/// Tag for chat message content.
pub const TAG_MESSAGE: &str = "MESSAGE";
/// Tag for server status notices.
pub const TAG_SERVER: &str = "SERVER";
/// Tag for client commands.
pub const TAG_COMMAND: &str = "COMMAND";

/// Error returned by [`decode_frame`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The raw text has no `:` separating tag from payload.
    #[error("frame has no `:` delimiter")]
    MissingDelimiter,
}

/// A single message on the chat wire protocol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Chat line to show in the log.
    Message(String),
    /// Server status notice, rendered with a distinct style.
    Server(String),
    /// Client command, e.g. `/nick` with the prefix stripped.
    Command(String),
    /// Well-formed frame whose tag is not one of the known kinds.
    Unrecognized { tag: String, payload: String },
}

impl Frame {
    /// Build a frame from a tag and payload, matching the tag exactly.
    #[must_use]
    pub fn from_parts(tag: &str, payload: &str) -> Self {
        match tag {
            TAG_MESSAGE => Self::Message(payload.to_owned()),
            TAG_SERVER => Self::Server(payload.to_owned()),
            TAG_COMMAND => Self::Command(payload.to_owned()),
            _ => Self::Unrecognized {
                tag: tag.to_owned(),
                payload: payload.to_owned(),
            },
        }
    }

    /// Wire tag for this frame.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Message(_) => TAG_MESSAGE,
            Self::Server(_) => TAG_SERVER,
            Self::Command(_) => TAG_COMMAND,
            Self::Unrecognized { tag, .. } => tag,
        }
    }

    /// Payload text, verbatim.
    #[must_use]
    pub fn payload(&self) -> &str {
        match self {
            Self::Message(payload) | Self::Server(payload) | Self::Command(payload) => payload,
            Self::Unrecognized { payload, .. } => payload,
        }
    }
}

/// Encode a frame into its `TAG:payload` text form.
#[must_use]
pub fn encode_frame(frame: &Frame) -> String {
    let tag = frame.tag();
    let payload = frame.payload();
    let mut out = String::with_capacity(tag.len() + 1 + payload.len());
    out.push_str(tag);
    out.push(DELIMITER);
    out.push_str(payload);
    out
}

/// Decode raw text into a frame, splitting at the first delimiter.
///
/// # Errors
///
/// Returns [`CodecError::MissingDelimiter`] when `raw` contains no `:`.
pub fn decode_frame(raw: &str) -> Result<Frame, CodecError> {
    let (tag, payload) = raw
        .split_once(DELIMITER)
        .ok_or(CodecError::MissingDelimiter)?;
    Ok(Frame::from_parts(tag, payload))
}
