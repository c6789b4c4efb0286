#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while binding the chat client to the host page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("no global `window` object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("this browser does not support WebSocket")]
    WebSocketUnsupported,
    #[error("host page has no element with id `{0}`")]
    MissingElement(&'static str),
    #[error("element `{0}` has the wrong type")]
    WrongElementType(&'static str),
    #[error("DOM call failed: {0}")]
    Dom(String),
}
