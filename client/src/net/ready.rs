//! Gate between creating a socket and reporting it open to the session.
//!
//! A browser socket is still connecting when the constructor returns. The
//! session only hears `on_open` once the writer accepts frames and the
//! socket reports itself open, so input typed during the handshake stays in
//! the field instead of being sent into a half-open socket.

#[cfg(test)]
#[path = "ready_test.rs"]
mod ready_test;

use std::fmt;
use std::future::poll_fn;

use futures::{Sink, SinkExt};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpenError {
    #[error("socket closed before it opened")]
    ClosedBeforeOpen,
    #[error("socket failed while opening: {0}")]
    Failed(String),
}

/// Wait until `sink` is ready, then call `on_open` if `is_open` agrees.
///
/// `on_open` is never called on the error paths.
///
/// # Errors
///
/// Returns [`OpenError::Failed`] when readiness fails and
/// [`OpenError::ClosedBeforeOpen`] when the sink became ready by closing.
pub async fn open_when_ready<K, M, P, F>(
    sink: &mut K,
    is_open: P,
    on_open: F,
) -> Result<(), OpenError>
where
    K: Sink<M> + Unpin,
    K::Error: fmt::Display,
    P: FnOnce(&K) -> bool,
    F: FnOnce(),
{
    poll_fn(|cx| sink.poll_ready_unpin(cx))
        .await
        .map_err(|e| OpenError::Failed(e.to_string()))?;
    if !is_open(sink) {
        return Err(OpenError::ClosedBeforeOpen);
    }
    on_open();
    Ok(())
}
