//! Error types for session operations.

/// Failure reported by a [`Transport`](crate::Transport) implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The underlying socket or its writer is gone.
    #[error("transport closed")]
    Closed,
}

/// Error returned by [`ChatSession::submit`](crate::ChatSession::submit).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Submit attempted while the connection is not open; nothing is queued.
    #[error("connection is not open (status: {0})")]
    NotOpen(crate::ConnectionStatus),
    /// The transport rejected the outbound frame.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
