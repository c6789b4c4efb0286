//! Networking modules for the chat WebSocket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` adapts an outbound channel to the session's `Transport` seam,
//! and `frame_client` owns the socket lifecycle that drains that channel and
//! feeds inbound frames back into the session. `ready` holds the session in
//! `Connecting` until the socket has finished its handshake.

#[cfg(feature = "csr")]
pub mod frame_client;
#[cfg(any(test, feature = "csr"))]
pub mod ready;
#[cfg(feature = "csr")]
pub mod transport;
