//! Terminal chat client.
//!
//! Reads lines from stdin as chat input, prints the chat log to stdout, and
//! talks `TAG:payload` text frames over a single WebSocket connection.

pub mod args;
pub mod input;
pub mod outbox;
pub mod render;
pub mod run;

pub use args::Cli;
pub use run::{run, run_session};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid endpoint (expected ws:// or wss:// URL): {0}")]
    InvalidEndpoint(String),
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
}
