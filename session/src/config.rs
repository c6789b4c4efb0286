//! Session configuration supplied by the front end.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::connection::ReconnectPolicy;

/// Default prefix marking input as a command.
pub const DEFAULT_COMMAND_PREFIX: char = '/';

/// What to do with a command frame built from prefixed input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommandPolicy {
    /// Build the frame and drop it without sending.
    #[default]
    Discard,
    /// Send the frame over the chat connection.
    Send,
}

impl CommandPolicy {
    #[must_use]
    pub fn from_send_flag(send: bool) -> Self {
        if send { Self::Send } else { Self::Discard }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub command_prefix: char,
    pub command_policy: CommandPolicy,
    pub reconnect: ReconnectPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            command_prefix: DEFAULT_COMMAND_PREFIX,
            command_policy: CommandPolicy::default(),
            reconnect: ReconnectPolicy::default(),
        }
    }
}
