//! Connection lifecycle state and reconnect backoff.
//!
//! TRADE-OFFS
//! ==========
//! The default policy allows no reconnect attempts, so a close is terminal
//! and the user has to reload. Front ends that opt in get bounded
//! exponential backoff; once the attempts run out the session lands in the
//! same terminal `Closed` state.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use std::fmt;
use std::time::Duration;

/// Lifecycle of the single chat connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Open,
    /// Waiting out a backoff delay before the next connect attempt.
    Reconnecting,
    /// Terminal. No further attempts are made.
    Closed,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Connecting => "connecting",
            Self::Open => "open",
            Self::Reconnecting => "reconnecting",
            Self::Closed => "closed",
        };
        f.write_str(label)
    }
}

/// What the driver should do after a close event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Sleep for the delay, then connect again.
    Retry(Duration),
    /// Stop. The disconnect notice has been shown.
    Terminal,
}

/// Bounded exponential backoff for reconnecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReconnectPolicy {
    /// Reconnect attempts allowed after a close. Zero disables reconnecting.
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 0,
            initial_backoff: Duration::from_millis(1000),
            max_backoff: Duration::from_millis(10_000),
        }
    }
}

impl ReconnectPolicy {
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Delay before the given 1-based attempt; doubles each time up to the cap.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let factor = 1_u32 << exponent;
        self.initial_backoff
            .checked_mul(factor)
            .map_or(self.max_backoff, |delay| delay.min(self.max_backoff))
    }
}
