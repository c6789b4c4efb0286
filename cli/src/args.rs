use clap::Parser;
use session::{CommandPolicy, ReconnectPolicy, SessionConfig};

use crate::CliError;
use crate::render::OutputFormat;

#[cfg(test)]
#[path = "args_test.rs"]
mod args_test;

pub const DEFAULT_ENDPOINT: &str = "ws://localhost:8080/chat";

#[derive(Parser, Debug)]
#[command(name = "wschat", about = "Terminal client for the wschat WebSocket chat")]
pub struct Cli {
    #[arg(long, env = "WSCHAT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value_t = '/', help = "Input starting with this character is a command")]
    pub command_prefix: char,

    #[arg(long, default_value_t = false, help = "Send commands instead of dropping them")]
    pub send_commands: bool,

    #[arg(long, env = "WSCHAT_RECONNECT_ATTEMPTS", default_value_t = 0)]
    pub reconnect_attempts: u32,

    #[arg(long, default_value_t = false, help = "Print log entries as JSON lines")]
    pub json: bool,
}

impl Cli {
    /// Endpoint URL, checked for a WebSocket scheme.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidEndpoint`] for anything but `ws://` or `wss://`.
    pub fn checked_endpoint(&self) -> Result<&str, CliError> {
        let endpoint = self.endpoint.as_str();
        if endpoint.starts_with("ws://") || endpoint.starts_with("wss://") {
            Ok(endpoint)
        } else {
            Err(CliError::InvalidEndpoint(self.endpoint.clone()))
        }
    }

    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            command_prefix: self.command_prefix,
            command_policy: CommandPolicy::from_send_flag(self.send_commands),
            reconnect: ReconnectPolicy::default().with_max_attempts(self.reconnect_attempts),
        }
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.json { OutputFormat::Json } else { OutputFormat::Text }
    }
}
