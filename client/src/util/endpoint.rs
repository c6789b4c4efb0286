//! WebSocket endpoint derivation from the page location.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Path of the chat socket on the serving host.
pub const CHAT_PATH: &str = "/chat";

/// Build the chat endpoint for a page served from `protocol` and `host`.
///
/// `protocol` is the `window.location.protocol` value, e.g. `"https:"`.
#[must_use]
pub fn endpoint_from_location(protocol: &str, host: &str) -> String {
    let scheme = if protocol.starts_with("https") { "wss" } else { "ws" };
    format!("{scheme}://{host}{CHAT_PATH}")
}

/// Pick the configured endpoint, or fall back to one derived from the page.
#[must_use]
pub fn resolve_endpoint(configured: Option<&str>, protocol: &str, host: &str) -> String {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_owned(),
        _ => endpoint_from_location(protocol, host),
    }
}
