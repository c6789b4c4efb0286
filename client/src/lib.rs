//! # client
//!
//! Leptos + WASM browser front end for the chat session.
//!
//! The host page provides three elements: a log container (`#chat`), a text
//! input (`#sendmessage`) and a send button (`#sender_button`). [`start`]
//! mounts a Leptos log view into the container, wires the input and button,
//! and opens the WebSocket.
//!
//! Everything that touches the browser is gated behind `#[cfg(feature = "csr")]`.

#[cfg(feature = "csr")]
pub mod app;
pub mod components;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

pub use error::ClientError;

/// Entry point called from the host page's bootstrap script.
///
/// `endpoint` overrides the URL derived from `window.location`.
///
/// # Errors
///
/// Rejects with a message when the browser lacks WebSocket support or the
/// host page is missing one of the required elements.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start(
    endpoint: Option<String>,
    send_commands: bool,
    reconnect_attempts: u32,
) -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    // Bridges the session crate's `log` records to the console.
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::debug_warn!("logger already initialized");
    }

    let config = app::ClientConfig::new(endpoint, send_commands, reconnect_attempts);
    app::mount_chat(config).map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
}
