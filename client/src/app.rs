//! Binding of the chat session to the host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page owns the markup. This module looks up the three required
//! elements, mounts [`ChatLogView`] into the log container, attaches click
//! and keyup listeners to the button and input, and starts the frame client.
//! The session lives in an `Rc<RefCell<_>>` shared by those handlers; all of
//! them run on the browser's single event loop and never hold the borrow
//! across an await.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use session::{ChatSession, CommandPolicy, ReconnectPolicy, SessionConfig, Submission, is_confirm_key};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::components::chat_log::ChatLogView;
use crate::error::ClientError;
use crate::net::frame_client::spawn_frame_client;
use crate::net::transport::ChannelTransport;
use crate::state::chat::SignalLog;
use crate::state::input::HostInput;
use crate::util::endpoint::resolve_endpoint;

pub const LOG_CONTAINER_ID: &str = "chat";
pub const INPUT_ID: &str = "sendmessage";
pub const SEND_BUTTON_ID: &str = "sender_button";

pub type BrowserSession = ChatSession<ChannelTransport, SignalLog, HostInput>;

/// Settings passed in by the host page.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoint: Option<String>,
    pub session: SessionConfig,
}

impl ClientConfig {
    pub fn new(endpoint: Option<String>, send_commands: bool, reconnect_attempts: u32) -> Self {
        Self {
            endpoint,
            session: SessionConfig {
                command_policy: CommandPolicy::from_send_flag(send_commands),
                reconnect: ReconnectPolicy::default().with_max_attempts(reconnect_attempts),
                ..SessionConfig::default()
            },
        }
    }
}

/// Bind the chat client to the host page and open the connection.
///
/// # Errors
///
/// Fails when WebSocket is unavailable or a required element is missing.
pub fn mount_chat(config: ClientConfig) -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    if !websocket_supported(&window) {
        return Err(ClientError::WebSocketUnsupported);
    }
    let document = window.document().ok_or(ClientError::NoDocument)?;

    let container = element_by_id::<web_sys::HtmlElement>(&document, LOG_CONTAINER_ID)?;
    let input = element_by_id::<web_sys::HtmlInputElement>(&document, INPUT_ID)?;
    let button = element_by_id::<web_sys::HtmlElement>(&document, SEND_BUTTON_ID)?;

    let location = window.location();
    let protocol = location.protocol().unwrap_or_default();
    let host = location.host().unwrap_or_else(|_| "localhost:8080".to_owned());
    let endpoint = resolve_endpoint(config.endpoint.as_deref(), &protocol, &host);

    let log = RwSignal::new(session::ChatLog::default());
    leptos::mount::mount_to(container, move || view! { <ChatLogView log=log/> }).forget();

    let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
    let session = Rc::new(RefCell::new(ChatSession::new(
        config.session,
        ChannelTransport::new(tx),
        SignalLog(log),
        HostInput::new(input.clone()),
    )));

    bind_submit_triggers(&session, &button, &input)?;
    leptos::logging::log!("connecting to {endpoint}");
    spawn_frame_client(session, endpoint, rx);
    Ok(())
}

fn websocket_supported(window: &web_sys::Window) -> bool {
    js_sys::Reflect::has(window, &wasm_bindgen::JsValue::from_str("WebSocket")).unwrap_or(false)
}

fn element_by_id<T: JsCast>(document: &web_sys::Document, id: &'static str) -> Result<T, ClientError> {
    document
        .get_element_by_id(id)
        .ok_or(ClientError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| ClientError::WrongElementType(id))
}

fn bind_submit_triggers(
    session: &Rc<RefCell<BrowserSession>>,
    button: &web_sys::HtmlElement,
    input: &web_sys::HtmlInputElement,
) -> Result<(), ClientError> {
    let click_session = Rc::clone(session);
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_event: web_sys::MouseEvent| {
        submit(&click_session);
    });
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| ClientError::Dom(format!("{e:?}")))?;
    on_click.forget();

    let key_session = Rc::clone(session);
    let on_keyup = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |event: web_sys::KeyboardEvent| {
        if is_confirm_key(&event.key(), event.key_code()) {
            submit(&key_session);
        }
    });
    input
        .add_event_listener_with_callback("keyup", on_keyup.as_ref().unchecked_ref())
        .map_err(|e| ClientError::Dom(format!("{e:?}")))?;
    on_keyup.forget();

    Ok(())
}

fn submit(session: &Rc<RefCell<BrowserSession>>) {
    match session.borrow_mut().submit() {
        Ok(Submission::Discarded(frame)) => {
            leptos::logging::debug_warn!("command not sent: {}", frame.payload());
        }
        Ok(_) => {}
        Err(e) => leptos::logging::warn!("submit failed: {e}"),
    }
}
