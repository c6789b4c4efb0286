//! WebSocket frame client for the chat connection.
//!
//! The loop opens the socket, waits for the handshake, forwards outbound
//! text from the session's channel, and feeds inbound text frames to the
//! session. On disconnect it
//! asks the session what to do: sleep and reconnect, or stop for good.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::mpsc::UnboundedReceiver;
use session::CloseOutcome;

use crate::app::BrowserSession;
use crate::net::ready::open_when_ready;

/// Spawn the WebSocket lifecycle as a local async task.
pub fn spawn_frame_client(
    session: Rc<RefCell<BrowserSession>>,
    endpoint: String,
    rx: UnboundedReceiver<String>,
) {
    leptos::task::spawn_local(frame_client_loop(session, endpoint, rx));
}

async fn frame_client_loop(
    session: Rc<RefCell<BrowserSession>>,
    endpoint: String,
    mut rx: UnboundedReceiver<String>,
) {
    loop {
        match connect_and_run(&endpoint, &session, &mut rx).await {
            Ok(()) => leptos::logging::log!("WS disconnected"),
            Err(e) => leptos::logging::warn!("WS error: {e}"),
        }

        let outcome = session.borrow_mut().on_close();
        match outcome {
            CloseOutcome::Retry(delay) => gloo_timers::future::sleep(delay).await,
            CloseOutcome::Terminal => break,
        }
    }
}

/// Connect to the WebSocket and process messages until disconnect.
async fn connect_and_run(
    url: &str,
    session: &Rc<RefCell<BrowserSession>>,
    rx: &mut UnboundedReceiver<String>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::{Message, State};

    let mut ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    open_when_ready::<_, Message, _, _>(
        &mut ws,
        |ws| matches!(ws.state(), State::Open),
        || {
            // Frames from a previous connection are stale.
            while let Ok(Some(_)) = rx.try_next() {}
            session.borrow_mut().on_open();
        },
    )
    .await
    .map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    session.borrow_mut().on_frame(&text);
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("WS recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}
