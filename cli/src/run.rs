//! Connection loop for the terminal client.
//!
//! SYSTEM CONTEXT
//! ==============
//! One task owns the session and multiplexes socket reads with stdin lines
//! through `tokio::select!`, so every handler runs to completion before the
//! next event. Outbound frames land in the [`Outbox`] and are flushed to the
//! socket right after the submit that produced them.

use std::io::Write;

use futures_util::{Sink, SinkExt, StreamExt};
use session::{ChatSession, CloseOutcome, SessionConfig, Submission};
use tokio::io::{AsyncBufRead, AsyncRead, AsyncWrite, BufReader};
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{WebSocketStream, connect_async};

use crate::input::LossyLines;
use crate::outbox::{LineInput, Outbox};
use crate::render::{OutputFormat, TerminalLog};
use crate::{Cli, CliError};

type CliSession<W> = ChatSession<Outbox, TerminalLog<W>, LineInput>;

#[derive(Debug, PartialEq, Eq)]
enum ConnectionEnd {
    /// Socket closed by either side.
    Closed,
    /// Stdin reached EOF; the user is done.
    InputClosed,
}

/// Run the terminal client against stdin and stdout.
///
/// # Errors
///
/// Returns [`CliError::InvalidEndpoint`] for a non-WebSocket URL and
/// [`CliError::Input`] if stdin fails.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let endpoint = cli.checked_endpoint()?.to_owned();
    let input = BufReader::new(tokio::io::stdin());
    run_session(
        &endpoint,
        cli.session_config(),
        cli.output_format(),
        input,
        std::io::stdout(),
    )
    .await
}

/// Run one chat session until the connection is terminally closed or the
/// input ends.
///
/// # Errors
///
/// Returns [`CliError::Input`] if reading `input` fails. Invalid UTF-8 in a
/// line is not a failure; the bad bytes are replaced and the line is sent.
pub async fn run_session<R, W>(
    endpoint: &str,
    config: SessionConfig,
    format: OutputFormat,
    input: R,
    output: W,
) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = ChatSession::new(
        config,
        Outbox::default(),
        TerminalLog::new(output, format),
        LineInput::default(),
    );
    let mut lines = LossyLines::new(input);

    loop {
        match connect_async(endpoint).await {
            Ok((ws, _response)) => {
                tracing::info!(endpoint, "connected");
                session.on_open();
                if drive_connection(&mut session, ws, &mut lines).await? == ConnectionEnd::InputClosed {
                    return Ok(());
                }
            }
            Err(error) => {
                tracing::warn!(%error, endpoint, "websocket connect failed");
            }
        }

        match session.on_close() {
            CloseOutcome::Retry(delay) => tokio::time::sleep(delay).await,
            CloseOutcome::Terminal => return Ok(()),
        }
    }
}

async fn drive_connection<S, R, W>(
    session: &mut CliSession<W>,
    ws: WebSocketStream<S>,
    lines: &mut LossyLines<R>,
) -> Result<ConnectionEnd, CliError>
where
    S: AsyncRead + AsyncWrite + Unpin,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (mut sink, mut stream) = ws.split();

    loop {
        tokio::select! {
            message = stream.next() => match message {
                Some(Ok(Message::Text(text))) => {
                    session.on_frame(text.as_str());
                }
                Some(Ok(Message::Close(_))) | None => return Ok(ConnectionEnd::Closed),
                Some(Ok(_)) => {}
                Some(Err(error)) => {
                    tracing::warn!(%error, "websocket receive failed");
                    return Ok(ConnectionEnd::Closed);
                }
            },
            line = lines.next_line() => match line? {
                Some(line) => {
                    session.input_mut().set(line);
                    match session.submit() {
                        Ok(Submission::Discarded(frame)) => {
                            tracing::info!(command = frame.payload(), "command not sent");
                        }
                        Ok(_) => {}
                        Err(error) => tracing::warn!(%error, "submit failed"),
                    }
                    if let Err(error) = flush(session.transport_mut(), &mut sink).await {
                        tracing::warn!(%error, "websocket send failed");
                        return Ok(ConnectionEnd::Closed);
                    }
                }
                None => {
                    if let Err(error) = sink.close().await {
                        tracing::debug!(%error, "websocket close failed");
                    }
                    return Ok(ConnectionEnd::InputClosed);
                }
            },
        }
    }
}

async fn flush<K>(outbox: &mut Outbox, sink: &mut K) -> Result<(), tungstenite::Error>
where
    K: Sink<Message, Error = tungstenite::Error> + Unpin,
{
    while let Some(text) = outbox.pop() {
        sink.send(Message::text(text)).await?;
    }
    Ok(())
}
