use cli::render::OutputFormat;
use cli::run_session;
use futures_util::{SinkExt, StreamExt};
use session::{CommandPolicy, DISCONNECT_NOTICE, ReconnectPolicy, SessionConfig};
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::time::{Duration, timeout};
use tokio_tungstenite::tungstenite::Message;

/// Accept one client, collect its first text frame, reply with `replies`,
/// then close the socket.
async fn spawn_server(replies: Vec<&'static str>) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let handle = tokio::spawn(async move {
        let (tcp, _) = listener.accept().await.expect("accept");
        let mut ws = tokio_tungstenite::accept_async(tcp).await.expect("handshake");
        let first = loop {
            let message = ws.next().await.expect("client frame").expect("ws ok");
            if let Message::Text(text) = message {
                break text.as_str().to_owned();
            }
        };
        for reply in replies {
            ws.send(Message::text(reply)).await.expect("send");
        }
        ws.close(None).await.expect("close");
        first
    });
    (format!("ws://{addr}/chat"), handle)
}

#[tokio::test]
async fn submitted_line_is_sent_and_replies_are_rendered() {
    let (endpoint, server) =
        spawn_server(vec!["MESSAGE:hi ann", "PING:ignored", "SERVER:disconnecting in 5s"]).await;
    let (mut stdin_tx, stdin_rx) = tokio::io::duplex(256);
    stdin_tx.write_all(b"hello\n").await.expect("write stdin");

    let mut out = Vec::new();
    timeout(
        Duration::from_secs(10),
        run_session(
            &endpoint,
            SessionConfig::default(),
            OutputFormat::Text,
            BufReader::new(stdin_rx),
            &mut out,
        ),
    )
    .await
    .expect("session should finish")
    .expect("session should succeed");

    assert_eq!(server.await.expect("server task"), "MESSAGE:hello");
    let printed = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(
        lines,
        vec![
            "hi ann".to_owned(),
            "[server] disconnecting in 5s".to_owned(),
            format!("*** {DISCONNECT_NOTICE}"),
        ]
    );
    drop(stdin_tx);
}

#[tokio::test]
async fn discarded_command_never_reaches_the_server() {
    let (endpoint, server) = spawn_server(vec![]).await;
    let (mut stdin_tx, stdin_rx) = tokio::io::duplex(256);
    stdin_tx.write_all(b"/nick bob\nafter\n").await.expect("write stdin");

    let mut out = Vec::new();
    timeout(
        Duration::from_secs(10),
        run_session(
            &endpoint,
            SessionConfig::default(),
            OutputFormat::Text,
            BufReader::new(stdin_rx),
            &mut out,
        ),
    )
    .await
    .expect("session should finish")
    .expect("session should succeed");

    assert_eq!(server.await.expect("server task"), "MESSAGE:after");
    drop(stdin_tx);
}

#[tokio::test]
async fn sent_command_reaches_the_server() {
    let (endpoint, server) = spawn_server(vec![]).await;
    let (mut stdin_tx, stdin_rx) = tokio::io::duplex(256);
    stdin_tx.write_all(b"/join lobby\n").await.expect("write stdin");

    let config = SessionConfig {
        command_policy: CommandPolicy::Send,
        ..SessionConfig::default()
    };
    let mut out = Vec::new();
    timeout(
        Duration::from_secs(10),
        run_session(&endpoint, config, OutputFormat::Json, BufReader::new(stdin_rx), &mut out),
    )
    .await
    .expect("session should finish")
    .expect("session should succeed");

    assert_eq!(server.await.expect("server task"), "COMMAND:join lobby");
    let printed = String::from_utf8(out).expect("utf8");
    let entry: serde_json::Value = serde_json::from_str(printed.trim()).expect("json line");
    assert_eq!(entry["kind"], "disconnect");
    drop(stdin_tx);
}

#[tokio::test]
async fn refused_connection_prints_notice_once_and_exits() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let (_stdin_tx, stdin_rx) = tokio::io::duplex(64);
    let mut out = Vec::new();
    timeout(
        Duration::from_secs(10),
        run_session(
            &format!("ws://{addr}/chat"),
            SessionConfig::default(),
            OutputFormat::Text,
            BufReader::new(stdin_rx),
            &mut out,
        ),
    )
    .await
    .expect("session should finish")
    .expect("session should succeed");

    let printed = String::from_utf8(out).expect("utf8");
    assert_eq!(printed.lines().count(), 1);
    assert!(printed.contains(DISCONNECT_NOTICE));
}

#[tokio::test]
async fn invalid_utf8_line_is_sent_with_replacement_characters() {
    let (endpoint, server) = spawn_server(vec![]).await;
    let (mut stdin_tx, stdin_rx) = tokio::io::duplex(256);
    stdin_tx.write_all(b"\xff\xfe bad\n").await.expect("write stdin");

    let mut out = Vec::new();
    timeout(
        Duration::from_secs(10),
        run_session(
            &endpoint,
            SessionConfig::default(),
            OutputFormat::Text,
            BufReader::new(stdin_rx),
            &mut out,
        ),
    )
    .await
    .expect("session should finish")
    .expect("invalid UTF-8 must not end the session with an error");

    assert_eq!(server.await.expect("server task"), "MESSAGE:\u{fffd}\u{fffd} bad");
    drop(stdin_tx);
}

fn fast_reconnect(max_attempts: u32) -> SessionConfig {
    SessionConfig {
        reconnect: ReconnectPolicy {
            max_attempts,
            initial_backoff: Duration::from_millis(10),
            max_backoff: Duration::from_millis(20),
        },
        ..SessionConfig::default()
    }
}

#[tokio::test]
async fn exhausted_reconnects_print_notice_once() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let (_stdin_tx, stdin_rx) = tokio::io::duplex(64);
    let mut out = Vec::new();
    timeout(
        Duration::from_secs(10),
        run_session(
            &format!("ws://{addr}/chat"),
            fast_reconnect(2),
            OutputFormat::Text,
            BufReader::new(stdin_rx),
            &mut out,
        ),
    )
    .await
    .expect("session should finish")
    .expect("session should succeed");

    let printed = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines, vec![format!("*** {DISCONNECT_NOTICE}")]);
}

#[tokio::test]
async fn reconnect_after_server_close_resumes_the_log() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let server = tokio::spawn(async move {
        let (tcp, _) = listener.accept().await.expect("first accept");
        let mut ws = tokio_tungstenite::accept_async(tcp).await.expect("first handshake");
        ws.close(None).await.expect("first close");

        let (tcp, _) = listener.accept().await.expect("second accept");
        // Any further attempt is refused.
        drop(listener);
        let mut ws = tokio_tungstenite::accept_async(tcp).await.expect("second handshake");
        ws.send(Message::text("MESSAGE:welcome back")).await.expect("send");
        ws.close(None).await.expect("second close");
    });

    let (_stdin_tx, stdin_rx) = tokio::io::duplex(64);
    let mut out = Vec::new();
    timeout(
        Duration::from_secs(10),
        run_session(
            &format!("ws://{addr}/chat"),
            fast_reconnect(1),
            OutputFormat::Text,
            BufReader::new(stdin_rx),
            &mut out,
        ),
    )
    .await
    .expect("session should finish")
    .expect("session should succeed");

    server.await.expect("server task");
    let printed = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines, vec!["welcome back".to_owned(), format!("*** {DISCONNECT_NOTICE}")]);
}
