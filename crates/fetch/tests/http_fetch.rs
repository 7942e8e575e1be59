//! Fetcher behavior against a canned local HTTP server.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use traceview_core::SourceLocator;
use traceview_fetch::{AssetFetcher, FetchError};

/// Serve exactly one connection with a canned response, reporting the
/// request line (e.g. `GET /path HTTP/1.1`) through the returned receiver.
async fn serve_once(response: Vec<u8>) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let n = socket.read(&mut buf).await.unwrap();
        let head = String::from_utf8_lossy(&buf[..n]);
        let request_line = head.lines().next().unwrap_or_default().to_owned();
        let _ = tx.send(request_line);

        socket.write_all(&response).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    (format!("http://{addr}"), rx)
}

#[tokio::test]
async fn success_with_content_length_reports_progress() {
    let body = b"{\"traceEvents\":[1,2,3]}";
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes()
    .into_iter()
    .chain(body.iter().copied())
    .collect();
    let (base, _rx) = serve_once(response).await;

    let fetcher = AssetFetcher::new();
    let mut events = Vec::new();
    let asset = fetcher
        .fetch(&SourceLocator::new(format!("{base}/t.json")), |e| {
            events.push(e)
        })
        .await
        .unwrap();

    assert_eq!(asset.status(), 200);
    assert_eq!(asset.body(), body);
    assert!(!events.is_empty());
    let last = events.last().unwrap();
    assert_eq!(last.loaded, body.len() as u64);
    assert_eq!(last.total, Some(body.len() as u64));
}

#[tokio::test]
async fn missing_content_length_leaves_total_unknown() {
    let response =
        b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\nhello trace".to_vec();
    let (base, _rx) = serve_once(response).await;

    let fetcher = AssetFetcher::new();
    let mut events = Vec::new();
    let asset = fetcher
        .fetch(&SourceLocator::new(format!("{base}/t.json")), |e| {
            events.push(e)
        })
        .await
        .unwrap();

    assert_eq!(asset.text(), "hello trace");
    assert!(events.iter().all(|e| e.total.is_none()));
}

#[tokio::test]
async fn traces_path_is_rewritten_on_the_wire() {
    let response = b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok".to_vec();
    let (base, rx) = serve_once(response).await;

    let fetcher = AssetFetcher::new();
    fetcher
        .fetch(&SourceLocator::new(format!("{base}/o/traces/run1.json")), |_| {})
        .await
        .unwrap();

    let request_line = rx.await.unwrap();
    assert_eq!(request_line, "GET /o/traces%2Frun1.json HTTP/1.1");
}

#[tokio::test]
async fn non_2xx_resolves_to_a_status_failure() {
    let response = b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        .to_vec();
    let (base, _rx) = serve_once(response).await;

    let fetcher = AssetFetcher::new();
    let err = fetcher
        .fetch(&SourceLocator::new(format!("{base}/missing.json")), |_| {})
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404 }));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn connection_failure_resolves_to_a_transport_failure() {
    // Bind then drop to get an address nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = AssetFetcher::new();
    let err = fetcher
        .fetch(&SourceLocator::new(format!("http://{addr}/t.json")), |_| {})
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport { .. }));
    assert_eq!(err.status(), None);
}
