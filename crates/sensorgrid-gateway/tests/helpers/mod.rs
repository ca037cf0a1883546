//! Shared helpers for gateway integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use sensorgrid_gateway::app_state::AppState;
use sensorgrid_gateway::config::GatewayConfig;
use sensorgrid_gateway::publisher::PublisherHandle;
use sensorgrid_gateway::router;

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub struct TestGateway {
    pub addr: SocketAddr,
    pub state: AppState,
    pub publisher: Option<PublisherHandle>,
}

/// Bind an ephemeral port, serve the router in the background, and start the
/// publisher cadence (long, so tests drive cycles via `publish_now`).
pub async fn spawn_gateway(cfg: GatewayConfig) -> TestGateway {
    let mut gw = spawn_gateway_without_publisher(cfg).await;
    gw.publisher = Some(PublisherHandle::spawn(
        gw.state.registry(),
        gw.state.metrics(),
        Duration::from_secs(3600),
    ));
    gw
}

/// Same, but with no publisher task at all: lets tests observe the gauge
/// store before any cycle has run.
pub async fn spawn_gateway_without_publisher(cfg: GatewayConfig) -> TestGateway {
    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestGateway {
        addr,
        state,
        publisher: None,
    }
}

impl TestGateway {
    pub fn publisher(&self) -> &PublisherHandle {
        self.publisher.as_ref().unwrap()
    }

    pub async fn scrape(&self) -> String {
        let url = format!("http://{}/metrics", self.addr);
        reqwest::get(url).await.unwrap().text().await.unwrap()
    }
}

pub async fn connect_ws(addr: SocketAddr) -> WsClient {
    let (ws, _) = connect_async(format!("ws://{addr}/ws")).await.unwrap();
    ws
}

/// Send a device-id query over an open channel.
pub async fn send_query(ws: &mut WsClient, device_id: &str) {
    ws.send(WsMessage::Text(device_id.into())).await.unwrap();
}

/// Receive one text frame, parsed as JSON.
pub async fn recv_json(ws: &mut WsClient) -> serde_json::Value {
    let msg = tokio::time::timeout(Duration::from_secs(2), ws.next())
        .await
        .expect("timed out waiting for reply")
        .expect("stream ended")
        .expect("ws error");
    match msg {
        WsMessage::Text(s) => serde_json::from_str(&s).unwrap(),
        other => panic!("expected text frame, got {other:?}"),
    }
}

/// Assert that no frame arrives within `wait` (distinguishes "no message"
/// from "error message").
pub async fn assert_silence(ws: &mut WsClient, wait: Duration) {
    let res = tokio::time::timeout(wait, ws.next()).await;
    assert!(res.is_err(), "expected silence, got {res:?}");
}
