//! WebSocket query channel.
//!
//! Responsibilities:
//! - Upgrade HTTP -> WS on `/ws`
//! - Per-connection receive loop: Text payload is a device id; reply with the
//!   current reading as JSON
//! - Unknown id: no reply, loop continues (pinned protocol behavior)
//! - Binary/Ping/Pong frames: ignored (axum answers pings itself)
//! - Close frame, receive error, or send error: loop ends; normal
//!   disconnection, never escalated
//!
//! Each connection runs independently and concurrently with the publisher;
//! both only read the registry, so no coordination is needed.

use axum::{
    extract::{ws::Message, ws::WebSocket, ws::WebSocketUpgrade, State},
    response::Response,
};
use futures_util::{SinkExt, StreamExt};

use sensorgrid_core::protocol::query::QueryReply;

use crate::app_state::AppState;

pub async fn ws_upgrade(State(app): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| async move {
        app.metrics().ws_upgrades.inc(&[]);
        app.metrics().ws_sessions_active.inc(&[]);
        run_session(&app, socket).await;
        app.metrics().ws_sessions_active.dec(&[]);
    })
}

async fn run_session(app: &AppState, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    while let Some(incoming) = ws_rx.next().await {
        let Ok(msg) = incoming else { break };

        match msg {
            Message::Text(device_id) => {
                // The whole payload is the id; no envelope, no trimming.
                let Some(device) = app.registry().get(&device_id) else {
                    app.metrics().queries.inc(&[("result", "miss")]);
                    tracing::debug!(%device_id, "query for unknown device dropped");
                    continue;
                };
                app.metrics().queries.inc(&[("result", "hit")]);

                let reply = match serde_json::to_string(&QueryReply::from(&device)) {
                    Ok(s) => s,
                    Err(e) => {
                        tracing::error!(%device_id, "reply encode failed: {e}");
                        continue;
                    }
                };
                if ws_tx.send(Message::Text(reply)).await.is_err() {
                    break;
                }
            }

            // Non-text frames carry no query; keep the loop alive.
            Message::Binary(_) | Message::Ping(_) | Message::Pong(_) => {}

            Message::Close(_) => break,
        }
    }

    tracing::debug!("query session closed");
}
