//! sensorgrid gateway binary.
//!
//! - Seeds the device registry from config (or built-in defaults)
//! - Starts the metrics publisher cadence before accepting traffic
//! - Serves `/metrics` + `/ws` on one listener until externally terminated

use std::net::SocketAddr;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use sensorgrid_gateway::{app_state, config, publisher, router};

const CONFIG_PATH: &str = "sensorgrid.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_or_default(CONFIG_PATH).expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");
    let cadence = Duration::from_millis(cfg.gateway.publish_interval_ms);

    let state = app_state::AppState::new(cfg);

    // Background cadence; the handle must outlive serve() or the task stops.
    let _publisher =
        publisher::PublisherHandle::spawn(state.registry(), state.metrics(), cadence);

    let app = router::build_router(state);

    tracing::info!(%listen, "sensorgrid-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
