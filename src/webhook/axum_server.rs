use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use axum_prometheus::PrometheusMetricLayer;
use teloxide::types::Update;
use tokio_util::sync::CancellationToken;
use tower_http::trace::{self, TraceLayer};
use tracing::{debug, info, Level};

use crate::bots::UpdateDispatcher;

use super::error_reporter::{report_error, ErrorSource};

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<UpdateDispatcher>,
    pub shutdown: CancellationToken,
    pub log_raw_updates: bool,
}

async fn telegram_request(State(state): State<AppState>, input: Bytes) -> StatusCode {
    if state.log_raw_updates {
        debug!(body = %String::from_utf8_lossy(&input), "Raw update");
    }

    match serde_json::from_slice::<Update>(&input) {
        Ok(update) => {
            let cancel = state.shutdown.child_token();

            if let Err(err) = state.dispatcher.handle_update(update, &cancel).await {
                report_error(err.as_ref(), ErrorSource::HandleUpdate);
            }
        }
        Err(err) => report_error(&err, ErrorSource::ParseUpdate),
    }

    StatusCode::OK
}

async fn status() -> &'static str {
    "Bot is running"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/bot", post(telegram_request).get(status))
        .with_state(state)
}

pub async fn start_axum_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let shutdown = state.shutdown.clone();

    let app = router(state)
        .layer(prometheus_layer)
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "Start webserver...");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Webserver shutdown...");

    Ok(())
}
