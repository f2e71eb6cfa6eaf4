use std::str::FromStr;

use anyhow::Context;
use sentry::integrations::debug_images::DebugImagesIntegration;
use sentry::types::Dsn;
use sentry::ClientOptions;
use sentry_tracing::EventFilter;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod bots;
mod config;
mod webhook;

fn init_sentry(dsn: &str) -> anyhow::Result<sentry::ClientInitGuard> {
    let options = ClientOptions {
        dsn: Some(Dsn::from_str(dsn).context("Cannot parse SENTRY_DSN")?),
        default_integrations: false,
        ..Default::default()
    }
    .add_integration(DebugImagesIntegration::new());

    Ok(sentry::init(options))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let sentry_guard = config::CONFIG
        .sentry_dsn
        .as_deref()
        .map(init_sentry)
        .transpose()?;

    let sentry_layer = sentry_guard.as_ref().map(|_| {
        sentry_tracing::layer().event_filter(|md| match md.level() {
            &tracing::Level::ERROR => EventFilter::Event,
            _ => EventFilter::Ignore,
        })
    });

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .with(sentry_layer)
        .init();

    let shutdown = CancellationToken::new();
    let token = shutdown.clone();

    ctrlc::set_handler(move || token.cancel()).context("Error setting Ctrl-C handler")?;

    webhook::start(shutdown).await
}
