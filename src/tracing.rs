use std::borrow::Cow;

use sentry::integrations::tracing::EventFilter;
use sentry::{ClientInitGuard, ClientOptions};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

/// Installs the console and Sentry subscribers.
///
/// The console prints `crowd_finder` and poem request spans at `info`, overridden by
/// `CROWD_FINDER_LOG`. Sentry gets our own events from `debug` up, overridden by
/// `CROWD_FINDER_SENTRY_LOG`: warnings and errors become events, the rest become breadcrumbs
/// attached to them. With no DSN the Sentry client is a no-op.
pub fn init(sentry_dsn: Option<String>, traces_sample_rate: f32) -> Result<ClientInitGuard> {
    let guard = sentry::init((
        sentry_dsn,
        ClientOptions {
            release: Some(Cow::Borrowed(env!("CARGO_PKG_VERSION"))),
            traces_sample_rate,
            ..Default::default()
        },
    ));

    let sentry_filter = EnvFilter::try_from_env("CROWD_FINDER_SENTRY_LOG")
        .or_else(|_| EnvFilter::try_new("crowd_finder=debug"))?;
    let sentry_layer = sentry::integrations::tracing::layer()
        .event_filter(|metadata| match metadata.level() {
            &Level::ERROR | &Level::WARN => EventFilter::Event,
            &Level::INFO | &Level::DEBUG | &Level::TRACE => EventFilter::Breadcrumb,
        })
        .span_filter(|metadata| matches!(metadata.level(), &Level::ERROR | &Level::WARN | &Level::INFO))
        .with_filter(sentry_filter);

    let format_filter = EnvFilter::try_from_env("CROWD_FINDER_LOG")
        .or_else(|_| EnvFilter::try_new("crowd_finder=info,poem=info"))?;
    let format_layer = tracing_subscriber::fmt::layer().with_filter(format_filter);

    tracing_subscriber::Registry::default()
        .with(sentry_layer)
        .with(format_layer)
        .try_init()
        .context("failed to install the tracing subscriber")?;

    Ok(guard)
}
