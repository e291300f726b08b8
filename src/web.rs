use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, Endpoint, EndpointExt, Route, Server};

use crate::catalog::Catalog;
use crate::predictor::Predictor;
use crate::prelude::*;
use crate::web::middleware::{ErrorMiddleware, SecurityHeadersMiddleware, SentryMiddleware};

mod middleware;
mod partials;
mod views;

#[cfg(test)]
mod test;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the application with the model and the catalog attached as request data.
pub fn create_app(predictor: Predictor, catalog: Arc<Catalog>) -> impl Endpoint {
    Route::new()
        .at("/", get(views::index::get_index).post(views::index::post_index))
        .at("/health", get(views::health::get_health))
        .data(predictor)
        .data(catalog)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SecurityHeadersMiddleware)
        .with(SentryMiddleware)
}

pub async fn run(host: &str, port: u16, predictor: Predictor, catalog: Arc<Catalog>) -> Result {
    let address = IpAddr::from_str(host).with_context(|| format!("invalid host `{}`", host))?;
    let app = create_app(predictor, catalog);
    info!(%address, port, "listening…");
    Server::new(TcpListener::bind((address, port)))
        .run_with_graceful_shutdown(app, wait_for_shutdown(), Some(SHUTDOWN_TIMEOUT))
        .await
        .context("the web server has failed")?;
    info!("stopped");
    Ok(())
}

async fn wait_for_shutdown() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down…"),
        Err(error) => error!("failed to listen for the shutdown signal: {:#}", error),
    }
}
