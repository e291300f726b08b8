use clap::Parser;

use crate::catalog::Catalog;
use crate::opts::Opts;
use crate::predictor::Predictor;
use crate::prelude::*;

mod catalog;
mod opts;
mod predictor;
mod prelude;
mod tracing;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = crate::tracing::init(opts.sentry_dsn, opts.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    let predictor = Predictor::fit()?;
    let regression = predictor.regression();
    info!(regression.slope, regression.intercept, "fitted the crowd model");

    let catalog = Arc::new(Catalog::load(&opts.locations)?);
    if catalog.is_empty() {
        warn!(path = ?opts.locations, "the location catalog is empty");
    }

    web::run(&opts.host, opts.port, predictor, catalog).await
}
