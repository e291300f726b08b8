use poem::http::StatusCode;
use poem::web::Data;
use poem::{handler, IntoResponse, Response};

use crate::catalog::Catalog;
use crate::prelude::*;

const CACHE_CONTROL: &str = "no-cache";

/// Liveness probe.
#[handler]
#[instrument(skip_all, level = "debug")]
pub async fn get_health(Data(catalog): Data<&Arc<Catalog>>) -> impl IntoResponse {
    debug!(n_locations = catalog.len());
    Response::from(StatusCode::NO_CONTENT).with_header("Cache-Control", CACHE_CONTROL)
}
