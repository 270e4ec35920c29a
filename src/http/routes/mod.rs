use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::global::Global;

pub mod games;
pub mod schedule;

pub fn routes() -> Router<Arc<Global>> {
    Router::new()
        .route("/", get(root))
        .merge(schedule::routes())
        .merge(games::routes())
}

#[derive(serde::Serialize)]
pub(crate) struct RootResponse {
    message: &'static str,
    version: &'static str,
    uptime: u64,
    endpoints: Vec<&'static str>,
}

#[tracing::instrument(skip(global))]
pub(crate) async fn root(State(global): State<Arc<Global>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "NHL Schedule API",
        version: env!("CARGO_PKG_VERSION"),
        uptime: global.started_at.elapsed().as_secs(),
        endpoints: vec!["/nhl/schedule", "/nhl/games"],
    })
}
