//! Axum router wiring.
//!
//! Exposes a single update route; the three path segments are handed to the
//! core unmodified.

use axum::{routing::post, Router};

use crate::{app_state::AppState, ingest};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/update/:kind/:name/:value", post(ingest::handle_update))
        .with_state(state)
}
